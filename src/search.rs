//! Aggregate queries over a built tree
//!
//! Every query takes the tree as `Option<&Node>` so an absent tree simply
//! yields no results. The free functions re-traverse the tree on each call;
//! [`TreeIndex`] collects files and directories once and answers any number
//! of queries from that.

use std::ffi::OsString;

use serde::Serialize;

use crate::tree::Node;

/// Every node sharing the winning measure of a ranking query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked<'a, T> {
    pub value: T,
    pub nodes: Vec<&'a Node>,
}

/// Every file in the tree, in pre-order.
pub fn collect_files(tree: Option<&Node>) -> Vec<&Node> {
    tree.into_iter()
        .flat_map(Node::walk)
        .filter(|n| n.is_file())
        .collect()
}

/// Every directory in the tree, root included, in pre-order.
pub fn collect_directories(tree: Option<&Node>) -> Vec<&Node> {
    tree.into_iter()
        .flat_map(Node::walk)
        .filter(|n| n.is_dir())
        .collect()
}

pub fn largest_files(tree: Option<&Node>) -> Option<Ranked<'_, u64>> {
    TreeIndex::new(tree).largest_files()
}

pub fn files_larger_than(tree: Option<&Node>, threshold: u64) -> Vec<&Node> {
    TreeIndex::new(tree).files_larger_than(threshold)
}

pub fn most_children(tree: Option<&Node>) -> Option<Ranked<'_, usize>> {
    TreeIndex::new(tree).most_children()
}

pub fn files_with_extension<'a>(tree: Option<&'a Node>, extension: &str) -> Vec<&'a Node> {
    TreeIndex::new(tree).files_with_extension(extension)
}

pub fn empty_directories(tree: Option<&Node>) -> Vec<&Node> {
    TreeIndex::new(tree).empty_directories()
}

/// Files and directories of one tree, collected once.
#[derive(Debug, Clone, Default)]
pub struct TreeIndex<'a> {
    files: Vec<&'a Node>,
    directories: Vec<&'a Node>,
}

impl<'a> TreeIndex<'a> {
    pub fn new(tree: Option<&'a Node>) -> Self {
        Self {
            files: collect_files(tree),
            directories: collect_directories(tree),
        }
    }

    pub fn files(&self) -> &[&'a Node] {
        &self.files
    }

    pub fn directories(&self) -> &[&'a Node] {
        &self.directories
    }

    /// All files of maximum size. `None` when the tree has no files.
    pub fn largest_files(&self) -> Option<Ranked<'a, u64>> {
        ranked(&self.files, Node::size)
    }

    /// Files strictly larger than `threshold` bytes.
    pub fn files_larger_than(&self, threshold: u64) -> Vec<&'a Node> {
        self.files
            .iter()
            .copied()
            .filter(|f| f.size() > threshold)
            .collect()
    }

    /// All directories with the highest number of direct children. `None`
    /// when the tree has no directories.
    pub fn most_children(&self) -> Option<Ranked<'a, usize>> {
        ranked(&self.directories, |d| d.children().len())
    }

    /// Files whose extension, written with its leading dot, is exactly
    /// `extension`. Files without an extension match `""`.
    pub fn files_with_extension(&self, extension: &str) -> Vec<&'a Node> {
        self.files
            .iter()
            .copied()
            .filter(|f| dotted_extension(f) == extension)
            .collect()
    }

    /// Directories with no children left after exclusions.
    pub fn empty_directories(&self) -> Vec<&'a Node> {
        self.directories
            .iter()
            .copied()
            .filter(|d| d.children().is_empty())
            .collect()
    }
}

fn ranked<'a, T, F>(nodes: &[&'a Node], measure: F) -> Option<Ranked<'a, T>>
where
    T: Ord + Copy,
    F: Fn(&Node) -> T,
{
    let value = nodes.iter().map(|n| measure(*n)).max()?;
    let nodes = nodes
        .iter()
        .copied()
        .filter(|n| measure(*n) == value)
        .collect();
    Some(Ranked { value, nodes })
}

fn dotted_extension(node: &Node) -> OsString {
    match node.path().extension() {
        Some(ext) => {
            let mut dotted = OsString::from(".");
            dotted.push(ext);
            dotted
        }
        None => OsString::new(),
    }
}

/// One query together with its parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "name", content = "argument", rename_all = "snake_case")]
pub enum Query {
    Largest,
    LargerThan(u64),
    MostChildren,
    Extension(String),
    EmptyDirectories,
}

/// What a query found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome<'a> {
    Hits(Vec<&'a Node>),
    /// A file ranking ran over a tree without files.
    NoFiles,
    /// A directory ranking ran over a tree without directories.
    NoDirectories,
}

/// A query and its outcome, ready for rendering.
#[derive(Debug, Clone)]
pub struct QueryReport<'q, 'a> {
    pub query: &'q Query,
    pub outcome: QueryOutcome<'a>,
}

impl<'a> QueryOutcome<'a> {
    /// The matched nodes, empty for the "nothing to rank" outcomes.
    pub fn hits(&self) -> &[&'a Node] {
        match self {
            QueryOutcome::Hits(nodes) => nodes,
            QueryOutcome::NoFiles | QueryOutcome::NoDirectories => &[],
        }
    }
}

impl Query {
    pub fn run<'q, 'a>(&'q self, index: &TreeIndex<'a>) -> QueryReport<'q, 'a> {
        let outcome = match self {
            Query::Largest => index
                .largest_files()
                .map_or(QueryOutcome::NoFiles, |r| QueryOutcome::Hits(r.nodes)),
            Query::LargerThan(threshold) => {
                QueryOutcome::Hits(index.files_larger_than(*threshold))
            }
            Query::MostChildren => index
                .most_children()
                .map_or(QueryOutcome::NoDirectories, |r| QueryOutcome::Hits(r.nodes)),
            Query::Extension(ext) => QueryOutcome::Hits(index.files_with_extension(ext)),
            Query::EmptyDirectories => QueryOutcome::Hits(index.empty_directories()),
        };
        QueryReport {
            query: self,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn file(path: &str, size: u64) -> Node {
        let path = PathBuf::from(path);
        Node::File {
            name: path.file_name().unwrap().to_string_lossy().to_string(),
            path,
            size,
        }
    }

    fn dir(path: &str, children: Vec<Node>) -> Node {
        let path = PathBuf::from(path);
        Node::Directory {
            name: path.file_name().unwrap().to_string_lossy().to_string(),
            size: children.iter().map(Node::size).sum(),
            path,
            children,
        }
    }

    fn paths(nodes: &[&Node]) -> Vec<String> {
        nodes.iter().map(|n| n.path().display().to_string()).collect()
    }

    fn sample_tree() -> Node {
        dir(
            "root",
            vec![
                file("root/a.txt", 100),
                dir(
                    "root/docs",
                    vec![
                        file("root/docs/b.txt", 100),
                        file("root/docs/c.md", 50),
                        file("root/docs/report.TXT", 10),
                    ],
                ),
                dir(
                    "root/src",
                    vec![
                        file("root/src/main.rs", 20),
                        file("root/src/lib.rs", 0),
                        dir("root/src/empty", vec![]),
                    ],
                ),
                file("root/README", 1),
            ],
        )
    }

    #[test]
    fn test_collect_files_and_directories() {
        let tree = sample_tree();
        assert_eq!(collect_files(Some(&tree)).len(), 7);
        assert_eq!(
            paths(&collect_directories(Some(&tree))),
            vec!["root", "root/docs", "root/src", "root/src/empty"]
        );
    }

    #[test]
    fn test_largest_files_reports_all_ties() {
        let tree = sample_tree();
        let largest = largest_files(Some(&tree)).unwrap();
        assert_eq!(largest.value, 100);
        assert_eq!(paths(&largest.nodes), vec!["root/a.txt", "root/docs/b.txt"]);
    }

    #[test]
    fn test_largest_files_without_files_is_none() {
        let tree = dir("root", vec![dir("root/empty", vec![])]);
        assert_eq!(largest_files(Some(&tree)), None);
    }

    #[test]
    fn test_larger_than_is_strict() {
        let tree = dir("root", vec![file("root/ten", 10), file("root/twenty", 20)]);
        assert_eq!(paths(&files_larger_than(Some(&tree), 10)), vec!["root/twenty"]);
    }

    #[test]
    fn test_larger_than_zero_skips_empty_files() {
        let tree = sample_tree();
        let hits = files_larger_than(Some(&tree), 0);
        assert_eq!(hits.len(), 6);
        assert!(!paths(&hits).contains(&"root/src/lib.rs".to_string()));
    }

    #[test]
    fn test_most_children_reports_all_ties() {
        let tree = sample_tree();
        let most = most_children(Some(&tree)).unwrap();
        assert_eq!(most.value, 4);
        assert_eq!(paths(&most.nodes), vec!["root"]);

        let tied = dir(
            "top",
            vec![
                dir("top/x", vec![file("top/x/1", 1), file("top/x/2", 1), file("top/x/3", 1)]),
                dir("top/y", vec![file("top/y/1", 1), file("top/y/2", 1), file("top/y/3", 1)]),
                dir("top/z", vec![file("top/z/1", 1)]),
            ],
        );
        let most = most_children(Some(&tied)).unwrap();
        assert_eq!(most.value, 3);
        assert_eq!(paths(&most.nodes), vec!["top", "top/x", "top/y"]);
    }

    #[test]
    fn test_most_children_counts_direct_children_only() {
        let tree = dir(
            "root",
            vec![dir(
                "root/deep",
                vec![file("root/deep/a", 1), file("root/deep/b", 1)],
            )],
        );
        let most = most_children(Some(&tree)).unwrap();
        assert_eq!(paths(&most.nodes), vec!["root/deep"]);
    }

    #[test]
    fn test_extension_match_is_literal() {
        let tree = sample_tree();
        assert_eq!(
            paths(&files_with_extension(Some(&tree), ".txt")),
            vec!["root/a.txt", "root/docs/b.txt"]
        );
        assert_eq!(
            paths(&files_with_extension(Some(&tree), ".TXT")),
            vec!["root/docs/report.TXT"]
        );
        assert!(files_with_extension(Some(&tree), "txt").is_empty());
    }

    #[test]
    fn test_extension_edge_cases() {
        let tree = dir(
            "root",
            vec![
                file("root/Makefile", 1),
                file("root/.bashrc", 1),
                file("root/trailing.", 1),
                file("root/archive.tar.gz", 1),
            ],
        );
        assert_eq!(
            paths(&files_with_extension(Some(&tree), "")),
            vec!["root/Makefile", "root/.bashrc"]
        );
        assert_eq!(
            paths(&files_with_extension(Some(&tree), ".")),
            vec!["root/trailing."]
        );
        assert_eq!(
            paths(&files_with_extension(Some(&tree), ".gz")),
            vec!["root/archive.tar.gz"]
        );
    }

    #[test]
    fn test_empty_directories() {
        let tree = sample_tree();
        assert_eq!(paths(&empty_directories(Some(&tree))), vec!["root/src/empty"]);

        let lone = dir("lone", vec![]);
        assert_eq!(paths(&empty_directories(Some(&lone))), vec!["lone"]);
    }

    #[test]
    fn test_absent_tree_yields_nothing() {
        assert!(collect_files(None).is_empty());
        assert!(collect_directories(None).is_empty());
        assert_eq!(largest_files(None), None);
        assert!(files_larger_than(None, 0).is_empty());
        assert_eq!(most_children(None), None);
        assert!(files_with_extension(None, ".txt").is_empty());
        assert!(empty_directories(None).is_empty());
    }

    #[test]
    fn test_query_run_distinguishes_nothing_to_rank() {
        let index = TreeIndex::new(None);
        assert_eq!(Query::Largest.run(&index).outcome, QueryOutcome::NoFiles);
        assert_eq!(
            Query::MostChildren.run(&index).outcome,
            QueryOutcome::NoDirectories
        );
        assert_eq!(
            Query::EmptyDirectories.run(&index).outcome,
            QueryOutcome::Hits(vec![])
        );
    }

    #[test]
    fn test_query_run_uses_parameters() {
        let tree = sample_tree();
        let index = TreeIndex::new(Some(&tree));

        let query = Query::LargerThan(50);
        let report = query.run(&index);
        assert_eq!(paths(report.outcome.hits()), vec!["root/a.txt", "root/docs/b.txt"]);

        let query = Query::Extension(".md".to_string());
        assert_eq!(paths(query.run(&index).outcome.hits()), vec!["root/docs/c.md"]);
    }

    #[test]
    fn test_single_file_tree() {
        let tree = file("solo.txt", 3);
        assert_eq!(paths(&largest_files(Some(&tree)).unwrap().nodes), vec!["solo.txt"]);
        assert_eq!(most_children(Some(&tree)), None);
    }
}
