//! In-memory tree nodes

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::utils::serialize_path_lossy;

/// The two kinds of entry that make it into a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// One filesystem entry and, for directories, the subtree below it.
///
/// A directory owns its children by value and its `size` is the sum of its
/// children's sizes, fixed at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File {
        name: String,
        #[serde(serialize_with = "serialize_path_lossy")]
        path: PathBuf,
        size: u64,
    },
    Directory {
        name: String,
        #[serde(serialize_with = "serialize_path_lossy")]
        path: PathBuf,
        size: u64,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. } => name,
            Node::Directory { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Node::File { path, .. } => path,
            Node::Directory { path, .. } => path,
        }
    }

    /// Byte count: own length for files, aggregated length for directories.
    pub fn size(&self) -> u64 {
        match self {
            Node::File { size, .. } | Node::Directory { size, .. } => *size,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::File { .. } => NodeKind::File,
            Node::Directory { .. } => NodeKind::Directory,
        }
    }

    /// Direct children. Always empty for files.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::File { .. } => &[],
            Node::Directory { children, .. } => children,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    /// Visit this node and every descendant, parents before children.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

/// Pre-order iterator over a subtree, see [`Node::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the first child comes out first.
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
