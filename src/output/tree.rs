//! Tree formatter for console output
//!
//! This module provides `TreeFormatter` which renders a complete `Node`
//! tree with box-drawing connectors, either into a string or to a colored
//! stream.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::tree::Node;

use super::config::OutputConfig;
use super::utils::{child_prefix, node_details};

/// Formatter for the full tree view.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render to a plain string, without colors.
    pub fn format(&self, node: &Node) -> String {
        let mut buffer = NoColor::new(Vec::new());
        // Writing into a Vec cannot fail.
        let _ = self.render(node, &mut buffer);
        String::from_utf8_lossy(&buffer.into_inner()).into_owned()
    }

    pub fn print(&self, node: &Node) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.render(node, &mut stdout)
    }

    /// Render the tree followed by the directory/file count summary.
    pub fn render<W: WriteColor>(&self, node: &Node, out: &mut W) -> io::Result<()> {
        let (dir_count, file_count) = self.render_node(node, out, "", true, true)?;
        writeln!(out)?;
        writeln!(out, "{} directories, {} files", dir_count, file_count)?;
        Ok(())
    }

    fn render_node<W: WriteColor>(
        &self,
        node: &Node,
        out: &mut W,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> io::Result<(usize, usize)> {
        if !is_root {
            let connector = if is_last { "└── " } else { "├── " };
            write!(out, "{}{}", prefix, connector)?;
        }

        match node {
            Node::File { name, .. } => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
                write!(out, "{}", name)?;
                self.write_details(node, out)?;
                Ok((0, 1))
            }
            Node::Directory { name, children, .. } => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(out, "{}", name)?;
                self.write_details(node, out)?;

                let new_prefix = if is_root {
                    String::new()
                } else {
                    child_prefix(prefix, is_last)
                };

                let mut dir_count = 0;
                let mut file_count = 0;

                for (i, child) in children.iter().enumerate() {
                    let child_is_last = i == children.len() - 1;
                    let (d, f) = self.render_node(child, out, &new_prefix, child_is_last, false)?;
                    dir_count += d;
                    file_count += f;
                    if child.is_dir() {
                        dir_count += 1;
                    }
                }

                Ok((dir_count, file_count))
            }
        }
    }

    fn write_details<W: WriteColor>(&self, node: &Node, out: &mut W) -> io::Result<()> {
        out.reset()?;
        write!(out, " ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", node_details(node, &self.config))?;
        out.reset()?;
        writeln!(out)
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

    fn formatter() -> TreeFormatter {
        TreeFormatter::new(OutputConfig {
            use_color: false,
            human_sizes: false,
        })
    }

    #[test]
    fn test_format_full_tree() {
        let tree = dir(
            "project",
            vec![
                dir("project/src", vec![file("project/src/main.rs", 40)]),
                file("project/README.md", 2),
            ],
        );

        let output = formatter().format(&tree);
        let expected = "\
project (2 children, 42 bytes)
├── src (1 child, 40 bytes)
│   └── main.rs (40 bytes)
└── README.md (2 bytes)

1 directories, 2 files
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_format_nested_last_branch_uses_blank_prefix() {
        let tree = dir(
            "r",
            vec![dir("r/a", vec![dir("r/a/b", vec![file("r/a/b/c", 1)])])],
        );

        let output = formatter().format(&tree);
        assert!(output.contains("└── a (1 child, 1 bytes)"));
        assert!(output.contains("    └── b (1 child, 1 bytes)"));
        assert!(output.contains("        └── c (1 bytes)"));
        assert!(output.ends_with("2 directories, 1 files\n"));
    }

    #[test]
    fn test_format_empty_root() {
        let output = formatter().format(&dir("empty", vec![]));
        assert_eq!(output, "empty (0 children, 0 bytes)\n\n0 directories, 0 files\n");
    }

    #[test]
    fn test_format_human_sizes() {
        let tree = dir("r", vec![file("r/big", 3 * 1024 * 1024)]);
        let output = TreeFormatter::new(OutputConfig {
            use_color: false,
            human_sizes: true,
        })
        .format(&tree);
        assert!(output.contains("└── big (3.0M)"));
    }

    #[test]
    fn test_render_with_colors_keeps_text() {
        let tree = dir("r", vec![file("r/x", 5)]);
        let mut buffer = termcolor::Ansi::new(Vec::new());
        formatter().render(&tree, &mut buffer).unwrap();
        let output = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(output.contains("\x1b["), "expected escape codes: {:?}", output);
        assert!(output.contains("(5 bytes)"));
    }
}
