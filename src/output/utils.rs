//! Shared utility functions for output formatting

use crate::tree::{Node, format_size};

use super::config::OutputConfig;

/// Render a byte count according to the output configuration.
pub fn size_label(bytes: u64, config: &OutputConfig) -> String {
    if config.human_sizes {
        format_size(bytes)
    } else {
        format!("{} bytes", bytes)
    }
}

/// The parenthesized details shown after a node: size, and child count for
/// directories.
pub fn node_details(node: &Node, config: &OutputConfig) -> String {
    let size = size_label(node.size(), config);
    if node.is_dir() {
        let count = node.children().len();
        let noun = if count == 1 { "child" } else { "children" };
        format!("({} {}, {})", count, noun, size)
    } else {
        format!("({})", size)
    }
}

/// Calculate the prefix for the children of an entry.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

/// Escape text for inclusion in HTML element content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
