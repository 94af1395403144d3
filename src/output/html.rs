//! HTML report export
//!
//! The report is the plain tree view wrapped in a minimal HTML document.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::tree::Node;

use super::config::OutputConfig;
use super::tree::TreeFormatter;
use super::utils::escape_html;

/// Render the tree as a standalone HTML document.
pub fn render_html(node: &Node, config: &OutputConfig) -> String {
    let plain = OutputConfig {
        use_color: false,
        ..config.clone()
    };
    let body = TreeFormatter::new(plain).format(node);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <title>File Tree</title>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(&node.path().display().to_string())));
    html.push_str("<pre>\n");
    html.push_str(&escape_html(&body));
    html.push_str("</pre>\n</body>\n</html>\n");
    html
}

/// Write the HTML report for `node` to `path`.
pub fn export_html(node: &Node, path: &Path, config: &OutputConfig) -> io::Result<()> {
    fs::write(path, render_html(node, config))?;
    debug!(path = %path.display(), "wrote html report");
    Ok(())
}
