//! Tree and query result formatting
//!
//! This module provides formatters for outputting trees and query results:
//! - Console tree view with colors
//! - HTML report
//! - JSON output
//! - Plain text query reports
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Shared utility functions (size labels, prefixes, escaping)
//! - `tree` - Tree formatter for complete tree structures
//! - `html` - HTML report export
//! - `json` - JSON output
//! - `report` - Query report rendering

mod config;
mod html;
mod json;
mod report;
mod tree;
mod utils;

// Re-export public types and functions
pub use config::OutputConfig;
pub use html::{export_html, render_html};
pub use json::{JsonHit, JsonReport, print_json, print_query_json, query_json};
pub use report::{format_report, heading};
pub use tree::TreeFormatter;
pub use utils::{child_prefix, escape_html, node_details, size_label};
