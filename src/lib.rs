//! Canopy - build a sized directory tree, render it and query it

pub mod error;
pub mod menu;
pub mod output;
pub mod search;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::BuildError;
pub use menu::Menu;
pub use output::{OutputConfig, TreeFormatter, export_html, format_report, print_json};
pub use search::{
    Query, QueryOutcome, QueryReport, Ranked, TreeIndex, collect_directories, collect_files,
    empty_directories, files_larger_than, files_with_extension, largest_files, most_children,
};
pub use tree::{BuildConfig, Node, NodeKind, Scan, TreeBuilder};
