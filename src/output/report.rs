//! Plain text rendering of query reports

use std::fmt::Write as _;

use crate::search::{Query, QueryOutcome, QueryReport};
use crate::tree::Node;

use super::config::OutputConfig;
use super::utils::node_details;

/// The heading printed above a query's results.
pub fn heading(query: &Query) -> String {
    match query {
        Query::Largest => "Largest file(s):".to_string(),
        Query::LargerThan(threshold) => format!("Files larger than {} bytes:", threshold),
        Query::MostChildren => "Director(y/ies) with the most direct children:".to_string(),
        Query::Extension(ext) => format!("Files with extension '{}':", ext),
        Query::EmptyDirectories => "Empty directories:".to_string(),
    }
}

/// Render a report: heading, then one line per hit.
pub fn format_report(report: &QueryReport<'_, '_>, config: &OutputConfig) -> String {
    let hits = match &report.outcome {
        QueryOutcome::NoFiles => return "No files found.\n".to_string(),
        QueryOutcome::NoDirectories => return "No directories found.\n".to_string(),
        QueryOutcome::Hits(hits) => hits,
    };

    let mut output = heading(report.query);
    output.push('\n');
    if hits.is_empty() {
        output.push_str("(none)\n");
    }
    for node in hits {
        let _ = writeln!(output, "{}", hit_line(node, report.query, config));
    }
    output
}

fn hit_line(node: &Node, query: &Query, config: &OutputConfig) -> String {
    match query {
        Query::EmptyDirectories => node.path().display().to_string(),
        _ => format!("{} {}", node.path().display(), node_details(node, config)),
    }
}
