//! JSON output formatting

use std::io;
use std::path::Path;

use serde::Serialize;

use crate::search::{Query, QueryOutcome, QueryReport};
use crate::tree::{Node, NodeKind, serialize_path_lossy};

/// Flat view of a node matched by a query.
#[derive(Debug, Serialize)]
pub struct JsonHit<'a> {
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: &'a Path,
    pub name: &'a str,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<usize>,
}

impl<'a> From<&'a Node> for JsonHit<'a> {
    fn from(node: &'a Node) -> Self {
        Self {
            path: node.path(),
            name: node.name(),
            kind: node.kind(),
            size: node.size(),
            children: node.is_dir().then(|| node.children().len()),
        }
    }
}

/// Serializable form of a [`QueryReport`].
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub query: &'a Query,
    pub outcome: &'static str,
    pub hits: Vec<JsonHit<'a>>,
}

impl<'a> From<&'a QueryReport<'_, 'a>> for JsonReport<'a> {
    fn from(report: &'a QueryReport<'_, 'a>) -> Self {
        let outcome = match report.outcome {
            QueryOutcome::Hits(_) => "hits",
            QueryOutcome::NoFiles => "no_files",
            QueryOutcome::NoDirectories => "no_directories",
        };
        Self {
            query: report.query,
            outcome,
            hits: report.outcome.hits().iter().map(|n| JsonHit::from(*n)).collect(),
        }
    }
}

fn to_io_error(e: serde_json::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e)
}

/// Print tree node as pretty-printed JSON to stdout.
pub fn print_json(node: &Node) -> io::Result<()> {
    let json = serde_json::to_string_pretty(node).map_err(to_io_error)?;
    println!("{}", json);
    Ok(())
}

/// Pretty-printed JSON for a query report.
pub fn query_json(report: &QueryReport<'_, '_>) -> io::Result<String> {
    serde_json::to_string_pretty(&JsonReport::from(report)).map_err(to_io_error)
}

/// Print a query report as pretty-printed JSON to stdout.
pub fn print_query_json(report: &QueryReport<'_, '_>) -> io::Result<()> {
    println!("{}", query_json(report)?);
    Ok(())
}
