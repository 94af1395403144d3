//! TreeBuilder - builds the full sized tree in memory

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::BuildError;

use super::config::BuildConfig;
use super::fs::{EntryType, Filesystem, HostFs};
use super::node::Node;

/// Result of a successful build.
#[derive(Debug)]
pub struct Scan {
    pub root: Node,
    /// Unreadable entries below the root that were left out of the tree.
    pub failures: Vec<BuildError>,
}

/// Builds a [`Node`] tree from a starting path.
///
/// Symlinks, missing paths and special files are left out silently.
/// Entries that exist but cannot be read are reported separately, see
/// [`Scan::failures`] and [`BuildConfig::strict`].
pub struct TreeBuilder<F = HostFs> {
    config: BuildConfig,
    fs: F,
}

impl TreeBuilder<HostFs> {
    pub fn new(config: BuildConfig) -> Self {
        Self { config, fs: HostFs }
    }
}

impl<F: Filesystem> TreeBuilder<F> {
    pub fn with_fs(config: BuildConfig, fs: F) -> Self {
        Self { config, fs }
    }

    /// Build the tree rooted at `path`.
    ///
    /// Returns `Ok(None)` when the path is absent (missing, a symlink or a
    /// special file). An unreadable root is always an error.
    pub fn build(&self, path: &Path) -> Result<Option<Scan>, BuildError> {
        let root = match self.probe(path)? {
            None => return Ok(None),
            Some(Probed::File(node)) => {
                return Ok(Some(Scan {
                    root: node,
                    failures: Vec::new(),
                }));
            }
            Some(Probed::Directory) => self.open(path)?,
        };

        let mut failures = Vec::new();
        let root = self.fill(root, &mut failures)?;
        info!(
            path = %path.display(),
            size = root.size(),
            skipped = failures.len(),
            "built tree"
        );
        Ok(Some(Scan { root, failures }))
    }

    /// Build the tree for a session root, which must be an existing directory.
    pub fn build_root(&self, path: &Path) -> Result<Scan, BuildError> {
        let path_buf = path.to_path_buf();
        match self.build(path)? {
            Some(scan) if scan.root.is_dir() => Ok(scan),
            Some(_) => Err(BuildError::NotADirectory { path: path_buf }),
            // Absent: tell a symlink or special file apart from a missing path.
            None => match self.fs.probe(path) {
                Ok(Some(EntryType::Symlink)) => Err(BuildError::IsSymlink { path: path_buf }),
                Ok(Some(EntryType::Other)) => Err(BuildError::NotADirectory { path: path_buf }),
                _ => Err(BuildError::NotFound { path: path_buf }),
            },
        }
    }

    fn probe(&self, path: &Path) -> Result<Option<Probed>, BuildError> {
        let entry = self.fs.probe(path).map_err(|source| BuildError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(match entry {
            Some(EntryType::File { len }) => Some(Probed::File(Node::File {
                name: node_name(path),
                path: path.to_path_buf(),
                size: len,
            })),
            Some(EntryType::Directory) => Some(Probed::Directory),
            Some(EntryType::Symlink | EntryType::Other) | None => None,
        })
    }

    fn open(&self, path: &Path) -> Result<Frame, BuildError> {
        debug!(path = %path.display(), "entering directory");
        let mut entries = self.fs.list(path).map_err(|source| BuildError::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        Ok(Frame {
            path: path.to_path_buf(),
            pending: entries.into_iter(),
            children: Vec::new(),
            size: 0,
        })
    }

    /// Depth-first over an explicit stack of open directories.
    fn fill(&self, root: Frame, failures: &mut Vec<BuildError>) -> Result<Node, BuildError> {
        let mut current = root;
        let mut parents: Vec<Frame> = Vec::new();

        loop {
            match current.pending.next() {
                Some(entry) => match self.probe(&entry) {
                    Ok(None) => {}
                    Ok(Some(Probed::File(node))) => current.push(node),
                    Ok(Some(Probed::Directory)) => match self.open(&entry) {
                        Ok(child) => parents.push(std::mem::replace(&mut current, child)),
                        Err(e) => self.record(e, failures)?,
                    },
                    Err(e) => self.record(e, failures)?,
                },
                None => match parents.pop() {
                    Some(parent) => {
                        let done = std::mem::replace(&mut current, parent).finish();
                        current.push(done);
                    }
                    None => return Ok(current.finish()),
                },
            }
        }
    }

    fn record(&self, error: BuildError, failures: &mut Vec<BuildError>) -> Result<(), BuildError> {
        if self.config.strict {
            return Err(error);
        }
        warn!(path = %error.path().display(), %error, "skipping unreadable entry");
        failures.push(error);
        Ok(())
    }
}

enum Probed {
    File(Node),
    Directory,
}

/// A directory whose entries are still being built.
struct Frame {
    path: PathBuf,
    pending: std::vec::IntoIter<PathBuf>,
    children: Vec<Node>,
    size: u64,
}

impl Frame {
    fn push(&mut self, child: Node) {
        self.size += child.size();
        self.children.push(child);
    }

    fn finish(self) -> Node {
        Node::Directory {
            name: node_name(&self.path),
            path: self.path,
            size: self.size,
            children: self.children,
        }
    }
}

/// Final path component, or the whole path when there is none (`/`, `..`).
fn node_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
