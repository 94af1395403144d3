//! Filesystem access used by the tree builder

use std::io;
use std::path::{Path, PathBuf};

/// What a path points at, without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    File { len: u64 },
    Directory,
    Symlink,
    /// Fifos, sockets, devices.
    Other,
}

/// The filesystem operations the builder needs.
pub trait Filesystem {
    /// Inspect a path. `Ok(None)` means it does not exist.
    fn probe(&self, path: &Path) -> io::Result<Option<EntryType>>;

    /// List the immediate entries of a directory.
    fn list(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

/// The host filesystem through `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFs;

impl Filesystem for HostFs {
    fn probe(&self, path: &Path) -> io::Result<Option<EntryType>> {
        let meta = match std::fs::symlink_metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        let file_type = meta.file_type();
        let entry = if file_type.is_symlink() {
            EntryType::Symlink
        } else if file_type.is_file() {
            EntryType::File { len: meta.len() }
        } else if file_type.is_dir() {
            EntryType::Directory
        } else {
            EntryType::Other
        };
        Ok(Some(entry))
    }

    fn list(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        std::fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect()
    }
}
