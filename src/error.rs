//! Errors raised while building a tree

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("cannot access '{}': No such file or directory", path.display())]
    NotFound { path: PathBuf },

    /// The root path is a symbolic link, which is never followed.
    #[error("cannot access '{}': Is a symbolic link", path.display())]
    IsSymlink { path: PathBuf },

    #[error("cannot access '{}': Not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// The entry exists but its metadata could not be read.
    #[error("cannot read '{}': {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The entry is a directory but listing it failed.
    #[error("cannot list '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BuildError {
    /// The path the failure is attributed to.
    pub fn path(&self) -> &Path {
        match self {
            BuildError::NotFound { path }
            | BuildError::IsSymlink { path }
            | BuildError::NotADirectory { path }
            | BuildError::Metadata { path, .. }
            | BuildError::ReadDir { path, .. } => path,
        }
    }

    /// True for entries that exist but could not be read.
    pub fn is_unreadable(&self) -> bool {
        matches!(
            self,
            BuildError::Metadata { .. } | BuildError::ReadDir { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_variants() {
        let denied = || io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let metadata = BuildError::Metadata {
            path: PathBuf::from("a"),
            source: denied(),
        };
        let listing = BuildError::ReadDir {
            path: PathBuf::from("b"),
            source: denied(),
        };
        let missing = BuildError::NotFound {
            path: PathBuf::from("c"),
        };

        assert!(metadata.is_unreadable());
        assert!(listing.is_unreadable());
        assert!(!missing.is_unreadable());
        assert_eq!(listing.path(), Path::new("b"));
    }

    #[test]
    fn test_messages_name_the_path() {
        let err = BuildError::NotADirectory {
            path: PathBuf::from("notes.txt"),
        };
        assert_eq!(err.to_string(), "cannot access 'notes.txt': Not a directory");

        let err = BuildError::IsSymlink {
            path: PathBuf::from("alias"),
        };
        assert_eq!(err.to_string(), "cannot access 'alias': Is a symbolic link");
        assert!(!err.is_unreadable());
    }
}
