//! Error types for the storage layer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by a filesystem accessor.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("No such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Item already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Cannot copy {} into itself at {}", from.display(), to.display())]
    CopyIntoSelf { from: PathBuf, to: PathBuf },

    #[error("Failed to {op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Classify an `io::Error` raised while performing `op` on `path`.
    pub fn from_io(op: &'static str, path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path),
            io::ErrorKind::AlreadyExists => Self::AlreadyExists(path),
            _ => Self::Io { op, path, source: err },
        }
    }
}

pub type FsResult<T> = Result<T, FsError>;

/// Errors surfaced to callers of the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Shared container identifier is not configured")]
    Unconfigured,

    #[error("Nothing to copy at {}", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Fs(#[from] FsError),
}

/// Errors loading the on-disk configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_io_classifies_kinds() {
        let not_found = FsError::from_io("read", "/a", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(not_found, FsError::NotFound(ref p) if p == &PathBuf::from("/a")));

        let exists = FsError::from_io("copy", "/b", io::Error::from(io::ErrorKind::AlreadyExists));
        assert!(matches!(exists, FsError::AlreadyExists(_)));

        let denied = FsError::from_io("remove", "/c", io::Error::from(io::ErrorKind::PermissionDenied));
        match denied {
            FsError::Io { op, ref path, .. } => {
                assert_eq!(op, "remove");
                assert_eq!(path, &PathBuf::from("/c"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn messages_include_path() {
        let err = FsError::NotFound(PathBuf::from("/missing/dir"));
        assert!(err.to_string().contains("/missing/dir"));

        let store: StoreError = err.into();
        assert!(store.to_string().contains("/missing/dir"));
    }
}
