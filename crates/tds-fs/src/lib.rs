//! Filesystem and logging collaborators for the tab data store.
//!
//! The store never touches `std::fs` directly; it goes through the
//! `FileSystem` trait so tests and alternate hosts can swap the backend.

pub mod local;
pub mod tracing_logger;

use std::path::{Path, PathBuf};

use tds_core::FsResult;

pub use local::LocalFileSystem;
pub use tracing_logger::TracingLogger;

/// Primitive filesystem operations over a hierarchical path space.
pub trait FileSystem: Send + Sync {
    /// Directory backing the application group `identifier`, if the host
    /// can provide one.
    fn container_root(&self, identifier: &str) -> Option<PathBuf>;

    /// Full paths of every entry directly inside `path`, hidden ones included.
    fn read_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>>;

    /// Copy a file or directory tree. Fails if `destination` already exists,
    /// a dangling symlink included, or lies inside `source`.
    fn copy_recursive(&self, source: &Path, destination: &Path) -> FsResult<()>;

    /// Move an entry to a path that does not exist yet, under the same
    /// existence rule as `copy_recursive`.
    fn rename(&self, source: &Path, destination: &Path) -> FsResult<()>;

    /// Remove a file, or a directory and everything beneath it.
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Whether `path` resolves to something. Symlinks are followed, so a
    /// dangling link reports `false` even though `copy_recursive` and
    /// `rename` treat it as an occupied destination.
    fn exists(&self, path: &Path) -> bool;

    /// Create `path` and any missing parents. Existing directories are fine.
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;
}
