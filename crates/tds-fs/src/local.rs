//! `FileSystem` backed by the local disk.

use std::fs;
use std::path::{Path, PathBuf};

use tds_core::{FsError, FsResult};
use tracing::debug;

use crate::FileSystem;

/// Local-disk filesystem. Application-group containers are plain
/// directories named after their identifier beneath `containers_root`.
#[derive(Debug, Clone)]
pub struct LocalFileSystem {
    containers_root: PathBuf,
}

impl LocalFileSystem {
    pub fn new(containers_root: PathBuf) -> Self {
        Self { containers_root }
    }

    /// Use the platform data directory for containers.
    pub fn with_default_root() -> Self {
        Self::new(default_containers_root())
    }
}

/// `<data_local_dir>/tab-data-store/containers`, falling back to
/// `~/.tab-data-store/containers` and finally `/tmp`.
pub fn default_containers_root() -> PathBuf {
    if let Some(data) = dirs::data_local_dir() {
        return data.join("tab-data-store").join("containers");
    }
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
    home.join(".tab-data-store").join("containers")
}

impl FileSystem for LocalFileSystem {
    fn container_root(&self, identifier: &str) -> Option<PathBuf> {
        if !is_valid_identifier(identifier) {
            debug!("Rejected container identifier: {identifier:?}");
            return None;
        }
        Some(self.containers_root.join(identifier))
    }

    #[tracing::instrument(name = "fs", level = "debug", skip(self, path), fields(op = "read_dir", path = %path.display()))]
    fn read_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>> {
        let entries = fs::read_dir(path).map_err(|e| FsError::from_io("read directory", path, e))?;
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FsError::from_io("read directory entry", path, e))?;
            paths.push(entry.path());
        }
        Ok(paths)
    }

    #[tracing::instrument(name = "fs", level = "debug", skip(self, source, destination), fields(op = "copy", from = %source.display(), to = %destination.display()))]
    fn copy_recursive(&self, source: &Path, destination: &Path) -> FsResult<()> {
        let meta = fs::symlink_metadata(source).map_err(|e| FsError::from_io("copy", source, e))?;
        if fs::symlink_metadata(destination).is_ok() {
            return Err(FsError::AlreadyExists(destination.to_path_buf()));
        }
        if meta.is_dir() && is_within(source, destination) {
            return Err(FsError::CopyIntoSelf {
                from: source.to_path_buf(),
                to: destination.to_path_buf(),
            });
        }
        copy_entry(source, destination, &meta.file_type())
    }

    #[tracing::instrument(name = "fs", level = "debug", skip(self, source, destination), fields(op = "rename", from = %source.display(), to = %destination.display()))]
    fn rename(&self, source: &Path, destination: &Path) -> FsResult<()> {
        fs::symlink_metadata(source).map_err(|e| FsError::from_io("rename", source, e))?;
        if fs::symlink_metadata(destination).is_ok() {
            return Err(FsError::AlreadyExists(destination.to_path_buf()));
        }
        fs::rename(source, destination).map_err(|e| FsError::from_io("rename to", destination, e))
    }

    #[tracing::instrument(name = "fs", level = "debug", skip(self, path), fields(op = "remove", path = %path.display()))]
    fn remove(&self, path: &Path) -> FsResult<()> {
        let meta = fs::symlink_metadata(path).map_err(|e| FsError::from_io("remove", path, e))?;
        let result = if meta.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };
        result.map_err(|e| FsError::from_io("remove", path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    #[tracing::instrument(name = "fs", level = "debug", skip(self, path), fields(op = "create_dir_all", path = %path.display()))]
    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|e| FsError::from_io("create directory", path, e))
    }
}

fn copy_entry(source: &Path, destination: &Path, file_type: &fs::FileType) -> FsResult<()> {
    if file_type.is_symlink() {
        return copy_symlink(source, destination);
    }

    if file_type.is_dir() {
        fs::create_dir(destination).map_err(|e| FsError::from_io("create directory", destination, e))?;
        let entries = fs::read_dir(source).map_err(|e| FsError::from_io("read directory", source, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| FsError::from_io("read directory entry", source, e))?;
            let child_type = entry
                .file_type()
                .map_err(|e| FsError::from_io("stat", entry.path(), e))?;
            copy_entry(&entry.path(), &destination.join(entry.file_name()), &child_type)?;
        }
        return Ok(());
    }

    fs::copy(source, destination).map_err(|e| FsError::from_io("copy to", destination, e))?;
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(source: &Path, destination: &Path) -> FsResult<()> {
    let target = fs::read_link(source).map_err(|e| FsError::from_io("read link", source, e))?;
    std::os::unix::fs::symlink(&target, destination)
        .map_err(|e| FsError::from_io("create link", destination, e))
}

#[cfg(not(unix))]
fn copy_symlink(source: &Path, destination: &Path) -> FsResult<()> {
    fs::copy(source, destination).map_err(|e| FsError::from_io("copy", source, e))?;
    Ok(())
}

/// Whether `destination` (which does not exist yet) would land inside
/// `source`. Compared on canonical paths; an unresolvable parent means the
/// copy fails on its own before anything is created.
fn is_within(source: &Path, destination: &Path) -> bool {
    let (Some(parent), Some(name)) = (destination.parent(), destination.file_name()) else {
        return false;
    };
    let parent = if parent.as_os_str().is_empty() { Path::new(".") } else { parent };
    match (fs::canonicalize(source), fs::canonicalize(parent)) {
        (Ok(source), Ok(parent)) => parent.join(name).starts_with(source),
        _ => false,
    }
}

/// A single, non-traversing path component.
fn is_valid_identifier(identifier: &str) -> bool {
    !identifier.trim().is_empty()
        && identifier != "."
        && identifier != ".."
        && !identifier.contains(['/', '\\'])
}
