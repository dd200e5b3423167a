//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tds_core::{FsError, FsResult, LogCategory, LogLevel, Logger, SharedContainerInfo};
use tds_fs::{FileSystem, LocalFileSystem};
use tds_store::DefaultTabFileManager;
use tempfile::TempDir;

pub const GROUP: &str = "group.org.example.tabs";

/// Logger that keeps every entry for later inspection.
#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<(String, LogLevel, LogCategory)>>,
}

impl RecordingLogger {
    pub fn entries(&self) -> Vec<(String, LogLevel, LogCategory)> {
        self.entries.lock().clone()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, message: &str, level: LogLevel, category: LogCategory) {
        self.entries.lock().push((message.to_string(), level, category));
    }
}

/// Local filesystem that fails chosen operations. Each list holds entry
/// names: `remove` matches the removed path, `copy_recursive` and `rename`
/// match the source.
pub struct FaultyFileSystem {
    inner: LocalFileSystem,
    fail_removes: Vec<String>,
    fail_copies: Vec<String>,
    fail_renames: Vec<String>,
    attempts: Mutex<Vec<PathBuf>>,
}

impl FaultyFileSystem {
    pub fn new(inner: LocalFileSystem) -> Self {
        Self {
            inner,
            fail_removes: Vec::new(),
            fail_copies: Vec::new(),
            fail_renames: Vec::new(),
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_removes(mut self, names: &[&str]) -> Self {
        self.fail_removes = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn failing_copies(mut self, names: &[&str]) -> Self {
        self.fail_copies = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn failing_renames(mut self, names: &[&str]) -> Self {
        self.fail_renames = names.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Every path `remove` was called with, in order.
    pub fn attempts(&self) -> Vec<PathBuf> {
        self.attempts.lock().clone()
    }
}

fn injected(names: &[String], op: &'static str, matched: &Path, path: &Path) -> FsResult<()> {
    let name = matched.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
    if names.contains(&name) {
        return Err(FsError::Io {
            op,
            path: path.to_path_buf(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        });
    }
    Ok(())
}

impl FileSystem for FaultyFileSystem {
    fn container_root(&self, identifier: &str) -> Option<PathBuf> {
        self.inner.container_root(identifier)
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>> {
        self.inner.read_dir(path)
    }

    fn copy_recursive(&self, source: &Path, destination: &Path) -> FsResult<()> {
        injected(&self.fail_copies, "copy to", source, destination)?;
        self.inner.copy_recursive(source, destination)
    }

    fn rename(&self, source: &Path, destination: &Path) -> FsResult<()> {
        injected(&self.fail_renames, "rename to", source, destination)?;
        self.inner.rename(source, destination)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        self.attempts.lock().push(path.to_path_buf());
        injected(&self.fail_removes, "remove", path, path)?;
        self.inner.remove(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.inner.create_dir_all(path)
    }
}

/// Names of every entry in `dir`, hidden ones included, sorted.
pub fn all_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

pub struct Fixture {
    pub tmp: TempDir,
    pub container: Arc<SharedContainerInfo>,
    pub logger: Arc<RecordingLogger>,
    pub manager: DefaultTabFileManager,
}

impl Fixture {
    pub fn containers_root(&self) -> PathBuf {
        self.tmp.path().join("containers")
    }
}

/// Manager over a fresh temp directory using the local filesystem.
pub fn fixture(group: Option<&str>) -> Fixture {
    let tmp = TempDir::new().unwrap();
    let fs = LocalFileSystem::new(tmp.path().join("containers"));
    fixture_with(tmp, Arc::new(fs), group)
}

pub fn fixture_with(tmp: TempDir, fs: Arc<dyn FileSystem>, group: Option<&str>) -> Fixture {
    let container = Arc::new(SharedContainerInfo::new(group.map(str::to_string)));
    let logger = Arc::new(RecordingLogger::default());
    let manager = DefaultTabFileManager::new(fs, logger.clone(), container.clone());
    Fixture {
        tmp,
        container,
        logger,
        manager,
    }
}

pub fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}
