//! Tab Data Store
//!
//! Resolves where tab session data and window data live inside the shared
//! container, and offers the handful of directory operations the tab
//! persistence layer needs. Only `copy_item` and `move_item` report failure
//! to the caller; removals and directory creation log at debug level and
//! carry on, and listing failures come back as an empty list.

pub mod backup;
pub mod manager;

use std::path::{Path, PathBuf};

use tds_core::{PathCategory, StoreError};

pub use backup::WindowDataBackup;
pub use manager::DefaultTabFileManager;

/// Storage locations and file operations for tab and window data.
pub trait TabFileManager: Send + Sync {
    /// Directory for `category`, or `None` when no shared container is
    /// configured.
    fn directory(&self, category: PathCategory) -> Option<PathBuf>;

    /// `<container>/profile.profile/tab-session-data`
    fn tab_session_data_directory(&self) -> Option<PathBuf> {
        self.directory(PathCategory::TabSessionData)
    }

    /// `<container>/profile.profile/window-data`, or `window-data-backup`
    /// when `is_backup` is set. The backup holds a slightly older copy used
    /// if the primary becomes corrupted.
    fn window_data_directory(&self, is_backup: bool) -> Option<PathBuf> {
        self.directory(PathCategory::window_data(is_backup))
    }

    /// Non-hidden entries at `path`. Any error yields an empty list.
    fn contents_of_directory(&self, path: &Path) -> Vec<PathBuf>;

    /// Copy a file or directory tree.
    fn copy_item(&self, source: &Path, destination: &Path) -> Result<(), StoreError>;

    /// Move an entry to a destination that must not exist yet.
    fn move_item(&self, source: &Path, destination: &Path) -> Result<(), StoreError>;

    /// Remove the entry at `path`, logging on failure.
    fn remove_file_at(&self, path: &Path);

    /// Remove every listed entry in `directory`. A failed removal does not
    /// stop the rest.
    fn remove_all_files_at(&self, directory: &Path) {
        for path in self.contents_of_directory(directory) {
            self.remove_file_at(&path);
        }
    }

    fn file_exists(&self, path: &Path) -> bool;

    /// Create `path` with intermediate directories, logging on failure.
    fn create_directory_at_path(&self, path: &Path);
}
