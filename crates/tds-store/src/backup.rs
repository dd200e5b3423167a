//! Rotation between the primary and backup window data directories.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tds_core::{LogCategory, LogLevel, Logger, StoreError};
use tracing::debug;

use crate::TabFileManager;

/// Copies window data between the primary and backup directories.
///
/// The copy is written to a hidden staging directory next to the
/// destination and only swapped in once it is complete, so a failed backup
/// or restore leaves the destination as it was. Errors are returned so the
/// caller knows the rotation did not happen.
pub struct WindowDataBackup<M> {
    manager: M,
    logger: Arc<dyn Logger>,
}

impl<M: TabFileManager> WindowDataBackup<M> {
    pub fn new(manager: M, logger: Arc<dyn Logger>) -> Self {
        Self { manager, logger }
    }

    /// Replace the backup with a copy of the primary window data.
    pub fn create_backup(&self) -> Result<(), StoreError> {
        let (primary, backup) = self.directories()?;
        self.rotate(&primary, &backup)?;
        self.logger.log(
            &format!("Backed up window data to {}", backup.display()),
            LogLevel::Info,
            LogCategory::Tabs,
        );
        Ok(())
    }

    /// Replace the primary window data with a copy of the backup.
    pub fn restore_from_backup(&self) -> Result<(), StoreError> {
        let (primary, backup) = self.directories()?;
        self.rotate(&backup, &primary)?;
        self.logger.log(
            &format!("Restored window data from {}", backup.display()),
            LogLevel::Info,
            LogCategory::Tabs,
        );
        Ok(())
    }

    fn directories(&self) -> Result<(PathBuf, PathBuf), StoreError> {
        let primary = self
            .manager
            .window_data_directory(false)
            .ok_or(StoreError::Unconfigured)?;
        let backup = self
            .manager
            .window_data_directory(true)
            .ok_or(StoreError::Unconfigured)?;
        Ok((primary, backup))
    }

    fn rotate(&self, from: &Path, to: &Path) -> Result<(), StoreError> {
        if !self.manager.file_exists(from) {
            return Err(StoreError::NotFound(from.to_path_buf()));
        }
        let staging = scratch_path(to, "staging");
        let retired = scratch_path(to, "old");

        // A swap interrupted after retiring the destination left it here.
        if !self.manager.file_exists(to) && self.manager.file_exists(&retired) {
            debug!("Recovering {} from {}", to.display(), retired.display());
            self.manager.move_item(&retired, to)?;
        }
        self.clear_scratch(&staging);
        self.clear_scratch(&retired);

        if let Err(e) = self.manager.copy_item(from, &staging) {
            self.clear_scratch(&staging);
            return Err(e);
        }

        let had_destination = self.manager.file_exists(to);
        if had_destination {
            if let Err(e) = self.manager.move_item(to, &retired) {
                self.clear_scratch(&staging);
                return Err(e);
            }
        }

        if let Err(e) = self.manager.move_item(&staging, to) {
            if had_destination {
                if let Err(undo) = self.manager.move_item(&retired, to) {
                    self.logger.log(
                        &format!(
                            "Could not put back {} (kept at {}): {undo}",
                            to.display(),
                            retired.display()
                        ),
                        LogLevel::Warning,
                        LogCategory::Tabs,
                    );
                }
            }
            self.clear_scratch(&staging);
            return Err(e);
        }

        self.clear_scratch(&retired);
        Ok(())
    }

    fn clear_scratch(&self, path: &Path) {
        if self.manager.file_exists(path) {
            debug!("Clearing {}", path.display());
            self.manager.remove_file_at(path);
        }
    }
}

/// Hidden sibling of `path`, e.g. `.window-data.staging`. Hidden entries are
/// never listed, so scratch copies stay out of directory contents.
fn scratch_path(path: &Path, suffix: &str) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.{suffix}"))
}
