//! Default `TabFileManager` over an injected filesystem and logger.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tds_core::{
    ContainerRoot, LogCategory, LogLevel, Logger, PathCategory, SharedContainer,
    SharedContainerInfo, StoreError,
};
use tds_fs::FileSystem;

use crate::TabFileManager;

/// Storage path resolver.
///
/// Holds shared handles to its collaborators and no state of its own, so
/// clones are cheap and all see the same container identifier.
#[derive(Clone)]
pub struct DefaultTabFileManager {
    file_system: Arc<dyn FileSystem>,
    logger: Arc<dyn Logger>,
    container: Arc<SharedContainerInfo>,
}

impl DefaultTabFileManager {
    pub fn new(
        file_system: Arc<dyn FileSystem>,
        logger: Arc<dyn Logger>,
        container: Arc<SharedContainerInfo>,
    ) -> Self {
        Self {
            file_system,
            logger,
            container,
        }
    }

    /// Resolve the shared container directory. An identifier the filesystem
    /// cannot map to a directory counts as unconfigured.
    pub fn container_root(&self) -> ContainerRoot {
        match self.container.container() {
            SharedContainer::Configured(identifier) => {
                match self.file_system.container_root(&identifier) {
                    Some(root) => ContainerRoot::Configured(root),
                    None => ContainerRoot::Unconfigured,
                }
            }
            SharedContainer::Unconfigured => ContainerRoot::Unconfigured,
        }
    }
}

impl TabFileManager for DefaultTabFileManager {
    fn directory(&self, category: PathCategory) -> Option<PathBuf> {
        match self.container_root() {
            ContainerRoot::Configured(root) => Some(category.resolve(&root)),
            ContainerRoot::Unconfigured => None,
        }
    }

    fn contents_of_directory(&self, path: &Path) -> Vec<PathBuf> {
        let Ok(entries) = self.file_system.read_dir(path) else {
            return Vec::new();
        };
        let mut visible: Vec<PathBuf> = entries.into_iter().filter(|p| !is_hidden(p)).collect();
        visible.sort();
        visible
    }

    fn copy_item(&self, source: &Path, destination: &Path) -> Result<(), StoreError> {
        self.file_system.copy_recursive(source, destination)?;
        Ok(())
    }

    fn move_item(&self, source: &Path, destination: &Path) -> Result<(), StoreError> {
        self.file_system.rename(source, destination)?;
        Ok(())
    }

    fn remove_file_at(&self, path: &Path) {
        if let Err(e) = self.file_system.remove(path) {
            self.logger.log(
                &format!("Error while clearing window data: {e}"),
                LogLevel::Debug,
                LogCategory::Tabs,
            );
        }
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.file_system.exists(path)
    }

    fn create_directory_at_path(&self, path: &Path) {
        if let Err(e) = self.file_system.create_dir_all(path) {
            self.logger.log(
                &format!("Failed to create directory: {e} for path: {}", path.display()),
                LogLevel::Debug,
                LogCategory::Tabs,
            );
        }
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
