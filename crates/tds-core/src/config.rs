//! On-disk configuration.
//!
//! The file is plain JSON in camelCase:
//!
//! ```json
//! { "sharedContainerIdentifier": "group.org.example", "containersRoot": "/data/containers" }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_container_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub containers_root: Option<PathBuf>,
}

impl StoreConfig {
    /// Load a config file that must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config file, treating a missing file as empty.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Fill any unset field from `other`; fields already set win.
    pub fn merge(self, other: StoreConfig) -> Self {
        Self {
            shared_container_identifier: self
                .shared_container_identifier
                .or(other.shared_container_identifier),
            containers_root: self.containers_root.or(other.containers_root),
        }
    }
}
