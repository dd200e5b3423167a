//! Storage layout: the fixed directory segments under a shared container.
//!
//! Every category lives under `<container>/profile.profile`. The root
//! category is that directory itself; the others are one level below it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Name of the profile directory directly under the shared container.
pub const ROOT_DIRECTORY: &str = "profile.profile";

/// A named storage location under the shared container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathCategory {
    #[serde(rename = "profile.profile")]
    Root,
    #[serde(rename = "tab-session-data")]
    TabSessionData,
    #[serde(rename = "window-data")]
    WindowDataPrimary,
    #[serde(rename = "window-data-backup")]
    WindowDataBackup,
}

impl PathCategory {
    pub const ALL: [PathCategory; 4] = [
        Self::Root,
        Self::TabSessionData,
        Self::WindowDataPrimary,
        Self::WindowDataBackup,
    ];

    // ── Segments ────────────────────────────────────────────────────────
    pub const TAB_SESSION_DATA: &str = "tab-session-data";
    pub const WINDOW_DATA: &str = "window-data";
    pub const WINDOW_DATA_BACKUP: &str = "window-data-backup";

    /// The exact (case-sensitive) directory name for this category.
    pub fn segment(&self) -> &'static str {
        match self {
            Self::Root => ROOT_DIRECTORY,
            Self::TabSessionData => Self::TAB_SESSION_DATA,
            Self::WindowDataPrimary => Self::WINDOW_DATA,
            Self::WindowDataBackup => Self::WINDOW_DATA_BACKUP,
        }
    }

    /// Window data category for the primary or backup copy.
    pub fn window_data(is_backup: bool) -> Self {
        if is_backup {
            Self::WindowDataBackup
        } else {
            Self::WindowDataPrimary
        }
    }

    /// Resolve this category beneath a container directory.
    pub fn resolve(&self, container: &Path) -> PathBuf {
        let root = container.join(ROOT_DIRECTORY);
        match self {
            Self::Root => root,
            other => root.join(other.segment()),
        }
    }
}

impl fmt::Display for PathCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

impl FromStr for PathCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.segment() == s)
            .ok_or_else(|| format!("Unknown path category: {s}"))
    }
}
