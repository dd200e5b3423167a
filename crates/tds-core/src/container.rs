//! Shared container identifier and the resolved container root.

use std::path::PathBuf;

use parking_lot::RwLock;

/// The application-group identifier, or its absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SharedContainer {
    Configured(String),
    Unconfigured,
}

impl SharedContainer {
    /// Blank identifiers are treated as unconfigured.
    pub fn from_identifier(identifier: Option<String>) -> Self {
        match identifier {
            Some(id) if !id.trim().is_empty() => Self::Configured(id),
            _ => Self::Unconfigured,
        }
    }
}

/// A container directory resolved from a configured identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerRoot {
    Configured(PathBuf),
    Unconfigured,
}

/// Holder for the shared container identifier.
///
/// Injected into the store rather than read from a global, so every caller
/// that shares an instance sees the same identifier.
#[derive(Debug, Default)]
pub struct SharedContainerInfo {
    identifier: RwLock<Option<String>>,
}

impl SharedContainerInfo {
    pub fn new(identifier: Option<String>) -> Self {
        Self {
            identifier: RwLock::new(identifier),
        }
    }

    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn container(&self) -> SharedContainer {
        SharedContainer::from_identifier(self.identifier.read().clone())
    }

    pub fn set_identifier(&self, identifier: impl Into<String>) {
        *self.identifier.write() = Some(identifier.into());
    }

    pub fn clear(&self) {
        *self.identifier.write() = None;
    }
}
