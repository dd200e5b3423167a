//! Tab Data Store - Core Types
//!
//! Shared vocabulary for the tab/window storage layer: the fixed directory
//! layout under a shared container, the container identifier holder, the
//! logger sink contract, and the error types every other crate speaks.

pub mod category;
pub mod config;
pub mod container;
pub mod error;
pub mod logging;

pub use category::{PathCategory, ROOT_DIRECTORY};
pub use config::StoreConfig;
pub use container::{ContainerRoot, SharedContainer, SharedContainerInfo};
pub use error::{ConfigError, FsError, FsResult, StoreError};
pub use logging::{LogCategory, LogLevel, Logger};
