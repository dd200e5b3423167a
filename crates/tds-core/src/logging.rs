//! Logger sink contract.

use std::fmt;

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Fatal,
}

/// Subsystem a log entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    Tabs,
    Storage,
}

impl LogCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tabs => "tabs",
            Self::Storage => "storage",
        }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best-effort diagnostic sink.
pub trait Logger: Send + Sync {
    fn log(&self, message: &str, level: LogLevel, category: LogCategory);
}
