//! Logger sink that forwards to `tracing`.

use tds_core::{LogCategory, LogLevel, Logger};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, message: &str, level: LogLevel, category: LogCategory) {
        let category = category.as_str();
        match level {
            LogLevel::Debug => debug!(category, "{message}"),
            LogLevel::Info => info!(category, "{message}"),
            LogLevel::Warning => warn!(category, "{message}"),
            LogLevel::Fatal => error!(category, "{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> Vec<String> {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn every_level_maps_to_a_tracing_level() {
        let logger = TracingLogger::new();
        let lines = capture(|| {
            logger.log("listing", LogLevel::Debug, LogCategory::Tabs);
            logger.log("cleared", LogLevel::Info, LogCategory::Storage);
            logger.log("slow disk", LogLevel::Warning, LogCategory::Storage);
            logger.log("corrupt", LogLevel::Fatal, LogCategory::Tabs);
        });

        assert_eq!(lines.len(), 4, "{lines:#?}");
        let expected = [
            ("DEBUG", "listing", "tabs"),
            ("INFO", "cleared", "storage"),
            ("WARN", "slow disk", "storage"),
            ("ERROR", "corrupt", "tabs"),
        ];
        for (line, (level, message, category)) in lines.iter().zip(expected) {
            assert!(line.contains(level), "{line}");
            assert!(line.contains(message), "{line}");
            assert!(line.contains("category="), "{line}");
            assert!(line.contains(category), "{line}");
        }
    }
}
