//! `tracing` backed event log.

use qltest_application::ports::EventLog;
use qltest_domain::LogCategory;
use tracing::Level;

/// Target of every transcript event.
pub const LOG_TARGET: &str = "qltest";

/// Event log that emits one `tracing` event per entry.
///
/// The category decides the level; the entry is the event message.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventLog;

impl TracingEventLog {
    /// Creates the event log.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Level a category is logged at.
#[must_use]
pub const fn level_for(category: LogCategory) -> Level {
    match category {
        LogCategory::Failure => Level::ERROR,
        LogCategory::ErrorTitle | LogCategory::ErrorResponse => Level::WARN,
        LogCategory::Request => Level::DEBUG,
        LogCategory::Title | LogCategory::Response | LogCategory::Successful => Level::INFO,
    }
}

impl EventLog for TracingEventLog {
    fn record(&self, category: LogCategory, entry: &str) {
        let level = level_for(category);
        let category = category.as_str();
        if level == Level::ERROR {
            tracing::error!(target: LOG_TARGET, category, "{entry}");
        } else if level == Level::WARN {
            tracing::warn!(target: LOG_TARGET, category, "{entry}");
        } else if level == Level::DEBUG {
            tracing::debug!(target: LOG_TARGET, category, "{entry}");
        } else {
            tracing::info!(target: LOG_TARGET, category, "{entry}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("buffer lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().expect("buffer lock").clone()).expect("utf-8 output")
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        captured.text()
    }

    #[test]
    fn test_levels() {
        assert_eq!(level_for(LogCategory::Failure), Level::ERROR);
        assert_eq!(level_for(LogCategory::ErrorTitle), Level::WARN);
        assert_eq!(level_for(LogCategory::ErrorResponse), Level::WARN);
        assert_eq!(level_for(LogCategory::Request), Level::DEBUG);
        assert_eq!(level_for(LogCategory::Title), Level::INFO);
        assert_eq!(level_for(LogCategory::Response), Level::INFO);
        assert_eq!(level_for(LogCategory::Successful), Level::INFO);
    }

    #[test]
    fn test_record_emits_event() {
        let output = capture(|| {
            TracingEventLog::new().record(LogCategory::ErrorTitle, "bad request");
        });

        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains(LOG_TARGET), "{output}");
        assert!(output.contains("category=\"test error title\""), "{output}");
        assert!(output.contains("bad request"), "{output}");
    }

    #[test]
    fn test_unknown_named_category_is_dropped() {
        let output = capture(|| {
            TracingEventLog::new().record_named("not a category", "ignored");
            TracingEventLog::new().record_named("test failure", "kept");
        });

        assert!(!output.contains("ignored"), "{output}");
        assert!(output.contains("kept"), "{output}");
    }
}
