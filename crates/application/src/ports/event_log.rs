//! Event log port

use std::sync::Arc;

use qltest_domain::LogCategory;
use serde_json::Value;

/// Sink for the run transcript.
///
/// Entries are best-effort: recording never affects a test's outcome.
pub trait EventLog: Send + Sync {
    /// Records one entry under `category`.
    fn record(&self, category: LogCategory, entry: &str);

    /// Records under a category given by name; unknown names are dropped.
    fn record_named(&self, name: &str, entry: &str) {
        if let Ok(category) = name.parse() {
            self.record(category, entry);
        }
    }
}

impl<L: EventLog + ?Sized> EventLog for Arc<L> {
    fn record(&self, category: LogCategory, entry: &str) {
        (**self).record(category, entry);
    }
}

/// Pretty-prints a payload for the transcript.
#[must_use]
pub fn render_payload(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
