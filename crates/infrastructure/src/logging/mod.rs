//! Run transcript logging.
//!
//! This module provides the `EventLog` adapter that forwards transcript
//! entries to `tracing`.

mod tracing_log;

pub use tracing_log::{LOG_TARGET, TracingEventLog, level_for};
