//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the harness core and external systems.
//! Each port is a trait implemented by adapters in the infrastructure layer.

mod event_log;
mod transport;

pub use event_log::{EventLog, render_payload};
pub use transport::Transport;
