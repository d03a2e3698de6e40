//! qltest Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in the
//! application layer, plus configuration and suite file loading.

pub mod adapters;
pub mod config;
pub mod logging;
pub mod suite;

pub use adapters::{ReqwestTransport, TransportError};
pub use config::{ConfigError, HarnessConfig, HttpHarness};
pub use logging::TracingEventLog;
pub use suite::{SuiteFileError, SuiteFormat, load_suite, parse_suite};
