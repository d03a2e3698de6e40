//! qltest Application - Harness core
//!
//! This crate contains the request dispatcher, the outcome classifier and the
//! sequential runner. It depends only on the domain crate and talks to the
//! outside world through the ports in [`ports`].

pub mod classifier;
pub mod dispatcher;
pub mod error;
pub mod ports;
pub mod runner;

#[cfg(test)]
mod test_support;

pub use classifier::classify;
pub use dispatcher::RequestDispatcher;
pub use error::{HarnessError, HarnessResult};
pub use runner::{ReportEntry, RunReport, TestHarness, TestPlan};
