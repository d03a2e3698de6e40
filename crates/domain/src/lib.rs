//! qltest Domain - Core harness types
//!
//! This crate defines the test case model, the settled transport results,
//! the outcome of classifying them, and the deep-equality assertion.
//! All types here are pure Rust with no I/O dependencies.

pub mod assertion;
pub mod error;
pub mod log;
pub mod outcome;
pub mod request;
pub mod response;
pub mod session;
pub mod test_case;

pub use assertion::{Difference, PayloadMismatch, assert_equal};
pub use error::{DomainError, DomainResult};
pub use log::{LogCategory, UnknownCategory};
pub use outcome::{Discrepancy, Outcome, UNEXPECTED_FAILURE, UNEXPECTED_SUCCESS};
pub use request::OutgoingRequest;
pub use response::{Settled, TransportFailure, TransportResponse};
pub use session::Session;
pub use test_case::TestCase;
