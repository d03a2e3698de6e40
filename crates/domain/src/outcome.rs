//! Classification results.
//!
//! The classifier collapses "what the test expected" times "what the
//! transport returned" into an [`Outcome`]. Only the runner turns a
//! [`Discrepancy`] into an error.

use serde_json::Value;
use thiserror::Error;

use crate::assertion::PayloadMismatch;

/// Message used when a negative test's request succeeded.
pub const UNEXPECTED_SUCCESS: &str = "The previous request succeeded whereas it should have failed";

/// Message used when a positive test's request failed.
pub const UNEXPECTED_FAILURE: &str = "The previous request failed whereas it should have succeeded";

/// Why an observed outcome did not match the test's declared expectation.
///
/// The `Display` output is the exact message surfaced to callers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Discrepancy {
    /// The request succeeded but the test expected a failure.
    #[error("{}", UNEXPECTED_SUCCESS)]
    UnexpectedSuccess {
        /// Success payload returned by the endpoint.
        payload: Value,
    },

    /// The request failed but the test expected a success.
    #[error("{}", UNEXPECTED_FAILURE)]
    UnexpectedFailure {
        /// Transport or status error message.
        message: String,
        /// Error response body, if the endpoint sent one.
        payload: Option<Value>,
    },

    /// The direction matched but the payload did not.
    #[error(transparent)]
    PayloadMismatch(#[from] PayloadMismatch),
}

impl Discrepancy {
    /// Returns true for the two "wrong direction" variants.
    #[must_use]
    pub const fn is_direction_mismatch(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedSuccess { .. } | Self::UnexpectedFailure { .. }
        )
    }

    /// Returns the payload mismatch, if this is one.
    #[must_use]
    pub const fn payload_mismatch(&self) -> Option<&PayloadMismatch> {
        match self {
            Self::PayloadMismatch(mismatch) => Some(mismatch),
            _ => None,
        }
    }
}

/// Result of classifying one settled request against its test case.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The declared expectation held. Carries the payload of the taken branch.
    Matched(Value),
    /// The declared expectation did not hold.
    Mismatched(Discrepancy),
}

impl Outcome {
    /// Returns true if the expectation held.
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    /// Converts into a `Result`, with the discrepancy as the error.
    ///
    /// # Errors
    ///
    /// Returns the [`Discrepancy`] when the outcome is [`Outcome::Mismatched`].
    pub fn into_result(self) -> Result<Value, Discrepancy> {
        match self {
            Self::Matched(value) => Ok(value),
            Self::Mismatched(discrepancy) => Err(discrepancy),
        }
    }
}
