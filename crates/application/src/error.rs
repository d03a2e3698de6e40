//! Application error types

use qltest_domain::{Discrepancy, DomainError};
use thiserror::Error;

/// Why a test operation was rejected.
///
/// Both variants are transparent: the message a caller sees is exactly the
/// configuration error or discrepancy description, so callers can match on
/// the text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HarnessError {
    /// The harness or a test case was built incorrectly.
    #[error(transparent)]
    Configuration(#[from] DomainError),

    /// The observed outcome did not match the test's expectation.
    #[error(transparent)]
    Mismatch(#[from] Discrepancy),
}

impl HarnessError {
    /// Returns true for configuration errors.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Returns the discrepancy, if this is a mismatch.
    #[must_use]
    pub const fn discrepancy(&self) -> Option<&Discrepancy> {
        match self {
            Self::Mismatch(discrepancy) => Some(discrepancy),
            Self::Configuration(_) => None,
        }
    }
}

/// Result type alias for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;
