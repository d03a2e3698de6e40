//! Domain error types

use thiserror::Error;

/// Configuration errors detected before any request is dispatched.
///
/// These are never retried and never count as a test failure: they mean the
/// harness or one of its test cases was built incorrectly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The harness was constructed without an endpoint URL.
    #[error("url must be provided to create a test harness")]
    EmptyUrl,

    /// A test case has no name, or only whitespace.
    #[error("Tests must have a name. Ex: {{name: \"Is server available\", query: {{}}}}.")]
    MissingName,

    /// A test case has no query to send.
    #[error(
        "Tests must contain a query to address to the server. Ex: {{name: \"Is server available\", query: {{}}}}."
    )]
    MissingQuery,
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
