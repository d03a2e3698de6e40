//! Settled transport results.
//!
//! The transport never raises: every call settles as either a
//! [`TransportResponse`] (2xx) or a [`TransportFailure`] (anything else,
//! including network errors without a response).

use serde_json::Value;

/// A 2xx response from the endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Parsed response body.
    pub payload: Value,
}

impl TransportResponse {
    /// Creates a response.
    #[must_use]
    pub const fn new(status: u16, payload: Value) -> Self {
        Self { status, payload }
    }
}

/// Any outcome of the call other than a 2xx response.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportFailure {
    /// Human-readable cause.
    pub message: String,
    /// HTTP status, if a response was received.
    pub status: Option<u16>,
    /// Parsed error body, if a response was received.
    pub payload: Option<Value>,
}

impl TransportFailure {
    /// A failure with no response at all, e.g. connection refused.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            payload: None,
        }
    }

    /// A non-2xx response carrying `payload`.
    #[must_use]
    pub fn status(status: u16, payload: Value) -> Self {
        Self {
            message: format!("Request failed with status code {status}"),
            status: Some(status),
            payload: Some(payload),
        }
    }
}

/// Result of one outbound call.
pub type Settled = Result<TransportResponse, TransportFailure>;
