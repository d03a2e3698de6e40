//! Outgoing request type

use serde_json::Value;

use crate::session::Session;

/// A single POST to the endpoint under test.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingRequest {
    /// Endpoint URL.
    pub url: String,
    /// Query sent as the request body.
    pub body: Value,
    /// `Authorization` header value, if the session carries a token.
    pub authorization: Option<String>,
}

impl OutgoingRequest {
    /// Builds a request for `url` carrying `body`, authorized by `session`.
    #[must_use]
    pub fn new(url: impl Into<String>, body: Value, session: &Session) -> Self {
        Self {
            url: url.into(),
            body,
            authorization: session.authorization(),
        }
    }

    /// Returns true if the body must be sent verbatim instead of as JSON.
    #[must_use]
    pub const fn is_raw_body(&self) -> bool {
        matches!(self.body, Value::String(_))
    }
}
