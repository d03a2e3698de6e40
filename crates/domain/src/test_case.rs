//! Test case model.
//!
//! A [`TestCase`] describes one request sent to the endpoint under test and
//! whether that request is expected to succeed. Construction never validates;
//! [`TestCase::validate`] is called by the runner right before the case is
//! dispatched, so a list with an invalid entry fails at that entry.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DomainError, DomainResult};

/// One declarative test against the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// `true` if the request should succeed, `false` if it should fail.
    #[serde(default = "default_positive")]
    pub positive: bool,
    /// Name used in diagnostics only.
    #[serde(default)]
    pub name: String,
    /// Payload sent to the endpoint. A case without a query is invalid.
    #[serde(default)]
    pub query: Option<Value>,
    /// Payload the response on the expected branch must equal, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<Value>,
}

const fn default_positive() -> bool {
    true
}

impl TestCase {
    /// Creates a test case from its four parts.
    #[must_use]
    pub fn new(
        positive: bool,
        name: impl Into<String>,
        query: Value,
        expected: Option<Value>,
    ) -> Self {
        Self {
            positive,
            name: name.into(),
            query: Some(query),
            expected,
        }
    }

    /// Creates a test whose request is expected to succeed.
    #[must_use]
    pub fn positive(name: impl Into<String>, query: Value) -> Self {
        Self::new(true, name, query, None)
    }

    /// Creates a test whose request is expected to fail.
    #[must_use]
    pub fn negative(name: impl Into<String>, query: Value) -> Self {
        Self::new(false, name, query, None)
    }

    /// Sets the payload the response must equal.
    #[must_use]
    pub fn expecting(mut self, expected: Value) -> Self {
        self.expected = Some(expected);
        self
    }

    /// Checks that the case can be dispatched.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingName`] if the name is blank and
    /// [`DomainError::MissingQuery`] if there is no query or it is `null`.
    pub fn validate(&self) -> DomainResult<&Value> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingName);
        }
        self.query
            .as_ref()
            .filter(|query| !query.is_null())
            .ok_or(DomainError::MissingQuery)
    }
}
