//! Per-harness authentication session.

/// Authentication state attached to every outgoing request.
///
/// Each harness owns its own session; setting a token affects requests
/// dispatched afterwards only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    bearer_token: Option<String>,
}

impl Session {
    /// Creates a session without credentials.
    #[must_use]
    pub const fn new() -> Self {
        Self { bearer_token: None }
    }

    /// Sets the bearer token sent with subsequent requests.
    pub fn set_bearer_token(&mut self, token: impl Into<String>) {
        self.bearer_token = Some(token.into());
    }

    /// Removes the bearer token.
    pub fn clear_bearer_token(&mut self) {
        self.bearer_token = None;
    }

    /// Returns the current bearer token.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    /// Value of the `Authorization` header, if a token is set.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.bearer_token
            .as_ref()
            .map(|token| format!("Bearer {token}"))
    }
}
