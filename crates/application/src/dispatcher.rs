//! Request dispatcher.
//!
//! Sends one test query to the endpoint fixed at construction time, with
//! the harness session's credentials attached.

use std::sync::Arc;

use qltest_domain::{DomainError, DomainResult, LogCategory, OutgoingRequest, Session, Settled};
use serde_json::Value;

use crate::ports::{EventLog, Transport, render_payload};

/// Sends queries to a single endpoint.
pub struct RequestDispatcher<T: Transport> {
    url: String,
    transport: Arc<T>,
    session: Session,
}

impl<T: Transport> RequestDispatcher<T> {
    /// Creates a dispatcher for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyUrl`] if `url` is blank.
    pub fn new(url: impl Into<String>, transport: Arc<T>) -> DomainResult<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(DomainError::EmptyUrl);
        }
        Ok(Self {
            url,
            transport,
            session: Session::new(),
        })
    }

    /// Endpoint every query is sent to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Current session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access to the session, for token changes between tests.
    pub const fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Sends `query` and returns the settled result.
    ///
    /// Logs the query under [`LogCategory::Request`] first.
    pub async fn dispatch<L: EventLog>(&self, query: &Value, log: &L) -> Settled {
        log.record(LogCategory::Request, &render_payload(query));
        let request = OutgoingRequest::new(self.url.as_str(), query.clone(), &self.session);
        self.transport.post(&request).await
    }
}
