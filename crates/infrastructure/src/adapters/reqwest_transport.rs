//! Transport implementation using reqwest.
//!
//! This adapter implements the `Transport` port using the reqwest library.
//! Every call settles: non-2xx statuses and network errors become a
//! `TransportFailure` instead of an error.

use std::future::Future;
use std::time::Duration;

use qltest_application::ports::Transport;
use qltest_domain::{OutgoingRequest, Settled, TransportFailure, TransportResponse};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value;
use thiserror::Error;

/// Default request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("qltest/", env!("CARGO_PKG_VERSION"));

/// Transport-level errors.
///
/// These never escape a run: they are folded into a [`TransportFailure`]
/// whose message is the error's `Display` output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The endpoint URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete in time.
    #[error("timeout of {timeout_ms}ms exceeded")]
    Timeout {
        /// Configured timeout.
        timeout_ms: u64,
    },

    /// The server actively refused the connection.
    #[error("Connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection could not be established.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The response body could not be read.
    #[error("Failed to read body: {0}")]
    Body(String),

    /// The HTTP client could not be built.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// Any other transport error.
    #[error("{0}")]
    Other(String),
}

impl From<TransportError> for TransportFailure {
    fn from(error: TransportError) -> Self {
        Self::network(error.to_string())
    }
}

/// Transport implementation using reqwest.
///
/// Wraps one `reqwest::Client`, shared by every request of a harness.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout_ms: u64,
}

impl ReqwestTransport {
    /// Creates a transport with the default user agent and timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_options(DEFAULT_USER_AGENT, DEFAULT_TIMEOUT_MS)
    }

    /// Creates a transport with a custom user agent and timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn with_options(user_agent: &str, timeout_ms: u64) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self { client, timeout_ms })
    }

    /// Builds the POST for `request`.
    ///
    /// String queries are sent verbatim as `text/plain`; everything else is
    /// serialized as JSON.
    fn build_request(&self, request: &OutgoingRequest) -> Result<RequestBuilder, TransportError> {
        let url = Url::parse(&request.url)
            .map_err(|e| TransportError::InvalidUrl(format!("{e}: {}", request.url)))?;

        let mut builder = self.client.post(url);
        if let Some(authorization) = &request.authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }

        Ok(match &request.body {
            Value::String(raw) => builder
                .header(CONTENT_TYPE, "text/plain; charset=utf-8")
                .body(raw.clone()),
            body => builder.json(body),
        })
    }

    /// Parses a response body: JSON when possible, otherwise text.
    fn parse_body(bytes: &[u8]) -> Value {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Value::Null;
        }
        serde_json::from_slice(bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
    }

    /// Maps reqwest errors to `TransportError`.
    fn map_error(&self, error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout {
                timeout_ms: self.timeout_ms,
            };
        }

        if error.is_connect() {
            let message = error.to_string();
            let detail = format!("{error:?}").to_lowercase();
            if detail.contains("refused") {
                return TransportError::ConnectionRefused {
                    host: error
                        .url()
                        .and_then(Url::host_str)
                        .unwrap_or("unknown")
                        .to_string(),
                    port: error
                        .url()
                        .and_then(Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return TransportError::ConnectionFailed(message);
        }

        TransportError::Other(error.to_string())
    }

    async fn send(&self, request: &OutgoingRequest) -> Settled {
        let builder = self.build_request(request)?;

        let response = builder
            .send()
            .await
            .map_err(|e| self.map_error(&e))?;

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                return Err(TransportFailure {
                    message: TransportError::Body(e.to_string()).to_string(),
                    status: Some(status.as_u16()),
                    payload: None,
                });
            }
        };
        let payload = Self::parse_body(&bytes);

        if status.is_success() {
            Ok(TransportResponse::new(status.as_u16(), payload))
        } else {
            Err(TransportFailure::status(status.as_u16(), payload))
        }
    }
}

impl Transport for ReqwestTransport {
    fn post(&self, request: &OutgoingRequest) -> impl Future<Output = Settled> + Send {
        self.send(request)
    }
}
