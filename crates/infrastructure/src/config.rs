//! Harness configuration.
//!
//! Values come from the process environment:
//!
//! | Variable | Required | Default |
//! |---|---|---|
//! | `QLTEST_URL` | yes | |
//! | `QLTEST_TIMEOUT_MS` | no | `30000` |
//! | `QLTEST_BEARER_TOKEN` | no | |
//! | `QLTEST_USER_AGENT` | no | `qltest/<version>` |

use std::sync::Arc;

use qltest_application::{HarnessError, TestHarness};
use thiserror::Error;

use crate::adapters::{DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT, ReqwestTransport, TransportError};
use crate::logging::TracingEventLog;

/// Endpoint URL variable.
pub const ENV_URL: &str = "QLTEST_URL";
/// Request timeout variable, in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "QLTEST_TIMEOUT_MS";
/// Initial bearer token variable.
pub const ENV_BEARER_TOKEN: &str = "QLTEST_BEARER_TOKEN";
/// User agent variable.
pub const ENV_USER_AGENT: &str = "QLTEST_USER_AGENT";

/// Errors raised while loading configuration or building the harness.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("{0} must be set")]
    MissingVar(&'static str),

    /// A variable is set to an unusable value.
    #[error("{name} has invalid value '{value}': {reason}")]
    InvalidVar {
        /// Variable name.
        name: &'static str,
        /// Raw value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP client could not be created.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The harness rejected the configuration.
    #[error(transparent)]
    Harness(#[from] HarnessError),
}

/// Harness backed by the reqwest transport and the tracing event log.
pub type HttpHarness = TestHarness<ReqwestTransport, TracingEventLog>;

/// Settings for one harness instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Endpoint every test is sent to.
    pub url: String,
    /// Per-request timeout.
    pub timeout_ms: u64,
    /// Token sent as `Authorization: Bearer <token>`, if any.
    pub bearer_token: Option<String>,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl HarnessConfig {
    /// Creates a configuration for `url` with default settings.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            bearer_token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `QLTEST_URL` is unset or a value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is missing or a value cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup(ENV_URL).ok_or(ConfigError::MissingVar(ENV_URL))?;
        let mut config = Self::new(url);

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            config.timeout_ms = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidVar {
                    name: ENV_TIMEOUT_MS,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        config.bearer_token = lookup(ENV_BEARER_TOKEN).filter(|token| !token.trim().is_empty());

        if let Some(user_agent) = lookup(ENV_USER_AGENT).filter(|ua| !ua.trim().is_empty()) {
            config.user_agent = user_agent;
        }

        Ok(config)
    }

    /// Sets the bearer token.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Builds a harness from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Harness`] if the URL is blank, before any
    /// request is made, and [`ConfigError::Transport`] if the HTTP client
    /// cannot be created.
    pub fn build_harness(&self) -> Result<HttpHarness, ConfigError> {
        let transport = ReqwestTransport::with_options(&self.user_agent, self.timeout_ms)?;
        let mut harness = TestHarness::new(self.url.as_str(), Arc::new(transport), TracingEventLog)?;
        if let Some(token) = &self.bearer_token {
            harness.set_bearer_token(token.as_str());
        }
        Ok(harness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use qltest_domain::DomainError;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::from_lookup(lookup(&[(ENV_URL, "http://localhost/")]))
            .expect("url is set");
        assert_eq!(config, HarnessConfig::new("http://localhost/"));
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.bearer_token, None);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_all_values() {
        let config = HarnessConfig::from_lookup(lookup(&[
            (ENV_URL, "http://localhost/"),
            (ENV_TIMEOUT_MS, " 1500 "),
            (ENV_BEARER_TOKEN, "jwt"),
            (ENV_USER_AGENT, "suite/2"),
        ]))
        .expect("valid config");

        assert_eq!(
            config,
            HarnessConfig::new("http://localhost/")
                .with_timeout_ms(1500)
                .with_bearer_token("jwt")
                .with_user_agent("suite/2")
        );
    }

    #[test]
    fn test_missing_url() {
        let result = HarnessConfig::from_lookup(lookup(&[]));
        assert!(matches!(result, Err(ConfigError::MissingVar(ENV_URL))));
    }

    #[test]
    fn test_invalid_timeout() {
        let result = HarnessConfig::from_lookup(lookup(&[
            (ENV_URL, "http://localhost/"),
            (ENV_TIMEOUT_MS, "soon"),
        ]));
        let Err(ConfigError::InvalidVar { name, value, .. }) = result else {
            panic!("expected an invalid variable error");
        };
        assert_eq!(name, ENV_TIMEOUT_MS);
        assert_eq!(value, "soon");
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let config = HarnessConfig::from_lookup(lookup(&[
            (ENV_URL, "http://localhost/"),
            (ENV_BEARER_TOKEN, "  "),
        ]))
        .expect("valid config");
        assert_eq!(config.bearer_token, None);
    }

    #[test]
    fn test_build_harness_applies_token() {
        let harness = HarnessConfig::new("http://localhost/")
            .with_bearer_token("jwt")
            .build_harness()
            .expect("harness builds");
        assert_eq!(harness.url(), "http://localhost/");
        assert_eq!(harness.session().bearer_token(), Some("jwt"));
    }

    #[test]
    fn test_build_harness_rejects_empty_url() {
        let result = HarnessConfig::new("").build_harness();
        assert!(matches!(
            result,
            Err(ConfigError::Harness(HarnessError::Configuration(
                DomainError::EmptyUrl
            )))
        ));
    }
}
