//! Call-wide transport defaults.
//!
//! A `ClientConfig` is resolved once by the application (usually at
//! startup) and handed to `FlightRoutesApi`. The library never reads the
//! environment on its own; `from_env` exists for callers that want the
//! conventional variable.

use std::time::Duration;

/// Backend address used when no override is supplied.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Route searches can run for a long time on the backend, so the timeout is
/// far above the usual few seconds. A call that exceeds it fails for good.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(120_000);

/// Environment variable consulted by [`ClientConfig::from_env`].
pub const BASE_URL_ENV: &str = "FLIGHT_ROUTES_API_URL";

/// Immutable settings shared by every call made through one client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Use `override_url` when it is present and non-empty, otherwise
    /// [`DEFAULT_BASE_URL`].
    pub fn resolve(override_url: Option<String>) -> Self {
        match override_url {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Read [`BASE_URL_ENV`] once and resolve it.
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(BASE_URL_ENV).ok())
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Headers attached to every request: bodies are always JSON.
    pub fn default_headers(&self) -> Vec<(String, String)> {
        vec![("content-type".to_string(), "application/json".to_string())]
    }
}
