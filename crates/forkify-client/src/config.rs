//! Client configuration.

use std::time::Duration;

/// Default endpoint of the recipe service.
pub const DEFAULT_API_URL: &str = "https://forkify-api.herokuapp.com/api/v2/recipes";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`crate::HttpClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Recipes endpoint, e.g. `https://host/api/v2/recipes`.
    pub base_url: String,
    /// Developer key. Sent as `?key=` so user-submitted recipes are visible.
    pub api_key: Option<String>,
    /// Whole-request timeout (send + body).
    pub timeout: Duration,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
