//! Client configuration.
//!
//! All settings carry local-development defaults and can be overridden
//! from the environment, so `DynadocConfig::from_env()` works against a
//! local store with nothing set.

use std::time::Duration;

use dynadoc_http::Credentials;

/// Configuration for connecting to a document store.
#[derive(Debug, Clone)]
pub struct DynadocConfig {
    /// Store endpoint URL.
    pub endpoint: String,
    /// Signing region.
    pub region: String,
    /// Access credentials.
    pub credentials: Credentials,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for DynadocConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000".to_owned(),
            region: "us-east-1".to_owned(),
            credentials: Credentials::new("test", "test"),
            timeout: Duration::from_secs(30),
        }
    }
}

impl DynadocConfig {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `DYNADOC_ENDPOINT` (falling back to
    /// `AWS_ENDPOINT_URL_DYNAMODB`), `AWS_REGION`, `AWS_ACCESS_KEY_ID`
    /// with `AWS_SECRET_ACCESS_KEY`, and `DYNADOC_TIMEOUT_SECS`.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("DYNADOC_ENDPOINT") {
            config.endpoint = v;
        } else if let Ok(v) = std::env::var("AWS_ENDPOINT_URL_DYNAMODB") {
            config.endpoint = v;
        }
        if let Ok(v) = std::env::var("AWS_REGION") {
            config.region = v;
        }
        if let Some(credentials) = Credentials::from_env() {
            config.credentials = credentials;
        }
        if let Ok(v) = std::env::var("DYNADOC_TIMEOUT_SECS") {
            if let Ok(secs) = v.parse() {
                config.timeout = Duration::from_secs(secs);
            }
        }

        config
    }

    /// Set the endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the signing region.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the credentials.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
