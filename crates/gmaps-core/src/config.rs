//! Configuration structures for Google Maps clients.
//!
//! This module provides the validated configuration a client is built from:
//! the API base URL, an optional default API key, timeouts and retries.

use crate::client::{ClientConfig, RetryPolicy, DEFAULT_MAX_RETRIES, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::Error;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Default base URL of the Places web service.
pub const PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

/// Configuration for a Google Maps client instance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MapsClientConfig {
    /// API base URL
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key applied to requests that do not set their own
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum number of retry attempts
    #[validate(range(min = 0, max = 10))]
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Whether a non-`OK` API status is returned as an error
    #[serde(default)]
    pub status_errors: bool,
}

fn default_base_url() -> String {
    PLACES_BASE_URL.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

const fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

impl MapsClientConfig {
    /// Create a new client configuration for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or validation fails.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            base_url: base_url.into(),
            ..Self::default()
        };

        config
            .validate()
            .map_err(|e| Error::Config(format!("Invalid configuration: {e}")))?;

        Ok(config)
    }

    /// Set the default API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Set maximum retry attempts.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Return non-successful API statuses as errors.
    #[must_use]
    pub const fn with_status_errors(mut self, enabled: bool) -> Self {
        self.status_errors = enabled;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Transport settings implied by this configuration: the request timeout
    /// and a default retry policy capped at `max_retries`.
    #[must_use]
    pub const fn http_config(&self) -> ClientConfig {
        ClientConfig::new()
            .with_timeout(self.timeout())
            .with_retry_policy(RetryPolicy::new().with_max_retries(self.max_retries))
    }

    /// Parse the base URL, making sure it ends with `/` so relative endpoint
    /// paths join beneath it.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url, Error> {
        let mut base = self.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        Url::parse(&base).map_err(|e| Error::Config(format!("Invalid base URL: {e}")))
    }
}

impl Default for MapsClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            request_timeout_secs: default_request_timeout_secs(),
            max_retries: default_max_retries(),
            status_errors: false,
        }
    }
}
