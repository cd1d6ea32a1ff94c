//! Asynchronous Places client implementation.

use crate::details::{PlacesDetailsRequest, PlacesDetailsResponse};
use crate::fields::{Field, FieldSet};
use crate::find::{PlacesFindRequest, PlacesFindResponse};
use crate::Result;
use async_trait::async_trait;
use gmaps_core::client::{ClientConfig, RetryPolicy, DEFAULT_CONNECT_TIMEOUT};
use gmaps_core::config::MapsClientConfig;
use gmaps_core::query::encode_redacted;
use gmaps_core::{Error, Request, Response};
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use url::Url;

const USER_AGENT: &str = concat!("gmaps-places/", env!("CARGO_PKG_VERSION"));

/// Builder for [`PlacesClient`].
#[derive(Debug, Clone)]
pub struct PlacesClientBuilder {
    config: MapsClientConfig,
    http_config: ClientConfig,
}

impl PlacesClientBuilder {
    /// Create a new builder from a [`MapsClientConfig`].
    ///
    /// The timeout and retry limit come from the configuration until
    /// [`with_http_config`](Self::with_http_config) or
    /// [`with_retry_policy`](Self::with_retry_policy) replaces them.
    #[must_use]
    pub fn new(config: MapsClientConfig) -> Self {
        let http_config = config.http_config();
        Self {
            config,
            http_config,
        }
    }

    /// Replace the HTTP client configuration, including timeout and retries.
    #[must_use]
    pub fn with_http_config(mut self, http_config: ClientConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Replace the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.http_config = self.http_config.with_retry_policy(retry);
        self
    }

    /// Finalise the builder and create the [`PlacesClient`].
    pub fn build(self) -> Result<PlacesClient> {
        let base_url = self.config.parse_base_url()?;

        let http_config = self.http_config;
        let http = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(http_config.timeout)
            .pool_idle_timeout(http_config.pool_idle_timeout)
            .pool_max_idle_per_host(http_config.pool_max_idle_per_host)
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT))
            .build()
            .map_err(|err| Error::Config(format!("Failed to build Places HTTP client: {err}")))?;

        let default_key = self
            .config
            .api_key
            .filter(|key| !key.expose_secret().is_empty())
            .map(Arc::new);

        Ok(PlacesClient {
            http,
            base_url,
            default_key,
            retry_policy: http_config.retry_policy,
            status_errors: self.config.status_errors,
        })
    }
}

/// Asynchronous client for the Places web service.
#[derive(Clone)]
pub struct PlacesClient {
    http: Client,
    base_url: Url,
    default_key: Option<Arc<SecretString>>,
    retry_policy: RetryPolicy,
    status_errors: bool,
}

impl PlacesClient {
    /// Construct a client for the given base URL with default settings.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::from_config(&MapsClientConfig::new(base_url)?)
    }

    /// Construct a client directly from the configuration.
    pub fn from_config(config: &MapsClientConfig) -> Result<Self> {
        PlacesClientBuilder::new(config.clone()).build()
    }

    /// Start a builder pre-populated with the provided configuration.
    #[must_use]
    pub fn builder(config: MapsClientConfig) -> PlacesClientBuilder {
        PlacesClientBuilder::new(config)
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the details of a place.
    pub async fn details(&self, request: &PlacesDetailsRequest) -> Result<PlacesDetailsResponse> {
        self.send(request).await
    }

    /// Find places matching a text query or phone number.
    pub async fn find(&self, request: &PlacesFindRequest) -> Result<PlacesFindResponse> {
        self.send(request).await
    }

    /// Send any [`Request`] and decode its response.
    ///
    /// Validation runs before any network I/O. Timeouts, connection failures,
    /// `429` and `5xx` answers are retried under the client's retry policy.
    pub async fn send<R: Request>(&self, request: &R) -> Result<R::Response> {
        let params = self.query_parameters(request)?;
        let url = self.base_url.join(request.path())?;
        let raw_query_string = encode_redacted(&params);
        let path = request.path();

        #[allow(unused_assignments)]
        let mut last_error: Option<Error> = None;
        let mut attempt = 0;

        loop {
            info!(path, attempt, "Places request");

            match self.http.get(url.clone()).query(&params).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response.text().await?;
                        return self.decode::<R::Response>(path, body, raw_query_string);
                    }

                    let text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());

                    let error = map_status_to_error(status, text);
                    if !is_retryable_status(status) {
                        return Err(error);
                    }
                    last_error = Some(error);
                }
                Err(err) => {
                    let error = Error::from(err);
                    if !error.is_transient() {
                        return Err(error);
                    }
                    last_error = Some(error);
                }
            }

            attempt += 1;
            if attempt > self.retry_policy.max_retries {
                break;
            }
            let delay = self.retry_policy.delay_for_attempt(attempt);
            if delay > Duration::from_millis(0) {
                debug!("Retrying Places request after {:?}", delay);
                sleep(delay).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            Error::ServiceUnavailable("Places request failed after retries".to_string())
        }))
    }

    fn query_parameters<R: Request>(&self, request: &R) -> Result<Vec<(&'static str, String)>> {
        let has_key = request.key().is_some_and(|key| !key.is_empty());
        match &self.default_key {
            Some(default_key) if !has_key => {
                let mut keyed = request.clone();
                keyed.set_key(default_key.expose_secret().to_string());
                keyed.query_parameters()
            }
            _ => request.query_parameters(),
        }
    }

    fn decode<T>(&self, path: &str, body: String, raw_query_string: String) -> Result<T>
    where
        T: Response + serde::de::DeserializeOwned,
    {
        let mut response: T = serde_json::from_str(&body).map_err(|err| {
            Error::Parse(format!("Failed to parse Places response for `{path}`: {err}"))
        })?;
        response.set_raw(body, raw_query_string);

        let status = response.status();
        if !status.is_success() {
            warn!(
                path,
                %status,
                error_message = response.error_message().unwrap_or_default(),
                "Places API returned a non-successful status"
            );
            if self.status_errors {
                response.check_status()?;
            }
        }

        Ok(response)
    }
}

fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

fn map_status_to_error(status: StatusCode, text: String) -> Error {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Error::Http(format!("Places authentication failed: {text}"))
        }
        StatusCode::TOO_MANY_REQUESTS
        | StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT => {
            Error::ServiceUnavailable(format!("Places temporarily unavailable: {text}"))
        }
        status if status.is_server_error() => {
            Error::ServiceUnavailable(format!("Places server error {status}: {text}"))
        }
        _ => Error::Http(format!("Places error {status}: {text}")),
    }
}

/// Abstraction over the Places calls, so callers can substitute a test double.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlacesApi: Send + Sync {
    /// Fetch the details of a place.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, transport or decoding fails.
    async fn details(&self, request: &PlacesDetailsRequest) -> Result<PlacesDetailsResponse>;

    /// Find places matching a text query or phone number.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, transport or decoding fails.
    async fn find(&self, request: &PlacesFindRequest) -> Result<PlacesFindResponse>;
}

#[async_trait]
impl PlacesApi for PlacesClient {
    async fn details(&self, request: &PlacesDetailsRequest) -> Result<PlacesDetailsResponse> {
        Self::details(self, request).await
    }

    async fn find(&self, request: &PlacesFindRequest) -> Result<PlacesFindResponse> {
        Self::find(self, request).await
    }
}

/// Find a place by text, then fetch `fields` for the best candidate.
///
/// The find call asks only for the place id; the details call reuses the
/// find request's key and language. Returns `None` when nothing matched.
///
/// # Errors
///
/// Returns the first error raised by either call.
pub async fn resolve_place(
    api: &dyn PlacesApi,
    request: &PlacesFindRequest,
    fields: FieldSet,
) -> Result<Option<PlacesDetailsResponse>> {
    let find = request.clone().with_fields(Field::PlaceId);
    let found = api.find(&find).await?;

    let Some(place_id) = found
        .candidates
        .into_iter()
        .find_map(|candidate| candidate.place_id)
    else {
        debug!("No candidates for find-place input");
        return Ok(None);
    };

    let details = PlacesDetailsRequest {
        key: request.key.clone(),
        place_id: Some(place_id),
        language: request.language,
        fields,
        ..PlacesDetailsRequest::default()
    };

    api.details(&details).await.map(Some)
}
