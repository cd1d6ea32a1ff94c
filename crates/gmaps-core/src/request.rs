//! The request contract shared by every API request type.

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::query::QueryParameter;
use crate::response::Response;

/// A request that can be serialized into a GET query string.
///
/// Implementations validate their mandatory fields and then emit their
/// parameters in a fixed canonical order. Serialization borrows the request
/// and never mutates it, so calling [`Request::query_parameters`] twice on
/// the same value yields identical output.
pub trait Request: Clone + Send + Sync {
    /// The response type the API answers this request with.
    type Response: Response + DeserializeOwned + Send;

    /// Path of the endpoint relative to the API base URL.
    fn path(&self) -> &'static str;

    /// The API key, if one has been set.
    fn key(&self) -> Option<&str>;

    /// Replace the API key.
    fn set_key(&mut self, key: String);

    /// Validate the request and produce its ordered query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first missing required field.
    fn query_parameters(&self) -> Result<Vec<QueryParameter>>;
}

/// Return the value of a required string field, failing when it is unset or
/// empty.
///
/// # Errors
///
/// Returns [`Error::Validation`] with the message `'<field>' is required`.
pub fn require<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::required(field)),
    }
}
