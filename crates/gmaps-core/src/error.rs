//! Error types for Google Maps client operations.
//!
//! A single error enum covers request validation, transport failures and
//! non-successful API statuses, with a stable code per variant for
//! programmatic handling.

use serde::Serialize;
use thiserror::Error;

use crate::types::Status;

/// Main error type for Google Maps client operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A request is missing a required field.
    ///
    /// Displays the bare message, e.g. `'Key' is required`.
    #[error("{0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Service is unavailable or rate limiting the caller
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Failed to parse an API response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid endpoint URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The API answered with a non-successful status
    #[error("API returned {status}: {message}")]
    Api {
        /// Status reported in the response body
        status: Status,
        /// The `error_message` field, or empty when absent
        message: String,
    },
}

/// Specialized result type for Google Maps client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Structured error detail for serialization.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl Error {
    /// Creates a validation error for a missing required field.
    ///
    /// `field` is the user-facing field name, e.g. `Key` or `PlaceId`.
    #[must_use]
    pub fn required(field: &str) -> Self {
        Self::Validation(format!("'{field}' is required"))
    }

    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Http(_) => "HTTP_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Parse(_) => "PARSE_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::Api { .. } => "API_ERROR",
        }
    }

    /// Converts the error into an [`ErrorDetail`].
    #[must_use]
    pub fn into_detail(self) -> ErrorDetail {
        ErrorDetail {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }

    /// Returns true when retrying the same request may succeed.
    ///
    /// Rejected requests (`Http`, e.g. a `403`) are not transient.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::ServiceUnavailable(_))
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_message() {
        assert_eq!(Error::required("Key").to_string(), "'Key' is required");
        assert_eq!(
            Error::required("PlaceId").to_string(),
            "'PlaceId' is required"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::Validation("test".to_string()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(Error::Config("test".to_string()).error_code(), "CONFIG_ERROR");
        assert_eq!(Error::Http("test".to_string()).error_code(), "HTTP_ERROR");
        assert_eq!(Error::Timeout("test".to_string()).error_code(), "TIMEOUT");
        assert_eq!(
            Error::ServiceUnavailable("test".to_string()).error_code(),
            "SERVICE_UNAVAILABLE"
        );
        assert_eq!(Error::Parse("test".to_string()).error_code(), "PARSE_ERROR");
        assert_eq!(
            Error::InvalidEndpoint("test".to_string()).error_code(),
            "INVALID_ENDPOINT"
        );
        assert_eq!(
            Error::Api {
                status: Status::RequestDenied,
                message: "denied".to_string()
            }
            .error_code(),
            "API_ERROR"
        );
    }

    #[test]
    fn test_api_error_display() {
        let err = Error::Api {
            status: Status::RequestDenied,
            message: "The provided API key is invalid.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API returned REQUEST_DENIED: The provided API key is invalid."
        );
    }

    #[test]
    fn test_into_detail() {
        let detail = Error::required("Key").into_detail();
        assert_eq!(detail.code, "VALIDATION_ERROR");
        assert_eq!(detail.message, "'Key' is required");
    }

    #[test]
    fn test_is_transient() {
        assert!(Error::Timeout("t".to_string()).is_transient());
        assert!(Error::ServiceUnavailable("s".to_string()).is_transient());
        assert!(!Error::required("Key").is_transient());
        assert!(!Error::Parse("p".to_string()).is_transient());
        assert!(!Error::Http("Places authentication failed: forbidden".to_string()).is_transient());
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let gmaps_err: Error = err.into();
        assert!(matches!(gmaps_err, Error::InvalidEndpoint(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let gmaps_err: Error = err.into();
        assert!(matches!(gmaps_err, Error::Parse(_)));
    }
}
