//! The response envelope shared by every API response type.

use crate::error::{Error, Result};
use crate::types::Status;

/// Fields every Google Maps JSON response carries.
///
/// `raw_json` and `raw_query_string` are not part of the body; the client
/// fills them in after a successful round trip.
pub trait Response {
    /// Status reported in the response body.
    fn status(&self) -> Status;

    /// Additional detail supplied by the API when the status is not `OK`.
    ///
    /// Not guaranteed to be present and its content is subject to change.
    fn error_message(&self) -> Option<&str>;

    /// The response body exactly as received.
    fn raw_json(&self) -> &str;

    /// The query string the request was sent with, key redacted.
    fn raw_query_string(&self) -> &str;

    /// Record the raw body and query string.
    fn set_raw(&mut self, raw_json: String, raw_query_string: String);

    /// Convert a non-successful status into an [`Error::Api`].
    ///
    /// `OK` and `ZERO_RESULTS` are both successful.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] carrying the status and error message.
    fn check_status(&self) -> Result<()> {
        let status = self.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Api {
                status,
                message: self.error_message().unwrap_or_default().to_string(),
            })
        }
    }
}

/// Implement [`Response`] for a struct with `status`, `error_message`,
/// `raw_json` and `raw_query_string` fields.
#[macro_export]
macro_rules! impl_response {
    ($name:ty) => {
        impl $crate::response::Response for $name {
            fn status(&self) -> $crate::types::Status {
                self.status
            }

            fn error_message(&self) -> Option<&str> {
                self.error_message.as_deref()
            }

            fn raw_json(&self) -> &str {
                &self.raw_json
            }

            fn raw_query_string(&self) -> &str {
                &self.raw_query_string
            }

            fn set_raw(&mut self, raw_json: String, raw_query_string: String) {
                self.raw_json = raw_json;
                self.raw_query_string = raw_query_string;
            }
        }
    };
}
