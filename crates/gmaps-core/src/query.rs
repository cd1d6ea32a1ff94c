//! Ordered builder for HTTP query parameters.
//!
//! Every field a request emits goes through one of the presence policies
//! below, so whether a parameter appears is decided at the call site rather
//! than by a catch-all null check.

use std::fmt::Display;

/// A single query-string pair: lowercase API parameter name and its value.
pub type QueryParameter = (&'static str, String);

/// Builder for assembling query parameter pairs in emission order.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<QueryParameter>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a pair that is always present.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key, value.to_string()));
    }

    /// Append a pair when the value is present.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: Display,
    {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Append a pair when the value is present and not an empty string.
    pub fn push_non_empty(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Append a pair produced lazily when `condition` holds.
    pub fn push_if<F>(&mut self, key: &'static str, condition: bool, value: F)
    where
        F: FnOnce() -> String,
    {
        if condition {
            self.pairs.push((key, value()));
        }
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Return the collected key/value pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<QueryParameter> {
        self.pairs
    }
}

/// Render pairs as a percent-encoded query string, replacing the value of
/// `key` with `redacted`.
///
/// Used for the raw query string echoed on responses so the API key does not
/// end up in logs.
#[must_use]
pub fn encode_redacted(pairs: &[QueryParameter]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        if *key == "key" {
            serializer.append_pair(key, "redacted");
        } else {
            serializer.append_pair(key, value);
        }
    }
    serializer.finish()
}
