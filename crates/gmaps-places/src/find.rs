//! Find Place from text or phone number: request and response.

use gmaps_core::query::{QueryParameter, QueryParams};
use gmaps_core::request::{require, Request};
use gmaps_core::types::{Language, Status};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::fields::FieldSet;
use crate::models::DetailsResult;
use crate::Result;

/// How the `input` of a [`PlacesFindRequest`] is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputType {
    /// Free text: a name, address or phone number.
    #[default]
    TextQuery,
    /// A phone number in international format, e.g. `+61293744000`.
    PhoneNumber,
}

impl InputType {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TextQuery => "textquery",
            Self::PhoneNumber => "phonenumber",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to find places matching a text or phone number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacesFindRequest {
    /// API key. Required.
    pub key: Option<String>,
    /// Text to search for. Required.
    pub input: Option<String>,
    /// How `input` is interpreted.
    pub input_type: InputType,
    /// Language to return results in.
    pub language: Language,
    /// Fields to return for each candidate.
    pub fields: FieldSet,
    /// Location bias, e.g. `ipbias`, `point:lat,lng` or
    /// `circle:radius@lat,lng`.
    pub location_bias: Option<String>,
}

impl PlacesFindRequest {
    /// Create a text query authenticated with `key`.
    #[must_use]
    pub fn new(key: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            input: Some(input.into()),
            ..Self::default()
        }
    }

    /// Set how the input is interpreted.
    #[must_use]
    pub const fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Set the result language.
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Select the fields to return.
    #[must_use]
    pub fn with_fields(mut self, fields: impl Into<FieldSet>) -> Self {
        self.fields = fields.into();
        self
    }

    /// Set the location bias.
    #[must_use]
    pub fn with_location_bias(mut self, bias: impl Into<String>) -> Self {
        self.location_bias = Some(bias.into());
        self
    }
}

impl Request for PlacesFindRequest {
    type Response = PlacesFindResponse;

    fn path(&self) -> &'static str {
        "findplacefromtext/json"
    }

    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn set_key(&mut self, key: String) {
        self.key = Some(key);
    }

    fn query_parameters(&self) -> Result<Vec<QueryParameter>> {
        let key = require(self.key.as_deref(), "Key")?;
        let input = require(self.input.as_deref(), "Input")?;

        let mut params = QueryParams::new();
        params.push("key", key);
        params.push("input", input);
        params.push("inputtype", self.input_type);
        params.push("language", self.language);
        params.push_if("fields", !self.fields.is_empty(), || {
            self.fields.to_query_value()
        });
        params.push_non_empty("locationbias", self.location_bias.as_deref());
        Ok(params.into_pairs())
    }
}

/// Response to a [`PlacesFindRequest`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlacesFindResponse {
    /// Matching places.
    #[serde(default)]
    pub candidates: Vec<DetailsResult>,
    /// Response status.
    #[serde(default)]
    pub status: Status,
    /// Detail accompanying a non-`OK` status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Body as received.
    #[serde(skip)]
    pub raw_json: String,
    /// Query string sent, key redacted.
    #[serde(skip)]
    pub raw_query_string: String,
}

gmaps_core::impl_response!(PlacesFindResponse);
