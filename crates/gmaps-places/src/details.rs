//! Place Details: request and response.

use gmaps_core::query::{QueryParameter, QueryParams};
use gmaps_core::request::{require, Request};
use gmaps_core::types::{Language, SessionToken, Status};
use serde::{Deserialize, Serialize};

use crate::fields::FieldSet;
use crate::models::DetailsResult;
use crate::Result;

/// Request for the details of a single place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacesDetailsRequest {
    /// API key. Required.
    pub key: Option<String>,
    /// Place identifier. Required.
    pub place_id: Option<String>,
    /// Language to return results in.
    pub language: Language,
    /// Region code (ccTLD) used to format the results.
    pub region: Option<String>,
    /// Session token tying this call to earlier autocomplete calls.
    pub session_token: Option<String>,
    /// Fields to return. Empty means all fields.
    pub fields: FieldSet,
}

impl PlacesDetailsRequest {
    /// Create a request for `place_id` authenticated with `key`.
    #[must_use]
    pub fn new(key: impl Into<String>, place_id: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            place_id: Some(place_id.into()),
            ..Self::default()
        }
    }

    /// Set the result language.
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the region bias.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the session token.
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Attach a freshly generated session token.
    #[must_use]
    pub fn with_new_session(self) -> Self {
        self.with_session_token(SessionToken::new_v4().to_string())
    }

    /// Select the fields to return.
    #[must_use]
    pub fn with_fields(mut self, fields: impl Into<FieldSet>) -> Self {
        self.fields = fields.into();
        self
    }
}

impl Request for PlacesDetailsRequest {
    type Response = PlacesDetailsResponse;

    fn path(&self) -> &'static str {
        "details/json"
    }

    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn set_key(&mut self, key: String) {
        self.key = Some(key);
    }

    fn query_parameters(&self) -> Result<Vec<QueryParameter>> {
        let key = require(self.key.as_deref(), "Key")?;
        let place_id = require(self.place_id.as_deref(), "PlaceId")?;

        let mut params = QueryParams::new();
        params.push("key", key);
        params.push("placeid", place_id);
        params.push("language", self.language);
        params.push_if("fields", !self.fields.is_empty(), || {
            self.fields.to_query_value()
        });
        params.push_non_empty("region", self.region.as_deref());
        params.push_non_empty("sessiontoken", self.session_token.as_deref());
        Ok(params.into_pairs())
    }
}

/// Response to a [`PlacesDetailsRequest`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlacesDetailsResponse {
    /// The place, absent unless the status is `OK`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<DetailsResult>,
    /// Attributions that must be displayed with the result.
    #[serde(default)]
    pub html_attributions: Vec<String>,
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

gmaps_core::impl_response!(PlacesDetailsResponse);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Field, Umbrella};
    use gmaps_core::Error;

    fn request() -> PlacesDetailsRequest {
        PlacesDetailsRequest {
            key: Some("key".into()),
            place_id: Some("placeId".into()),
            ..PlacesDetailsRequest::default()
        }
    }

    fn value<'a>(params: &'a [QueryParameter], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn default_language_is_english() {
        assert_eq!(PlacesDetailsRequest::default().language, Language::English);
    }

    #[test]
    fn minimal_request_emits_exactly_three_pairs() {
        let params = request().query_parameters().unwrap();
        assert_eq!(
            params,
            vec![
                ("key", "key".to_string()),
                ("placeid", "placeId".to_string()),
                ("language", "en".to_string()),
            ]
        );
    }

    #[test]
    fn region_adds_one_pair() {
        let params = request().with_region("region").query_parameters().unwrap();
        assert_eq!(params.len(), 4);
        assert_eq!(value(&params, "region"), Some("region"));
        assert_eq!(params[..3], request().query_parameters().unwrap()[..]);
    }

    #[test]
    fn session_token_adds_one_pair() {
        let params = request()
            .with_session_token("sessiontoken")
            .query_parameters()
            .unwrap();
        assert_eq!(params.len(), 4);
        assert_eq!(value(&params, "sessiontoken"), Some("sessiontoken"));
        assert_eq!(params[..3], request().query_parameters().unwrap()[..]);
    }

    #[test]
    fn empty_region_and_session_token_are_omitted() {
        let params = request()
            .with_region("")
            .with_session_token("")
            .query_parameters()
            .unwrap();
        assert_eq!(params.len(), 3);
        assert!(value(&params, "region").is_none());
        assert!(value(&params, "sessiontoken").is_none());
    }

    #[test]
    fn basic_fields_expand_to_leaf_names() {
        let params = request()
            .with_fields(Umbrella::Basic)
            .query_parameters()
            .unwrap();

        let expected = FieldSet::BASIC
            .iter()
            .map(|f| f.name())
            .collect::<Vec<_>>()
            .join(",");
        let fields = value(&params, "fields").unwrap();
        assert_eq!(fields, expected);
        assert!(fields.starts_with("address_component,adr_address,"));
        for name in fields.split(',') {
            assert!(!["basic", "contact", "atmosphere"].contains(&name));
        }
    }

    #[test]
    fn fields_follow_declaration_order() {
        let params = request()
            .with_fields(Field::Website | Field::Name)
            .query_parameters()
            .unwrap();
        assert_eq!(value(&params, "fields"), Some("name,website"));
    }

    #[test]
    fn canonical_order_with_every_field_set() {
        let params = request()
            .with_language(Language::Dutch)
            .with_fields(Field::Name)
            .with_region("nl")
            .with_session_token("token")
            .query_parameters()
            .unwrap();

        let keys: Vec<_> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["key", "placeid", "language", "fields", "region", "sessiontoken"]
        );
        assert_eq!(value(&params, "language"), Some("nl"));
    }

    #[test]
    fn missing_key_fails() {
        let request = PlacesDetailsRequest {
            key: None,
            ..PlacesDetailsRequest::default()
        };
        let err = request.query_parameters().unwrap_err();
        assert_eq!(err.to_string(), "'Key' is required");
    }

    #[test]
    fn empty_key_fails() {
        let request = PlacesDetailsRequest {
            key: Some(String::new()),
            place_id: Some("placeId".into()),
            ..PlacesDetailsRequest::default()
        };
        let err = request.query_parameters().unwrap_err();
        assert_eq!(err, Error::Validation("'Key' is required".into()));
    }

    #[test]
    fn missing_place_id_fails() {
        let request = PlacesDetailsRequest {
            key: Some("key".into()),
            place_id: None,
            ..PlacesDetailsRequest::default()
        };
        let err = request.query_parameters().unwrap_err();
        assert_eq!(err.to_string(), "'PlaceId' is required");
    }

    #[test]
    fn empty_place_id_fails() {
        let request = PlacesDetailsRequest::new("key", "");
        let err = request.query_parameters().unwrap_err();
        assert_eq!(err.to_string(), "'PlaceId' is required");
    }

    #[test]
    fn serialization_is_idempotent() {
        let request = request()
            .with_fields(Umbrella::Atmosphere)
            .with_region("region");
        let before = request.clone();

        let first = request.query_parameters().unwrap();
        let second = request.query_parameters().unwrap();
        assert_eq!(first, second);
        assert_eq!(request, before);
    }

    #[test]
    fn new_session_generates_token() {
        let params = request().with_new_session().query_parameters().unwrap();
        assert_eq!(value(&params, "sessiontoken").map(str::len), Some(36));
    }
}
