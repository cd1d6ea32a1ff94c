//! Place data shared by the details and find-place responses.
//!
//! Every field is optional: the API only returns what the request's
//! `fields` parameter selected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A place as returned by the Places API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DetailsResult {
    /// Unique place identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    /// Human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Address components.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address_components: Vec<AddressComponent>,
    /// Address in adr microformat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adr_address: Option<String>,
    /// Operational status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_status: Option<BusinessStatus>,
    /// Full address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    /// Location and viewport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    /// Icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Deprecated closure flag; prefer `business_status`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanently_closed: Option<bool>,
    /// Photo references.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<Photo>,
    /// Plus code of the location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plus_code: Option<PlusCode>,
    /// Place types, e.g. `restaurant`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    /// Google-owned page for the place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Offset from UTC in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<i32>,
    /// Simplified address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vicinity: Option<String>,
    /// Local phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_phone_number: Option<String>,
    /// Phone number in international format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub international_phone_number: Option<String>,
    /// Opening hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<OpeningHours>,
    /// Authoritative website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Price level, 0 (free) to 4 (very expensive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    /// Aggregated rating, 1.0 to 5.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Up to five reviews.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<Review>,
    /// Total number of ratings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ratings_total: Option<u32>,
}

/// Operational status of a place.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessStatus {
    /// Open for business.
    Operational,
    /// Temporarily closed.
    ClosedTemporarily,
    /// Permanently closed.
    ClosedPermanently,
    /// A status this client does not recognise.
    #[serde(other)]
    Unknown,
}

/// One component of a structured address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddressComponent {
    /// Full text, e.g. `Australia`.
    pub long_name: String,
    /// Abbreviated text, e.g. `AU`.
    pub short_name: String,
    /// Component types, e.g. `country`.
    #[serde(default)]
    pub types: Vec<String>,
}

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// A bounding box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ViewPort {
    /// North-east corner.
    pub northeast: Coordinate,
    /// South-west corner.
    pub southwest: Coordinate,
}

/// Location of a place.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Geometry {
    /// Geocoded coordinate.
    pub location: Coordinate,
    /// Recommended viewport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<ViewPort>,
}

/// Reference to a photo of a place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    /// Token for the photo endpoint.
    pub photo_reference: String,
    /// Maximum height in pixels.
    pub height: u32,
    /// Maximum width in pixels.
    pub width: u32,
    /// Attributions that must be displayed with the photo.
    #[serde(default)]
    pub html_attributions: Vec<String>,
}

/// Open location code of a place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlusCode {
    /// Global code, e.g. `4RRH46J5+FP`.
    pub global_code: String,
    /// Local code with locality, e.g. `46J5+FP Sydney`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compound_code: Option<String>,
}

/// Weekly opening hours.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OpeningHours {
    /// Whether the place is open right now.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
    /// Opening periods.
    #[serde(default)]
    pub periods: Vec<Period>,
    /// One formatted line per weekday.
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

/// An opening period. A place open around the clock has no `close`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Period {
    /// When the period starts.
    pub open: DayTime,
    /// When the period ends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<DayTime>,
}

/// A day of week (0 = Sunday) and a 24h `hhmm` time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayTime {
    /// Day of week, 0 = Sunday.
    pub day: u8,
    /// Time as `hhmm`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// A user review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Display name of the author.
    pub author_name: String,
    /// Link to the author's profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    /// Language code of the review text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Author profile photo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
    /// Rating, 1 to 5.
    pub rating: u8,
    /// Relative age, e.g. `a month ago`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_time_description: Option<String>,
    /// Review text.
    #[serde(default)]
    pub text: String,
    /// When the review was submitted.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "chrono::serde::ts_seconds_option"
    )]
    pub time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_result_deserializes() {
        let result: DetailsResult = serde_json::from_value(json!({})).unwrap();
        assert_eq!(result, DetailsResult::default());
    }

    #[test]
    fn business_status_unknown_value() {
        let status: BusinessStatus = serde_json::from_value(json!("SOMETHING_ELSE")).unwrap();
        assert_eq!(status, BusinessStatus::Unknown);
        let status: BusinessStatus = serde_json::from_value(json!("CLOSED_TEMPORARILY")).unwrap();
        assert_eq!(status, BusinessStatus::ClosedTemporarily);
    }

    #[test]
    fn review_time_from_unix_seconds() {
        let review: Review = serde_json::from_value(json!({
            "author_name": "Jane",
            "rating": 5,
            "text": "Great",
            "time": 1_600_000_000
        }))
        .unwrap();

        assert_eq!(review.time.unwrap().timestamp(), 1_600_000_000);
    }

    #[test]
    fn always_open_period_has_no_close() {
        let hours: OpeningHours = serde_json::from_value(json!({
            "open_now": true,
            "periods": [{ "open": { "day": 0, "time": "0000" } }]
        }))
        .unwrap();

        assert_eq!(hours.periods.len(), 1);
        assert!(hours.periods[0].close.is_none());
        assert!(hours.weekday_text.is_empty());
    }
}
