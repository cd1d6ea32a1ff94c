//! Shared lookup tables for Google Maps requests and responses.
//!
//! Languages map to their wire codes, statuses map to the strings the API
//! returns, and session tokens wrap a random UUID.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Generate the [`Language`] enum together with its wire-code table.
macro_rules! languages {
    ($($(#[$meta:meta])* $variant:ident => $code:literal),+ $(,)?) => {
        /// Languages the API can return results in.
        ///
        /// Each variant renders as the wire code the API expects.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum Language {
            $(
                $(#[$meta])*
                #[doc = concat!("`", $code, "`")]
                $variant,
            )+
        }

        impl Language {
            /// Returns the wire code, e.g. `en`.
            #[must_use]
            pub const fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Returns all supported languages in declaration order.
            #[must_use]
            pub const fn all() -> &'static [Self] {
                &[$(Self::$variant,)+]
            }
        }

        impl FromStr for Language {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($code => Ok(Self::$variant),)+
                    _ => Err(Error::Validation(format!("Unknown language code: {s}"))),
                }
            }
        }
    };
}

languages! {
    Afrikaans => "af",
    Albanian => "sq",
    Amharic => "am",
    Arabic => "ar",
    Armenian => "hy",
    Azerbaijani => "az",
    Basque => "eu",
    Belarusian => "be",
    Bengali => "bn",
    Bosnian => "bs",
    Bulgarian => "bg",
    Burmese => "my",
    Catalan => "ca",
    Chinese => "zh",
    ChineseSimplified => "zh-CN",
    ChineseHongKong => "zh-HK",
    ChineseTraditional => "zh-TW",
    Croatian => "hr",
    Czech => "cs",
    Danish => "da",
    Dutch => "nl",
    #[default]
    English => "en",
    EnglishAustralian => "en-AU",
    EnglishGreatBritain => "en-GB",
    Estonian => "et",
    Farsi => "fa",
    Finnish => "fi",
    Filipino => "fil",
    French => "fr",
    FrenchCanada => "fr-CA",
    Galician => "gl",
    Georgian => "ka",
    German => "de",
    Greek => "el",
    Gujarati => "gu",
    Hebrew => "iw",
    Hindi => "hi",
    Hungarian => "hu",
    Icelandic => "is",
    Indonesian => "id",
    Italian => "it",
    Japanese => "ja",
    Kannada => "kn",
    Kazakh => "kk",
    Khmer => "km",
    Korean => "ko",
    Kyrgyz => "ky",
    Lao => "lo",
    Latvian => "lv",
    Lithuanian => "lt",
    Macedonian => "mk",
    Malay => "ms",
    Malayalam => "ml",
    Marathi => "mr",
    Mongolian => "mn",
    Nepali => "ne",
    Norwegian => "no",
    Polish => "pl",
    Portuguese => "pt",
    PortugueseBrazil => "pt-BR",
    PortuguesePortugal => "pt-PT",
    Punjabi => "pa",
    Romanian => "ro",
    Russian => "ru",
    Serbian => "sr",
    Sinhalese => "si",
    Slovak => "sk",
    Slovenian => "sl",
    Spanish => "es",
    SpanishLatinAmerica => "es-419",
    Swahili => "sw",
    Swedish => "sv",
    Tamil => "ta",
    Telugu => "te",
    Thai => "th",
    Turkish => "tr",
    Ukrainian => "uk",
    Urdu => "ur",
    Uzbek => "uz",
    Vietnamese => "vi",
    Zulu => "zu",
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

/// Status field of a Google Maps response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// No errors occurred.
    Ok,
    /// The request succeeded but returned nothing.
    ZeroResults,
    /// The caller exceeded the request quota.
    OverQueryLimit,
    /// Billing is not enabled or the daily limit is reached.
    OverDailyLimit,
    /// The request was denied, usually because of an invalid key.
    RequestDenied,
    /// A required parameter is missing or malformed.
    InvalidRequest,
    /// The referenced place was not found.
    NotFound,
    /// A server-side error; retrying may succeed.
    UnknownError,
    /// A status string this client does not recognise.
    #[default]
    Unknown,
}

impl Status {
    /// Returns the status as the API spells it.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::OverQueryLimit => "OVER_QUERY_LIMIT",
            Self::OverDailyLimit => "OVER_DAILY_LIMIT",
            Self::RequestDenied => "REQUEST_DENIED",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Returns true for `OK` and `ZERO_RESULTS`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Ok | Self::ZeroResults)
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            "OVER_QUERY_LIMIT" => Self::OverQueryLimit,
            "OVER_DAILY_LIMIT" => Self::OverDailyLimit,
            "REQUEST_DENIED" => Self::RequestDenied,
            "INVALID_REQUEST" => Self::InvalidRequest,
            "NOT_FOUND" => Self::NotFound,
            "UNKNOWN_ERROR" => Self::UnknownError,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let status = String::deserialize(deserializer)?;
        Ok(Self::from(status.as_str()))
    }
}

/// Token grouping autocomplete and details calls into one billing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(Uuid);

impl SessionToken {
    /// Creates a new random token (UUID v4).
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner [`Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for SessionToken {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_default_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::default().code(), "en");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::Hebrew.to_string(), "iw");
        assert_eq!(Language::ChineseTraditional.code(), "zh-TW");
        assert_eq!(Language::SpanishLatinAmerica.code(), "es-419");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("pt-BR".parse::<Language>().unwrap(), Language::PortugueseBrazil);
        assert!("xx".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_codes_are_unique() {
        let mut codes: Vec<_> = Language::all().iter().map(Language::code).collect();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }

    #[test]
    fn test_language_serde() {
        let json = serde_json::to_string(&Language::German).unwrap();
        assert_eq!(json, "\"de\"");
        let lang: Language = serde_json::from_str("\"ja\"").unwrap();
        assert_eq!(lang, Language::Japanese);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(Status::from("OK"), Status::Ok);
        assert_eq!(Status::from("NOT_FOUND"), Status::NotFound);
        assert_eq!(Status::from("SOMETHING_NEW"), Status::Unknown);
    }

    #[test]
    fn test_status_deserialize() {
        let status: Status = serde_json::from_str("\"OVER_QUERY_LIMIT\"").unwrap();
        assert_eq!(status, Status::OverQueryLimit);
        assert!(!status.is_success());
        assert!(Status::ZeroResults.is_success());
    }

    #[test]
    fn test_session_token_display() {
        let uuid = Uuid::parse_str("3fa85f64-5717-4562-b3fc-2c963f66afa6").unwrap();
        let token = SessionToken::from(uuid);
        assert_eq!(token.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
        assert_ne!(SessionToken::new_v4(), SessionToken::new_v4());
    }
}
