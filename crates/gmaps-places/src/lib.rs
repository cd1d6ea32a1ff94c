//! Places client and data models for the Google Maps web services.
//!
//! Provides typed requests that serialize into the Places API query string,
//! typed responses deserialized from its JSON bodies, and an asynchronous
//! client that sends one and returns the other.

#![deny(missing_docs)]

pub mod client;
pub mod details;
pub mod fields;
pub mod find;
pub mod models;

pub use client::{PlacesApi, PlacesClient, PlacesClientBuilder};
pub use details::{PlacesDetailsRequest, PlacesDetailsResponse};
pub use fields::{Field, FieldSet, Flag, Umbrella};
pub use find::{InputType, PlacesFindRequest, PlacesFindResponse};
pub use models::DetailsResult;

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = gmaps_core::Result<T>;
