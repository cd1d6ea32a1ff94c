//! # gmaps-core
//!
//! Core types and utilities shared by the Google Maps web service clients.
//!
//! This crate provides the request/response contracts, error handling, query
//! parameter assembly, and HTTP client configuration that the API-specific
//! crates build on.
//!
//! ## Modules
//!
//! - [`error`] - Error type and stable error codes
//! - [`query`] - Ordered query parameter builder with presence policies
//! - [`request`] - The [`Request`] contract implemented by every request type
//! - [`response`] - The [`Response`] envelope and API [`Status`](types::Status)
//! - [`types`] - Shared lookup tables (languages, statuses, session tokens)
//! - [`config`] - Validated client configuration
//! - [`client`] - HTTP client settings and retry policy

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod request;
pub mod response;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use query::{QueryParameter, QueryParams};
pub use request::Request;
pub use response::Response;
