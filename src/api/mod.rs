//! HTTP client module for the upstream civic-data services.
//!
//! This module provides the `CivicApiClient` for the two supported
//! representative lookup services and the public legislator dataset,
//! plus the wire types those services return.
//!
//! The enriched lookup accepts an optional API token sent in a request
//! header; the other endpoints are public and unauthenticated.

pub mod client;
pub mod error;
pub mod types;

pub use client::CivicApiClient;
pub use error::ApiError;
pub use types::{
    CongressLookupRecord, CongressLookupResponse, RepLookupRecord, RepLookupResponse,
};
