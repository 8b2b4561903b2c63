//! HTTP client for the upstream civic-data services.
//!
//! This module provides the `CivicApiClient` struct for fetching
//! representative lookups and the public legislator dataset.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{CongressLookupResponse, RepLookupResponse};
use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Base URL for the enriched representative lookup service.
const REP_LOOKUP_API_BASE: &str = "https://api.5calls.org/v1";

/// Base URL for the minimal congress member lookup service.
const CONGRESS_LOOKUP_API_BASE: &str = "https://whoismyrepresentative.com";

/// Request header carrying the enriched-lookup API token.
const TOKEN_HEADER: &str = "X-5Calls-Token";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the civic-data services.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct CivicApiClient {
    client: Client,
    token: Option<String>,
}

impl CivicApiClient {
    /// Create a new API client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            token: None,
        })
    }

    /// Attach the token sent with enriched lookups. The other
    /// endpoints are public and ignore it.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Guard applied before anything is forwarded upstream: only a
    /// plain 5-digit ZIP is a valid query.
    fn check_zip5(zip5: &str) -> Result<(), ApiError> {
        if zip5.len() == 5 && zip5.bytes().all(|b| b.is_ascii_digit()) {
            Ok(())
        } else {
            Err(ApiError::InvalidZip)
        }
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    // ===== Lookup Methods =====

    /// Enriched representative lookup for a 5-digit ZIP.
    pub async fn lookup_representatives(&self, zip5: &str) -> Result<RepLookupResponse> {
        Self::check_zip5(zip5)?;

        let url = format!("{}/representatives?location={}", REP_LOOKUP_API_BASE, zip5);
        debug!(zip = zip5, "Fetching enriched representative lookup");

        let mut request = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json");
        if let Some(ref token) = self.token {
            request = request.header(TOKEN_HEADER, token);
        }

        let response = request
            .send()
            .await
            .context("Failed to send representative lookup request")?;

        let response = Self::check_response(response).await?;

        response
            .json()
            .await
            .context("Failed to parse representative lookup response")
    }

    /// Minimal congress member lookup for a 5-digit ZIP.
    pub async fn lookup_congress_members(&self, zip5: &str) -> Result<CongressLookupResponse> {
        Self::check_zip5(zip5)?;

        let url = format!(
            "{}/getall_mems.php?zip={}&output=json",
            CONGRESS_LOOKUP_API_BASE, zip5
        );
        debug!(zip = zip5, "Fetching minimal congress member lookup");

        self.get_json(&url).await
    }
}
