//! Representative resolution.
//!
//! Validates the ZIP, queries the configured lookup service, and
//! normalizes both supported wire shapes into canonical
//! [`Representative`](crate::models::Representative) records: filtered
//! to federal seats, optionally enriched from the legislator
//! directory, senators sorted ahead of house members.
//!
//! Resolution never returns an error to the caller. Every failure path
//! degrades to an empty list plus a user-facing message in the result.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::api::types::{CongressLookupRecord, CongressLookupResponse, RepLookupRecord, RepLookupResponse};
use crate::api::CivicApiClient;
use crate::legislators::{find_legislator, LegislatorDirectory, MatchStrategy};
use crate::models::{Chamber, FieldOffice, LegislatorInfo, Representative, RepresentativesResult};
use crate::utils::{cmp_ignore_case, none_if_empty};
use crate::zip::{is_valid_zip_code, zip5};

// ============================================================================
// Constants
// ============================================================================

/// Shown for a malformed ZIP, before any network access.
const ERROR_INVALID_ZIP: &str = "Please enter a valid 5-digit U.S. ZIP code.";

/// Shown when a valid ZIP resolves to no federal seats.
const ERROR_NO_RESULTS: &str =
    "No representatives found for this ZIP code. Please verify the ZIP code is correct.";

/// Shown when the upstream lookup fails or cannot be reached.
const ERROR_UPSTREAM: &str =
    "Unable to fetch representative information. Please try again later.";

/// Which upstream lookup service backs representative resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupProvider {
    /// Enriched per-seat records: photo, match reason, field offices.
    #[default]
    Enriched,
    /// Minimal records, enriched via the legislator directory.
    Minimal,
}

/// Resolves federal representatives for a ZIP code.
pub struct RepresentativeResolver {
    client: CivicApiClient,
    directory: LegislatorDirectory,
    provider: LookupProvider,
    match_strategy: MatchStrategy,
}

impl RepresentativeResolver {
    pub fn new(
        client: CivicApiClient,
        directory: LegislatorDirectory,
        provider: LookupProvider,
    ) -> Self {
        Self {
            client,
            directory,
            provider,
            match_strategy: MatchStrategy::default(),
        }
    }

    /// Override the directory name-matching strategy.
    pub fn with_match_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.match_strategy = strategy;
        self
    }

    /// Resolves the federal representatives for a ZIP code.
    pub async fn get_representatives_by_zip(&self, zip: &str) -> RepresentativesResult {
        if !is_valid_zip_code(zip) {
            return RepresentativesResult::with_error(ERROR_INVALID_ZIP);
        }

        // Only the 5-digit portion is forwarded upstream.
        let zip5 = zip5(zip);

        match self.provider {
            LookupProvider::Enriched => self.resolve_enriched(zip5).await,
            LookupProvider::Minimal => self.resolve_minimal(zip5).await,
        }
    }

    async fn resolve_enriched(&self, zip5: &str) -> RepresentativesResult {
        let response = match self.client.lookup_representatives(zip5).await {
            Ok(response) => response,
            Err(e) => {
                error!(zip = zip5, error = %e, "Representative lookup failed");
                return RepresentativesResult::with_error(ERROR_UPSTREAM);
            }
        };

        process_enriched_response(response)
    }

    async fn resolve_minimal(&self, zip5: &str) -> RepresentativesResult {
        // The primary lookup and the directory refresh run
        // concurrently and are joined here. A directory failure only
        // degrades enrichment; the lookup result stands on its own.
        let (lookup, legislators) = tokio::join!(
            self.client.lookup_congress_members(zip5),
            self.directory.fetch(&self.client),
        );

        let response = match lookup {
            Ok(response) => response,
            Err(e) => {
                error!(zip = zip5, error = %e, "Congress member lookup failed");
                return RepresentativesResult::with_error(ERROR_UPSTREAM);
            }
        };

        process_minimal_response(response, &legislators, self.match_strategy)
    }
}

/// Maps an enriched lookup response into the canonical result.
fn process_enriched_response(response: RepLookupResponse) -> RepresentativesResult {
    // The upstream relays soft failures as an error payload.
    if let Some(error) = response.error {
        return RepresentativesResult::with_error(error);
    }

    let mut representatives: Vec<Representative> = response
        .representatives
        .into_iter()
        .filter_map(canonicalize_enriched)
        .collect();

    if representatives.is_empty() {
        return RepresentativesResult::with_error(ERROR_NO_RESULTS);
    }

    sort_representatives(&mut representatives);

    RepresentativesResult {
        representatives,
        location: response.location,
        state: response.state,
        district: response.district,
        low_accuracy: response.low_accuracy,
        error: None,
    }
}

/// Converts one enriched record, dropping any seat that is not a
/// federal House or Senate seat.
fn canonicalize_enriched(record: RepLookupRecord) -> Option<Representative> {
    let chamber = match record.area.as_str() {
        "US Senate" => Chamber::Senate,
        "US House" => Chamber::House,
        other => {
            debug!(area = other, name = %record.name, "Dropping non-federal record");
            return None;
        }
    };

    Some(Representative {
        id: none_if_empty(record.id),
        name: record.name,
        chamber,
        party: none_if_empty(record.party),
        state: record.state,
        district: None,
        phone: none_if_empty(record.phone),
        url: none_if_empty(record.url),
        contact_form_url: None,
        photo_url: record.photo_url.and_then(none_if_empty),
        reason: none_if_empty(record.reason),
        office: None,
        field_offices: record
            .field_offices
            .into_iter()
            .map(|office| FieldOffice {
                phone: office.phone,
                city: office.city,
            })
            .collect(),
    })
}

/// Maps a minimal lookup response into the canonical result, enriching
/// each record from the legislator directory when a match is found.
fn process_minimal_response(
    response: CongressLookupResponse,
    legislators: &[LegislatorInfo],
    strategy: MatchStrategy,
) -> RepresentativesResult {
    let mut representatives: Vec<Representative> = response
        .results
        .into_iter()
        .map(|record| canonicalize_minimal(record, legislators, strategy))
        .collect();

    if representatives.is_empty() {
        return RepresentativesResult::with_error(ERROR_NO_RESULTS);
    }

    sort_representatives(&mut representatives);

    RepresentativesResult {
        representatives,
        ..RepresentativesResult::default()
    }
}

fn canonicalize_minimal(
    record: CongressLookupRecord,
    legislators: &[LegislatorInfo],
    strategy: MatchStrategy,
) -> Representative {
    // A senate seat has no district; some records only reveal the
    // chamber through the member's website URL.
    let is_senator =
        record.district.trim().is_empty() || record.link.to_lowercase().contains("senate");
    let chamber = if is_senator {
        Chamber::Senate
    } else {
        Chamber::House
    };

    let matched = find_legislator(&record.name, &record.state, legislators, strategy);

    Representative {
        id: matched.map(|l| l.bioguide_id.clone()),
        name: record.name,
        chamber,
        party: none_if_empty(record.party),
        state: record.state,
        district: if chamber == Chamber::House {
            none_if_empty(record.district)
        } else {
            None
        },
        phone: matched
            .and_then(|l| l.phone.clone())
            .or_else(|| none_if_empty(record.phone)),
        url: none_if_empty(record.link)
            .or_else(|| matched.and_then(|l| l.website_url.clone())),
        contact_form_url: matched.and_then(|l| l.contact_form_url.clone()),
        photo_url: None,
        reason: None,
        office: matched
            .and_then(|l| l.office.clone())
            .or_else(|| none_if_empty(record.office)),
        field_offices: Vec::new(),
    }
}

/// Senate seats come first; within a chamber, names sort ascending
/// ignoring case.
fn sort_representatives(representatives: &mut [Representative]) {
    representatives.sort_by(|a, b| {
        a.chamber
            .cmp(&b.chamber)
            .then_with(|| cmp_ignore_case(&a.name, &b.name))
    });
}
