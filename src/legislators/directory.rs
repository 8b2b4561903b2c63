//! Fetching and caching of the public legislator dataset.
//!
//! Data source: the unitedstates/congress-legislators project
//! (public domain). Each raw record carries the member's full term
//! history; only the most recent term is authoritative for chamber,
//! state, and contact details.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::CivicApiClient;
use crate::cache::CacheStore;
use crate::models::{Chamber, LegislatorInfo};

// ============================================================================
// Constants
// ============================================================================

/// Public legislator dataset endpoint (versioned JSON document).
const LEGISLATORS_URL: &str =
    "https://unitedstates.github.io/congress-legislators/legislators-current.json";

/// Fixed cache key for the processed dataset.
const CACHE_KEY: &str = "congress-legislators-data";

/// Cached data older than this is treated as absent and refetched.
const CACHE_MAX_AGE_HOURS: i64 = 24;

/// Serialized cache entry: the processed list plus its write time.
/// An entry is either entirely fresh or discarded - never partially
/// valid.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    /// Epoch milliseconds at write time.
    timestamp: i64,
    legislators: Vec<LegislatorInfo>,
}

// Raw dataset records, reduced to the fields we keep.

#[derive(Debug, Deserialize)]
struct RawLegislator {
    id: RawIds,
    name: RawName,
    #[serde(default)]
    terms: Vec<RawTerm>,
}

#[derive(Debug, Deserialize)]
struct RawIds {
    bioguide: String,
}

#[derive(Debug, Deserialize)]
struct RawName {
    first: String,
    last: String,
    official_full: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawTerm {
    #[serde(rename = "type")]
    kind: String,
    state: String,
    district: Option<u32>,
    party: Option<String>,
    url: Option<String>,
    contact_form: Option<String>,
    office: Option<String>,
    phone: Option<String>,
}

/// Directory of current federal legislators with a local cache.
pub struct LegislatorDirectory {
    store: Arc<dyn CacheStore>,
    max_age: Duration,
}

impl LegislatorDirectory {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self {
            store,
            max_age: Duration::hours(CACHE_MAX_AGE_HOURS),
        }
    }

    /// Override the freshness window.
    pub fn with_max_age(store: Arc<dyn CacheStore>, max_age: Duration) -> Self {
        Self { store, max_age }
    }

    /// Returns the processed legislator list, from cache when fresh.
    ///
    /// Every failure path degrades to an empty list - enrichment is
    /// optional and must never block the primary lookup.
    pub async fn fetch(&self, client: &CivicApiClient) -> Vec<LegislatorInfo> {
        if let Some(cached) = self.load_cached() {
            debug!(count = cached.len(), "Using cached legislator data");
            return cached;
        }

        match client.get_json::<Vec<RawLegislator>>(LEGISLATORS_URL).await {
            Ok(raw) => {
                let legislators: Vec<LegislatorInfo> =
                    raw.iter().filter_map(process_legislator).collect();
                debug!(count = legislators.len(), "Fetched legislator dataset");
                self.store_fresh(&legislators);
                legislators
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch legislator dataset");
                Vec::new()
            }
        }
    }

    /// Loads the cached list if the entry parses and is inside the
    /// freshness window. Stale or corrupted entries report as absent.
    fn load_cached(&self) -> Option<Vec<LegislatorInfo>> {
        let raw = self.store.get(CACHE_KEY)?;

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                debug!(error = %e, "Discarding unreadable legislator cache entry");
                return None;
            }
        };

        let age_ms = Utc::now().timestamp_millis() - entry.timestamp;
        if age_ms >= self.max_age.num_milliseconds() {
            debug!(age_ms, "Legislator cache entry expired");
            return None;
        }

        Some(entry.legislators)
    }

    fn store_fresh(&self, legislators: &[LegislatorInfo]) {
        let entry = CacheEntry {
            timestamp: Utc::now().timestamp_millis(),
            legislators: legislators.to_vec(),
        };
        match serde_json::to_string(&entry) {
            Ok(json) => self.store.set(CACHE_KEY, &json),
            Err(e) => debug!(error = %e, "Failed to serialize legislator cache entry"),
        }
    }
}

/// Reduces a raw dataset record to the member's current term.
/// Records with no terms or an unknown term type are dropped.
fn process_legislator(raw: &RawLegislator) -> Option<LegislatorInfo> {
    // The last term in the list is the current one.
    let term = raw.terms.last()?;

    let chamber = match term.kind.as_str() {
        "sen" => Chamber::Senate,
        "rep" => Chamber::House,
        other => {
            debug!(kind = other, bioguide = %raw.id.bioguide, "Skipping unknown term type");
            return None;
        }
    };

    Some(LegislatorInfo {
        bioguide_id: raw.id.bioguide.clone(),
        first_name: raw.name.first.clone(),
        last_name: raw.name.last.clone(),
        official_full_name: raw.name.official_full.clone(),
        state: term.state.clone(),
        chamber,
        district: term.district,
        party: term.party.clone().unwrap_or_default(),
        contact_form_url: term.contact_form.clone(),
        website_url: term.url.clone(),
        phone: term.phone.clone(),
        office: term.office.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCacheStore;

    fn sample_legislator() -> LegislatorInfo {
        LegislatorInfo {
            bioguide_id: "W000800".to_string(),
            first_name: "Peter".to_string(),
            last_name: "Welch".to_string(),
            official_full_name: Some("Peter Welch".to_string()),
            state: "VT".to_string(),
            chamber: Chamber::Senate,
            district: None,
            party: "Democrat".to_string(),
            contact_form_url: Some("https://www.welch.senate.gov/contact".to_string()),
            website_url: Some("https://www.welch.senate.gov".to_string()),
            phone: Some("202-224-4242".to_string()),
            office: Some("124 Russell Senate Office Building".to_string()),
        }
    }

    fn seeded_directory(timestamp: i64) -> LegislatorDirectory {
        let store = Arc::new(MemoryCacheStore::new());
        let entry = CacheEntry {
            timestamp,
            legislators: vec![sample_legislator()],
        };
        store.set(CACHE_KEY, &serde_json::to_string(&entry).unwrap());
        LegislatorDirectory::new(store)
    }

    #[test]
    fn test_parse_raw_legislator_takes_last_term() {
        let json = r#"[{
            "id": {"bioguide": "W000800", "govtrack": 412239},
            "name": {"first": "Peter", "last": "Welch", "official_full": "Peter Welch"},
            "bio": {"birthday": "1947-05-02", "gender": "M"},
            "terms": [
                {
                    "type": "rep", "start": "2007-01-04", "end": "2023-01-03",
                    "state": "VT", "district": 0, "party": "Democrat",
                    "url": "https://welch.house.gov"
                },
                {
                    "type": "sen", "start": "2023-01-03", "end": "2029-01-03",
                    "state": "VT", "class": 1, "party": "Democrat",
                    "url": "https://www.welch.senate.gov",
                    "contact_form": "https://www.welch.senate.gov/contact",
                    "phone": "202-224-4242"
                }
            ]
        }]"#;

        let raw: Vec<RawLegislator> =
            serde_json::from_str(json).expect("Failed to parse raw legislator JSON");
        let processed = process_legislator(&raw[0]).expect("record should process");

        assert_eq!(processed.bioguide_id, "W000800");
        assert_eq!(processed.chamber, Chamber::Senate);
        assert_eq!(processed.state, "VT");
        assert_eq!(
            processed.contact_form_url.as_deref(),
            Some("https://www.welch.senate.gov/contact")
        );
    }

    #[test]
    fn test_record_with_no_terms_is_dropped() {
        let raw = RawLegislator {
            id: RawIds {
                bioguide: "X000000".to_string(),
            },
            name: RawName {
                first: "No".to_string(),
                last: "Terms".to_string(),
                official_full: None,
            },
            terms: Vec::new(),
        };
        assert!(process_legislator(&raw).is_none());
    }

    #[tokio::test]
    async fn test_fresh_cache_is_returned_without_network() {
        // A fresh entry means fetch() never touches the client's
        // endpoints; the unused client just satisfies the signature.
        let directory = seeded_directory(Utc::now().timestamp_millis());
        let client = CivicApiClient::new().unwrap();

        let legislators = directory.fetch(&client).await;
        assert_eq!(legislators.len(), 1);
        assert_eq!(legislators[0].bioguide_id, "W000800");
    }

    #[test]
    fn test_write_then_read_roundtrips() {
        let directory = LegislatorDirectory::new(Arc::new(MemoryCacheStore::new()));
        directory.store_fresh(&[sample_legislator()]);

        let cached = directory.load_cached().expect("entry should be fresh");
        assert_eq!(cached, vec![sample_legislator()]);
    }

    #[test]
    fn test_stale_cache_entry_is_absent() {
        let stale = Utc::now().timestamp_millis() - Duration::hours(25).num_milliseconds();
        let directory = seeded_directory(stale);
        assert!(directory.load_cached().is_none());
    }

    #[test]
    fn test_entry_just_inside_window_is_fresh() {
        let almost = Utc::now().timestamp_millis() - Duration::hours(23).num_milliseconds();
        let directory = seeded_directory(almost);
        assert!(directory.load_cached().is_some());
    }

    #[test]
    fn test_corrupted_cache_entry_is_absent() {
        let store = Arc::new(MemoryCacheStore::new());
        store.set(CACHE_KEY, "not json at all");
        let directory = LegislatorDirectory::new(store);
        assert!(directory.load_cached().is_none());
    }
}
