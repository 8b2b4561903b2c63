//! Wire formats for the two supported lookup services.
//!
//! Each service has its own response shape; the resolver maps both
//! into the canonical `models::Representative`.

use serde::Deserialize;

/// Enriched lookup response: per-seat records with photo, match
/// reason, and field offices, plus location metadata for the ZIP.
#[derive(Debug, Clone, Deserialize)]
pub struct RepLookupResponse {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, rename = "lowAccuracy")]
    pub low_accuracy: bool,
    #[serde(default, rename = "isSplit")]
    pub is_split: bool,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub representatives: Vec<RepLookupRecord>,
    /// Relayed upstream error payload, when the lookup failed softly.
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepLookupRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub party: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub reason: String,
    /// Governmental area of the seat, e.g. "US Senate", "US House",
    /// or a state-level label the resolver drops.
    pub area: String,
    #[serde(default, rename = "field_offices")]
    pub field_offices: Vec<RawFieldOffice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawFieldOffice {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub city: String,
}

/// Minimal lookup response: name, party, state, district, and an
/// office link per member, nothing else.
#[derive(Debug, Clone, Deserialize)]
pub struct CongressLookupResponse {
    #[serde(default)]
    pub results: Vec<CongressLookupRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CongressLookupRecord {
    pub name: String,
    #[serde(default)]
    pub party: String,
    #[serde(default)]
    pub state: String,
    /// Empty for senate seats.
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub office: String,
    #[serde(default)]
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enriched_response() {
        let json = r#"{
            "location": "Burlington",
            "lowAccuracy": false,
            "isSplit": false,
            "state": "VT",
            "district": "0",
            "representatives": [
                {
                    "id": "S000033",
                    "name": "Bernard Sanders",
                    "phone": "202-224-5141",
                    "url": "https://www.sanders.senate.gov",
                    "photoURL": "https://example.org/sanders.jpg",
                    "party": "Independent",
                    "state": "VT",
                    "reason": "This is your senator",
                    "area": "US Senate",
                    "field_offices": [
                        {"phone": "802-862-0697", "city": "Burlington"}
                    ]
                }
            ]
        }"#;

        let resp: RepLookupResponse =
            serde_json::from_str(json).expect("Failed to parse enriched lookup JSON");
        assert_eq!(resp.location.as_deref(), Some("Burlington"));
        assert_eq!(resp.representatives.len(), 1);

        let rep = &resp.representatives[0];
        assert_eq!(rep.name, "Bernard Sanders");
        assert_eq!(rep.area, "US Senate");
        assert_eq!(rep.field_offices.len(), 1);
        assert_eq!(rep.field_offices[0].city, "Burlington");
    }

    #[test]
    fn test_parse_enriched_error_payload() {
        let json = r#"{"error": "Failed to fetch representative data. Please try again."}"#;
        let resp: RepLookupResponse =
            serde_json::from_str(json).expect("Failed to parse error payload JSON");
        assert!(resp.representatives.is_empty());
        assert!(resp.error.is_some());
    }

    #[test]
    fn test_parse_minimal_response() {
        let json = r#"{
            "results": [
                {
                    "name": "Peter Welch",
                    "party": "D",
                    "state": "VT",
                    "district": "",
                    "phone": "202-224-4242",
                    "office": "124 Russell Senate Office Building",
                    "link": "https://www.welch.senate.gov"
                },
                {
                    "name": "Becca Balint",
                    "party": "D",
                    "state": "VT",
                    "district": "1",
                    "phone": "202-225-4115",
                    "office": "1408 Longworth House Office Building",
                    "link": "https://balint.house.gov"
                }
            ]
        }"#;

        let resp: CongressLookupResponse =
            serde_json::from_str(json).expect("Failed to parse minimal lookup JSON");
        assert_eq!(resp.results.len(), 2);
        assert!(resp.results[0].district.is_empty());
        assert_eq!(resp.results[1].district, "1");
    }
}
