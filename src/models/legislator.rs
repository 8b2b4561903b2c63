use serde::{Deserialize, Serialize};

use super::Chamber;

/// Processed legislator record from the public congress-legislators
/// dataset, reduced to the member's current (most recent) term.
/// Used to enrich minimal lookup records with contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegislatorInfo {
    pub bioguide_id: String,
    pub first_name: String,
    pub last_name: String,
    pub official_full_name: Option<String>,
    pub state: String,
    pub chamber: Chamber,
    pub district: Option<u32>,
    pub party: String,
    pub contact_form_url: Option<String>,
    pub website_url: Option<String>,
    pub phone: Option<String>,
    pub office: Option<String>,
}
