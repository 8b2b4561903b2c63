//! Bundled civic issue catalog.
//!
//! The catalog ships as `data/issues.json`, embedded at compile time
//! and parsed once on first access. It is read-only: issues are never
//! added, removed, or mutated at runtime.

use std::sync::OnceLock;

use tracing::error;

use crate::models::Issue;

/// Global catalog, parsed once on first access
static CATALOG: OnceLock<Vec<Issue>> = OnceLock::new();

const ISSUES_JSON: &str = include_str!("../data/issues.json");

/// The static list of predefined issues, in display order.
pub fn issue_catalog() -> &'static [Issue] {
    CATALOG.get_or_init(|| match serde_json::from_str(ISSUES_JSON) {
        Ok(issues) => issues,
        Err(e) => {
            error!(error = %e, "Failed to parse embedded issue catalog");
            Vec::new()
        }
    })
}

/// Look up a catalog issue by id.
pub fn find_issue(id: &str) -> Option<&'static Issue> {
    issue_catalog().iter().find(|issue| issue.id == id)
}
