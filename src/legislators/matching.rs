//! Name matching between lookup results and the legislator directory.

use crate::models::LegislatorInfo;

/// Name-matching strategy for directory lookups.
///
/// `Fuzzy` reproduces the historical behavior: containment either
/// direction after normalization, plus a last-name/first-initial
/// fallback. It can misfire on short surnames, which is why the
/// strategy is selectable rather than hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    /// Equality on the raw strings.
    Exact,
    /// Equality after normalization.
    Normalized,
    /// Normalized containment either direction, plus last-name fallback.
    #[default]
    Fuzzy,
}

/// Normalizes a name for comparison: lowercase, periods stripped,
/// whitespace collapsed, trimmed.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .replace('.', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether two names refer to the same person under the given
/// strategy. Fuzzy containment handles nickname/formal-name variants
/// ("Bob Roberts" vs "Robert Roberts" both contain "roberts").
fn names_match(a: &str, b: &str, strategy: MatchStrategy) -> bool {
    match strategy {
        MatchStrategy::Exact => a == b,
        MatchStrategy::Normalized => normalize_name(a) == normalize_name(b),
        MatchStrategy::Fuzzy => {
            let na = normalize_name(a);
            let nb = normalize_name(b);
            na == nb || na.contains(&nb) || nb.contains(&na)
        }
    }
}

/// Finds the first legislator matching the queried name within a
/// state. Candidates are scanned in input order; the first match wins,
/// no further tie-break is applied.
pub fn find_legislator<'a>(
    name: &str,
    state: &str,
    legislators: &'a [LegislatorInfo],
    strategy: MatchStrategy,
) -> Option<&'a LegislatorInfo> {
    let normalized_query = normalize_name(name);
    let state = state.to_uppercase();

    for legislator in legislators {
        // Must match state
        if legislator.state != state {
            continue;
        }

        // Try matching against the official full name
        if let Some(ref official) = legislator.official_full_name {
            if names_match(official, name, strategy) {
                return Some(legislator);
            }
        }

        // Try matching against first + last name
        let full_name = format!("{} {}", legislator.first_name, legislator.last_name);
        if names_match(&full_name, name, strategy) {
            return Some(legislator);
        }

        // Last-name fallback, fuzzy only: the query must also contain
        // the first-name initial to limit false positives.
        if strategy == MatchStrategy::Fuzzy
            && normalized_query.contains(&normalize_name(&legislator.last_name))
        {
            if let Some(initial) = legislator.first_name.chars().next() {
                if normalized_query.contains(initial.to_ascii_lowercase()) {
                    return Some(legislator);
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Chamber;

    fn legislator(first: &str, last: &str, official: Option<&str>, state: &str) -> LegislatorInfo {
        LegislatorInfo {
            bioguide_id: format!("{}{}", &first[..1], last),
            first_name: first.to_string(),
            last_name: last.to_string(),
            official_full_name: official.map(str::to_string),
            state: state.to_string(),
            chamber: Chamber::House,
            district: Some(1),
            party: "D".to_string(),
            contact_form_url: None,
            website_url: None,
            phone: None,
            office: None,
        }
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  J.  Robert   Smith "), "j robert smith");
        assert_eq!(normalize_name("JANE DOE"), "jane doe");
    }

    #[test]
    fn test_exact_full_name_and_state() {
        let directory = vec![
            legislator("Jane", "Doe", Some("Jane Doe"), "CA"),
            legislator("John", "Roe", Some("John Roe"), "NY"),
        ];
        let found = find_legislator("Jane Doe", "CA", &directory, MatchStrategy::Fuzzy)
            .expect("should match");
        assert_eq!(found.last_name, "Doe");
    }

    #[test]
    fn test_state_mismatch_returns_absent() {
        let directory = vec![legislator("Jane", "Doe", Some("Jane Doe"), "CA")];
        assert!(find_legislator("Jane Doe", "NY", &directory, MatchStrategy::Fuzzy).is_none());
    }

    #[test]
    fn test_state_is_normalized_to_uppercase() {
        let directory = vec![legislator("Jane", "Doe", Some("Jane Doe"), "CA")];
        assert!(find_legislator("Jane Doe", "ca", &directory, MatchStrategy::Fuzzy).is_some());
    }

    #[test]
    fn test_matches_first_last_without_official_name() {
        let directory = vec![legislator("Jane", "Doe", None, "CA")];
        assert!(find_legislator("Jane Doe", "CA", &directory, MatchStrategy::Fuzzy).is_some());
    }

    #[test]
    fn test_fuzzy_handles_middle_names_and_periods() {
        let directory = vec![legislator("James", "Smith", Some("James R. Smith"), "TX")];
        // Query contains the official name once both are normalized.
        let found = find_legislator("Rep. James R Smith Jr", "TX", &directory, MatchStrategy::Fuzzy);
        assert!(found.is_some());
    }

    #[test]
    fn test_fuzzy_last_name_fallback_requires_first_initial() {
        let directory = vec![legislator("Robert", "Menendez", None, "NJ")];
        // Last name present and the query contains the initial 'r'.
        assert!(
            find_legislator("Rob Menendez", "NJ", &directory, MatchStrategy::Fuzzy).is_some()
        );
        // Last name present but no 'r' anywhere in the query.
        assert!(
            find_legislator("Bob Menendez", "NJ", &directory, MatchStrategy::Fuzzy).is_none()
        );
    }

    #[test]
    fn test_normalized_strategy_rejects_loose_containment() {
        let directory = vec![legislator("Robert", "Menendez", None, "NJ")];
        assert!(
            find_legislator("Rob Menendez", "NJ", &directory, MatchStrategy::Normalized).is_none()
        );
    }

    #[test]
    fn test_first_match_wins_in_input_order() {
        let directory = vec![
            legislator("Jane", "Doe", Some("Jane Doe"), "CA"),
            legislator("Janet", "Doe", Some("Janet Doe"), "CA"),
        ];
        let found = find_legislator("Jane Doe", "CA", &directory, MatchStrategy::Fuzzy)
            .expect("should match");
        assert_eq!(found.first_name, "Jane");
    }
}
