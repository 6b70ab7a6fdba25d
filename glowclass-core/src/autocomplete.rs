//! Local area-name suggestions for the city field
//!
//! A fixed list filtered on every keystroke; no fuzzy matching, no ranking
//! beyond source order, no debounce.

/// Areas the masterclass is offered in, in display order.
pub const AREAS: [&str; 15] = [
    "Andheri",
    "Bandra",
    "Borivali",
    "Colaba",
    "Dadar",
    "Goregaon",
    "Juhu",
    "Kandivali",
    "Khar",
    "Malad",
    "Mulund",
    "Powai",
    "Santacruz",
    "Thane",
    "Vile Parle",
];

/// Case-insensitive substring match over [`AREAS`], preserving source order.
/// An empty query matches nothing.
pub fn filter_areas(query: &str) -> Vec<&'static str> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    AREAS
        .iter()
        .copied()
        .filter(|area| area.to_lowercase().contains(&needle))
        .collect()
}

/// The suggestion panel shows only while the query is non-empty and at
/// least one area matches.
pub fn suggestions_visible(query: &str, matches: &[&str]) -> bool {
    !query.is_empty() && !matches.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_is_case_insensitive_substring_in_source_order() {
        assert_eq!(filter_areas("and"), vec!["Andheri", "Bandra", "Kandivali"]);
        assert_eq!(filter_areas("AND"), vec!["Andheri", "Bandra", "Kandivali"]);
        assert_eq!(filter_areas("parle"), vec!["Vile Parle"]);
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        assert!(filter_areas("").is_empty());
    }

    #[test]
    fn test_unknown_query_matches_nothing() {
        assert!(filter_areas("delhi").is_empty());
    }

    #[test]
    fn test_panel_visibility() {
        assert!(suggestions_visible("and", &["Andheri"]));
        assert!(!suggestions_visible("", &["Andheri"]));
        assert!(!suggestions_visible("delhi", &[]));
    }
}
