//! Matcher — case-insensitive substring search over career records.
//!
//! Pure functions, no state. Results always preserve catalog order.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::career::CareerRecord;

/// Upper bound on autocomplete entries returned by `suggest`.
pub const MAX_SUGGESTIONS: usize = 6;

/// Combined search output for a single query.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub query: String,
    pub careers: Vec<CareerRecord>,
    pub suggestions: Vec<String>,
    /// First career, highlighted only while no query is active.
    pub featured_id: Option<String>,
}

/// Trimmed, lowercased query, or `None` when nothing is left to match.
fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn contains_ci(haystack: &str, normalized: &str) -> bool {
    haystack.to_lowercase().contains(normalized)
}

/// True when the title, category name or any skill contains `normalized`.
pub fn matches_career(career: &CareerRecord, normalized: &str) -> bool {
    contains_ci(&career.title, normalized)
        || contains_ci(career.category.as_str(), normalized)
        || career.skills.iter().any(|s| contains_ci(s, normalized))
}

/// Returns every career matching `query`. A blank query returns the whole catalog.
pub fn filter_careers(catalog: &[CareerRecord], query: &str) -> Vec<CareerRecord> {
    let Some(normalized) = normalize_query(query) else {
        return catalog.to_vec();
    };

    catalog
        .iter()
        .filter(|career| matches_career(career, &normalized))
        .cloned()
        .collect()
}

/// Autocomplete strings drawn from titles and skills.
///
/// Each career contributes its title followed by its skills, in catalog
/// order. Duplicates are dropped by exact equality (first occurrence wins)
/// and the list is capped at `MAX_SUGGESTIONS`.
pub fn suggest(catalog: &[CareerRecord], query: &str) -> Vec<String> {
    let Some(normalized) = normalize_query(query) else {
        return Vec::new();
    };

    let mut seen: HashSet<&str> = HashSet::new();
    catalog
        .iter()
        .flat_map(|career| std::iter::once(&career.title).chain(career.skills.iter()))
        .map(String::as_str)
        .filter(|candidate| contains_ci(candidate, &normalized))
        .filter(|candidate| seen.insert(*candidate))
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}

pub fn search(catalog: &[CareerRecord], query: &str) -> SearchResult {
    let featured_id = if query.trim().is_empty() {
        catalog.first().map(|c| c.id.clone())
    } else {
        None
    };

    SearchResult {
        query: query.to_string(),
        careers: filter_careers(catalog, query),
        suggestions: suggest(catalog, query),
        featured_id,
    }
}
