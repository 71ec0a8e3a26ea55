//! Combined text / category / date filtering over the catalog.
//!
//! Text matching here is plain case-insensitive substring containment on the
//! title or description; it is independent of the suggestion ranking in
//! [`crate::fuzzy`].

use crate::session::SearchState;
use crate::types::{CatalogRecord, CategoryFilter};
use chrono::NaiveDate;

/// Text criterion: an empty or whitespace-only term matches everything.
/// `term_lower` must already be lowercased.
pub fn matches_text(record: &CatalogRecord, term_lower: &str) -> bool {
    term_lower.trim().is_empty()
        || record.title_lower.contains(term_lower)
        || record.description_lower.contains(term_lower)
}

pub fn matches_category(record: &CatalogRecord, category: CategoryFilter) -> bool {
    category.matches(record.category)
}

/// Exact calendar-day match. No date means no date criterion.
pub fn matches_date(record: &CatalogRecord, date: Option<NaiveDate>) -> bool {
    date.map_or(true, |d| record.created_at == d)
}

/// Records passing every criterion of `state`, in catalog order.
pub fn filter<'a>(records: &'a [CatalogRecord], state: &SearchState) -> Vec<&'a CatalogRecord> {
    let term_lower = state.search_term().to_lowercase();
    records
        .iter()
        .filter(|r| {
            matches_text(r, &term_lower)
                && matches_category(r, state.category())
                && matches_date(r, state.date_filter())
        })
        .collect()
}
