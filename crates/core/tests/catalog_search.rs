//! End-to-end search behaviour over the built-in catalog and a larger fixture.

mod helpers;

use helpers::{date, fixture_catalog, ids};
use queryshelf_core::fuzzy::MAX_SUGGESTIONS;
use queryshelf_core::{Category, CategoryFilter, QueryCatalog, SearchState};

// ---------------------------------------------------------------------------
// Built-in catalog
// ---------------------------------------------------------------------------

#[test]
fn no_filters_is_one_page_of_five() {
    let catalog = QueryCatalog::builtin();
    let response = catalog.search(&SearchState::default());
    assert_eq!(response.page.total_pages, 1);
    assert_eq!(response.page.items.len(), 5);
    assert_eq!(response.total_records, 5);
}

#[test]
fn text_filter_is_plain_substring_match() {
    let catalog = QueryCatalog::builtin();

    let state = SearchState::default().with_search_term("activ");
    assert_eq!(ids(&catalog.filter(&state)), ["1", "2", "3", "4"]);

    // "Activity Summary SQL" and its description never contain "active".
    let state = SearchState::default().with_search_term("active");
    assert_eq!(ids(&catalog.filter(&state)), ["1", "2", "3"]);
}

#[test]
fn text_filter_searches_descriptions() {
    let catalog = QueryCatalog::builtin();
    let state = SearchState::default().with_search_term("BY REGION");
    assert_eq!(ids(&catalog.filter(&state)), ["5"]);
}

#[test]
fn date_filter_matches_one_day() {
    let catalog = QueryCatalog::builtin();
    let state = SearchState::default().with_date_filter(Some(date(2024, 12, 5)));
    let out = catalog.filter(&state);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title(), "Activity Summary SQL");

    let state = state.with_date_filter(Some(date(2024, 12, 6)));
    assert!(catalog.filter(&state).is_empty());
}

#[test]
fn category_filter_is_exact() {
    let catalog = QueryCatalog::builtin();
    let state = SearchState::default().with_category(Category::RevenueAnalysis);
    assert_eq!(ids(&catalog.filter(&state)), ["5"]);

    let state = state.with_category(CategoryFilter::Only(Category::CustomerAnalytics));
    assert_eq!(ids(&catalog.filter(&state)), ["1", "2"]);

    let state = state.with_category(CategoryFilter::All);
    assert_eq!(catalog.filter(&state).len(), 5);
}

#[test]
fn suggestions_rank_prefix_matches_first() {
    let catalog = QueryCatalog::builtin();
    assert_eq!(ids(&catalog.suggest("active")), ["2", "3", "1"]);
    assert_eq!(ids(&catalog.suggest("top up")), ["5"]);
    assert!(catalog.suggest("").is_empty());
    assert!(catalog.suggest("a term longer than every title in the catalog").is_empty());
}

#[test]
fn picking_a_suggestion_narrows_the_listing() {
    let catalog = QueryCatalog::builtin();
    let first = catalog.suggest("active users")[0];
    let state = SearchState::default().select_suggestion(first);
    assert_eq!(ids(&catalog.filter(&state)), ["3"]);
}

#[test]
fn lookup_by_id() {
    let catalog = QueryCatalog::builtin();
    let record = catalog.get("5").expect("record 5");
    assert_eq!(record.title(), "Top Up Revenue Analysis");
    assert_eq!(record.sample_output.columns, ["region", "topup_count", "total_revenue"]);
    assert_eq!(record.display_date(), "Dec 08, 2024");
    assert!(catalog.get("99").is_none());
}

// ---------------------------------------------------------------------------
// Fixture catalog
// ---------------------------------------------------------------------------

#[test]
fn fixture_pages_through_twelve_records() {
    let catalog = fixture_catalog("catalog");
    assert_eq!(catalog.len(), 12);

    let state = SearchState::default();
    let first = catalog.search(&state);
    assert_eq!(first.page.total_pages, 3);
    assert_eq!(first.page.items.len(), 5);
    assert!(first.page.has_next());

    let last = catalog.search(&state.clone().next_page(3).next_page(3));
    assert_eq!(last.page.page, 3);
    assert_eq!(ids(&last.page.items), ["r11", "r12"]);
    assert!(!last.page.has_next());

    // Past the end clamps to the last page.
    let clamped = catalog.search(&state.with_page(40));
    assert_eq!(clamped.page.page, 3);
}

#[test]
fn fixture_pages_tile_the_filtered_set() {
    let catalog = fixture_catalog("catalog");
    for page_size in 1..=13 {
        let state = SearchState::new(page_size).with_search_term("s");
        let expected = ids(&catalog.filter(&state));
        let total = catalog.search(&state).page.total_pages;
        let mut joined = Vec::new();
        for n in 1..=total {
            joined.extend(ids(&catalog.search(&state.clone().with_page(n)).page.items));
        }
        assert_eq!(joined, expected, "page_size={page_size}");
    }
}

#[test]
fn narrowing_resets_to_first_page() {
    let catalog = fixture_catalog("catalog");
    let state = SearchState::default().with_page(3);
    assert_eq!(catalog.search(&state).page.page, 3);

    let state = state.with_category(Category::TrendAnalysis);
    let response = catalog.search(&state);
    assert_eq!(response.page.page, 1);
    assert_eq!(ids(&response.page.items), ["r03", "r07", "r11"]);
}

#[test]
fn timestamped_records_match_by_calendar_day() {
    let catalog = fixture_catalog("catalog");
    let state = SearchState::default().with_date_filter(Some(date(2024, 2, 1)));
    assert_eq!(ids(&catalog.filter(&state)), ["r03", "r04"]);

    let state = SearchState::default().with_date_filter(Some(date(2024, 4, 30)));
    assert_eq!(ids(&catalog.filter(&state)), ["r11"]);
}

#[test]
fn fixture_suggestions_are_capped_and_ordered() {
    let catalog = fixture_catalog("catalog");
    let out = catalog.suggest("e");
    assert!(out.len() <= MAX_SUGGESTIONS);
    // No title starts with "e", so every containing title scores 101 and
    // catalog order decides. "Dormant Accounts" has no "e" at all.
    assert_eq!(ids(&out), ["r01", "r03", "r04", "r05", "r06"]);
}

#[test]
fn filter_is_idempotent_over_fixture() {
    let catalog = fixture_catalog("catalog");
    let state = SearchState::default().with_search_term("loan").with_category(CategoryFilter::All);
    let once: Vec<_> = catalog.filter(&state).into_iter().cloned().collect();
    let again = QueryCatalog::new(once.clone()).expect("unique ids");
    assert_eq!(ids(&again.filter(&state)), ids(&once.iter().collect::<Vec<_>>()));
}

#[test]
fn clearing_restores_the_full_listing() {
    let catalog = fixture_catalog("catalog");
    let state = SearchState::default()
        .with_search_term("revenue")
        .with_category(Category::RevenueAnalysis)
        .with_date_filter(Some(date(2024, 4, 2)));
    assert_eq!(ids(&catalog.filter(&state)), ["r09"]);
    assert!(state.has_active_filters());

    let cleared = state.cleared();
    assert!(!cleared.has_active_filters());
    assert_eq!(catalog.search(&cleared).page.total_items, 12);
}

#[test]
fn search_response_serializes_with_camel_case_keys() {
    let catalog = QueryCatalog::builtin();
    let response = catalog.search(&SearchState::default().with_search_term("revenue"));
    let json = serde_json::to_value(&response).expect("serialize");
    assert_eq!(json["totalPages"], 1);
    assert_eq!(json["totalItems"], 1);
    assert_eq!(json["totalRecords"], 5);
    assert_eq!(json["items"][0]["category"], "Revenue Analysis");
    assert_eq!(json["items"][0]["createdAt"], "2024-12-08");
    assert!(json["items"][0].get("title_lower").is_none());
}
