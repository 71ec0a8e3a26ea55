//! Search session state.
//!
//! [`SearchState`] is an immutable value: every user action consumes the current
//! state and returns its replacement. Changing any filter criterion goes through
//! a constructor that resets the page to 1, so the reset rule lives in one place.

use crate::types::{CatalogRecord, CategoryFilter};
use chrono::NaiveDate;
use serde::Serialize;

/// Results shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Term, category, date and page of one interactive search session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchState {
    #[serde(rename = "searchTerm")]
    search_term: String,
    #[serde(rename = "selectedCategory")]
    category: CategoryFilter,
    #[serde(rename = "dateFilter")]
    date_filter: Option<NaiveDate>,
    #[serde(rename = "currentPage")]
    current_page: usize,
    #[serde(rename = "pageSize")]
    page_size: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl SearchState {
    /// Fresh session state. A `page_size` of 0 is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            category: CategoryFilter::All,
            date_filter: None,
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn date_filter(&self) -> Option<NaiveDate> {
        self.date_filter
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The one place filter criteria change; always lands on page 1.
    fn refiltered(
        page_size: usize,
        search_term: String,
        category: CategoryFilter,
        date_filter: Option<NaiveDate>,
    ) -> Self {
        Self { search_term, category, date_filter, current_page: 1, page_size }
    }

    pub fn with_search_term(self, term: impl Into<String>) -> Self {
        Self::refiltered(self.page_size, term.into(), self.category, self.date_filter)
    }

    pub fn with_category(self, category: impl Into<CategoryFilter>) -> Self {
        Self::refiltered(self.page_size, self.search_term, category.into(), self.date_filter)
    }

    pub fn with_date_filter(self, date: Option<NaiveDate>) -> Self {
        Self::refiltered(self.page_size, self.search_term, self.category, date)
    }

    /// Picking a suggestion puts its title in the search box.
    pub fn select_suggestion(self, record: &CatalogRecord) -> Self {
        self.with_search_term(record.title())
    }

    /// Move to `page` without touching the filters. Page 0 becomes page 1; the
    /// upper bound is applied when the page is rendered.
    pub fn with_page(self, page: usize) -> Self {
        Self { current_page: page.max(1), ..self }
    }

    /// Next page, held at `total_pages`.
    pub fn next_page(self, total_pages: usize) -> Self {
        let last = total_pages.max(1);
        let page = (self.current_page + 1).min(last);
        Self { current_page: page, ..self }
    }

    /// Previous page, held at 1.
    pub fn previous_page(self) -> Self {
        let page = self.current_page.saturating_sub(1).max(1);
        Self { current_page: page, ..self }
    }

    /// Reset term, category, date and page together. The page size is kept.
    pub fn cleared(self) -> Self {
        Self::new(self.page_size)
    }

    /// Whether any filter differs from its default.
    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty()
            || self.category != CategoryFilter::All
            || self.date_filter.is_some()
    }
}
