//! The query catalog: an immutable, id-unique collection of records that the
//! search operations run over, plus loading from a TOML catalog file.

use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::pagination::{paginate, Page};
use crate::session::SearchState;
use crate::types::{CatalogRecord, SampleOutput};
use crate::{filter, fuzzy};

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A fixed set of stored queries. Never mutated once built.
#[derive(Debug, Clone, Default)]
pub struct QueryCatalog {
    records: Vec<CatalogRecord>,
}

/// Filtered, paginated view of the catalog for one [`SearchState`].
#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    #[serde(flatten)]
    pub page: Page<&'a CatalogRecord>,
    #[serde(rename = "queryTime")]
    pub query_time: f64,
    #[serde(rename = "totalRecords")]
    pub total_records: usize,
}

impl QueryCatalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(records: Vec<CatalogRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for r in &records {
            if !seen.insert(r.id.as_str()) {
                return Err(CatalogError::DuplicateId(r.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// The stock queries shipped with queryshelf.
    pub fn builtin() -> Self {
        Self { records: crate::builtin::records() }
    }

    /// Load a catalog from a TOML file of `[[query]]` tables.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading catalog");
        let content = std::fs::read_to_string(path)
            .map_err(|source| CatalogError::Read { path: path.to_path_buf(), source })?;
        let catalog = Self::from_toml_str(&content)?;
        info!(path = %path.display(), records = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        let records =
            file.query.into_iter().map(RawRecord::into_record).collect::<Result<Vec<_>>>()?;
        Self::new(records)
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&CatalogRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Ranked autocomplete suggestions for `term`; see [`fuzzy::suggest`].
    pub fn suggest(&self, term: &str) -> Vec<&CatalogRecord> {
        fuzzy::suggest(&self.records, term)
    }

    /// Records matching `state`, in catalog order; see [`filter::filter`].
    pub fn filter(&self, state: &SearchState) -> Vec<&CatalogRecord> {
        filter::filter(&self.records, state)
    }

    /// Filter, then cut out the state's page (clamped into range).
    pub fn search(&self, state: &SearchState) -> SearchResponse<'_> {
        let start = Instant::now();
        let matches = self.filter(state);
        let page = paginate(&matches, state.current_page(), state.page_size());
        let query_time = start.elapsed().as_secs_f64() * 1000.0;

        debug!(
            term = state.search_term(),
            category = %state.category(),
            matches = page.total_items,
            page = page.page,
            total_pages = page.total_pages,
            "Search complete"
        );

        SearchResponse { page, query_time, total_records: self.records.len() }
    }
}

// ---------------------------------------------------------------------------
// Catalog file format
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    query: Vec<RawRecord>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRecord {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    category: String,
    /// Quoted string or a bare TOML date / datetime.
    created_at: toml::Value,
    #[serde(default)]
    sql: String,
    #[serde(default)]
    sample_output: SampleOutput,
}

impl RawRecord {
    fn into_record(self) -> Result<CatalogRecord> {
        let category = self
            .category
            .parse()
            .map_err(|source| CatalogError::InvalidCategory { id: self.id.clone(), source })?;
        let raw_date = match &self.created_at {
            toml::Value::String(s) => s.clone(),
            toml::Value::Datetime(dt) => dt.to_string(),
            other => other.to_string(),
        };
        let created_at = parse_created_at(&raw_date)
            .ok_or_else(|| CatalogError::InvalidDate { id: self.id.clone(), value: raw_date })?;

        Ok(CatalogRecord::new(self.id, self.title, self.description, category, created_at)
            .with_sql(self.sql)
            .with_sample_output(self.sample_output))
    }
}

/// Calendar date of a `created_at` value. Timestamps keep the date in their own
/// offset; time of day is dropped.
pub fn parse_created_at(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Cell};

    const SMALL_CATALOG: &str = r#"
[[query]]
id = "q1"
title = "Daily Deposits"
description = "Deposits per day"
category = "Trend Analysis"
created_at = "2024-03-01"
sql = "SELECT 1"

[query.sample_output]
columns = ["day", "total", "avg"]
rows = [["2024-03-01", 120, 4.5]]

[[query]]
id = "q2"
title = "Late Night Top Ups"
category = "revenue-analysis"
created_at = 2024-03-02T23:30:00-05:00
"#;

    #[test]
    fn parses_records_and_payload() {
        let catalog = QueryCatalog::from_toml_str(SMALL_CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);

        let q1 = catalog.get("q1").unwrap();
        assert_eq!(q1.category, Category::TrendAnalysis);
        assert_eq!(q1.created_at, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(q1.sql, "SELECT 1");
        assert_eq!(
            q1.sample_output.rows[0],
            vec![Cell::Text("2024-03-01".into()), Cell::Int(120), Cell::Float(4.5)]
        );

        let q2 = catalog.get("q2").unwrap();
        assert_eq!(q2.description(), "");
        assert!(q2.sample_output.columns.is_empty());
    }

    #[test]
    fn timestamps_keep_their_own_calendar_day() {
        let catalog = QueryCatalog::from_toml_str(SMALL_CATALOG).unwrap();
        // 23:30 at -05:00 is already March 3rd in UTC; the record's day is still the 2nd.
        assert_eq!(catalog.get("q2").unwrap().created_at, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn created_at_formats() {
        let d = NaiveDate::from_ymd_opt(2024, 12, 8);
        assert_eq!(parse_created_at("2024-12-08"), d);
        assert_eq!(parse_created_at("2024-12-08T00:00:00Z"), d);
        assert_eq!(parse_created_at("2024-12-08T18:45:10.5+03:00"), d);
        assert_eq!(parse_created_at("2024-12-08 09:00:00"), d);
        assert_eq!(parse_created_at("08/12/2024"), None);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let toml = r#"
[[query]]
id = "x"
title = "A"
category = "Summary Reports"
created_at = "2024-01-01"

[[query]]
id = "x"
title = "B"
category = "Summary Reports"
created_at = "2024-01-02"
"#;
        let err = QueryCatalog::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "x"));
    }

    #[test]
    fn rejects_unknown_category_and_bad_date() {
        let bad_category = r#"
[[query]]
id = "x"
title = "A"
category = "Marketing"
created_at = "2024-01-01"
"#;
        assert!(matches!(
            QueryCatalog::from_toml_str(bad_category),
            Err(CatalogError::InvalidCategory { .. })
        ));

        let bad_date = r#"
[[query]]
id = "x"
title = "A"
category = "Summary Reports"
created_at = "yesterday"
"#;
        let err = QueryCatalog::from_toml_str(bad_date).unwrap_err();
        assert!(err.to_string().contains("yesterday"), "{err}");
    }

    #[test]
    fn rejects_misspelled_record_keys() {
        let toml = r#"
[[query]]
id = "x"
title = "A"
descripton = "typo"
category = "Summary Reports"
created_at = "2024-01-01"
"#;
        let err = QueryCatalog::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)), "{err}");
        assert!(err.to_string().contains("descripton"), "{err}");
    }

    #[test]
    fn empty_file_is_an_empty_catalog() {
        let catalog = QueryCatalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.suggest("anything").is_empty());
        let response = catalog.search(&SearchState::default());
        assert_eq!(response.page.total_pages, 1);
        assert!(response.page.items.is_empty());
    }

    #[test]
    fn builtin_catalog_has_unique_ids() {
        let records = QueryCatalog::builtin().records().to_vec();
        assert_eq!(records.len(), 5);
        assert!(QueryCatalog::new(records).is_ok());
    }

    #[test]
    fn builtin_catalog_dates() {
        let catalog = QueryCatalog::builtin();
        let dates: Vec<String> = catalog.records().iter().map(|r| r.display_date()).collect();
        assert_eq!(dates, ["Dec 01, 2024", "Nov 15, 2024", "Nov 20, 2024", "Dec 05, 2024", "Dec 08, 2024"]);
        let revenue = catalog.get("5").unwrap();
        assert_eq!(revenue.sample_output.rows[0][1], Cell::Int(89_450));
        assert_eq!(catalog.get("4").unwrap().sample_output.rows[0][3], Cell::Float(299.85));
    }
}
