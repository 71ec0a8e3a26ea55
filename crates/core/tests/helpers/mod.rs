//! Shared fixtures for catalog integration tests.

use queryshelf_core::{CatalogRecord, QueryCatalog};

/// Load a named TOML fixture from `tests/fixtures/`.
pub fn fixture_catalog(name: &str) -> QueryCatalog {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{name}.toml"));
    assert!(path.exists(), "Fixture '{name}' not found at {}", path.display());
    QueryCatalog::load(&path).expect("fixture catalog should load")
}

pub fn ids(records: &[&CatalogRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

pub fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
