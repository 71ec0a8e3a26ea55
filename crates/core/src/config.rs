//! `.queryshelf.toml` config loading.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::catalog::QueryCatalog;
use crate::error::Result;
use crate::fuzzy::levenshtein;
use crate::session::DEFAULT_PAGE_SIZE;

/// Config file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".queryshelf.toml";

/// Known keys in `.queryshelf.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &["page_size", "catalog"];

/// Runtime configuration. Loaded from `.queryshelf.toml` or defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryshelfConfig {
    pub root: PathBuf,
    /// Results per page, always >= 1.
    pub page_size: usize,
    /// Catalog file relative to `root`. `None` = built-in catalog.
    pub catalog: Option<PathBuf>,
}

impl QueryshelfConfig {
    pub fn new(root: PathBuf) -> Self {
        Self { root, page_size: DEFAULT_PAGE_SIZE, catalog: None }
    }

    /// Absolute-or-root-relative catalog path, if one is configured.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog.as_ref().map(|p| self.root.join(p))
    }

    /// Load the configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<QueryCatalog> {
        match self.catalog_path() {
            Some(path) => QueryCatalog::load(&path),
            None => Ok(QueryCatalog::builtin()),
        }
    }
}

impl Default for QueryshelfConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("."))
    }
}

/// Closest known key to an unrecognised one, if it is within 3 edits.
pub fn suggest_config_key(key: &str) -> Option<&'static str> {
    let suggestion = KNOWN_CONFIG_KEYS.iter().min_by_key(|k| levenshtein(key, k))?;
    (levenshtein(key, suggestion) <= 3).then_some(*suggestion)
}

/// Load configuration from `.queryshelf.toml` in the given project root.
///
/// Missing or unparsable files yield defaults (the latter with a warning).
/// Unknown keys trigger a warning with a typo suggestion.
pub fn load_queryshelf_config(project_root: &Path) -> QueryshelfConfig {
    let mut config = QueryshelfConfig::new(project_root.to_path_buf());
    let config_path = project_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        return config;
    }
    debug!(path = %config_path.display(), "Loading config");

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %config_path.display(), error = %e, "Could not read {CONFIG_FILE_NAME}");
            return config;
        }
    };
    let table = match content.parse::<toml::Table>() {
        Ok(t) => t,
        Err(e) => {
            warn!(error = %e, "Failed to parse {CONFIG_FILE_NAME}");
            return config;
        }
    };

    // Validate keys, warn on unknown
    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        match suggest_config_key(key) {
            Some(suggestion) => warn!(
                key = key.as_str(),
                suggestion,
                "Unknown key in {CONFIG_FILE_NAME}, did you mean '{suggestion}'?"
            ),
            None => warn!(
                key = key.as_str(),
                "Unknown key in {CONFIG_FILE_NAME} (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            ),
        }
    }

    if let Some(value) = table.get("page_size") {
        match value.as_integer().and_then(|n| usize::try_from(n).ok()).filter(|n| *n > 0) {
            Some(n) => config.page_size = n,
            None => warn!(value = %value, "page_size must be a positive integer, using {DEFAULT_PAGE_SIZE}"),
        }
    }

    if let Some(value) = table.get("catalog") {
        match value.as_str() {
            Some(path) => config.catalog = Some(PathBuf::from(path)),
            None => warn!(value = %value, "catalog must be a path string, using the built-in catalog"),
        }
    }

    config
}
