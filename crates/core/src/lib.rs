//! queryshelf: search, filter, and page through a catalog of stored SQL queries.
//!
//! # Modules
//!
//! - [`types`]: Catalog records, the closed category set, and category filters
//! - [`fuzzy`]: Ranked autocomplete suggestions scored by prefix, substring, and edit distance
//! - [`filter`]: Combined text / category / exact-date filtering
//! - [`pagination`]: Clamped page windows over filtered results
//! - [`session`]: Immutable search session state with page-reset transitions
//! - [`catalog`]: The catalog itself and TOML catalog loading
//! - [`config`]: `.queryshelf.toml` loading
//! - [`error`]: Catalog loading errors

mod builtin;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod fuzzy;
pub mod pagination;
pub mod session;
pub mod types;

pub use catalog::{QueryCatalog, SearchResponse};
pub use config::{load_queryshelf_config, QueryshelfConfig};
pub use error::CatalogError;
pub use pagination::{paginate, Page};
pub use session::SearchState;
pub use types::{CatalogRecord, Category, CategoryFilter};
