//! Application catalog: data types, loading, and the filter engine.

mod filter;
mod load;
mod types;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub use filter::{
    ALL_CATEGORIES, FieldMatcher, SEARCH_FIELDS, filter_entries, filter_refs, matches_any_field,
    matches_category, matches_query,
};
pub use load::Catalog;
pub use types::{AppStatus, CatalogEntry, Category, DEFAULT_GRADIENT};

/// Number of related entries shown on a detail view.
pub const RELATED_LIMIT: usize = 3;
