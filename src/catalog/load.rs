//! Loading and validating catalog data.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::types::{CatalogEntry, Category};

type Result<T> = super::Result<T>;

/// Catalog bundled into the binary at compile time.
const BUNDLED_CATALOG: &str = include_str!("../../data/apps.json");

/// Full catalog: listed applications plus the category set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Listed applications in display order.
    pub apps: Vec<CatalogEntry>,
    /// Categories available for filtering.
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Catalog {
    /// What: Parse the catalog bundled with the binary.
    ///
    /// Output:
    /// - `Ok(Catalog)`; `Err` only if the bundled data is malformed.
    ///
    /// # Errors
    /// - Returns `Err` when the embedded JSON does not parse or contains duplicate ids
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// What: Parse and validate a catalog from JSON text.
    ///
    /// Inputs:
    /// - `json`: `{apps: [...], categories: [...]}`
    ///
    /// # Errors
    /// - Returns `Err` when JSON is malformed or an entry id appears twice
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// What: Read and validate a catalog file from disk.
    ///
    /// Inputs:
    /// - `path`: JSON catalog file
    ///
    /// # Errors
    /// - Returns `Err` when the file cannot be read or fails [`Catalog::from_json_str`]
    pub fn from_path(path: &Path) -> Result<Self> {
        let body = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read catalog {}: {e}", path.display()))?;
        let catalog = Self::from_json_str(&body)?;
        tracing::info!(
            path = %path.display(),
            apps = catalog.apps.len(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// What: Load from `path` when given, otherwise the bundled catalog.
    ///
    /// # Errors
    /// - Propagates errors from [`Catalog::from_path`] or [`Catalog::bundled`]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(Self::bundled, Self::from_path)
    }

    /// What: Enforce that entry ids are unique.
    ///
    /// # Errors
    /// - Returns `Err` naming the first duplicated id
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.apps.len());
        for app in &self.apps {
            if !seen.insert(app.id.as_str()) {
                return Err(format!("duplicate catalog id: {}", app.id).into());
            }
        }
        Ok(())
    }

    /// What: Look up an entry by exact id.
    ///
    /// Output:
    /// - `None` is the "entry not found" outcome; callers render a not-found view.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&CatalogEntry> {
        self.apps.iter().find(|a| a.id == id)
    }

    /// What: Other entries in the same category as `entry`.
    ///
    /// Inputs:
    /// - `entry`: Entry being viewed
    /// - `limit`: Maximum number of related entries
    ///
    /// Output:
    /// - Up to `limit` entries with the exact same category, excluding `entry`, in catalog order.
    #[must_use]
    pub fn related(&self, entry: &CatalogEntry, limit: usize) -> Vec<&CatalogEntry> {
        self.apps
            .iter()
            .filter(|a| a.category == entry.category && a.id != entry.id)
            .take(limit)
            .collect()
    }

    /// What: All entry ids in catalog order, for pre-generating detail pages.
    #[must_use]
    pub fn static_ids(&self) -> Vec<&str> {
        self.apps.iter().map(|a| a.id.as_str()).collect()
    }

    /// What: Category ids in catalog order (without the `all` pseudo-category).
    #[must_use]
    pub fn category_ids(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }

    /// What: Title for the detail page of `id`, including the not-found case.
    #[must_use]
    pub fn page_title(&self, id: &str) -> String {
        self.find(id).map_or_else(
            || "App Not Found | CortexHub".to_string(),
            CatalogEntry::page_title,
        )
    }

    /// What: Resolve a category id to its definition (case-insensitive).
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(id))
    }
}
