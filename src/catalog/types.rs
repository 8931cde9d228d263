//! Core value types for the application catalog.

use serde::{Deserialize, Serialize};

/// Gradient used when an entry does not declare its own.
pub const DEFAULT_GRADIENT: &str = "from-purple-500 via-pink-500 to-orange-500";

/// Release status of a listed application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppStatus {
    /// Publicly usable.
    Live,
    /// Usable but still changing.
    Beta,
    /// Announced, not yet available.
    ComingSoon,
}

impl AppStatus {
    /// What: Human-readable badge text for this status.
    ///
    /// Inputs: none
    ///
    /// Output: Static label including a colored marker glyph.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Live => "🟢 Live",
            Self::Beta => "🟡 Beta",
            Self::ComingSoon => "⚪ Coming Soon",
        }
    }

    /// What: Wire/config key of this status (`live`, `beta`, `coming-soon`).
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Beta => "beta",
            Self::ComingSoon => "coming-soon",
        }
    }
}

/// One listed application record.
///
/// Entries are read-only for the life of the process. New entries arrive
/// out-of-band through the submission issue tracker and a later data reload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Unique, stable identifier; used as routing and list key.
    pub id: String,
    /// Display name (searched).
    pub name: String,
    /// Author handle (searched).
    pub author: String,
    /// Link to the author's profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    /// Link to the running application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Link to the source repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// One-line description (searched).
    pub description: String,
    /// Longer description for the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Free-form tags (each searched).
    #[serde(default)]
    pub tags: Vec<String>,
    /// Category id; matches [`Category::id`] for filtering.
    pub category: String,
    /// Release status.
    pub status: AppStatus,
    /// Visual gradient hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    /// Screenshot URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    /// Technologies used by the app.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    /// Feature bullet points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    /// Date the entry was listed (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
}

impl CatalogEntry {
    /// What: Gradient for display, falling back to [`DEFAULT_GRADIENT`].
    #[must_use]
    pub fn gradient_or_default(&self) -> &str {
        self.gradient.as_deref().unwrap_or(DEFAULT_GRADIENT)
    }

    /// What: Text for the detail view body.
    ///
    /// Output: `long_description` when present, otherwise `description`.
    #[must_use]
    pub fn display_description(&self) -> &str {
        self.long_description
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.description)
    }

    /// What: Feature list, empty when absent.
    #[must_use]
    pub fn features(&self) -> &[String] {
        self.features.as_deref().unwrap_or_default()
    }

    /// What: Tech stack list, empty when absent.
    #[must_use]
    pub fn tech_stack(&self) -> &[String] {
        self.tech_stack.as_deref().unwrap_or_default()
    }

    /// What: Format `date_added` for display (e.g. `Jan 15, 2025`).
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - `None` when the entry carries no date.
    /// - The formatted date, or the raw string when it is not `YYYY-MM-DD`.
    #[must_use]
    pub fn formatted_date_added(&self) -> Option<String> {
        let raw = self.date_added.as_deref()?;
        Some(
            chrono::NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_or_else(
                |_| raw.to_string(),
                |d| d.format("%b %-d, %Y").to_string(),
            ),
        )
    }

    /// What: Title used for the entry's detail page.
    #[must_use]
    pub fn page_title(&self) -> String {
        format!("{} | CortexHub", self.name)
    }

    /// What: First character of the name, used as the entry's icon.
    #[must_use]
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// Category an entry can belong to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Lowercase slug used as the filter key.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Display glyph.
    pub icon: String,
}

impl Category {
    /// What: Label rendered in category tabs (`"{icon} {name}"`).
    #[must_use]
    pub fn label(&self) -> String {
        if self.icon.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.icon, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> CatalogEntry {
        CatalogEntry {
            id: "a".into(),
            name: "Alpha".into(),
            author: "me".into(),
            author_url: None,
            url: None,
            github: None,
            description: "short".into(),
            long_description: None,
            tags: vec![],
            category: "bot".into(),
            status: AppStatus::Beta,
            gradient: None,
            screenshot: None,
            tech_stack: None,
            features: None,
            date_added: None,
        }
    }

    #[test]
    /// What: Status keys deserialize from the catalog's kebab-case values.
    ///
    /// - Input: `"coming-soon"`, `"live"`, and an unknown value
    /// - Output: Matching variants; unknown value is rejected
    fn status_deserializes_kebab_case() {
        let s: AppStatus = serde_json::from_str("\"coming-soon\"").expect("parse");
        assert_eq!(s, AppStatus::ComingSoon);
        let s: AppStatus = serde_json::from_str("\"live\"").expect("parse");
        assert_eq!(s, AppStatus::Live);
        assert!(serde_json::from_str::<AppStatus>("\"retired\"").is_err());
        assert_eq!(AppStatus::ComingSoon.label(), "⚪ Coming Soon");
        assert_eq!(AppStatus::Beta.as_key(), "beta");
    }

    #[test]
    /// What: Display defaults fill in missing optional fields.
    ///
    /// - Input: Entry without gradient, long description, features, or date
    /// - Output: Default gradient, short description, empty lists, no date
    fn display_defaults_for_missing_fields() {
        let mut e = entry();
        assert_eq!(e.gradient_or_default(), DEFAULT_GRADIENT);
        assert_eq!(e.display_description(), "short");
        assert!(e.features().is_empty());
        assert!(e.tech_stack().is_empty());
        assert_eq!(e.formatted_date_added(), None);

        e.long_description = Some("long text".into());
        e.gradient = Some("from-blue-500".into());
        assert_eq!(e.display_description(), "long text");
        assert_eq!(e.gradient_or_default(), "from-blue-500");
        assert_eq!(e.page_title(), "Alpha | CortexHub");
        assert_eq!(e.initial(), 'A');
    }

    #[test]
    /// What: Date formatting for the detail view.
    ///
    /// - Input: ISO date and a free-form string
    /// - Output: `Jan 15, 2025`; the free-form string is passed through
    fn date_added_formats_iso_and_passes_through_other() {
        let mut e = entry();
        e.date_added = Some("2025-01-15".into());
        assert_eq!(e.formatted_date_added().as_deref(), Some("Jan 15, 2025"));
        e.date_added = Some("sometime".into());
        assert_eq!(e.formatted_date_added().as_deref(), Some("sometime"));
    }

    #[test]
    /// What: Entries parse from camelCase JSON with optional fields omitted.
    fn entry_parses_camel_case_json() {
        let json = r#"{
            "id": "x", "name": "X", "author": "y", "description": "d",
            "tags": ["t"], "category": "oracle", "status": "live",
            "longDescription": "ld", "techStack": ["Rust"], "dateAdded": "2025-02-01"
        }"#;
        let e: CatalogEntry = serde_json::from_str(json).expect("parse");
        assert_eq!(e.long_description.as_deref(), Some("ld"));
        assert_eq!(e.tech_stack(), ["Rust".to_string()]);
        assert_eq!(e.author_url, None);
    }
}
