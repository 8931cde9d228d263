//! Catalog filter engine: category restriction followed by text search.

use super::types::CatalogEntry;

/// Category filter value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// A single searchable field: returns `true` when the field contains the
/// already lower-cased query.
pub type FieldMatcher = fn(&CatalogEntry, &str) -> bool;

/// Fields consulted by the text search, combined with logical OR.
pub const SEARCH_FIELDS: &[FieldMatcher] = &[
    name_contains,
    description_contains,
    any_tag_contains,
    author_contains,
];

fn name_contains(entry: &CatalogEntry, query_lower: &str) -> bool {
    entry.name.to_lowercase().contains(query_lower)
}

fn description_contains(entry: &CatalogEntry, query_lower: &str) -> bool {
    entry.description.to_lowercase().contains(query_lower)
}

fn any_tag_contains(entry: &CatalogEntry, query_lower: &str) -> bool {
    entry
        .tags
        .iter()
        .any(|tag| tag.to_lowercase().contains(query_lower))
}

fn author_contains(entry: &CatalogEntry, query_lower: &str) -> bool {
    entry.author.to_lowercase().contains(query_lower)
}

/// What: Check whether an entry belongs to the selected category.
///
/// Inputs:
/// - `entry`: Catalog entry to test
/// - `category`: Category id, or [`ALL_CATEGORIES`]
///
/// Output:
/// - `true` for [`ALL_CATEGORIES`]; otherwise a case-insensitive equality check.
#[must_use]
pub fn matches_category(entry: &CatalogEntry, category: &str) -> bool {
    category == ALL_CATEGORIES || entry.category.to_lowercase() == category.to_lowercase()
}

/// What: Check whether an entry matches a free-text query.
///
/// Inputs:
/// - `entry`: Catalog entry to test
/// - `query`: Raw query text; whitespace is significant and not trimmed
///
/// Output:
/// - `true` when the query is empty or any of [`SEARCH_FIELDS`] contains it.
///
/// Details:
/// - The query is one literal substring; multi-word input is not tokenized.
#[must_use]
pub fn matches_query(entry: &CatalogEntry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query_lower = query.to_lowercase();
    matches_any_field(entry, &query_lower, SEARCH_FIELDS)
}

/// What: OR-combine a set of field matchers against a lower-cased query.
///
/// Inputs:
/// - `entry`: Catalog entry to test
/// - `query_lower`: Query text already lower-cased
/// - `fields`: Matchers to consult
///
/// Output:
/// - `true` when at least one matcher accepts the entry.
#[must_use]
pub fn matches_any_field(entry: &CatalogEntry, query_lower: &str, fields: &[FieldMatcher]) -> bool {
    fields.iter().any(|field| field(entry, query_lower))
}

/// What: Filter catalog entries by category and query, borrowing from the input.
///
/// Inputs:
/// - `entries`: Full catalog in display order
/// - `query`: Free-text query (empty means no text restriction)
/// - `category`: Category id or [`ALL_CATEGORIES`]
///
/// Output:
/// - Matching entries in their original relative order.
///
/// Details:
/// - Category restriction applies before text search; both are conjunctive.
/// - Rescans the whole list on every call; there is no index or cache.
#[must_use]
pub fn filter_refs<'a>(
    entries: &'a [CatalogEntry],
    query: &str,
    category: &str,
) -> Vec<&'a CatalogEntry> {
    entries
        .iter()
        .filter(|e| matches_category(e, category))
        .filter(|e| matches_query(e, query))
        .collect()
}

/// What: Filter catalog entries by category and query, returning owned copies.
///
/// Inputs: see [`filter_refs`].
///
/// Output:
/// - Cloned matching entries in original order.
#[must_use]
pub fn filter_entries(entries: &[CatalogEntry], query: &str, category: &str) -> Vec<CatalogEntry> {
    filter_refs(entries, query, category)
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::AppStatus;

    fn entry(id: &str, name: &str, category: &str, tags: &[&str]) -> CatalogEntry {
        CatalogEntry {
            id: id.into(),
            name: name.into(),
            author: format!("{id}-author"),
            author_url: None,
            url: None,
            github: None,
            description: format!("{name} description"),
            long_description: None,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            category: category.into(),
            status: AppStatus::Live,
            gradient: None,
            screenshot: None,
            tech_stack: None,
            features: None,
            date_added: None,
        }
    }

    fn ids(v: &[&CatalogEntry]) -> Vec<String> {
        v.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    /// What: Empty query with the `all` sentinel returns the catalog unchanged.
    fn all_and_empty_query_is_identity() {
        let c = vec![
            entry("b", "Beta", "bot", &[]),
            entry("a", "Alpha", "oracle", &[]),
        ];
        assert_eq!(filter_entries(&c, "", ALL_CATEGORIES), c);
        assert!(filter_entries(&[], "x", "bot").is_empty());
    }

    #[test]
    /// What: Tag-only match for `oracle`.
    ///
    /// - Input: One entry tagged `oracle`, one untagged; neither named oracle
    /// - Output: Only the tagged entry
    fn oracle_query_matches_tag_only() {
        let c = vec![
            entry("t", "Truth Relay", "misc", &["oracle", "validation"]),
            entry("u", "Untagged", "misc", &[]),
        ];
        let out = filter_refs(&c, "oracle", ALL_CATEGORIES);
        assert_eq!(ids(&out), vec!["t"]);
    }

    #[test]
    /// What: Category compare lower-cases both sides.
    ///
    /// - Input: Entry category `Bot`, filters `bot` and `BOT`
    /// - Output: Entry selected by both
    fn category_compare_is_case_insensitive() {
        let c = vec![entry("a", "A", "Bot", &[]), entry("b", "B", "oracle", &[])];
        assert_eq!(ids(&filter_refs(&c, "", "bot")), vec!["a"]);
        assert_eq!(ids(&filter_refs(&c, "", "BOT")), vec!["a"]);
    }

    #[test]
    /// What: Each of the four searchable fields can satisfy the query alone.
    fn each_field_matches_independently() {
        let mut by_author = entry("au", "Plain", "x", &[]);
        by_author.author = "ZedCoder".into();
        let by_name = entry("nm", "Zedboard", "x", &[]);
        let mut by_desc = entry("ds", "Other", "x", &[]);
        by_desc.description = "uses ZED engine".into();
        let by_tag = entry("tg", "Tagged", "x", &["zed"]);
        let none = entry("no", "Nothing", "x", &[]);
        let c = vec![by_author, by_name, by_desc, by_tag, none];
        assert_eq!(
            ids(&filter_refs(&c, "zed", ALL_CATEGORIES)),
            vec!["au", "nm", "ds", "tg"]
        );
    }

    #[test]
    /// What: Whitespace is significant and multi-word queries are literal.
    ///
    /// - Input: Name `Truth Relay`; queries `" truth"`, `"truth relay"`, `"relay truth"`
    /// - Output: Leading space misses; exact phrase hits; reordered words miss
    fn whitespace_and_multi_word_are_literal() {
        let mut e = entry("t", "Truth Relay", "x", &[]);
        e.description = String::new();
        let c = vec![e];
        assert!(filter_refs(&c, " truth", ALL_CATEGORIES).is_empty());
        assert_eq!(filter_refs(&c, "TRUTH RELAY", ALL_CATEGORIES).len(), 1);
        assert!(filter_refs(&c, "relay truth", ALL_CATEGORIES).is_empty());
    }

    #[test]
    /// What: Category and query are conjunctive.
    fn category_and_query_combine() {
        let c = vec![
            entry("a", "Scout", "bot", &[]),
            entry("b", "Scout", "agent", &[]),
        ];
        assert_eq!(ids(&filter_refs(&c, "scout", "agent")), vec!["b"]);
        assert!(filter_refs(&c, "nomatch", "bot").is_empty());
    }

    #[test]
    /// What: A custom field list narrows search without touching the engine.
    fn custom_field_list_limits_search() {
        let e = entry("a", "Alpha", "x", &["needle"]);
        assert!(matches_any_field(&e, "needle", SEARCH_FIELDS));
        assert!(!matches_any_field(&e, "needle", &[name_contains, author_contains]));
    }
}
