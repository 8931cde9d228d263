//! Command-line catalog queries: search, detail pages, ids, and categories.

use crate::catalog::{ALL_CATEGORIES, Catalog, CatalogEntry, filter_refs};
use crate::util::apps_available;

/// What: Format search results as plain text.
///
/// Inputs:
/// - `matches`: Entries passing the filters
///
/// Output:
/// - One block per entry (`id  name [status] (category)` plus an indented description),
///   followed by the count line; `No apps found` when empty.
#[must_use]
pub fn format_search_results(matches: &[&CatalogEntry]) -> String {
    if matches.is_empty() {
        return "No apps found".to_string();
    }
    let mut out = String::new();
    for e in matches {
        out.push_str(&format!(
            "{:<20} {} [{}] ({})\n    {}\n",
            e.id,
            e.name,
            e.status.as_key(),
            e.category,
            e.description
        ));
    }
    out.push_str(&apps_available(matches.len()));
    out
}

/// What: Format the category list, `All` first.
#[must_use]
pub fn format_categories(catalog: &Catalog) -> String {
    let mut lines = vec![format!("{ALL_CATEGORIES:<12} All")];
    lines.extend(
        catalog
            .categories
            .iter()
            .map(|c| format!("{:<12} {}", c.id, c.label())),
    );
    lines.join("\n")
}

/// What: Handle `--search`: print matching entries and exit.
///
/// Inputs:
/// - `catalog`: Loaded catalog
/// - `query`: Search query (matched as typed, case-insensitive)
/// - `category`: Optional category id; `None` means all
/// - `json`: Print the matches as a JSON array instead of text
///
/// Output:
/// - Exits with code 0, or 1 when JSON serialization fails.
pub fn handle_search(catalog: &Catalog, query: &str, category: Option<&str>, json: bool) -> ! {
    let category = category.unwrap_or(ALL_CATEGORIES);
    if category != ALL_CATEGORIES && catalog.category(category).is_none() {
        tracing::warn!(category = %category, "unknown category filter");
    }
    let matches = filter_refs(&catalog.apps, query, category);
    tracing::info!(query = %query, category = %category, matches = matches.len(), "search mode requested from CLI");
    if json {
        print_json_and_exit(&matches);
    }
    println!("{}", format_search_results(&matches));
    std::process::exit(0);
}

/// What: Handle `--show`: print an entry's detail page and exit.
///
/// Output:
/// - Exits with code 0 when found; prints `App not found` and exits with code 1 otherwise.
pub fn handle_show(catalog: &Catalog, id: &str, json: bool) -> ! {
    let Some(entry) = catalog.find(id) else {
        tracing::info!(id = %id, "requested app not found");
        eprintln!("App not found: {id}");
        eprintln!("{}", catalog.page_title(id));
        std::process::exit(1);
    };
    if json {
        print_json_and_exit(entry);
    }
    println!("{}", entry.page_title());
    println!();
    println!("{}", crate::ui::detail_text(catalog, entry));
    std::process::exit(0);
}

/// What: Handle `--ids`: print every entry id and exit.
pub fn handle_ids(catalog: &Catalog) -> ! {
    for id in catalog.static_ids() {
        println!("{id}");
    }
    std::process::exit(0);
}

/// What: Handle `--categories`: print the category list and exit.
pub fn handle_categories(catalog: &Catalog) -> ! {
    println!("{}", format_categories(catalog));
    std::process::exit(0);
}

fn print_json_and_exit<T: serde::Serialize + ?Sized>(value: &T) -> ! {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            println!("{s}");
            std::process::exit(0);
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize output");
            eprintln!("failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}
