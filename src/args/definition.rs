//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use crate::catalog::Catalog;
use crate::config::Settings;

/// `CortexHub` - Browse, search, and submit apps built on the Cortensor network
#[derive(Parser, Debug)]
#[command(name = "cortexhub")]
#[command(version)]
#[command(about = "Browse, search, and submit apps built on the Cortensor network", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Load the catalog from a JSON file instead of the bundled one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Search apps by name, description, tag, or author and print the matches
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Restrict --search to a category id (default: all)
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// List the catalog categories
    #[arg(long)]
    pub categories: bool,

    /// Print the detail page of an app by id
    #[arg(long, value_name = "ID")]
    pub show: Option<String>,

    /// Print every app id, one per line
    #[arg(long)]
    pub ids: bool,

    /// Print the current network status summary
    #[arg(long)]
    pub status: bool,

    /// Print machine-readable JSON (with --status, --search, or --show)
    #[arg(long)]
    pub json: bool,

    /// Ask the network to recommend apps for a free-form query
    #[arg(long, value_name = "QUERY")]
    pub recommend: Option<String>,

    /// Router session used by --recommend
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub session: u64,

    /// Open a pre-filled GitHub issue submitting a new app
    #[arg(long)]
    pub submit: bool,

    /// App name (with --submit)
    #[arg(long)]
    pub name: Option<String>,

    /// Author handle (with --submit)
    #[arg(long)]
    pub author: Option<String>,

    /// Live app URL (with --submit)
    #[arg(long)]
    pub url: Option<String>,

    /// Source repository URL (with --submit)
    #[arg(long)]
    pub github: Option<String>,

    /// Category label: Oracle, Research, Analytics, Bot, Developer, or Agent (with --submit)
    #[arg(long, value_name = "CATEGORY")]
    pub submit_category: Option<String>,

    /// Comma-separated tags (with --submit)
    #[arg(long)]
    pub tags: Option<String>,

    /// What the app does (with --submit)
    #[arg(long)]
    pub description: Option<String>,
}

/// What: Process all command-line arguments and handle one-shot modes.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Effective settings (router endpoint and token)
/// - `catalog`: Loaded catalog
///
/// Output:
/// - Returns only when no one-shot mode was requested; the caller then starts the TUI.
///
/// Details:
/// - Each mode prints its result and exits the process.
/// - Modes are checked in order: submit, recommend, status, show, ids, categories, search.
pub async fn process_args(args: &Args, settings: &Settings, catalog: &Catalog) {
    use crate::args::{catalog as catalog_cmd, network, submit};

    if args.submit {
        submit::handle_submit(args);
    }

    if let Some(query) = &args.recommend {
        network::handle_recommend(settings, catalog, query, args.session).await;
    }

    if args.status {
        network::handle_status(settings, args.json).await;
    }

    if let Some(id) = &args.show {
        catalog_cmd::handle_show(catalog, id, args.json);
    }

    if args.ids {
        catalog_cmd::handle_ids(catalog);
    }

    if args.categories {
        catalog_cmd::handle_categories(catalog);
    }

    if let Some(query) = &args.search {
        catalog_cmd::handle_search(catalog, query, args.category.as_deref(), args.json);
    }
}
