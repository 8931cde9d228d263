//! Command-line network queries: status summary and recommendations.

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::sources::{NetworkStats, RouterClient, recommend, resolve_network_stats};

/// What: Human-readable one-line network summary.
///
/// Output:
/// - e.g. `Network Online | Miners: 3 | Sessions: 1 | status: ok`, with a
///   `(demo mode)` suffix for the synthetic summary.
#[must_use]
pub fn format_stats(stats: &NetworkStats) -> String {
    let state = if stats.is_online {
        "Network Online"
    } else {
        "Network Offline"
    };
    let mut line = format!(
        "{state} | Miners: {} | Sessions: {} | status: {}",
        stats.miner_count, stats.session_count, stats.status
    );
    if stats.is_demo() {
        line.push_str(" (demo mode)");
    }
    line
}

/// What: Handle `--status`: resolve one network summary, print it, and exit.
///
/// Inputs:
/// - `settings`: Router endpoint and token
/// - `json`: Print the summary as JSON
///
/// Output:
/// - Always exits with code 0; unreachable routers yield the demo summary.
pub async fn handle_status(settings: &Settings, json: bool) -> ! {
    let client = RouterClient::from_settings(settings);
    tracing::info!(router = %client.base_url(), "status mode requested from CLI");
    let stats = resolve_network_stats(&client).await;
    if json {
        match serde_json::to_string_pretty(&stats) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize network stats");
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", format_stats(&stats));
    }
    std::process::exit(0);
}

/// What: Handle `--recommend`: ask the network for app recommendations and exit.
///
/// Inputs:
/// - `settings`: Router endpoint and token
/// - `catalog`: Apps offered to the model
/// - `query`: Free-form user query
/// - `session_id`: Router session for the completion
///
/// Output:
/// - Prints the model response and exits with code 0; exits with code 1 when no answer arrives.
pub async fn handle_recommend(
    settings: &Settings,
    catalog: &Catalog,
    query: &str,
    session_id: u64,
) -> ! {
    let client = RouterClient::from_settings(settings);
    if settings.uses_dev_token() {
        tracing::warn!("using the development API token; set CORTENSOR_API_KEY for real requests");
    }
    match recommend(&client, query, &catalog.apps, session_id).await {
        Some(resp) => {
            println!("{}", resp.response.trim());
            if let Some(miner) = &resp.miner_id {
                tracing::info!(miner = %miner, task = ?resp.task_id, "recommendation served");
            }
            std::process::exit(0);
        }
        None => {
            eprintln!("Recommendation unavailable: the router did not return a response");
            std::process::exit(1);
        }
    }
}
