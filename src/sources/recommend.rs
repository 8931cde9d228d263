//! App recommendations generated through router completions.

use crate::catalog::CatalogEntry;

use super::router::{CompletionResponse, RouterClient};

/// What: Build the recommendation prompt for a user query.
///
/// Inputs:
/// - `query`: What the user is looking for
/// - `entries`: Apps the model may recommend from
///
/// Output:
/// - Prompt listing every app as `- {name}: {description} ({category})`, then the query.
#[must_use]
pub fn build_recommendation_prompt(query: &str, entries: &[CatalogEntry]) -> String {
    let app_list = entries
        .iter()
        .map(|a| format!("- {}: {} ({})", a.name, a.description, a.category))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "You are a helpful assistant for CortexHub, an app catalog for Cortensor-powered applications.\n\
         \n\
         Available apps:\n\
         {app_list}\n\
         \n\
         User query: \"{query}\"\n\
         \n\
         Based on the user's query, recommend the most relevant app(s) and explain why. Be concise and helpful."
    )
}

/// What: Ask the network to recommend catalog apps for a query.
///
/// Inputs:
/// - `client`: Router client
/// - `query`: User query
/// - `entries`: Candidate apps
/// - `session_id`: Router session to run the completion in
///
/// Output:
/// - `Some(CompletionResponse)` on success; `None` on any failure.
pub async fn recommend(
    client: &RouterClient,
    query: &str,
    entries: &[CatalogEntry],
    session_id: u64,
) -> Option<CompletionResponse> {
    let prompt = build_recommendation_prompt(query, entries);
    tracing::info!(
        session_id,
        candidates = entries.len(),
        "requesting app recommendation"
    );
    client.complete(session_id, &prompt).await
}
