//! HTTP client for the Cortensor router API.
//!
//! Every read is fault tolerant: non-success responses, transport errors, and
//! undecodable bodies are logged and mapped to an absent/empty value. Nothing
//! in this module returns an error to its caller.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::Settings;

/// Body of `GET /api/v1/status`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterStatus {
    /// Overall status string (`"ok"` when healthy).
    #[serde(default)]
    pub status: Option<String>,
    /// Health string (`"healthy"` when healthy).
    #[serde(default)]
    pub health: Option<String>,
    /// Router version, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// One entry of `GET /api/v1/miners`.
///
/// Entries that do not fit this shape still count as miners; see [`decode_items`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Miner {
    /// Miner identifier.
    #[serde(default)]
    pub id: String,
    /// Network address.
    #[serde(default)]
    pub address: String,
    /// Miner state as reported by the router.
    #[serde(default)]
    pub status: String,
    /// Model served by the miner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// One entry of `GET /api/v1/sessions`.
///
/// Entries that do not fit this shape still count as sessions; see [`decode_items`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Session number.
    #[serde(default)]
    pub id: u64,
    /// Session state.
    #[serde(default)]
    pub status: String,
    /// Number of tasks processed in the session.
    #[serde(default)]
    pub tasks: u64,
}

/// Body sent to `POST /api/v1/completions/{session}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompletionRequest<'a> {
    /// Prompt text.
    pub prompt: &'a str,
    /// Whether to stream tokens; always `false` here.
    pub stream: bool,
    /// Router-side timeout in seconds.
    pub timeout: u64,
}

/// Response of a completion request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResponse {
    /// Generated text.
    pub response: String,
    /// Router task id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u64>,
    /// Miner that served the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miner_id: Option<String>,
}

/// What: Decode each element of a router list independently.
///
/// Inputs:
/// - `items`: Raw JSON array elements
/// - `what`: Label used in log messages
///
/// Output:
/// - One `T` per element, in order; elements that fail to decode become `T::default()`.
///
/// Details:
/// - The router's item fields are not relied on beyond counting, so a `null` or
///   differently typed field must not drop the rest of the list.
fn decode_items<T: DeserializeOwned + Default>(items: Vec<serde_json::Value>, what: &str) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            serde_json::from_value(v).unwrap_or_else(|e| {
                tracing::debug!(index = i, error = %e, "unexpected {what} item shape; counting it anyway");
                T::default()
            })
        })
        .collect()
}

/// Router-side timeout requested for completions, in seconds.
pub const COMPLETION_TIMEOUT_SECS: u64 = 60;

/// Bearer-authenticated client for the router's read endpoints and completions.
#[derive(Clone)]
pub struct RouterClient {
    /// Base URL without trailing slash.
    base_url: String,
    /// Bearer token.
    api_key: String,
    /// Pooled HTTP client.
    http: reqwest::Client,
}

impl std::fmt::Debug for RouterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl RouterClient {
    /// What: Create a client for `base_url` authenticated with `api_key`.
    ///
    /// Inputs:
    /// - `base_url`: Router base URL; a trailing `/` is ignored
    /// - `api_key`: Bearer token
    /// - `timeout`: Total per-request timeout
    ///
    /// Details:
    /// - Connection pooling comes from the shared `reqwest::Client`.
    /// - If the builder fails, a default client is used instead.
    #[must_use]
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .timeout(timeout)
            .user_agent(format!("CortexHub/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "failed to build router HTTP client; using defaults");
                reqwest::Client::new()
            });
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            http,
        }
    }

    /// What: Create a client from layered [`Settings`].
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &settings.router_url,
            &settings.api_key,
            settings.request_timeout(),
        )
    }

    /// Base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/v1/{path}", self.base_url)
    }

    /// What: GET a router endpoint and decode its JSON body.
    ///
    /// Inputs:
    /// - `path`: Path below `/api/v1/`
    /// - `what`: Label used in log messages
    ///
    /// Output:
    /// - `Some(T)` on a 2xx response with a decodable body, `None` otherwise.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, what: &str) -> Option<T> {
        let url = self.endpoint(path);
        let response = match self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "failed to fetch router {what}");
                return None;
            }
        };
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "router {what} unavailable");
            return None;
        }
        match response.json::<T>().await {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "failed to decode router {what}");
                None
            }
        }
    }

    /// What: Read the router status.
    ///
    /// Output:
    /// - `Some(RouterStatus)` on success; `None` when the router is unreachable or errors.
    pub async fn fetch_status(&self) -> Option<RouterStatus> {
        self.get_json("status", "status").await
    }

    /// What: Read the list of connected miners.
    ///
    /// Output:
    /// - Miner list; empty on any failure. Every array element yields one entry.
    pub async fn fetch_miners(&self) -> Vec<Miner> {
        self.get_json::<Vec<serde_json::Value>>("miners", "miners list")
            .await
            .map(|items| decode_items(items, "miner"))
            .unwrap_or_default()
    }

    /// What: Read the list of active sessions.
    ///
    /// Output:
    /// - Session list; empty on any failure. Every array element yields one entry.
    pub async fn fetch_sessions(&self) -> Vec<Session> {
        self.get_json::<Vec<serde_json::Value>>("sessions", "sessions list")
            .await
            .map(|items| decode_items(items, "session"))
            .unwrap_or_default()
    }

    /// What: Request a non-streaming completion within a router session.
    ///
    /// Inputs:
    /// - `session_id`: Router session number
    /// - `prompt`: Prompt text
    ///
    /// Output:
    /// - `Some(CompletionResponse)` on success; `None` on any failure.
    pub async fn complete(&self, session_id: u64, prompt: &str) -> Option<CompletionResponse> {
        let url = self.endpoint(&format!("completions/{session_id}"));
        let body = CompletionRequest {
            prompt,
            stream: false,
            timeout: COMPLETION_TIMEOUT_SECS,
        };
        let response = match self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "failed to get recommendation");
                return None;
            }
        };
        if !response.status().is_success() {
            tracing::warn!(
                url = %url,
                status = response.status().as_u16(),
                "completion request failed"
            );
            return None;
        }
        match response.json::<CompletionResponse>().await {
            Ok(v) => {
                tracing::debug!(task_id = ?v.task_id, miner_id = ?v.miner_id, "completion received");
                Some(v)
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "failed to decode completion");
                None
            }
        }
    }
}
