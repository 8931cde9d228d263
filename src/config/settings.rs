//! Layered settings: defaults, `settings.conf`, then environment.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Router used when nothing else is configured.
pub const DEFAULT_ROUTER_URL: &str = "https://router.cortensor.network";
/// Development bearer token. Not a secret; real deployments must override it.
pub const DEFAULT_API_KEY: &str = "default-dev-token";
/// Environment variable overriding the router base URL.
pub const ENV_ROUTER_URL: &str = "CORTENSOR_ROUTER_URL";
/// Environment variable overriding the bearer token.
pub const ENV_API_KEY: &str = "CORTENSOR_API_KEY";

/// User-configurable settings.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the Cortensor router (no trailing slash required).
    pub router_url: String,
    /// Bearer token sent with every router request.
    pub api_key: String,
    /// Seconds between network status polls.
    pub poll_interval_secs: u64,
    /// Per-request timeout for router calls, in seconds.
    pub request_timeout_secs: u64,
    /// Catalog file replacing the bundled one.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            router_url: DEFAULT_ROUTER_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            poll_interval_secs: 30,
            request_timeout_secs: 15,
            catalog_path: None,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("router_url", &self.router_url)
            .field("api_key", &"<redacted>")
            .field("poll_interval_secs", &self.poll_interval_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("catalog_path", &self.catalog_path)
            .finish()
    }
}

impl Settings {
    /// Interval between network status polls.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Timeout applied to each router request.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Whether the bearer token is still the development placeholder.
    #[must_use]
    pub fn uses_dev_token(&self) -> bool {
        self.api_key == DEFAULT_API_KEY
    }
}

/// What: Remove a trailing comment from a configuration value.
///
/// Inputs:
/// - `s`: Raw value text after the `=`.
///
/// Output:
/// - Comment-free & trimmed substring of the input.
///
/// Details:
/// - Only ` #` and ` //` (preceded by whitespace) start a comment, so URLs stay intact.
fn strip_inline_comment(s: &str) -> &str {
    let cut = [" #", "\t#", " //", "\t//"]
        .iter()
        .filter_map(|m| s.find(m))
        .min()
        .unwrap_or(s.len());
    s[..cut].trim()
}

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: File content in `key = value` form.
/// - `settings`: Settings to update in place.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Skips blank lines and `#`/`//` comments; keys are case-insensitive and `.`/`-` map to `_`.
/// - Invalid numeric values and unknown keys are ignored with a debug log.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val.trim());
        match key.as_str() {
            "router_url" | "router" => {
                if !val.is_empty() {
                    settings.router_url = val.trim_end_matches('/').to_string();
                }
            }
            "api_key" | "token" => {
                if !val.is_empty() {
                    settings.api_key = val.to_string();
                }
            }
            "poll_interval_secs" | "poll_interval" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    settings.poll_interval_secs = v;
                }
            }
            "request_timeout_secs" | "request_timeout" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    settings.request_timeout_secs = v;
                }
            }
            "catalog_path" | "catalog" => {
                settings.catalog_path = if val.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(val))
                };
            }
            other => {
                tracing::debug!(key = %other, "ignoring unknown settings key");
            }
        }
    }
}

/// What: Apply environment overrides on top of file settings.
///
/// Inputs:
/// - `settings`: Settings to update.
/// - `lookup`: Environment accessor (injected so tests do not mutate the process env).
///
/// Details:
/// - Empty variables are treated as unset.
pub fn apply_env_overrides<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_ROUTER_URL).filter(|v| !v.trim().is_empty()) {
        settings.router_url = url.trim().trim_end_matches('/').to_string();
    }
    if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.trim().is_empty()) {
        settings.api_key = key.trim().to_string();
    }
}

/// What: Build settings from a specific file plus the process environment.
///
/// Inputs:
/// - `path`: Optional `settings.conf` location.
///
/// Output:
/// - Fully layered [`Settings`]; unreadable files fall back to defaults with a warning.
#[must_use]
pub fn load_settings_from(path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();
    if let Some(p) = path {
        match std::fs::read_to_string(p) {
            Ok(content) => parse_settings(&content, &mut settings),
            Err(e) => {
                tracing::warn!(path = %p.display(), error = %e, "failed to read settings; using defaults");
            }
        }
    }
    apply_env_overrides(&mut settings, |k| std::env::var(k).ok());
    if settings.uses_dev_token() {
        tracing::debug!("using development router token");
    }
    settings
}

/// What: Load settings from the discovered `settings.conf` and environment.
#[must_use]
pub fn load_settings() -> Settings {
    let path = super::paths::resolve_settings_config_path();
    load_settings_from(path.as_deref())
}
