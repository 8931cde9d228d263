//! Configuration: settings file discovery, parsing, and environment overrides.

mod paths;
mod settings;

pub use paths::{config_dir, logs_dir};
pub use settings::{
    DEFAULT_API_KEY, DEFAULT_ROUTER_URL, ENV_API_KEY, ENV_ROUTER_URL, Settings,
    apply_env_overrides, load_settings, load_settings_from, parse_settings,
};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
