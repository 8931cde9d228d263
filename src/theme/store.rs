use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use super::parsing::apply_theme_content;
use super::types::Theme;

/// File name of the optional palette override inside the config directory.
pub const THEME_FILE: &str = "theme.conf";

/// Global theme, loaded once on first use.
static THEME_STORE: OnceLock<Theme> = OnceLock::new();

/// Location of the optional theme file.
fn theme_config_path() -> PathBuf {
    crate::config::config_dir().join(THEME_FILE)
}

fn load_initial_theme() -> Theme {
    let path = theme_config_path();
    let Ok(content) = fs::read_to_string(&path) else {
        return Theme::default();
    };
    let (theme, errors) = apply_theme_content(&content, Theme::default());
    for err in &errors {
        tracing::warn!(path = %path.display(), error = %err, "theme configuration error");
    }
    tracing::info!(path = %path.display(), "loaded theme configuration");
    theme
}

/// Return the application's theme palette.
///
/// Starts from Catppuccin Mocha and overlays `<config>/theme.conf` when present.
/// Format: `key = value`, one per line; values are colors as `#RRGGBB` or `R,G,B`.
/// Invalid lines are logged and skipped.
pub fn theme() -> Theme {
    *THEME_STORE.get_or_init(load_initial_theme)
}
