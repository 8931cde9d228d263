//! Color palette for the terminal UI.

/// Palette file parsing.
mod parsing;
/// Lazily loaded global palette.
mod store;
/// Theme type definitions.
mod types;

pub use store::{THEME_FILE, theme};
pub use types::Theme;
