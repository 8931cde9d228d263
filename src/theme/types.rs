use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Subtle surface color for component backgrounds.
    pub surface1: Color,
    /// Muted border color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent for headings.
    pub mauve: Color,
    /// Success/online state color.
    pub green: Color,
    /// Warning/beta/demo state color.
    pub yellow: Color,
    /// Error/offline state color.
    pub red: Color,
    /// Accent for subtle emphasis and borders.
    pub lavender: Color,
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),        // #1e1e2e
            mantle: Color::Rgb(24, 24, 37),      // #181825
            surface1: Color::Rgb(69, 71, 90),    // #45475a
            overlay1: Color::Rgb(127, 132, 156), // #7f849c
            text: Color::Rgb(205, 214, 244),     // #cdd6f4
            subtext0: Color::Rgb(166, 173, 200), // #a6adc8
            sapphire: Color::Rgb(116, 199, 236), // #74c7ec
            mauve: Color::Rgb(203, 166, 247),    // #cba6f7
            green: Color::Rgb(166, 227, 161),    // #a6e3a1
            yellow: Color::Rgb(249, 226, 175),   // #f9e2af
            red: Color::Rgb(243, 139, 168),      // #f38ba8
            lavender: Color::Rgb(180, 190, 254), // #b4befe
        }
    }
}

impl Theme {
    /// What: Mutable slot for a palette key, accepting a few semantic aliases.
    ///
    /// Output:
    /// - `None` for unknown keys.
    pub(crate) fn slot_mut(&mut self, key: &str) -> Option<&mut Color> {
        let slot = match key {
            "base" | "background_base" => &mut self.base,
            "mantle" | "background_mantle" => &mut self.mantle,
            "surface1" | "surface" => &mut self.surface1,
            "overlay1" | "overlay" | "border" => &mut self.overlay1,
            "text" | "text_primary" => &mut self.text,
            "subtext0" | "text_secondary" => &mut self.subtext0,
            "sapphire" | "accent_interactive" => &mut self.sapphire,
            "mauve" | "accent_heading" => &mut self.mauve,
            "green" | "semantic_success" => &mut self.green,
            "yellow" | "semantic_warning" => &mut self.yellow,
            "red" | "semantic_error" => &mut self.red,
            "lavender" | "accent_emphasis" => &mut self.lavender,
            _ => return None,
        };
        Some(slot)
    }
}
