use ratatui::style::Color;

use super::types::Theme;

/// What: Parse a color value as `#RRGGBB` or `R,G,B`.
///
/// Output:
/// - `Some(Color::Rgb)` on success; `None` for anything else.
pub(crate) fn parse_color(val: &str) -> Option<Color> {
    let val = val.trim();

    if let Some(hex) = val.strip_prefix('#')
        && hex.len() == 6
    {
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    let parts: Vec<&str> = val.split(',').collect();
    if parts.len() == 3 {
        let r: u8 = parts[0].trim().parse().ok()?;
        let g: u8 = parts[1].trim().parse().ok()?;
        let b: u8 = parts[2].trim().parse().ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    None
}

/// What: Overlay `key = color` lines from a theme file onto a base palette.
///
/// Inputs:
/// - `content`: Theme file text
/// - `base`: Palette supplying values for keys the file omits
///
/// Output:
/// - Resulting palette and one diagnostic per rejected line.
///
/// Details:
/// - Blank lines and lines starting with `#` or `//` are ignored.
/// - Keys are case-insensitive; `-`, `.` and spaces normalize to `_`.
pub(crate) fn apply_theme_content(content: &str, base: Theme) -> (Theme, Vec<String>) {
    let mut theme = base;
    let mut errors = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }
        let Some((k, v)) = line.split_once('=') else {
            errors.push(format!("line {}: expected key = value", idx + 1));
            continue;
        };
        let key = k.trim().to_lowercase().replace(['-', '.', ' '], "_");
        let Some(slot) = theme.slot_mut(&key) else {
            errors.push(format!("line {}: unknown key '{}'", idx + 1, k.trim()));
            continue;
        };
        match parse_color(v) {
            Some(c) => *slot = c,
            None => errors.push(format!("line {}: invalid color '{}'", idx + 1, v.trim())),
        }
    }
    (theme, errors)
}
