//! Normalization helpers for raw style strings
//!
//! The extraction layer reports colors as `rgb()`/`rgba()` strings and font
//! families as full declaration lists. These helpers reduce them to the
//! forms the classifiers key on: lowercase hex values and cleaned first-token
//! font names.

use once_cell::sync::Lazy;
use regex::Regex;

static RGB_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgba?\((\d+),\s*(\d+),\s*(\d+)(?:,\s*[\d.]+)?\)").expect("valid rgb regex")
});

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-f]{3,8}$").expect("valid hex regex"));

/// Basic CSS color keywords accepted as color values
const NAMED_COLORS: &[&str] = &[
    "red", "blue", "green", "yellow", "black", "white", "gray", "grey", "purple", "orange", "pink",
    "brown",
];

/// Normalize an `rgb()`/`rgba()` string to lowercase hex.
///
/// Returns `None` for empty or `transparent` input. Values that are not in
/// rgb form (hex strings, keywords) pass through unchanged; the alpha
/// component of `rgba()` is discarded.
pub fn normalize_color_value(value: &str) -> Option<String> {
    if value.is_empty() || value == "transparent" {
        return None;
    }

    if let Some(captures) = RGB_COLOR.captures(value) {
        // Channel values above 255 fail the u8 parse and fall through
        let channels: Option<Vec<u8>> = (1..=3)
            .map(|i| captures.get(i).and_then(|m| m.as_str().parse().ok()))
            .collect();
        if let Some(channels) = channels {
            return Some(format!(
                "#{:02x}{:02x}{:02x}",
                channels[0], channels[1], channels[2]
            ));
        }
    }

    Some(value.to_string())
}

/// Check whether a string value plausibly represents a color.
///
/// Accepts hex colors, `rgb()`/`rgba()`, `hsl()`/`hsla()`, and a small set
/// of named colors. Used to filter CSS custom properties down to the
/// color-valued ones.
pub fn is_color_value(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    if value.is_empty() {
        return false;
    }

    if HEX_COLOR.is_match(&value) {
        return true;
    }

    if value.starts_with("rgb(") || value.starts_with("rgba(") {
        return true;
    }

    if value.starts_with("hsl(") || value.starts_with("hsla(") {
        return true;
    }

    NAMED_COLORS.contains(&value.as_str())
}

/// Reduce a font-family declaration to its cleaned first family name.
///
/// Takes the first comma-separated token and strips surrounding whitespace
/// and quotes: `"\"Fira Mono\", monospace"` → `Fira Mono`.
pub fn clean_font_name(family: &str) -> String {
    family
        .split(',')
        .next()
        .unwrap_or("")
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_rgb_to_hex() {
        assert_eq!(
            normalize_color_value("rgb(26, 115, 232)").as_deref(),
            Some("#1a73e8")
        );
    }

    #[test]
    fn test_normalize_rgba_drops_alpha() {
        assert_eq!(
            normalize_color_value("rgba(255, 0, 0, 0.5)").as_deref(),
            Some("#ff0000")
        );
    }

    #[test]
    fn test_normalize_passes_through_hex() {
        assert_eq!(
            normalize_color_value("#1a73e8").as_deref(),
            Some("#1a73e8")
        );
    }

    #[test]
    fn test_normalize_rejects_transparent_and_empty() {
        assert_eq!(normalize_color_value("transparent"), None);
        assert_eq!(normalize_color_value(""), None);
    }

    #[test]
    fn test_is_color_value_accepts_common_syntaxes() {
        assert!(is_color_value("#fff"));
        assert!(is_color_value("#1A73E8"));
        assert!(is_color_value("rgb(0, 0, 0)"));
        assert!(is_color_value("rgba(0, 0, 0, 0.2)"));
        assert!(is_color_value("hsl(210, 50%, 40%)"));
        assert!(is_color_value("  blue "));
    }

    #[test]
    fn test_is_color_value_rejects_non_colors() {
        assert!(!is_color_value(""));
        assert!(!is_color_value("1rem"));
        assert!(!is_color_value("url(bg.png)"));
        assert!(!is_color_value("#nothex"));
    }

    #[test]
    fn test_clean_font_name_strips_quotes_and_fallbacks() {
        assert_eq!(clean_font_name("Georgia, serif"), "Georgia");
        assert_eq!(clean_font_name("\"Fira Mono\", monospace"), "Fira Mono");
        assert_eq!(clean_font_name("'Open Sans', sans-serif"), "Open Sans");
        assert_eq!(clean_font_name("Arial"), "Arial");
    }

    #[test]
    fn test_clean_font_name_empty_input() {
        assert_eq!(clean_font_name(""), "");
    }
}
