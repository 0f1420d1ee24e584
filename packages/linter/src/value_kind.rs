//! Coarse classification of literal token values.

use once_cell::sync::Lazy;
use regex::Regex;

static HEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("hex pattern is valid")
});
static COLOR_FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:rgba?|hsla?)\([^()]*\)$").expect("color function pattern is valid"));
static DURATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d*\.?\d+m?s$").expect("duration pattern is valid"));
static DIMENSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?\d*\.?\d+(?:px|rem|em|%|vh|vw|vmin|vmax|ch|ex|pt)$").expect("dimension pattern is valid")
});
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d*\.?\d+$").expect("number pattern is valid"));

/// Color literal formats the pipeline accepts: hex, rgb/rgba, hsl/hsla,
/// `transparent` and `currentColor`
pub fn is_color(value: &str) -> bool {
    let value = value.trim();
    HEX.is_match(value)
        || COLOR_FUNCTION.is_match(value)
        || value.eq_ignore_ascii_case("transparent")
        || value.eq_ignore_ascii_case("currentcolor")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Color,
    Duration,
    Dimension,
    Number,
    Other,
}

impl ValueKind {
    pub fn of(value: &str) -> Self {
        let value = value.trim();
        if is_color(value) {
            ValueKind::Color
        } else if DURATION.is_match(value) {
            ValueKind::Duration
        } else if DIMENSION.is_match(value) {
            ValueKind::Dimension
        } else if NUMBER.is_match(value) {
            ValueKind::Number
        } else {
            ValueKind::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors() {
        for value in ["#fff", "#ffff", "#ffffff", "#ffffff80", "rgb(0, 0, 0)", "hsla(0 0% 0% / 0.5)", "transparent", "currentColor"] {
            assert!(is_color(value), "{}", value);
        }
        for value in ["#ff", "#fffff", "red", "oklch(0.7 0.1 200)", "rgb(0,0,0"] {
            assert!(!is_color(value), "{}", value);
        }
    }

    #[test]
    fn test_kinds() {
        assert_eq!(ValueKind::of("#000"), ValueKind::Color);
        assert_eq!(ValueKind::of("120ms"), ValueKind::Duration);
        assert_eq!(ValueKind::of("0.2s"), ValueKind::Duration);
        assert_eq!(ValueKind::of("4px"), ValueKind::Dimension);
        assert_eq!(ValueKind::of("1.5"), ValueKind::Number);
        assert_eq!(ValueKind::of("Inter, sans-serif"), ValueKind::Other);
    }
}
