//! Terminal styling and color utilities.
//!
//! This module provides ANSI escape code definitions and color detection
//! for shell output. Colors are only used for text output; JSON output is
//! never styled.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for emphasis (section headers).
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements (prompts, footers).
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for the banner border.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for successful command confirmations.
    pub const GREEN: &str = "\x1b[32m";
    /// Orange (256-color) for hazard notices.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    /// Red for failed commands.
    pub const RED: &str = "\x1b[31m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub orange: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            orange: colors::ORANGE,
            red: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            orange: "",
            red: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Check if the terminal supports Unicode characters.
///
/// Looks for explicit UTF hints in `LANG` and `LC_ALL`.
#[must_use]
pub fn supports_unicode() -> bool {
    ["LANG", "LC_ALL"].iter().any(|var| {
        std::env::var(var)
            .map(|value| value.to_uppercase().contains("UTF"))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_has_no_escape_codes() {
        let palette = ColorPalette::plain();
        for code in [
            palette.reset,
            palette.white_bold,
            palette.gray,
            palette.cyan,
            palette.green,
            palette.orange,
            palette.red,
        ] {
            assert!(code.is_empty());
        }
    }

    #[test]
    fn colored_palette_uses_ansi_sequences() {
        let palette = ColorPalette::colored();
        assert_eq!(palette.red, "\x1b[31m");
        assert!(palette.reset.starts_with('\x1b'));
    }
}
