//! Terminal styling and color utilities.
//!
//! ANSI escape codes plus color detection, so text output can highlight the
//! route the same way the DOT view does (route nodes red, others light blue).

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bold red for nodes on the route.
    pub const ROUTE: &str = "\x1b[1;31m";
    /// Light blue for nodes off the route.
    pub const NODE: &str = "\x1b[94m";
    /// Gray for secondary elements (distances, hints).
    pub const GRAY: &str = "\x1b[90m";
    /// Bright bold white for headings.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub route: &'static str,
    pub node: &'static str,
    pub gray: &'static str,
    pub white_bold: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            route: colors::ROUTE,
            node: colors::NODE,
            gray: colors::GRAY,
            white_bold: colors::WHITE_BOLD,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            route: "",
            node: "",
            gray: "",
            white_bold: "",
        }
    }

    /// Pick `colored()` or `plain()` from terminal capabilities.
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
/// Respects the `NO_COLOR` environment variable (https://no-color.org/) and
/// the `TERM=dumb` convention.
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
