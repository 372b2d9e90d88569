//! The styles a `{name:...}` span can apply, and the inverse operation for plain-text consumers.

use super::Color;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Matches SGR sequences (`ESC [ ... m`), which is all the compiler ever emits.
static ANSI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("Invalid ANSI regex"));

/// One resolved style name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Dim,
    Italic,
    Underline,
    /// Named palette color or `#rrggbb`.
    Fg(Color),
}

impl Style {
    /// Modifiers first, then `#hex`, then the palette. `None` means the name is not a style.
    #[must_use]
    #[allow(clippy::implicit_hasher)]
    pub fn resolve(name: &str, palette: &HashMap<String, Color>) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bold" | "b" => Some(Self::Bold),
            "dim" => Some(Self::Dim),
            "italic" | "i" => Some(Self::Italic),
            "underline" | "u" => Some(Self::Underline),
            lower if lower.starts_with('#') => Color::from_hex(lower).map(Self::Fg),
            lower => palette.get(lower).copied().map(Self::Fg),
        }
    }

    /// Opening escape for this style.
    #[must_use]
    pub fn sgr(self) -> String {
        match self {
            Self::Bold => "\x1b[1m".to_string(),
            Self::Dim => "\x1b[2m".to_string(),
            Self::Italic => "\x1b[3m".to_string(),
            Self::Underline => "\x1b[4m".to_string(),
            Self::Fg(color) => color.fg_ansi(),
        }
    }
}

/// Removes every SGR escape, leaving the visible text.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    ANSI_REGEX.replace_all(text, "").into_owned()
}
