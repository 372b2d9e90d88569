//! 24-bit colors for `{name:text}` markup. Named colors resolve through a palette so users
//! can re-map `red` or add `accent` without touching their templates.

use std::collections::HashMap;
use std::fmt;

/// A dedicated type prevents mixing up raw u8 triples and documents color intent at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// `const` so the built-in palette can be compile-time constants.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` (the `#` is optional). Returns `None` for anything else so a typo in
    /// a palette entry drops that entry instead of painting text an arbitrary color.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self { r, g, b })
    }

    /// The raw `\x1b[38;2;R;G;Bm` escape.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Terminates any active SGR styling.
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn black() -> Self {
        Self::new(33, 34, 44)
    }

    #[must_use]
    pub const fn white() -> Self {
        Self::new(248, 248, 242)
    }

    #[must_use]
    pub const fn gray() -> Self {
        Self::new(98, 114, 164)
    }

    #[must_use]
    pub const fn green() -> Self {
        Self::new(80, 250, 123)
    }

    #[must_use]
    pub const fn yellow() -> Self {
        Self::new(241, 250, 140)
    }

    #[must_use]
    pub const fn cyan() -> Self {
        Self::new(139, 233, 253)
    }

    #[must_use]
    pub const fn red() -> Self {
        Self::new(255, 85, 85)
    }

    #[must_use]
    pub const fn magenta() -> Self {
        Self::new(255, 121, 198)
    }

    #[must_use]
    pub const fn purple() -> Self {
        Self::new(189, 147, 249)
    }

    #[must_use]
    pub const fn orange() -> Self {
        Self::new(255, 184, 108)
    }

    #[must_use]
    pub const fn blue() -> Self {
        Self::new(98, 114, 255)
    }

    /// Names every template can use without configuring a palette.
    #[must_use]
    pub fn builtin_palette() -> HashMap<String, Self> {
        [
            ("black", Self::black()),
            ("white", Self::white()),
            ("gray", Self::gray()),
            ("grey", Self::gray()),
            ("green", Self::green()),
            ("yellow", Self::yellow()),
            ("cyan", Self::cyan()),
            ("red", Self::red()),
            ("magenta", Self::magenta()),
            ("pink", Self::magenta()),
            ("purple", Self::purple()),
            ("orange", Self::orange()),
            ("blue", Self::blue()),
        ]
        .into_iter()
        .map(|(name, color)| (name.to_string(), color))
        .collect()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
