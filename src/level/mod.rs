//! Built-in severity names, their default scores and default level prefixes.
//!
//! The logger itself gates on the configurable `levels` table, not on this enum. `Level`
//! only names the defaults and gives the alias methods a typed argument.

use std::fmt;
use std::str::FromStr;

/// The five levels every logger starts with.
///
/// No `Ord`: ordering comes from the configured scores, which callers may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    /// High-volume instrumentation.
    Trace,
    /// Development-time diagnostics.
    Debug,
    /// Non-fatal anomalies. Scores below `Info` in the default table.
    Warn,
    /// Normal operational messages.
    #[default]
    Info,
    /// Failures.
    Error,
}

impl Level {
    /// Lowercase, matching the keys of the `levels` and `prefixes` tables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Error => "error",
        }
    }

    /// Score in the default `levels` table.
    #[must_use]
    pub const fn default_score(self) -> i64 {
        match self {
            Self::Trace => 100,
            Self::Debug => 200,
            Self::Warn => 300,
            Self::Info => 400,
            Self::Error => 500,
        }
    }

    /// Level prefix in the default `prefixes` table, in template markup.
    #[must_use]
    pub const fn default_prefix(self) -> &'static str {
        match self {
            Self::Trace => "[trace] ",
            Self::Debug => "{yellow:[debug]} ",
            Self::Warn => "{magenta:[warn]} ",
            Self::Info => "{cyan:[info]} ",
            Self::Error => "{red:[error]} ",
        }
    }

    /// In default score order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Trace,
            Self::Debug,
            Self::Warn,
            Self::Info,
            Self::Error,
        ]
    }
}

impl AsRef<str> for Level {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` for names outside the built-in five.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
