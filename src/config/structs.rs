//! Configuration value types.

use crate::fmt::{Color, Compiler, CustomFn};
use crate::level::Level;
use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Base prefix: fixed text, or a function evaluated at every emission.
#[derive(Clone)]
pub enum Prefix {
    Static(String),
    Computed(Arc<dyn Fn() -> String + Send + Sync>),
}

impl Prefix {
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    /// The text to prepend right now.
    #[must_use]
    pub fn resolve(&self) -> Cow<'_, str> {
        match self {
            Self::Static(s) => Cow::Borrowed(s.as_str()),
            Self::Computed(f) => Cow::Owned(f()),
        }
    }
}

impl Default for Prefix {
    fn default() -> Self {
        Self::Static(String::new())
    }
}

impl fmt::Debug for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(s) => f.debug_tuple("Static").field(s).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&str> for Prefix {
    fn from(s: &str) -> Self {
        Self::Static(s.to_string())
    }
}

impl From<String> for Prefix {
    fn from(s: String) -> Self {
        Self::Static(s)
    }
}

/// Config files can only spell static prefixes.
impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::Static)
    }
}

/// Fully resolved configuration of one logger.
///
/// A plain value: loggers copy it on construction and clone, and never share it.
#[derive(Clone)]
pub struct LoggerConfig {
    /// Minimum level that will be emitted. Should be a key of `levels`.
    pub level: String,
    /// Level name to score; higher is more severe.
    pub levels: HashMap<String, i64>,
    /// Prepended to every prefixed message.
    pub prefix: Prefix,
    /// Per-level prefix, inserted after `prefix` when `use_level_prefixes` is on.
    pub prefixes: HashMap<String, String>,
    pub use_level_prefixes: bool,
    /// Named transforms available to markup as `{name:...}`.
    pub custom: HashMap<String, CustomFn>,
    /// Suppresses all emission.
    pub muted: bool,
    /// Emit ANSI escapes for styled markup.
    pub colors: bool,
    /// Extra named colors as `#rrggbb`.
    pub palette: HashMap<String, String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Info.as_str().to_string(),
            levels: Level::all()
                .into_iter()
                .map(|l| (l.as_str().to_string(), l.default_score()))
                .collect(),
            prefix: Prefix::default(),
            prefixes: Level::all()
                .into_iter()
                .map(|l| (l.as_str().to_string(), l.default_prefix().to_string()))
                .collect(),
            use_level_prefixes: false,
            custom: HashMap::new(),
            muted: false,
            colors: true,
            palette: HashMap::new(),
        }
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut custom: Vec<&str> = self.custom.keys().map(String::as_str).collect();
        custom.sort_unstable();
        f.debug_struct("LoggerConfig")
            .field("level", &self.level)
            .field("levels", &self.levels)
            .field("prefix", &self.prefix)
            .field("prefixes", &self.prefixes)
            .field("use_level_prefixes", &self.use_level_prefixes)
            .field("custom", &custom)
            .field("muted", &self.muted)
            .field("colors", &self.colors)
            .field("palette", &self.palette)
            .finish()
    }
}

impl LoggerConfig {
    /// Unknown names on either side fail closed.
    #[must_use]
    pub fn can_log(&self, level: &str) -> bool {
        match (self.levels.get(level), self.levels.get(&self.level)) {
            (Some(score), Some(min)) => score >= min,
            _ => false,
        }
    }

    /// Missing entries render as nothing rather than a placeholder.
    #[must_use]
    pub fn level_prefix(&self, level: &str) -> &str {
        self.prefixes.get(level).map_or("", String::as_str)
    }

    /// Level names sorted by score, then name.
    #[must_use]
    pub fn level_names(&self) -> Vec<String> {
        let mut names: Vec<(&String, &i64)> = self.levels.iter().collect();
        names.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));
        names.into_iter().map(|(name, _)| name.clone()).collect()
    }

    /// Palette entries that fail to parse are skipped.
    #[must_use]
    pub fn compiler(&self) -> Compiler {
        let mut compiler = Compiler::new();
        for (name, hex) in &self.palette {
            if let Some(color) = Color::from_hex(hex) {
                compiler = compiler.color(name, color);
            }
        }
        for (name, f) in &self.custom {
            compiler = compiler.custom(name.clone(), Arc::clone(f));
        }
        compiler
    }
}

/// Overrides for a [`LoggerConfig`]. `None` and empty maps leave the base untouched.
///
/// Deserializable from TOML; `custom` and computed prefixes can only be set in code.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartialConfig {
    pub level: Option<String>,
    pub levels: HashMap<String, i64>,
    pub prefix: Option<Prefix>,
    pub prefixes: HashMap<String, String>,
    #[serde(alias = "useLevelPrefixes")]
    pub use_level_prefixes: Option<bool>,
    #[serde(skip)]
    pub custom: HashMap<String, CustomFn>,
    pub muted: Option<bool>,
    pub colors: Option<bool>,
    pub palette: HashMap<String, String>,
}

impl fmt::Debug for PartialConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut custom: Vec<&str> = self.custom.keys().map(String::as_str).collect();
        custom.sort_unstable();
        f.debug_struct("PartialConfig")
            .field("level", &self.level)
            .field("levels", &self.levels)
            .field("prefix", &self.prefix)
            .field("prefixes", &self.prefixes)
            .field("use_level_prefixes", &self.use_level_prefixes)
            .field("custom", &custom)
            .field("muted", &self.muted)
            .field("colors", &self.colors)
            .field("palette", &self.palette)
            .finish()
    }
}

impl PartialConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn level(mut self, level: impl AsRef<str>) -> Self {
        self.level = Some(level.as_ref().to_string());
        self
    }

    /// Adds a level or re-scores an existing one.
    #[must_use]
    pub fn level_score(mut self, name: impl Into<String>, score: i64) -> Self {
        self.levels.insert(name.into(), score);
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<Prefix>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn level_prefix(mut self, name: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.prefixes.insert(name.into(), prefix.into());
        self
    }

    #[must_use]
    pub const fn use_level_prefixes(mut self, enabled: bool) -> Self {
        self.use_level_prefixes = Some(enabled);
        self
    }

    #[must_use]
    pub fn custom(mut self, name: impl Into<String>, f: CustomFn) -> Self {
        self.custom.insert(name.into(), f);
        self
    }

    #[must_use]
    pub const fn muted(mut self, muted: bool) -> Self {
        self.muted = Some(muted);
        self
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = Some(enabled);
        self
    }

    #[must_use]
    pub fn color(mut self, name: impl Into<String>, hex: impl Into<String>) -> Self {
        self.palette.insert(name.into(), hex.into());
        self
    }
}

/// Every field set, so merging it over anything reproduces `config`.
impl From<LoggerConfig> for PartialConfig {
    fn from(config: LoggerConfig) -> Self {
        Self {
            level: Some(config.level),
            levels: config.levels,
            prefix: Some(config.prefix),
            prefixes: config.prefixes,
            use_level_prefixes: Some(config.use_level_prefixes),
            custom: config.custom,
            muted: Some(config.muted),
            colors: Some(config.colors),
            palette: config.palette,
        }
    }
}
