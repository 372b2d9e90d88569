//! Individually settable options, shared by the persistent setters and `set_once`.

use crate::config::{LoggerConfig, Prefix};

/// One option with its new value.
#[derive(Debug, Clone)]
pub enum Setting {
    Level(String),
    Prefix(Prefix),
    /// Level name, then the prefix shown for it.
    LevelPrefix(String, String),
    UseLevelPrefixes(bool),
    Muted(bool),
    Colors(bool),
}

/// Identity of a [`Setting`] regardless of value; at most one one-shot is pending per key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Level,
    Prefix,
    /// Keyed per level name.
    LevelPrefix(String),
    UseLevelPrefixes,
    Muted,
    Colors,
}

impl Setting {
    #[must_use]
    pub fn key(&self) -> SettingKey {
        match self {
            Self::Level(_) => SettingKey::Level,
            Self::Prefix(_) => SettingKey::Prefix,
            Self::LevelPrefix(level, _) => SettingKey::LevelPrefix(level.clone()),
            Self::UseLevelPrefixes(_) => SettingKey::UseLevelPrefixes,
            Self::Muted(_) => SettingKey::Muted,
            Self::Colors(_) => SettingKey::Colors,
        }
    }

    pub(crate) fn apply(self, config: &mut LoggerConfig) {
        match self {
            Self::Level(level) => config.level = level,
            Self::Prefix(prefix) => config.prefix = prefix,
            Self::LevelPrefix(level, prefix) => {
                config.prefixes.insert(level, prefix);
            }
            Self::UseLevelPrefixes(enabled) => config.use_level_prefixes = enabled,
            Self::Muted(muted) => config.muted = muted,
            Self::Colors(enabled) => config.colors = enabled,
        }
    }
}
