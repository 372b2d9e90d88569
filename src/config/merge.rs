//! Deep merge of configuration layers.
//!
//! Maps merge key by key, everything else is replaced whole. The base is never mutated;
//! callers get a fresh value.

use super::{LoggerConfig, PartialConfig};
use std::collections::HashMap;
use std::hash::Hash;

/// Which side keeps a value both sides define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// Construction and clone: the override replaces the base.
    #[default]
    OverrideWins,
    /// Includes: the including file keeps its values, sources only fill gaps.
    BaseWins,
}

/// Effective configuration from `base` plus `overrides`.
#[must_use]
pub fn resolve(
    base: &LoggerConfig,
    overrides: Option<&PartialConfig>,
    strategy: MergeStrategy,
) -> LoggerConfig {
    let mut config = base.clone();
    let Some(overrides) = overrides else {
        return config;
    };
    let overrides = overrides.clone();

    merge_value(&mut config.level, overrides.level, strategy);
    merge_map(&mut config.levels, overrides.levels, strategy);
    merge_value(&mut config.prefix, overrides.prefix, strategy);
    merge_map(&mut config.prefixes, overrides.prefixes, strategy);
    merge_value(
        &mut config.use_level_prefixes,
        overrides.use_level_prefixes,
        strategy,
    );
    merge_map(&mut config.custom, overrides.custom, strategy);
    merge_value(&mut config.muted, overrides.muted, strategy);
    merge_value(&mut config.colors, overrides.colors, strategy);
    merge_map(&mut config.palette, overrides.palette, strategy);

    config
}

impl PartialConfig {
    /// Folds `other` into `self`; used for layering config files.
    pub fn merge(&mut self, other: Self, strategy: MergeStrategy) {
        merge_option(&mut self.level, other.level, strategy);
        merge_map(&mut self.levels, other.levels, strategy);
        merge_option(&mut self.prefix, other.prefix, strategy);
        merge_map(&mut self.prefixes, other.prefixes, strategy);
        merge_option(
            &mut self.use_level_prefixes,
            other.use_level_prefixes,
            strategy,
        );
        merge_map(&mut self.custom, other.custom, strategy);
        merge_option(&mut self.muted, other.muted, strategy);
        merge_option(&mut self.colors, other.colors, strategy);
        merge_map(&mut self.palette, other.palette, strategy);
    }
}

/// A full config always has a value, so `BaseWins` keeps it.
fn merge_value<T>(base: &mut T, other: Option<T>, strategy: MergeStrategy) {
    if let (MergeStrategy::OverrideWins, Some(value)) = (strategy, other) {
        *base = value;
    }
}

fn merge_option<T>(base: &mut Option<T>, other: Option<T>, strategy: MergeStrategy) {
    match strategy {
        MergeStrategy::OverrideWins => {
            if other.is_some() {
                *base = other;
            }
        }
        MergeStrategy::BaseWins => {
            if base.is_none() {
                *base = other;
            }
        }
    }
}

fn merge_map<K, V>(base: &mut HashMap<K, V>, other: HashMap<K, V>, strategy: MergeStrategy)
where
    K: Eq + Hash,
{
    for (k, v) in other {
        match strategy {
            MergeStrategy::OverrideWins => {
                base.insert(k, v);
            }
            MergeStrategy::BaseWins => {
                base.entry(k).or_insert(v);
            }
        }
    }
}
