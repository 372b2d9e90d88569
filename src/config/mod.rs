//! Configuration values, the merge that resolves them, and TOML loading.
//!
//! Loading only ever produces a [`PartialConfig`]; it becomes a [`LoggerConfig`] when a
//! logger resolves it against the defaults.

mod merge;
mod structs;

pub use merge::{MergeStrategy, resolve};
pub use structs::{LoggerConfig, PartialConfig, Prefix};

use crate::internal;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "prefixlog";
const CONFIG_FILE: &str = "prefixlog.toml";

/// Scans raw TOML for `source = "..."` directives before deserialization, since they may
/// repeat and serde would reject duplicate keys.
/// Returns the extracted paths and the remaining TOML content stripped of those lines.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        let is_source = trimmed
            .strip_prefix("source")
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if is_source {
            if let Some(path) = trimmed
                .split_once('=')
                .map(|(_, v)| v.trim().trim_matches('"').trim_matches('\''))
                && !path.is_empty()
            {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl PartialConfig {
    /// Parses one TOML document. `source` lines are ignored here; use [`Self::load_from`]
    /// to follow them.
    ///
    /// # Errors
    /// Returns `Error::ConfigParse` on invalid TOML or mistyped fields.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        let (_, toml_content) = extract_sources(content);
        Ok(toml::from_str(&toml_content)?)
    }

    /// Loads the user's config from the default location. A missing file is an empty config.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, a file can't be read or parsed,
    /// or includes form a cycle.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::config_path()?;
        internal::debug("CONFIG", &format!("Loading config from {}", path.display()));
        let config = Self::load_from(&path)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Loads `path` and every file it pulls in with `source = "..."`.
    ///
    /// Relative sources resolve against the including file's directory. The including
    /// file's values win over its sources.
    ///
    /// # Errors
    /// Returns error if a file cannot be read or parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        Self::load_with_sources(path, &mut HashSet::new())
    }

    /// `chain` holds the files currently being included, so only a real cycle trips it; the
    /// same file reached through two branches loads twice.
    fn load_with_sources(path: &Path, chain: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug(
                "CONFIG",
                &format!("{} not found, using defaults", path.display()),
            );
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !chain.insert(canonical.clone()) {
            internal::warn(
                "CONFIG",
                &format!("Cyclic include detected: {}", canonical.display()),
            );
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let result = Self::load_file(path, chain);
        chain.remove(&canonical);
        result
    }

    fn load_file(path: &Path, chain: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut config: Self = toml::from_str(&toml_content)?;

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        for source in sources {
            let expanded = shellexpand::tilde(&source);
            let source_path = dir.join(expanded.as_ref());
            if source_path.exists() {
                internal::debug("CONFIG", &format!("Processing source: {source}"));
                let included = Self::load_with_sources(&source_path, chain)?;
                config.merge(included, MergeStrategy::BaseWins);
            } else {
                internal::warn("CONFIG", &format!("Source file not found: {source}"));
            }
        }

        Ok(config)
    }

    /// `<config dir>/prefixlog/prefixlog.toml`, e.g. `~/.config/prefixlog/prefixlog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join(CONFIG_DIR).join(CONFIG_FILE))
            .ok_or(crate::Error::ConfigDirNotFound)
    }
}
