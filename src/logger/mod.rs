//! The logger: level gating, prefix composition, one-shot overrides, and cloning.
//!
//! A `Logger` owns a resolved [`LoggerConfig`] and a shared [`Sink`]. Setters mutate the
//! configuration in place; clones start from a copy of it and never see later changes.

mod alias;
mod builder;
mod setting;

pub use alias::Alias;
pub use builder::LoggerBuilder;
pub use setting::{Setting, SettingKey};

use crate::config::{LoggerConfig, MergeStrategy, PartialConfig, Prefix, resolve};
use crate::fmt::Compiler;
use crate::internal;
use crate::level::Level;
use crate::output::{ConsoleSink, Line, Sink};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::sync::Arc;

/// What one emission call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// The sink received a line.
    Written,
    /// The level scored below the minimum, or one of the names is unknown.
    Gated,
    /// Muted, persistently or by a one-shot.
    Muted,
}

impl Emission {
    #[must_use]
    pub const fn is_written(self) -> bool {
        matches!(self, Self::Written)
    }
}

pub struct Logger {
    config: LoggerConfig,
    compiler: Compiler,
    sink: Arc<dyn Sink>,
    /// Level names in score order, fixed when the logger is created.
    aliases: Vec<String>,
    /// One-shot overrides waiting for the next emission call.
    pending: HashMap<SettingKey, Setting>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(PartialConfig::default())
    }
}

impl From<PartialConfig> for Logger {
    fn from(config: PartialConfig) -> Self {
        Self::new(config)
    }
}

/// Same as `clone_with` with no overrides. Pending one-shots stay with the original.
impl Clone for Logger {
    fn clone(&self) -> Self {
        Self::from_resolved(self.config.clone(), Arc::clone(&self.sink))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("aliases", &self.aliases)
            .field("pending", &self.pending.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Defaults overlaid with `config`, printing to stdout.
    #[must_use]
    pub fn new(config: PartialConfig) -> Self {
        Self::with_sink(config, Arc::new(ConsoleSink::new()))
    }

    #[must_use]
    pub fn with_sink(config: PartialConfig, sink: Arc<dyn Sink>) -> Self {
        let config = resolve(
            &LoggerConfig::default(),
            Some(&config),
            MergeStrategy::OverrideWins,
        );
        Self::from_resolved(config, sink)
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn from_resolved(config: LoggerConfig, sink: Arc<dyn Sink>) -> Self {
        Self {
            compiler: config.compiler(),
            aliases: config.level_names(),
            config,
            sink,
            pending: HashMap::new(),
        }
    }

    /// Back to level `info` without level prefixes. Everything else stays.
    pub fn reset(&mut self) -> &mut Self {
        self.set(Setting::Level(Level::Info.as_str().to_string()))
            .set(Setting::UseLevelPrefixes(false))
    }

    /// Whether `level` scores at or above the current minimum. Ignores one-shots and muting.
    #[must_use]
    pub fn can_log(&self, level: impl AsRef<str>) -> bool {
        self.config.can_log(level.as_ref())
    }

    /// Emits `msg` at `level` with base prefix, and level prefix if enabled.
    ///
    /// Always returns the logger, whether or not anything was written; sink errors are
    /// dropped. Use [`Self::try_log`] to observe either.
    pub fn log(&mut self, level: impl AsRef<str>, msg: &str) -> &mut Self {
        self.log_args(level, msg, &[])
    }

    /// `args` are stringified and passed to the sink after the text, for its placeholders.
    pub fn log_args(
        &mut self,
        level: impl AsRef<str>,
        msg: &str,
        args: &[&dyn Display],
    ) -> &mut Self {
        let _ = self.emit(level.as_ref(), msg, args, false);
        self
    }

    /// Like [`Self::log`], without base or level prefix.
    pub fn unprefixed(&mut self, level: impl AsRef<str>, msg: &str) -> &mut Self {
        self.unprefixed_args(level, msg, &[])
    }

    pub fn unprefixed_args(
        &mut self,
        level: impl AsRef<str>,
        msg: &str,
        args: &[&dyn Display],
    ) -> &mut Self {
        let _ = self.emit(level.as_ref(), msg, args, true);
        self
    }

    /// [`Self::log_args`] that reports what happened.
    ///
    /// # Errors
    /// Whatever the sink returned.
    pub fn try_log(
        &mut self,
        level: impl AsRef<str>,
        msg: &str,
        args: &[&dyn Display],
    ) -> Result<Emission, crate::Error> {
        self.emit(level.as_ref(), msg, args, false)
    }

    /// [`Self::unprefixed_args`] that reports what happened.
    ///
    /// # Errors
    /// Whatever the sink returned.
    pub fn try_unprefixed(
        &mut self,
        level: impl AsRef<str>,
        msg: &str,
        args: &[&dyn Display],
    ) -> Result<Emission, crate::Error> {
        self.emit(level.as_ref(), msg, args, true)
    }

    pub fn trace(&mut self, msg: &str) -> &mut Self {
        self.log(Level::Trace, msg)
    }

    pub fn debug(&mut self, msg: &str) -> &mut Self {
        self.log(Level::Debug, msg)
    }

    pub fn info(&mut self, msg: &str) -> &mut Self {
        self.log(Level::Info, msg)
    }

    pub fn warn(&mut self, msg: &str) -> &mut Self {
        self.log(Level::Warn, msg)
    }

    pub fn error(&mut self, msg: &str) -> &mut Self {
        self.log(Level::Error, msg)
    }

    /// Shorthand for any level this logger was created with, custom ones included.
    /// `None` for names outside its `levels` table.
    pub fn alias(&mut self, name: &str) -> Option<Alias<'_>> {
        if !self.aliases.iter().any(|a| a == name) {
            return None;
        }
        Some(Alias {
            logger: self,
            level: name.to_string(),
        })
    }

    /// Names [`Self::alias`] accepts, in score order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.aliases.iter().map(String::as_str)
    }

    /// Not validated: a name missing from `levels` makes every `can_log` false.
    pub fn set_level(&mut self, level: impl AsRef<str>) -> &mut Self {
        let level = level.as_ref();
        if !self.config.levels.contains_key(level) {
            internal::warn(
                "LOGGER",
                &format!("Unknown level '{level}', nothing will be logged until it changes"),
            );
        }
        self.set(Setting::Level(level.to_string()))
    }

    pub fn set_level_prefixes(&mut self, enabled: bool) -> &mut Self {
        self.set(Setting::UseLevelPrefixes(enabled))
    }

    pub fn set_prefix(&mut self, prefix: impl Into<Prefix>) -> &mut Self {
        self.set(Setting::Prefix(prefix.into()))
    }

    pub fn mute(&mut self, muted: bool) -> &mut Self {
        self.set(Setting::Muted(muted))
    }

    /// Persistent counterpart of [`Self::set_once`].
    pub fn set(&mut self, setting: Setting) -> &mut Self {
        setting.apply(&mut self.config);
        self
    }

    /// Applies `setting` to the next emission call only, whether or not it writes anything.
    /// Setting the same key again before then replaces the pending value.
    pub fn set_once(&mut self, setting: Setting) -> &mut Self {
        self.pending.insert(setting.key(), setting);
        self
    }

    /// Child logger from this one's current configuration with `overrides` deep-merged on top.
    #[must_use]
    pub fn clone_with(&self, overrides: &PartialConfig) -> Self {
        let config = resolve(&self.config, Some(overrides), MergeStrategy::OverrideWins);
        Self::from_resolved(config, Arc::clone(&self.sink))
    }

    /// Child logger whose configuration is whatever `f` returns when given a copy of this
    /// one's. The result is resolved against the defaults like a constructor argument.
    #[must_use]
    pub fn clone_map<F>(&self, f: F) -> Self
    where
        F: FnOnce(LoggerConfig) -> LoggerConfig,
    {
        let config = PartialConfig::from(f(self.config.clone()));
        Self::with_sink(config, Arc::clone(&self.sink))
    }

    /// Persistent configuration; pending one-shots are not reflected.
    #[must_use]
    pub const fn config(&self) -> &LoggerConfig {
        &self.config
    }

    #[must_use]
    pub fn level(&self) -> &str {
        &self.config.level
    }

    #[must_use]
    pub const fn is_muted(&self) -> bool {
        self.config.muted
    }

    #[must_use]
    pub fn has_pending(&self, key: SettingKey) -> bool {
        self.pending.contains_key(&key)
    }

    /// # Errors
    /// Whatever the sink returned.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.sink.flush()
    }

    fn emit(
        &mut self,
        level: &str,
        msg: &str,
        args: &[&dyn Display],
        unprefixed: bool,
    ) -> Result<Emission, crate::Error> {
        let pending = std::mem::take(&mut self.pending);
        let config = if pending.is_empty() {
            Cow::Borrowed(&self.config)
        } else {
            let mut config = self.config.clone();
            for setting in pending.into_values() {
                setting.apply(&mut config);
            }
            Cow::Owned(config)
        };

        if config.muted {
            return Ok(Emission::Muted);
        }
        if !config.can_log(level) {
            return Ok(Emission::Gated);
        }

        let line = self.compose(&config, level, msg, args, unprefixed);
        self.sink.write(&line)?;
        Ok(Emission::Written)
    }

    fn compose(
        &self,
        config: &LoggerConfig,
        level: &str,
        msg: &str,
        args: &[&dyn Display],
        unprefixed: bool,
    ) -> Line {
        let source = if unprefixed {
            Cow::Borrowed(msg)
        } else {
            let mut source = config.prefix.resolve().into_owned();
            if config.use_level_prefixes {
                source.push_str(config.level_prefix(level));
            }
            source.push_str(msg);
            Cow::Owned(source)
        };

        let text = self.compiler.compile(&source, config.colors);
        let args = args.iter().map(ToString::to_string).collect();
        Line::new(text, args)
    }
}
