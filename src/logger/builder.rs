//! Stepwise construction. Everything set here lands in a [`PartialConfig`], so a built
//! logger is identical to `Logger::with_sink(config, sink)`.

use super::Logger;
use crate::config::{MergeStrategy, PartialConfig, Prefix};
use crate::fmt::{Context, custom};
use crate::output::{ConsoleSink, Sink};
use std::sync::Arc;

#[derive(Default)]
pub struct LoggerBuilder {
    config: PartialConfig,
    sink: Option<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers a whole partial config (e.g. one loaded from TOML) over what is set so far.
    #[must_use]
    pub fn config(mut self, config: PartialConfig) -> Self {
        self.config.merge(config, MergeStrategy::OverrideWins);
        self
    }

    #[must_use]
    pub fn level(mut self, level: impl AsRef<str>) -> Self {
        self.config = self.config.level(level);
        self
    }

    /// Adds a level or re-scores a built-in one. Each level gets an alias on the built logger.
    #[must_use]
    pub fn level_score(mut self, name: impl Into<String>, score: i64) -> Self {
        self.config = self.config.level_score(name, score);
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<Prefix>) -> Self {
        self.config = self.config.prefix(prefix);
        self
    }

    /// Evaluated on every emission, e.g. for timestamps.
    #[must_use]
    pub fn prefix_fn<F>(mut self, f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.config = self.config.prefix(Prefix::computed(f));
        self
    }

    #[must_use]
    pub fn level_prefix(mut self, name: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.config = self.config.level_prefix(name, prefix);
        self
    }

    #[must_use]
    pub fn use_level_prefixes(mut self, enabled: bool) -> Self {
        self.config = self.config.use_level_prefixes(enabled);
        self
    }

    /// Registers `{name:...}` as a transform of its compiled content.
    #[must_use]
    pub fn custom<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str, &Context<'_>) -> String + Send + Sync + 'static,
    {
        self.config = self.config.custom(name, custom(f));
        self
    }

    #[must_use]
    pub fn muted(mut self, muted: bool) -> Self {
        self.config = self.config.muted(muted);
        self
    }

    /// Piped output and CI logs usually want this off.
    #[must_use]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.config = self.config.colors(enabled);
        self
    }

    /// Named color for markup, as `#rrggbb`.
    #[must_use]
    pub fn color(mut self, name: impl Into<String>, hex: impl Into<String>) -> Self {
        self.config = self.config.color(name, hex);
        self
    }

    /// Defaults to stdout.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// For a sink already shared with other loggers.
    #[must_use]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let sink = self
            .sink
            .unwrap_or_else(|| Arc::new(ConsoleSink::new()) as Arc<dyn Sink>);
        Logger::with_sink(self.config, sink)
    }
}
