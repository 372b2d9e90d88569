//! Per-level shorthand for levels that have no dedicated method, e.g. custom ones.

use super::Logger;
use std::fmt::Display;

/// Borrowed from [`Logger::alias`]; emitting consumes it and hands the logger back for chaining.
pub struct Alias<'a> {
    pub(super) logger: &'a mut Logger,
    pub(super) level: String,
}

impl<'a> Alias<'a> {
    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Same as `logger.log(level, msg)`.
    pub fn log(self, msg: &str) -> &'a mut Logger {
        let Self { logger, level } = self;
        logger.log(&level, msg)
    }

    /// Same as `logger.log_args(level, msg, args)`.
    pub fn log_args(self, msg: &str, args: &[&dyn Display]) -> &'a mut Logger {
        let Self { logger, level } = self;
        logger.log_args(&level, msg, args)
    }
}
