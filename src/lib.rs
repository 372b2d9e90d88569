//! `prefixlog` - leveled console logging with styled prefixes.
//!
//! - Level gating against a configurable score table
//! - A base prefix (static or computed) and optional per-level prefixes
//! - `{color:text}` markup with user-registered transforms
//! - One-shot option overrides for the next message
//! - Cheap derived loggers that extend a parent's configuration without touching it
//!
//! # Example
//!
//! ```
//! use prefixlog::{Logger, MemorySink, PartialConfig};
//!
//! let sink = MemorySink::new();
//! let mut logger = Logger::builder()
//!     .prefix("[app] ")
//!     .level_prefix("info", "INFO ")
//!     .colors(false)
//!     .sink(sink.clone())
//!     .build();
//!
//! logger.info("started");
//! logger.set_level_prefixes(true).info("ready");
//!
//! let mut db = logger.clone_with(&PartialConfig::new().prefix("[app:db] "));
//! db.trace("dropped: trace scores below info");
//! db.error("connection lost");
//!
//! assert_eq!(
//!     sink.texts(),
//!     ["[app] started", "[app] INFO ready", "[app:db] [error] connection lost"]
//! );
//! ```

pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;

pub use config::{LoggerConfig, MergeStrategy, PartialConfig, Prefix};
pub use error::Error;
pub use fmt::{Color, Compiler, Context, CustomFn, strip_ansi};
pub use level::{Level, ParseLevelError};
pub use logger::{Alias, Emission, Logger, LoggerBuilder, Setting, SettingKey};
pub use output::{ConsoleSink, Line, MemorySink, Sink};
