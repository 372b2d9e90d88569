//! prefixlog's own diagnostics (config includes, suspicious level changes), printed
//! through a `Logger` like everything else.
//!
//! Silent until [`init`] runs: a library must not write to the console unasked. `OnceLock`
//! means only the first initializer takes effect.

use crate::level::Level;
use crate::logger::Logger;
use crate::output::{ConsoleSink, Sink};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

static INTERNAL_LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const PREFIX: &str = "{magenta:[prefixlog]} ";

/// Enables diagnostics at `level` and above, on stderr.
pub fn init(level: Level) {
    init_with_sink(level, Arc::new(ConsoleSink::stderr()));
}

/// Enables diagnostics into `sink`. Later calls are no-ops.
pub fn init_with_sink(level: Level, sink: Arc<dyn Sink>) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| {
        Mutex::new(
            Logger::builder()
                .prefix(PREFIX)
                .level(level)
                .shared_sink(sink)
                .build(),
        )
    });
    if !was_init {
        debug("INTERNAL", "Internal logger ready");
    }
}

/// Pre-init calls silently vanish. `msg` goes out as an argument so markup in it stays literal.
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        let mut logger = logger.lock().unwrap_or_else(PoisonError::into_inner);
        logger.log_args(level, &format!("{{bold:{scope}}} %s"), &[&msg]);
    }
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}
