//! The default sink: one rendered line per emission on stdout or stderr.

use super::{Line, Sink};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

/// Unbuffered beyond what std does; every line is written in a single `writeln!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    stream: Stream,
}

impl ConsoleSink {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    /// Keeps diagnostics out of piped stdout.
    #[must_use]
    pub const fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }

    #[must_use]
    pub const fn stream(&self) -> Stream {
        self.stream
    }
}

impl Sink for ConsoleSink {
    fn write(&self, line: &Line) -> Result<(), crate::Error> {
        let rendered = line.render();
        match self.stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{rendered}")?,
            Stream::Stderr => writeln!(io::stderr().lock(), "{rendered}")?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}
