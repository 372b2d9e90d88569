//! Where composed lines go. The logger hands every emitted line to exactly one [`Sink`];
//! printf-style placeholders are the sink's business, not the logger's.

mod console;
mod memory;

pub use console::{ConsoleSink, Stream};
pub use memory::MemorySink;

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `%s`, `%d`, `%i`, `%f`, `%j`, `%o`, `%O`, `%c` and the `%%` escape.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[sdifjoOc%]").expect("Invalid placeholder regex"));

/// One emission: the compiled text and the caller's extra arguments, untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub args: Vec<String>,
}

impl Line {
    #[must_use]
    pub fn new(text: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            text: text.into(),
            args,
        }
    }

    /// Substitutes placeholders in `text` from `args`, then appends leftover args separated
    /// by spaces. Without args the text is returned verbatim, `%%` included.
    #[must_use]
    pub fn render(&self) -> String {
        if self.args.is_empty() {
            return self.text.clone();
        }

        let mut args = self.args.iter();
        let mut out = PLACEHOLDER_REGEX
            .replace_all(&self.text, |caps: &Captures<'_>| {
                let spec = &caps[0];
                if spec == "%%" {
                    return "%".to_string();
                }
                args.next()
                    .map_or_else(|| spec.to_string(), |arg| substitute(spec, arg))
            })
            .into_owned();

        for arg in args {
            out.push(' ');
            out.push_str(arg);
        }
        out
    }
}

fn substitute(spec: &str, arg: &str) -> String {
    match spec {
        "%d" | "%i" => arg.trim().parse::<f64>().map_or_else(
            |_| "NaN".to_string(),
            |n| {
                if spec == "%i" {
                    n.trunc().to_string()
                } else {
                    n.to_string()
                }
            },
        ),
        "%f" => arg
            .trim()
            .parse::<f64>()
            .map_or_else(|_| "NaN".to_string(), |n| n.to_string()),
        "%c" => String::new(),
        _ => arg.to_string(),
    }
}

/// `Send + Sync` so a logger, and every clone sharing its sink, can move across threads.
pub trait Sink: Send + Sync {
    /// Writes one line.
    ///
    /// # Errors
    /// I/O errors from the underlying device, or `Error::Sink` for sink-specific failures.
    fn write(&self, line: &Line) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying device.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
