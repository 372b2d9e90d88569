//! Compiles `{name:content}` markup into terminal text.
//!
//! `name` is looked up as a custom transform first, then as a style. Spans nest, and a
//! closing span restores whatever styles its parents had open. Unknown names render their
//! content unstyled; braces that never close are kept as literal text.

use super::Color;
use super::style::Style;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A named transform usable as `{name:content}`. Receives the already-compiled content.
pub type CustomFn = Arc<dyn Fn(&str, &Context<'_>) -> String + Send + Sync>;

/// Boxes a closure as a [`CustomFn`].
pub fn custom<F>(f: F) -> CustomFn
where
    F: Fn(&str, &Context<'_>) -> String + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Handed to custom transforms so they can compile markup of their own.
pub struct Context<'a> {
    compiler: &'a Compiler,
    ansi: bool,
}

impl Context<'_> {
    /// Compiles `text` with the same transforms, palette and color mode as the caller.
    #[must_use]
    pub fn compile(&self, text: &str) -> String {
        self.compiler.compile(text, self.ansi)
    }

    /// Whether the surrounding compilation emits ANSI escapes.
    #[must_use]
    pub const fn ansi(&self) -> bool {
        self.ansi
    }
}

/// Immutable once built; cheap to clone because transforms are shared `Arc`s.
#[derive(Clone)]
pub struct Compiler {
    custom: HashMap<String, CustomFn>,
    palette: HashMap<String, Color>,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut custom: Vec<&str> = self.custom.keys().map(String::as_str).collect();
        custom.sort_unstable();
        f.debug_struct("Compiler")
            .field("custom", &custom)
            .field("palette", &self.palette.len())
            .finish()
    }
}

impl Compiler {
    /// Built-in palette, no transforms.
    #[must_use]
    pub fn new() -> Self {
        Self {
            custom: HashMap::new(),
            palette: Color::builtin_palette(),
        }
    }

    /// Registers a transform. Transforms shadow styles of the same name.
    #[must_use]
    pub fn custom(mut self, name: impl Into<String>, f: CustomFn) -> Self {
        self.custom.insert(name.into(), f);
        self
    }

    /// Adds or re-maps a named color. Names are case-insensitive.
    #[must_use]
    pub fn color(mut self, name: &str, color: Color) -> Self {
        self.palette.insert(name.to_lowercase(), color);
        self
    }

    /// With `ansi == false` the output carries no escapes; transforms still run.
    ///
    /// Runs in one pass without recursion, so nesting depth is bounded only by memory.
    #[must_use]
    pub fn compile(&self, text: &str, ansi: bool) -> String {
        let pairs = match_braces(text);
        let mut state = Render {
            out: String::with_capacity(text.len()),
            suspended: Vec::new(),
            open: Vec::new(),
        };
        let mut frames: Vec<Frame<'_>> = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let end = frames.last().map_or(text.len(), |f| f.end);
            let next = text[pos..end].find('{').map_or(end, |i| pos + i);
            state.out.push_str(&text[pos..next]);
            pos = next;

            if pos == end {
                if let Some(frame) = frames.pop() {
                    self.close(frame, ansi, &mut state);
                    pos += 1;
                }
                continue;
            }

            let span = pairs
                .get(&pos)
                .and_then(|&close| span_name(&text[pos + 1..close]).map(|name| (name, close)));
            let Some((name, close)) = span else {
                state.out.push('{');
                pos += 1;
                continue;
            };

            let kind = self.open(name, ansi, &mut state);
            frames.push(Frame { end: close, kind });
            pos += name.len() + 2;
        }

        state.out
    }

    /// `name` is looked up as a transform first, then as a style.
    fn open(&self, name: &str, ansi: bool, state: &mut Render) -> Kind<'_> {
        if let Some(f) = self.custom.get(name) {
            state.suspended.push(std::mem::take(&mut state.out));
            return Kind::Custom(f);
        }

        let style = if ansi {
            Style::resolve(name, &self.palette)
        } else {
            None
        };
        match style {
            Some(style) => {
                let code = style.sgr();
                state.out.push_str(&code);
                state.open.push(code);
                Kind::Style
            }
            None => Kind::Plain,
        }
    }

    fn close(&self, frame: Frame<'_>, ansi: bool, state: &mut Render) {
        match frame.kind {
            Kind::Custom(f) => {
                let parent = state.suspended.pop().unwrap_or_default();
                let inner = std::mem::replace(&mut state.out, parent);
                let ctx = Context {
                    compiler: self,
                    ansi,
                };
                state.out.push_str(&f(&inner, &ctx));
                // A nested compile may have reset the parents' styles.
                if ansi {
                    state.restore();
                }
            }
            Kind::Style => {
                state.open.pop();
                state.out.push_str(Color::RESET);
                state.restore();
            }
            Kind::Plain => {}
        }
    }
}

/// Output being built, plus what enclosing spans need to resume.
struct Render {
    out: String,
    /// Parent output set aside while a transform collects its content.
    suspended: Vec<String>,
    /// Escape codes of the styles currently open, outermost first.
    open: Vec<String>,
}

impl Render {
    fn restore(&mut self) {
        for code in &self.open {
            self.out.push_str(code);
        }
    }
}

/// A span whose content is being rendered.
struct Frame<'a> {
    /// Byte offset of the closing brace.
    end: usize,
    kind: Kind<'a>,
}

enum Kind<'a> {
    Custom(&'a CustomFn),
    Style,
    /// Unknown name, or a style with ANSI off.
    Plain,
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'#' | b'.')
}

/// Opening brace offset to its balancing closing brace. Unbalanced braces are absent.
fn match_braces(text: &str) -> HashMap<usize, usize> {
    let mut pairs = HashMap::new();
    let mut stack = Vec::new();
    for (i, b) in text.bytes().enumerate() {
        match b {
            b'{' => stack.push(i),
            b'}' => {
                if let Some(open) = stack.pop() {
                    pairs.insert(open, i);
                }
            }
            _ => {}
        }
    }
    pairs
}

/// `inner` is the text between a pair of braces. Returns the name if it starts with `name:`.
fn span_name(inner: &str) -> Option<&str> {
    let name_len = inner.bytes().take_while(|&b| is_name_byte(b)).count();
    (name_len > 0 && inner.as_bytes().get(name_len) == Some(&b':')).then(|| &inner[..name_len])
}
