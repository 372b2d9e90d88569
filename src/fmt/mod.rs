//! Markup compilation: colors, styles, custom transforms, and ANSI stripping.

mod color;
pub mod style;
mod template;

pub use color::Color;
pub use style::{Style, strip_ansi};
pub use template::{Compiler, Context, CustomFn, custom};
