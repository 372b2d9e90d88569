//! Tests for markup compilation.

use prefixlog::fmt::{Color, Compiler, Style, custom, strip_ansi};
use prefixlog::{Logger, MemorySink};
use std::collections::HashMap;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

#[test]
fn plain_text_passes_through() {
    let compiler = Compiler::new();
    assert_eq!(compiler.compile("no markup here", true), "no markup here");
}

#[test]
fn named_color_span() {
    let compiler = Compiler::new();
    assert_eq!(
        compiler.compile("{red:x}", true),
        format!("{}x{RESET}", Color::red().fg_ansi())
    );
    assert_eq!(compiler.compile("a {red:x} b", false), "a x b");
}

#[test]
fn nested_span_restores_parent_style() {
    let compiler = Compiler::new();
    let red = Color::red().fg_ansi();
    assert_eq!(
        compiler.compile("{red:a {bold:b} c}", true),
        format!("{red}a {BOLD}b{RESET}{red} c{RESET}")
    );
}

#[test]
fn unknown_name_renders_content() {
    let compiler = Compiler::new();
    assert_eq!(compiler.compile("{nope:text}", true), "text");
}

#[test]
fn unbalanced_braces_stay_literal() {
    let compiler = Compiler::new();
    assert_eq!(compiler.compile("{red:oops", true), "{red:oops");
    assert_eq!(compiler.compile("a } b", true), "a } b");
    assert_eq!(compiler.compile("{not a span}", true), "{not a span}");
    assert_eq!(compiler.compile("json: {}", true), "json: {}");
}

fn nested(name: &str, depth: usize) -> String {
    format!("{}x{}", format!("{{{name}:").repeat(depth), "}".repeat(depth))
}

#[test]
fn deeply_nested_spans_compile() {
    let compiler = Compiler::new();
    assert_eq!(compiler.compile(&nested("bold", 100_000), false), "x");
    assert_eq!(compiler.compile(&nested("nope", 100_000), true), "x");

    let depth = 2_500;
    let styled = compiler.compile(&nested("bold", depth), true);
    assert!(styled.starts_with(&BOLD.repeat(depth)));
    assert_eq!(styled.matches(RESET).count(), depth);
    assert_eq!(strip_ansi(&styled), "x");
}

#[test]
fn deeply_nested_transforms_compile() {
    let compiler = Compiler::new().custom("id", custom(|s, _| s.to_string()));
    assert_eq!(compiler.compile(&nested("id", 50_000), true), "x");
}

#[test]
fn deeply_nested_unclosed_spans_stay_literal() {
    let text = format!("{}x", "{bold:".repeat(100_000));
    assert_eq!(Compiler::new().compile(&text, true), text);
}

#[test]
fn hex_and_palette_colors() {
    let compiler = Compiler::new().color("Accent", Color::new(1, 2, 3));
    assert_eq!(
        compiler.compile("{#ff0000:x}", true),
        format!("\x1b[38;2;255;0;0mx{RESET}")
    );
    assert_eq!(
        compiler.compile("{accent:x}", true),
        format!("\x1b[38;2;1;2;3mx{RESET}")
    );
}

#[test]
fn style_resolution_order() {
    let palette: HashMap<String, Color> = Color::builtin_palette();
    assert_eq!(Style::resolve("b", &palette), Some(Style::Bold));
    assert_eq!(Style::resolve("UNDERLINE", &palette), Some(Style::Underline));
    assert_eq!(Style::resolve("cyan", &palette), Some(Style::Fg(Color::cyan())));
    assert_eq!(Style::resolve("#zzzzzz", &palette), None);
    assert_eq!(Style::resolve("shane", &palette), None);
}

#[test]
fn custom_transform_receives_compiled_content() {
    let compiler = Compiler::new().custom("wrap", custom(|text, _| format!("<{text}>")));
    assert_eq!(compiler.compile("{wrap:{bold:x}}", false), "<x>");
}

#[test]
fn custom_transform_can_compile_recursively() {
    let compiler = Compiler::new().custom(
        "shane",
        custom(|text, ctx| ctx.compile(&format!("{{red:kittie-}}{text}"))),
    );
    assert_eq!(compiler.compile("{shane:cat}", false), "kittie-cat");

    let styled = compiler.compile("{shane:cat}", true);
    assert!(styled.starts_with(&Color::red().fg_ansi()));
    assert_eq!(strip_ansi(&styled), "kittie-cat");
}

#[test]
fn custom_transform_inside_style_keeps_parent_style() {
    let compiler = Compiler::new().custom("up", custom(|text, _| text.to_uppercase()));
    assert_eq!(
        compiler.compile("{bold:a {up:b} c}", true),
        format!("{BOLD}a B{BOLD} c{RESET}")
    );
}

#[test]
fn custom_transform_shadows_style() {
    let compiler = Compiler::new().custom("red", custom(|text, _| format!("!{text}!")));
    assert_eq!(compiler.compile("{red:x}", true), "!x!");
}

#[test]
fn context_reports_color_mode() {
    let compiler = Compiler::new().custom(
        "mode",
        custom(|_, ctx| (if ctx.ansi() { "ansi" } else { "plain" }).to_string()),
    );
    assert_eq!(compiler.compile("{mode:-}", true), "ansi");
    assert_eq!(compiler.compile("{mode:-}", false), "plain");
}

#[test]
fn strip_ansi_removes_sgr_only() {
    let text = format!("{BOLD}a{RESET} [b] {}c{RESET}", Color::green().fg_ansi());
    assert_eq!(strip_ansi(&text), "a [b] c");
}

#[test]
fn logger_custom_methods() {
    let sink = MemorySink::new();
    let mut logger = Logger::builder()
        .prefix("{blue:[}{magenta:logger}{cyan:] }")
        .custom("shane", |out, _| format!("kittie-{out}"))
        .custom("styled", |out, ctx| ctx.compile(&format!("{{red:kittie-}}{out}")))
        .sink(sink.clone())
        .build();

    logger.info("{shane:cat}").info("{styled:cat}");
    let texts: Vec<String> = sink.texts().iter().map(|t| strip_ansi(t)).collect();
    assert_eq!(texts, ["[logger] kittie-cat", "[logger] kittie-cat"]);
}

#[test]
fn logger_palette_from_config() {
    let sink = MemorySink::new();
    let mut logger = Logger::builder()
        .color("accent", "#010203")
        .color("broken", "not-a-color")
        .sink(sink.clone())
        .build();

    logger.info("{accent:a}{broken:b}");
    assert_eq!(sink.texts(), [format!("\x1b[38;2;1;2;3ma{RESET}b")]);
}
