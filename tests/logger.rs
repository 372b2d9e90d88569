//! Tests for gating, prefix composition and the emission methods.

use prefixlog::{Emission, Level, Logger, MemorySink, PartialConfig, Prefix, strip_ansi};

fn app_config() -> PartialConfig {
    PartialConfig::new()
        .prefix("[app] ")
        .level_prefix("info", "INFO ")
        .colors(false)
}

fn logger_with(config: PartialConfig) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::builder().config(config).sink(sink.clone()).build();
    (logger, sink)
}

#[test]
fn base_prefix_without_level_prefix() {
    let (mut logger, sink) = logger_with(app_config());
    logger.log("info", "hi");
    assert_eq!(sink.texts(), ["[app] hi"]);
}

#[test]
fn level_prefix_after_base_prefix() {
    let (mut logger, sink) = logger_with(app_config());
    logger.set_level_prefixes(true).log("info", "hi");
    assert_eq!(sink.texts(), ["[app] INFO hi"]);
}

#[test]
fn gating_is_score_at_or_above_minimum() {
    let (mut logger, sink) = logger_with(app_config());
    logger.set_level("warn");
    logger.log("info", "info scores 400");
    logger.log("warn", "warn scores 300");
    logger.log("trace", "trace scores 100");
    assert_eq!(sink.texts(), ["[app] info scores 400", "[app] warn scores 300"]);
}

#[test]
fn lower_scored_level_is_dropped() {
    let (mut logger, sink) = logger_with(app_config());
    logger.log("warn", "Not found");
    assert!(sink.is_empty());

    logger.set_level("warn").log("warn", "Not found");
    logger.set_level("error").log("info", "Welcome!");
    assert_eq!(sink.texts(), ["[app] Not found"]);
}

#[test]
fn every_pair_of_levels_gates_by_score() {
    for min in Level::all() {
        for level in Level::all() {
            let (mut logger, sink) = logger_with(app_config().level(min));
            let emission = logger.try_log(level, "x", &[]).unwrap();
            let expected = level.default_score() >= min.default_score();
            assert_eq!(emission.is_written(), expected, "{level} at minimum {min}");
            assert_eq!(sink.len(), usize::from(expected));
        }
    }
}

#[test]
fn unknown_levels_fail_closed() {
    let (mut logger, sink) = logger_with(app_config());
    assert!(!logger.can_log("verbose"));
    assert_eq!(
        logger.try_log("verbose", "x", &[]).unwrap(),
        Emission::Gated
    );

    logger.set_level("nonsense");
    assert!(!logger.can_log("error"));
    logger.error("self-muted");
    assert!(sink.is_empty());

    logger.set_level("info").error("back");
    assert_eq!(sink.texts(), ["[app] back"]);
}

#[test]
fn unprefixed_skips_both_prefixes() {
    let (mut logger, sink) = logger_with(app_config());
    logger.unprefixed("info", "<script></script>");
    logger.set_level_prefixes(true);
    logger.unprefixed("info", "<script></script>");
    assert_eq!(sink.texts(), ["<script></script>", "<script></script>"]);
}

#[test]
fn unprefixed_still_compiles_markup() {
    let (mut logger, sink) = logger_with(app_config());
    logger.unprefixed("info", "{bold:plain}");
    assert_eq!(sink.texts(), ["plain"]);
}

#[test]
fn unprefixed_is_gated() {
    let (mut logger, sink) = logger_with(app_config());
    assert_eq!(
        logger.try_unprefixed("trace", "x", &[]).unwrap(),
        Emission::Gated
    );
    assert!(sink.is_empty());
}

#[test]
fn missing_level_prefix_renders_empty() {
    let (mut logger, sink) = logger_with(
        app_config()
            .level_score("notice", 450)
            .use_level_prefixes(true),
    );
    logger.log("notice", "no prefix entry");
    assert_eq!(sink.texts(), ["[app] no prefix entry"]);
}

#[test]
fn extra_args_pass_through_untouched() {
    let (mut logger, sink) = logger_with(app_config().use_level_prefixes(true));
    let url = "http://example.com/";
    logger.log_args("info", "<script src=\"%s%s\"></script>", &[&url, &"js.js"]);

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "[app] INFO <script src=\"%s%s\"></script>");
    assert_eq!(lines[0].args, ["http://example.com/", "js.js"]);
    assert_eq!(
        lines[0].render(),
        "[app] INFO <script src=\"http://example.com/js.js\"></script>"
    );
}

#[test]
fn aliases_chain() {
    let (mut logger, sink) = logger_with(app_config());
    logger
        .set_level_prefixes(true)
        .info("<script></script>")
        .set_level_prefixes(false)
        .info("<script></script>");
    assert_eq!(
        sink.texts(),
        ["[app] INFO <script></script>", "[app] <script></script>"]
    );
}

#[test]
fn alias_table_follows_levels() {
    let (mut logger, sink) = logger_with(app_config().level_score("notice", 450));
    assert_eq!(
        logger.aliases().collect::<Vec<_>>(),
        ["trace", "debug", "warn", "info", "notice", "error"]
    );
    assert!(logger.alias("verbose").is_none());

    logger
        .alias("notice")
        .unwrap()
        .log("custom level")
        .info("built-in level");
    assert_eq!(sink.texts(), ["[app] custom level", "[app] built-in level"]);
}

#[test]
fn mute_and_unmute() {
    let (mut logger, sink) = logger_with(app_config());
    logger.mute(true);
    assert!(logger.is_muted());
    assert_eq!(logger.try_log("error", "x", &[]).unwrap(), Emission::Muted);

    logger.mute(false).info("<script></script>");
    assert_eq!(sink.texts(), ["[app] <script></script>"]);
}

#[test]
fn reset_restores_level_and_level_prefixes_only() {
    let (mut logger, _sink) = logger_with(app_config());
    logger
        .set_level("error")
        .set_level_prefixes(true)
        .set_prefix("X ")
        .mute(true)
        .reset();

    assert_eq!(logger.level(), "info");
    assert!(!logger.config().use_level_prefixes);
    assert!(logger.is_muted());
    assert!(matches!(&logger.config().prefix, Prefix::Static(p) if p == "X "));
}

#[test]
fn computed_prefix_runs_per_emission() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let counter = Arc::new(AtomicUsize::new(0));
    let sink = MemorySink::new();
    let mut logger = Logger::builder()
        .prefix_fn({
            let counter = Arc::clone(&counter);
            move || format!("#{} ", counter.fetch_add(1, Ordering::SeqCst))
        })
        .sink(sink.clone())
        .build();

    logger.info("a").trace("gated").info("b");
    assert_eq!(sink.texts(), ["#0 a", "#1 b"]);
}

#[test]
fn set_prefix_replaces_static_and_computed() {
    let (mut logger, sink) = logger_with(app_config());
    logger.set_prefix(Prefix::computed(|| "PREFIX".to_string()));
    logger.info("<script></script>");
    logger.set_prefix("SHANE");
    logger.info("<script></script>");
    assert_eq!(
        sink.texts(),
        ["PREFIX<script></script>", "SHANE<script></script>"]
    );
}

#[test]
fn styled_prefix_with_colors() {
    let sink = MemorySink::new();
    let mut logger = Logger::builder()
        .prefix("{blue:[}{magenta:logger}{cyan:] }")
        .use_level_prefixes(true)
        .sink(sink.clone())
        .build();

    logger.error("boom");
    let text = &sink.texts()[0];
    assert!(text.contains('\x1b'));
    assert_eq!(strip_ansi(text), "[logger] [error] boom");
}

#[test]
fn construction_paths_agree() {
    let config = app_config().level("debug").use_level_prefixes(true);
    let a = Logger::new(config.clone());
    let b = Logger::from(config.clone());
    let c = Logger::builder().config(config).build();

    for logger in [&a, &b, &c] {
        assert_eq!(logger.level(), "debug");
        assert!(logger.config().use_level_prefixes);
        assert_eq!(logger.config().levels.len(), 5);
    }
}

#[test]
fn default_logger_uses_defaults() {
    let logger = Logger::default();
    assert_eq!(logger.level(), "info");
    assert!(logger.can_log("error"));
    assert!(!logger.can_log("warn"));
}
