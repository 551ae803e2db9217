//! Property-based tests for logging configuration

use proptest::prelude::*;
use teamgen_core::tracing::{TracingConfig, TracingLevel, TracingOutput, span_names};

// ========== Strategies ==========

fn arb_tracing_level() -> impl Strategy<Value = TracingLevel> {
    prop_oneof![
        Just(TracingLevel::Error),
        Just(TracingLevel::Warn),
        Just(TracingLevel::Info),
        Just(TracingLevel::Debug),
        Just(TracingLevel::Trace),
    ]
}

fn arb_tracing_output() -> impl Strategy<Value = TracingOutput> {
    prop_oneof![Just(TracingOutput::Stdout), Just(TracingOutput::Stderr)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn tracing_config_builder_composable(
        level in arb_tracing_level(),
        output in arb_tracing_output(),
        thread_ids in any::<bool>(),
    ) {
        let config = TracingConfig::new()
            .with_level(level)
            .with_output(output.clone())
            .with_thread_ids(thread_ids);

        prop_assert_eq!(config.level, level);
        prop_assert_eq!(config.output, output);
        prop_assert_eq!(config.thread_ids, thread_ids);
        prop_assert!(config.filter.is_none());
    }

    #[test]
    fn tracing_level_roundtrip(level in arb_tracing_level()) {
        let parsed: Result<TracingLevel, _> = level.to_string().parse();
        prop_assert_eq!(parsed, Ok(level));

        let parsed_upper: Result<TracingLevel, _> = level.to_string().to_uppercase().parse();
        prop_assert_eq!(parsed_upper, Ok(level));
    }

    /// Verbosity never lowers the level and saturates at trace
    #[test]
    fn raised_level_is_monotonic(level in arb_tracing_level(), verbosity in 0u8..=255) {
        let raised = TracingLevel::raised_by(level, verbosity);
        prop_assert!(raised >= level);
        prop_assert!(TracingLevel::raised_by(level, verbosity.saturating_add(1)) >= raised);
        if verbosity >= 4 {
            prop_assert_eq!(raised, TracingLevel::Trace);
        }
    }

    #[test]
    fn default_directive_names_both_crates(level in arb_tracing_level()) {
        let directive = TracingConfig::new().with_level(level).default_directive();
        prop_assert_eq!(directive, format!("teamgen_core={level},teamgen={level}"));
    }
}

#[test]
fn span_names_follow_naming_convention() {
    for name in [
        span_names::BALANCE_EXECUTE,
        span_names::REVEAL_RUN,
        span_names::STORE_LOAD,
        span_names::STORE_SAVE,
        span_names::EXPORT_EXECUTE,
        span_names::CONFIG_LOAD,
        span_names::CONFIG_SAVE,
    ] {
        let (category, operation) = name.split_once('.').unwrap();
        assert!(!category.is_empty() && !operation.is_empty(), "{name}");
    }
}

#[test]
fn default_config_is_quiet() {
    let config = TracingConfig::default();
    assert_eq!(config.level, TracingLevel::Warn);
    assert_eq!(config.output, TracingOutput::Stderr);
    assert!(!config.thread_ids);
    assert!(config.filter.is_none());
}

#[test]
fn verbosity_steps_from_warn() {
    assert_eq!(TracingLevel::raised_by(TracingLevel::Warn, 0), TracingLevel::Warn);
    assert_eq!(TracingLevel::raised_by(TracingLevel::Warn, 1), TracingLevel::Info);
    assert_eq!(TracingLevel::raised_by(TracingLevel::Warn, 2), TracingLevel::Debug);
    assert_eq!(TracingLevel::raised_by(TracingLevel::Warn, 3), TracingLevel::Trace);
}
