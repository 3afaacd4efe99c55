//! Tests for configuration validation.
//!
//! These tests verify that invalid configuration values are rejected,
//! either by the builder methods with a panic message or by the
//! comparison itself before any workload runs.

use std::time::Duration;

use bitgems::{CompareError, Config, SpeedTest};

// =============================================================================
// TRIAL COUNT VALIDATION
// =============================================================================

#[test]
fn trials_zero_rejected_at_compare() {
    let result = SpeedTest::new().trials(0).compare(|| (), || ());
    assert!(matches!(result, Err(CompareError::InvalidTrialCount { trials: 0 })));
}

#[test]
fn trials_one_valid() {
    let test = SpeedTest::new().trials(1);
    assert_eq!(test.config().trials, 1);
    assert!(test.config().validate().is_ok());
}

#[test]
fn trials_default_is_ten() {
    assert_eq!(SpeedTest::new().config().trials, 10);
    assert_eq!(bitgems::DEFAULT_TRIALS, 10);
}

#[test]
fn trials_large_valid() {
    let test = SpeedTest::new().trials(1_000_000);
    assert_eq!(test.config().trials, 1_000_000);
}

// =============================================================================
// BUDGET VALIDATION
// =============================================================================

#[test]
#[should_panic(expected = "phase_budget must be positive")]
fn budget_zero_panics() {
    let _ = SpeedTest::new().phase_budget(Duration::ZERO);
}

#[test]
fn budget_positive_valid() {
    let test = SpeedTest::new().phase_budget(Duration::from_millis(1));
    assert_eq!(test.config().phase_budget, Some(Duration::from_millis(1)));
}

#[test]
fn pause_longer_than_budget_rejected() {
    let config = Config::new()
        .trial_pause(Duration::from_millis(10))
        .phase_budget(Duration::from_millis(10));
    assert_eq!(
        config.validate(),
        Err("trial_pause must be shorter than phase_budget".to_string())
    );

    let result = SpeedTest::with_config(config).compare(|| (), || ());
    assert!(matches!(result, Err(CompareError::InvalidConfig(_))));
}

// =============================================================================
// PRESETS
// =============================================================================

#[test]
fn all_presets_validate() {
    for config in [
        Config::default(),
        Config::standard(),
        Config::quick(),
        Config::browser_like(),
    ] {
        assert!(config.validate().is_ok(), "{config:?}");
    }
}

#[test]
fn browser_preset_rests_between_trials() {
    assert_eq!(Config::browser_like().trial_pause, bitgems::BROWSER_REST);
}
