// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Validates GYMFIT_* overrides, fallback to defaults, and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFit

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use gymfit_core::config::{
    AppConfig, BmiConfig, PlacesConfig, SchedulerConfig, TransportModeConfig, TravelConfig,
};
use gymfit_core::errors::ErrorCode;
use serial_test::serial;

const SCHEDULER_VARS: [&str; 7] = [
    "GYMFIT_NUDGE_PERIOD_MS",
    "GYMFIT_NUDGE_PROBABILITY",
    "GYMFIT_TOAST_MS",
    "GYMFIT_LONG_TOAST_MS",
    "GYMFIT_GREETING_DELAY_MS",
    "GYMFIT_HISTORY_CAP",
    "GYMFIT_NUDGE_TICKER",
];

/// Helper: Remove every scheduler override from the environment
fn clear_scheduler_vars() {
    for var in SCHEDULER_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_overrides() {
    clear_scheduler_vars();

    let config = SchedulerConfig::from_env();
    assert_eq!(config.tick_period_ms, 120_000);
    assert!((config.tick_probability - 0.4).abs() < f64::EPSILON);
    assert_eq!(config.toast_duration_ms, 4000);
    assert_eq!(config.long_toast_duration_ms, 5000);
    assert_eq!(config.greeting_delay_ms, 2000);
    assert_eq!(config.history_cap, 50);
    assert!(config.enable_ticker);
}

#[test]
#[serial]
fn test_env_overrides_applied() {
    clear_scheduler_vars();
    env::set_var("GYMFIT_NUDGE_PERIOD_MS", "5000");
    env::set_var("GYMFIT_NUDGE_PROBABILITY", "0.9");
    env::set_var("GYMFIT_TOAST_MS", "1500");
    env::set_var("GYMFIT_HISTORY_CAP", "10");
    env::set_var("GYMFIT_NUDGE_TICKER", "false");

    let config = SchedulerConfig::from_env();
    assert_eq!(config.tick_period_ms, 5000);
    assert!((config.tick_probability - 0.9).abs() < f64::EPSILON);
    assert_eq!(config.toast_duration_ms, 1500);
    assert_eq!(config.history_cap, 10);
    assert!(!config.enable_ticker);

    // Untouched values keep their defaults
    assert_eq!(config.long_toast_duration_ms, 5000);

    clear_scheduler_vars();
}

#[test]
#[serial]
fn test_unparseable_override_keeps_default() {
    clear_scheduler_vars();
    env::set_var("GYMFIT_NUDGE_PERIOD_MS", "often");

    let config = SchedulerConfig::from_env();
    assert_eq!(config.tick_period_ms, 120_000);

    clear_scheduler_vars();
}

#[test]
#[serial]
fn test_out_of_range_probability_rejected() {
    clear_scheduler_vars();
    env::set_var("GYMFIT_NUDGE_PROBABILITY", "1.5");

    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);

    clear_scheduler_vars();
}

#[test]
#[serial]
fn test_app_config_from_clean_env_validates() {
    clear_scheduler_vars();

    let config = AppConfig::from_env().unwrap();
    assert!(config.validate().is_ok());
}

#[test]
fn test_bmi_thresholds_must_ascend() {
    let bad = BmiConfig {
        underweight_max: 30.0,
        ..BmiConfig::default()
    };
    assert!(bad.validate().is_err());
    assert!(BmiConfig::default().validate().is_ok());
}

#[test]
fn test_travel_speeds_must_be_positive() {
    let bad = TravelConfig {
        bike: TransportModeConfig {
            speed_kmh: 0.0,
            cost_per_km: 0.0,
            calories_per_5km: 30.0,
        },
        ..TravelConfig::default()
    };
    assert!(bad.validate().is_err());
    assert!(TravelConfig::default().validate().is_ok());
}

#[test]
fn test_travel_fallback_range_must_be_nonempty() {
    let bad = TravelConfig {
        fallback_min_km: 20,
        fallback_max_km: 10,
        ..TravelConfig::default()
    };
    assert!(bad.validate().is_err());
}

#[test]
fn test_places_open_probability_bounds() {
    let bad = PlacesConfig {
        open_probability: 1.2,
        ..PlacesConfig::default()
    };
    assert!(bad.validate().is_err());
    assert!(PlacesConfig::default().validate().is_ok());
}
