// ABOUTME: Integration tests for environment-driven report and intelligence configuration
// ABOUTME: Serialised because each test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use carewatch_reports::config::environment::{
    DEFAULT_DAYS_VAR, FAMILY_AGGREGATION_VAR, RANDOM_SEED_VAR,
};
use carewatch_reports::config::intelligence::ConfigError;
use carewatch_reports::config::{CareIntelligenceConfig, ReportConfig};
use carewatch_reports::models::{FamilyAggregation, HealthStatus};
use serial_test::serial;
use std::env;

const REPORT_VARS: [&str; 3] = [DEFAULT_DAYS_VAR, FAMILY_AGGREGATION_VAR, RANDOM_SEED_VAR];
const INTELLIGENCE_VARS: [&str; 3] = [
    "CAREWATCH_HR_ELEVATED_BPM",
    "CAREWATCH_LOW_STEPS_THRESHOLD",
    "CAREWATCH_TREND_WINDOW_DAYS",
];

fn clear_vars() {
    for name in REPORT_VARS.iter().chain(INTELLIGENCE_VARS.iter()) {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_report_config_defaults_from_empty_environment() {
    common::init_test_logging();
    clear_vars();

    let config = ReportConfig::from_env().unwrap();
    assert_eq!(config.default_days, 30);
    assert_eq!(config.family_aggregation, FamilyAggregation::Synthetic);
    assert_eq!(config.random_seed, None);
}

#[test]
#[serial]
fn test_report_config_reads_environment() {
    clear_vars();
    env::set_var(DEFAULT_DAYS_VAR, "7");
    env::set_var(FAMILY_AGGREGATION_VAR, "computed");
    env::set_var(RANDOM_SEED_VAR, "42");

    let config = ReportConfig::from_env().unwrap();
    clear_vars();

    assert_eq!(config.default_days, 7);
    assert_eq!(config.family_aggregation, FamilyAggregation::Computed);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.assembler().aggregation(), FamilyAggregation::Computed);
}

#[test]
#[serial]
fn test_seeded_config_yields_reproducible_reports() {
    clear_vars();
    env::set_var(RANDOM_SEED_VAR, "9");
    let config = ReportConfig::from_env().unwrap();
    clear_vars();

    let person = common::subject(HealthStatus::Good);
    let assembler = config.assembler();
    let first = assembler
        .assemble_report(&person, 10, &mut config.generation_context())
        .unwrap();
    let second = assembler
        .assemble_report(&person, 10, &mut config.generation_context())
        .unwrap();
    assert_eq!(first.metrics, second.metrics);
    assert_eq!(first.medications.len(), second.medications.len());
}

#[test]
#[serial]
fn test_malformed_report_variables_are_errors() {
    for (name, value) in [
        (DEFAULT_DAYS_VAR, "thirty"),
        (DEFAULT_DAYS_VAR, "0"),
        (FAMILY_AGGREGATION_VAR, "median"),
        (RANDOM_SEED_VAR, "-1"),
    ] {
        clear_vars();
        env::set_var(name, value);
        let result = ReportConfig::from_env();
        clear_vars();
        let err = result.unwrap_err();
        assert!(err.to_string().contains(name), "{name}={value}: {err}");
    }
}

#[test]
#[serial]
fn test_intelligence_overrides_from_environment() {
    clear_vars();
    env::set_var("CAREWATCH_HR_ELEVATED_BPM", "90");
    env::set_var("CAREWATCH_TREND_WINDOW_DAYS", "5");

    let config = CareIntelligenceConfig::load().unwrap();
    clear_vars();

    assert!((config.insights.elevated_heart_rate - 90.0).abs() < f64::EPSILON);
    assert_eq!(config.insights.trend_window_days, 5);
    assert!((config.alerts.heart_rate_limit - 100.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_intelligence_rejects_unparseable_override() {
    clear_vars();
    env::set_var("CAREWATCH_LOW_STEPS_THRESHOLD", "lots");
    let result = CareIntelligenceConfig::load();
    clear_vars();
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_intelligence_rejects_inverted_thresholds() {
    clear_vars();
    // Below the fitness heart rate of 60
    env::set_var("CAREWATCH_HR_ELEVATED_BPM", "55");
    let result = CareIntelligenceConfig::load();
    clear_vars();
    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}
