// ABOUTME: Integration tests for the threshold-breach alert detector
// ABOUTME: Rule order, fixed severities, breach minimums, window tails, and timestamp windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use carewatch_intelligence::config::intelligence::AlertThresholds;
use carewatch_intelligence::{AlertDetector, AlertRule, MetricsSynthesizer};
use carewatch_reports::models::{AlertSeverity, HealthStatus};
use chrono::Duration;
use common::{context_with_seed, fixed_now, flat_series, neutral_series, subject, test_context};

fn detector() -> AlertDetector {
    AlertDetector::with_config(AlertThresholds::default())
}

#[test]
fn test_all_rules_fire_in_order_with_fixed_severities() {
    let metrics = flat_series(10, 110.0, (150.0, 95.0), 200);
    let alerts = detector().derive_alerts(&subject(HealthStatus::Critical), &metrics, &mut test_context());

    let severities: Vec<AlertSeverity> = alerts.iter().map(|alert| alert.severity).collect();
    assert_eq!(
        severities,
        vec![
            AlertSeverity::Critical,
            AlertSeverity::Warning,
            AlertSeverity::Info
        ]
    );
    for (alert, rule) in alerts.iter().zip(AlertRule::ORDERED) {
        assert_eq!(alert.message, rule.message());
    }
}

#[test]
fn test_neutral_series_raises_nothing() {
    let alerts = detector().derive_alerts(
        &subject(HealthStatus::Good),
        &neutral_series(10),
        &mut test_context(),
    );
    assert!(alerts.is_empty());
}

#[test]
fn test_heart_rate_needs_two_breaches_in_last_three_days() {
    let mut metrics = neutral_series(10);
    // Old breaches outside the window do not count
    metrics.heart_rate[0] = 120.0;
    metrics.heart_rate[1] = 120.0;
    metrics.heart_rate[9] = 101.0;
    assert!(!AlertRule::HeartRate.fires(&AlertThresholds::default(), &metrics));

    metrics.heart_rate[8] = 101.0;
    assert!(AlertRule::HeartRate.fires(&AlertThresholds::default(), &metrics));

    // The limit itself is not a breach
    metrics.heart_rate[8] = 100.0;
    assert!(!AlertRule::HeartRate.fires(&AlertThresholds::default(), &metrics));
}

#[test]
fn test_blood_pressure_counts_either_reading() {
    let mut metrics = neutral_series(10);
    metrics.blood_pressure[7].systolic = 145.0;
    metrics.blood_pressure[8].diastolic = 92.0;
    assert_eq!(
        AlertRule::BloodPressure.breaches(&AlertThresholds::default(), &metrics),
        2
    );
    assert!(!AlertRule::BloodPressure.fires(&AlertThresholds::default(), &metrics));

    metrics.blood_pressure[9].systolic = 141.0;
    assert!(AlertRule::BloodPressure.fires(&AlertThresholds::default(), &metrics));
}

#[test]
fn test_activity_uses_short_series_entirely() {
    let metrics = flat_series(3, 72.0, (120.0, 80.0), 499);
    let alerts = detector().derive_alerts(&subject(HealthStatus::Warning), &metrics, &mut test_context());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, AlertSeverity::Info);
}

#[test]
fn test_alert_timestamps_stay_in_their_windows() {
    let metrics = flat_series(10, 110.0, (150.0, 95.0), 200);
    let now = fixed_now();
    for seed in 0..10 {
        let alerts = detector().derive_alerts(
            &subject(HealthStatus::Critical),
            &metrics,
            &mut context_with_seed(seed),
        );
        assert!(alerts[0].timestamp <= now && alerts[0].timestamp > now - Duration::hours(72));
        assert!(alerts[1].timestamp <= now && alerts[1].timestamp > now - Duration::hours(48));
        assert_eq!(alerts[2].timestamp, now - Duration::days(1));
    }
}

#[test]
fn test_synthesized_reports_never_exceed_three_alerts() {
    let synthesizer = MetricsSynthesizer::new();
    for status in HealthStatus::ALL {
        for seed in 0..25 {
            let person = subject(status);
            let mut ctx = context_with_seed(seed);
            let metrics = synthesizer.synthesize(&person, 30, &mut ctx).unwrap();
            let alerts = detector().derive_alerts(&person, &metrics, &mut ctx);
            assert!(alerts.len() <= 3);
            for alert in &alerts {
                let rule = AlertRule::ORDERED
                    .into_iter()
                    .find(|rule| rule.message() == alert.message)
                    .unwrap();
                assert_eq!(rule.severity(), alert.severity);
            }
        }
    }
}
