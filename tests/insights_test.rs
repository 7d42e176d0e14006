// ABOUTME: Integration tests for the rule-based insight engine
// ABOUTME: Rule ordering, branch exclusivity, trend window handling, and statement templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use carewatch_intelligence::config::intelligence::InsightThresholds;
use carewatch_intelligence::{InsightEngine, InsightKind, InsightRule, MetricsSynthesizer};
use carewatch_reports::models::{HealthStatus, MetricSeries};
use common::{context_with_seed, neutral_series, subject};

fn engine() -> InsightEngine {
    InsightEngine::with_config(InsightThresholds::default())
}

fn kinds(metrics: &MetricSeries) -> Vec<InsightKind> {
    engine()
        .derive_insights(&subject(HealthStatus::Warning), metrics)
        .into_iter()
        .map(|insight| insight.kind)
        .collect()
}

#[test]
fn test_every_rule_fires_in_declared_order() {
    let mut metrics = neutral_series(14);
    metrics.heart_rate = vec![92.0; 14];
    metrics.steps = [vec![500; 7], vec![700; 7]].concat();
    metrics.sleep_hours = vec![5.0; 14];
    metrics.medication_adherence = 60.0;

    assert_eq!(
        kinds(&metrics),
        vec![
            InsightKind::ElevatedHeartRate,
            InsightKind::LowActivity,
            InsightKind::PoorSleep,
            InsightKind::AdherenceConcern,
            InsightKind::PositiveTrend,
        ]
    );
}

#[test]
fn test_positive_branches_in_order() {
    let mut metrics = neutral_series(14);
    metrics.heart_rate = vec![58.0; 14];
    metrics.steps = [vec![2600; 7], vec![2100; 7]].concat();
    metrics.sleep_hours = vec![8.6; 14];
    metrics.medication_adherence = 95.0;

    assert_eq!(
        kinds(&metrics),
        vec![
            InsightKind::ExcellentFitness,
            InsightKind::ExcellentActivity,
            InsightKind::HealthySleep,
            InsightKind::AdherenceExcellent,
            InsightKind::NegativeTrend,
        ]
    );
}

#[test]
fn test_neutral_series_produces_no_insights() {
    assert!(kinds(&neutral_series(14)).is_empty());
}

#[test]
fn test_heart_rate_branches_are_mutually_exclusive() {
    let synthesizer = MetricsSynthesizer::new();
    for status in HealthStatus::ALL {
        for seed in 0..20 {
            let person = subject(status);
            let metrics = synthesizer
                .synthesize(&person, 30, &mut context_with_seed(seed))
                .unwrap();
            let insights = engine().derive_insights(&person, &metrics);
            let heart_rate_count = insights
                .iter()
                .filter(|insight| insight.kind.rule() == InsightRule::HeartRate)
                .count();
            assert!(heart_rate_count <= 1);
            let rules: Vec<InsightRule> = insights.iter().map(|i| i.kind.rule()).collect();
            let mut deduped = rules.clone();
            deduped.dedup();
            assert_eq!(rules, deduped, "a rule produced two insights");
        }
    }
}

#[test]
fn test_short_window_has_no_trend_insight() {
    let synthesizer = MetricsSynthesizer::new();
    for status in HealthStatus::ALL {
        let person = subject(status);
        let metrics = synthesizer
            .synthesize(&person, 3, &mut context_with_seed(5))
            .unwrap();
        let insights = engine().derive_insights(&person, &metrics);
        assert!(insights.iter().all(|insight| !insight.kind.is_trend()));
    }
}

#[test]
fn test_trend_skipped_when_earliest_week_is_zero() {
    let mut metrics = neutral_series(14);
    metrics.steps = [vec![0; 7], vec![1500; 7]].concat();
    assert!(kinds(&metrics).iter().all(|kind| !kind.is_trend()));
}

#[test]
fn test_adherence_concern_includes_threshold() {
    let mut metrics = neutral_series(7);
    metrics.medication_adherence = 70.0;
    let insights = engine().derive_insights(&subject(HealthStatus::Critical), &metrics);
    let concern = insights
        .iter()
        .find(|insight| insight.kind == InsightKind::AdherenceConcern)
        .expect("adherence at 70% should raise a concern");
    assert!(concern.message.contains("Walter"));
    assert!(concern.message.contains("70%"));
}

#[test]
fn test_statements_name_the_subject() {
    let mut metrics = neutral_series(7);
    metrics.heart_rate = vec![90.0; 7];
    let statements = engine().derive_statements(&subject(HealthStatus::Good), &metrics);
    assert_eq!(statements.len(), 1);
    assert!(statements[0].starts_with("George's average heart rate of 90 bpm is elevated"));
}
