// ABOUTME: Insight engine turning metric aggregates into ordered observational statements
// ABOUTME: Ordered table of independent threshold rules over heart rate, activity, sleep, adherence, trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Insight generation for monitored subjects
//!
//! Rules run in a fixed order and each appends at most one statement. Within
//! a rule the branches are mutually exclusive, so the same metric can never
//! be reported as both elevated and excellent. The resulting order is part of
//! the report contract and is never re-sorted.

use crate::config::intelligence::InsightThresholds;
use crate::config::CareIntelligenceConfig;
use carewatch_core::models::{mean, MetricSeries, Subject};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An observational statement and the rule branch that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Which rule branch fired
    pub kind: InsightKind,
    /// Human-readable statement
    pub message: String,
}

/// Rule branches that can produce an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Mean heart rate above the elevated threshold
    ElevatedHeartRate,
    /// Mean heart rate below the fitness threshold
    ExcellentFitness,
    /// Mean steps below the low-activity threshold
    LowActivity,
    /// Mean steps above the high-activity threshold
    ExcellentActivity,
    /// Mean sleep below the poor-sleep threshold
    PoorSleep,
    /// Mean sleep above the healthy-sleep threshold
    HealthySleep,
    /// Adherence at or below the concern threshold
    AdherenceConcern,
    /// Adherence above the excellent threshold
    AdherenceExcellent,
    /// Recent week's steps clearly above the first week's
    PositiveTrend,
    /// Recent week's steps clearly below the first week's
    NegativeTrend,
}

impl InsightKind {
    /// Whether this is a week-over-week trend statement
    #[must_use]
    pub const fn is_trend(&self) -> bool {
        matches!(self, Self::PositiveTrend | Self::NegativeTrend)
    }

    /// Rule this branch belongs to
    #[must_use]
    pub const fn rule(&self) -> InsightRule {
        match self {
            Self::ElevatedHeartRate | Self::ExcellentFitness => InsightRule::HeartRate,
            Self::LowActivity | Self::ExcellentActivity => InsightRule::Activity,
            Self::PoorSleep | Self::HealthySleep => InsightRule::Sleep,
            Self::AdherenceConcern | Self::AdherenceExcellent => InsightRule::MedicationAdherence,
            Self::PositiveTrend | Self::NegativeTrend => InsightRule::ActivityTrend,
        }
    }
}

/// Pre-aggregated values every rule reads
#[derive(Debug, Clone)]
pub struct InsightInputs<'a> {
    /// Subject display name
    pub name: &'a str,
    /// Mean heart rate
    pub mean_heart_rate: f64,
    /// Mean daily steps
    pub mean_steps: f64,
    /// Mean hours slept
    pub mean_sleep_hours: f64,
    /// Window adherence percentage
    pub medication_adherence: f64,
    /// Raw daily steps, oldest first
    pub steps: &'a [u32],
}

impl<'a> InsightInputs<'a> {
    /// Aggregate a subject's series once for all rules
    #[must_use]
    pub fn from_metrics(subject: &'a Subject, metrics: &'a MetricSeries) -> Self {
        Self {
            name: &subject.name,
            mean_heart_rate: metrics.mean_heart_rate(),
            mean_steps: metrics.mean_steps(),
            mean_sleep_hours: metrics.mean_sleep_hours(),
            medication_adherence: metrics.medication_adherence,
            steps: &metrics.steps,
        }
    }
}

/// Independent insight rules, evaluated in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightRule {
    /// Elevated vs excellent resting heart rate
    HeartRate,
    /// Low vs excellent daily activity
    Activity,
    /// Poor vs healthy sleep
    Sleep,
    /// Adherence concern vs excellent adherence
    MedicationAdherence,
    /// First week vs most recent week of steps
    ActivityTrend,
}

impl InsightRule {
    /// Evaluation order
    pub const ORDERED: [Self; 5] = [
        Self::HeartRate,
        Self::Activity,
        Self::Sleep,
        Self::MedicationAdherence,
        Self::ActivityTrend,
    ];

    /// Evaluate this rule, producing at most one insight
    #[must_use]
    pub fn evaluate(&self, thresholds: &InsightThresholds, inputs: &InsightInputs<'_>) -> Option<Insight> {
        match self {
            Self::HeartRate => heart_rate_rule(thresholds, inputs),
            Self::Activity => activity_rule(thresholds, inputs),
            Self::Sleep => sleep_rule(thresholds, inputs),
            Self::MedicationAdherence => adherence_rule(thresholds, inputs),
            Self::ActivityTrend => trend_rule(thresholds, inputs),
        }
    }
}

/// Insight engine for monitored subjects
#[derive(Debug, Clone)]
pub struct InsightEngine {
    thresholds: InsightThresholds,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            thresholds: CareIntelligenceConfig::global().insights.clone(),
        }
    }

    /// Create an engine with custom thresholds
    #[must_use]
    pub const fn with_config(thresholds: InsightThresholds) -> Self {
        Self { thresholds }
    }

    /// Derive insights in rule order
    #[must_use]
    pub fn derive_insights(&self, subject: &Subject, metrics: &MetricSeries) -> Vec<Insight> {
        let inputs = InsightInputs::from_metrics(subject, metrics);
        let insights: Vec<Insight> = InsightRule::ORDERED
            .iter()
            .filter_map(|rule| rule.evaluate(&self.thresholds, &inputs))
            .collect();

        debug!(
            subject_id = %subject.id,
            count = insights.len(),
            kinds = ?insights.iter().map(|i| i.kind).collect::<Vec<_>>(),
            "Derived insights"
        );

        insights
    }

    /// Derive insight statements only, as stored on a report
    #[must_use]
    pub fn derive_statements(&self, subject: &Subject, metrics: &MetricSeries) -> Vec<String> {
        self.derive_insights(subject, metrics)
            .into_iter()
            .map(|insight| insight.message)
            .collect()
    }
}

fn insight(kind: InsightKind, message: String) -> Option<Insight> {
    Some(Insight { kind, message })
}

fn whole(value: f64) -> i64 {
    value.round() as i64
}

fn heart_rate_rule(thresholds: &InsightThresholds, inputs: &InsightInputs<'_>) -> Option<Insight> {
    let name = inputs.name;
    let bpm = whole(inputs.mean_heart_rate);
    if inputs.mean_heart_rate > thresholds.elevated_heart_rate {
        insight(
            InsightKind::ElevatedHeartRate,
            format!("{name}'s average heart rate of {bpm} bpm is elevated. Consider discussing this with their healthcare provider."),
        )
    } else if inputs.mean_heart_rate < thresholds.fitness_heart_rate {
        insight(
            InsightKind::ExcellentFitness,
            format!("{name} shows excellent cardiovascular fitness with an average resting heart rate of {bpm} bpm."),
        )
    } else {
        None
    }
}

fn activity_rule(thresholds: &InsightThresholds, inputs: &InsightInputs<'_>) -> Option<Insight> {
    let name = inputs.name;
    let steps = whole(inputs.mean_steps);
    if inputs.mean_steps < thresholds.low_steps {
        insight(
            InsightKind::LowActivity,
            format!("{name}'s activity level is low at {steps} steps per day. Gentle daily movement could help maintain mobility."),
        )
    } else if inputs.mean_steps > thresholds.high_steps {
        insight(
            InsightKind::ExcellentActivity,
            format!("{name} maintains excellent activity levels, averaging {steps} steps per day."),
        )
    } else {
        None
    }
}

fn sleep_rule(thresholds: &InsightThresholds, inputs: &InsightInputs<'_>) -> Option<Insight> {
    let name = inputs.name;
    let hours = (inputs.mean_sleep_hours * 10.0).round() / 10.0;
    if inputs.mean_sleep_hours < thresholds.poor_sleep_hours {
        insight(
            InsightKind::PoorSleep,
            format!("{name} is averaging only {hours:.1} hours of sleep per night. Poor sleep can affect mood, memory, and recovery."),
        )
    } else if inputs.mean_sleep_hours > thresholds.healthy_sleep_hours {
        insight(
            InsightKind::HealthySleep,
            format!("{name} has healthy sleep patterns, averaging {hours:.1} hours per night."),
        )
    } else {
        None
    }
}

fn adherence_rule(thresholds: &InsightThresholds, inputs: &InsightInputs<'_>) -> Option<Insight> {
    let name = inputs.name;
    let percent = whole(inputs.medication_adherence);
    if inputs.medication_adherence <= thresholds.adherence_concern_percent {
        insight(
            InsightKind::AdherenceConcern,
            format!("Medication adherence for {name} is {percent}%. Missed doses may reduce treatment effectiveness."),
        )
    } else if inputs.medication_adherence > thresholds.adherence_excellent_percent {
        insight(
            InsightKind::AdherenceExcellent,
            format!("{name} shows excellent medication adherence at {percent}%."),
        )
    } else {
        None
    }
}

fn trend_rule(thresholds: &InsightThresholds, inputs: &InsightInputs<'_>) -> Option<Insight> {
    let window = thresholds.trend_window_days;
    let steps = inputs.steps;
    if window == 0 || steps.len() < window {
        return None;
    }

    let earliest = mean_of_steps(&steps[..window]);
    let recent = mean_of_steps(&steps[steps.len() - window..]);
    if earliest <= 0.0 {
        return None;
    }

    let name = inputs.name;
    let percent = whole(((recent - earliest) / earliest * 100.0).abs());
    if recent > earliest * thresholds.trend_increase_ratio {
        insight(
            InsightKind::PositiveTrend,
            format!("{name}'s daily activity has increased by {percent}% compared with the start of the period, a positive trend."),
        )
    } else if recent < earliest * thresholds.trend_decrease_ratio {
        insight(
            InsightKind::NegativeTrend,
            format!("{name}'s daily activity has decreased by {percent}% compared with the start of the period. Consider checking in on their mobility."),
        )
    } else {
        None
    }
}

fn mean_of_steps(steps: &[u32]) -> f64 {
    let values: Vec<f64> = steps.iter().map(|&s| f64::from(s)).collect();
    mean(&values)
}
