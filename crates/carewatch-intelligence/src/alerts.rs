// ABOUTME: Alert detector scanning recent windows of a series for threshold breaches
// ABOUTME: Heart rate, blood pressure, and activity rules each emit at most one alert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Alert detection
//!
//! Rules run in a fixed order (heart rate, blood pressure, activity). Each
//! counts breaches in its most recent window and raises one alert when the
//! count reaches its minimum. Severity belongs to the rule and is never
//! re-ranked, so at most three alerts are ever produced.

use crate::config::intelligence::AlertThresholds;
use crate::config::CareIntelligenceConfig;
use crate::context::GenerationContext;
use carewatch_core::models::{Alert, AlertSeverity, MetricSeries, Subject};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Alert rules, evaluated in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertRule {
    /// Repeated high heart-rate readings
    HeartRate,
    /// Repeated high blood-pressure readings
    BloodPressure,
    /// Repeated very low step counts
    Activity,
}

impl AlertRule {
    /// Evaluation order
    pub const ORDERED: [Self; 3] = [Self::HeartRate, Self::BloodPressure, Self::Activity];

    /// Severity of alerts raised by this rule
    #[must_use]
    pub const fn severity(&self) -> AlertSeverity {
        match self {
            Self::HeartRate => AlertSeverity::Critical,
            Self::BloodPressure => AlertSeverity::Warning,
            Self::Activity => AlertSeverity::Info,
        }
    }

    /// Fixed alert text
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::HeartRate => "Elevated heart rate detected on multiple recent readings",
            Self::BloodPressure => "Blood pressure above the healthy range on several recent days",
            Self::Activity => "Very low daily activity recorded on several days this week",
        }
    }

    /// Count breaches in this rule's window
    #[must_use]
    pub fn breaches(&self, thresholds: &AlertThresholds, metrics: &MetricSeries) -> usize {
        match self {
            Self::HeartRate => MetricSeries::tail(&metrics.heart_rate, thresholds.heart_rate_window)
                .iter()
                .filter(|&&bpm| bpm > thresholds.heart_rate_limit)
                .count(),
            Self::BloodPressure => {
                MetricSeries::tail(&metrics.blood_pressure, thresholds.blood_pressure_window)
                    .iter()
                    .filter(|reading| {
                        reading.systolic > thresholds.systolic_limit
                            || reading.diastolic > thresholds.diastolic_limit
                    })
                    .count()
            }
            Self::Activity => MetricSeries::tail(&metrics.steps, thresholds.activity_window)
                .iter()
                .filter(|&&steps| steps < thresholds.low_steps_limit)
                .count(),
        }
    }

    /// Whether the breach count is enough to raise an alert
    #[must_use]
    pub fn fires(&self, thresholds: &AlertThresholds, metrics: &MetricSeries) -> bool {
        let minimum = match self {
            Self::HeartRate => thresholds.heart_rate_min_breaches,
            Self::BloodPressure => thresholds.blood_pressure_min_breaches,
            Self::Activity => thresholds.activity_min_breaches,
        };
        self.breaches(thresholds, metrics) >= minimum
    }
}

/// Scans metric series for threshold breaches
#[derive(Debug, Clone)]
pub struct AlertDetector {
    thresholds: AlertThresholds,
}

impl Default for AlertDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertDetector {
    /// Create a detector with the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            thresholds: CareIntelligenceConfig::global().alerts.clone(),
        }
    }

    /// Create a detector with custom thresholds
    #[must_use]
    pub const fn with_config(thresholds: AlertThresholds) -> Self {
        Self { thresholds }
    }

    /// Derive alerts in rule order
    #[must_use]
    pub fn derive_alerts(
        &self,
        subject: &Subject,
        metrics: &MetricSeries,
        ctx: &mut GenerationContext,
    ) -> Vec<Alert> {
        let mut alerts = Vec::with_capacity(AlertRule::ORDERED.len());

        for rule in AlertRule::ORDERED {
            if !rule.fires(&self.thresholds, metrics) {
                continue;
            }
            let timestamp = match rule {
                AlertRule::HeartRate => {
                    ctx.instant_within_hours(self.thresholds.heart_rate_lookback_hours)
                }
                AlertRule::BloodPressure => {
                    ctx.instant_within_hours(self.thresholds.blood_pressure_lookback_hours)
                }
                AlertRule::Activity => ctx.now() - Duration::days(1),
            };
            info!(
                subject_id = %subject.id,
                rule = ?rule,
                severity = rule.severity().as_str(),
                "Alert raised"
            );
            alerts.push(Alert {
                severity: rule.severity(),
                message: rule.message().to_owned(),
                timestamp,
            });
        }

        debug!(subject_id = %subject.id, count = alerts.len(), "Derived alerts");
        alerts
    }
}
