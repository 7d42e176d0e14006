// ABOUTME: Metrics synthesizer producing fixed-length daily series for one subject
// ABOUTME: Baseline-plus-trend-plus-noise series keyed by health status, seeded via GenerationContext
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics Synthesizer
//!
//! Every trended series follows `baseline + trend × i / days + noise`, where
//! noise is uniform in `[-variance/2, +variance/2]`, floored at zero and
//! rounded to one decimal. Blood pressure is drawn independently per day and
//! does not share the trend mechanism.

use crate::config::intelligence::{StatusBaseline, SynthesisConfig};
use crate::config::CareIntelligenceConfig;
use crate::context::GenerationContext;
use carewatch_core::constants::adherence;
use carewatch_core::models::{BloodPressureReading, HealthStatus, MetricSeries, Subject};
use carewatch_core::ReportError;
use rand::Rng;
use tracing::debug;

/// Shape of one trended series
#[derive(Debug, Clone, Copy)]
struct SeriesShape {
    baseline: f64,
    variance: f64,
    trend_total: f64,
}

/// Generates synthetic metric series
#[derive(Debug, Clone)]
pub struct MetricsSynthesizer {
    config: SynthesisConfig,
}

impl Default for MetricsSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSynthesizer {
    /// Create a synthesizer with the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: CareIntelligenceConfig::global().synthesis.clone(),
        }
    }

    /// Create a synthesizer with custom configuration
    #[must_use]
    pub const fn with_config(config: SynthesisConfig) -> Self {
        Self { config }
    }

    /// Synthesize `days` daily samples for a subject
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidWindow` when `days` is zero
    pub fn synthesize(
        &self,
        subject: &Subject,
        days: u32,
        ctx: &mut GenerationContext,
    ) -> Result<MetricSeries, ReportError> {
        if days == 0 {
            return Err(ReportError::invalid_window(0));
        }

        let baseline = StatusBaseline::for_status(subject.status);
        let config = &self.config;
        let rng = ctx.rng();

        let heart_rate = trended_series(
            rng,
            days,
            SeriesShape {
                baseline: baseline.heart_rate,
                variance: config.heart_rate_variance,
                trend_total: 0.0,
            },
        );
        let blood_pressure = (0..days)
            .map(|_| self.blood_pressure_reading(rng, subject.status))
            .collect();
        let steps = trended_series(
            rng,
            days,
            SeriesShape {
                baseline: baseline.steps,
                variance: config.steps_variance,
                trend_total: config.steps_trend(subject.status),
            },
        )
        .into_iter()
        .map(|value| value.round() as u32)
        .collect();
        let weight = trended_series(
            rng,
            days,
            SeriesShape {
                baseline: config.weight_baseline_for_age(subject.age),
                variance: config.weight_variance,
                trend_total: 0.0,
            },
        );
        let temperature = trended_series(
            rng,
            days,
            SeriesShape {
                baseline: baseline.temperature,
                variance: config.temperature_variance,
                trend_total: 0.0,
            },
        );
        let sleep_hours = trended_series(
            rng,
            days,
            SeriesShape {
                baseline: baseline.sleep_hours,
                variance: config.sleep_variance,
                trend_total: 0.0,
            },
        );

        let metrics = MetricSeries {
            heart_rate,
            blood_pressure,
            steps,
            weight,
            temperature,
            sleep_hours,
            medication_adherence: series_adherence(subject.status),
        };

        debug!(
            subject_id = %subject.id,
            status = %subject.status,
            days,
            mean_heart_rate = metrics.mean_heart_rate(),
            mean_steps = metrics.mean_steps(),
            "Synthesized metric series"
        );

        Ok(metrics)
    }

    fn blood_pressure_reading<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        status: HealthStatus,
    ) -> BloodPressureReading {
        let (systolic_offset, diastolic_offset) = if status == HealthStatus::Critical {
            (
                self.config.critical_systolic_offset,
                self.config.critical_diastolic_offset,
            )
        } else {
            (0.0, 0.0)
        };
        let (systolic_min, systolic_max) = self.config.systolic_range;
        let (diastolic_min, diastolic_max) = self.config.diastolic_range;

        BloodPressureReading {
            systolic: (rng.gen_range(systolic_min..systolic_max) + systolic_offset).round(),
            diastolic: (rng.gen_range(diastolic_min..diastolic_max) + diastolic_offset).round(),
        }
    }
}

/// Window-level adherence: `max(50, 100 - penalty)`
#[must_use]
pub fn series_adherence(status: HealthStatus) -> f64 {
    let percent = adherence::CEILING_PERCENT
        .saturating_sub(status.adherence_penalty())
        .max(adherence::SERIES_FLOOR_PERCENT);
    f64::from(percent)
}

fn trended_series<R: Rng + ?Sized>(rng: &mut R, days: u32, shape: SeriesShape) -> Vec<f64> {
    let half_width = shape.variance / 2.0;
    let span = f64::from(days);
    (0..days)
        .map(|index| {
            let trend = shape.trend_total * f64::from(index) / span;
            let noise = if half_width > 0.0 {
                rng.gen_range(-half_width..=half_width)
            } else {
                0.0
            };
            round_one_decimal((shape.baseline + trend + noise).max(0.0))
        })
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
