// ABOUTME: Synthesis configuration for generated metric series
// ABOUTME: Status baselines, per-series variance, trend totals, and blood pressure ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metric Synthesis Configuration
//!
//! The status baseline table is fixed; the shape parameters around it
//! (noise width, trends, blood-pressure ranges) are tunable.

use carewatch_core::models::HealthStatus;
use serde::{Deserialize, Serialize};

/// Baseline values for one health-status category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusBaseline {
    /// Resting heart rate (beats/min)
    pub heart_rate: f64,
    /// Daily steps
    pub steps: f64,
    /// Body temperature (°F)
    pub temperature: f64,
    /// Hours slept
    pub sleep_hours: f64,
}

impl StatusBaseline {
    /// Fixed lookup table keyed by status
    #[must_use]
    pub const fn for_status(status: HealthStatus) -> Self {
        match status {
            HealthStatus::Excellent => Self {
                heart_rate: 65.0,
                steps: 2500.0,
                temperature: 98.2,
                sleep_hours: 8.5,
            },
            HealthStatus::Good => Self {
                heart_rate: 72.0,
                steps: 2000.0,
                temperature: 98.4,
                sleep_hours: 8.0,
            },
            HealthStatus::Warning => Self {
                heart_rate: 78.0,
                steps: 1500.0,
                temperature: 98.7,
                sleep_hours: 7.0,
            },
            HealthStatus::Critical => Self {
                heart_rate: 85.0,
                steps: 800.0,
                temperature: 99.2,
                sleep_hours: 6.0,
            },
        }
    }
}

/// Shape parameters for synthesized series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Full noise width for heart rate
    pub heart_rate_variance: f64,
    /// Full noise width for steps
    pub steps_variance: f64,
    /// Full noise width for temperature
    pub temperature_variance: f64,
    /// Full noise width for sleep hours
    pub sleep_variance: f64,
    /// Full noise width for weight
    pub weight_variance: f64,
    /// Total step trend across the window for excellent subjects
    pub excellent_steps_trend: f64,
    /// Total step trend across the window for everyone else
    pub default_steps_trend: f64,
    /// Weight at the reference age (lb)
    pub weight_baseline: f64,
    /// Age at which `weight_baseline` applies
    pub weight_reference_age: f64,
    /// Weight change per year away from the reference age (lb)
    pub weight_per_year: f64,
    /// Systolic range (min, max) before the critical offset
    pub systolic_range: (f64, f64),
    /// Diastolic range (min, max) before the critical offset
    pub diastolic_range: (f64, f64),
    /// Systolic offset added for critical subjects
    pub critical_systolic_offset: f64,
    /// Diastolic offset added for critical subjects
    pub critical_diastolic_offset: f64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            heart_rate_variance: 10.0,
            steps_variance: 800.0,
            temperature_variance: 1.0,
            sleep_variance: 1.5,
            weight_variance: 3.0,
            excellent_steps_trend: 100.0,
            default_steps_trend: -50.0,
            weight_baseline: 135.0,
            weight_reference_age: 75.0,
            weight_per_year: 2.0,
            systolic_range: (110.0, 150.0),
            diastolic_range: (70.0, 90.0),
            critical_systolic_offset: 20.0,
            critical_diastolic_offset: 10.0,
        }
    }
}

impl SynthesisConfig {
    /// Total step trend for a status
    #[must_use]
    pub fn steps_trend(&self, status: HealthStatus) -> f64 {
        if status == HealthStatus::Excellent {
            self.excellent_steps_trend
        } else {
            self.default_steps_trend
        }
    }

    /// Weight baseline for an age
    #[must_use]
    pub fn weight_baseline_for_age(&self, age: u32) -> f64 {
        (f64::from(age) - self.weight_reference_age).mul_add(self.weight_per_year, self.weight_baseline)
    }
}
