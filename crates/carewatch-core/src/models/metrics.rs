// ABOUTME: Fixed-length multivariate daily metric series for one subject
// ABOUTME: Provides the mean aggregates shared by engines and exporters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One day's blood pressure reading (mmHg)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodPressureReading {
    /// Systolic pressure
    pub systolic: f64,
    /// Diastolic pressure
    pub diastolic: f64,
}

/// Daily metrics for a window of N days
///
/// Every per-day sequence has exactly N entries; index 0 is the oldest day and
/// index N-1 is today. `SeriesCalendar` maps indices to dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    /// Resting heart rate (beats/min)
    pub heart_rate: Vec<f64>,
    /// Blood pressure readings
    pub blood_pressure: Vec<BloodPressureReading>,
    /// Daily step counts
    pub steps: Vec<u32>,
    /// Body weight (lb)
    pub weight: Vec<f64>,
    /// Body temperature (°F)
    pub temperature: Vec<f64>,
    /// Hours slept
    pub sleep_hours: Vec<f64>,
    /// Medication adherence over the whole window (0-100)
    pub medication_adherence: f64,
}

impl MetricSeries {
    /// Window length, taken from the heart-rate series
    #[must_use]
    pub fn days(&self) -> usize {
        self.heart_rate.len()
    }

    /// Whether every per-day sequence has the same length
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let days = self.days();
        self.blood_pressure.len() == days
            && self.steps.len() == days
            && self.weight.len() == days
            && self.temperature.len() == days
            && self.sleep_hours.len() == days
    }

    /// Mean resting heart rate
    #[must_use]
    pub fn mean_heart_rate(&self) -> f64 {
        mean(&self.heart_rate)
    }

    /// Mean daily steps
    #[must_use]
    pub fn mean_steps(&self) -> f64 {
        mean_steps(&self.steps)
    }

    /// Mean hours slept
    #[must_use]
    pub fn mean_sleep_hours(&self) -> f64 {
        mean(&self.sleep_hours)
    }

    /// The last `count` entries of a series (all of it when shorter)
    #[must_use]
    pub fn tail<T>(values: &[T], count: usize) -> &[T] {
        &values[values.len().saturating_sub(count)..]
    }
}

/// Arithmetic mean, 0.0 for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn mean_steps(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&steps| f64::from(steps)).sum::<f64>() / values.len() as f64
}
