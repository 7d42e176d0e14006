// ABOUTME: Insight engine thresholds for heart rate, activity, sleep, and adherence rules
// ABOUTME: Also configures the week-over-week step trend comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Thresholds for the insight rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightThresholds {
    /// Mean heart rate above this is elevated (bpm)
    pub elevated_heart_rate: f64,
    /// Mean heart rate below this indicates excellent fitness (bpm)
    pub fitness_heart_rate: f64,
    /// Mean steps below this is low activity
    pub low_steps: f64,
    /// Mean steps above this is excellent activity
    pub high_steps: f64,
    /// Mean sleep below this is poor (hours)
    pub poor_sleep_hours: f64,
    /// Mean sleep above this is healthy (hours)
    pub healthy_sleep_hours: f64,
    /// Adherence at or below this raises a concern (%)
    pub adherence_concern_percent: f64,
    /// Adherence above this is excellent (%)
    pub adherence_excellent_percent: f64,
    /// Entries compared at each end of the step series
    pub trend_window_days: usize,
    /// Recent/earliest ratio above which the trend is positive
    pub trend_increase_ratio: f64,
    /// Recent/earliest ratio below which the trend is negative
    pub trend_decrease_ratio: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            elevated_heart_rate: 85.0,
            fitness_heart_rate: 60.0,
            low_steps: 1000.0,
            high_steps: 2000.0,
            poor_sleep_hours: 6.5,
            healthy_sleep_hours: 8.0,
            adherence_concern_percent: 70.0,
            adherence_excellent_percent: 90.0,
            trend_window_days: 7,
            trend_increase_ratio: 1.10,
            trend_decrease_ratio: 0.90,
        }
    }
}
