// ABOUTME: Alert detector thresholds and look-back windows
// ABOUTME: Configures heart rate, blood pressure, and low-activity breach rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Thresholds for the alert rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertThresholds {
    /// Recent heart-rate readings inspected
    pub heart_rate_window: usize,
    /// Readings above this count as breaches (bpm)
    pub heart_rate_limit: f64,
    /// Breaches required to raise the alert
    pub heart_rate_min_breaches: usize,
    /// Alert timestamp falls within this many hours before now
    pub heart_rate_lookback_hours: i64,
    /// Recent blood-pressure readings inspected
    pub blood_pressure_window: usize,
    /// Systolic readings above this count as breaches (mmHg)
    pub systolic_limit: f64,
    /// Diastolic readings above this count as breaches (mmHg)
    pub diastolic_limit: f64,
    /// Breaches required to raise the alert
    pub blood_pressure_min_breaches: usize,
    /// Alert timestamp falls within this many hours before now
    pub blood_pressure_lookback_hours: i64,
    /// Recent step counts inspected
    pub activity_window: usize,
    /// Days below this step count are breaches
    pub low_steps_limit: u32,
    /// Breaches required to raise the alert
    pub activity_min_breaches: usize,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            heart_rate_window: 3,
            heart_rate_limit: 100.0,
            heart_rate_min_breaches: 2,
            heart_rate_lookback_hours: 72,
            blood_pressure_window: 5,
            systolic_limit: 140.0,
            diastolic_limit: 90.0,
            blood_pressure_min_breaches: 3,
            blood_pressure_lookback_hours: 48,
            activity_window: 7,
            low_steps_limit: 500,
            activity_min_breaches: 3,
        }
    }
}
