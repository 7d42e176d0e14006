// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Fixed scores, windows, and placeholder aggregates for Carewatch reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by the part of the pipeline that owns them.
//! Tunable rule thresholds live in the intelligence configuration instead.

/// Health score assigned to each status category in family reports
pub mod health_scores {
    /// Score for the excellent category
    pub const EXCELLENT: u32 = 95;
    /// Score for the good category
    pub const GOOD: u32 = 85;
    /// Score for the warning category
    pub const WARNING: u32 = 70;
    /// Score for the critical category
    pub const CRITICAL: u32 = 55;
}

/// Medication adherence bounds and per-status penalties
pub mod adherence {
    /// Series-level adherence never drops below this percentage
    pub const SERIES_FLOOR_PERCENT: u32 = 50;
    /// Per-medication adherence never drops below this percentage
    pub const RECORD_FLOOR_PERCENT: u32 = 60;
    /// Upper bound for any adherence value
    pub const CEILING_PERCENT: u32 = 100;
    /// Penalty for critical subjects
    pub const CRITICAL_PENALTY: u32 = 30;
    /// Penalty for warning subjects
    pub const WARNING_PENALTY: u32 = 15;
    /// Penalty for good and excellent subjects
    pub const STABLE_PENALTY: u32 = 5;
    /// Bonus applied to per-medication adherence for excellent subjects
    pub const EXCELLENT_RECORD_BONUS: u32 = 20;
}

/// Fixed window sizes
pub mod windows {
    /// Number of entries in a report's activity log
    pub const ACTIVITY_LOG_DAYS: usize = 14;
    /// Activities shown in the rendered document
    pub const DOCUMENT_ACTIVITY_LIMIT: usize = 6;
    /// Period covered by a family report
    pub const FAMILY_REPORT_DAYS: u32 = 30;
    /// Default window when the caller does not specify one
    pub const DEFAULT_REPORT_DAYS: u32 = 30;
}

/// Placeholder family aggregates used by the synthetic aggregation mode
pub mod family_placeholders {
    /// Total alerts across the family
    pub const TOTAL_ALERTS: u32 = 23;
    /// Average medication adherence percentage
    pub const AVERAGE_ADHERENCE_PERCENT: u32 = 87;
    /// Emergency incidents in the period
    pub const EMERGENCY_INCIDENTS: u32 = 2;
    /// Caregiver satisfaction score out of 10
    pub const SATISFACTION_SCORE: f64 = 9.4;
    /// Health improvement over the previous period (%)
    pub const HEALTH_IMPROVEMENT_PERCENT: f64 = 23.0;
    /// Activity increase over the previous period (%)
    pub const ACTIVITY_INCREASE_PERCENT: f64 = 15.0;
    /// Medication adherence improvement over the previous period (%)
    pub const MEDICATION_IMPROVEMENT_PERCENT: f64 = 12.0;
}

/// Column header of the tabular export
pub const TABULAR_HEADER: &str =
    "Date,Heart Rate,Systolic,Diastolic,Steps,Weight,Temperature,Sleep Hours";
