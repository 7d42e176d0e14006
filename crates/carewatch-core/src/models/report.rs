// ABOUTME: Assembled single-subject and family report records
// ABOUTME: Immutable values handed from the assembler to the exporters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ActivityRecord, Alert, MedicationRecord, MetricSeries, Subject};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive date range a report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// First day of the period
    pub start: NaiveDate,
    /// Last day of the period (the generation date)
    pub end: NaiveDate,
}

/// Health report for one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Who the report is about
    pub subject: Subject,
    /// Daily metrics for the window
    pub metrics: MetricSeries,
    /// Covered dates
    pub period: ReportPeriod,
    /// Observations in rule order
    pub insights: Vec<String>,
    /// Care actions, status list first
    pub recommendations: Vec<String>,
    /// Threshold breaches in rule order
    pub alerts: Vec<Alert>,
    /// Medication adherence entries
    pub medications: Vec<MedicationRecord>,
    /// Recent activity log, most recent first
    pub activities: Vec<ActivityRecord>,
    /// Instant the report was generated
    pub generated_at: DateTime<Utc>,
}

/// How family aggregate numbers are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyAggregation {
    /// Fixed demo placeholders, not derived from member data
    #[default]
    Synthetic,
    /// Derived from one generated report per member
    Computed,
}

impl FamilyAggregation {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Synthetic => "synthetic",
            Self::Computed => "computed",
        }
    }

    /// Parse from configuration text
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "synthetic" | "demo" => Some(Self::Synthetic),
            "computed" | "real" => Some(Self::Computed),
            _ => None,
        }
    }
}

/// Aggregate metrics across a family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyAggregates {
    /// Rounded mean of member status scores
    pub average_health_score: u32,
    /// Alerts raised across all members
    pub total_alerts: u32,
    /// Mean medication adherence percentage
    pub average_medication_adherence: u32,
    /// Emergency incidents in the period
    pub emergency_incidents: u32,
    /// Caregiver satisfaction score out of 10
    pub satisfaction_score: f64,
}

/// Period-over-period changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendDeltas {
    /// Health improvement (%)
    pub health_improvement_percent: f64,
    /// Activity increase (%)
    pub activity_increase_percent: f64,
    /// Medication adherence improvement (%)
    pub medication_improvement_percent: f64,
}

/// Aggregate report across several subjects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyReport {
    /// Covered dates
    pub period: ReportPeriod,
    /// Members included
    pub subjects: Vec<Subject>,
    /// Derived aggregate metrics
    pub aggregates: FamilyAggregates,
    /// Period-over-period changes
    pub trends: TrendDeltas,
    /// Family-level observations
    pub insights: Vec<String>,
    /// Family-level care actions
    pub recommendations: Vec<String>,
    /// Which aggregation mode produced the numbers
    pub aggregation: FamilyAggregation,
    /// Instant the report was generated
    pub generated_at: DateTime<Utc>,
}

/// Borrowed view over either kind of report, accepted by the exporters
#[derive(Debug, Clone, Copy)]
pub enum ReportRef<'a> {
    /// Single-subject report
    Subject(&'a Report),
    /// Family aggregate report
    Family(&'a FamilyReport),
}

impl ReportRef<'_> {
    /// Name of the report kind, used in error messages
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Subject(_) => "single-subject",
            Self::Family(_) => "family",
        }
    }
}

impl<'a> From<&'a Report> for ReportRef<'a> {
    fn from(report: &'a Report) -> Self {
        Self::Subject(report)
    }
}

impl<'a> From<&'a FamilyReport> for ReportRef<'a> {
    fn from(report: &'a FamilyReport) -> Self {
        Self::Family(report)
    }
}
