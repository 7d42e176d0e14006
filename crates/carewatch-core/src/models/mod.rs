// ABOUTME: Core data models for the Carewatch report pipeline
// ABOUTME: Re-exports Subject, MetricSeries, Alert, care records, and report types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Every value here is created fresh for one report request and dropped after
//! export. Nothing is mutated after assembly; a new report is always a full
//! recomputation.
//!
//! ## Core Models
//!
//! - `Subject`: the monitored person, with a closed `HealthStatus` category
//! - `MetricSeries`: fixed-length daily series for one subject
//! - `Alert`: severity-tagged threshold breach
//! - `MedicationRecord` / `ActivityRecord`: ancillary care samples
//! - `Report` / `FamilyReport`: assembled outputs handed to the exporters

mod alert;
mod care;
mod metrics;
mod report;
mod subject;

pub use alert::{Alert, AlertSeverity};
pub use care::{ActivityRecord, ActivityType, Intensity, MedicationRecord};
pub use metrics::{mean, BloodPressureReading, MetricSeries};
pub use report::{
    FamilyAggregates, FamilyAggregation, FamilyReport, Report, ReportPeriod, ReportRef,
    TrendDeltas,
};
pub use subject::{HealthStatus, Subject, SubjectRequest};
