// ABOUTME: Core types and constants for the Carewatch health report pipeline
// ABOUTME: Foundation crate with error handling, data models, calendar math, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Carewatch Core
//!
//! Foundation crate providing shared types for the Carewatch report pipeline.
//! Everything here is plain data: no randomness, no clock access, no I/O.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the pipeline's typed `ReportError`
//! - **models**: subjects, metric series, alerts, care records and reports
//! - **calendar**: the single day-index to calendar-date mapping
//! - **constants**: fixed scores, windows and placeholder aggregates

/// Unified error handling with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models (Subject, `MetricSeries`, Report, `FamilyReport`)
pub mod models;

/// Day-index to calendar-date mapping shared by every consumer of a series
pub mod calendar;

pub use calendar::SeriesCalendar;
pub use errors::{AppError, AppResult, ErrorCode, ReportError};
