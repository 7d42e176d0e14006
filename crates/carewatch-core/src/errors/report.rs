// ABOUTME: Typed errors raised by the report pipeline before any output is produced
// ABOUTME: Covers invalid windows, unknown statuses, unsupported exports, and codec failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Report Error Types
//!
//! Every variant is detected before synthesis or rendering starts, so a
//! caller never receives a partially built report alongside an error.

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors returned by synthesis, assembly and export operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Requested window is shorter than one day
    #[error("report window must cover at least one day, got {days}")]
    InvalidWindow {
        /// The rejected window length
        days: i64,
    },

    /// Health status outside the closed category set
    #[error("unknown health status '{value}' (expected excellent, good, warning or critical)")]
    UnknownStatus {
        /// The rejected status text
        value: String,
    },

    /// Export format is not defined for this kind of report
    #[error("{format} export is not defined for {report_kind} reports")]
    UnsupportedExport {
        /// Name of the requested format
        format: &'static str,
        /// Kind of report that was passed in
        report_kind: &'static str,
    },

    /// Family report requested without any subjects
    #[error("family report requires at least one subject")]
    EmptyFamily,

    /// Structured encoding or decoding failed
    #[error("report serialization failed: {0}")]
    Serialization(String),
}

impl ReportError {
    /// Create an "invalid window" error
    #[must_use]
    pub fn invalid_window(days: impl Into<i64>) -> Self {
        Self::InvalidWindow { days: days.into() }
    }

    /// Create an "unknown status" error
    #[must_use]
    pub fn unknown_status(value: impl Into<String>) -> Self {
        Self::UnknownStatus {
            value: value.into(),
        }
    }

    /// Error code this variant maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidWindow { .. } => ErrorCode::ValueOutOfRange,
            Self::UnknownStatus { .. } => ErrorCode::InvalidInput,
            Self::UnsupportedExport { .. } => ErrorCode::InvalidFormat,
            Self::EmptyFamily => ErrorCode::MissingRequiredField,
            Self::Serialization(_) => ErrorCode::SerializationError,
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<ReportError> for AppError {
    fn from(error: ReportError) -> Self {
        Self::new(error.code(), error.to_string()).with_source(error)
    }
}
