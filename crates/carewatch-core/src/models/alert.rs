// ABOUTME: Severity-tagged, timestamped alert raised by a threshold breach
// ABOUTME: Severity is fixed by the rule that produced the alert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Requires immediate follow-up
    Critical,
    /// Requires follow-up soon
    Warning,
    /// Informational
    Info,
}

impl AlertSeverity {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// A threshold breach found in the recent part of a series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Severity determined by the producing rule
    pub severity: AlertSeverity,
    /// Human-readable description
    pub message: String,
    /// When the breach was observed
    pub timestamp: DateTime<Utc>,
}
