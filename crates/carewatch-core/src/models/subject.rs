// ABOUTME: Monitored subject model and its closed health-status category
// ABOUTME: Validates caller-supplied status text into the HealthStatus enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{adherence, health_scores};
use crate::errors::ReportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse health bucket driving synthetic baselines and canned guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Stable and thriving
    Excellent,
    /// Stable
    Good,
    /// Needs closer monitoring
    Warning,
    /// Needs immediate attention
    Critical,
}

impl HealthStatus {
    /// Every category, best first
    pub const ALL: [Self; 4] = [Self::Excellent, Self::Good, Self::Warning, Self::Critical];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }

    /// Display label for documents
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }

    /// Score used when averaging a family's health
    #[must_use]
    pub const fn health_score(&self) -> u32 {
        match self {
            Self::Excellent => health_scores::EXCELLENT,
            Self::Good => health_scores::GOOD,
            Self::Warning => health_scores::WARNING,
            Self::Critical => health_scores::CRITICAL,
        }
    }

    /// Adherence penalty applied by the synthesizer
    #[must_use]
    pub const fn adherence_penalty(&self) -> u32 {
        match self {
            Self::Critical => adherence::CRITICAL_PENALTY,
            Self::Warning => adherence::WARNING_PENALTY,
            Self::Good | Self::Excellent => adherence::STABLE_PENALTY,
        }
    }

    /// Whether the subject needs caregiver attention
    #[must_use]
    pub const fn needs_attention(&self) -> bool {
        matches!(self, Self::Warning | Self::Critical)
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthStatus {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "excellent" => Ok(Self::Excellent),
            "good" => Ok(Self::Good),
            "warning" => Ok(Self::Warning),
            "critical" => Ok(Self::Critical),
            _ => Err(ReportError::unknown_status(s)),
        }
    }
}

/// The monitored person a report is generated for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Stable identifier supplied by the caller
    pub id: String,
    /// Display name used in statements and documents
    pub name: String,
    /// Age in whole years
    pub age: u32,
    /// Relation to the account holder (free text)
    pub relation: String,
    /// Health-status category
    pub status: HealthStatus,
}

impl Subject {
    /// Create a subject from already-validated parts
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        relation: impl Into<String>,
        status: HealthStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            relation: relation.into(),
            status,
        }
    }
}

/// Raw subject as a caller supplies it, before status validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRequest {
    /// Caller identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Age in whole years
    pub age: u32,
    /// Relation label
    #[serde(default)]
    pub relation: String,
    /// Status text, validated against the closed category set
    pub status: String,
}

impl TryFrom<SubjectRequest> for Subject {
    type Error = ReportError;

    fn try_from(request: SubjectRequest) -> Result<Self, Self::Error> {
        let status = request.status.parse()?;
        Ok(Self {
            id: request.id,
            name: request.name,
            age: request.age,
            relation: request.relation,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert_eq!("Critical".parse::<HealthStatus>(), Ok(HealthStatus::Critical));
        assert_eq!(" good ".parse::<HealthStatus>(), Ok(HealthStatus::Good));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = "stable".parse::<HealthStatus>();
        assert_eq!(result, Err(ReportError::unknown_status("stable")));
    }

    #[test]
    fn test_subject_request_validation() {
        let request = SubjectRequest {
            id: "s-1".into(),
            name: "Margaret".into(),
            age: 82,
            relation: "Mother".into(),
            status: "unwell".into(),
        };
        assert!(matches!(
            Subject::try_from(request),
            Err(ReportError::UnknownStatus { .. })
        ));
    }

    #[test]
    fn test_status_deserialization_rejects_unknown() {
        let parsed: Result<HealthStatus, _> = serde_json::from_str("\"stable\"");
        assert!(parsed.is_err());
        let parsed: HealthStatus = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(parsed, HealthStatus::Warning);
    }
}
