// ABOUTME: Ancillary care records attached to a report
// ABOUTME: Medication adherence entries and the recent activity log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One prescribed medication and how consistently it is taken
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationRecord {
    /// Medication name
    pub name: String,
    /// Dose per administration
    pub dosage: String,
    /// How often it is taken
    pub frequency: String,
    /// Adherence percentage (60-100)
    pub adherence_percent: u32,
    /// Most recent dose
    pub last_taken: DateTime<Utc>,
}

/// Closed vocabulary of logged activities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Outdoor or indoor walk
    Walking,
    /// Stretching routine
    Stretching,
    /// Seated yoga
    ChairYoga,
    /// Gardening
    Gardening,
    /// Tai chi session
    TaiChi,
    /// Pool exercise class
    WaterAerobics,
}

impl ActivityType {
    /// Every activity type
    pub const ALL: [Self; 6] = [
        Self::Walking,
        Self::Stretching,
        Self::ChairYoga,
        Self::Gardening,
        Self::TaiChi,
        Self::WaterAerobics,
    ];

    /// Display name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Walking => "Walking",
            Self::Stretching => "Stretching",
            Self::ChairYoga => "Chair Yoga",
            Self::Gardening => "Gardening",
            Self::TaiChi => "Tai Chi",
            Self::WaterAerobics => "Water Aerobics",
        }
    }
}

/// Effort level of a logged activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Light effort
    Low,
    /// Moderate effort
    Moderate,
    /// Vigorous effort
    High,
}

impl Intensity {
    /// Every intensity level
    pub const ALL: [Self; 3] = [Self::Low, Self::Moderate, Self::High];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

/// One entry of the recent activity log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Day the activity happened
    pub date: NaiveDate,
    /// What was done
    pub activity_type: ActivityType,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Effort level
    pub intensity: Intensity,
}
