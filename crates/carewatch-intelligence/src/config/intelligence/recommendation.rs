// ABOUTME: Recommendation engine configuration for care actions
// ABOUTME: Configures nudge thresholds and message templates appended after the status list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Engine Configuration
//!
//! The four status-keyed recommendations are fixed; only the conditional
//! nudges appended after them are configurable.

use serde::{Deserialize, Serialize};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEngineConfig {
    /// Threshold values for triggering nudges
    pub thresholds: RecommendationThresholds,
    /// Template messages for nudges
    pub messages: RecommendationMessages,
}

/// Thresholds for triggering conditional recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Mean steps below this adds the activity nudge
    pub activity_nudge_steps: f64,
    /// Adherence below this adds the adherence nudge (%)
    pub adherence_nudge_percent: f64,
}

/// Template messages for conditional recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationMessages {
    /// Appended when activity is low
    pub activity_nudge: String,
    /// Appended when adherence is low
    pub adherence_nudge: String,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            activity_nudge_steps: 1500.0,
            adherence_nudge_percent: 85.0,
        }
    }
}

impl Default for RecommendationMessages {
    fn default() -> Self {
        Self {
            activity_nudge: "Encourage short daily walks or chair exercises to gradually raise activity levels".into(),
            adherence_nudge: "Set up automated medication reminders or a weekly pill organizer to improve adherence".into(),
        }
    }
}
