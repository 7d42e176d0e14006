// ABOUTME: Care recommendation engine mapping status and metrics to ordered care actions
// ABOUTME: Fixed four-item status list followed by activity and adherence nudges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Care recommendation engine
//!
//! Output order: the status list in its fixed order, then the activity nudge,
//! then the adherence nudge. The list therefore always has 4, 5 or 6 entries.

use crate::config::intelligence::RecommendationEngineConfig;
use crate::config::CareIntelligenceConfig;
use carewatch_core::models::{HealthStatus, MetricSeries, Subject};
use tracing::debug;

const CRITICAL_RECOMMENDATIONS: [&str; 4] = [
    "Schedule an urgent consultation with the primary care physician",
    "Increase vital-sign monitoring to several checks per day",
    "Review all current medications with a pharmacist",
    "Confirm an emergency response plan and contacts are in place",
];

const WARNING_RECOMMENDATIONS: [&str; 4] = [
    "Schedule a check-up with the primary care physician within two weeks",
    "Monitor blood pressure and heart rate daily",
    "Review the daily routine for hydration and balanced meals",
    "Increase the frequency of caregiver check-in calls",
];

const GOOD_RECOMMENDATIONS: [&str; 4] = [
    "Continue the current care routine",
    "Keep up regular weekly check-ins",
    "Encourage social activities and hobbies",
    "Stay current with routine preventive screenings",
];

const EXCELLENT_RECOMMENDATIONS: [&str; 4] = [
    "Keep up the excellent health habits",
    "Consider new activities or classes to stay engaged",
    "Maintain the regular exercise routine",
    "Continue annual wellness visits",
];

/// Fixed recommendations for a status category, in order
#[must_use]
pub const fn status_recommendations(status: HealthStatus) -> &'static [&'static str; 4] {
    match status {
        HealthStatus::Critical => &CRITICAL_RECOMMENDATIONS,
        HealthStatus::Warning => &WARNING_RECOMMENDATIONS,
        HealthStatus::Good => &GOOD_RECOMMENDATIONS,
        HealthStatus::Excellent => &EXCELLENT_RECOMMENDATIONS,
    }
}

/// Care recommendation engine
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    config: RecommendationEngineConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine with the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: CareIntelligenceConfig::global().recommendations.clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: RecommendationEngineConfig) -> Self {
        Self { config }
    }

    /// Derive the ordered recommendation list
    #[must_use]
    pub fn derive_recommendations(&self, subject: &Subject, metrics: &MetricSeries) -> Vec<String> {
        let mut recommendations: Vec<String> = status_recommendations(subject.status)
            .iter()
            .map(|&text| text.to_owned())
            .collect();

        let thresholds = &self.config.thresholds;
        let activity_nudge = metrics.mean_steps() < thresholds.activity_nudge_steps;
        let adherence_nudge = metrics.medication_adherence < thresholds.adherence_nudge_percent;

        if activity_nudge {
            recommendations.push(self.config.messages.activity_nudge.clone());
        }
        if adherence_nudge {
            recommendations.push(self.config.messages.adherence_nudge.clone());
        }

        debug!(
            subject_id = %subject.id,
            status = %subject.status,
            activity_nudge,
            adherence_nudge,
            "Derived recommendations"
        );

        recommendations
    }
}
