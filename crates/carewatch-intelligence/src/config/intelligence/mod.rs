// ABOUTME: Intelligence configuration for synthesis, insight, alert, and recommendation engines
// ABOUTME: Global validated singleton with environment variable overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Defaults reproduce the documented rule thresholds exactly. A handful of
//! thresholds can be overridden from the environment:
//!
//! ```bash
//! export CAREWATCH_HR_ELEVATED_BPM=90
//! export CAREWATCH_LOW_STEPS_THRESHOLD=800
//! export CAREWATCH_ADHERENCE_CONCERN_PERCENT=65
//! export CAREWATCH_TREND_WINDOW_DAYS=5
//! export CAREWATCH_ALERT_HR_LIMIT_BPM=105
//! ```

mod alerts;
mod error;
mod insights;
mod recommendation;
mod synthesis;

pub use alerts::AlertThresholds;
pub use error::ConfigError;
pub use insights::InsightThresholds;
pub use recommendation::{
    RecommendationEngineConfig, RecommendationMessages, RecommendationThresholds,
};
pub use synthesis::{StatusBaseline, SynthesisConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<CareIntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareIntelligenceConfig {
    /// Series shape for the metrics synthesizer
    pub synthesis: SynthesisConfig,
    /// Insight rule thresholds
    pub insights: InsightThresholds,
    /// Alert rule thresholds
    pub alerts: AlertThresholds,
    /// Recommendation nudges
    pub recommendations: RecommendationEngineConfig,
}

impl CareIntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable is not a valid number or
    /// the resulting thresholds fail validation
    pub fn load() -> Result<Self, ConfigError> {
        Self::default().apply_overrides(|name| env::var(name).ok())
    }

    /// Apply overrides from a variable lookup, then validate
    ///
    /// # Errors
    ///
    /// Returns an error if a value does not parse or validation fails
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        override_value(
            &lookup,
            "CAREWATCH_HR_ELEVATED_BPM",
            &mut self.insights.elevated_heart_rate,
        )?;
        override_value(
            &lookup,
            "CAREWATCH_LOW_STEPS_THRESHOLD",
            &mut self.insights.low_steps,
        )?;
        override_value(
            &lookup,
            "CAREWATCH_ADHERENCE_CONCERN_PERCENT",
            &mut self.insights.adherence_concern_percent,
        )?;
        override_value(
            &lookup,
            "CAREWATCH_TREND_WINDOW_DAYS",
            &mut self.insights.trend_window_days,
        )?;
        override_value(
            &lookup,
            "CAREWATCH_ALERT_HR_LIMIT_BPM",
            &mut self.alerts.heart_rate_limit,
        )?;

        self.validate()?;
        Ok(self)
    }

    /// Validate threshold ordering and ranges
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let insights = &self.insights;
        if insights.fitness_heart_rate >= insights.elevated_heart_rate {
            return Err(ConfigError::InvalidRange(
                "fitness heart rate must be below elevated heart rate",
            ));
        }
        if insights.low_steps >= insights.high_steps {
            return Err(ConfigError::InvalidRange(
                "low steps threshold must be below high steps threshold",
            ));
        }
        if insights.poor_sleep_hours >= insights.healthy_sleep_hours {
            return Err(ConfigError::InvalidRange(
                "poor sleep threshold must be below healthy sleep threshold",
            ));
        }
        if insights.adherence_concern_percent >= insights.adherence_excellent_percent {
            return Err(ConfigError::InvalidRange(
                "adherence concern threshold must be below adherence excellent threshold",
            ));
        }
        if !(0.0..=100.0).contains(&insights.adherence_concern_percent)
            || !(0.0..=100.0).contains(&insights.adherence_excellent_percent)
        {
            return Err(ConfigError::ValueOutOfRange(
                "adherence thresholds must be between 0 and 100",
            ));
        }
        if insights.trend_window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "trend window must cover at least one day",
            ));
        }
        if insights.trend_decrease_ratio >= 1.0 || insights.trend_increase_ratio <= 1.0 {
            return Err(ConfigError::InvalidRange(
                "trend ratios must straddle 1.0",
            ));
        }

        let alerts = &self.alerts;
        if alerts.heart_rate_window == 0
            || alerts.blood_pressure_window == 0
            || alerts.activity_window == 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "alert windows must cover at least one day",
            ));
        }
        if alerts.heart_rate_lookback_hours <= 0 || alerts.blood_pressure_lookback_hours <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "alert look-back must be positive",
            ));
        }

        let synthesis = &self.synthesis;
        if synthesis.systolic_range.0 >= synthesis.systolic_range.1
            || synthesis.diastolic_range.0 >= synthesis.diastolic_range.1
        {
            return Err(ConfigError::InvalidRange(
                "blood pressure ranges must have min below max",
            ));
        }
        if [
            synthesis.heart_rate_variance,
            synthesis.steps_variance,
            synthesis.temperature_variance,
            synthesis.sleep_variance,
            synthesis.weight_variance,
        ]
        .iter()
        .any(|variance| *variance < 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "series variance cannot be negative",
            ));
        }

        Ok(())
    }
}

fn override_value<F, T>(lookup: &F, name: &str, target: &mut T) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(raw) = lookup(name) {
        *target = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("{name}={raw} is not a valid number")))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(CareIntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_override_applies_value() {
        let config = CareIntelligenceConfig::default()
            .apply_overrides(lookup_from(&[("CAREWATCH_HR_ELEVATED_BPM", "92")]))
            .unwrap();
        assert!((config.insights.elevated_heart_rate - 92.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unparseable_override_is_rejected() {
        let result = CareIntelligenceConfig::default()
            .apply_overrides(lookup_from(&[("CAREWATCH_TREND_WINDOW_DAYS", "week")]));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_override_breaking_ordering_is_rejected() {
        let result = CareIntelligenceConfig::default()
            .apply_overrides(lookup_from(&[("CAREWATCH_HR_ELEVATED_BPM", "55")]));
        assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
    }
}
