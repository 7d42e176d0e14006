// ABOUTME: Environment configuration for report generation defaults
// ABOUTME: Default window, family aggregation mode, and an optional fixed random seed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based report configuration
//!
//! ```bash
//! export CAREWATCH_DEFAULT_DAYS=14
//! export CAREWATCH_FAMILY_AGGREGATION=computed
//! export CAREWATCH_RANDOM_SEED=42
//! ```

use crate::assembler::ReportAssembler;
use carewatch_core::constants::windows;
use carewatch_core::errors::{AppError, AppResult};
use carewatch_core::models::FamilyAggregation;
use carewatch_intelligence::GenerationContext;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, info};

/// Default report window in days
pub const DEFAULT_DAYS_VAR: &str = "CAREWATCH_DEFAULT_DAYS";
/// Family aggregation mode (`synthetic` or `computed`)
pub const FAMILY_AGGREGATION_VAR: &str = "CAREWATCH_FAMILY_AGGREGATION";
/// Fixed seed for reproducible reports
pub const RANDOM_SEED_VAR: &str = "CAREWATCH_RANDOM_SEED";

/// Report generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Window used when the caller does not pass one
    pub default_days: u32,
    /// How family aggregates are produced
    pub family_aggregation: FamilyAggregation,
    /// Seed for reproducible output; entropy when absent
    pub random_seed: Option<u64>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_days: windows::DEFAULT_REPORT_DAYS,
            family_aggregation: FamilyAggregation::default(),
            random_seed: None,
        }
    }
}

impl ReportConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a variable is set but malformed
    pub fn from_env() -> AppResult<Self> {
        let config = Self::from_lookup(|name| env::var(name).ok())?;
        info!(
            default_days = config.default_days,
            aggregation = config.family_aggregation.as_str(),
            seeded = config.random_seed.is_some(),
            "Report configuration loaded"
        );
        Ok(config)
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a variable is set but malformed
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(DEFAULT_DAYS_VAR) {
            config.default_days = raw.trim().parse().map_err(|e| {
                AppError::config(format!("Invalid {DEFAULT_DAYS_VAR} value '{raw}'"))
                    .with_source(e)
            })?;
        }

        if let Some(raw) = lookup(FAMILY_AGGREGATION_VAR) {
            config.family_aggregation = FamilyAggregation::parse(&raw).ok_or_else(|| {
                AppError::config(format!(
                    "Invalid {FAMILY_AGGREGATION_VAR} value '{raw}' (expected synthetic or computed)"
                ))
            })?;
        }

        if let Some(raw) = lookup(RANDOM_SEED_VAR) {
            let seed = raw.trim().parse().map_err(|e| {
                AppError::config(format!("Invalid {RANDOM_SEED_VAR} value '{raw}'")).with_source(e)
            })?;
            config.random_seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the default window is zero
    pub fn validate(&self) -> AppResult<()> {
        if self.default_days == 0 {
            return Err(AppError::config(format!(
                "{DEFAULT_DAYS_VAR} must be at least 1"
            )));
        }
        Ok(())
    }

    /// Generation context honouring the configured seed
    #[must_use]
    pub fn generation_context(&self) -> GenerationContext {
        self.random_seed.map_or_else(GenerationContext::from_entropy, |seed| {
            debug!(seed, "Using fixed random seed");
            GenerationContext::seeded(seed)
        })
    }

    /// Assembler configured with this aggregation mode
    #[must_use]
    pub fn assembler(&self) -> ReportAssembler {
        ReportAssembler::new().with_aggregation(self.family_aggregation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = ReportConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.default_days, 30);
    }

    #[test]
    fn test_all_variables_applied() {
        let config = ReportConfig::from_lookup(lookup_from(&[
            (DEFAULT_DAYS_VAR, "14"),
            (FAMILY_AGGREGATION_VAR, "Computed"),
            (RANDOM_SEED_VAR, "42"),
        ]))
        .unwrap();
        assert_eq!(config.default_days, 14);
        assert_eq!(config.family_aggregation, FamilyAggregation::Computed);
        assert_eq!(config.random_seed, Some(42));
    }

    #[test]
    fn test_zero_days_rejected() {
        assert!(ReportConfig::from_lookup(lookup_from(&[(DEFAULT_DAYS_VAR, "0")])).is_err());
    }

    #[test]
    fn test_unknown_aggregation_rejected() {
        let err = ReportConfig::from_lookup(lookup_from(&[(FAMILY_AGGREGATION_VAR, "average")]))
            .unwrap_err();
        assert!(err.to_string().contains(FAMILY_AGGREGATION_VAR));
    }
}
