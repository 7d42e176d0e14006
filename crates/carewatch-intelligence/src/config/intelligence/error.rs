// ABOUTME: Configuration error types for intelligence threshold validation
// ABOUTME: Defines error variants for invalid ranges, parse failures, and bad env values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for intelligence threshold validation.

use carewatch_core::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Lower and upper thresholds are in the wrong order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
