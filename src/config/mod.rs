// ABOUTME: Configuration module for report generation settings
// ABOUTME: Environment-driven defaults layered over the intelligence engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Carewatch reports
//!
//! - **Environment**: report defaults read from `CAREWATCH_*` variables
//! - **Intelligence**: rule thresholds, re-exported from `carewatch-intelligence`

/// Environment-based report configuration
pub mod environment;

pub use carewatch_intelligence::config::intelligence;
pub use carewatch_intelligence::CareIntelligenceConfig;
pub use environment::ReportConfig;
