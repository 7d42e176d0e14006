// ABOUTME: Health intelligence engines for the Carewatch report pipeline
// ABOUTME: Metric synthesis, insight rules, alert detection, care recommendations, and care samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Carewatch Intelligence
//!
//! The analysis half of the report pipeline. Given a subject and a
//! [`GenerationContext`], these engines produce the metric series and the
//! statements derived from it. None of them perform I/O; randomness and the
//! clock both come from the context.

// Re-export carewatch-core modules so engine files can keep short paths
pub use carewatch_core::constants;
pub use carewatch_core::errors;
pub use carewatch_core::models;

/// Configuration for every engine in this crate
pub mod config;
/// Per-call random source and clock
pub mod context;

/// Threshold-breach alert detection
pub mod alerts;
/// Rule-based observational insights
pub mod insights;
/// Status-driven care recommendations
pub mod recommendation_engine;
/// Medication and activity sample builders
pub mod samples;
/// Synthetic daily metric series
pub mod synthesizer;

pub use alerts::{AlertDetector, AlertRule};
pub use config::CareIntelligenceConfig;
pub use context::GenerationContext;
pub use insights::{Insight, InsightEngine, InsightInputs, InsightKind, InsightRule};
pub use recommendation_engine::{status_recommendations, RecommendationEngine};
pub use samples::{build_activities, build_medications, prescriptions_for, Prescription};
pub use synthesizer::{series_adherence, MetricsSynthesizer};
