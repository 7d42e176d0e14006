// ABOUTME: Shared test utilities and fixtures for report pipeline integration tests
// ABOUTME: Provides seeded generation contexts, subject fixtures, hand-built series, and quiet logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `carewatch_reports`

use std::sync::Once;

use carewatch_reports::models::{BloodPressureReading, HealthStatus, MetricSeries, Subject};
use carewatch_reports::GenerationContext;
use chrono::{DateTime, TimeZone, Utc};

static INIT_LOGGER: Once = Once::new();

/// Seed shared by deterministic tests
pub const TEST_SEED: u64 = 42;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed generation instant used across tests
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap()
}

/// Deterministic context at the fixed instant
pub fn test_context() -> GenerationContext {
    context_with_seed(TEST_SEED)
}

/// Deterministic context with a custom seed at the fixed instant
pub fn context_with_seed(seed: u64) -> GenerationContext {
    init_test_logging();
    GenerationContext::new(seed, fixed_now())
}

/// Subject fixture for a status
pub fn subject(status: HealthStatus) -> Subject {
    let name = match status {
        HealthStatus::Excellent => "Eleanor",
        HealthStatus::Good => "George",
        HealthStatus::Warning => "Margaret",
        HealthStatus::Critical => "Walter",
    };
    Subject::new(
        format!("subject-{}", status.as_str()),
        name,
        80,
        "Parent",
        status,
    )
}

/// Family fixture with one member per listed status
pub fn family(statuses: &[HealthStatus]) -> Vec<Subject> {
    statuses
        .iter()
        .enumerate()
        .map(|(index, &status)| {
            let mut member = subject(status);
            member.id = format!("member-{index}");
            member
        })
        .collect()
}

/// Constant-valued series of `days` samples
pub fn flat_series(
    days: usize,
    heart_rate: f64,
    blood_pressure: (f64, f64),
    steps: u32,
) -> MetricSeries {
    MetricSeries {
        heart_rate: vec![heart_rate; days],
        blood_pressure: vec![
            BloodPressureReading {
                systolic: blood_pressure.0,
                diastolic: blood_pressure.1,
            };
            days
        ],
        steps: vec![steps; days],
        weight: vec![150.0; days],
        temperature: vec![98.4; days],
        sleep_hours: vec![7.5; days],
        medication_adherence: 85.0,
    }
}

/// Series with unremarkable values for every rule
pub fn neutral_series(days: usize) -> MetricSeries {
    flat_series(days, 72.0, (120.0, 80.0), 1500)
}
