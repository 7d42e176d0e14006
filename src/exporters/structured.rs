// ABOUTME: Structured JSON export and decode for both report kinds, plus optional TOON encoding
// ABOUTME: JSON output is lossless: decoding an encoded report yields an equal value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured exporter
//!
//! The JSON schema is the serde shape of [`Report`] and [`FamilyReport`]:
//! subject fields, metric arrays, period, and the derived lists. It carries
//! no version marker.

use carewatch_core::models::{FamilyReport, Report, ReportRef};
use carewatch_core::ReportError;
use serde::Serialize;

/// Encode either report kind as pretty-printed JSON
///
/// # Errors
///
/// Returns `ReportError::Serialization` if serialization fails
pub fn encode_json(report: ReportRef<'_>) -> Result<String, ReportError> {
    match report {
        ReportRef::Subject(report) => encode_report(report),
        ReportRef::Family(report) => encode_family_report(report),
    }
}

/// Encode a single-subject report as JSON
///
/// # Errors
///
/// Returns `ReportError::Serialization` if serialization fails
pub fn encode_report(report: &Report) -> Result<String, ReportError> {
    to_json(report)
}

/// Encode a family report as JSON
///
/// # Errors
///
/// Returns `ReportError::Serialization` if serialization fails
pub fn encode_family_report(report: &FamilyReport) -> Result<String, ReportError> {
    to_json(report)
}

/// Decode a single-subject report from JSON
///
/// # Errors
///
/// Returns `ReportError::Serialization` when the text is not a valid report,
/// including an unknown health status
pub fn decode_report(json: &str) -> Result<Report, ReportError> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a family report from JSON
///
/// # Errors
///
/// Returns `ReportError::Serialization` when the text is not a valid family report
pub fn decode_family_report(json: &str) -> Result<FamilyReport, ReportError> {
    Ok(serde_json::from_str(json)?)
}

/// Encode either report kind as TOON
///
/// # Errors
///
/// Returns `ReportError::Serialization` if conversion or encoding fails
#[cfg(feature = "toon")]
pub fn encode_toon(report: ReportRef<'_>) -> Result<String, ReportError> {
    // Convert to serde_json::Value first, then to TOON
    let value = match report {
        ReportRef::Subject(report) => serde_json::to_value(report)?,
        ReportRef::Family(report) => serde_json::to_value(report)?,
    };
    let options = toon_format::EncodeOptions::default();
    toon_format::encode(&value, &options).map_err(|e| ReportError::Serialization(e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(value)?)
}
