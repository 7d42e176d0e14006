// ABOUTME: Output format abstraction dispatching assembled reports to their renderers
// ABOUTME: HTML document, JSON (and optional TOON) structured export, and CSV tabular export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Report Exporters
//!
//! Exporters are pure functions of a finished report. They never mutate it
//! and never read the clock, so exporting the same report twice gives the
//! same bytes.
//!
//! ## Supported Formats
//!
//! - **Document**: self-contained HTML with embedded styles
//! - **JSON**: lossless structured export, decodable back into the report
//! - **TOON**: token-efficient structured export (`toon` feature)
//! - **CSV**: one row per day, single-subject reports only
//!
//! ## Usage
//!
//! ```rust,ignore
//! use carewatch_reports::exporters::{export_report, ExportFormat};
//!
//! let exported = export_report((&report).into(), ExportFormat::Csv)?;
//! std::fs::write(&exported.file_name, exported.content)?;
//! ```

/// HTML document renderer
pub mod document;
/// JSON and TOON encoders and decoders
pub mod structured;
/// CSV renderer
pub mod tabular;

use carewatch_core::models::ReportRef;
use carewatch_core::ReportError;
use std::fmt;
use tracing::debug;

/// Export format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    /// Styled HTML document (default)
    #[default]
    Document,
    /// Lossless JSON
    Json,
    /// Token-Oriented Object Notation
    #[cfg(feature = "toon")]
    Toon,
    /// Comma-separated daily metrics
    Csv,
}

impl ExportFormat {
    /// Parse format from a string parameter (case-insensitive)
    ///
    /// Accepts `html` as an alias for `document`.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "document" | "html" => Some(Self::Document),
            "json" => Some(Self::Json),
            #[cfg(feature = "toon")]
            "toon" => Some(Self::Toon),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    /// MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Document => "text/html; charset=utf-8",
            Self::Json => "application/json",
            // TOON doesn't have an official MIME type yet, use vendor prefix
            #[cfg(feature = "toon")]
            Self::Toon => "application/vnd.toon",
            Self::Csv => "text/csv; charset=utf-8",
        }
    }

    /// Format name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Json => "json",
            #[cfg(feature = "toon")]
            Self::Toon => "toon",
            Self::Csv => "csv",
        }
    }

    /// File extension for suggested file names
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Document => "html",
            Self::Json => "json",
            #[cfg(feature = "toon")]
            Self::Toon => "toon",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendered report plus delivery metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedReport {
    /// Rendered content
    pub content: String,
    /// Format used for rendering
    pub format: ExportFormat,
    /// MIME content type
    pub content_type: &'static str,
    /// Suggested file name, e.g. `health-report-s-1-2025-06-01.csv`
    pub file_name: String,
}

/// Render a report in the requested format
///
/// # Errors
///
/// Returns `ReportError::UnsupportedExport` for CSV export of a family
/// report, and `ReportError::Serialization` when structured encoding fails
pub fn export_report(
    report: ReportRef<'_>,
    format: ExportFormat,
) -> Result<ExportedReport, ReportError> {
    let content = match format {
        ExportFormat::Document => document::render(report),
        ExportFormat::Json => structured::encode_json(report)?,
        #[cfg(feature = "toon")]
        ExportFormat::Toon => structured::encode_toon(report)?,
        ExportFormat::Csv => tabular::export_table(report)?,
    };

    debug!(
        kind = report.kind(),
        format = format.as_str(),
        bytes = content.len(),
        "Exported report"
    );

    Ok(ExportedReport {
        content,
        format,
        content_type: format.content_type(),
        file_name: suggested_file_name(report, format),
    })
}

/// Suggested file name for a report export
#[must_use]
pub fn suggested_file_name(report: ReportRef<'_>, format: ExportFormat) -> String {
    match report {
        ReportRef::Subject(report) => format!(
            "health-report-{}-{}.{}",
            file_safe(&report.subject.id),
            report.period.end,
            format.extension()
        ),
        ReportRef::Family(report) => format!(
            "family-health-report-{}.{}",
            report.period.end,
            format.extension()
        ),
    }
}

fn file_safe(text: &str) -> String {
    text.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '-'
            }
        })
        .collect()
}
