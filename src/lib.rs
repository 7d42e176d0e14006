// ABOUTME: Main library entry point for the Carewatch health report pipeline
// ABOUTME: Report assembly, document/structured/tabular exporters, configuration, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Carewatch Reports
//!
//! Generates health reports for people monitored by a remote elder-care
//! service. A report is synthesized from a subject and a day window, then
//! rendered as an HTML document, a lossless JSON value, or a CSV table.
//!
//! ## Architecture
//!
//! Data flows one way:
//! - **carewatch-intelligence**: synthesizer, insight/alert/recommendation engines, samples
//! - **assembler**: composes one report, a family report, or a batch
//! - **exporters**: document, structured and tabular renderings
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use carewatch_reports::assembler::ReportAssembler;
//! use carewatch_reports::exporters::{export_report, ExportFormat};
//! use carewatch_reports::models::{HealthStatus, Subject};
//! use carewatch_reports::GenerationContext;
//!
//! # fn main() -> carewatch_reports::errors::AppResult<()> {
//! let subject = Subject::new("s-1", "Margaret", 82, "Mother", HealthStatus::Warning);
//! let mut ctx = GenerationContext::seeded(42);
//! let report = ReportAssembler::new().assemble_report(&subject, 30, &mut ctx)?;
//! let exported = export_report((&report).into(), ExportFormat::Document)?;
//! println!("{}", exported.content);
//! # Ok(())
//! # }
//! ```

// Re-export core modules so callers need a single dependency
pub use carewatch_core::calendar;
pub use carewatch_core::constants;
pub use carewatch_core::errors;
pub use carewatch_core::models;

/// Report assembly for single subjects, families and batches
pub mod assembler;

/// Environment-driven report configuration
pub mod config;

/// Output renderers for assembled reports
pub mod exporters;

/// Structured logging setup
pub mod logging;

pub use assembler::ReportAssembler;
pub use carewatch_intelligence::GenerationContext;
pub use config::ReportConfig;
pub use exporters::{export_report, ExportFormat, ExportedReport};
