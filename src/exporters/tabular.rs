// ABOUTME: CSV renderer emitting one row of daily metrics per day, oldest first
// ABOUTME: Single-subject only; row dates come from the shared series calendar
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use carewatch_core::calendar::SeriesCalendar;
use carewatch_core::constants::TABULAR_HEADER;
use carewatch_core::models::{Report, ReportRef};
use carewatch_core::ReportError;
use std::fmt::{self, Display, Formatter, Write};

/// Render a report as CSV, rejecting family reports
///
/// # Errors
///
/// Returns `ReportError::UnsupportedExport` for a family report
pub fn export_table(report: ReportRef<'_>) -> Result<String, ReportError> {
    match report {
        ReportRef::Subject(report) => Ok(render_table(report)),
        ReportRef::Family(_) => Err(ReportError::UnsupportedExport {
            format: "csv",
            report_kind: report.kind(),
        }),
    }
}

/// Render the daily metric series as CSV: header plus one row per day
#[must_use]
pub fn render_table(report: &Report) -> String {
    let metrics = &report.metrics;
    let days = metrics.days();
    let calendar = SeriesCalendar::new(report.period.end, days as u32);

    let mut table = String::with_capacity(TABULAR_HEADER.len() + days * 64);
    table.push_str(TABULAR_HEADER);
    table.push('\n');

    for (index, date) in calendar.dates().enumerate().take(days) {
        let reading = metrics.blood_pressure.get(index);
        // Writing into a String cannot fail
        let _ = writeln!(
            table,
            "{date},{},{},{},{},{},{},{}",
            Cell(metrics.heart_rate.get(index)),
            Cell(reading.map(|bp| &bp.systolic)),
            Cell(reading.map(|bp| &bp.diastolic)),
            Cell(metrics.steps.get(index)),
            Cell(metrics.weight.get(index)),
            Cell(metrics.temperature.get(index)),
            Cell(metrics.sleep_hours.get(index)),
        );
    }

    table
}

/// A CSV cell that is empty when the series is shorter than the window
struct Cell<'a, T>(Option<&'a T>);

impl<T: Display> Display for Cell<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => Ok(()),
        }
    }
}
