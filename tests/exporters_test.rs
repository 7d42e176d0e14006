// ABOUTME: Integration tests for document, structured, and tabular report exporters
// ABOUTME: JSON round-trips, CSV shape and dates, family CSV rejection, and HTML section order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use carewatch_core::ReportError;
use carewatch_reports::constants::TABULAR_HEADER;
use carewatch_reports::exporters::structured::{
    decode_family_report, decode_report, encode_family_report, encode_report,
};
use carewatch_reports::exporters::{document, export_report, tabular, ExportFormat};
use carewatch_reports::models::{
    Alert, AlertSeverity, FamilyReport, HealthStatus, Report, ReportRef,
};
use carewatch_reports::ReportAssembler;
use common::{family, subject, test_context};

fn report(status: HealthStatus, days: i64) -> Report {
    ReportAssembler::new()
        .assemble_report(&subject(status), days, &mut test_context())
        .unwrap()
}

fn family_report() -> FamilyReport {
    ReportAssembler::new()
        .assemble_family_report(
            &family(&[HealthStatus::Warning, HealthStatus::Good]),
            &mut test_context(),
        )
        .unwrap()
}

#[test]
fn test_json_round_trip_is_lossless() {
    for status in HealthStatus::ALL {
        let original = report(status, 10);
        let decoded = decode_report(&encode_report(&original).unwrap()).unwrap();
        assert_eq!(decoded, original);
    }
}

#[test]
fn test_family_json_round_trip_is_lossless() {
    let original = family_report();
    let decoded = decode_family_report(&encode_family_report(&original).unwrap()).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_json_carries_subject_metrics_and_derived_lists() {
    let exported = export_report((&report(HealthStatus::Critical, 10)).into(), ExportFormat::Json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&exported.content).unwrap();

    assert_eq!(value["subject"]["status"], "critical");
    assert_eq!(value["metrics"]["heart_rate"].as_array().unwrap().len(), 10);
    assert_eq!(value["period"]["end"], "2025-06-01");
    for key in ["insights", "recommendations", "alerts", "medications"] {
        assert!(value[key].is_array(), "{key} missing");
    }
    assert_eq!(exported.content_type, "application/json");
}

#[test]
fn test_decode_rejects_unknown_status() {
    let encoded = encode_report(&report(HealthStatus::Good, 5)).unwrap();
    let tampered = encoded.replace("\"good\"", "\"stable\"");
    assert!(matches!(
        decode_report(&tampered),
        Err(ReportError::Serialization(_))
    ));
}

#[test]
fn test_csv_has_header_and_one_row_per_day() {
    for days in [1, 7, 30] {
        let table = tabular::render_table(&report(HealthStatus::Warning, days));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), days as usize + 1);
        assert_eq!(lines[0], TABULAR_HEADER);
        assert!(lines[1..].iter().all(|line| line.split(',').count() == 8));
    }
}

#[test]
fn test_csv_rows_run_oldest_to_today() {
    let original = report(HealthStatus::Good, 10);
    let table = tabular::render_table(&original);
    let lines: Vec<&str> = table.lines().collect();

    assert!(lines[1].starts_with("2025-05-23,"));
    assert!(lines[10].starts_with("2025-06-01,"));

    let first_row: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(first_row[1], original.metrics.heart_rate[0].to_string());
    assert_eq!(first_row[4], original.metrics.steps[0].to_string());
}

#[test]
fn test_csv_rejects_family_report() {
    let family = family_report();
    let result = export_report(ReportRef::Family(&family), ExportFormat::Csv);
    assert_eq!(
        result,
        Err(ReportError::UnsupportedExport {
            format: "csv",
            report_kind: "family",
        })
    );
}

#[test]
fn test_document_sections_in_order() {
    let mut original = report(HealthStatus::Critical, 30);
    if original.alerts.is_empty() {
        original.alerts = vec![Alert {
            severity: AlertSeverity::Warning,
            message: "Blood pressure above the healthy range".to_owned(),
            timestamp: original.generated_at,
        }];
    }
    let html = document::render_report(&original);

    let headings = [
        "<header>",
        "<h2>Health Summary</h2>",
        "<h2>Active Alerts</h2>",
        "<h2>Medications</h2>",
        "<h2>Health Insights</h2>",
        "<h2>Care Recommendations</h2>",
        "<h2>Recent Activities</h2>",
        "<footer>Generated 2025-06-01 09:30 UTC</footer>",
    ];
    let positions: Vec<usize> = headings
        .iter()
        .map(|heading| html.find(heading).unwrap_or_else(|| panic!("{heading} missing")))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<style>"));
}

#[test]
fn test_document_omits_empty_alerts_and_limits_activities() {
    let mut original = report(HealthStatus::Good, 14);
    original.alerts.clear();
    let html = document::render_report(&original);

    assert!(!html.contains("Active Alerts"));
    let activity_section = &html[html.find("Recent Activities").unwrap()..];
    // Header row plus six activities
    assert_eq!(activity_section.matches("<tr>").count(), 7);
}

#[test]
fn test_document_escapes_caller_text() {
    let mut person = subject(HealthStatus::Good);
    person.name = "<script>alert('x')</script>".to_owned();
    person.relation = "Aunt & Uncle".to_owned();
    let original = ReportAssembler::new()
        .assemble_report(&person, 7, &mut test_context())
        .unwrap();

    let html = document::render_report(&original);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("Aunt &amp; Uncle"));
}

#[test]
fn test_family_document_lists_members_and_aggregates() {
    let exported = export_report((&family_report()).into(), ExportFormat::Document).unwrap();
    let html = exported.content;

    assert!(html.contains("<h1>Family Health Report</h1>"));
    assert!(html.contains("Margaret"));
    assert!(html.contains("George"));
    assert!(html.contains("<h2>Family Insights</h2>"));
    assert!(html.contains("9.4 / 10"));
    assert_eq!(exported.file_name, "family-health-report-2025-06-01.html");
}

#[test]
fn test_export_metadata() {
    let original = report(HealthStatus::Good, 5);
    let exported = export_report((&original).into(), ExportFormat::Csv).unwrap();
    assert_eq!(exported.format, ExportFormat::Csv);
    assert_eq!(exported.content_type, "text/csv; charset=utf-8");
    assert_eq!(exported.file_name, "health-report-subject-good-2025-06-01.csv");
}

#[test]
fn test_exports_are_repeatable() {
    let original = report(HealthStatus::Warning, 12);
    for format in [ExportFormat::Document, ExportFormat::Json, ExportFormat::Csv] {
        let first = export_report((&original).into(), format).unwrap();
        let second = export_report((&original).into(), format).unwrap();
        assert_eq!(first, second);
    }
}
