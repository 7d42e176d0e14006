// ABOUTME: HTML document renderer for single-subject and family health reports
// ABOUTME: Self-contained page with embedded styles; all caller-supplied text is escaped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Document exporter
//!
//! Single-subject section order: header, health summary, alerts (only when
//! present), medications, insights, recommendations, recent activities,
//! generation footer.

use carewatch_core::constants::windows;
use carewatch_core::models::{FamilyReport, HealthStatus, Report, ReportPeriod, ReportRef};
use chrono::{DateTime, Utc};
use html_escape::encode_text;
use std::fmt::{self, Display, Formatter, Write};

const STYLE: &str = "\
body{font-family:-apple-system,'Segoe UI',Roboto,sans-serif;margin:0;background:#f5f7fa;color:#1f2933}\
main{max-width:880px;margin:0 auto;padding:32px}\
header{border-bottom:3px solid #3b82f6;padding-bottom:16px;margin-bottom:24px}\
h1{margin:0 0 8px;font-size:28px}h2{font-size:20px;margin:28px 0 12px}\
.subtitle{color:#52606d}\
.status{display:inline-block;padding:2px 10px;border-radius:12px;font-weight:600}\
.status-excellent{background:#d1fae5;color:#065f46}.status-good{background:#dbeafe;color:#1e40af}\
.status-warning{background:#fef3c7;color:#92400e}.status-critical{background:#fee2e2;color:#991b1b}\
.cards{display:grid;grid-template-columns:repeat(4,1fr);gap:12px}\
.card{background:#fff;border-radius:8px;padding:16px;box-shadow:0 1px 3px rgba(0,0,0,.08)}\
.card .value{font-size:24px;font-weight:700}.card .label{color:#52606d;font-size:13px}\
.alert{border-left:4px solid;padding:10px 14px;margin-bottom:8px;background:#fff}\
.alert-critical{border-color:#dc2626}.alert-warning{border-color:#f59e0b}.alert-info{border-color:#3b82f6}\
table{width:100%;border-collapse:collapse;background:#fff}\
th,td{text-align:left;padding:8px 12px;border-bottom:1px solid #e4e7eb}\
footer{margin-top:32px;color:#7b8794;font-size:12px}";

/// Render either report kind as an HTML page
#[must_use]
pub fn render(report: ReportRef<'_>) -> String {
    match report {
        ReportRef::Subject(report) => render_report(report),
        ReportRef::Family(report) => render_family_report(report),
    }
}

/// Render a single-subject report as an HTML page
#[must_use]
pub fn render_report(report: &Report) -> String {
    SubjectDocument(report).to_string()
}

/// Render a family report as an HTML page
#[must_use]
pub fn render_family_report(report: &FamilyReport) -> String {
    FamilyDocument(report).to_string()
}

struct SubjectDocument<'a>(&'a Report);

impl Display for SubjectDocument<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let subject = &report.subject;
        let name = encode_text(&subject.name);

        open_page(f, &format!("Health Report: {}", subject.name))?;

        writeln!(f, "<header>")?;
        writeln!(f, "<h1>Health Report: {name}</h1>")?;
        writeln!(
            f,
            "<p class=\"subtitle\">{}, age {} {}</p>",
            encode_text(&subject.relation),
            subject.age,
            StatusBadge(subject.status)
        )?;
        writeln!(f, "<p class=\"period\">{}</p>", PeriodText(&report.period))?;
        writeln!(f, "</header>")?;

        let metrics = &report.metrics;
        writeln!(f, "<section class=\"summary\">\n<h2>Health Summary</h2>")?;
        writeln!(f, "<div class=\"cards\">")?;
        card(f, "Average Heart Rate", format_args!("{:.0} bpm", metrics.mean_heart_rate()))?;
        card(f, "Average Daily Steps", format_args!("{:.0}", metrics.mean_steps()))?;
        card(f, "Average Sleep", format_args!("{:.1} h", metrics.mean_sleep_hours()))?;
        card(
            f,
            "Medication Adherence",
            format_args!("{:.0}%", metrics.medication_adherence),
        )?;
        writeln!(f, "</div>\n</section>")?;

        if !report.alerts.is_empty() {
            writeln!(f, "<section class=\"alerts\">\n<h2>Active Alerts</h2>")?;
            for alert in &report.alerts {
                writeln!(
                    f,
                    "<div class=\"alert alert-{}\"><strong>{}</strong> {} <span class=\"time\">{}</span></div>",
                    alert.severity.as_str(),
                    alert.severity.as_str().to_uppercase(),
                    encode_text(&alert.message),
                    Timestamp(&alert.timestamp)
                )?;
            }
            writeln!(f, "</section>")?;
        }

        writeln!(f, "<section class=\"medications\">\n<h2>Medications</h2>")?;
        writeln!(
            f,
            "<table>\n<tr><th>Medication</th><th>Dosage</th><th>Frequency</th><th>Adherence</th><th>Last Taken</th></tr>"
        )?;
        for medication in &report.medications {
            writeln!(
                f,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}%</td><td>{}</td></tr>",
                encode_text(&medication.name),
                encode_text(&medication.dosage),
                encode_text(&medication.frequency),
                medication.adherence_percent,
                Timestamp(&medication.last_taken)
            )?;
        }
        writeln!(f, "</table>\n</section>")?;

        statement_list(f, "insights", "Health Insights", &report.insights)?;
        statement_list(
            f,
            "recommendations",
            "Care Recommendations",
            &report.recommendations,
        )?;

        writeln!(f, "<section class=\"activities\">\n<h2>Recent Activities</h2>")?;
        writeln!(
            f,
            "<table>\n<tr><th>Date</th><th>Activity</th><th>Duration</th><th>Intensity</th></tr>"
        )?;
        for activity in report.activities.iter().take(windows::DOCUMENT_ACTIVITY_LIMIT) {
            writeln!(
                f,
                "<tr><td>{}</td><td>{}</td><td>{} min</td><td>{}</td></tr>",
                activity.date,
                activity.activity_type.display_name(),
                activity.duration_minutes,
                activity.intensity.as_str()
            )?;
        }
        writeln!(f, "</table>\n</section>")?;

        close_page(f, &report.generated_at)
    }
}

struct FamilyDocument<'a>(&'a FamilyReport);

impl Display for FamilyDocument<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let aggregates = &report.aggregates;
        let trends = &report.trends;

        open_page(f, "Family Health Report")?;

        writeln!(f, "<header>\n<h1>Family Health Report</h1>")?;
        writeln!(
            f,
            "<p class=\"subtitle\">{} members</p>\n<p class=\"period\">{}</p>\n</header>",
            report.subjects.len(),
            PeriodText(&report.period)
        )?;

        writeln!(f, "<section class=\"summary\">\n<h2>Family Overview</h2>")?;
        writeln!(f, "<div class=\"cards\">")?;
        card(
            f,
            "Average Health Score",
            format_args!("{}", aggregates.average_health_score),
        )?;
        card(f, "Total Alerts", format_args!("{}", aggregates.total_alerts))?;
        card(
            f,
            "Medication Adherence",
            format_args!("{}%", aggregates.average_medication_adherence),
        )?;
        card(
            f,
            "Emergency Incidents",
            format_args!("{}", aggregates.emergency_incidents),
        )?;
        writeln!(f, "</div>")?;
        writeln!(
            f,
            "<p class=\"satisfaction\">Caregiver satisfaction: {:.1} / 10</p>\n</section>",
            aggregates.satisfaction_score
        )?;

        writeln!(f, "<section class=\"trends\">\n<h2>Trends</h2>\n<ul>")?;
        writeln!(
            f,
            "<li>Health improvement: {:+.0}%</li>\n<li>Activity increase: {:+.0}%</li>\n<li>Medication adherence improvement: {:+.0}%</li>",
            trends.health_improvement_percent,
            trends.activity_increase_percent,
            trends.medication_improvement_percent
        )?;
        writeln!(f, "</ul>\n</section>")?;

        writeln!(f, "<section class=\"members\">\n<h2>Family Members</h2>")?;
        writeln!(
            f,
            "<table>\n<tr><th>Name</th><th>Relation</th><th>Age</th><th>Status</th></tr>"
        )?;
        for subject in &report.subjects {
            writeln!(
                f,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                encode_text(&subject.name),
                encode_text(&subject.relation),
                subject.age,
                StatusBadge(subject.status)
            )?;
        }
        writeln!(f, "</table>\n</section>")?;

        statement_list(f, "insights", "Family Insights", &report.insights)?;
        statement_list(
            f,
            "recommendations",
            "Family Recommendations",
            &report.recommendations,
        )?;

        close_page(f, &report.generated_at)
    }
}

struct StatusBadge(HealthStatus);

impl Display for StatusBadge {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<span class=\"status status-{}\">{}</span>",
            self.0.as_str(),
            self.0.label()
        )
    }
}

struct PeriodText<'a>(&'a ReportPeriod);

impl Display for PeriodText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Report period: {} to {}",
            self.0.start.format("%B %-d, %Y"),
            self.0.end.format("%B %-d, %Y")
        )
    }
}

struct Timestamp<'a>(&'a DateTime<Utc>);

impl Display for Timestamp<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M UTC"))
    }
}

fn open_page<W: Write>(out: &mut W, title: &str) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">")?;
    writeln!(
        out,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
    )?;
    writeln!(out, "<title>{}</title>", encode_text(title))?;
    writeln!(out, "<style>{STYLE}</style>\n</head>\n<body>\n<main>")
}

fn close_page<W: Write>(out: &mut W, generated_at: &DateTime<Utc>) -> fmt::Result {
    writeln!(
        out,
        "<footer>Generated {}</footer>",
        Timestamp(generated_at)
    )?;
    writeln!(out, "</main>\n</body>\n</html>")
}

fn card<W: Write>(out: &mut W, label: &str, value: fmt::Arguments<'_>) -> fmt::Result {
    writeln!(
        out,
        "<div class=\"card\"><div class=\"value\">{value}</div><div class=\"label\">{label}</div></div>"
    )
}

fn statement_list<W: Write>(
    out: &mut W,
    class: &str,
    heading: &str,
    statements: &[String],
) -> fmt::Result {
    writeln!(out, "<section class=\"{class}\">\n<h2>{heading}</h2>\n<ul>")?;
    for statement in statements {
        writeln!(out, "<li>{}</li>", encode_text(statement))?;
    }
    writeln!(out, "</ul>\n</section>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_list_escapes_markup() {
        let mut html = String::new();
        statement_list(
            &mut html,
            "insights",
            "Health Insights",
            &["<b>bold</b> & more".to_owned()],
        )
        .unwrap();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; more"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_status_badge_class() {
        assert_eq!(
            StatusBadge(HealthStatus::Critical).to_string(),
            "<span class=\"status status-critical\">Critical</span>"
        );
    }
}
