// ABOUTME: Report assembler composing synthesis and rule engines into complete reports
// ABOUTME: Single-subject reports, family aggregates (synthetic or computed), and parallel batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Report Assembler
//!
//! The only component that sees every engine. It validates the window before
//! any synthesis, runs the engines in a fixed order against one
//! [`GenerationContext`], and stamps the period and generation instant.
//!
//! Family reports support two aggregation modes. `Synthetic` keeps fixed
//! demo totals; `Computed` generates one report per member and derives the
//! alert, adherence and incident totals from them.

use carewatch_core::calendar::SeriesCalendar;
use carewatch_core::constants::{family_placeholders, windows};
use carewatch_core::models::{
    mean, AlertSeverity, FamilyAggregates, FamilyAggregation, FamilyReport, HealthStatus, Report,
    ReportPeriod, Subject, TrendDeltas,
};
use carewatch_core::ReportError;
use carewatch_intelligence::samples::{build_activities, build_medications};
use carewatch_intelligence::{
    AlertDetector, CareIntelligenceConfig, GenerationContext, InsightEngine, MetricsSynthesizer,
    RecommendationEngine,
};
use chrono::{DateTime, Utc};
use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, info, instrument};

/// Care actions appended to every family report
const FAMILY_CARE_ACTIONS: [&str; 3] = [
    "Hold a monthly family care review to share observations",
    "Keep emergency contacts and care plans up to date for every member",
    "Coordinate medication schedules across all caregivers",
];

/// Composes engines into single-subject and family reports
#[derive(Debug, Clone)]
pub struct ReportAssembler {
    synthesizer: MetricsSynthesizer,
    insights: InsightEngine,
    alerts: AlertDetector,
    recommendations: RecommendationEngine,
    aggregation: FamilyAggregation,
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportAssembler {
    /// Create an assembler backed by the global intelligence configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CareIntelligenceConfig::global())
    }

    /// Create an assembler from an explicit intelligence configuration
    #[must_use]
    pub fn with_config(config: &CareIntelligenceConfig) -> Self {
        Self {
            synthesizer: MetricsSynthesizer::with_config(config.synthesis.clone()),
            insights: InsightEngine::with_config(config.insights.clone()),
            alerts: AlertDetector::with_config(config.alerts.clone()),
            recommendations: RecommendationEngine::with_config(config.recommendations.clone()),
            aggregation: FamilyAggregation::default(),
        }
    }

    /// Select how family aggregates are produced
    #[must_use]
    pub const fn with_aggregation(mut self, aggregation: FamilyAggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    /// Aggregation mode used for family reports
    #[must_use]
    pub const fn aggregation(&self) -> FamilyAggregation {
        self.aggregation
    }

    /// Assemble a report covering the last `days` days for one subject
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidWindow` when `days` is below one or does
    /// not fit a day count. Nothing is synthesized in that case.
    #[instrument(skip(self, subject, ctx), fields(subject_id = %subject.id))]
    pub fn assemble_report(
        &self,
        subject: &Subject,
        days: i64,
        ctx: &mut GenerationContext,
    ) -> Result<Report, ReportError> {
        let days = validate_window(days)?;

        let metrics = self.synthesizer.synthesize(subject, days, ctx)?;
        let insights = self.insights.derive_statements(subject, &metrics);
        let alerts = self.alerts.derive_alerts(subject, &metrics, ctx);
        let recommendations = self.recommendations.derive_recommendations(subject, &metrics);
        let medications = build_medications(subject, ctx);
        let activities = build_activities(&metrics, ctx);

        let calendar = SeriesCalendar::new(ctx.today(), days);
        let report = Report {
            subject: subject.clone(),
            metrics,
            period: ReportPeriod {
                start: calendar.period_start(),
                end: calendar.today(),
            },
            insights,
            recommendations,
            alerts,
            medications,
            activities,
            generated_at: ctx.now(),
        };

        info!(
            subject_id = %subject.id,
            status = %subject.status,
            days,
            insights = report.insights.len(),
            alerts = report.alerts.len(),
            recommendations = report.recommendations.len(),
            "Assembled report"
        );

        Ok(report)
    }

    /// Assemble one report per subject in parallel
    ///
    /// Each subject gets its own random stream derived from `seed`, and every
    /// report shares the same generation instant. Output order matches input
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidWindow` when `days` is below one
    pub fn assemble_reports(
        &self,
        subjects: &[Subject],
        days: i64,
        seed: u64,
        now: DateTime<Utc>,
    ) -> Result<Vec<Report>, ReportError> {
        validate_window(days)?;

        subjects
            .par_iter()
            .enumerate()
            .map(|(index, subject)| {
                let mut ctx = GenerationContext::for_member(seed, index, now);
                self.assemble_report(subject, days, &mut ctx)
            })
            .collect()
    }

    /// Assemble a family report covering the last 30 days
    ///
    /// # Errors
    ///
    /// Returns `ReportError::EmptyFamily` when `subjects` is empty
    #[instrument(skip(self, subjects, ctx), fields(members = subjects.len()))]
    pub fn assemble_family_report(
        &self,
        subjects: &[Subject],
        ctx: &mut GenerationContext,
    ) -> Result<FamilyReport, ReportError> {
        if subjects.is_empty() {
            return Err(ReportError::EmptyFamily);
        }

        let average_health_score = average_health_score(subjects);
        let aggregates = match self.aggregation {
            FamilyAggregation::Synthetic => synthetic_aggregates(average_health_score),
            FamilyAggregation::Computed => {
                let member_seed: u64 = ctx.rng().gen();
                let reports = self.assemble_reports(
                    subjects,
                    i64::from(windows::FAMILY_REPORT_DAYS),
                    member_seed,
                    ctx.now(),
                )?;
                computed_aggregates(average_health_score, &reports)
            }
        };

        let calendar = SeriesCalendar::new(ctx.today(), windows::FAMILY_REPORT_DAYS);
        let report = FamilyReport {
            period: ReportPeriod {
                start: calendar.period_start(),
                end: calendar.today(),
            },
            subjects: subjects.to_vec(),
            insights: family_insights(subjects, &aggregates),
            recommendations: family_recommendations(subjects),
            aggregates,
            trends: placeholder_trends(),
            aggregation: self.aggregation,
            generated_at: ctx.now(),
        };

        info!(
            members = subjects.len(),
            aggregation = self.aggregation.as_str(),
            average_health_score,
            total_alerts = report.aggregates.total_alerts,
            "Assembled family report"
        );

        Ok(report)
    }
}

fn validate_window(days: i64) -> Result<u32, ReportError> {
    match u32::try_from(days) {
        Ok(valid) if valid >= 1 => Ok(valid),
        _ => Err(ReportError::invalid_window(days)),
    }
}

/// Rounded mean of member status scores
#[must_use]
pub fn average_health_score(subjects: &[Subject]) -> u32 {
    let scores: Vec<f64> = subjects
        .iter()
        .map(|subject| f64::from(subject.status.health_score()))
        .collect();
    mean(&scores).round() as u32
}

fn synthetic_aggregates(average_health_score: u32) -> FamilyAggregates {
    FamilyAggregates {
        average_health_score,
        total_alerts: family_placeholders::TOTAL_ALERTS,
        average_medication_adherence: family_placeholders::AVERAGE_ADHERENCE_PERCENT,
        emergency_incidents: family_placeholders::EMERGENCY_INCIDENTS,
        satisfaction_score: family_placeholders::SATISFACTION_SCORE,
    }
}

fn computed_aggregates(average_health_score: u32, reports: &[Report]) -> FamilyAggregates {
    let total_alerts: usize = reports.iter().map(|report| report.alerts.len()).sum();
    let emergency_incidents = reports
        .iter()
        .flat_map(|report| &report.alerts)
        .filter(|alert| alert.severity == AlertSeverity::Critical)
        .count();
    let adherence: Vec<f64> = reports
        .iter()
        .map(|report| report.metrics.medication_adherence)
        .collect();

    debug!(
        members = reports.len(),
        total_alerts, emergency_incidents, "Computed family aggregates"
    );

    FamilyAggregates {
        average_health_score,
        total_alerts: total_alerts as u32,
        average_medication_adherence: mean(&adherence).round() as u32,
        emergency_incidents: emergency_incidents as u32,
        satisfaction_score: family_placeholders::SATISFACTION_SCORE,
    }
}

const fn placeholder_trends() -> TrendDeltas {
    TrendDeltas {
        health_improvement_percent: family_placeholders::HEALTH_IMPROVEMENT_PERCENT,
        activity_increase_percent: family_placeholders::ACTIVITY_INCREASE_PERCENT,
        medication_improvement_percent: family_placeholders::MEDICATION_IMPROVEMENT_PERCENT,
    }
}

fn family_insights(subjects: &[Subject], aggregates: &FamilyAggregates) -> Vec<String> {
    let mut insights = vec![format!(
        "Average family health score is {} across {} members.",
        aggregates.average_health_score,
        subjects.len()
    )];

    let attention: Vec<&Subject> = subjects
        .iter()
        .filter(|subject| subject.status.needs_attention())
        .collect();

    if attention.is_empty() {
        insights.push("All family members are in stable health this period.".to_owned());
    } else {
        insights.extend(attention.iter().map(|subject| {
            format!(
                "{} ({}) needs attention: health status is {}.",
                subject.name,
                subject.relation,
                subject.status.label().to_lowercase()
            )
        }));
    }

    insights
}

fn family_recommendations(subjects: &[Subject]) -> Vec<String> {
    let mut recommendations: Vec<String> = subjects
        .iter()
        .filter(|subject| subject.status == HealthStatus::Critical)
        .map(|subject| format!("Arrange an urgent care review for {}", subject.name))
        .chain(
            subjects
                .iter()
                .filter(|subject| subject.status == HealthStatus::Warning)
                .map(|subject| format!("Increase check-ins with {}", subject.name)),
        )
        .collect();
    recommendations.extend(FAMILY_CARE_ACTIONS.iter().map(|&action| action.to_owned()));
    recommendations
}
