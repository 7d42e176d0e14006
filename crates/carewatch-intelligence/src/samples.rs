// ABOUTME: Builds ancillary medication adherence and activity log samples for a report
// ABOUTME: Status-keyed medication lists and a fixed-length, most-recent-first activity log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Medication & activity samples
//!
//! Both builders produce synthetic demo records. The activity log does not
//! read the metric series; it is decorative and always spans the last
//! fourteen days.

use crate::context::GenerationContext;
use carewatch_core::constants::{adherence, windows};
use carewatch_core::models::{
    ActivityRecord, ActivityType, HealthStatus, Intensity, MedicationRecord, MetricSeries,
    Subject,
};
use chrono::Days;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Look-back window for a medication's last dose
const LAST_TAKEN_LOOKBACK_HOURS: i64 = 48;

/// Shortest logged activity (minutes, inclusive)
const MIN_ACTIVITY_MINUTES: u32 = 15;

/// Longest logged activity (minutes, exclusive)
const MAX_ACTIVITY_MINUTES: u32 = 60;

/// Prescription entry in the status-keyed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prescription {
    /// Medication name
    pub name: &'static str,
    /// Dose per administration
    pub dosage: &'static str,
    /// How often it is taken
    pub frequency: &'static str,
}

const LISINOPRIL: Prescription = Prescription {
    name: "Lisinopril",
    dosage: "10mg",
    frequency: "Once daily",
};
const METFORMIN: Prescription = Prescription {
    name: "Metformin",
    dosage: "500mg",
    frequency: "Twice daily",
};
const ATORVASTATIN: Prescription = Prescription {
    name: "Atorvastatin",
    dosage: "20mg",
    frequency: "Once daily at bedtime",
};
const ASPIRIN: Prescription = Prescription {
    name: "Aspirin",
    dosage: "81mg",
    frequency: "Once daily",
};
const VITAMIN_D: Prescription = Prescription {
    name: "Vitamin D3",
    dosage: "1000 IU",
    frequency: "Once daily",
};
const MULTIVITAMIN: Prescription = Prescription {
    name: "Multivitamin",
    dosage: "1 tablet",
    frequency: "Once daily",
};

/// Medications prescribed for a status (critical 4, warning 3, good 2, excellent 1)
#[must_use]
pub fn prescriptions_for(status: HealthStatus) -> &'static [Prescription] {
    const CRITICAL: [Prescription; 4] = [LISINOPRIL, METFORMIN, ATORVASTATIN, ASPIRIN];
    const WARNING: [Prescription; 3] = [LISINOPRIL, METFORMIN, VITAMIN_D];
    const GOOD: [Prescription; 2] = [MULTIVITAMIN, VITAMIN_D];
    const EXCELLENT: [Prescription; 1] = [MULTIVITAMIN];

    match status {
        HealthStatus::Critical => &CRITICAL,
        HealthStatus::Warning => &WARNING,
        HealthStatus::Good => &GOOD,
        HealthStatus::Excellent => &EXCELLENT,
    }
}

/// Build medication adherence records for a subject
///
/// Adherence is `max(60, U{0..40} + 60 + bonus)` with a bonus of 20 for
/// excellent subjects, capped at 100.
#[must_use]
pub fn build_medications(subject: &Subject, ctx: &mut GenerationContext) -> Vec<MedicationRecord> {
    let bonus = if subject.status == HealthStatus::Excellent {
        adherence::EXCELLENT_RECORD_BONUS
    } else {
        0
    };

    let medications: Vec<MedicationRecord> = prescriptions_for(subject.status)
        .iter()
        .map(|prescription| {
            let draw: u32 = ctx.rng().gen_range(0..40);
            let adherence_percent = (draw + adherence::RECORD_FLOOR_PERCENT + bonus)
                .max(adherence::RECORD_FLOOR_PERCENT)
                .min(adherence::CEILING_PERCENT);
            MedicationRecord {
                name: prescription.name.to_owned(),
                dosage: prescription.dosage.to_owned(),
                frequency: prescription.frequency.to_owned(),
                adherence_percent,
                last_taken: ctx.instant_within_hours(LAST_TAKEN_LOOKBACK_HOURS),
            }
        })
        .collect();

    debug!(
        subject_id = %subject.id,
        count = medications.len(),
        "Built medication records"
    );
    medications
}

/// Build the 14-day activity log, most recent first
///
/// The metric series is accepted for interface symmetry but not read.
#[must_use]
pub fn build_activities(_metrics: &MetricSeries, ctx: &mut GenerationContext) -> Vec<ActivityRecord> {
    let today = ctx.today();
    (0..windows::ACTIVITY_LOG_DAYS)
        .map(|days_back| {
            let rng = ctx.rng();
            ActivityRecord {
                date: today
                    .checked_sub_days(Days::new(days_back as u64))
                    .unwrap_or(today),
                activity_type: *ActivityType::ALL
                    .choose(rng)
                    .unwrap_or(&ActivityType::Walking),
                duration_minutes: rng.gen_range(MIN_ACTIVITY_MINUTES..MAX_ACTIVITY_MINUTES),
                intensity: *Intensity::ALL.choose(rng).unwrap_or(&Intensity::Low),
            }
        })
        .collect()
}
