// ABOUTME: Maps metric series indices to calendar dates for a report window
// ABOUTME: Single source of truth for "index 0 is oldest, index N-1 is today"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar for a window of `days` daily samples ending on `today`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesCalendar {
    today: NaiveDate,
    days: u32,
}

impl SeriesCalendar {
    /// Create a calendar for `days` samples ending on `today`
    #[must_use]
    pub const fn new(today: NaiveDate, days: u32) -> Self {
        Self { today, days }
    }

    /// Last day of the window
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Number of daily samples
    #[must_use]
    pub const fn days(&self) -> u32 {
        self.days
    }

    /// Date of the sample at `index` (0 = oldest, `days - 1` = today)
    ///
    /// Indices past the end clamp to today.
    #[must_use]
    pub fn date_at(&self, index: usize) -> NaiveDate {
        let last = self.days.saturating_sub(1) as usize;
        let back = last.saturating_sub(index) as u64;
        self.today
            .checked_sub_days(Days::new(back))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Start of the reporting period (`today - days`)
    #[must_use]
    pub fn period_start(&self) -> NaiveDate {
        self.today
            .checked_sub_days(Days::new(u64::from(self.days)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Dates for every sample, oldest first
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.days as usize).map(move |index| self.date_at(index))
    }
}
