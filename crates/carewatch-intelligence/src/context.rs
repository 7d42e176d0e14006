// ABOUTME: Per-request random source and clock shared by every synthesis step
// ABOUTME: Seedable ChaCha stream plus a frozen "now" so one report is internally consistent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Generation context
//!
//! Each report-generation call owns exactly one `GenerationContext`. Every
//! component that needs randomness or the current time reads it from here,
//! so a fixed seed and instant reproduce a report byte for byte.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source and clock for one generation call
#[derive(Debug, Clone)]
pub struct GenerationContext {
    rng: ChaCha8Rng,
    now: DateTime<Utc>,
}

impl GenerationContext {
    /// Deterministic context from a seed and a fixed instant
    #[must_use]
    pub fn new(seed: u64, now: DateTime<Utc>) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            now,
        }
    }

    /// Deterministic random stream anchored at the current wall-clock time
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(seed, Utc::now())
    }

    /// Entropy-seeded context anchored at the current wall-clock time
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            now: Utc::now(),
        }
    }

    /// Context for the `index`-th member of a batch sharing one seed and instant
    ///
    /// Streams differ per index so members never share random draws.
    #[must_use]
    pub fn for_member(seed: u64, index: usize, now: DateTime<Utc>) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(index as u64);
        Self { rng, now }
    }

    /// Frozen generation instant
    #[must_use]
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Calendar date of the generation instant
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Random source
    #[allow(clippy::missing_const_for_fn)] // Cannot be const: hands out &mut
    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// A random instant within `hours` before now
    pub fn instant_within_hours(&mut self, hours: i64) -> DateTime<Utc> {
        let window_seconds = hours.max(1) * 3600;
        let offset = self.rng.gen_range(0..window_seconds);
        self.now - Duration::seconds(offset)
    }
}
