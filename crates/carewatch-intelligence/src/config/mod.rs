// ABOUTME: Configuration module for the carewatch-intelligence crate
// ABOUTME: Re-exports the validated intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Rule thresholds and synthesis parameters for every engine
pub mod intelligence;

pub use intelligence::CareIntelligenceConfig;
