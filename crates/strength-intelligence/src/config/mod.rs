// ABOUTME: Configuration module for strength-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Analyzer thresholds, weights, and windows
pub mod intelligence;

pub use intelligence::StrengthIntelligenceConfig;
