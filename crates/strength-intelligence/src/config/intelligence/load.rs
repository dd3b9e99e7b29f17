// ABOUTME: Training load advisory thresholds
// ABOUTME: Frequency, RPE, and set-volume bounds for load recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Bounds that trigger training-load advisories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Default lookback window in days
    pub default_window_days: u32,
    /// Fewer distinct training days than this is too infrequent
    pub min_training_days: usize,
    /// More distinct training days than this is too frequent
    pub max_training_days: usize,
    /// Mean RPE above this is too intense
    pub high_avg_rpe: f64,
    /// Mean RPE below this leaves room for intensity
    pub low_avg_rpe: f64,
    /// Total sets above this risks overreaching
    pub high_total_sets: u32,
    /// Total sets below this is low volume
    pub low_total_sets: u32,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            default_window_days: 14,
            min_training_days: 2,
            max_training_days: 6,
            high_avg_rpe: 9.0,
            low_avg_rpe: 6.0,
            high_total_sets: 100,
            low_total_sets: 20,
        }
    }
}
