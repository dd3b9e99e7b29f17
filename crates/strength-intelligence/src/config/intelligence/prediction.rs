// ABOUTME: Weight prediction, trend, and plateau configuration
// ABOUTME: Safety bounds for next-weight suggestions and trend classification thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Prediction and Trend Configuration

use serde::{Deserialize, Serialize};

/// Settings for the regression-based next-weight predictor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionConfig {
    /// Sessions required before a model is fitted
    pub min_history_sessions: usize,
    /// Days ahead of the last session the prediction targets
    pub projection_days: i64,
    /// Trailing sessions averaged for the projected RPE
    pub recent_rpe_sessions: usize,
    /// Largest suggested increase as a fraction of the last weight
    pub max_increase_fraction: f64,
    /// Smallest suggested increase
    pub min_increase: f64,
    /// Plate increment predictions are rounded to
    pub rounding_increment: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            min_history_sessions: 3,
            projection_days: 7,
            recent_rpe_sessions: 3,
            max_increase_fraction: 0.1,
            min_increase: 0.5,
            rounding_increment: 0.5,
        }
    }
}

/// Settings for weight and RPE trend classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Default lookback window in days
    pub default_window_days: u32,
    /// Percentage change below which the trend is stable
    pub stable_percentage_threshold: f64,
    /// Mean RPE shift between halves that counts as a trend
    pub rpe_change_threshold: f64,
    /// Sessions needed before an RPE trend is reported
    pub min_sessions_for_rpe_trend: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            default_window_days: 90,
            stable_percentage_threshold: 2.0,
            rpe_change_threshold: 0.5,
            min_sessions_for_rpe_trend: 3,
        }
    }
}

/// Settings for plateau risk scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateauConfig {
    /// Lookback window in days
    pub window_days: u32,
    /// Weekly progression below which progress counts as minimal
    pub minimal_weekly_progression: f64,
    /// Overall percentage change below which progression is low
    pub low_percentage_change: f64,
    /// Sessions required before the low-rate indicator applies
    pub min_sessions_for_rate_check: usize,
    /// Average RPE above which effort counts as consistently high
    pub high_avg_rpe: f64,
    /// Score at or above which risk is high
    pub high_risk_score: u32,
    /// Score at or above which risk is moderate
    pub moderate_risk_score: u32,
}

impl Default for PlateauConfig {
    fn default() -> Self {
        Self {
            window_days: 60,
            minimal_weekly_progression: 0.5,
            low_percentage_change: 3.0,
            min_sessions_for_rate_check: 8,
            high_avg_rpe: 8.5,
            high_risk_score: 5,
            moderate_risk_score: 3,
        }
    }
}
