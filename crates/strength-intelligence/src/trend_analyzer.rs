// ABOUTME: Summarizes recent weight and RPE trajectory for one exercise
// ABOUTME: Classifies direction, weekly progression rate, and effort trend over a window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: day spans and session counts are small

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strength_core::constants::time::DAYS_PER_WEEK_F64;
use strength_core::errors::AnalysisFailure;
use strength_core::models::WorkoutEntry;
use tracing::debug;

use crate::config::intelligence::{StrengthIntelligenceConfig, TrendConfig};
use crate::history::{within_window, SharedHistory};
use crate::statistical_analysis::{round_to, StatisticalAnalyzer};
use crate::types::TrendDirection;

/// Trajectory of one exercise over a window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Weight direction
    pub trend: TrendDirection,
    /// Last minus first weight, 1 decimal
    pub weight_change: f64,
    /// Change relative to the first weight in percent, 1 decimal
    pub percentage_change: f64,
    /// Change per week of the observed span, 2 decimals
    pub weekly_progression: f64,
    /// Sessions inside the window
    pub total_sessions: usize,
    /// Days between the first and last session in the window
    pub days_analyzed: i64,
    /// Weight of the earliest session in the window
    pub first_weight: f64,
    /// Weight of the latest session in the window
    pub last_weight: f64,
    /// Effort direction between the first and second half of the window
    pub rpe_trend: TrendDirection,
    /// Mean RPE in the window, 1 decimal
    pub avg_rpe: f64,
}

/// Computes [`TrendSummary`] records from workout history
#[derive(Clone)]
pub struct TrendAnalyzer {
    history: SharedHistory,
    config: TrendConfig,
}

impl TrendAnalyzer {
    /// Create an analyzer using the global configuration
    #[must_use]
    pub fn new(history: SharedHistory) -> Self {
        Self::with_config(history, StrengthIntelligenceConfig::global().trend.clone())
    }

    /// Create an analyzer with explicit configuration
    #[must_use]
    pub const fn with_config(history: SharedHistory, config: TrendConfig) -> Self {
        Self { history, config }
    }

    /// Window used when callers do not choose one
    #[must_use]
    pub const fn default_window_days(&self) -> u32 {
        self.config.default_window_days
    }

    /// Summarize sessions of `exercise` dated within `[as_of - days, as_of]`
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisFailure::NoData`] when the exercise was never logged and
    /// [`AnalysisFailure::InsufficientData`] when fewer than two sessions fall in the window
    pub fn analyze_strength_trends(
        &self,
        user: &str,
        exercise: &str,
        days: u32,
        as_of: NaiveDate,
    ) -> Result<TrendSummary, AnalysisFailure> {
        let history = self.history.get_exercise_history(user, exercise);
        if history.is_empty() {
            return Err(AnalysisFailure::NoData);
        }

        let mut recent = within_window(&history, days, as_of);
        if recent.len() < 2 {
            return Err(AnalysisFailure::InsufficientData);
        }
        recent.sort_by_key(WorkoutEntry::date);

        let first = &recent[0];
        let last = &recent[recent.len() - 1];
        let weight_change = last.weight() - first.weight();
        let percentage_change = if first.weight() > 0.0 {
            weight_change / first.weight() * 100.0
        } else {
            0.0
        };

        let days_span = (last.date() - first.date()).num_days();
        let weeks_span = (days_span as f64 / DAYS_PER_WEEK_F64).max(1.0);
        let weekly_progression = weight_change / weeks_span;

        let rpes: Vec<f64> = recent.iter().map(|w| f64::from(w.rpe())).collect();
        let avg_rpe = StatisticalAnalyzer::mean(&rpes).unwrap_or_default();

        let summary = TrendSummary {
            trend: self.classify(percentage_change),
            weight_change: round_to(weight_change, 1),
            percentage_change: round_to(percentage_change, 1),
            weekly_progression: round_to(weekly_progression, 2),
            total_sessions: recent.len(),
            days_analyzed: days_span,
            first_weight: first.weight(),
            last_weight: last.weight(),
            rpe_trend: self.rpe_trend(&rpes),
            avg_rpe: round_to(avg_rpe, 1),
        };
        debug!(
            user,
            exercise,
            trend = %summary.trend,
            weekly = summary.weekly_progression,
            "Analyzed strength trend"
        );
        Ok(summary)
    }

    /// Classify a percentage change; stable iff `|pct|` is under the threshold
    #[must_use]
    pub fn classify(&self, percentage_change: f64) -> TrendDirection {
        if percentage_change.abs() < self.config.stable_percentage_threshold {
            TrendDirection::Stable
        } else if percentage_change > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        }
    }

    /// Compare mean RPE of the first and last halves of chronologically ordered sessions
    fn rpe_trend(&self, rpes: &[f64]) -> TrendDirection {
        if rpes.len() < self.config.min_sessions_for_rpe_trend {
            return TrendDirection::Stable;
        }
        let half = rpes.len() / 2;
        let (Some(early), Some(late)) = (
            StatisticalAnalyzer::mean(&rpes[..half]),
            StatisticalAnalyzer::mean(&rpes[rpes.len() - half..]),
        ) else {
            return TrendDirection::Stable;
        };

        let change = late - early;
        if change > self.config.rpe_change_threshold {
            TrendDirection::Increasing
        } else if change < -self.config.rpe_change_threshold {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }
}
