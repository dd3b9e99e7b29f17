// ABOUTME: Composite fatigue score from volume, intensity, frequency, and effort trend
// ABOUTME: Includes status bands and a simplified week-by-week fatigue history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: session counts are small

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use strength_core::constants::time::DAYS_PER_WEEK;
use strength_core::models::WorkoutEntry;
use tracing::debug;

use crate::config::intelligence::{FatigueConfig, StrengthIntelligenceConfig};
use crate::history::SharedHistory;
use crate::statistical_analysis::{round_to, StatisticalAnalyzer};
use crate::volume::WorkoutVolume;

/// Upper bound of every fatigue score
pub const MAX_FATIGUE: f64 = 10.0;

/// Weeks of history reported when the caller does not choose
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

/// Highest score in the low band
const LOW_BAND_MAX: f64 = 3.0;
/// Highest score in the moderate band
const MODERATE_BAND_MAX: f64 = 6.0;
/// Highest score in the high band
const HIGH_BAND_MAX: f64 = 8.0;

/// Sets per week that saturate the weekly volume factor
const WEEKLY_SETS_CEILING: f64 = 20.0;
/// Maximum contribution of each weekly factor
const WEEKLY_FACTOR_MAX: f64 = 5.0;

/// Fatigue band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FatigueStatus {
    /// Score up to 3
    Low,
    /// Score up to 6
    Moderate,
    /// Score up to 8
    High,
    /// Score above 8
    VeryHigh,
}

impl FatigueStatus {
    /// Band containing `score`
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score <= LOW_BAND_MAX {
            Self::Low
        } else if score <= MODERATE_BAND_MAX {
            Self::Moderate
        } else if score <= HIGH_BAND_MAX {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    /// User-facing description of the band
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Low => "Low fatigue levels. Good recovery status.",
            Self::Moderate => "Moderate fatigue. Monitor training load.",
            Self::High => "High fatigue levels. Consider reducing training load.",
            Self::VeryHigh => "Very high fatigue. Deload or rest recommended.",
        }
    }

    /// Display color for the band
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "green",
            Self::Moderate => "yellow",
            Self::High => "orange",
            Self::VeryHigh => "red",
        }
    }
}

impl fmt::Display for FatigueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
            Self::VeryHigh => write!(f, "Very High"),
        }
    }
}

/// Fatigue score with its band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueAssessment {
    /// Composite score in `[0, 10]`
    pub score: f64,
    /// Band
    pub status: FatigueStatus,
    /// Band description
    pub message: String,
    /// Band color
    pub color: String,
}

/// Sub-scores behind a composite fatigue score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FatigueBreakdown {
    /// Set and tonnage load, 0-10
    pub volume: f64,
    /// Recency-weighted RPE, 0-10
    pub intensity: f64,
    /// Training density, 0-10
    pub frequency: f64,
    /// Effort rising against the previous window, 0-10
    pub trend: f64,
    /// Weighted sum clamped to `[0, 10]`
    pub total: f64,
}

/// Simplified fatigue for one past week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyFatigue {
    /// First day included
    pub week_start: NaiveDate,
    /// Last day included
    pub week_end: NaiveDate,
    /// Score in `[0, 10]`, 1 decimal
    pub fatigue_score: f64,
    /// Sessions in the week
    pub workouts: usize,
}

/// Computes fatigue scores from recent training
#[derive(Clone)]
pub struct FatigueScorer {
    history: SharedHistory,
    config: FatigueConfig,
}

impl FatigueScorer {
    /// Create a scorer using the global configuration
    #[must_use]
    pub fn new(history: SharedHistory) -> Self {
        Self::with_config(history, StrengthIntelligenceConfig::global().fatigue.clone())
    }

    /// Create a scorer with explicit configuration
    #[must_use]
    pub const fn with_config(history: SharedHistory, config: FatigueConfig) -> Self {
        Self { history, config }
    }

    /// Window used when callers do not choose one
    #[must_use]
    pub const fn default_window_days(&self) -> u32 {
        self.config.default_window_days
    }

    /// Composite fatigue over `[as_of - days, as_of]`; 0 without workouts
    #[must_use]
    pub fn calculate_fatigue_score(&self, user: &str, days: u32, as_of: NaiveDate) -> f64 {
        self.calculate_fatigue_breakdown(user, days, as_of).total
    }

    /// Sub-scores and weighted total over `[as_of - days, as_of]`
    #[must_use]
    pub fn calculate_fatigue_breakdown(
        &self,
        user: &str,
        days: u32,
        as_of: NaiveDate,
    ) -> FatigueBreakdown {
        if days == 0 {
            return FatigueBreakdown::default();
        }
        let recent = self.history.get_recent_workouts(user, days, as_of);
        if recent.is_empty() {
            return FatigueBreakdown::default();
        }

        let volume = WorkoutVolume::from_workouts(&recent);
        let w = &self.config.weights;
        let mut breakdown = FatigueBreakdown {
            volume: self.volume_fatigue(&volume),
            intensity: self.intensity_fatigue(&recent),
            frequency: self.frequency_fatigue(volume.training_days, days),
            trend: self.trend_fatigue(user, days, as_of),
            total: 0.0,
        };
        let weighted = w.trend.mul_add(
            breakdown.trend,
            w.frequency.mul_add(
                breakdown.frequency,
                w.intensity
                    .mul_add(breakdown.intensity, w.volume * breakdown.volume),
            ),
        );
        breakdown.total = weighted.clamp(0.0, MAX_FATIGUE);

        debug!(
            user,
            days,
            volume = breakdown.volume,
            intensity = breakdown.intensity,
            frequency = breakdown.frequency,
            trend = breakdown.trend,
            total = breakdown.total,
            "Calculated fatigue score"
        );
        breakdown
    }

    /// Current fatigue band over the default window
    #[must_use]
    pub fn get_fatigue_status(&self, user: &str, as_of: NaiveDate) -> FatigueAssessment {
        let score = self.calculate_fatigue_score(user, self.config.default_window_days, as_of);
        let status = FatigueStatus::from_score(score);
        FatigueAssessment {
            score,
            status,
            message: status.message().to_owned(),
            color: status.color().to_owned(),
        }
    }

    /// Simplified fatigue per week for `days / 7` weeks ending at `as_of`, most recent first
    ///
    /// Week `k` covers dates in `(as_of - 7k - 7, as_of - 7k]`. Weeks without
    /// sessions are omitted.
    #[must_use]
    pub fn get_fatigue_history(&self, user: &str, days: u32, as_of: NaiveDate) -> Vec<WeeklyFatigue> {
        let workouts = self.history.get_user_workouts(user);
        if workouts.is_empty() {
            return Vec::new();
        }

        let weeks = i64::from(days) / DAYS_PER_WEEK;
        (0..weeks)
            .filter_map(|week| {
                let week_end = as_of - Duration::days(week * DAYS_PER_WEEK);
                let week_start = week_end - Duration::days(DAYS_PER_WEEK - 1);
                let in_week: Vec<WorkoutEntry> = workouts
                    .iter()
                    .filter(|w| w.date() >= week_start && w.date() <= week_end)
                    .cloned()
                    .collect();
                if in_week.is_empty() {
                    return None;
                }
                Some(WeeklyFatigue {
                    week_start,
                    week_end,
                    fatigue_score: round_to(Self::simple_fatigue(&in_week), 1),
                    workouts: in_week.len(),
                })
            })
            .collect()
    }

    /// Volume plus intensity factors, each worth up to 5
    #[must_use]
    pub fn simple_fatigue(workouts: &[WorkoutEntry]) -> f64 {
        let volume = WorkoutVolume::from_workouts(workouts);
        if volume.is_empty() {
            return 0.0;
        }
        let volume_factor =
            (f64::from(volume.total_sets) / WEEKLY_SETS_CEILING).min(1.0) * WEEKLY_FACTOR_MAX;
        let intensity_factor = ((volume.avg_rpe - 6.0) / 4.0 * WEEKLY_FACTOR_MAX).max(0.0);
        volume_factor + intensity_factor
    }

    fn volume_fatigue(&self, volume: &WorkoutVolume) -> f64 {
        let norm = &self.config.normalization;
        let sets_score = (f64::from(volume.total_sets) / norm.sets_ceiling).min(1.0) * MAX_FATIGUE;
        let tonnage_score = (volume.tonnage / norm.tonnage_ceiling).min(1.0) * MAX_FATIGUE;
        (sets_score + tonnage_score) / 2.0
    }

    fn intensity_fatigue(&self, workouts: &[WorkoutEntry]) -> f64 {
        let norm = &self.config.normalization;
        let mut ordered = workouts.to_vec();
        ordered.sort_by_key(WorkoutEntry::date);

        let rpes: Vec<f64> = ordered.iter().map(|w| f64::from(w.rpe())).collect();
        let weights = StatisticalAnalyzer::linspace(norm.oldest_session_weight, 1.0, rpes.len());
        let Some(weighted_rpe) = StatisticalAnalyzer::weighted_mean(&rpes, &weights) else {
            return 0.0;
        };

        if weighted_rpe <= norm.rpe_floor {
            0.0
        } else {
            ((weighted_rpe - norm.rpe_floor) / norm.rpe_span * MAX_FATIGUE).min(MAX_FATIGUE)
        }
    }

    fn frequency_fatigue(&self, training_days: usize, days: u32) -> f64 {
        let bands = &self.config.frequency;
        let ratio = training_days as f64 / f64::from(days);
        if ratio <= bands.low_ratio {
            bands.low_score
        } else if ratio <= bands.optimal_ratio {
            bands.optimal_score
        } else if ratio <= bands.high_ratio {
            bands.high_score
        } else {
            bands.excessive_score
        }
    }

    /// Effort in `[as_of - days, as_of]` against `[as_of - 2 days, as_of - days)`
    fn trend_fatigue(&self, user: &str, days: u32, as_of: NaiveDate) -> f64 {
        let cfg = &self.config.trend;
        let recent = self.history.get_recent_workouts(user, days, as_of);
        let boundary = as_of - Duration::days(i64::from(days));
        let previous: Vec<WorkoutEntry> = self
            .history
            .get_recent_workouts(user, days.saturating_mul(2), as_of)
            .into_iter()
            .filter(|w| w.date() < boundary)
            .collect();
        if recent.is_empty() || previous.is_empty() {
            return 0.0;
        }

        let recent_volume = WorkoutVolume::from_workouts(&recent);
        let previous_volume = WorkoutVolume::from_workouts(&previous);
        let rpe_increase = recent_volume.avg_rpe - previous_volume.avg_rpe;

        let mut score = 0.0;
        if rpe_increase > cfg.rpe_increase_threshold {
            score += rpe_increase * cfg.rpe_increase_multiplier;
        }
        if recent_volume.total_sets >= previous_volume.total_sets && rpe_increase > 0.0 {
            score += cfg.volume_held_penalty;
        }
        f64::min(score, MAX_FATIGUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{as_of, session, VecHistory, USER};

    fn scorer(entries: Vec<WorkoutEntry>) -> FatigueScorer {
        FatigueScorer::with_config(VecHistory::shared(entries), FatigueConfig::default())
    }

    #[test]
    fn test_no_workouts_is_zero_and_low() {
        let s = scorer(Vec::new());
        assert!(s.calculate_fatigue_score(USER, 7, as_of()).abs() < f64::EPSILON);
        let status = s.get_fatigue_status(USER, as_of());
        assert_eq!(status.status, FatigueStatus::Low);
        assert_eq!(status.color, "green");
    }

    #[test]
    fn test_zero_day_window_is_zero() {
        let s = scorer(vec![session("Squat", 0, 5, 5, 100.0, 9)]);
        assert!(s.calculate_fatigue_score(USER, 0, as_of()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_breakdown_components() {
        // Three sessions in seven days: ratio 3/7 sits in the optimal band
        let s = scorer(vec![
            session("Squat", 6, 5, 5, 100.0, 6),
            session("Bench", 3, 5, 5, 80.0, 8),
            session("Row", 0, 5, 5, 60.0, 10),
        ]);
        let b = s.calculate_fatigue_breakdown(USER, 7, as_of());

        // 15 sets -> 3.0, 6000 tonnage -> 6.0
        assert!((b.volume - 4.5).abs() < 1e-9);
        // weights 0.5, 0.75, 1.0 over RPE 6, 8, 10 -> 8.444..
        let weighted = (0.5 * 6.0 + 0.75 * 8.0 + 10.0) / 2.25;
        assert!((b.intensity - (weighted - 6.0) / 4.0 * 10.0).abs() < 1e-9);
        assert!(b.frequency.abs() < f64::EPSILON);
        assert!(b.trend.abs() < f64::EPSILON);
        let expected = 0.3 * b.volume + 0.4 * b.intensity;
        assert!((b.total - expected).abs() < 1e-9);
    }

    #[test]
    fn test_trend_penalizes_rising_effort() {
        let s = scorer(vec![
            session("Squat", 10, 5, 5, 100.0, 6),
            session("Squat", 2, 5, 5, 100.0, 8),
        ]);
        let b = s.calculate_fatigue_breakdown(USER, 7, as_of());
        // RPE up by 2 with equal sets: 2 * 2 + 2
        assert!((b.trend - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_frequency_band_edges() {
        let s = scorer(Vec::new());
        // Each band includes its upper edge
        let cases = [(3, 1.0), (4, 0.0), (6, 0.0), (7, 3.0), (8, 3.0), (9, 7.0)];
        for (training_days, expected) in cases {
            let score = s.frequency_fatigue(training_days, 10);
            assert!(
                (score - expected).abs() < f64::EPSILON,
                "{training_days}/10 gave {score}"
            );
        }
    }

    #[test]
    fn test_status_bands() {
        assert_eq!(FatigueStatus::from_score(3.0), FatigueStatus::Low);
        assert_eq!(FatigueStatus::from_score(3.01), FatigueStatus::Moderate);
        assert_eq!(FatigueStatus::from_score(8.0), FatigueStatus::High);
        assert_eq!(FatigueStatus::from_score(8.5), FatigueStatus::VeryHigh);
        assert_eq!(FatigueStatus::VeryHigh.to_string(), "Very High");
    }

    #[test]
    fn test_weekly_history_skips_empty_weeks() {
        let s = scorer(vec![
            session("Squat", 0, 10, 5, 100.0, 8),
            session("Squat", 6, 10, 5, 100.0, 8),
            session("Squat", 20, 4, 5, 100.0, 6),
        ]);
        let history = s.get_fatigue_history(USER, 30, as_of());

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].week_end, as_of());
        assert_eq!(history[0].workouts, 2);
        // 20 sets -> 5.0, RPE 8 -> 2.5
        assert!((history[0].fatigue_score - 7.5).abs() < 1e-9);
        assert_eq!(history[1].week_end, as_of() - Duration::days(14));
        assert!((history[1].fatigue_score - 1.0).abs() < 1e-9);
    }
}
