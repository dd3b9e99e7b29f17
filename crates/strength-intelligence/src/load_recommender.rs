// ABOUTME: Training load advisories from recent frequency, intensity, and volume
// ABOUTME: Flags too few or too many training days, extreme RPE, and set volume outliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strength_core::errors::AnalysisFailure;
use tracing::debug;

use crate::config::intelligence::{LoadConfig, StrengthIntelligenceConfig};
use crate::history::SharedHistory;
use crate::statistical_analysis::round_to;
use crate::types::Priority;
use crate::volume::WorkoutVolume;

/// Aspect of training an advisory concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadCategory {
    /// Training days per window
    Frequency,
    /// Effort level
    Intensity,
    /// Set volume
    Volume,
}

/// One load adjustment suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadAdvisory {
    /// Aspect concerned
    pub category: LoadCategory,
    /// Suggestion text
    pub message: String,
    /// Urgency
    pub priority: Priority,
}

/// Aggregate statistics for the analyzed window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadMetrics {
    /// Sum of sets
    pub total_sets: u32,
    /// Mean RPE, 1 decimal
    pub avg_rpe: f64,
    /// Distinct training days
    pub workout_frequency: usize,
    /// Weight × sets × reps, rounded to whole units
    pub total_tonnage: f64,
    /// Window length in days
    pub days_analyzed: u32,
}

/// Metrics plus advisories for a window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingLoadReport {
    /// Window statistics
    pub metrics: LoadMetrics,
    /// Advisories in frequency, intensity, volume order
    pub recommendations: Vec<LoadAdvisory>,
}

/// Produces [`TrainingLoadReport`] records
pub struct LoadRecommender {
    history: SharedHistory,
    config: LoadConfig,
}

impl LoadRecommender {
    /// Create a recommender using the global configuration
    #[must_use]
    pub fn new(history: SharedHistory) -> Self {
        Self::with_config(history, StrengthIntelligenceConfig::global().load.clone())
    }

    /// Create a recommender with explicit configuration
    #[must_use]
    pub const fn with_config(history: SharedHistory, config: LoadConfig) -> Self {
        Self { history, config }
    }

    /// Window used when callers do not choose one
    #[must_use]
    pub const fn default_window_days(&self) -> u32 {
        self.config.default_window_days
    }

    /// Analyze all sessions in `[as_of - days, as_of]`
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisFailure::NoData`] when the window is empty
    pub fn recommend_training_load(
        &self,
        user: &str,
        days: u32,
        as_of: NaiveDate,
    ) -> Result<TrainingLoadReport, AnalysisFailure> {
        let recent = self.history.get_recent_workouts(user, days, as_of);
        if recent.is_empty() {
            return Err(AnalysisFailure::NoData);
        }

        let volume = WorkoutVolume::from_workouts(&recent);
        let recommendations = self.advisories(&volume);
        debug!(
            user,
            days,
            sets = volume.total_sets,
            advisories = recommendations.len(),
            "Recommended training load"
        );

        Ok(TrainingLoadReport {
            metrics: LoadMetrics {
                total_sets: volume.total_sets,
                avg_rpe: round_to(volume.avg_rpe, 1),
                workout_frequency: volume.training_days,
                total_tonnage: round_to(volume.tonnage, 0),
                days_analyzed: days,
            },
            recommendations,
        })
    }

    fn advisories(&self, volume: &WorkoutVolume) -> Vec<LoadAdvisory> {
        let cfg = &self.config;
        let mut out = Vec::new();
        let mut push = |category, message: &str, priority| {
            out.push(LoadAdvisory {
                category,
                message: message.to_owned(),
                priority,
            });
        };

        if volume.training_days < cfg.min_training_days {
            push(
                LoadCategory::Frequency,
                "Consider increasing workout frequency",
                Priority::Medium,
            );
        } else if volume.training_days > cfg.max_training_days {
            push(
                LoadCategory::Frequency,
                "Consider adding rest days",
                Priority::High,
            );
        }

        if volume.avg_rpe > cfg.high_avg_rpe {
            push(
                LoadCategory::Intensity,
                "RPE too high, consider reducing intensity",
                Priority::High,
            );
        } else if volume.avg_rpe < cfg.low_avg_rpe {
            push(
                LoadCategory::Intensity,
                "RPE low, room for increased intensity",
                Priority::Low,
            );
        }

        if volume.total_sets > cfg.high_total_sets {
            push(
                LoadCategory::Volume,
                "High training volume, monitor for overreaching",
                Priority::Medium,
            );
        } else if volume.total_sets < cfg.low_total_sets {
            push(
                LoadCategory::Volume,
                "Low training volume, consider increasing",
                Priority::Medium,
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{as_of, session, VecHistory, USER};
    use strength_core::models::WorkoutEntry;

    fn recommender(entries: Vec<WorkoutEntry>) -> LoadRecommender {
        LoadRecommender::with_config(VecHistory::shared(entries), LoadConfig::default())
    }

    #[test]
    fn test_empty_window_is_no_data() {
        let result = recommender(vec![session("Squat", 30, 5, 5, 100.0, 7)])
            .recommend_training_load(USER, 14, as_of());
        assert_eq!(result, Err(AnalysisFailure::NoData));
    }

    #[test]
    fn test_single_light_session() {
        let report = recommender(vec![session("Squat", 1, 3, 5, 100.0, 5)])
            .recommend_training_load(USER, 14, as_of())
            .unwrap();

        assert_eq!(report.metrics.total_sets, 3);
        assert_eq!(report.metrics.workout_frequency, 1);
        assert!((report.metrics.total_tonnage - 1500.0).abs() < f64::EPSILON);
        let messages: Vec<&str> = report
            .recommendations
            .iter()
            .map(|r| r.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Consider increasing workout frequency",
                "RPE low, room for increased intensity",
                "Low training volume, consider increasing",
            ]
        );
    }

    #[test]
    fn test_daily_max_effort_training() {
        let entries = (0..10).map(|d| session("Deadlift", d, 12, 3, 200.0, 10)).collect();
        let report = recommender(entries)
            .recommend_training_load(USER, 14, as_of())
            .unwrap();

        assert_eq!(report.metrics.workout_frequency, 10);
        assert_eq!(report.metrics.total_sets, 120);
        let priorities: Vec<(LoadCategory, Priority)> = report
            .recommendations
            .iter()
            .map(|r| (r.category, r.priority))
            .collect();
        assert_eq!(
            priorities,
            vec![
                (LoadCategory::Frequency, Priority::High),
                (LoadCategory::Intensity, Priority::High),
                (LoadCategory::Volume, Priority::Medium),
            ]
        );
    }

    #[test]
    fn test_balanced_week_has_no_advisories() {
        let entries = vec![
            session("Squat", 1, 10, 5, 100.0, 7),
            session("Bench", 3, 10, 5, 80.0, 8),
            session("Row", 5, 10, 8, 60.0, 7),
        ];
        let report = recommender(entries)
            .recommend_training_load(USER, 14, as_of())
            .unwrap();
        assert!(report.recommendations.is_empty());
    }
}
