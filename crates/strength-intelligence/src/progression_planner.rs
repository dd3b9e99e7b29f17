// ABOUTME: Multi-week progression plans built from the latest session and recent trend
// ABOUTME: Weekly increase scales with observed progression; RPE targets ramp after week two
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strength_core::errors::AnalysisFailure;
use tracing::debug;

use crate::history::SharedHistory;
use crate::statistical_analysis::round_to_increment;
use crate::trend_analyzer::TrendAnalyzer;

/// Weeks planned when the caller does not choose
pub const DEFAULT_PLAN_WEEKS: u32 = 4;

/// Plate increment plan weights are rounded to
const PLAN_INCREMENT: f64 = 0.5;

/// Target RPE ceiling for the first two weeks
const BUILD_RPE_CAP: u8 = 8;

/// Target RPE ceiling from week three on
const INTENSITY_RPE_CAP: u8 = 9;

/// One week of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedWeek {
    /// 1-based week number
    pub week: u32,
    /// Working weight for the week
    pub target_weight: f64,
    /// Effort target for the week
    pub target_rpe: u8,
    /// Focus for the week
    pub notes: String,
}

/// Multi-week plan for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionPlan {
    /// Weight of the most recent session
    pub current_weight: f64,
    /// RPE of the most recent session
    pub current_rpe: u8,
    /// Weight added per week
    pub weekly_increase: f64,
    /// One entry per planned week
    pub progression_plan: Vec<PlannedWeek>,
    /// Summary of how the plan was derived
    pub notes: String,
}

/// Generates [`ProgressionPlan`] records
pub struct ProgressionPlanner {
    history: SharedHistory,
    trends: TrendAnalyzer,
}

impl ProgressionPlanner {
    /// Create a planner using the global trend configuration
    #[must_use]
    pub fn new(history: SharedHistory) -> Self {
        let trends = TrendAnalyzer::new(history.clone());
        Self::with_trends(history, trends)
    }

    /// Create a planner over an existing trend analyzer
    #[must_use]
    pub const fn with_trends(history: SharedHistory, trends: TrendAnalyzer) -> Self {
        Self { history, trends }
    }

    /// Weekly increase for an observed weekly progression
    #[must_use]
    pub fn weekly_increase(weekly_progression: f64) -> f64 {
        if weekly_progression > 2.0 {
            2.5
        } else if weekly_progression > 1.0 {
            1.5
        } else {
            1.0
        }
    }

    /// Plan `weeks` weeks of `exercise` starting from the latest logged session
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisFailure::NoData`] when the exercise was never logged
    pub fn generate_progression_plan(
        &self,
        user: &str,
        exercise: &str,
        weeks: u32,
        as_of: NaiveDate,
    ) -> Result<ProgressionPlan, AnalysisFailure> {
        let history = self.history.get_exercise_history(user, exercise);
        let latest = history
            .iter()
            .max_by_key(|w| w.date())
            .ok_or(AnalysisFailure::NoData)?;
        let current_weight = latest.weight();
        let current_rpe = latest.rpe();

        let weekly_progression = self
            .trends
            .analyze_strength_trends(user, exercise, self.trends.default_window_days(), as_of)
            .map_or(0.0, |trend| trend.weekly_progression);
        let weekly_increase = Self::weekly_increase(weekly_progression);

        let progression_plan = (1..=weeks)
            .map(|week| {
                let target_weight = round_to_increment(
                    weekly_increase.mul_add(f64::from(week), current_weight),
                    PLAN_INCREMENT,
                );
                let target_rpe = if week <= 2 {
                    current_rpe.min(BUILD_RPE_CAP)
                } else {
                    current_rpe.saturating_add(1).min(INTENSITY_RPE_CAP)
                };
                PlannedWeek {
                    week,
                    target_weight,
                    target_rpe,
                    notes: week_notes(week, target_rpe).to_owned(),
                }
            })
            .collect();

        debug!(user, exercise, weeks, weekly_increase, "Generated progression plan");
        Ok(ProgressionPlan {
            current_weight,
            current_rpe,
            weekly_increase,
            progression_plan,
            notes: "Plan based on recent performance trends".to_owned(),
        })
    }
}

const fn week_notes(week: u32, target_rpe: u8) -> &'static str {
    match week {
        1 => "Foundation week - focus on form",
        2 => "Build week - maintain good technique",
        3 => "Intensity week - push closer to limits",
        _ if target_rpe >= INTENSITY_RPE_CAP => "Test week - consider deload after this",
        _ => "Progressive overload week",
    }
}
