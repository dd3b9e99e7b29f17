// ABOUTME: One-rep max estimation from a single submaximal set using an RPE chart
// ABOUTME: Confidence compares the estimate to the heaviest logged weight for the exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use strength_core::errors::AnalysisFailure;
use strength_core::models::WorkoutEntry;
use tracing::debug;

use crate::history::SharedHistory;
use crate::statistical_analysis::round_to;
use crate::types::Confidence;

/// Percent of max achievable for a single rep at RPE 1..=10
const RPE_PERCENTAGES: [i32; 10] = [73, 76, 79, 82, 85, 88, 91, 94, 97, 100];

/// Percentage points lost per rep beyond the first
const PENALTY_PER_REP: i32 = 3;

/// Highest rep count covered by the chart
const MAX_CHARTED_REPS: u32 = 10;

/// Penalty applied outside the charted rep range
const UNCHARTED_REP_PENALTY: i32 = -30;

/// Estimates above this multiple of the logged max are low confidence
const IMPLAUSIBLE_MULTIPLE: f64 = 1.5;

/// Estimates within this fraction of the logged max are high confidence
const CLOSE_FRACTION: f64 = 0.1;

/// Inputs and chart values behind an estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneRepMaxDetails {
    /// Load lifted
    pub weight: f64,
    /// Reps performed
    pub reps: u32,
    /// RPE reported
    pub rpe: u8,
    /// Percent of max the set represents
    pub estimated_percentage: i32,
    /// Heaviest logged weight for the exercise, if any
    pub historical_max: Option<f64>,
}

/// Estimated one-rep max
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneRepMaxEstimate {
    /// Estimate, 1 decimal
    pub estimated_1rm: f64,
    /// Agreement with logged history
    pub confidence: Confidence,
    /// How the estimate was derived
    pub calculation_details: OneRepMaxDetails,
}

/// Converts a (weight, reps, RPE) observation into an estimated max
pub struct OneRepMaxEstimator {
    history: SharedHistory,
}

impl OneRepMaxEstimator {
    /// Create an estimator reading history from `history`
    #[must_use]
    pub const fn new(history: SharedHistory) -> Self {
        Self { history }
    }

    /// Percent of max a set of `reps` at `rpe` represents, `None` for an uncharted RPE
    #[must_use]
    pub fn estimated_percentage(reps: u32, rpe: u8) -> Option<i32> {
        let base = RPE_PERCENTAGES.get(usize::from(rpe).checked_sub(1)?)?;
        let penalty = match i32::try_from(reps) {
            Ok(r) if (1..=MAX_CHARTED_REPS).contains(&reps) => -PENALTY_PER_REP * (r - 1),
            _ => UNCHARTED_REP_PENALTY,
        };
        Some(base + penalty)
    }

    /// Estimate the one-rep max for `exercise` from a single set
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisFailure::InvalidRpe`] when `rpe` is outside 1-10
    pub fn predict_1rm(
        &self,
        user: &str,
        exercise: &str,
        reps: u32,
        weight: f64,
        rpe: u8,
    ) -> Result<OneRepMaxEstimate, AnalysisFailure> {
        let percentage = Self::estimated_percentage(reps, rpe).ok_or(AnalysisFailure::InvalidRpe)?;
        let estimate = weight / (f64::from(percentage) / 100.0);

        let historical_max = self
            .history
            .get_exercise_history(user, exercise)
            .iter()
            .map(WorkoutEntry::weight)
            .reduce(f64::max);

        let confidence = historical_max.map_or(Confidence::Medium, |max| {
            if estimate > max * IMPLAUSIBLE_MULTIPLE {
                Confidence::Low
            } else if (estimate - max).abs() < max * CLOSE_FRACTION {
                Confidence::High
            } else {
                Confidence::Medium
            }
        });

        debug!(user, exercise, estimate, percentage, ?confidence, "Estimated one-rep max");
        Ok(OneRepMaxEstimate {
            estimated_1rm: round_to(estimate, 1),
            confidence,
            calculation_details: OneRepMaxDetails {
                weight,
                reps,
                rpe,
                estimated_percentage: percentage,
                historical_max,
            },
        })
    }
}
