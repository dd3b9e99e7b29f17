// ABOUTME: Regression-based next-weight predictor with per-(user, exercise) model cache
// ABOUTME: Fits weight over time and RPE, then clamps the suggestion to a safe increase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: day offsets and session counts are small

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strength_core::errors::AnalysisFailure;
use strength_core::models::{normalize_name, WorkoutEntry};
use tracing::{debug, warn};

use crate::config::intelligence::{PredictionConfig, StrengthIntelligenceConfig};
use crate::history::SharedHistory;
use crate::statistical_analysis::{round_to_increment, StatisticalAnalyzer};

/// Comparison slack for grid bounds
const GRID_TOLERANCE: f64 = 1e-9;

/// Feature columns fed to the regression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureSet {
    /// Days since the first session
    Days,
    /// Days, RPE, and their product
    DaysRpeInteraction,
}

impl FeatureSet {
    /// Column names in fit order
    #[must_use]
    pub const fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Days => &["days_since_start"],
            Self::DaysRpeInteraction => &["days_since_start", "rpe", "rpe_days_interaction"],
        }
    }

    fn row(self, days: f64, rpe: f64) -> Vec<f64> {
        match self {
            Self::Days => vec![days],
            Self::DaysRpeInteraction => vec![days, rpe, rpe * days],
        }
    }
}

/// Most recent fit for one (user, exercise) key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedModel {
    /// Normalized user name
    pub user: String,
    /// Normalized exercise name
    pub exercise: String,
    /// Columns used
    pub feature_set: FeatureSet,
    /// Constant term
    pub intercept: f64,
    /// One coefficient per column of `feature_set`
    pub coefficients: Vec<f64>,
    /// Training-set R²
    pub r_squared: f64,
    /// Training-set mean absolute error
    pub mean_absolute_error: f64,
    /// Sessions used in the fit
    pub sample_count: usize,
    /// When the fit ran
    pub fitted_at: DateTime<Utc>,
}

/// Outcome of predicting one exercise during a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExercisePrediction {
    /// Exercise name as first logged
    pub exercise: String,
    /// Most recent logged weight
    pub last_weight: f64,
    /// Suggested next weight, if a prediction was possible
    pub predicted_weight: Option<f64>,
    /// Why no prediction was produced
    pub failure: Option<AnalysisFailure>,
}

/// Predicts the next safe training weight per exercise
pub struct WeightPredictor {
    history: SharedHistory,
    config: PredictionConfig,
    models: DashMap<(String, String), FittedModel>,
}

impl WeightPredictor {
    /// Create a predictor using the global configuration
    #[must_use]
    pub fn new(history: SharedHistory) -> Self {
        Self::with_config(
            history,
            StrengthIntelligenceConfig::global().prediction.clone(),
        )
    }

    /// Create a predictor with explicit configuration
    #[must_use]
    pub fn with_config(history: SharedHistory, config: PredictionConfig) -> Self {
        Self {
            history,
            config,
            models: DashMap::new(),
        }
    }

    /// Fit the user's history for `exercise` and suggest the next weight
    ///
    /// The fitted model replaces any previous one for the same key.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisFailure::NoPrediction`] with too little history or a degenerate fit
    pub fn predict_next_weight(
        &self,
        user: &str,
        exercise: &str,
        use_rpe: bool,
    ) -> Result<f64, AnalysisFailure> {
        let mut history = self.history.get_exercise_history(user, exercise);
        if history.len() < self.config.min_history_sessions {
            debug!(
                user,
                exercise,
                sessions = history.len(),
                "Not enough sessions for weight prediction"
            );
            return Err(AnalysisFailure::NoPrediction);
        }
        history.sort_by_key(WorkoutEntry::date);

        let feature_set = if use_rpe {
            FeatureSet::DaysRpeInteraction
        } else {
            FeatureSet::Days
        };
        let start = history[0].date();
        let day_offsets: Vec<f64> = history
            .iter()
            .map(|w| (w.date() - start).num_days() as f64)
            .collect();
        let rows: Vec<Vec<f64>> = history
            .iter()
            .zip(&day_offsets)
            .map(|(w, days)| feature_set.row(*days, f64::from(w.rpe())))
            .collect();
        let targets: Vec<f64> = history.iter().map(WorkoutEntry::weight).collect();

        let fit = StatisticalAnalyzer::least_squares(&rows, &targets).map_err(|e| {
            warn!(user, exercise, error = %e, "Weight regression failed");
            AnalysisFailure::NoPrediction
        })?;

        let (user_key, exercise_key) = (normalize_name(user), normalize_name(exercise));
        self.models.insert(
            (user_key.clone(), exercise_key.clone()),
            FittedModel {
                user: user_key,
                exercise: exercise_key,
                feature_set,
                intercept: fit.intercept,
                coefficients: fit.coefficients.clone(),
                r_squared: fit.r_squared,
                mean_absolute_error: fit.mean_absolute_error,
                sample_count: fit.sample_count,
                fitted_at: Utc::now(),
            },
        );

        let last_weight = targets[targets.len() - 1];
        let next_day = day_offsets[day_offsets.len() - 1] + self.config.projection_days as f64;
        let recent_rpe: Vec<f64> = history
            .iter()
            .rev()
            .take(self.config.recent_rpe_sessions)
            .map(|w| f64::from(w.rpe()))
            .collect();
        let projected_rpe = StatisticalAnalyzer::mean(&recent_rpe).unwrap_or_default();

        let raw = fit.predict(&feature_set.row(next_day, projected_rpe));
        if !raw.is_finite() {
            warn!(user, exercise, "Weight regression produced a non-finite prediction");
            return Err(AnalysisFailure::NoPrediction);
        }

        let predicted = self.bounded_target(last_weight, raw - last_weight);
        debug!(
            user,
            exercise,
            raw,
            last_weight,
            predicted,
            r_squared = fit.r_squared,
            "Predicted next weight"
        );
        Ok(predicted)
    }

    /// Clamp the raw increase, add it to `last`, and round to the plate grid
    ///
    /// The minimum increase wins when it exceeds the fractional cap, so very
    /// light loads still move up by one increment.
    fn bounded_target(&self, last: f64, raw_delta: f64) -> f64 {
        let cfg = &self.config;
        let max_increase = cfg.max_increase_fraction * last;
        let suggested = raw_delta.min(max_increase).max(cfg.min_increase);

        let increment = cfg.rounding_increment;
        let upper = last + max_increase.max(cfg.min_increase);
        let lower = last + cfg.min_increase;

        let mut target = round_to_increment(last + suggested, increment);
        if target > upper + GRID_TOLERANCE {
            target = ((upper + GRID_TOLERANCE) / increment).floor() * increment;
        }
        if target < lower - GRID_TOLERANCE {
            target = ((lower - GRID_TOLERANCE) / increment).ceil() * increment;
        }
        target
    }

    /// R² of the last fit for this key, if one exists
    #[must_use]
    pub fn get_model_accuracy(&self, user: &str, exercise: &str) -> Option<f64> {
        self.models
            .get(&(normalize_name(user), normalize_name(exercise)))
            .map(|model| model.r_squared)
    }

    /// Full metrics of the last fit for this key, if one exists
    #[must_use]
    pub fn get_model_metrics(&self, user: &str, exercise: &str) -> Option<FittedModel> {
        self.models
            .get(&(normalize_name(user), normalize_name(exercise)))
            .map(|model| model.value().clone())
    }

    /// Number of cached models
    #[must_use]
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Predict every exercise the user has logged, in parallel, sorted by name
    #[must_use]
    pub fn predict_all_exercises(&self, user: &str) -> Vec<ExercisePrediction> {
        // Keyed by normalized name; keeps the first spelling and the latest weight
        let mut exercises: BTreeMap<String, (String, f64)> = BTreeMap::new();
        for workout in self.history.get_user_workouts(user) {
            exercises
                .entry(normalize_name(workout.exercise()))
                .and_modify(|(_, last)| *last = workout.weight())
                .or_insert_with(|| (workout.exercise().to_owned(), workout.weight()));
        }

        exercises
            .into_values()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|(exercise, last_weight)| {
                let outcome = self.predict_next_weight(user, &exercise, true);
                ExercisePrediction {
                    exercise,
                    last_weight,
                    predicted_weight: outcome.ok(),
                    failure: outcome.err(),
                }
            })
            .collect()
    }
}
