// ABOUTME: Athlete-level facade sharing one history provider across every analyzer
// ABOUTME: Builds combined reports with per-exercise prediction, trend, and plateau results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Strength Analytics
//!
//! [`StrengthAnalytics`] owns one instance of each analyzer, all reading the
//! same [`SharedHistory`]. [`AthleteReport`] gathers a full picture for one
//! user at a reference date, including lifetime [`WorkoutStats`] and personal
//! records.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use strength_core::errors::AnalysisFailure;
use strength_core::models::{normalize_name, WorkoutEntry};
use tracing::{debug, info};

use crate::intelligence::{
    DeloadAdvisor, DeloadRecommendation, FatigueAssessment, FatigueScorer, LoadRecommender,
    OneRepMaxEstimator, PlateauAssessment, PlateauDetector, ProgressionPlanner,
    ReadinessCalculator, RecoveryAdvisor, RecoveryRecommendation, SharedHistory,
    StrengthIntelligenceConfig, TrainingLoadReport, TrainingReadiness, TrendAnalyzer,
    TrendSummary, WeightPredictor, WorkoutVolume,
};
use crate::intelligence::statistical_analysis::round_to;

/// Serializable analysis result: either a value or a failure tag with guidance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome<T> {
    /// `"ok"` or the failure tag
    pub status: String,
    /// Present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// Present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<String>,
}

impl<T> Outcome<T> {
    /// True when the analysis produced a value
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_some()
    }
}

impl<T> From<Result<T, AnalysisFailure>> for Outcome<T> {
    fn from(result: Result<T, AnalysisFailure>) -> Self {
        match result {
            Ok(value) => Self {
                status: "ok".to_owned(),
                result: Some(value),
                guidance: None,
            },
            Err(failure) => Self {
                status: failure.tag().to_owned(),
                result: None,
                guidance: Some(failure.guidance().to_owned()),
            },
        }
    }
}

/// Per-exercise section of an [`AthleteReport`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseReport {
    /// Exercise name as first logged
    pub exercise: String,
    /// Next suggested weight
    pub predicted_weight: Outcome<f64>,
    /// Trend over the default window
    pub trend: Outcome<TrendSummary>,
    /// Plateau risk over the plateau window
    pub plateau: Outcome<PlateauAssessment>,
}

/// Lifetime totals for one user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutStats {
    /// Logged sessions
    pub total_workouts: usize,
    /// Distinct exercises, case-insensitive
    pub unique_exercises: usize,
    /// Sum of sets
    pub total_sets: u32,
    /// Sum of sets × reps
    pub total_reps: u32,
    /// Mean RPE to one decimal, 0 when nothing is logged
    pub avg_rpe: f64,
    /// Heaviest weight across every exercise
    pub max_weight: f64,
    /// Earliest session date
    pub first_workout: Option<NaiveDate>,
    /// Latest session date
    pub last_workout: Option<NaiveDate>,
}

/// Combined analysis for one user at one reference date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteReport {
    /// User analyzed
    pub user: String,
    /// Reference date
    pub as_of: NaiveDate,
    /// Lifetime totals
    pub stats: WorkoutStats,
    /// Heaviest weight per exercise
    pub personal_records: BTreeMap<String, f64>,
    /// Fatigue over the default window
    pub fatigue: FatigueAssessment,
    /// Readiness to train
    pub readiness: TrainingReadiness,
    /// Deload advice
    pub deload: DeloadRecommendation,
    /// Load advisories over the default window
    pub training_load: Outcome<TrainingLoadReport>,
    /// Recovery advice for the current fatigue band
    pub recovery: Vec<RecoveryRecommendation>,
    /// One section per exercise, sorted by name
    pub exercises: Vec<ExerciseReport>,
}

/// Every analyzer wired to one history provider
pub struct StrengthAnalytics {
    history: SharedHistory,
    weights: WeightPredictor,
    trends: TrendAnalyzer,
    plateaus: PlateauDetector,
    one_rep_max: OneRepMaxEstimator,
    planner: ProgressionPlanner,
    load: LoadRecommender,
    fatigue: FatigueScorer,
    deload: DeloadAdvisor,
    readiness: ReadinessCalculator,
    recovery: RecoveryAdvisor,
}

impl StrengthAnalytics {
    /// Build analyzers using the global configuration
    #[must_use]
    pub fn new(history: SharedHistory) -> Self {
        Self::with_config(history, StrengthIntelligenceConfig::global())
    }

    /// Build analyzers from an explicit configuration
    #[must_use]
    pub fn with_config(history: SharedHistory, config: &StrengthIntelligenceConfig) -> Self {
        let trends = TrendAnalyzer::with_config(history.clone(), config.trend.clone());
        let fatigue = FatigueScorer::with_config(history.clone(), config.fatigue.clone());
        Self {
            weights: WeightPredictor::with_config(history.clone(), config.prediction.clone()),
            plateaus: PlateauDetector::with_config(trends.clone(), config.plateau.clone()),
            one_rep_max: OneRepMaxEstimator::new(history.clone()),
            planner: ProgressionPlanner::with_trends(history.clone(), trends.clone()),
            load: LoadRecommender::with_config(history.clone(), config.load.clone()),
            deload: DeloadAdvisor::with_config(
                history.clone(),
                fatigue.clone(),
                config.deload.clone(),
            ),
            readiness: ReadinessCalculator::with_config(
                history.clone(),
                fatigue.clone(),
                config.readiness.clone(),
            ),
            recovery: RecoveryAdvisor::with_scorer(fatigue.clone()),
            trends,
            fatigue,
            history,
        }
    }

    /// Next-weight predictor and its model cache
    #[must_use]
    pub const fn weights(&self) -> &WeightPredictor {
        &self.weights
    }

    /// Trend analyzer
    #[must_use]
    pub const fn trends(&self) -> &TrendAnalyzer {
        &self.trends
    }

    /// Plateau detector
    #[must_use]
    pub const fn plateaus(&self) -> &PlateauDetector {
        &self.plateaus
    }

    /// One-rep-max estimator
    #[must_use]
    pub const fn one_rep_max(&self) -> &OneRepMaxEstimator {
        &self.one_rep_max
    }

    /// Progression planner
    #[must_use]
    pub const fn planner(&self) -> &ProgressionPlanner {
        &self.planner
    }

    /// Training load recommender
    #[must_use]
    pub const fn load(&self) -> &LoadRecommender {
        &self.load
    }

    /// Fatigue scorer
    #[must_use]
    pub const fn fatigue(&self) -> &FatigueScorer {
        &self.fatigue
    }

    /// Deload advisor
    #[must_use]
    pub const fn deload(&self) -> &DeloadAdvisor {
        &self.deload
    }

    /// Readiness calculator
    #[must_use]
    pub const fn readiness(&self) -> &ReadinessCalculator {
        &self.readiness
    }

    /// Recovery advisor
    #[must_use]
    pub const fn recovery(&self) -> &RecoveryAdvisor {
        &self.recovery
    }

    /// Distinct exercises a user has logged, first spelling kept, sorted by normalized name
    #[must_use]
    pub fn exercises(&self, user: &str) -> Vec<String> {
        let mut names: BTreeMap<String, String> = BTreeMap::new();
        for workout in self.history.get_user_workouts(user) {
            names
                .entry(normalize_name(workout.exercise()))
                .or_insert_with(|| workout.exercise().to_owned());
        }
        names.into_values().collect()
    }

    /// Lifetime totals across every exercise
    #[must_use]
    pub fn workout_stats(&self, user: &str) -> WorkoutStats {
        let workouts = self.history.get_user_workouts(user);
        let volume = WorkoutVolume::from_workouts(&workouts);
        let exercises: HashSet<String> = workouts
            .iter()
            .map(|w| normalize_name(w.exercise()))
            .collect();

        WorkoutStats {
            total_workouts: volume.session_count,
            unique_exercises: exercises.len(),
            total_sets: volume.total_sets,
            total_reps: volume.total_reps,
            avg_rpe: round_to(volume.avg_rpe, 1),
            max_weight: workouts.iter().map(WorkoutEntry::weight).fold(0.0, f64::max),
            first_workout: workouts.iter().map(WorkoutEntry::date).min(),
            last_workout: workouts.iter().map(WorkoutEntry::date).max(),
        }
    }

    /// Heaviest logged weight per exercise, keyed by the first spelling logged
    #[must_use]
    pub fn personal_records(&self, user: &str) -> BTreeMap<String, f64> {
        let mut records: BTreeMap<String, (String, f64)> = BTreeMap::new();
        for workout in self.history.get_user_workouts(user) {
            let record = records
                .entry(normalize_name(workout.exercise()))
                .or_insert_with(|| (workout.exercise().to_owned(), workout.weight()));
            record.1 = record.1.max(workout.weight());
        }
        records.into_values().collect()
    }

    /// Full report for `user` as of `as_of`
    #[must_use]
    pub fn athlete_report(&self, user: &str, as_of: NaiveDate) -> AthleteReport {
        let exercises: Vec<ExerciseReport> = self
            .exercises(user)
            .into_par_iter()
            .map(|exercise| self.exercise_report(user, exercise, as_of))
            .collect();

        let report = AthleteReport {
            user: user.to_owned(),
            as_of,
            stats: self.workout_stats(user),
            personal_records: self.personal_records(user),
            fatigue: self.fatigue.get_fatigue_status(user, as_of),
            readiness: self.readiness.calculate_training_readiness(user, as_of),
            deload: self.deload.recommend_deload(user, as_of),
            training_load: self
                .load
                .recommend_training_load(user, self.load.default_window_days(), as_of)
                .into(),
            recovery: self.recovery.get_recovery_recommendations(user, as_of),
            exercises,
        };
        info!(
            user,
            %as_of,
            exercises = report.exercises.len(),
            workouts = report.stats.total_workouts,
            fatigue = report.fatigue.score,
            "Built athlete report"
        );
        report
    }

    fn exercise_report(&self, user: &str, exercise: String, as_of: NaiveDate) -> ExerciseReport {
        let predicted_weight = self.weights.predict_next_weight(user, &exercise, true);
        let trend = self.trends.analyze_strength_trends(
            user,
            &exercise,
            self.trends.default_window_days(),
            as_of,
        );
        let plateau = self
            .plateaus
            .predict_performance_plateau(user, &exercise, as_of);
        debug!(user, exercise = %exercise, "Built exercise report");

        ExerciseReport {
            exercise,
            predicted_weight: predicted_weight.into(),
            trend: trend.into(),
            plateau: plateau.into(),
        }
    }
}
