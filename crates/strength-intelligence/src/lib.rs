// ABOUTME: Strength intelligence crate root exposing every analyzer
// ABOUTME: Weight prediction, trends, plateau risk, 1RM, planning, load, fatigue, deload, readiness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Strength Intelligence
//!
//! Analytics over a user's logged strength sessions. Every analyzer reads
//! workouts through a [`HistoryProvider`] and returns either a typed record or
//! an [`AnalysisFailure`](strength_core::errors::AnalysisFailure) tag.
//!
//! Windowed computations take an explicit `as_of` date so results depend
//! only on the provider snapshot, the reference date, and configuration.

/// Analyzer configuration with environment overrides
pub mod config;
/// Deload recommendation from fatigue and intensity indicators
pub mod deload_advisor;
/// Composite fatigue scoring, status bands, and weekly history
pub mod fatigue_scorer;
/// Workout history access trait
pub mod history;
/// Training frequency, intensity, and volume advisories
pub mod load_recommender;
/// One-rep max estimation from RPE and reps
pub mod one_rep_max;
/// Plateau risk scoring on top of trend summaries
pub mod plateau_detector;
/// Multi-week progression plans
pub mod progression_planner;
/// Training readiness from fatigue and RPE consistency
pub mod readiness_calculator;
/// Recovery recommendations per fatigue band
pub mod recovery_advisor;
/// Least-squares regression and descriptive statistics
pub mod statistical_analysis;
/// Weight and RPE trend summaries
pub mod trend_analyzer;
/// Shared enums for trend direction, confidence, and priority
pub mod types;
/// Aggregate volume statistics over a set of workouts
pub mod volume;
/// Regression-based next-weight predictor with a per-key model cache
pub mod weight_predictor;

pub use config::StrengthIntelligenceConfig;
pub use deload_advisor::{DeloadAdvisor, DeloadRecommendation};
pub use fatigue_scorer::{
    FatigueAssessment, FatigueBreakdown, FatigueScorer, FatigueStatus, WeeklyFatigue,
};
pub use history::{HistoryProvider, SharedHistory};
pub use load_recommender::{LoadAdvisory, LoadCategory, LoadMetrics, LoadRecommender, TrainingLoadReport};
pub use one_rep_max::{OneRepMaxEstimate, OneRepMaxEstimator};
pub use plateau_detector::{PlateauAssessment, PlateauDetector, PlateauRisk};
pub use progression_planner::{PlannedWeek, ProgressionPlan, ProgressionPlanner};
pub use readiness_calculator::{ReadinessCalculator, ReadinessLevel, TrainingReadiness};
pub use recovery_advisor::{RecoveryAdvisor, RecoveryCategory, RecoveryRecommendation};
pub use statistical_analysis::{RegressionResult, StatisticalAnalyzer};
pub use trend_analyzer::{TrendAnalyzer, TrendSummary};
pub use types::{Confidence, Priority, TrendDirection};
pub use volume::WorkoutVolume;
pub use weight_predictor::{ExercisePrediction, FeatureSet, FittedModel, WeightPredictor};

#[cfg(test)]
mod test_support;
