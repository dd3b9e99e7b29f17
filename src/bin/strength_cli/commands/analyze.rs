// ABOUTME: Analysis commands for strength-cli
// ABOUTME: Each command runs one analyzer and prints its JSON result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use clap::Args;
use pierre_strength::analytics::StrengthAnalytics;
use serde_json::json;
use strength_core::errors::AppResult;
use tracing::info;

use crate::helpers::output::{print_json, print_outcome};

type Result<T> = AppResult<T>;

/// Selects a user
#[derive(Args)]
pub struct UserArgs {
    /// User name (case-insensitive)
    #[arg(long)]
    pub user: String,
}

/// Selects a user and exercise
#[derive(Args)]
pub struct ExerciseArgs {
    /// User name (case-insensitive)
    #[arg(long)]
    pub user: String,

    /// Exercise name (case-insensitive)
    #[arg(long)]
    pub exercise: String,
}

/// Next-weight prediction; also reports the fit quality when available
pub fn predict(analytics: &StrengthAnalytics, target: &ExerciseArgs, use_rpe: bool) -> Result<bool> {
    let weights = analytics.weights();
    match weights.predict_next_weight(&target.user, &target.exercise, use_rpe) {
        Ok(predicted) => {
            let model = weights.get_model_metrics(&target.user, &target.exercise);
            print_json(&json!({
                "status": "ok",
                "result": {
                    "predicted_weight": predicted,
                    "model": model,
                }
            }))?;
            Ok(true)
        }
        Err(failure) => print_outcome::<f64>(Err(failure)),
    }
}

/// Predictions for every exercise the user has logged
pub fn predict_all(analytics: &StrengthAnalytics, user: &UserArgs) -> Result<bool> {
    let predictions = analytics.weights().predict_all_exercises(&user.user);
    info!(user = %user.user, exercises = predictions.len(), "Predicted all exercises");
    print_json(&predictions)?;
    Ok(true)
}

/// Strength trend summary
pub fn trends(
    analytics: &StrengthAnalytics,
    target: &ExerciseArgs,
    days: Option<u32>,
    as_of: NaiveDate,
) -> Result<bool> {
    let trends = analytics.trends();
    let days = days.unwrap_or_else(|| trends.default_window_days());
    print_outcome(trends.analyze_strength_trends(&target.user, &target.exercise, days, as_of))
}

/// Plateau risk
pub fn plateau(analytics: &StrengthAnalytics, target: &ExerciseArgs, as_of: NaiveDate) -> Result<bool> {
    print_outcome(
        analytics
            .plateaus()
            .predict_performance_plateau(&target.user, &target.exercise, as_of),
    )
}

/// One-rep max estimate
pub fn one_rep_max(
    analytics: &StrengthAnalytics,
    target: &ExerciseArgs,
    reps: u32,
    weight: f64,
    rpe: u8,
) -> Result<bool> {
    print_outcome(
        analytics
            .one_rep_max()
            .predict_1rm(&target.user, &target.exercise, reps, weight, rpe),
    )
}

/// Progression plan
pub fn plan(
    analytics: &StrengthAnalytics,
    target: &ExerciseArgs,
    weeks: u32,
    as_of: NaiveDate,
) -> Result<bool> {
    print_outcome(
        analytics
            .planner()
            .generate_progression_plan(&target.user, &target.exercise, weeks, as_of),
    )
}

/// Training load report
pub fn load(
    analytics: &StrengthAnalytics,
    user: &UserArgs,
    days: Option<u32>,
    as_of: NaiveDate,
) -> Result<bool> {
    let load = analytics.load();
    let days = days.unwrap_or_else(|| load.default_window_days());
    print_outcome(load.recommend_training_load(&user.user, days, as_of))
}

/// Fatigue status with its breakdown over the chosen window
pub fn fatigue(
    analytics: &StrengthAnalytics,
    user: &UserArgs,
    days: Option<u32>,
    as_of: NaiveDate,
) -> Result<bool> {
    let scorer = analytics.fatigue();
    let days = days.unwrap_or_else(|| scorer.default_window_days());
    let breakdown = scorer.calculate_fatigue_breakdown(&user.user, days, as_of);
    let status = scorer.get_fatigue_status(&user.user, as_of);
    print_json(&json!({
        "status": "ok",
        "result": {
            "days_analyzed": days,
            "breakdown": breakdown,
            "assessment": status,
        }
    }))?;
    Ok(true)
}

/// Deload recommendation
pub fn deload(analytics: &StrengthAnalytics, user: &UserArgs, as_of: NaiveDate) -> Result<bool> {
    print_json(&analytics.deload().recommend_deload(&user.user, as_of))?;
    Ok(true)
}

/// Training readiness
pub fn readiness(analytics: &StrengthAnalytics, user: &UserArgs, as_of: NaiveDate) -> Result<bool> {
    print_json(
        &analytics
            .readiness()
            .calculate_training_readiness(&user.user, as_of),
    )?;
    Ok(true)
}

/// Recovery recommendations
pub fn recovery(analytics: &StrengthAnalytics, user: &UserArgs, as_of: NaiveDate) -> Result<bool> {
    print_json(
        &analytics
            .recovery()
            .get_recovery_recommendations(&user.user, as_of),
    )?;
    Ok(true)
}

/// Weekly fatigue history
pub fn fatigue_history(
    analytics: &StrengthAnalytics,
    user: &UserArgs,
    days: u32,
    as_of: NaiveDate,
) -> Result<bool> {
    print_json(&analytics.fatigue().get_fatigue_history(&user.user, days, as_of))?;
    Ok(true)
}

/// Lifetime totals and personal records
pub fn stats(analytics: &StrengthAnalytics, user: &UserArgs) -> Result<bool> {
    print_json(&json!({
        "status": "ok",
        "result": {
            "stats": analytics.workout_stats(&user.user),
            "personal_records": analytics.personal_records(&user.user),
        }
    }))?;
    Ok(true)
}

/// Combined athlete report
pub fn report(analytics: &StrengthAnalytics, user: &UserArgs, as_of: NaiveDate) -> Result<bool> {
    print_json(&analytics.athlete_report(&user.user, as_of))?;
    Ok(true)
}
