// ABOUTME: Integration tests for strength trends and plateau risk
// ABOUTME: Uses a progressing squat and a stalled deadlift over eight weeks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{analytics_with, as_of, session, training_block, USER};
use pierre_strength::intelligence::{PlateauRisk, TrendDirection};
use strength_core::errors::AnalysisFailure;

#[test]
fn test_progressing_squat_trend() {
    let analytics = analytics_with(training_block());
    let trend = analytics
        .trends()
        .analyze_strength_trends(USER, "Squat", 90, as_of())
        .unwrap();

    assert_eq!(trend.trend, TrendDirection::Increasing);
    assert_eq!(trend.total_sessions, 8);
    assert_eq!(trend.days_analyzed, 49);
    assert!((trend.weight_change - 17.5).abs() < 1e-9);
    assert!((trend.percentage_change - 14.6).abs() < 1e-9);
    assert!((trend.weekly_progression - 2.5).abs() < 1e-9);
    assert_eq!(trend.rpe_trend, TrendDirection::Stable);
    assert!((trend.avg_rpe - 7.0).abs() < 1e-9);
}

#[test]
fn test_window_excludes_older_sessions() {
    let analytics = analytics_with(training_block());
    let trend = analytics
        .trends()
        .analyze_strength_trends(USER, "Squat", 21, as_of())
        .unwrap();

    // Sessions 21, 14, and 7 days ago
    assert_eq!(trend.total_sessions, 3);
    assert!((trend.first_weight - 132.5).abs() < f64::EPSILON);
    assert!((trend.last_weight - 137.5).abs() < f64::EPSILON);
}

#[test]
fn test_trend_failures() {
    let analytics = analytics_with(vec![
        session("Squat", 120, 5, 5, 100.0, 7),
        session("Squat", 3, 5, 5, 110.0, 7),
    ]);
    let trends = analytics.trends();

    assert_eq!(
        trends.analyze_strength_trends(USER, "Bench Press", 90, as_of()),
        Err(AnalysisFailure::NoData)
    );
    assert_eq!(
        trends.analyze_strength_trends(USER, "Squat", 90, as_of()),
        Err(AnalysisFailure::InsufficientData)
    );
}

#[test]
fn test_rising_effort_at_flat_weight() {
    let analytics = analytics_with(vec![
        session("Bench Press", 28, 3, 5, 100.0, 6),
        session("Bench Press", 21, 3, 5, 100.0, 7),
        session("Bench Press", 14, 3, 5, 100.0, 8),
        session("Bench Press", 7, 3, 5, 100.0, 9),
    ]);

    let trend = analytics
        .trends()
        .analyze_strength_trends(USER, "Bench Press", 90, as_of())
        .unwrap();
    assert_eq!(trend.trend, TrendDirection::Stable);
    assert_eq!(trend.rpe_trend, TrendDirection::Increasing);

    // Minimal progression (2) plus effort rising without weight (3)
    let plateau = analytics
        .plateaus()
        .predict_performance_plateau(USER, "Bench Press", as_of())
        .unwrap();
    assert_eq!(plateau.score, 5);
    assert_eq!(plateau.risk, PlateauRisk::High);
    assert_eq!(plateau.recommendation, "Consider deload or program change");
}

#[test]
fn test_plateau_risk_levels() {
    let analytics = analytics_with(training_block());
    let plateaus = analytics.plateaus();

    let squat = plateaus
        .predict_performance_plateau(USER, "Squat", as_of())
        .unwrap();
    assert_eq!(squat.risk, PlateauRisk::Low);
    assert_eq!(squat.score, 0);
    assert!(squat.indicators.is_empty());
    assert_eq!(squat.recommendation, "Continue current progression");

    // No progression (2) and RPE 9 throughout (2)
    let deadlift = plateaus
        .predict_performance_plateau(USER, "deadlift", as_of())
        .unwrap();
    assert_eq!(deadlift.risk, PlateauRisk::Moderate);
    assert_eq!(deadlift.score, 4);
    assert_eq!(
        deadlift.indicators,
        vec![
            "Minimal weight progression".to_owned(),
            "Consistently high RPE".to_owned()
        ]
    );
    assert_eq!(deadlift.trend_data.total_sessions, 8);
}

#[test]
fn test_plateau_without_window_data() {
    let analytics = analytics_with(vec![session("Squat", 3, 5, 5, 100.0, 7)]);
    assert_eq!(
        analytics
            .plateaus()
            .predict_performance_plateau(USER, "Squat", as_of()),
        Err(AnalysisFailure::InsufficientData)
    );
}
