// ABOUTME: Integration tests for fatigue scoring, deload advice, readiness, and recovery
// ABOUTME: Compares a moderate week of benching against a maximal two-week block
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{analytics_with, as_of, session, weekly_bench, USER};
use pierre_strength::intelligence::{FatigueStatus, Priority, ReadinessLevel, RecoveryCategory};
use strength_core::models::WorkoutEntry;

/// Fifteen consecutive days at the maximum accepted volume and effort
fn maximal_block() -> Vec<WorkoutEntry> {
    (0..15)
        .map(|d| session("Squat", d, 20, 50, 1000.0, 10))
        .collect()
}

#[test]
fn test_no_workouts_is_zero_fatigue() {
    let analytics = analytics_with(Vec::new());
    let status = analytics.fatigue().get_fatigue_status(USER, as_of());

    assert!(status.score.abs() < f64::EPSILON);
    assert_eq!(status.status, FatigueStatus::Low);
    assert_eq!(status.message, "Low fatigue levels. Good recovery status.");
}

#[test]
fn test_weekly_bench_breakdown() {
    let analytics = analytics_with(weekly_bench());
    let breakdown = analytics
        .fatigue()
        .calculate_fatigue_breakdown(USER, 7, as_of());

    // Sessions 7 days ago (RPE 7) and today (RPE 8): 6 sets, 4980 tonnage
    let volume = (6.0 / 50.0 * 10.0 + 4980.0 / 10000.0 * 10.0) / 2.0;
    let weighted_rpe = (7.0 * 0.5 + 8.0) / 1.5;
    let intensity = (weighted_rpe - 6.0) / 4.0 * 10.0;
    assert!((breakdown.volume - volume).abs() < 1e-9);
    assert!((breakdown.intensity - intensity).abs() < 1e-9);
    // 2 training days out of 7 is low frequency
    assert!((breakdown.frequency - 1.0).abs() < 1e-9);
    // RPE rose by exactly 0.5 while sets grew: volume-held penalty only
    assert!((breakdown.trend - 2.0).abs() < 1e-9);

    let total = 0.3 * volume + 0.4 * intensity + 0.2 + 0.2;
    assert!((breakdown.total - total).abs() < 1e-9);

    let status = analytics.fatigue().get_fatigue_status(USER, as_of());
    assert_eq!(status.status, FatigueStatus::Low);
}

#[test]
fn test_maximal_block_is_very_high_and_bounded() {
    let analytics = analytics_with(maximal_block());
    let status = analytics.fatigue().get_fatigue_status(USER, as_of());

    // 0.3 * 10 + 0.4 * 10 + 0.2 * 7, no trend component at constant effort
    assert!((status.score - 8.4).abs() < 1e-9);
    assert_eq!(status.status, FatigueStatus::VeryHigh);
    assert_eq!(status.color, "red");

    for days in [1, 3, 7, 14, 30, 365] {
        let score = analytics
            .fatigue()
            .calculate_fatigue_score(USER, days, as_of());
        assert!((0.0..=10.0).contains(&score), "{days} days gave {score}");
    }
}

#[test]
fn test_fatigue_history_by_week() {
    let analytics = analytics_with(weekly_bench());
    let history = analytics.fatigue().get_fatigue_history(USER, 30, as_of());

    assert_eq!(history.len(), 3);
    assert_eq!(history[0].week_end, as_of());
    assert_eq!(history[0].week_start, as_of() - Duration::days(6));
    // 3 sets -> 0.75, RPE 8 -> 2.5; 3.25 rounds half to even
    assert!((history[0].fatigue_score - 3.2).abs() < 1e-9);
    assert!((history[1].fatigue_score - 2.0).abs() < 1e-9);
    assert!((history[2].fatigue_score - 2.0).abs() < 1e-9);
    assert!(history.iter().all(|week| week.workouts == 1));

    assert!(analytics
        .fatigue()
        .get_fatigue_history("Jane Smith", 30, as_of())
        .is_empty());
}

#[test]
fn test_deload_for_maximal_block() {
    let analytics = analytics_with(maximal_block());
    let rec = analytics.deload().recommend_deload(USER, as_of());

    // High fatigue 3 + high RPE 2 + very high sessions 2 + frequency 1
    assert!(rec.should_deload);
    assert_eq!(rec.deload_score, 8);
    assert_eq!(
        rec.indicators,
        vec![
            "High fatigue levels".to_owned(),
            "Consistently high RPE".to_owned(),
            "Multiple very high intensity sessions".to_owned(),
            "High training frequency".to_owned(),
        ]
    );
    assert_eq!(
        rec.suggestion,
        "Take a deload week: reduce weight by 20-30% and focus on form"
    );
}

#[test]
fn test_light_deload_band() {
    // Three RPE 9 sessions averaging 8.25: very high sessions indicator alone
    let analytics = analytics_with(vec![
        session("Squat", 10, 3, 5, 100.0, 9),
        session("Squat", 5, 3, 5, 100.0, 6),
        session("Squat", 3, 3, 5, 100.0, 9),
        session("Squat", 1, 3, 5, 100.0, 9),
    ]);
    let rec = analytics.deload().recommend_deload(USER, as_of());

    assert!(rec.should_deload);
    assert_eq!(rec.deload_score, 2);
    assert_eq!(rec.reason, "Multiple very high intensity sessions");
    assert_eq!(rec.suggestion, "Consider a light deload: reduce volume by 30-40%");
}

#[test]
fn test_readiness_levels() {
    let rested = analytics_with(vec![session("Squat", 2, 3, 5, 100.0, 6)]);
    let readiness = rested.readiness().calculate_training_readiness(USER, as_of());
    assert_eq!(readiness.status, ReadinessLevel::Excellent);
    assert_eq!(readiness.message, "Ready for high-intensity training");

    let exhausted = analytics_with(maximal_block());
    let readiness = exhausted
        .readiness()
        .calculate_training_readiness(USER, as_of());
    // 10 - 8.4 plus the full consistency bonus
    assert!((readiness.readiness_score - 2.6).abs() < 1e-9);
    assert_eq!(readiness.status, ReadinessLevel::Poor);
    assert!((readiness.fatigue_component.unwrap() - 8.4).abs() < 1e-9);

    let unknown = analytics_with(vec![session("Squat", 30, 3, 5, 100.0, 6)]);
    let readiness = unknown.readiness().calculate_training_readiness(USER, as_of());
    assert_eq!(readiness.status, ReadinessLevel::Unknown);
}

#[test]
fn test_recovery_recommendations_follow_fatigue() {
    let rested = analytics_with(weekly_bench());
    let recs = rested.recovery().get_recovery_recommendations(USER, as_of());
    assert_eq!(recs.len(), 3);
    assert_eq!(recs[2].category, RecoveryCategory::Training);
    assert_eq!(
        recs[2].message,
        "Good recovery status. Can maintain or slightly increase training load"
    );

    let exhausted = analytics_with(maximal_block());
    let recs = exhausted
        .recovery()
        .get_recovery_recommendations(USER, as_of());
    assert_eq!(recs.len(), 5);
    assert_eq!(recs[0].category, RecoveryCategory::Sleep);
    assert_eq!(recs[0].message, "Ensure 7-9 hours of quality sleep per night");
    assert_eq!(recs[2].priority, Priority::Critical);
    assert_eq!(
        recs[2].message,
        "Take complete rest or very light active recovery only"
    );
}
