// ABOUTME: Shared fixtures for strength analytics integration tests
// ABOUTME: Builds in-memory histories relative to a fixed reference date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_arguments
)]
//! Shared test utilities for `pierre_strength`

use std::env;
use std::sync::Once;

use chrono::{Duration, NaiveDate};
use pierre_strength::analytics::StrengthAnalytics;
use pierre_strength::config::StrengthIntelligenceConfig;
use pierre_strength::storage::InMemoryHistory;
use strength_core::models::{WorkoutEntry, WorkoutEntryBuilder};
use tracing::Level;

pub const USER: &str = "John Doe";

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed reference date for every windowed computation
pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

/// Session for [`USER`] dated `days_ago` days before [`as_of`]
pub fn session(
    exercise: &str,
    days_ago: i64,
    sets: u32,
    reps: u32,
    weight: f64,
    rpe: u8,
) -> WorkoutEntry {
    session_for(USER, exercise, days_ago, sets, reps, weight, rpe)
}

/// Session for any user
pub fn session_for(
    user: &str,
    exercise: &str,
    days_ago: i64,
    sets: u32,
    reps: u32,
    weight: f64,
    rpe: u8,
) -> WorkoutEntry {
    WorkoutEntryBuilder::new(user, exercise, as_of() - Duration::days(days_ago))
        .sets(sets)
        .reps(reps)
        .weight(weight)
        .rpe(rpe)
        .build()
        .unwrap()
}

/// Store holding `entries`
pub fn store_with(entries: Vec<WorkoutEntry>) -> InMemoryHistory {
    init_test_logging();
    InMemoryHistory::from_entries(entries).unwrap()
}

/// Analytics over `entries` with default (environment-free) configuration
pub fn analytics_with(entries: Vec<WorkoutEntry>) -> StrengthAnalytics {
    let store = store_with(entries);
    StrengthAnalytics::with_config(store.shared(), &StrengthIntelligenceConfig::default())
}

/// Three weekly bench sessions: 100 @7, 102.5 @7, 105 @8
pub fn weekly_bench() -> Vec<WorkoutEntry> {
    vec![
        session("Bench Press", 14, 3, 8, 100.0, 7),
        session("Bench Press", 7, 3, 8, 102.5, 7),
        session("Bench Press", 0, 3, 8, 105.0, 8),
    ]
}

/// Eight weeks of squats progressing 2.5 per week plus a stalled deadlift
pub fn training_block() -> Vec<WorkoutEntry> {
    let mut entries: Vec<WorkoutEntry> = (0..8)
        .map(|week| {
            session(
                "Squat",
                56 - week * 7,
                5,
                5,
                2.5f64.mul_add(week as f64, 120.0),
                7,
            )
        })
        .collect();
    entries.extend((0..8).map(|week| session("Deadlift", 54 - week * 7, 3, 5, 180.0, 9)));
    entries
}
