// ABOUTME: Benchmark fixtures for generating realistic strength training histories
// ABOUTME: Provides deterministic session generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating strength training histories.

use chrono::{Duration, NaiveDate};
use pierre_strength::storage::InMemoryHistory;
use strength_core::models::{WorkoutEntry, WorkoutEntryBuilder};

/// User every generated session belongs to
pub const BENCH_USER: &str = "Bench Athlete";

/// Exercises rotated through by the generator
pub const EXERCISES: [&str; 4] = ["Squat", "Bench Press", "Deadlift", "Overhead Press"];

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// Two months of training
    Small,
    /// One year of training
    Medium,
    /// Several years of training
    Large,
}

impl HistorySize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 24,
            Self::Medium => 160,
            Self::Large => 1000,
        }
    }
}

/// Fixed reference date so results do not drift with the wall clock
#[must_use]
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap_or_default()
}

/// Generate one session, rotating exercises and cycling load and effort
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn generate_session(index: usize, count: usize) -> Option<WorkoutEntry> {
    let exercise = EXERCISES[index % EXERCISES.len()];
    let days_ago = ((count - index) * 2) as i64;
    let block = (index / EXERCISES.len()) as f64;
    let weight = 2.5f64.mul_add(block % 40.0, 60.0 + 20.0 * (index % EXERCISES.len()) as f64);
    let rpe = 6 + (index % 5) as u8;

    WorkoutEntryBuilder::new(BENCH_USER, exercise, reference_date() - Duration::days(days_ago))
        .sets(3 + (index % 3) as u32)
        .reps(5 + (index % 4) as u32)
        .weight(weight.min(1000.0))
        .rpe(rpe)
        .build()
        .ok()
}

/// Generate a deterministic history of `size` sessions, oldest first
#[must_use]
pub fn generate_history(size: HistorySize) -> Vec<WorkoutEntry> {
    let count = size.count();
    (0..count)
        .filter_map(|index| generate_session(index, count))
        .collect()
}

/// Store holding a generated history
#[must_use]
pub fn history_store(size: HistorySize) -> InMemoryHistory {
    InMemoryHistory::from_entries(generate_history(size)).unwrap_or_default()
}
