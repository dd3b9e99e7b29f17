// ABOUTME: Read-side contract for workout history consumed by every analyzer
// ABOUTME: Implementations own storage; analyzers only see ordered snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use strength_core::models::WorkoutEntry;

/// Source of logged workouts
///
/// User and exercise names match case-insensitively. Unknown users yield
/// empty vectors rather than errors.
pub trait HistoryProvider: Send + Sync {
    /// All sessions of one exercise for a user, ascending by date
    fn get_exercise_history(&self, user: &str, exercise: &str) -> Vec<WorkoutEntry>;

    /// Sessions dated within `[as_of - days, as_of]`, descending by date
    fn get_recent_workouts(&self, user: &str, days: u32, as_of: NaiveDate) -> Vec<WorkoutEntry>;

    /// Every session for a user, ascending by date
    fn get_user_workouts(&self, user: &str) -> Vec<WorkoutEntry>;
}

/// Provider shared between analyzers
pub type SharedHistory = Arc<dyn HistoryProvider>;

impl<T: HistoryProvider + ?Sized> HistoryProvider for Arc<T> {
    fn get_exercise_history(&self, user: &str, exercise: &str) -> Vec<WorkoutEntry> {
        (**self).get_exercise_history(user, exercise)
    }

    fn get_recent_workouts(&self, user: &str, days: u32, as_of: NaiveDate) -> Vec<WorkoutEntry> {
        (**self).get_recent_workouts(user, days, as_of)
    }

    fn get_user_workouts(&self, user: &str) -> Vec<WorkoutEntry> {
        (**self).get_user_workouts(user)
    }
}

/// Filter sessions to the window `[as_of - days, as_of]`
#[must_use]
pub fn within_window(workouts: &[WorkoutEntry], days: u32, as_of: NaiveDate) -> Vec<WorkoutEntry> {
    let start = as_of - Duration::days(i64::from(days));
    workouts
        .iter()
        .filter(|w| w.date() >= start && w.date() <= as_of)
        .cloned()
        .collect()
}
