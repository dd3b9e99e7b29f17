// ABOUTME: Vector-backed history provider and entry helpers for unit tests
// ABOUTME: Mirrors the ordering contract of HistoryProvider implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use strength_core::models::{WorkoutEntry, WorkoutEntryBuilder};

use crate::history::{within_window, HistoryProvider, SharedHistory};

pub const USER: &str = "John Doe";

pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

/// Session `days_ago` days before [`as_of`]
pub fn session(exercise: &str, days_ago: i64, sets: u32, reps: u32, weight: f64, rpe: u8) -> WorkoutEntry {
    WorkoutEntryBuilder::new(USER, exercise, as_of() - Duration::days(days_ago))
        .sets(sets)
        .reps(reps)
        .weight(weight)
        .rpe(rpe)
        .build()
        .unwrap()
}

pub struct VecHistory(pub Vec<WorkoutEntry>);

impl VecHistory {
    pub fn shared(entries: Vec<WorkoutEntry>) -> SharedHistory {
        Arc::new(Self(entries))
    }
}

impl HistoryProvider for VecHistory {
    fn get_exercise_history(&self, user: &str, exercise: &str) -> Vec<WorkoutEntry> {
        let mut out: Vec<_> = self
            .0
            .iter()
            .filter(|w| w.is_for_user(user) && w.is_exercise(exercise))
            .cloned()
            .collect();
        out.sort_by_key(WorkoutEntry::date);
        out
    }

    fn get_recent_workouts(&self, user: &str, days: u32, as_of: NaiveDate) -> Vec<WorkoutEntry> {
        let mut out = within_window(&self.get_user_workouts(user), days, as_of);
        out.reverse();
        out
    }

    fn get_user_workouts(&self, user: &str) -> Vec<WorkoutEntry> {
        let mut out: Vec<_> = self.0.iter().filter(|w| w.is_for_user(user)).cloned().collect();
        out.sort_by_key(WorkoutEntry::date);
        out
    }
}
