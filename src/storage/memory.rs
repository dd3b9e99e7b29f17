// ABOUTME: In-memory workout store keyed by normalized user name
// ABOUTME: Validates entries on insert and serves ordered history snapshots to analyzers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::DashMap;
use strength_core::errors::AppResult;
use strength_core::models::{normalize_name, WorkoutEntry};
use strength_intelligence::history::{within_window, HistoryProvider, SharedHistory};
use tracing::debug;

/// Workout history held in memory
///
/// Cloning is cheap and shares the underlying map. Each user's sessions are
/// kept in ascending date order; same-day sessions keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    users: Arc<DashMap<String, Vec<WorkoutEntry>>>,
}

impl InMemoryHistory {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing entries, validating each
    ///
    /// # Errors
    ///
    /// Returns the first validation error encountered
    pub fn from_entries(entries: impl IntoIterator<Item = WorkoutEntry>) -> AppResult<Self> {
        let store = Self::new();
        for entry in entries {
            store.add_workout(entry)?;
        }
        Ok(store)
    }

    /// Record a session
    ///
    /// # Errors
    ///
    /// Returns an error if the entry fails range validation
    pub fn add_workout(&self, entry: WorkoutEntry) -> AppResult<()> {
        entry.validate()?;
        let key = normalize_name(entry.user());
        let mut sessions = self.users.entry(key).or_default();
        let position = sessions.partition_point(|w| w.date() <= entry.date());
        debug!(
            user = entry.user(),
            exercise = entry.exercise(),
            date = %entry.date(),
            "Recorded workout"
        );
        sessions.insert(position, entry);
        Ok(())
    }

    /// Every stored session, grouped by user then ascending by date
    #[must_use]
    pub fn all_workouts(&self) -> Vec<WorkoutEntry> {
        let mut keys: Vec<String> = self.users.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys.iter()
            .filter_map(|key| self.users.get(key).map(|sessions| sessions.clone()))
            .flatten()
            .collect()
    }

    /// Display names of every stored user, sorted case-insensitively
    #[must_use]
    pub fn users(&self) -> Vec<String> {
        let mut names: Vec<(String, String)> = self
            .users
            .iter()
            .filter_map(|e| {
                e.value()
                    .first()
                    .map(|w| (e.key().clone(), w.user().to_owned()))
            })
            .collect();
        names.sort();
        names.into_iter().map(|(_, name)| name).collect()
    }

    /// Total stored sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.iter().map(|e| e.value().len()).sum()
    }

    /// True when nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Share this store with analyzers
    #[must_use]
    pub fn shared(&self) -> SharedHistory {
        Arc::new(self.clone())
    }
}

impl HistoryProvider for InMemoryHistory {
    fn get_exercise_history(&self, user: &str, exercise: &str) -> Vec<WorkoutEntry> {
        self.users
            .get(&normalize_name(user))
            .map(|sessions| {
                sessions
                    .iter()
                    .filter(|w| w.is_exercise(exercise))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn get_recent_workouts(&self, user: &str, days: u32, as_of: NaiveDate) -> Vec<WorkoutEntry> {
        let mut recent = self
            .users
            .get(&normalize_name(user))
            .map(|sessions| within_window(&sessions, days, as_of))
            .unwrap_or_default();
        recent.reverse();
        recent
    }

    fn get_user_workouts(&self, user: &str) -> Vec<WorkoutEntry> {
        self.users
            .get(&normalize_name(user))
            .map(|sessions| sessions.clone())
            .unwrap_or_default()
    }
}
