// ABOUTME: Aggregate volume statistics over a slice of workout sessions
// ABOUTME: Shared by load, fatigue, and deload analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: session counts are small

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strength_core::models::WorkoutEntry;

/// Totals and averages across a set of sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutVolume {
    /// Sessions counted
    pub session_count: usize,
    /// Sum of sets
    pub total_sets: u32,
    /// Sum of sets × reps
    pub total_reps: u32,
    /// Sum of weight × sets × reps
    pub tonnage: f64,
    /// Unweighted mean RPE across sessions, 0 when empty
    pub avg_rpe: f64,
    /// Distinct calendar days with at least one session
    pub training_days: usize,
}

impl WorkoutVolume {
    /// Aggregate the given sessions
    #[must_use]
    pub fn from_workouts(workouts: &[WorkoutEntry]) -> Self {
        if workouts.is_empty() {
            return Self::default();
        }

        let days: HashSet<_> = workouts.iter().map(WorkoutEntry::date).collect();
        let rpe_sum: f64 = workouts.iter().map(|w| f64::from(w.rpe())).sum();

        Self {
            session_count: workouts.len(),
            total_sets: workouts.iter().map(WorkoutEntry::sets).sum(),
            total_reps: workouts.iter().map(WorkoutEntry::total_reps).sum(),
            tonnage: workouts.iter().map(WorkoutEntry::tonnage).sum(),
            avg_rpe: rpe_sum / workouts.len() as f64,
            training_days: days.len(),
        }
    }

    /// Sessions at or above the given RPE
    #[must_use]
    pub fn count_at_or_above(workouts: &[WorkoutEntry], rpe: u8) -> usize {
        workouts.iter().filter(|w| w.rpe() >= rpe).count()
    }

    /// Whether any sessions were aggregated
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.session_count == 0
    }
}
