// ABOUTME: Workout entry model with a validating builder for logged strength sets
// ABOUTME: Entries are immutable once built; names match case-insensitively
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::workout_limits::{
    MAX_REPS, MAX_RPE, MAX_SETS, MAX_WEIGHT, MIN_REPS, MIN_RPE, MIN_SETS, MIN_WEIGHT,
};
use crate::errors::{AppError, AppResult};

/// Normalize a user or exercise name for case-insensitive matching
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// One logged exercise session: `sets` × `reps` at `weight` with a given RPE.
///
/// Fields are private so an entry cannot change after it is logged. Build one
/// with [`WorkoutEntryBuilder`], which enforces the accepted ranges.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use strength_core::models::WorkoutEntryBuilder;
///
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let entry = WorkoutEntryBuilder::new("John Doe", "Bench Press", date)
///     .sets(3)
///     .reps(8)
///     .weight(100.0)
///     .rpe(7)
///     .build()
///     .unwrap();
///
/// assert!((entry.tonnage() - 2400.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    user: String,
    date: NaiveDate,
    exercise: String,
    sets: u32,
    reps: u32,
    weight: f64,
    rpe: u8,
}

impl WorkoutEntry {
    /// User who logged the session
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Calendar day of the session
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Exercise name as logged
    #[must_use]
    pub fn exercise(&self) -> &str {
        &self.exercise
    }

    /// Number of sets
    #[must_use]
    pub const fn sets(&self) -> u32 {
        self.sets
    }

    /// Reps per set
    #[must_use]
    pub const fn reps(&self) -> u32 {
        self.reps
    }

    /// Load per rep
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Rate of perceived exertion (1-10)
    #[must_use]
    pub const fn rpe(&self) -> u8 {
        self.rpe
    }

    /// Total reps across all sets
    #[must_use]
    pub const fn total_reps(&self) -> u32 {
        self.sets * self.reps
    }

    /// Weight × sets × reps
    #[must_use]
    pub fn tonnage(&self) -> f64 {
        self.weight * f64::from(self.total_reps())
    }

    /// Case-insensitive user match
    #[must_use]
    pub fn is_for_user(&self, user: &str) -> bool {
        normalize_name(&self.user) == normalize_name(user)
    }

    /// Case-insensitive exercise match
    #[must_use]
    pub fn is_exercise(&self, exercise: &str) -> bool {
        normalize_name(&self.exercise) == normalize_name(exercise)
    }

    /// Re-check range constraints, e.g. after deserializing a snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if any field is blank or outside its accepted range
    pub fn validate(&self) -> AppResult<()> {
        if self.user.trim().is_empty() {
            return Err(AppError::missing_field("user"));
        }
        if self.exercise.trim().is_empty() {
            return Err(AppError::missing_field("exercise"));
        }
        if !(MIN_SETS..=MAX_SETS).contains(&self.sets) {
            return Err(AppError::out_of_range(format!(
                "Sets must be between {MIN_SETS} and {MAX_SETS}, got {}",
                self.sets
            )));
        }
        if !(MIN_REPS..=MAX_REPS).contains(&self.reps) {
            return Err(AppError::out_of_range(format!(
                "Reps must be between {MIN_REPS} and {MAX_REPS}, got {}",
                self.reps
            )));
        }
        if !self.weight.is_finite() || !(MIN_WEIGHT..=MAX_WEIGHT).contains(&self.weight) {
            return Err(AppError::out_of_range(format!(
                "Weight must be between {MIN_WEIGHT} and {MAX_WEIGHT}, got {}",
                self.weight
            )));
        }
        if !(MIN_RPE..=MAX_RPE).contains(&self.rpe) {
            return Err(AppError::out_of_range(format!(
                "RPE must be between {MIN_RPE} and {MAX_RPE}, got {}",
                self.rpe
            )));
        }
        Ok(())
    }
}

/// Builder for [`WorkoutEntry`] that validates on [`build`](Self::build)
#[derive(Debug, Clone)]
pub struct WorkoutEntryBuilder {
    entry: WorkoutEntry,
}

impl WorkoutEntryBuilder {
    /// Start an entry; numeric fields default to one set of one rep at zero load, RPE 1
    #[must_use]
    pub fn new(user: impl Into<String>, exercise: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            entry: WorkoutEntry {
                user: user.into().trim().to_owned(),
                date,
                exercise: exercise.into().trim().to_owned(),
                sets: MIN_SETS,
                reps: MIN_REPS,
                weight: MIN_WEIGHT,
                rpe: MIN_RPE,
            },
        }
    }

    /// Set the number of sets
    #[must_use]
    pub const fn sets(mut self, sets: u32) -> Self {
        self.entry.sets = sets;
        self
    }

    /// Set reps per set
    #[must_use]
    pub const fn reps(mut self, reps: u32) -> Self {
        self.entry.reps = reps;
        self
    }

    /// Set the load
    #[must_use]
    pub const fn weight(mut self, weight: f64) -> Self {
        self.entry.weight = weight;
        self
    }

    /// Set the RPE
    #[must_use]
    pub const fn rpe(mut self, rpe: u8) -> Self {
        self.entry.rpe = rpe;
        self
    }

    /// Validate and produce the entry
    ///
    /// # Errors
    ///
    /// Returns an error if any field is blank or outside its accepted range
    pub fn build(self) -> AppResult<WorkoutEntry> {
        self.entry.validate()?;
        Ok(self.entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
    }

    #[test]
    fn test_builder_trims_names() {
        let entry = WorkoutEntryBuilder::new("  Jane Smith ", " Squat", day())
            .sets(3)
            .reps(8)
            .weight(80.0)
            .rpe(7)
            .build()
            .unwrap();

        assert_eq!(entry.user(), "Jane Smith");
        assert_eq!(entry.exercise(), "Squat");
        assert!(entry.is_for_user("jane smith"));
        assert!(entry.is_exercise("SQUAT"));
    }

    #[test]
    fn test_builder_rejects_out_of_range_values() {
        let base = || WorkoutEntryBuilder::new("John", "Deadlift", day());

        let err = base().sets(21).reps(5).rpe(8).build().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert!(base().reps(51).build().is_err());
        assert!(base().weight(1000.5).build().is_err());
        assert!(base().weight(-1.0).build().is_err());
        assert!(base().weight(f64::NAN).build().is_err());
        assert!(base().rpe(0).build().is_err());
        assert!(base().rpe(11).build().is_err());
    }

    #[test]
    fn test_builder_rejects_blank_names() {
        let err = WorkoutEntryBuilder::new("   ", "Squat", day())
            .build()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);

        assert!(WorkoutEntryBuilder::new("John", "", day()).build().is_err());
    }

    #[test]
    fn test_totals() {
        let entry = WorkoutEntryBuilder::new("John", "Squat", day())
            .sets(4)
            .reps(6)
            .weight(140.0)
            .rpe(8)
            .build()
            .unwrap();

        assert_eq!(entry.total_reps(), 24);
        assert!((entry.tonnage() - 3360.0).abs() < f64::EPSILON);
    }
}
