// ABOUTME: Core data models for the strength analytics engine
// ABOUTME: Re-exports WorkoutEntry, its builder, and name normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `WorkoutEntry`: one logged exercise session (sets × reps at a weight, with RPE)
//! - `WorkoutEntryBuilder`: validating constructor for entries

mod workout;

pub use workout::{normalize_name, WorkoutEntry, WorkoutEntryBuilder};
