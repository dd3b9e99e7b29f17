// ABOUTME: Main library entry point for the Pierre strength analytics engine
// ABOUTME: Wires analyzers, storage adapters, configuration, and logging for the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Strength
//!
//! Strength-training analytics over logged workout sessions: next-weight
//! prediction, strength trends, plateau risk, one-rep-max estimation,
//! progression planning, training load advice, fatigue scoring, deload
//! recommendations, readiness, and recovery advice.
//!
//! ## Architecture
//!
//! - **`strength-core`**: workout model, validation limits, and error types
//! - **`strength-intelligence`**: the analyzers, all reading through a
//!   [`HistoryProvider`](intelligence::HistoryProvider)
//! - **storage**: an in-memory provider and JSON snapshot persistence
//! - **analytics**: a facade that shares one provider across every analyzer
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pierre_strength::analytics::StrengthAnalytics;
//! use pierre_strength::storage::InMemoryHistory;
//! use strength_core::models::WorkoutEntryBuilder;
//!
//! let store = InMemoryHistory::new();
//! let day = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
//! for (offset, weight) in [(14, 100.0), (7, 102.5), (0, 105.0)] {
//!     let entry = WorkoutEntryBuilder::new("John Doe", "Bench Press", day - chrono::Days::new(offset))
//!         .sets(3)
//!         .reps(8)
//!         .weight(weight)
//!         .rpe(7)
//!         .build()
//!         .unwrap();
//!     store.add_workout(entry).unwrap();
//! }
//!
//! let analytics = StrengthAnalytics::new(store.shared());
//! let next = analytics.weights().predict_next_weight("John Doe", "Bench Press", true);
//! assert!(next.is_ok());
//! ```

/// Athlete-level facade over every analyzer
pub mod analytics;

/// Runtime configuration from the environment
pub mod config;

/// Re-exports of the analytics crate
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// History providers and JSON snapshot persistence
pub mod storage;
