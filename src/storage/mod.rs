// ABOUTME: Storage layer for logged workouts behind the HistoryProvider trait
// ABOUTME: In-memory concurrent store plus JSON snapshot load and save
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage
//!
//! Analyzers never touch storage directly; they read through
//! [`HistoryProvider`](crate::intelligence::HistoryProvider). This module
//! provides the reference implementation and its on-disk format.

/// JSON snapshot persistence
pub mod json_file;
/// Concurrent in-memory history provider
pub mod memory;

pub use json_file::{load_json_file, write_json_file, WorkoutSnapshot};
pub use memory::InMemoryHistory;
