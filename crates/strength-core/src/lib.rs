// ABOUTME: Core types and constants for the Pierre strength analytics engine
// ABOUTME: Foundation crate with error handling, workout models, and validation limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Strength Core
//!
//! Foundation crate providing shared types and constants for the strength-training
//! analytics engine. It changes rarely so the analytics crate and the binaries can
//! compile against a stable base.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the `AnalysisFailure` result tags
//! - **models**: `WorkoutEntry` and its validating builder
//! - **constants**: validation ranges and service names

/// Unified error handling with standard error codes and analysis failure tags
pub mod errors;

/// Workout data models
pub mod models;

/// Application constants organized by domain
pub mod constants;
