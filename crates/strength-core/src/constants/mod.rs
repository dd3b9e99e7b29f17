// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Validation ranges for workout entries and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain.

/// Accepted ranges for logged workout fields
pub mod workout_limits {
    /// Minimum sets per entry
    pub const MIN_SETS: u32 = 1;
    /// Maximum sets per entry
    pub const MAX_SETS: u32 = 20;
    /// Minimum reps per set
    pub const MIN_REPS: u32 = 1;
    /// Maximum reps per set
    pub const MAX_REPS: u32 = 50;
    /// Minimum load (bodyweight movements log zero)
    pub const MIN_WEIGHT: f64 = 0.0;
    /// Maximum load
    pub const MAX_WEIGHT: f64 = 1000.0;
    /// Lowest rate of perceived exertion
    pub const MIN_RPE: u8 = 1;
    /// Highest rate of perceived exertion
    pub const MAX_RPE: u8 = 10;
}

/// Service names for structured logging
pub mod service_names {
    /// Name used by the CLI and library logging setup
    pub const PIERRE_STRENGTH: &str = "pierre-strength";
}

/// Calendar helpers
pub mod time {
    /// Days in a training week
    pub const DAYS_PER_WEEK: i64 = 7;
    /// Days in a training week as a float
    pub const DAYS_PER_WEEK_F64: f64 = 7.0;
}
