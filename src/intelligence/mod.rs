// ABOUTME: Intelligence module re-exports from the strength-intelligence crate
// ABOUTME: Gives binaries and tests one import path for every analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Strength analytics re-exported from `strength-intelligence` so callers can
//! write `pierre_strength::intelligence::FatigueScorer` without depending on
//! the crate directly.

pub use strength_intelligence::*;

// Submodules for path-based access (e.g., crate::intelligence::fatigue_scorer::MAX_FATIGUE)
pub use strength_intelligence::{
    config, deload_advisor, fatigue_scorer, history, load_recommender, one_rep_max,
    plateau_detector, progression_planner, readiness_calculator, recovery_advisor,
    statistical_analysis, trend_analyzer, types, volume, weight_predictor,
};
