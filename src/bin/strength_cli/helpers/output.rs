// ABOUTME: JSON output helpers for strength-cli
// ABOUTME: Prints analysis values or failure tags with guidance on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_strength::analytics::Outcome;
use serde::Serialize;
use strength_core::errors::{AnalysisFailure, AppResult};

/// Pretty-print any serializable value
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let body = serde_json::to_string_pretty(value)?;
    println!("{body}");
    Ok(())
}

/// Print an analysis result; returns whether it succeeded
pub fn print_outcome<T: Serialize>(result: Result<T, AnalysisFailure>) -> AppResult<bool> {
    let outcome = Outcome::from(result);
    print_json(&outcome)?;
    Ok(outcome.is_ok())
}
