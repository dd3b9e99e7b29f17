// ABOUTME: Tagged failure results for analytics operations (no_data, invalid_rpe, etc.)
// ABOUTME: Expected data shortfalls are returned as values, each with user-facing guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Expected, non-exceptional reasons an analysis produced no result.
///
/// Every analytics operation returns `Result<T, AnalysisFailure>`. None of these
/// indicate a fault: callers show [`AnalysisFailure::guidance`] to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisFailure {
    /// No workouts recorded for the request
    #[error("no workout data recorded")]
    NoData,
    /// Some workouts exist, but too few for this analysis
    #[error("not enough workouts in the analysis window")]
    InsufficientData,
    /// RPE outside 1-10
    #[error("RPE must be between 1 and 10")]
    InvalidRpe,
    /// Regression could not produce a next-weight prediction
    #[error("unable to predict the next training weight")]
    NoPrediction,
}

impl AnalysisFailure {
    /// Stable tag used in serialized output
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::NoData => "no_data",
            Self::InsufficientData => "insufficient_data",
            Self::InvalidRpe => "invalid_rpe",
            Self::NoPrediction => "no_prediction",
        }
    }

    /// Message to show the user alongside the tag
    #[must_use]
    pub const fn guidance(self) -> &'static str {
        match self {
            Self::NoData => "No workouts logged yet. Log a session to get started.",
            Self::InsufficientData => {
                "Not enough recent sessions. Keep logging workouts to unlock this analysis."
            }
            Self::InvalidRpe => "Enter an RPE between 1 and 10.",
            Self::NoPrediction => {
                "At least 3 logged sessions of this exercise are needed for a prediction."
            }
        }
    }
}
