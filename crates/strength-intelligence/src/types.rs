// ABOUTME: Shared classification enums used across strength analyzers
// ABOUTME: Trend direction, estimate confidence, and advisory priority
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a weight or RPE trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Rising beyond the stability threshold
    Increasing,
    /// Falling beyond the stability threshold
    Decreasing,
    /// Within the stability threshold
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increasing => write!(f, "increasing"),
            Self::Decreasing => write!(f, "decreasing"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

/// Confidence attached to an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Estimate far from observed history
    Low,
    /// Default when history neither confirms nor contradicts
    Medium,
    /// Estimate close to observed history
    High,
}

/// Urgency of an advisory or recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Informational
    Low,
    /// Worth acting on
    Medium,
    /// Act soon
    High,
    /// Act immediately
    Critical,
}
