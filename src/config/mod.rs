// ABOUTME: Configuration module for runtime settings and analyzer tunables
// ABOUTME: Re-exports environment parsing alongside the analytics configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for Pierre Strength
//!
//! - **Environment**: deployment mode, log level, snapshot path, reference date
//! - **Intelligence**: analyzer thresholds, re-exported from `strength-intelligence`

/// Environment and runtime configuration
pub mod environment;

pub use environment::{AppConfig, Environment, LogLevel};
pub use strength_intelligence::config::intelligence;
pub use strength_intelligence::StrengthIntelligenceConfig;
