// ABOUTME: Environment configuration for the strength CLI and library embedders
// ABOUTME: Parses deployment mode, log level, history snapshot path, and reference date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based runtime configuration

use std::env;
use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, Level};

/// Default location of the JSON workout snapshot
pub const DEFAULT_HISTORY_FILE: &str = "./data/workouts.json";

/// Date format accepted for `STRENGTH_AS_OF` and the CLI `--as-of` flag
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Normal operation
    #[default]
    Info,
    /// Computed intermediate values
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to a `tracing` level
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Deployment mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// Runtime settings shared by the CLI and embedders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment mode
    pub environment: Environment,
    /// Base log level
    pub log_level: LogLevel,
    /// JSON snapshot the CLI reads and appends to
    pub history_file: PathBuf,
    /// Fixed reference date; `None` means today
    pub as_of: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: LogLevel::default(),
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            as_of: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `ENVIRONMENT`, `RUST_LOG`, `STRENGTH_HISTORY_FILE`, and `STRENGTH_AS_OF`.
    ///
    /// # Errors
    ///
    /// Returns an error if `STRENGTH_AS_OF` is set but is not a `YYYY-MM-DD` date
    pub fn from_env() -> Result<Self> {
        let as_of = match env::var("STRENGTH_AS_OF") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                parse_date(&raw).context("Invalid STRENGTH_AS_OF value")?,
            ),
            _ => None,
        };

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development")),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            history_file: PathBuf::from(env_var_or("STRENGTH_HISTORY_FILE", DEFAULT_HISTORY_FILE)),
            as_of,
        };
        debug!(
            environment = %config.environment,
            history_file = %config.history_file.display(),
            as_of = ?config.as_of,
            "Loaded application configuration"
        );
        Ok(config)
    }

    /// Reference date for windowed analyses
    #[must_use]
    pub fn reference_date(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Parse a `YYYY-MM-DD` date
///
/// # Errors
///
/// Returns an error if the string is not a valid calendar date
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .with_context(|| format!("Expected a date formatted as YYYY-MM-DD, got '{raw}'"))
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing_falls_back_to_info() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("warning"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("pierre=debug"), LogLevel::Info);
        assert_eq!(LogLevel::Trace.to_string(), "trace");
    }

    #[test]
    fn test_environment_aliases() {
        assert_eq!(Environment::from_str_or_default("prod"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date(" 2025-09-01 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        assert!(parse_date("09/01/2025").is_err());
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn test_fixed_reference_date_wins() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let config = AppConfig {
            as_of: Some(day),
            ..AppConfig::default()
        };
        assert_eq!(config.reference_date(), day);
    }
}
