// ABOUTME: Strength intelligence configuration with environment overrides and validation
// ABOUTME: Thresholds, weights, and windows for every analyzer, cached in a global singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strength Intelligence Configuration
//!
//! All analyzer constants live here so deployments can tune them without a
//! rebuild. Values start from defaults, are overridden by `STRENGTH_*`
//! environment variables, and are validated before use.

mod error;
mod fatigue;
mod load;
mod prediction;

pub use error::ConfigError;
pub use fatigue::{
    DeloadConfig, FatigueConfig, FatigueNormalization, FatigueTrendConfig, FatigueWeights,
    FrequencyBands, ReadinessConfig,
};
pub use load::LoadConfig;
pub use prediction::{PlateauConfig, PredictionConfig, TrendConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static STRENGTH_CONFIG: OnceLock<StrengthIntelligenceConfig> = OnceLock::new();

/// Tolerance used when checking that fatigue weights sum to one
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Main strength intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrengthIntelligenceConfig {
    /// Next-weight predictor
    pub prediction: PredictionConfig,
    /// Trend classification
    pub trend: TrendConfig,
    /// Plateau risk scoring
    pub plateau: PlateauConfig,
    /// Composite fatigue scoring
    pub fatigue: FatigueConfig,
    /// Deload indicators
    pub deload: DeloadConfig,
    /// Readiness scoring
    pub readiness: ReadinessConfig,
    /// Training load advisories
    pub load: LoadConfig,
}

impl StrengthIntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        STRENGTH_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load strength intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the result is inconsistent
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_prediction()?;
        self.validate_fatigue()?;
        self.validate_thresholds()
    }

    fn validate_prediction(&self) -> Result<(), ConfigError> {
        let pred = &self.prediction;

        if pred.min_history_sessions < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "prediction.min_history_sessions must be at least 2",
            ));
        }
        if pred.projection_days <= 0 || pred.recent_rpe_sessions == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "prediction projection_days and recent_rpe_sessions must be positive",
            ));
        }
        if !(pred.max_increase_fraction > 0.0 && pred.max_increase_fraction <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "prediction.max_increase_fraction must be in (0, 1]",
            ));
        }
        if pred.min_increase <= 0.0 || pred.rounding_increment <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "prediction min_increase and rounding_increment must be positive",
            ));
        }
        Ok(())
    }

    fn validate_fatigue(&self) -> Result<(), ConfigError> {
        let fat = &self.fatigue;
        let w = &fat.weights;

        if [w.volume, w.intensity, w.frequency, w.trend]
            .iter()
            .any(|weight| *weight < 0.0)
        {
            return Err(ConfigError::InvalidWeights(
                "fatigue weights must be non-negative",
            ));
        }
        if (w.total() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights("fatigue weights must sum to 1.0"));
        }

        let norm = &fat.normalization;
        if norm.sets_ceiling <= 0.0 || norm.tonnage_ceiling <= 0.0 || norm.rpe_span <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fatigue normalization ceilings must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&norm.oldest_session_weight) {
            return Err(ConfigError::ValueOutOfRange(
                "fatigue.normalization.oldest_session_weight must be in [0, 1]",
            ));
        }

        let bands = &fat.frequency;
        if !(bands.low_ratio < bands.optimal_ratio && bands.optimal_ratio < bands.high_ratio) {
            return Err(ConfigError::InvalidRange(
                "frequency bands must satisfy low < optimal < high",
            ));
        }
        let scores = [
            bands.low_score,
            bands.optimal_score,
            bands.high_score,
            bands.excessive_score,
        ];
        if scores.iter().any(|score| !(0.0..=10.0).contains(score)) {
            return Err(ConfigError::ValueOutOfRange(
                "frequency band scores must be within [0, 10]",
            ));
        }
        Ok(())
    }

    fn validate_thresholds(&self) -> Result<(), ConfigError> {
        if self.trend.default_window_days == 0
            || self.plateau.window_days == 0
            || self.fatigue.default_window_days == 0
            || self.deload.lookback_days == 0
            || self.readiness.window_days == 0
            || self.load.default_window_days == 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "analysis windows must be at least one day",
            ));
        }
        if self.plateau.moderate_risk_score > self.plateau.high_risk_score {
            return Err(ConfigError::InvalidRange(
                "plateau moderate_risk_score must be <= high_risk_score",
            ));
        }
        if self.deload.light_deload_score > self.deload.full_deload_score {
            return Err(ConfigError::InvalidRange(
                "deload light_deload_score must be <= full_deload_score",
            ));
        }
        if self.deload.assumed_sessions_per_week == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "deload.assumed_sessions_per_week must be positive",
            ));
        }
        let ready = &self.readiness;
        if !(ready.fair < ready.good && ready.good < ready.excellent) {
            return Err(ConfigError::InvalidRange(
                "readiness bands must satisfy fair < good < excellent",
            ));
        }
        if ready.tight_rpe_std > ready.loose_rpe_std {
            return Err(ConfigError::InvalidRange(
                "readiness tight_rpe_std must be <= loose_rpe_std",
            ));
        }
        let load = &self.load;
        if load.min_training_days > load.max_training_days
            || load.low_avg_rpe >= load.high_avg_rpe
            || load.low_total_sets >= load.high_total_sets
        {
            return Err(ConfigError::InvalidRange(
                "load advisory low bounds must be below high bounds",
            ));
        }
        Ok(())
    }

    /// Parse and apply a single environment variable, if present
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Prediction
        Self::apply_env_var(
            "STRENGTH_PREDICTION_MAX_INCREASE_FRACTION",
            &mut self.prediction.max_increase_fraction,
        )?;
        Self::apply_env_var(
            "STRENGTH_PREDICTION_MIN_INCREASE",
            &mut self.prediction.min_increase,
        )?;
        Self::apply_env_var(
            "STRENGTH_PREDICTION_PROJECTION_DAYS",
            &mut self.prediction.projection_days,
        )?;

        // Trend and plateau
        Self::apply_env_var(
            "STRENGTH_TREND_WINDOW_DAYS",
            &mut self.trend.default_window_days,
        )?;
        Self::apply_env_var(
            "STRENGTH_TREND_STABLE_PERCENT",
            &mut self.trend.stable_percentage_threshold,
        )?;
        Self::apply_env_var("STRENGTH_PLATEAU_WINDOW_DAYS", &mut self.plateau.window_days)?;

        // Fatigue
        Self::apply_env_var(
            "STRENGTH_FATIGUE_WINDOW_DAYS",
            &mut self.fatigue.default_window_days,
        )?;
        Self::apply_env_var(
            "STRENGTH_FATIGUE_VOLUME_WEIGHT",
            &mut self.fatigue.weights.volume,
        )?;
        Self::apply_env_var(
            "STRENGTH_FATIGUE_INTENSITY_WEIGHT",
            &mut self.fatigue.weights.intensity,
        )?;
        Self::apply_env_var(
            "STRENGTH_FATIGUE_FREQUENCY_WEIGHT",
            &mut self.fatigue.weights.frequency,
        )?;
        Self::apply_env_var(
            "STRENGTH_FATIGUE_TREND_WEIGHT",
            &mut self.fatigue.weights.trend,
        )?;
        Self::apply_env_var(
            "STRENGTH_FATIGUE_SETS_CEILING",
            &mut self.fatigue.normalization.sets_ceiling,
        )?;
        Self::apply_env_var(
            "STRENGTH_FATIGUE_TONNAGE_CEILING",
            &mut self.fatigue.normalization.tonnage_ceiling,
        )?;

        // Deload, readiness, load
        Self::apply_env_var(
            "STRENGTH_DELOAD_LOOKBACK_DAYS",
            &mut self.deload.lookback_days,
        )?;
        Self::apply_env_var(
            "STRENGTH_DELOAD_HIGH_FATIGUE",
            &mut self.deload.high_fatigue_score,
        )?;
        Self::apply_env_var(
            "STRENGTH_READINESS_WINDOW_DAYS",
            &mut self.readiness.window_days,
        )?;
        Self::apply_env_var("STRENGTH_LOAD_WINDOW_DAYS", &mut self.load.default_window_days)?;

        Ok(self)
    }
}
