// ABOUTME: Training readiness from inverse fatigue plus an RPE consistency bonus
// ABOUTME: Maps readiness onto Excellent, Good, Fair, and Poor bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::intelligence::{ReadinessConfig, StrengthIntelligenceConfig};
use crate::fatigue_scorer::{FatigueScorer, MAX_FATIGUE};
use crate::history::SharedHistory;
use crate::statistical_analysis::{round_to, StatisticalAnalyzer};

/// Readiness band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessLevel {
    /// Ready for high-intensity work
    Excellent,
    /// Ready for normal load
    Good,
    /// Moderate intensity advised
    Fair,
    /// Recovery advised
    Poor,
    /// No recent sessions
    Unknown,
}

impl ReadinessLevel {
    /// User-facing description of the band
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Ready for high-intensity training",
            Self::Good => "Ready for normal training load",
            Self::Fair => "Consider moderate training intensity",
            Self::Poor => "Focus on recovery, light training only",
            Self::Unknown => "Insufficient recent data",
        }
    }
}

/// Readiness score with its components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReadiness {
    /// Score in `[0, 10]`, 1 decimal
    pub readiness_score: f64,
    /// Band
    pub status: ReadinessLevel,
    /// Band description
    pub message: String,
    /// Fatigue score the readiness was derived from; absent without data
    pub fatigue_component: Option<f64>,
    /// `10 - fatigue`, 1 decimal; absent without data
    pub base_readiness: Option<f64>,
}

/// Quantifies readiness to train
pub struct ReadinessCalculator {
    history: SharedHistory,
    fatigue: FatigueScorer,
    config: ReadinessConfig,
}

impl ReadinessCalculator {
    /// Create a calculator using the global configuration
    #[must_use]
    pub fn new(history: SharedHistory) -> Self {
        Self::with_config(
            history.clone(),
            FatigueScorer::new(history),
            StrengthIntelligenceConfig::global().readiness.clone(),
        )
    }

    /// Create a calculator with an explicit scorer and configuration
    #[must_use]
    pub const fn with_config(
        history: SharedHistory,
        fatigue: FatigueScorer,
        config: ReadinessConfig,
    ) -> Self {
        Self {
            history,
            fatigue,
            config,
        }
    }

    /// Readiness as of `as_of`
    #[must_use]
    pub fn calculate_training_readiness(&self, user: &str, as_of: NaiveDate) -> TrainingReadiness {
        let cfg = &self.config;
        let recent = self
            .history
            .get_recent_workouts(user, cfg.window_days, as_of);
        if recent.is_empty() {
            let status = ReadinessLevel::Unknown;
            return TrainingReadiness {
                readiness_score: cfg.unknown_readiness,
                status,
                message: status.message().to_owned(),
                fatigue_component: None,
                base_readiness: None,
            };
        }

        let fatigue = self
            .fatigue
            .calculate_fatigue_score(user, cfg.window_days, as_of);
        let base = MAX_FATIGUE - fatigue;

        let rpes: Vec<f64> = recent.iter().map(|w| f64::from(w.rpe())).collect();
        let bonus = match StatisticalAnalyzer::sample_std_dev(&rpes) {
            Some(std) if std < cfg.tight_rpe_std => cfg.full_bonus,
            Some(std) if std < cfg.loose_rpe_std => cfg.partial_bonus,
            _ => 0.0,
        };
        let readiness = (base + bonus).min(MAX_FATIGUE);

        let status = self.level(readiness);
        debug!(user, fatigue, bonus, readiness, ?status, "Calculated training readiness");
        TrainingReadiness {
            readiness_score: round_to(readiness, 1),
            status,
            message: status.message().to_owned(),
            fatigue_component: Some(fatigue),
            base_readiness: Some(round_to(base, 1)),
        }
    }

    fn level(&self, readiness: f64) -> ReadinessLevel {
        let cfg = &self.config;
        if readiness >= cfg.excellent {
            ReadinessLevel::Excellent
        } else if readiness >= cfg.good {
            ReadinessLevel::Good
        } else if readiness >= cfg.fair {
            ReadinessLevel::Fair
        } else {
            ReadinessLevel::Poor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::intelligence::FatigueConfig;
    use crate::test_support::{as_of, session, VecHistory, USER};
    use strength_core::models::WorkoutEntry;

    fn calculator(entries: Vec<WorkoutEntry>) -> ReadinessCalculator {
        let history = VecHistory::shared(entries);
        ReadinessCalculator::with_config(
            history.clone(),
            FatigueScorer::with_config(history, FatigueConfig::default()),
            ReadinessConfig::default(),
        )
    }

    #[test]
    fn test_no_recent_data_is_unknown() {
        let readiness = calculator(Vec::new()).calculate_training_readiness(USER, as_of());
        assert_eq!(readiness.status, ReadinessLevel::Unknown);
        assert!((readiness.readiness_score - 5.0).abs() < f64::EPSILON);
        assert_eq!(readiness.message, "Insufficient recent data");
        assert!(readiness.fatigue_component.is_none());
    }

    #[test]
    fn test_single_session_gets_no_bonus() {
        let readiness = calculator(vec![session("Squat", 1, 3, 5, 100.0, 6)])
            .calculate_training_readiness(USER, as_of());

        // volume: 3 sets -> 0.6, 1500 tonnage -> 1.5, avg 1.05; frequency 1/7 -> 1.0
        let fatigue = 0.3 * 1.05 + 0.2 * 1.0;
        assert!((readiness.fatigue_component.unwrap() - fatigue).abs() < 1e-9);
        assert!((readiness.readiness_score - round_to(10.0 - fatigue, 1)).abs() < 1e-9);
        assert_eq!(readiness.status, ReadinessLevel::Excellent);
    }

    #[test]
    fn test_consistent_rpe_earns_bonus_capped_at_ten() {
        let readiness = calculator(vec![
            session("Squat", 3, 2, 5, 50.0, 6),
            session("Squat", 1, 2, 5, 50.0, 6),
        ])
        .calculate_training_readiness(USER, as_of());

        let base = readiness.base_readiness.unwrap();
        assert!(base < 10.0);
        assert!((readiness.readiness_score - 10.0_f64.min(base + 1.0)).abs() < 0.06);
    }
}
