// ABOUTME: Plateau risk scoring from a short-window strength trend
// ABOUTME: Adds indicator points for stalled progress and rising effort
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strength_core::errors::AnalysisFailure;
use tracing::debug;

use crate::config::intelligence::{PlateauConfig, StrengthIntelligenceConfig};
use crate::history::SharedHistory;
use crate::trend_analyzer::{TrendAnalyzer, TrendSummary};
use crate::types::TrendDirection;

/// Plateau risk band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateauRisk {
    /// Progress continuing
    Low,
    /// Early warning signs
    Moderate,
    /// Progress has likely stalled
    High,
}

/// Plateau risk with the indicators that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateauAssessment {
    /// Risk band
    pub risk: PlateauRisk,
    /// Sum of indicator points
    pub score: u32,
    /// Indicators that fired, in evaluation order
    pub indicators: Vec<String>,
    /// Suggested action for the band
    pub recommendation: String,
    /// Trend the assessment was derived from
    pub trend_data: TrendSummary,
}

/// Scores plateau risk from [`TrendAnalyzer`] output
pub struct PlateauDetector {
    trends: TrendAnalyzer,
    config: PlateauConfig,
}

impl PlateauDetector {
    /// Create a detector using the global configuration
    #[must_use]
    pub fn new(history: SharedHistory) -> Self {
        Self::with_config(
            TrendAnalyzer::new(history),
            StrengthIntelligenceConfig::global().plateau.clone(),
        )
    }

    /// Create a detector over an existing trend analyzer
    #[must_use]
    pub const fn with_config(trends: TrendAnalyzer, config: PlateauConfig) -> Self {
        Self { trends, config }
    }

    /// Assess plateau risk for `exercise` over the plateau window ending at `as_of`
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisFailure::InsufficientData`] when the trend window has
    /// no usable data
    pub fn predict_performance_plateau(
        &self,
        user: &str,
        exercise: &str,
        as_of: NaiveDate,
    ) -> Result<PlateauAssessment, AnalysisFailure> {
        let trend = self
            .trends
            .analyze_strength_trends(user, exercise, self.config.window_days, as_of)
            .map_err(|_| AnalysisFailure::InsufficientData)?;

        let assessment = self.assess(trend);
        debug!(
            user,
            exercise,
            score = assessment.score,
            risk = ?assessment.risk,
            "Assessed plateau risk"
        );
        Ok(assessment)
    }

    /// Score a trend summary
    #[must_use]
    pub fn assess(&self, trend: TrendSummary) -> PlateauAssessment {
        let cfg = &self.config;
        let mut indicators = Vec::new();
        let mut score = 0;

        if trend.weekly_progression.abs() < cfg.minimal_weekly_progression {
            indicators.push("Minimal weight progression".to_owned());
            score += 2;
        }
        if trend.rpe_trend == TrendDirection::Increasing && trend.trend == TrendDirection::Stable {
            indicators.push("RPE increasing without weight progression".to_owned());
            score += 3;
        }
        if trend.percentage_change.abs() < cfg.low_percentage_change
            && trend.total_sessions > cfg.min_sessions_for_rate_check
        {
            indicators.push("Low overall progression rate".to_owned());
            score += 2;
        }
        if trend.avg_rpe > cfg.high_avg_rpe {
            indicators.push("Consistently high RPE".to_owned());
            score += 2;
        }

        let (risk, recommendation) = if score >= cfg.high_risk_score {
            (PlateauRisk::High, "Consider deload or program change")
        } else if score >= cfg.moderate_risk_score {
            (
                PlateauRisk::Moderate,
                "Monitor closely, consider technique work",
            )
        } else {
            (PlateauRisk::Low, "Continue current progression")
        };

        PlateauAssessment {
            risk,
            score,
            indicators,
            recommendation: recommendation.to_owned(),
            trend_data: trend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::intelligence::TrendConfig;
    use crate::test_support::{as_of, session, VecHistory, USER};
    use strength_core::models::WorkoutEntry;

    fn detector(entries: Vec<WorkoutEntry>) -> PlateauDetector {
        PlateauDetector::with_config(
            TrendAnalyzer::with_config(VecHistory::shared(entries), TrendConfig::default()),
            PlateauConfig::default(),
        )
    }

    #[test]
    fn test_missing_data_is_insufficient() {
        let result = detector(Vec::new()).predict_performance_plateau(USER, "Squat", as_of());
        assert_eq!(result, Err(AnalysisFailure::InsufficientData));
    }

    #[test]
    fn test_stalled_lift_with_rising_rpe_is_high_risk() {
        // Ten sessions at the same weight with RPE climbing from 7 to 10
        let rpes = [7, 7, 7, 8, 8, 9, 9, 9, 10, 10];
        let entries = rpes
            .iter()
            .zip((0..=45).rev().step_by(5))
            .map(|(rpe, days_ago)| session("Bench", days_ago, 3, 5, 100.0, *rpe))
            .collect();

        let assessment = detector(entries)
            .predict_performance_plateau(USER, "Bench", as_of())
            .unwrap();

        assert_eq!(assessment.risk, PlateauRisk::High);
        assert_eq!(
            assessment.indicators,
            vec![
                "Minimal weight progression",
                "RPE increasing without weight progression",
                "Low overall progression rate",
            ]
        );
        assert_eq!(assessment.score, 7);
        assert_eq!(assessment.recommendation, "Consider deload or program change");
    }

    #[test]
    fn test_steady_progress_is_low_risk() {
        let entries = vec![
            session("Squat", 21, 5, 5, 100.0, 7),
            session("Squat", 14, 5, 5, 105.0, 7),
            session("Squat", 7, 5, 5, 110.0, 7),
            session("Squat", 0, 5, 5, 115.0, 7),
        ];
        let assessment = detector(entries)
            .predict_performance_plateau(USER, "Squat", as_of())
            .unwrap();

        assert_eq!(assessment.risk, PlateauRisk::Low);
        assert_eq!(assessment.score, 0);
        assert!(assessment.indicators.is_empty());
    }
}
