// ABOUTME: Recovery recommendations keyed to the current fatigue band
// ABOUTME: Sleep and nutrition always apply; training and recovery advice scale with fatigue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fatigue_scorer::{FatigueScorer, FatigueStatus};
use crate::history::SharedHistory;
use crate::types::Priority;

/// Area a recovery recommendation addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecoveryCategory {
    /// Sleep duration and quality
    Sleep,
    /// Protein and fueling
    Nutrition,
    /// Training load adjustments
    Training,
    /// Active recovery practices
    Recovery,
    /// Wellness tracking
    Monitoring,
    /// Medical follow-up
    Health,
}

/// One recovery recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryRecommendation {
    /// Area addressed
    pub category: RecoveryCategory,
    /// Urgency
    pub priority: Priority,
    /// Advice text
    pub message: String,
}

impl RecoveryRecommendation {
    fn new(category: RecoveryCategory, priority: Priority, message: &str) -> Self {
        Self {
            category,
            priority,
            message: message.to_owned(),
        }
    }
}

/// Builds recovery advice from the fatigue band
pub struct RecoveryAdvisor {
    fatigue: FatigueScorer,
}

impl RecoveryAdvisor {
    /// Create an advisor using the global fatigue configuration
    #[must_use]
    pub fn new(history: SharedHistory) -> Self {
        Self::with_scorer(FatigueScorer::new(history))
    }

    /// Create an advisor over an existing scorer
    #[must_use]
    pub const fn with_scorer(fatigue: FatigueScorer) -> Self {
        Self { fatigue }
    }

    /// Recommendations for the user's fatigue as of `as_of`
    #[must_use]
    pub fn get_recovery_recommendations(
        &self,
        user: &str,
        as_of: NaiveDate,
    ) -> Vec<RecoveryRecommendation> {
        let status = self.fatigue.get_fatigue_status(user, as_of).status;
        let recommendations = Self::for_status(status);
        debug!(user, %status, count = recommendations.len(), "Built recovery recommendations");
        recommendations
    }

    /// Recommendations for a fatigue band
    #[must_use]
    pub fn for_status(status: FatigueStatus) -> Vec<RecoveryRecommendation> {
        use RecoveryCategory::{Health, Monitoring, Nutrition, Recovery, Sleep, Training};

        let mut out = vec![
            RecoveryRecommendation::new(
                Sleep,
                Priority::High,
                "Ensure 7-9 hours of quality sleep per night",
            ),
            RecoveryRecommendation::new(
                Nutrition,
                Priority::High,
                "Maintain adequate protein intake (1.6-2.2g/kg bodyweight)",
            ),
        ];

        match status {
            FatigueStatus::Low => out.push(RecoveryRecommendation::new(
                Training,
                Priority::Low,
                "Good recovery status. Can maintain or slightly increase training load",
            )),
            FatigueStatus::Moderate => out.extend([
                RecoveryRecommendation::new(
                    Training,
                    Priority::Medium,
                    "Consider adding extra rest day or reducing intensity",
                ),
                RecoveryRecommendation::new(
                    Recovery,
                    Priority::Medium,
                    "Focus on stress management and active recovery",
                ),
            ]),
            FatigueStatus::High => out.extend([
                RecoveryRecommendation::new(
                    Training,
                    Priority::High,
                    "Reduce training volume by 20-30% this week",
                ),
                RecoveryRecommendation::new(
                    Recovery,
                    Priority::High,
                    "Prioritize recovery: massage, stretching, meditation",
                ),
                RecoveryRecommendation::new(
                    Monitoring,
                    Priority::Medium,
                    "Monitor morning heart rate and subjective wellness",
                ),
            ]),
            FatigueStatus::VeryHigh => out.extend([
                RecoveryRecommendation::new(
                    Training,
                    Priority::Critical,
                    "Take complete rest or very light active recovery only",
                ),
                RecoveryRecommendation::new(
                    Health,
                    Priority::High,
                    "Consider consulting healthcare provider if fatigue persists",
                ),
                RecoveryRecommendation::new(
                    Recovery,
                    Priority::Critical,
                    "Focus entirely on recovery: sleep, nutrition, stress reduction",
                ),
            ]),
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::intelligence::FatigueConfig;
    use crate::test_support::{as_of, VecHistory, USER};

    #[test]
    fn test_rested_athlete_gets_base_advice() {
        let advisor = RecoveryAdvisor::with_scorer(FatigueScorer::with_config(
            VecHistory::shared(Vec::new()),
            FatigueConfig::default(),
        ));
        let recs = advisor.get_recovery_recommendations(USER, as_of());

        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].category, RecoveryCategory::Sleep);
        assert_eq!(recs[1].category, RecoveryCategory::Nutrition);
        assert_eq!(recs[2].priority, Priority::Low);
    }

    #[test]
    fn test_band_sizes() {
        assert_eq!(RecoveryAdvisor::for_status(FatigueStatus::Moderate).len(), 4);
        assert_eq!(RecoveryAdvisor::for_status(FatigueStatus::High).len(), 5);

        let critical = RecoveryAdvisor::for_status(FatigueStatus::VeryHigh);
        assert_eq!(critical.len(), 5);
        assert_eq!(critical[2].priority, Priority::Critical);
        assert_eq!(critical[3].category, RecoveryCategory::Health);
    }
}
