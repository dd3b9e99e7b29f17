// ABOUTME: Deload recommendation from fatigue, intensity, frequency, and training age indicators
// ABOUTME: Indicator points map to full deload, light deload, or continue training
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::intelligence::{DeloadConfig, StrengthIntelligenceConfig};
use crate::fatigue_scorer::FatigueScorer;
use crate::history::SharedHistory;
use crate::volume::WorkoutVolume;

/// Whether to deload, with the indicators behind the decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeloadRecommendation {
    /// Deload advised
    pub should_deload: bool,
    /// Sum of indicator points
    pub deload_score: u32,
    /// Comma-joined indicators, or a fallback description
    pub reason: String,
    /// What to do next
    pub suggestion: String,
    /// Indicators that fired, in evaluation order
    pub indicators: Vec<String>,
}

/// Decides whether a deload week is warranted
pub struct DeloadAdvisor {
    history: SharedHistory,
    fatigue: FatigueScorer,
    config: DeloadConfig,
}

impl DeloadAdvisor {
    /// Create an advisor using the global configuration
    #[must_use]
    pub fn new(history: SharedHistory) -> Self {
        let config = StrengthIntelligenceConfig::global();
        Self::with_config(
            history.clone(),
            FatigueScorer::new(history),
            config.deload.clone(),
        )
    }

    /// Create an advisor with an explicit scorer and configuration
    #[must_use]
    pub const fn with_config(
        history: SharedHistory,
        fatigue: FatigueScorer,
        config: DeloadConfig,
    ) -> Self {
        Self {
            history,
            fatigue,
            config,
        }
    }

    /// Evaluate deload indicators as of `as_of`
    #[must_use]
    pub fn recommend_deload(&self, user: &str, as_of: NaiveDate) -> DeloadRecommendation {
        let cfg = &self.config;
        let recent = self
            .history
            .get_recent_workouts(user, cfg.lookback_days, as_of);
        if recent.is_empty() {
            return DeloadRecommendation {
                should_deload: false,
                deload_score: 0,
                reason: "Insufficient data".to_owned(),
                suggestion: "Continue training and monitor fatigue".to_owned(),
                indicators: Vec::new(),
            };
        }

        let fatigue_score =
            self.fatigue
                .calculate_fatigue_score(user, self.fatigue.default_window_days(), as_of);
        let volume = WorkoutVolume::from_workouts(&recent);
        let mut indicators = Vec::new();
        let mut score = 0;

        if fatigue_score > cfg.high_fatigue_score {
            indicators.push("High fatigue levels".to_owned());
            score += 3;
        }
        if volume.avg_rpe > cfg.high_avg_rpe {
            indicators.push("Consistently high RPE".to_owned());
            score += 2;
        }
        if WorkoutVolume::count_at_or_above(&recent, cfg.very_high_rpe) >= cfg.very_high_rpe_sessions
        {
            indicators.push("Multiple very high intensity sessions".to_owned());
            score += 2;
        }
        if volume.training_days > cfg.max_training_days {
            indicators.push("High training frequency".to_owned());
            score += 1;
        }

        // Weeks of training estimated from lifetime session count
        let total_workouts = self.history.get_user_workouts(user).len();
        if total_workouts > cfg.extended_period_workouts
            && total_workouts / cfg.assumed_sessions_per_week >= cfg.extended_period_weeks
        {
            indicators.push("Extended training period".to_owned());
            score += 1;
        }

        let (should_deload, suggestion) = if score >= cfg.full_deload_score {
            (
                true,
                "Take a deload week: reduce weight by 20-30% and focus on form",
            )
        } else if score >= cfg.light_deload_score {
            (true, "Consider a light deload: reduce volume by 30-40%")
        } else {
            (
                false,
                "Continue current training but monitor fatigue closely",
            )
        };
        let reason = if indicators.is_empty() {
            "Low deload indicators".to_owned()
        } else {
            indicators.join(", ")
        };

        if should_deload {
            info!(user, score, %reason, "Deload recommended");
        } else {
            debug!(user, score, "No deload needed");
        }
        DeloadRecommendation {
            should_deload,
            deload_score: score,
            reason,
            suggestion: suggestion.to_owned(),
            indicators,
        }
    }
}
