// ABOUTME: Fatigue, deload, and readiness scoring configuration
// ABOUTME: Sub-score weights, normalization ceilings, frequency bands, and indicator thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fatigue and Recovery Configuration

use serde::{Deserialize, Serialize};

/// Composite fatigue scoring settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FatigueConfig {
    /// Default lookback window in days
    pub default_window_days: u32,
    /// Relative weight of each sub-score
    pub weights: FatigueWeights,
    /// Volume and intensity normalization
    pub normalization: FatigueNormalization,
    /// Training-density bands
    pub frequency: FrequencyBands,
    /// Window-over-window trend penalties
    pub trend: FatigueTrendConfig,
}

impl Default for FatigueConfig {
    fn default() -> Self {
        Self {
            default_window_days: 7,
            weights: FatigueWeights::default(),
            normalization: FatigueNormalization::default(),
            frequency: FrequencyBands::default(),
            trend: FatigueTrendConfig::default(),
        }
    }
}

/// Weights of the four sub-scores; must sum to 1.0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FatigueWeights {
    /// Volume sub-score weight
    pub volume: f64,
    /// Intensity sub-score weight
    pub intensity: f64,
    /// Frequency sub-score weight
    pub frequency: f64,
    /// Trend sub-score weight
    pub trend: f64,
}

impl Default for FatigueWeights {
    fn default() -> Self {
        Self {
            volume: 0.3,
            intensity: 0.4,
            frequency: 0.2,
            trend: 0.1,
        }
    }
}

impl FatigueWeights {
    /// Sum of all weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.volume + self.intensity + self.frequency + self.trend
    }
}

/// Ceilings that map raw volume and RPE onto the 0-10 scale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FatigueNormalization {
    /// Sets in the window that saturate the set component
    pub sets_ceiling: f64,
    /// Tonnage in the window that saturates the tonnage component
    pub tonnage_ceiling: f64,
    /// Weighted RPE at or below which intensity scores zero
    pub rpe_floor: f64,
    /// RPE span above the floor that reaches the maximum score
    pub rpe_span: f64,
    /// Recency weight of the oldest session (newest is 1.0)
    pub oldest_session_weight: f64,
}

impl Default for FatigueNormalization {
    fn default() -> Self {
        Self {
            sets_ceiling: 50.0,
            tonnage_ceiling: 10_000.0,
            rpe_floor: 6.0,
            rpe_span: 4.0,
            oldest_session_weight: 0.5,
        }
    }
}

/// Score assigned to each training-density band (distinct days / window days)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyBands {
    /// Upper bound of the undertrained band
    pub low_ratio: f64,
    /// Upper bound of the optimal band
    pub optimal_ratio: f64,
    /// Upper bound of the high band
    pub high_ratio: f64,
    /// Score for the undertrained band
    pub low_score: f64,
    /// Score for the optimal band
    pub optimal_score: f64,
    /// Score for the high band
    pub high_score: f64,
    /// Score above the high band
    pub excessive_score: f64,
}

impl Default for FrequencyBands {
    fn default() -> Self {
        Self {
            low_ratio: 0.3,
            optimal_ratio: 0.6,
            high_ratio: 0.8,
            low_score: 1.0,
            optimal_score: 0.0,
            high_score: 3.0,
            excessive_score: 7.0,
        }
    }
}

/// Penalties for effort rising between consecutive windows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FatigueTrendConfig {
    /// Mean RPE increase above which the increase is penalized
    pub rpe_increase_threshold: f64,
    /// Points per unit of RPE increase
    pub rpe_increase_multiplier: f64,
    /// Points when sets held steady while RPE rose
    pub volume_held_penalty: f64,
}

impl Default for FatigueTrendConfig {
    fn default() -> Self {
        Self {
            rpe_increase_threshold: 0.5,
            rpe_increase_multiplier: 2.0,
            volume_held_penalty: 2.0,
        }
    }
}

/// Deload indicator thresholds and scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeloadConfig {
    /// Window for RPE, intensity, and frequency indicators
    pub lookback_days: u32,
    /// Fatigue score above which fatigue is high
    pub high_fatigue_score: f64,
    /// Mean RPE above which effort is consistently high
    pub high_avg_rpe: f64,
    /// RPE counted as a very hard session
    pub very_high_rpe: u8,
    /// Very hard sessions that trigger the intensity indicator
    pub very_high_rpe_sessions: usize,
    /// Distinct training days above which frequency is high
    pub max_training_days: usize,
    /// Lifetime workouts above which the extended-period check applies
    pub extended_period_workouts: usize,
    /// Sessions per week assumed when converting workouts to weeks
    pub assumed_sessions_per_week: usize,
    /// Estimated weeks at or above which training has been extended
    pub extended_period_weeks: usize,
    /// Score at or above which a full deload is advised
    pub full_deload_score: u32,
    /// Score at or above which a light deload is advised
    pub light_deload_score: u32,
}

impl Default for DeloadConfig {
    fn default() -> Self {
        Self {
            lookback_days: 14,
            high_fatigue_score: 7.0,
            high_avg_rpe: 8.5,
            very_high_rpe: 9,
            very_high_rpe_sessions: 3,
            max_training_days: 10,
            extended_period_workouts: 20,
            assumed_sessions_per_week: 3,
            extended_period_weeks: 4,
            full_deload_score: 4,
            light_deload_score: 2,
        }
    }
}

/// Readiness bonus and band thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessConfig {
    /// Window for fatigue and RPE consistency
    pub window_days: u32,
    /// RPE standard deviation below which the full bonus applies
    pub tight_rpe_std: f64,
    /// RPE standard deviation below which the partial bonus applies
    pub loose_rpe_std: f64,
    /// Full consistency bonus
    pub full_bonus: f64,
    /// Partial consistency bonus
    pub partial_bonus: f64,
    /// Readiness at or above which the athlete is excellent
    pub excellent: f64,
    /// Readiness at or above which the athlete is good
    pub good: f64,
    /// Readiness at or above which the athlete is fair
    pub fair: f64,
    /// Readiness reported without recent data
    pub unknown_readiness: f64,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            window_days: 7,
            tight_rpe_std: 0.5,
            loose_rpe_std: 1.0,
            full_bonus: 1.0,
            partial_bonus: 0.5,
            excellent: 8.0,
            good: 6.0,
            fair: 4.0,
            unknown_readiness: 5.0,
        }
    }
}
