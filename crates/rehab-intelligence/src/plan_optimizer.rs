// ABOUTME: Trend-driven optimization of prescribed sets and reps
// ABOUTME: Compounds pain, completion, and latest-difficulty multipliers into new targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan optimization
//!
//! Multipliers compound in a fixed order: pain trend, completion trend, then the
//! difficulty of the most recent session. The resulting targets are floored and
//! never drop below one set or one rep.

use crate::config::AdaptationConfig;
use crate::trend_analysis::{FeedbackTrends, TrendAnalyzer, TrendDirection, TrendSummary};
use rehab_core::models::{DifficultyRating, FeedbackEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

/// Recommendation texts derived from trends
pub mod messages {
    /// Pain trend increasing
    pub const PAIN_INCREASING: &str =
        "Pain levels are increasing. Consider reducing intensity or consulting therapist.";
    /// Pain trend decreasing
    pub const PAIN_DECREASING: &str = "Great progress! Pain levels are decreasing consistently.";
    /// Completion trend decreasing
    pub const COMPLETION_DECREASING: &str =
        "Completion rates are declining. Focus on consistency over intensity.";
    /// Completion trend increasing
    pub const COMPLETION_INCREASING: &str =
        "Completion rates are improving. Consider gradual progression.";
    /// Average pain above the high-average threshold
    pub const HIGH_AVERAGE_PAIN: &str = "Average pain levels are high. Prioritize pain management.";
    /// Empty history
    pub const NO_DATA: &str = "Insufficient data for optimization";
}

mod multipliers {
    pub const PAIN_RISING_SETS: f64 = 0.8;
    pub const PAIN_RISING_REPS: f64 = 0.9;
    pub const PAIN_FALLING_SETS: f64 = 1.1;
    pub const PAIN_FALLING_REPS: f64 = 1.05;

    pub const COMPLETION_FALLING_SETS: f64 = 0.9;
    pub const COMPLETION_RISING_SETS: f64 = 1.1;

    pub const EASY_SETS: f64 = 1.2;
    pub const EASY_REPS: f64 = 1.1;
    pub const HARD_SETS: f64 = 0.8;
    pub const HARD_REPS: f64 = 0.9;
}

/// Failures inside optimization, reported as `status: error`
#[derive(Debug, Error)]
pub enum OptimizationError {
    /// A history entry could not be decoded
    #[error("invalid feedback history entry {index}: {source}")]
    InvalidHistoryEntry {
        /// Position of the entry in the supplied history
        index: usize,
        /// Decoding failure
        source: serde_json::Error,
    },

    /// A scaled target does not fit the prescription range
    #[error("optimized {field} out of range: {value}")]
    TargetOutOfRange {
        /// `sets` or `reps`
        field: &'static str,
        /// Unrepresentable scaled value
        value: f64,
    },
}

/// Optimized prescription and the net multipliers that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizedParameters {
    /// New set target, at least 1
    pub optimized_sets: u32,
    /// New rep target, at least 1
    pub optimized_reps: u32,
    /// Compound sets multiplier minus one
    pub sets_change: f64,
    /// Compound reps multiplier minus one
    pub reps_change: f64,
}

/// Outcome of an optimization request, tagged by `status`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OptimizationResult {
    /// History was analyzed
    Success {
        /// New set and rep targets with their relative changes
        optimized_parameters: OptimizedParameters,
        /// Trends the multipliers were derived from
        trends: FeedbackTrends,
        /// Trend-driven guidance, possibly empty
        recommendations: Vec<String>,
    },
    /// History was empty
    NoData {
        /// Why no optimization was produced
        message: String,
    },
    /// Internal failure, converted rather than propagated
    Error {
        /// Description of the failure
        message: String,
    },
}

impl OptimizationResult {
    fn no_data() -> Self {
        Self::NoData {
            message: messages::NO_DATA.to_owned(),
        }
    }

    /// Optimized parameters on success
    #[must_use]
    pub const fn parameters(&self) -> Option<&OptimizedParameters> {
        match self {
            Self::Success {
                optimized_parameters,
                ..
            } => Some(optimized_parameters),
            Self::NoData { .. } | Self::Error { .. } => None,
        }
    }

    /// Wire status label
    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::NoData { .. } => "no_data",
            Self::Error { .. } => "error",
        }
    }
}

/// Compound multiplier pair
#[derive(Debug, Clone, Copy)]
struct VolumeMultiplier {
    sets: f64,
    reps: f64,
}

impl VolumeMultiplier {
    const IDENTITY: Self = Self {
        sets: 1.0,
        reps: 1.0,
    };

    fn scale(&mut self, sets: f64, reps: f64) {
        self.sets *= sets;
        self.reps *= reps;
    }
}

/// Optimizes set/rep targets from a feedback history
#[derive(Debug, Clone, Default)]
pub struct PlanOptimizer {
    config: AdaptationConfig,
    trends: TrendAnalyzer,
}

impl PlanOptimizer {
    /// Create an optimizer with explicit thresholds
    #[must_use]
    pub fn new(config: AdaptationConfig) -> Self {
        let trends = TrendAnalyzer::new(config.trend.clone());
        Self { config, trends }
    }

    /// Trend analyzer sharing this optimizer's thresholds
    #[must_use]
    pub const fn trend_analyzer(&self) -> &TrendAnalyzer {
        &self.trends
    }

    /// Optimize from a raw, client-supplied history
    ///
    /// Never fails: undecodable entries and internal failures become
    /// `status: error`.
    #[must_use]
    pub fn optimize_plan(
        &self,
        user_id: &str,
        exercise_id: &str,
        history: &[Value],
    ) -> OptimizationResult {
        let decoded: Result<Vec<FeedbackEvent>, OptimizationError> = history
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                FeedbackEvent::deserialize(entry)
                    .map_err(|source| OptimizationError::InvalidHistoryEntry { index, source })
            })
            .collect();

        match decoded {
            Ok(events) => self.optimize(user_id, exercise_id, &events),
            Err(e) => Self::failure(user_id, exercise_id, &e),
        }
    }

    /// Optimize from a decoded history, oldest session first
    #[must_use]
    pub fn optimize(
        &self,
        user_id: &str,
        exercise_id: &str,
        history: &[FeedbackEvent],
    ) -> OptimizationResult {
        let Some(latest) = history.last() else {
            return OptimizationResult::no_data();
        };

        let trends = self.trends.compute_trends(history);

        match Self::generate_parameters(latest, trends.summary()) {
            Ok(optimized_parameters) => {
                info!(
                    user.id = %user_id,
                    exercise.id = %exercise_id,
                    sessions = history.len(),
                    optimized.sets = optimized_parameters.optimized_sets,
                    optimized.reps = optimized_parameters.optimized_reps,
                    "Exercise plan optimized"
                );
                let recommendations = self.recommendations(trends.summary());
                OptimizationResult::Success {
                    optimized_parameters,
                    trends,
                    recommendations,
                }
            }
            Err(e) => Self::failure(user_id, exercise_id, &e),
        }
    }

    fn failure(user_id: &str, exercise_id: &str, e: &OptimizationError) -> OptimizationResult {
        error!(
            user.id = %user_id,
            exercise.id = %exercise_id,
            error = %e,
            "Error optimizing exercise plan"
        );
        OptimizationResult::Error {
            message: e.to_string(),
        }
    }

    fn generate_parameters(
        latest: &FeedbackEvent,
        trends: Option<&TrendSummary>,
    ) -> Result<OptimizedParameters, OptimizationError> {
        let mut multiplier = VolumeMultiplier::IDENTITY;

        if let Some(summary) = trends {
            match summary.pain_trend {
                TrendDirection::Increasing => multiplier.scale(
                    multipliers::PAIN_RISING_SETS,
                    multipliers::PAIN_RISING_REPS,
                ),
                TrendDirection::Decreasing => multiplier.scale(
                    multipliers::PAIN_FALLING_SETS,
                    multipliers::PAIN_FALLING_REPS,
                ),
                TrendDirection::Stable | TrendDirection::InsufficientData => {}
            }

            match summary.completion_trend {
                TrendDirection::Decreasing => {
                    multiplier.scale(multipliers::COMPLETION_FALLING_SETS, 1.0);
                }
                TrendDirection::Increasing => {
                    multiplier.scale(multipliers::COMPLETION_RISING_SETS, 1.0);
                }
                TrendDirection::Stable | TrendDirection::InsufficientData => {}
            }
        }

        match latest.difficulty() {
            DifficultyRating::Easy => {
                multiplier.scale(multipliers::EASY_SETS, multipliers::EASY_REPS);
            }
            DifficultyRating::Hard => {
                multiplier.scale(multipliers::HARD_SETS, multipliers::HARD_REPS);
            }
            DifficultyRating::Perfect | DifficultyRating::Unknown => {}
        }

        Ok(OptimizedParameters {
            optimized_sets: scale_target("sets", latest.prescribed_sets(), multiplier.sets)?,
            optimized_reps: scale_target("reps", latest.prescribed_reps(), multiplier.reps)?,
            sets_change: multiplier.sets - 1.0,
            reps_change: multiplier.reps - 1.0,
        })
    }

    fn recommendations(&self, trends: Option<&TrendSummary>) -> Vec<String> {
        let Some(summary) = trends else {
            return Vec::new();
        };

        let mut recommendations = Vec::new();

        match summary.pain_trend {
            TrendDirection::Increasing => recommendations.push(messages::PAIN_INCREASING),
            TrendDirection::Decreasing => recommendations.push(messages::PAIN_DECREASING),
            TrendDirection::Stable | TrendDirection::InsufficientData => {}
        }

        match summary.completion_trend {
            TrendDirection::Decreasing => recommendations.push(messages::COMPLETION_DECREASING),
            TrendDirection::Increasing => recommendations.push(messages::COMPLETION_INCREASING),
            TrendDirection::Stable | TrendDirection::InsufficientData => {}
        }

        if summary.average_pain > self.config.pain.high_average {
            recommendations.push(messages::HIGH_AVERAGE_PAIN);
        }

        recommendations.into_iter().map(str::to_owned).collect()
    }
}

/// `max(1, floor(target * multiplier))`
fn scale_target(field: &'static str, target: u32, multiplier: f64) -> Result<u32, OptimizationError> {
    let value = (f64::from(target) * multiplier).floor();
    if !value.is_finite() || value > f64::from(u32::MAX) {
        return Err(OptimizationError::TargetOutOfRange { field, value });
    }
    // Safe: value is finite and within u32 range; negatives saturate to 0
    Ok((value as u32).max(1))
}
