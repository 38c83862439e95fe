// ABOUTME: Single-session feedback analysis producing recommendations and adjustments
// ABOUTME: Rule-based pain, difficulty, and completion stages plus an effectiveness heuristic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Feedback analysis
//!
//! A session is analyzed in three fixed stages: pain, then difficulty, then
//! completion. Recommendations are concatenated in stage order and never
//! deduplicated. Adjustments are merged in stage order, so completion-stage
//! multipliers replace difficulty-stage multipliers for the same key.

use crate::adjustments::{AdjustmentKey, Adjustments};
use crate::config::AdaptationConfig;
use rehab_core::models::{DifficultyLevel, DifficultyRating, FeedbackEvent, PainSeverity};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

/// Recommendation texts emitted by the analysis stages
pub mod messages {
    /// Post-session pain at or above the high threshold
    pub const HIGH_PAIN: &str = "High pain level detected. Consider reducing exercise intensity.";
    /// Pain rose by more than the significant-change threshold
    pub const PAIN_INCREASED: &str =
        "Pain increased significantly. Monitor closely and consider modifications.";
    /// Pain fell by more than the significant-change threshold
    pub const PAIN_DECREASED: &str =
        "Great! Pain decreased significantly. This exercise is very beneficial.";
    /// Pain held steady or fell slightly
    pub const PAIN_MAINTAINED: &str =
        "Exercise helped maintain or reduce pain levels. Continue as prescribed.";
    /// High pre-session pain that improved
    pub const EXCELLENT_PROGRESS: &str =
        "Excellent progress! Pre-exercise pain was high but improved.";
    /// Rated easy
    pub const TOO_EASY: &str = "Exercise seems too easy. Consider increasing intensity next time.";
    /// Rated hard with low completion
    pub const TOO_CHALLENGING: &str =
        "Exercise is too challenging. Reducing intensity recommended.";
    /// Rated hard with adequate completion
    pub const CHALLENGING_MANAGEABLE: &str = "Exercise is challenging but manageable. Good work!";
    /// Rated perfect
    pub const PERFECT_DIFFICULTY: &str = "Perfect difficulty level! Maintain current intensity.";
    /// Completion below the low threshold
    pub const LOW_COMPLETION: &str = "Low completion rate. Focus on form over quantity.";
    /// Completion below the adequate threshold
    pub const COMPLETION_IMPROVABLE: &str =
        "Completion rate could be improved. Consider slight intensity reduction.";
    /// Completion at or above the excellent threshold
    pub const EXCELLENT_COMPLETION: &str =
        "Excellent completion rate! You might be ready for more challenge.";
    /// Degraded result when the feedback could not be analyzed
    pub const ANALYSIS_UNAVAILABLE: &str = "Unable to analyze feedback at this time";
}

/// Multipliers written by each stage
mod multipliers {
    pub const HIGH_PAIN_INTENSITY: f64 = 0.7;
    pub const HIGH_PAIN_REST: f64 = 1.5;
    pub const PAIN_INCREASED_INTENSITY: f64 = 0.8;
    pub const PAIN_DECREASED_INTENSITY: f64 = 1.1;

    pub const EASY_SETS: f64 = 1.2;
    pub const EASY_REPS: f64 = 1.1;
    pub const TOO_HARD_SETS: f64 = 0.8;
    pub const TOO_HARD_REPS: f64 = 0.9;

    pub const LOW_COMPLETION_SETS: f64 = 0.7;
    pub const LOW_COMPLETION_REPS: f64 = 0.8;
    pub const IMPROVABLE_COMPLETION_SETS: f64 = 0.9;
    pub const EXCELLENT_COMPLETION_SETS: f64 = 1.1;
}

/// Hand-tuned effectiveness heuristic weights
mod effectiveness {
    pub const BASE: f64 = 0.5;

    pub const MAJOR_RELIEF_CHANGE: i64 = -2;
    pub const MINOR_WORSENING_CHANGE: i64 = 2;
    pub const PAIN_MAJOR_RELIEF: f64 = 0.4;
    pub const PAIN_HELD: f64 = 0.2;
    pub const PAIN_MINOR_WORSENING: f64 = -0.1;
    pub const PAIN_MAJOR_WORSENING: f64 = -0.3;

    pub const COMPLETION_HIGH: f64 = 0.9;
    pub const COMPLETION_GOOD: f64 = 0.7;
    pub const COMPLETION_FAIR: f64 = 0.5;
    pub const COMPLETION_HIGH_BONUS: f64 = 0.3;
    pub const COMPLETION_GOOD_BONUS: f64 = 0.2;
    pub const COMPLETION_FAIR_BONUS: f64 = 0.1;
    pub const COMPLETION_POOR_PENALTY: f64 = -0.2;

    pub const PERFECT_BONUS: f64 = 0.3;
    pub const EASY_BONUS: f64 = 0.1;
    pub const OTHER_BONUS: f64 = 0.15;

    /// Score reported by the degraded fallback result
    pub const FALLBACK: f64 = 0.5;
}

/// Pain sub-analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PainAnalysis {
    /// Post-session pain minus pre-session pain
    pub pain_change: i64,
    /// Pain held steady or improved
    pub is_beneficial: bool,
    /// Bucket of the post-session pain score
    pub severity: PainSeverity,
}

/// Completion sub-analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompletionAnalysis {
    /// Average of the sets ratio and the reps ratio
    pub completion_rate: f64,
    /// Completion at or above the adequate threshold
    pub is_adequate: bool,
}

/// Difficulty sub-analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DifficultyAnalysis {
    /// Reported rating
    pub rating: DifficultyRating,
    /// Rated `perfect`
    pub is_appropriate: bool,
}

/// Result of analyzing one feedback event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Recommendations in stage order (pain, difficulty, completion)
    pub recommendations: Vec<String>,
    /// Adjustments after the ordered merge of all stages
    pub adjustments: Adjustments,
    /// Heuristic effectiveness in `[0.0, 1.0]`
    pub effectiveness_score: f64,
    /// Pain sub-analysis, absent on the fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pain_analysis: Option<PainAnalysis>,
    /// Completion sub-analysis, absent on the fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_analysis: Option<CompletionAnalysis>,
    /// Difficulty sub-analysis, absent on the fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_analysis: Option<DifficultyAnalysis>,
    /// Set only on the degraded fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    /// Degraded result returned when the feedback cannot be analyzed
    #[must_use]
    pub fn fallback(error: impl Into<String>) -> Self {
        Self {
            recommendations: vec![messages::ANALYSIS_UNAVAILABLE.to_owned()],
            adjustments: Adjustments::new(),
            effectiveness_score: effectiveness::FALLBACK,
            pain_analysis: None,
            completion_analysis: None,
            difficulty_analysis: None,
            error: Some(error.into()),
        }
    }

    /// Whether this is the degraded fallback
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

/// Output of a single analysis stage
#[derive(Debug, Default)]
struct StageOutcome {
    recommendations: Vec<String>,
    adjustments: Adjustments,
}

impl StageOutcome {
    fn recommend(&mut self, message: &str) {
        self.recommendations.push(message.to_owned());
    }
}

/// Completion rate as the average of the sets ratio and the reps ratio
///
/// Targets are floored at 1 so a missing or zero target never divides by zero.
#[must_use]
pub fn completion_rate(event: &FeedbackEvent) -> f64 {
    let sets = f64::from(event.sets_done()) / f64::from(event.sets_target().max(1));
    let reps = f64::from(event.reps_done()) / f64::from(event.reps_target().max(1));
    (sets + reps) / 2.0
}

/// Rule-based analyzer for session feedback
#[derive(Debug, Clone, Default)]
pub struct FeedbackAnalyzer {
    config: AdaptationConfig,
}

impl FeedbackAnalyzer {
    /// Create an analyzer with explicit thresholds
    #[must_use]
    pub const fn new(config: AdaptationConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn config(&self) -> &AdaptationConfig {
        &self.config
    }

    /// Analyze a raw feedback record as submitted by a client
    ///
    /// Never fails: a record that cannot be decoded yields the degraded
    /// fallback result carrying the decoding error.
    #[must_use]
    pub fn analyze_feedback(&self, payload: &Value) -> AnalysisResult {
        match FeedbackEvent::deserialize(payload) {
            Ok(event) => self.analyze(&event),
            Err(e) => {
                error!(error = %e, "Error analyzing feedback");
                AnalysisResult::fallback(e.to_string())
            }
        }
    }

    /// Analyze a decoded feedback event
    #[must_use]
    pub fn analyze(&self, event: &FeedbackEvent) -> AnalysisResult {
        let pain_before = event.pain_before();
        let pain_after = event.pain_after();
        let pain_change = event.pain_change();
        let rating = event.difficulty();
        let rate = completion_rate(event);

        let mut recommendations = Vec::new();
        let mut adjustments = Adjustments::new();
        for stage in [
            self.analyze_pain(pain_before, pain_after, pain_change),
            self.analyze_difficulty(rating, rate),
            self.analyze_completion(rate),
        ] {
            recommendations.extend(stage.recommendations);
            adjustments.merge(stage.adjustments);
        }

        let effectiveness_score = Self::effectiveness_score(pain_change, rate, rating);

        debug!(
            exercise.name = event.exercise_name.as_deref().unwrap_or("unknown"),
            pain.change = pain_change,
            completion.rate = rate,
            difficulty = %rating,
            effectiveness = effectiveness_score,
            "Feedback analyzed"
        );

        AnalysisResult {
            recommendations,
            adjustments,
            effectiveness_score,
            pain_analysis: Some(PainAnalysis {
                pain_change,
                is_beneficial: pain_change <= 0,
                severity: PainSeverity::from_level(pain_after),
            }),
            completion_analysis: Some(CompletionAnalysis {
                completion_rate: rate,
                is_adequate: rate >= self.config.completion.adequate,
            }),
            difficulty_analysis: Some(DifficultyAnalysis {
                rating,
                is_appropriate: rating == DifficultyRating::Perfect,
            }),
            error: None,
        }
    }

    fn analyze_pain(&self, pain_before: i32, pain_after: i32, pain_change: i64) -> StageOutcome {
        let thresholds = &self.config.pain;
        let significant_change = i64::from(thresholds.significant_change);
        let mut outcome = StageOutcome::default();

        if pain_after >= thresholds.high_level {
            outcome.recommend(messages::HIGH_PAIN);
            outcome.adjustments = Adjustments::new()
                .with_multiplier(
                    AdjustmentKey::IntensityMultiplier,
                    multipliers::HIGH_PAIN_INTENSITY,
                )
                .with_multiplier(AdjustmentKey::RestTimeMultiplier, multipliers::HIGH_PAIN_REST);
        } else if pain_change > significant_change {
            outcome.recommend(messages::PAIN_INCREASED);
            outcome.adjustments = Adjustments::new().with_multiplier(
                AdjustmentKey::IntensityMultiplier,
                multipliers::PAIN_INCREASED_INTENSITY,
            );
        } else if pain_change < -significant_change {
            outcome.recommend(messages::PAIN_DECREASED);
            outcome.adjustments = Adjustments::new().with_multiplier(
                AdjustmentKey::IntensityMultiplier,
                multipliers::PAIN_DECREASED_INTENSITY,
            );
        } else if pain_change <= 0 {
            outcome.recommend(messages::PAIN_MAINTAINED);
        }

        if pain_before >= thresholds.high_level && pain_after < pain_before {
            outcome.recommend(messages::EXCELLENT_PROGRESS);
        }

        outcome
    }

    fn analyze_difficulty(&self, rating: DifficultyRating, rate: f64) -> StageOutcome {
        let mut outcome = StageOutcome::default();

        match rating {
            DifficultyRating::Easy => {
                outcome.recommend(messages::TOO_EASY);
                outcome.adjustments = Adjustments::new()
                    .with_multiplier(AdjustmentKey::SetsMultiplier, multipliers::EASY_SETS)
                    .with_multiplier(AdjustmentKey::RepsMultiplier, multipliers::EASY_REPS)
                    .with_level(DifficultyLevel::Intermediate);
            }
            DifficultyRating::Hard if rate < self.config.completion.adequate => {
                outcome.recommend(messages::TOO_CHALLENGING);
                outcome.adjustments = Adjustments::new()
                    .with_multiplier(AdjustmentKey::SetsMultiplier, multipliers::TOO_HARD_SETS)
                    .with_multiplier(AdjustmentKey::RepsMultiplier, multipliers::TOO_HARD_REPS)
                    .with_level(DifficultyLevel::Beginner);
            }
            DifficultyRating::Hard => outcome.recommend(messages::CHALLENGING_MANAGEABLE),
            DifficultyRating::Perfect => outcome.recommend(messages::PERFECT_DIFFICULTY),
            DifficultyRating::Unknown => {}
        }

        outcome
    }

    fn analyze_completion(&self, rate: f64) -> StageOutcome {
        let thresholds = &self.config.completion;
        let mut outcome = StageOutcome::default();

        if rate < thresholds.low {
            outcome.recommend(messages::LOW_COMPLETION);
            outcome.adjustments = Adjustments::new()
                .with_multiplier(
                    AdjustmentKey::SetsMultiplier,
                    multipliers::LOW_COMPLETION_SETS,
                )
                .with_multiplier(
                    AdjustmentKey::RepsMultiplier,
                    multipliers::LOW_COMPLETION_REPS,
                );
        } else if rate < thresholds.adequate {
            outcome.recommend(messages::COMPLETION_IMPROVABLE);
            outcome.adjustments = Adjustments::new().with_multiplier(
                AdjustmentKey::SetsMultiplier,
                multipliers::IMPROVABLE_COMPLETION_SETS,
            );
        } else if rate >= thresholds.excellent {
            outcome.recommend(messages::EXCELLENT_COMPLETION);
            outcome.adjustments = Adjustments::new().with_multiplier(
                AdjustmentKey::SetsMultiplier,
                multipliers::EXCELLENT_COMPLETION_SETS,
            );
        }

        outcome
    }

    /// Weighted effectiveness heuristic, clamped to `[0.0, 1.0]`
    #[must_use]
    pub fn effectiveness_score(pain_change: i64, rate: f64, rating: DifficultyRating) -> f64 {
        let pain = if pain_change <= effectiveness::MAJOR_RELIEF_CHANGE {
            effectiveness::PAIN_MAJOR_RELIEF
        } else if pain_change <= 0 {
            effectiveness::PAIN_HELD
        } else if pain_change <= effectiveness::MINOR_WORSENING_CHANGE {
            effectiveness::PAIN_MINOR_WORSENING
        } else {
            effectiveness::PAIN_MAJOR_WORSENING
        };

        let completion = if rate >= effectiveness::COMPLETION_HIGH {
            effectiveness::COMPLETION_HIGH_BONUS
        } else if rate >= effectiveness::COMPLETION_GOOD {
            effectiveness::COMPLETION_GOOD_BONUS
        } else if rate >= effectiveness::COMPLETION_FAIR {
            effectiveness::COMPLETION_FAIR_BONUS
        } else {
            effectiveness::COMPLETION_POOR_PENALTY
        };

        let difficulty = match rating {
            DifficultyRating::Perfect => effectiveness::PERFECT_BONUS,
            DifficultyRating::Easy => effectiveness::EASY_BONUS,
            DifficultyRating::Hard | DifficultyRating::Unknown => effectiveness::OTHER_BONUS,
        };

        (effectiveness::BASE + pain + completion + difficulty).clamp(0.0, 1.0)
    }
}
