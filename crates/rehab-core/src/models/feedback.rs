// ABOUTME: Session feedback record submitted after performing a prescribed exercise
// ABOUTME: Keeps wire fields optional and resolves defaults at the point of use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{difficulty_scores, feedback_defaults};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Subjective difficulty reported by the patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyRating {
    /// Exercise felt too easy
    Easy,
    /// Exercise felt right
    #[default]
    Perfect,
    /// Exercise felt too hard
    Hard,
    /// Any rating string the client sent that is not recognized
    #[serde(other)]
    Unknown,
}

impl DifficultyRating {
    /// Numeric score used for trend fitting (`easy=1`, `perfect=2`, `hard=3`, unknown scores as perfect)
    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            Self::Easy => difficulty_scores::EASY,
            Self::Hard => difficulty_scores::HARD,
            Self::Perfect | Self::Unknown => difficulty_scores::PERFECT,
        }
    }

    /// Wire name of the rating
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Perfect => "perfect",
            Self::Hard => "hard",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DifficultyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty tier a plan should move to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    /// Entry-level variant of the exercise
    Beginner,
    /// Progressed variant of the exercise
    Intermediate,
}

/// Pain severity bucket derived from a 0-10 pain score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PainSeverity {
    /// Pain score of exactly zero
    NoPain,
    /// Scores up to 3 (including negative out-of-range scores)
    Mild,
    /// Scores 4-5
    Moderate,
    /// Scores 6-7
    Severe,
    /// Scores above 7
    VerySevere,
}

impl PainSeverity {
    /// Bucket a pain score
    #[must_use]
    pub const fn from_level(pain_level: i32) -> Self {
        if pain_level == 0 {
            Self::NoPain
        } else if pain_level <= 3 {
            Self::Mild
        } else if pain_level <= 5 {
            Self::Moderate
        } else if pain_level <= 7 {
            Self::Severe
        } else {
            Self::VerySevere
        }
    }
}

/// One reported outcome of performing a prescribed exercise session
///
/// Every field is optional on the wire. Accessors resolve the defaults shared by
/// the analyzer and the trend engine; the plan optimizer applies its own defaults
/// for prescribed volume via [`FeedbackEvent::prescribed_sets`] and
/// [`FeedbackEvent::prescribed_reps`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEvent {
    /// Pain score reported before the session (0-10 nominal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain_level_before: Option<i32>,
    /// Pain score reported after the session (0-10 nominal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain_level_after: Option<i32>,
    /// Subjective difficulty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty_rating: Option<DifficultyRating>,
    /// Sets actually performed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_sets: Option<u32>,
    /// Sets prescribed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_sets: Option<u32>,
    /// Reps actually performed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_reps: Option<u32>,
    /// Reps prescribed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_reps: Option<u32>,
    /// Display name of the exercise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_name: Option<String>,
    /// Exercise identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<String>,
    /// Patient identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl FeedbackEvent {
    /// Pain before the session, defaulting to 5
    #[must_use]
    pub fn pain_before(&self) -> i32 {
        self.pain_level_before
            .unwrap_or(feedback_defaults::PAIN_LEVEL)
    }

    /// Pain after the session, defaulting to 5
    #[must_use]
    pub fn pain_after(&self) -> i32 {
        self.pain_level_after.unwrap_or(feedback_defaults::PAIN_LEVEL)
    }

    /// Change in pain across the session (positive means it got worse)
    ///
    /// Widened to `i64` so out-of-range scores never overflow.
    #[must_use]
    pub fn pain_change(&self) -> i64 {
        i64::from(self.pain_after()) - i64::from(self.pain_before())
    }

    /// Difficulty rating, defaulting to `perfect`
    #[must_use]
    pub fn difficulty(&self) -> DifficultyRating {
        self.difficulty_rating.unwrap_or_default()
    }

    /// Completed sets, defaulting to 0
    #[must_use]
    pub fn sets_done(&self) -> u32 {
        self.completed_sets.unwrap_or(feedback_defaults::COMPLETED)
    }

    /// Completed reps, defaulting to 0
    #[must_use]
    pub fn reps_done(&self) -> u32 {
        self.completed_reps.unwrap_or(feedback_defaults::COMPLETED)
    }

    /// Target sets for ratio calculations, defaulting to 1
    #[must_use]
    pub fn sets_target(&self) -> u32 {
        self.target_sets.unwrap_or(feedback_defaults::TARGET)
    }

    /// Target reps for ratio calculations, defaulting to 1
    #[must_use]
    pub fn reps_target(&self) -> u32 {
        self.target_reps.unwrap_or(feedback_defaults::TARGET)
    }

    /// Prescribed sets the optimizer scales, defaulting to 3
    #[must_use]
    pub fn prescribed_sets(&self) -> u32 {
        self.target_sets
            .unwrap_or(feedback_defaults::OPTIMIZER_TARGET_SETS)
    }

    /// Prescribed reps the optimizer scales, defaulting to 10
    #[must_use]
    pub fn prescribed_reps(&self) -> u32 {
        self.target_reps
            .unwrap_or(feedback_defaults::OPTIMIZER_TARGET_REPS)
    }

    /// Whether the record belongs to the given patient and exercise
    #[must_use]
    pub fn belongs_to(&self, user_id: &str, exercise_id: &str) -> bool {
        self.user_id.as_deref() == Some(user_id) && self.exercise_id.as_deref() == Some(exercise_id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_resolve_defaults() {
        let event: FeedbackEvent = serde_json::from_str("{}").unwrap();
        assert_eq!(event.pain_before(), 5);
        assert_eq!(event.pain_after(), 5);
        assert_eq!(event.difficulty(), DifficultyRating::Perfect);
        assert_eq!(event.sets_target(), 1);
        assert_eq!(event.prescribed_sets(), 3);
        assert_eq!(event.prescribed_reps(), 10);
    }

    #[test]
    fn test_unrecognized_rating_is_unknown() {
        let event: FeedbackEvent =
            serde_json::from_str(r#"{"difficultyRating": "brutal"}"#).unwrap();
        assert_eq!(event.difficulty(), DifficultyRating::Unknown);
        assert!((event.difficulty().score() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pain_change_is_widened() {
        let event = FeedbackEvent {
            pain_level_before: Some(i32::MIN),
            pain_level_after: Some(i32::MAX),
            ..FeedbackEvent::default()
        };
        assert_eq!(event.pain_change(), i64::from(u32::MAX));
    }

    #[test]
    fn test_pain_severity_buckets() {
        assert_eq!(PainSeverity::from_level(0), PainSeverity::NoPain);
        assert_eq!(PainSeverity::from_level(-1), PainSeverity::Mild);
        assert_eq!(PainSeverity::from_level(3), PainSeverity::Mild);
        assert_eq!(PainSeverity::from_level(5), PainSeverity::Moderate);
        assert_eq!(PainSeverity::from_level(7), PainSeverity::Severe);
        assert_eq!(PainSeverity::from_level(8), PainSeverity::VerySevere);
    }
}
