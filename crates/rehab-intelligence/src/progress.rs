// ABOUTME: Per-patient feedback trends across every exercise recorded in a time window
// ABOUTME: Dated pain, completion, and difficulty series with an overall progress label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::feedback_analyzer::{completion_rate, FeedbackAnalyzer};
use crate::trend_analysis::{TrendAnalyzer, TrendDirection};
use chrono::NaiveDate;
use rehab_core::models::{DifficultyRating, FeedbackSession};
use serde::Serialize;

/// Recommendation messages for patient-level trends
pub mod messages {
    /// Post-session pain trending down
    pub const PAIN_DECREASING: &str = "Pain levels are decreasing consistently - excellent progress!";
    /// Completion trending up
    pub const COMPLETION_IMPROVING: &str = "Completion rates are improving steadily";
    /// Latest session rated easy
    pub const RECENTLY_TOO_EASY: &str = "Recent exercises seem too easy - consider progression";
}

/// Whether a metric is moving in the patient's favour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressTrend {
    /// Moving in the favourable direction
    Improving,
    /// Moving in the unfavourable direction
    Declining,
    /// No meaningful movement
    Stable,
    /// Too few sessions to tell
    InsufficientData,
}

impl ProgressTrend {
    /// Interpret a direction for a metric where higher values are better
    #[must_use]
    pub const fn higher_is_better(direction: TrendDirection) -> Self {
        match direction {
            TrendDirection::Increasing => Self::Improving,
            TrendDirection::Decreasing => Self::Declining,
            TrendDirection::Stable => Self::Stable,
            TrendDirection::InsufficientData => Self::InsufficientData,
        }
    }

    /// Interpret a direction for a metric where lower values are better
    #[must_use]
    pub const fn lower_is_better(direction: TrendDirection) -> Self {
        match direction {
            TrendDirection::Increasing => Self::Declining,
            TrendDirection::Decreasing => Self::Improving,
            TrendDirection::Stable => Self::Stable,
            TrendDirection::InsufficientData => Self::InsufficientData,
        }
    }

    /// Combine two labels: one improving and one declining cancel out
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::InsufficientData, _) | (_, Self::InsufficientData) => Self::InsufficientData,
            (Self::Improving, Self::Declining) | (Self::Declining, Self::Improving) => {
                Self::Stable
            }
            (Self::Improving, _) | (_, Self::Improving) => Self::Improving,
            (Self::Declining, _) | (_, Self::Declining) => Self::Declining,
            (Self::Stable, Self::Stable) => Self::Stable,
        }
    }
}

/// Session series for one patient, oldest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackProgress {
    /// Post-session pain per session
    pub pain_levels: Vec<i32>,
    /// Analyzer completion rate per session
    pub completion_rates: Vec<f64>,
    /// Reported difficulty per session
    pub difficulty_ratings: Vec<DifficultyRating>,
    /// Recording date per session
    pub dates: Vec<NaiveDate>,
    /// Pain and completion movement combined
    pub overall_trend: ProgressTrend,
    /// Guidance derived from the series
    pub recommendations: Vec<String>,
}

impl FeedbackProgress {
    /// Build the series from chronological sessions, `None` when there are none
    #[must_use]
    pub fn from_sessions(sessions: &[FeedbackSession], analyzer: &FeedbackAnalyzer) -> Option<Self> {
        let latest = sessions.last()?;

        let pain_levels: Vec<i32> = sessions.iter().map(|s| s.feedback.pain_after()).collect();
        let completion_rates: Vec<f64> = sessions
            .iter()
            .map(|s| completion_rate(&s.feedback))
            .collect();

        let trends = TrendAnalyzer::new(analyzer.config().trend.clone());
        let pain_values: Vec<f64> = pain_levels.iter().map(|&p| f64::from(p)).collect();
        let pain_direction = trends.classify(&pain_values);
        let completion_direction = trends.classify(&completion_rates);

        let overall_trend = ProgressTrend::lower_is_better(pain_direction)
            .combine(ProgressTrend::higher_is_better(completion_direction));

        let mut recommendations = Vec::new();
        if pain_direction == TrendDirection::Decreasing {
            recommendations.push(messages::PAIN_DECREASING.to_owned());
        }
        if completion_direction == TrendDirection::Increasing {
            recommendations.push(messages::COMPLETION_IMPROVING.to_owned());
        }
        if latest.feedback.difficulty() == DifficultyRating::Easy {
            recommendations.push(messages::RECENTLY_TOO_EASY.to_owned());
        }

        Some(Self {
            pain_levels,
            completion_rates,
            difficulty_ratings: sessions.iter().map(|s| s.feedback.difficulty()).collect(),
            dates: sessions.iter().map(|s| s.recorded_at.date_naive()).collect(),
            overall_trend,
            recommendations,
        })
    }
}
