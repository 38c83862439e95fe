// ABOUTME: Patient-wide analytics over every session recorded in a reporting window
// ABOUTME: Summary, pain, difficulty, and completion breakdowns with progression guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::feedback_analyzer::{completion_rate, FeedbackAnalyzer};
use crate::progress::ProgressTrend;
use crate::statistical_analysis::StatisticalAnalyzer;
use crate::trend_analysis::{TrendAnalyzer, TrendDirection};
use rehab_core::models::{DifficultyRating, FeedbackSession};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Mean pain reduction at or above which progress counts as excellent
const EXCELLENT_PAIN_REDUCTION: f64 = 1.0;
/// Adherence at or above which progression is considered
const PROGRESSION_ADHERENCE: f64 = 0.9;
/// Consistency at or above which the current frequency should be kept
const CONSISTENT_SCORE: f64 = 0.8;
/// Share of easy sessions (percent) at or above which harder work is suggested
const MOSTLY_EASY_PERCENT: f64 = 50.0;
/// Number of exercises listed as best for pain
const BEST_EXERCISE_LIMIT: usize = 3;

/// Recommendation messages for patient analytics
pub mod messages {
    /// Pain reduction is large and not declining
    pub const EXCELLENT_PROGRESS: &str = "Excellent progress with consistent pain reduction";
    /// Every progression condition holds
    pub const READY_FOR_PROGRESSION: &str = "Ready for progression to more challenging exercises";
    /// Completion is consistent across sessions
    pub const MAINTAIN_FREQUENCY: &str = "Maintain current exercise frequency";
    /// Most sessions were rated easy
    pub const ADD_STRENGTH: &str = "Consider adding strength-focused exercises";
}

/// Direction the patient's difficulty ratings are moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyShift {
    /// Ratings drifting toward `easy`
    BecomingEasier,
    /// Ratings drifting toward `hard`
    BecomingHarder,
    /// No meaningful drift
    Stable,
    /// Too few sessions to tell
    InsufficientData,
}

impl From<TrendDirection> for DifficultyShift {
    fn from(direction: TrendDirection) -> Self {
        match direction {
            TrendDirection::Increasing => Self::BecomingHarder,
            TrendDirection::Decreasing => Self::BecomingEasier,
            TrendDirection::Stable => Self::Stable,
            TrendDirection::InsufficientData => Self::InsufficientData,
        }
    }
}

/// Headline numbers for the window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    /// Sessions recorded in the window
    pub total_sessions: usize,
    /// Distinct exercises performed
    pub exercises_tracked: usize,
    /// Mean of (before - after); positive means pain went down
    pub average_pain_reduction: f64,
    /// Mean analyzer completion rate
    pub overall_adherence: f64,
    /// Mean analyzer effectiveness score
    pub effectiveness_score: f64,
}

/// Pain breakdown for the window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PainAnalytics {
    /// Mean pain reported before sessions
    pub average_pre_pain: f64,
    /// Mean pain reported after sessions
    pub average_post_pain: f64,
    /// Whether per-session pain reduction is growing
    pub pain_reduction_trend: ProgressTrend,
    /// Exercises with the largest mean pain reduction, best first
    pub best_exercises_for_pain: Vec<String>,
}

/// Difficulty breakdown for the window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifficultyAnalytics {
    /// Percentage of sessions per rating; `easy`, `perfect` and `hard` are always present
    pub distribution: BTreeMap<&'static str, f64>,
    /// Drift of the numeric difficulty score
    pub trend: DifficultyShift,
    /// Whether the patient can move to harder exercises
    ///
    /// Needs adherence of at least 0.9 and post-session pain below the high-pain
    /// level. A declining pain reduction trend or rising difficulty blocks it.
    pub progression_ready: bool,
}

/// Completion breakdown for the window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionAnalytics {
    /// Mean analyzer completion rate
    pub average_completion: f64,
    /// Direction of the completion series
    pub trend: ProgressTrend,
    /// One minus the spread of completion rates, clamped to `[0.0, 1.0]`
    pub consistency_score: f64,
}

/// Analytics for one patient across every exercise
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserAnalytics {
    /// Headline numbers
    pub summary: AnalyticsSummary,
    /// Pain breakdown
    pub pain_analytics: PainAnalytics,
    /// Difficulty breakdown
    pub difficulty_analytics: DifficultyAnalytics,
    /// Completion breakdown
    pub completion_analytics: CompletionAnalytics,
    /// Guidance derived from the breakdowns
    pub recommendations: Vec<String>,
}

impl UserAnalytics {
    /// Build analytics from chronological sessions, `None` when there are none
    #[must_use]
    pub fn from_sessions(sessions: &[FeedbackSession], analyzer: &FeedbackAnalyzer) -> Option<Self> {
        if sessions.is_empty() {
            return None;
        }

        let config = analyzer.config();
        let trends = TrendAnalyzer::new(config.trend.clone());

        let pre_pain: Vec<f64> = sessions
            .iter()
            .map(|s| f64::from(s.feedback.pain_before()))
            .collect();
        let post_pain: Vec<f64> = sessions
            .iter()
            .map(|s| f64::from(s.feedback.pain_after()))
            .collect();
        let reductions: Vec<f64> = sessions
            .iter()
            .map(|s| -(s.feedback.pain_change() as f64))
            .collect();
        let completions: Vec<f64> = sessions
            .iter()
            .map(|s| completion_rate(&s.feedback))
            .collect();
        let scores: Vec<f64> = sessions
            .iter()
            .map(|s| analyzer.analyze(&s.feedback).effectiveness_score)
            .collect();
        let difficulty_scores: Vec<f64> = sessions
            .iter()
            .map(|s| s.feedback.difficulty().score())
            .collect();

        let exercises_tracked = sessions
            .iter()
            .filter_map(|s| s.feedback.exercise_id.as_deref())
            .collect::<BTreeSet<_>>()
            .len();

        let summary = AnalyticsSummary {
            total_sessions: sessions.len(),
            exercises_tracked,
            average_pain_reduction: StatisticalAnalyzer::mean(&reductions).unwrap_or_default(),
            overall_adherence: StatisticalAnalyzer::mean(&completions).unwrap_or_default(),
            effectiveness_score: StatisticalAnalyzer::mean(&scores).unwrap_or_default(),
        };

        let pain_analytics = PainAnalytics {
            average_pre_pain: StatisticalAnalyzer::mean(&pre_pain).unwrap_or_default(),
            average_post_pain: StatisticalAnalyzer::mean(&post_pain).unwrap_or_default(),
            pain_reduction_trend: ProgressTrend::higher_is_better(trends.classify(&reductions)),
            best_exercises_for_pain: best_exercises_for_pain(sessions),
        };

        let completion_analytics = CompletionAnalytics {
            average_completion: summary.overall_adherence,
            trend: ProgressTrend::higher_is_better(trends.classify(&completions)),
            consistency_score: StatisticalAnalyzer::std_dev(&completions)
                .map_or(0.0, |spread| (1.0 - spread).clamp(0.0, 1.0)),
        };

        let difficulty_trend = DifficultyShift::from(trends.classify(&difficulty_scores));
        let difficulty_analytics = DifficultyAnalytics {
            distribution: difficulty_distribution(sessions),
            trend: difficulty_trend,
            progression_ready: summary.overall_adherence >= PROGRESSION_ADHERENCE
                && pain_analytics.average_post_pain < f64::from(config.pain.high_level)
                && pain_analytics.pain_reduction_trend != ProgressTrend::Declining
                && difficulty_trend != DifficultyShift::BecomingHarder,
        };

        let mut recommendations = Vec::new();
        if summary.average_pain_reduction >= EXCELLENT_PAIN_REDUCTION
            && pain_analytics.pain_reduction_trend != ProgressTrend::Declining
        {
            recommendations.push(messages::EXCELLENT_PROGRESS.to_owned());
        }
        if difficulty_analytics.progression_ready {
            recommendations.push(messages::READY_FOR_PROGRESSION.to_owned());
        }
        if completion_analytics.consistency_score >= CONSISTENT_SCORE {
            recommendations.push(messages::MAINTAIN_FREQUENCY.to_owned());
        }
        let easy_share = difficulty_analytics
            .distribution
            .get(DifficultyRating::Easy.as_str())
            .copied()
            .unwrap_or_default();
        if easy_share >= MOSTLY_EASY_PERCENT {
            recommendations.push(messages::ADD_STRENGTH.to_owned());
        }

        Some(Self {
            summary,
            pain_analytics,
            difficulty_analytics,
            completion_analytics,
            recommendations,
        })
    }
}

/// Exercises with a positive mean pain reduction, largest first
///
/// Sessions are grouped by display name, falling back to the exercise id.
fn best_exercises_for_pain(sessions: &[FeedbackSession]) -> Vec<String> {
    let mut by_exercise: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for session in sessions {
        let feedback = &session.feedback;
        let Some(label) = feedback
            .exercise_name
            .as_deref()
            .or(feedback.exercise_id.as_deref())
        else {
            continue;
        };
        by_exercise
            .entry(label)
            .or_default()
            .push(-(feedback.pain_change() as f64));
    }

    let mut ranked: Vec<(&str, f64)> = by_exercise
        .into_iter()
        .filter_map(|(label, reductions)| {
            StatisticalAnalyzer::mean(&reductions)
                .filter(|mean| *mean > 0.0)
                .map(|mean| (label, mean))
        })
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .into_iter()
        .take(BEST_EXERCISE_LIMIT)
        .map(|(label, _)| label.to_owned())
        .collect()
}

/// Percentage of sessions per difficulty rating
fn difficulty_distribution(sessions: &[FeedbackSession]) -> BTreeMap<&'static str, f64> {
    let mut counts: BTreeMap<&'static str, usize> = [
        DifficultyRating::Easy,
        DifficultyRating::Perfect,
        DifficultyRating::Hard,
    ]
    .into_iter()
    .map(|rating| (rating.as_str(), 0))
    .collect();
    for session in sessions {
        *counts
            .entry(session.feedback.difficulty().as_str())
            .or_insert(0) += 1;
    }

    let total = sessions.len().max(1) as f64;
    counts
        .into_iter()
        .map(|(rating, count)| (rating, count as f64 * 100.0 / total))
        .collect()
}
