// ABOUTME: Per-exercise insight summaries computed from a patient's feedback history
// ABOUTME: Attempts, completion, pain improvement, effectiveness, and difficulty distribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::feedback_analyzer::{completion_rate, FeedbackAnalyzer};
use crate::statistical_analysis::StatisticalAnalyzer;
use crate::trend_analysis::{TrendAnalyzer, TrendDirection};
use chrono::{DateTime, Utc};
use rehab_core::models::{DifficultyRating, FeedbackEvent, FeedbackSession};
use serde::Serialize;
use std::collections::BTreeMap;

/// Mean pain change at or below which an exercise is credited with pain relief
const PAIN_RELIEF_THRESHOLD: f64 = -1.0;
/// Mean completion at or above which completion is excellent
const EXCELLENT_COMPLETION: f64 = 0.9;

mod messages {
    pub const PAIN_RELIEF: &str = "Exercise is showing good pain reduction benefits";
    pub const EXCELLENT_COMPLETION: &str =
        "Completion rate is excellent - consider slight progression";
    pub const LOW_COMPLETION: &str = "Completion rate is low - consider reducing volume";
    pub const STABLE_DIFFICULTY: &str = "Maintain current difficulty level";
}

/// Summary of every recorded session of one exercise
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseInsights {
    /// Exercise the sessions belong to
    pub exercise_id: String,
    /// Number of recorded sessions
    pub total_attempts: usize,
    /// Mean analyzer completion rate
    pub average_completion: f64,
    /// Mean of (after - before); negative means improvement
    pub pain_improvement: f64,
    /// Mean analyzer effectiveness score
    pub effectiveness_score: f64,
    /// Direction of the numeric difficulty score
    pub difficulty_trend: TrendDirection,
    /// Session count per rating; `easy`, `perfect` and `hard` are always present
    pub difficulty_distribution: BTreeMap<&'static str, usize>,
    /// Post-session pain, oldest first
    pub pain_levels_over_time: Vec<i32>,
    /// Time of the most recent session, when recording times are known
    pub last_performed: Option<DateTime<Utc>>,
    /// Guidance derived from the summary
    pub recommendations: Vec<String>,
}

impl ExerciseInsights {
    /// Summarize recorded sessions (oldest first), filling in `last_performed`
    #[must_use]
    pub fn from_sessions(
        exercise_id: &str,
        sessions: &[FeedbackSession],
        analyzer: &FeedbackAnalyzer,
    ) -> Option<Self> {
        let history: Vec<FeedbackEvent> = sessions.iter().map(|s| s.feedback.clone()).collect();
        let mut insights = Self::from_history(exercise_id, &history, analyzer)?;
        insights.last_performed = sessions.iter().map(|s| s.recorded_at).max();
        Some(insights)
    }

    /// Summarize `history` (oldest first), `None` when there is nothing to summarize
    #[must_use]
    pub fn from_history(
        exercise_id: &str,
        history: &[FeedbackEvent],
        analyzer: &FeedbackAnalyzer,
    ) -> Option<Self> {
        if history.is_empty() {
            return None;
        }

        let completions: Vec<f64> = history.iter().map(completion_rate).collect();
        let pain_changes: Vec<f64> = history
            .iter()
            .map(|f| f.pain_change() as f64)
            .collect();
        let scores: Vec<f64> = history
            .iter()
            .map(|f| analyzer.analyze(f).effectiveness_score)
            .collect();
        let difficulty_scores: Vec<f64> = history.iter().map(|f| f.difficulty().score()).collect();

        let mut difficulty_distribution = BTreeMap::new();
        for rating in [
            DifficultyRating::Easy,
            DifficultyRating::Perfect,
            DifficultyRating::Hard,
        ] {
            difficulty_distribution.insert(rating.as_str(), 0);
        }
        for event in history {
            *difficulty_distribution
                .entry(event.difficulty().as_str())
                .or_insert(0) += 1;
        }

        let trends = TrendAnalyzer::new(analyzer.config().trend.clone());
        let difficulty_trend = trends.classify(&difficulty_scores);

        let average_completion = StatisticalAnalyzer::mean(&completions).unwrap_or_default();
        let pain_improvement = StatisticalAnalyzer::mean(&pain_changes).unwrap_or_default();

        let mut recommendations = Vec::new();
        if pain_improvement <= PAIN_RELIEF_THRESHOLD {
            recommendations.push(messages::PAIN_RELIEF.to_owned());
        }
        if average_completion >= EXCELLENT_COMPLETION {
            recommendations.push(messages::EXCELLENT_COMPLETION.to_owned());
        } else if average_completion < analyzer.config().completion.adequate {
            recommendations.push(messages::LOW_COMPLETION.to_owned());
        }
        if difficulty_trend == TrendDirection::Stable {
            recommendations.push(messages::STABLE_DIFFICULTY.to_owned());
        }

        Some(Self {
            exercise_id: exercise_id.to_owned(),
            total_attempts: history.len(),
            average_completion,
            pain_improvement,
            effectiveness_score: StatisticalAnalyzer::mean(&scores).unwrap_or_default(),
            difficulty_trend,
            difficulty_distribution,
            pain_levels_over_time: history.iter().map(FeedbackEvent::pain_after).collect(),
            last_performed: None,
            recommendations,
        })
    }
}
