// ABOUTME: Integration tests for multi-session trend labelling
// ABOUTME: Covers the minimum-history sentinel, slope classification, and completion forms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, completed_session, improving_history, session};
use rehab_adapt::config::TrendConfig;
use rehab_adapt::intelligence::{
    completion_rate, simple_completion_rate, FeedbackTrends, StatisticalAnalyzer, TrendAnalyzer,
    TrendDirection,
};
use rehab_adapt::models::{DifficultyRating, FeedbackEvent};
use serde_json::json;

#[test]
fn test_two_sessions_are_insufficient() {
    let analyzer = TrendAnalyzer::default();
    let history = vec![
        completed_session(6, 5, DifficultyRating::Perfect),
        completed_session(5, 4, DifficultyRating::Perfect),
    ];

    let trends = analyzer.compute_trends(&history);

    assert!(trends.is_insufficient());
    assert!(trends.summary().is_none());
    assert_eq!(
        serde_json::to_value(&trends).unwrap(),
        json!({"insufficient_data": true})
    );
    assert!(analyzer.compute_trends(&[]).is_insufficient());
}

#[test]
fn test_strictly_increasing_pain() {
    let history = vec![
        completed_session(3, 3, DifficultyRating::Perfect),
        completed_session(3, 5, DifficultyRating::Perfect),
        completed_session(3, 8, DifficultyRating::Perfect),
    ];

    let trends = TrendAnalyzer::default().compute_trends(&history);
    let summary = trends.summary().unwrap();

    assert_eq!(summary.pain_trend, TrendDirection::Increasing);
    assert_eq!(summary.completion_trend, TrendDirection::Stable);
    assert_eq!(summary.difficulty_trend, TrendDirection::Stable);
    assert_close(summary.average_pain, 16.0 / 3.0);
    assert_eq!(summary.sessions_count, 3);
}

#[test]
fn test_improving_history_labels() {
    let trends = TrendAnalyzer::default().compute_trends(&improving_history());
    let summary = trends.summary().unwrap();

    assert_eq!(summary.pain_trend, TrendDirection::Decreasing);
    assert_eq!(summary.completion_trend, TrendDirection::Increasing);
    assert_eq!(summary.difficulty_trend, TrendDirection::Decreasing);
    assert_close(summary.average_pain, 5.0);
    assert_close(summary.average_completion, (16.0 / 30.0 + 0.9 + 1.0) / 3.0);

    let json = serde_json::to_value(&trends).unwrap();
    assert_eq!(json["pain_trend"], "decreasing");
    assert_eq!(json["completion_trend"], "increasing");
    assert_eq!(json["sessions_count"], 3);
}

#[test]
fn test_history_is_not_reordered() {
    let mut history = improving_history();
    history.reverse();

    let trends = TrendAnalyzer::default().compute_trends(&history);

    assert_eq!(
        trends.summary().unwrap().pain_trend,
        TrendDirection::Increasing
    );
}

#[test]
fn test_slope_thresholds() {
    let analyzer = TrendAnalyzer::default();

    assert_eq!(analyzer.classify(&[1.0, 1.05, 1.1]), TrendDirection::Stable);
    assert_eq!(analyzer.classify(&[1.0, 1.2, 1.4]), TrendDirection::Increasing);
    assert_eq!(analyzer.classify(&[4.0, 4.0, 3.0]), TrendDirection::Decreasing);
    assert_eq!(analyzer.classify(&[1.0, 2.0]), TrendDirection::InsufficientData);

    let slope = StatisticalAnalyzer::index_slope(&[2.0, 4.0, 6.0, 8.0]).unwrap();
    assert_close(slope, 2.0);
}

#[test]
fn test_unrecognized_rating_scores_as_perfect() {
    let history = vec![
        completed_session(4, 4, DifficultyRating::Perfect),
        completed_session(4, 4, DifficultyRating::Unknown),
        completed_session(4, 4, DifficultyRating::Perfect),
    ];

    let trends = TrendAnalyzer::default().compute_trends(&history);

    assert_eq!(
        trends.summary().unwrap().difficulty_trend,
        TrendDirection::Stable
    );
}

#[test]
fn test_completion_forms_diverge() {
    let event = session(3, 3, DifficultyRating::Perfect, 3, 3, 5, 10);

    // Ratio of products for trends, average of ratios for session analysis
    assert_close(simple_completion_rate(&event), 0.5);
    assert_close(completion_rate(&event), 0.75);

    // Missing targets floor the product at 1
    let bare = FeedbackEvent {
        completed_sets: Some(2),
        completed_reps: Some(3),
        ..FeedbackEvent::default()
    };
    assert_close(simple_completion_rate(&bare), 6.0);
}

#[test]
fn test_configured_minimum_sessions() {
    let analyzer = TrendAnalyzer::new(TrendConfig {
        min_sessions: 5,
        ..TrendConfig::default()
    });

    assert_eq!(
        analyzer.compute_trends(&improving_history()),
        FeedbackTrends::InsufficientData
    );
}
