// ABOUTME: Integration tests for single-session feedback analysis
// ABOUTME: Covers pain, difficulty, and completion stages, merge order, scoring, and fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, completed_session, session};
use rehab_adapt::config::AdaptationConfig;
use rehab_adapt::intelligence::feedback_analyzer::messages;
use rehab_adapt::intelligence::{completion_rate, AdjustmentKey, FeedbackAnalyzer};
use rehab_adapt::models::{DifficultyLevel, DifficultyRating, FeedbackEvent, PainSeverity};
use serde_json::json;

#[test]
fn test_high_pain_after_always_reduces_intensity() {
    let analyzer = FeedbackAnalyzer::default();

    for pain_before in 0..=10 {
        for pain_after in 7..=10 {
            let result = analyzer.analyze(&completed_session(
                pain_before,
                pain_after,
                DifficultyRating::Perfect,
            ));
            assert_eq!(
                result
                    .adjustments
                    .multiplier(AdjustmentKey::IntensityMultiplier),
                Some(0.7),
                "before={pain_before} after={pain_after}"
            );
            assert_eq!(
                result
                    .adjustments
                    .multiplier(AdjustmentKey::RestTimeMultiplier),
                Some(1.5)
            );
            assert_eq!(result.recommendations[0], messages::HIGH_PAIN);
        }
    }
}

#[test]
fn test_effectiveness_score_is_clamped() {
    let rates = [0.0, 0.3, 0.5, 0.69, 0.7, 0.9, 1.0, 3.5];
    let ratings = [
        DifficultyRating::Easy,
        DifficultyRating::Perfect,
        DifficultyRating::Hard,
        DifficultyRating::Unknown,
    ];

    for change in -10..=10 {
        for rate in rates {
            for rating in ratings {
                let score = FeedbackAnalyzer::effectiveness_score(change, rate, rating);
                assert!(
                    (0.0..=1.0).contains(&score),
                    "change={change} rate={rate} rating={rating} score={score}"
                );
            }
        }
    }

    // 0.5 + 0.4 + 0.3 + 0.3 saturates
    assert_close(
        FeedbackAnalyzer::effectiveness_score(-3, 1.0, DifficultyRating::Perfect),
        1.0,
    );
    // 0.5 - 0.3 - 0.2 + 0.1
    assert_close(
        FeedbackAnalyzer::effectiveness_score(5, 0.1, DifficultyRating::Easy),
        0.1,
    );
}

#[test]
fn test_completion_rate_bounds() {
    let none_done = FeedbackEvent {
        completed_sets: Some(0),
        target_sets: Some(5),
        completed_reps: Some(0),
        target_reps: Some(5),
        ..FeedbackEvent::default()
    };
    let all_done = FeedbackEvent {
        completed_sets: Some(5),
        target_sets: Some(5),
        completed_reps: Some(5),
        target_reps: Some(5),
        ..FeedbackEvent::default()
    };

    assert_close(completion_rate(&none_done), 0.0);
    assert_close(completion_rate(&all_done), 1.0);

    let result = FeedbackAnalyzer::default().analyze(&all_done);
    assert!(result
        .recommendations
        .contains(&messages::EXCELLENT_COMPLETION.to_owned()));
    assert_eq!(
        result.adjustments.multiplier(AdjustmentKey::SetsMultiplier),
        Some(1.1)
    );
}

#[test]
fn test_zero_targets_do_not_divide_by_zero() {
    let event = FeedbackEvent {
        completed_sets: Some(2),
        target_sets: Some(0),
        completed_reps: Some(4),
        target_reps: Some(0),
        ..FeedbackEvent::default()
    };

    // Targets floor at 1
    assert_close(completion_rate(&event), 3.0);
}

#[test]
fn test_hard_session_with_high_pain_merges_in_stage_order() {
    let payload = json!({
        "painLevelBefore": 8,
        "painLevelAfter": 9,
        "difficultyRating": "hard",
        "completedSets": 1,
        "targetSets": 3,
        "completedReps": 3,
        "targetReps": 10
    });

    let result = FeedbackAnalyzer::default().analyze_feedback(&payload);

    assert!(!result.is_fallback());
    let completion = result.completion_analysis.unwrap();
    assert_close(completion.completion_rate, (1.0 / 3.0 + 0.3) / 2.0);
    assert!(!completion.is_adequate);

    assert_eq!(
        result.recommendations,
        vec![
            messages::HIGH_PAIN.to_owned(),
            messages::TOO_CHALLENGING.to_owned(),
            messages::LOW_COMPLETION.to_owned(),
        ]
    );

    // Completion overwrote the difficulty stage's sets/reps in place
    let keys: Vec<_> = result.adjustments.keys().collect();
    assert_eq!(
        keys,
        vec![
            AdjustmentKey::IntensityMultiplier,
            AdjustmentKey::RestTimeMultiplier,
            AdjustmentKey::SetsMultiplier,
            AdjustmentKey::RepsMultiplier,
            AdjustmentKey::DifficultyLevel,
        ]
    );
    assert_eq!(
        serde_json::to_value(&result.adjustments).unwrap(),
        json!({
            "intensity_multiplier": 0.7,
            "rest_time_multiplier": 1.5,
            "sets_multiplier": 0.7,
            "reps_multiplier": 0.8,
            "difficulty_level": "beginner"
        })
    );

    let pain = result.pain_analysis.unwrap();
    assert_eq!(pain.pain_change, 1);
    assert!(!pain.is_beneficial);
    assert_eq!(pain.severity, PainSeverity::VerySevere);

    // 0.5 - 0.1 - 0.2 + 0.15
    assert_close(result.effectiveness_score, 0.35);
}

#[test]
fn test_extreme_pain_scores_do_not_overflow() {
    let analyzer = FeedbackAnalyzer::default();

    let worse = analyzer.analyze_feedback(&json!({
        "painLevelBefore": -5,
        "painLevelAfter": i32::MAX,
    }));
    assert!(!worse.is_fallback());
    assert_eq!(worse.recommendations[0], messages::HIGH_PAIN);
    let pain = worse.pain_analysis.unwrap();
    assert_eq!(pain.pain_change, i64::from(i32::MAX) + 5);
    assert!(!pain.is_beneficial);
    assert_eq!(pain.severity, PainSeverity::VerySevere);
    // 0.5 - 0.3 - 0.2 + 0.3
    assert_close(worse.effectiveness_score, 0.3);

    let better = analyzer.analyze_feedback(&json!({
        "painLevelBefore": i32::MAX,
        "painLevelAfter": i32::MIN,
    }));
    assert_eq!(
        better.recommendations[..2],
        [
            messages::PAIN_DECREASED.to_owned(),
            messages::EXCELLENT_PROGRESS.to_owned()
        ]
    );
    let pain = better.pain_analysis.unwrap();
    assert_eq!(pain.pain_change, i64::from(i32::MIN) - i64::from(i32::MAX));
    assert!(pain.is_beneficial);
    assert_eq!(pain.severity, PainSeverity::Mild);
    // 0.5 + 0.4 - 0.2 + 0.3
    assert_close(better.effectiveness_score, 1.0);
}

#[test]
fn test_large_pain_drop_from_high_baseline() {
    let result =
        FeedbackAnalyzer::default().analyze(&completed_session(8, 5, DifficultyRating::Perfect));

    assert_eq!(
        result.recommendations[..2],
        [
            messages::PAIN_DECREASED.to_owned(),
            messages::EXCELLENT_PROGRESS.to_owned()
        ]
    );
    assert_eq!(
        result
            .adjustments
            .multiplier(AdjustmentKey::IntensityMultiplier),
        Some(1.1)
    );
    assert!(result.pain_analysis.unwrap().is_beneficial);
}

#[test]
fn test_pain_branches() {
    let analyzer = FeedbackAnalyzer::default();

    // Rise above the significant change
    let risen = analyzer.analyze(&completed_session(2, 6, DifficultyRating::Perfect));
    assert_eq!(risen.recommendations[0], messages::PAIN_INCREASED);
    assert_eq!(
        risen
            .adjustments
            .multiplier(AdjustmentKey::IntensityMultiplier),
        Some(0.8)
    );

    // Small rise emits nothing from the pain stage
    let small_rise = analyzer.analyze(&completed_session(3, 4, DifficultyRating::Perfect));
    assert_eq!(small_rise.recommendations[0], messages::PERFECT_DIFFICULTY);
    assert!(small_rise
        .adjustments
        .multiplier(AdjustmentKey::IntensityMultiplier)
        .is_none());

    // Unchanged pain
    let steady = analyzer.analyze(&completed_session(4, 4, DifficultyRating::Perfect));
    assert_eq!(steady.recommendations[0], messages::PAIN_MAINTAINED);
}

#[test]
fn test_difficulty_branches() {
    let analyzer = FeedbackAnalyzer::default();

    // Easy with 0.8 completion: no completion-stage override
    let easy = analyzer.analyze(&session(3, 3, DifficultyRating::Easy, 3, 3, 6, 10));
    assert!(easy.recommendations.contains(&messages::TOO_EASY.to_owned()));
    assert_eq!(
        easy.adjustments.multiplier(AdjustmentKey::SetsMultiplier),
        Some(1.2)
    );
    assert_eq!(
        easy.adjustments.multiplier(AdjustmentKey::RepsMultiplier),
        Some(1.1)
    );
    assert_eq!(
        easy.adjustments.difficulty_level(),
        Some(DifficultyLevel::Intermediate)
    );

    // Hard but fully completed
    let manageable = analyzer.analyze(&completed_session(3, 3, DifficultyRating::Hard));
    assert!(manageable
        .recommendations
        .contains(&messages::CHALLENGING_MANAGEABLE.to_owned()));
    assert!(manageable.adjustments.difficulty_level().is_none());
    assert!(!manageable.difficulty_analysis.unwrap().is_appropriate);
}

#[test]
fn test_unrecognized_rating_is_silent() {
    let payload = json!({
        "painLevelBefore": 3,
        "painLevelAfter": 3,
        "difficultyRating": "brutal",
        "completedSets": 3,
        "targetSets": 3,
        "completedReps": 8,
        "targetReps": 10
    });

    let result = FeedbackAnalyzer::default().analyze_feedback(&payload);

    // Pain maintained only; 0.9 completion is between adequate and excellent
    assert_eq!(result.recommendations, vec![messages::PAIN_MAINTAINED.to_owned()]);
    assert!(result.adjustments.is_empty());
    let difficulty = result.difficulty_analysis.unwrap();
    assert_eq!(difficulty.rating, DifficultyRating::Unknown);
    // 0.5 + 0.2 + 0.3 + 0.15
    assert_close(result.effectiveness_score, 1.0);
}

#[test]
fn test_empty_payload_uses_defaults() {
    let result = FeedbackAnalyzer::default().analyze_feedback(&json!({}));

    assert_eq!(
        result.recommendations,
        vec![
            messages::PAIN_MAINTAINED.to_owned(),
            messages::PERFECT_DIFFICULTY.to_owned(),
            messages::LOW_COMPLETION.to_owned(),
        ]
    );
    assert_eq!(result.pain_analysis.unwrap().severity, PainSeverity::Moderate);
    assert_close(result.completion_analysis.unwrap().completion_rate, 0.0);
    // 0.5 + 0.2 - 0.2 + 0.3
    assert_close(result.effectiveness_score, 0.8);
}

#[test]
fn test_malformed_payload_yields_fallback() {
    let analyzer = FeedbackAnalyzer::default();

    for payload in [
        json!({"painLevelBefore": "high"}),
        json!({"completedSets": -1}),
        json!("feedback"),
    ] {
        let result = analyzer.analyze_feedback(&payload);

        assert!(result.is_fallback());
        assert_eq!(
            result.recommendations,
            vec![messages::ANALYSIS_UNAVAILABLE.to_owned()]
        );
        assert!(result.adjustments.is_empty());
        assert_close(result.effectiveness_score, 0.5);

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("error").is_some());
        assert!(json.get("pain_analysis").is_none());
        assert!(json.get("completion_analysis").is_none());
        assert!(json.get("difficulty_analysis").is_none());
    }
}

#[test]
fn test_severity_buckets() {
    assert_eq!(PainSeverity::from_level(0), PainSeverity::NoPain);
    assert_eq!(PainSeverity::from_level(-2), PainSeverity::Mild);
    assert_eq!(PainSeverity::from_level(3), PainSeverity::Mild);
    assert_eq!(PainSeverity::from_level(5), PainSeverity::Moderate);
    assert_eq!(PainSeverity::from_level(7), PainSeverity::Severe);
    assert_eq!(PainSeverity::from_level(11), PainSeverity::VerySevere);
}

#[test]
fn test_custom_thresholds_change_branching() {
    let mut config = AdaptationConfig::default();
    config.pain.high_level = 9;
    let analyzer = FeedbackAnalyzer::new(config);

    let result = analyzer.analyze(&completed_session(7, 8, DifficultyRating::Perfect));

    assert!(result
        .adjustments
        .multiplier(AdjustmentKey::RestTimeMultiplier)
        .is_none());
    assert_ne!(result.recommendations[0], messages::HIGH_PAIN);
}

#[test]
fn test_result_serializes_with_wire_names() {
    let result =
        FeedbackAnalyzer::default().analyze(&completed_session(4, 3, DifficultyRating::Perfect));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["pain_analysis"]["severity"], "mild");
    assert_eq!(json["pain_analysis"]["is_beneficial"], true);
    assert_eq!(json["completion_analysis"]["is_adequate"], true);
    assert_eq!(json["difficulty_analysis"]["rating"], "perfect");
    assert_eq!(json["difficulty_analysis"]["is_appropriate"], true);
    assert!(json.get("error").is_none());
}
