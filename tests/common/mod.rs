// ABOUTME: Shared test utilities for rehab_adapt integration tests
// ABOUTME: Feedback builders, history fixtures, and quiet logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_arguments
)]
//! Shared test utilities
//!
//! Not every test binary uses every helper.

use rehab_adapt::models::{DifficultyRating, FeedbackEvent};
use serde_json::{json, Value};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Patient used by fixtures
pub const USER_ID: &str = "patient-001";
/// Exercise used by fixtures
pub const EXERCISE_ID: &str = "knee-extension";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Fully specified feedback event for the fixture patient and exercise
pub fn session(
    pain_before: i32,
    pain_after: i32,
    rating: DifficultyRating,
    completed_sets: u32,
    target_sets: u32,
    completed_reps: u32,
    target_reps: u32,
) -> FeedbackEvent {
    FeedbackEvent {
        pain_level_before: Some(pain_before),
        pain_level_after: Some(pain_after),
        difficulty_rating: Some(rating),
        completed_sets: Some(completed_sets),
        target_sets: Some(target_sets),
        completed_reps: Some(completed_reps),
        target_reps: Some(target_reps),
        exercise_name: Some("Knee Extension".to_owned()),
        exercise_id: Some(EXERCISE_ID.to_owned()),
        user_id: Some(USER_ID.to_owned()),
    }
}

/// Feedback event with a full session completed against a 3x10 target
pub fn completed_session(pain_before: i32, pain_after: i32, rating: DifficultyRating) -> FeedbackEvent {
    session(pain_before, pain_after, rating, 3, 3, 10, 10)
}

/// Three sessions with falling pain, rising completion, and easing difficulty
///
/// Pain after `[6, 5, 4]`, completion `2x8`, `3x9`, `3x10` against `3x10`,
/// difficulty `hard`, `perfect`, `easy`.
pub fn improving_history() -> Vec<FeedbackEvent> {
    vec![
        session(7, 6, DifficultyRating::Hard, 2, 3, 8, 10),
        session(6, 5, DifficultyRating::Perfect, 3, 3, 9, 10),
        session(5, 4, DifficultyRating::Easy, 3, 3, 10, 10),
    ]
}

/// Wire form of [`improving_history`]
pub fn improving_history_json() -> Vec<Value> {
    improving_history()
        .iter()
        .map(|event| serde_json::to_value(event).unwrap())
        .collect()
}

/// Wire payload with every field set
pub fn feedback_payload(pain_before: i32, pain_after: i32, rating: &str) -> Value {
    json!({
        "painLevelBefore": pain_before,
        "painLevelAfter": pain_after,
        "difficultyRating": rating,
        "completedSets": 3,
        "targetSets": 3,
        "completedReps": 8,
        "targetReps": 10,
        "exerciseName": "Knee Extension",
        "exerciseId": EXERCISE_ID,
        "userId": USER_ID,
    })
}

/// Approximate float equality for derived rates and scores
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
