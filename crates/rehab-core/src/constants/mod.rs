// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Wire defaults for feedback fields and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Defaults applied when a feedback field is missing from the submitted record
pub mod feedback_defaults {
    /// Pain level assumed when `painLevelBefore` or `painLevelAfter` is absent
    pub const PAIN_LEVEL: i32 = 5;
    /// Completed sets/reps assumed when absent
    pub const COMPLETED: u32 = 0;
    /// Target sets/reps used by ratio calculations when absent (also the division floor)
    pub const TARGET: u32 = 1;
    /// Prescribed sets the optimizer starts from when the latest record has none
    pub const OPTIMIZER_TARGET_SETS: u32 = 3;
    /// Prescribed reps the optimizer starts from when the latest record has none
    pub const OPTIMIZER_TARGET_REPS: u32 = 10;
}

/// Numeric encoding of subjective difficulty for trend fitting
pub mod difficulty_scores {
    /// Score for an `easy` rating
    pub const EASY: f64 = 1.0;
    /// Score for a `perfect` rating (also used for unrecognized ratings)
    pub const PERFECT: f64 = 2.0;
    /// Score for a `hard` rating
    pub const HARD: f64 = 3.0;
}

/// Reporting windows for per-patient trends and analytics
pub mod reporting {
    /// Days of history covered when the caller does not choose a window
    pub const DEFAULT_PERIOD_DAYS: u32 = 30;
}

/// Service identifiers used in logs and health reports
pub mod service_names {
    /// Top-level service name
    pub const REHAB_ADAPT: &str = "rehab-adapt";
    /// Feedback analyzer component
    pub const FEEDBACK_ANALYZER: &str = "feedback_analyzer";
    /// Plan optimizer component
    pub const PLAN_OPTIMIZER: &str = "plan_optimizer";
    /// Insight generator component
    pub const INSIGHT_GENERATOR: &str = "insight_generator";
}
