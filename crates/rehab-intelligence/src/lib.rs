// ABOUTME: Rehabilitation feedback adaptation engine
// ABOUTME: Session scoring, multi-session trend detection, and prescription optimization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Rehab Intelligence
//!
//! Decision logic for adapting rehabilitation exercise plans from patient feedback.
//! Every component here is pure and synchronous: each call is independent,
//! holds no shared mutable state, and depends only on its input and the
//! thresholds it was constructed with.
//!
//! - [`FeedbackAnalyzer`] scores one session into recommendations, adjustment
//!   multipliers, and an effectiveness score
//! - [`TrendAnalyzer`] labels pain, completion, and difficulty trends over a
//!   chronological history
//! - [`PlanOptimizer`] blends trends with the latest session into new set/rep targets
//! - [`ExerciseInsights`] summarizes a history for reporting
//! - [`FeedbackProgress`] and [`UserAnalytics`] report on a patient across exercises

/// Adjustment keys and the ordered-merge container produced by analysis stages
pub mod adjustments;
/// Patient-wide analytics across exercises
pub mod analytics;
/// Thresholds and environment overrides
pub mod config;
/// Single-session feedback scoring
pub mod feedback_analyzer;
/// Per-exercise summaries computed from history
pub mod insights;
/// Trend-driven set/rep optimization
pub mod plan_optimizer;
/// Patient-level feedback trends
pub mod progress;
/// Closed-form regression helpers
pub mod statistical_analysis;
/// Multi-session trend labelling
pub mod trend_analysis;

pub use adjustments::{AdjustmentKey, AdjustmentValue, Adjustments};
pub use analytics::{
    AnalyticsSummary, CompletionAnalytics, DifficultyAnalytics, DifficultyShift, PainAnalytics,
    UserAnalytics,
};
pub use config::{AdaptationConfig, CompletionThresholds, ConfigError, PainThresholds, TrendConfig};
pub use feedback_analyzer::{
    completion_rate, AnalysisResult, CompletionAnalysis, DifficultyAnalysis, FeedbackAnalyzer,
    PainAnalysis,
};
pub use insights::ExerciseInsights;
pub use plan_optimizer::{OptimizationError, OptimizationResult, OptimizedParameters, PlanOptimizer};
pub use progress::{FeedbackProgress, ProgressTrend};
pub use statistical_analysis::StatisticalAnalyzer;
pub use trend_analysis::{
    simple_completion_rate, FeedbackTrends, TrendAnalyzer, TrendDirection, TrendSummary,
};
