// ABOUTME: Multi-session trend labelling over a chronological feedback history
// ABOUTME: Fits least-squares slopes for pain, completion, and difficulty series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::TrendConfig;
use crate::statistical_analysis::StatisticalAnalyzer;
use rehab_core::models::FeedbackEvent;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Direction of a metric across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Slope at or above the stability threshold
    Increasing,
    /// Slope at or below the negative stability threshold
    Decreasing,
    /// Slope magnitude below the stability threshold
    Stable,
    /// Too few sessions to fit a trend
    InsufficientData,
}

impl TrendDirection {
    /// Wire name of the direction
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
            Self::InsufficientData => "insufficient_data",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trend labels and averages over a history with enough sessions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    /// Direction of post-session pain
    pub pain_trend: TrendDirection,
    /// Direction of the product-form completion rate
    pub completion_trend: TrendDirection,
    /// Direction of the numeric difficulty score
    pub difficulty_trend: TrendDirection,
    /// Mean post-session pain
    pub average_pain: f64,
    /// Mean product-form completion rate
    pub average_completion: f64,
    /// Number of sessions analyzed
    pub sessions_count: usize,
}

/// Snapshot of trends, recomputed on every call
///
/// Callers must check [`FeedbackTrends::summary`] before reading labels; a
/// short history carries no labels at all.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackTrends {
    /// Fewer sessions than the configured minimum
    InsufficientData,
    /// Labels and averages
    Summary(TrendSummary),
}

impl FeedbackTrends {
    /// Labels and averages, if enough sessions were supplied
    #[must_use]
    pub const fn summary(&self) -> Option<&TrendSummary> {
        match self {
            Self::Summary(summary) => Some(summary),
            Self::InsufficientData => None,
        }
    }

    /// Whether the history was too short
    #[must_use]
    pub const fn is_insufficient(&self) -> bool {
        matches!(self, Self::InsufficientData)
    }
}

impl Serialize for FeedbackTrends {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Summary(summary) => summary.serialize(serializer),
            Self::InsufficientData => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("insufficient_data", &true)?;
                map.end()
            }
        }
    }
}

/// Completion rate in product form: completed volume over prescribed volume
///
/// Deliberately differs from the analyzer's average-of-ratios form; trend
/// history has always been computed this way.
#[must_use]
pub fn simple_completion_rate(event: &FeedbackEvent) -> f64 {
    let completed = u64::from(event.sets_done()) * u64::from(event.reps_done());
    let target = u64::from(event.sets_target()) * u64::from(event.reps_target());
    completed as f64 / target.max(1) as f64
}

/// Labels trends over a chronological history
#[derive(Debug, Clone, Default)]
pub struct TrendAnalyzer {
    config: TrendConfig,
}

impl TrendAnalyzer {
    /// Create a trend analyzer with explicit thresholds
    #[must_use]
    pub const fn new(config: TrendConfig) -> Self {
        Self { config }
    }

    /// Compute trends over `history`, oldest session first
    ///
    /// The history is never reordered.
    #[must_use]
    pub fn compute_trends(&self, history: &[FeedbackEvent]) -> FeedbackTrends {
        if history.len() < self.config.min_sessions {
            return FeedbackTrends::InsufficientData;
        }

        let pain_levels: Vec<f64> = history.iter().map(|f| f64::from(f.pain_after())).collect();
        let completion_rates: Vec<f64> = history.iter().map(simple_completion_rate).collect();
        let difficulty_scores: Vec<f64> = history.iter().map(|f| f.difficulty().score()).collect();

        FeedbackTrends::Summary(TrendSummary {
            pain_trend: self.classify(&pain_levels),
            completion_trend: self.classify(&completion_rates),
            difficulty_trend: self.classify(&difficulty_scores),
            average_pain: StatisticalAnalyzer::mean(&pain_levels).unwrap_or_default(),
            average_completion: StatisticalAnalyzer::mean(&completion_rates).unwrap_or_default(),
            sessions_count: history.len(),
        })
    }

    /// Classify a series by the slope of its least-squares line
    #[must_use]
    pub fn classify(&self, values: &[f64]) -> TrendDirection {
        if values.len() < self.config.min_sessions {
            return TrendDirection::InsufficientData;
        }

        match StatisticalAnalyzer::index_slope(values) {
            Some(slope) if slope.abs() < self.config.stability_slope => TrendDirection::Stable,
            Some(slope) if slope > 0.0 => TrendDirection::Increasing,
            Some(_) => TrendDirection::Decreasing,
            None => TrendDirection::InsufficientData,
        }
    }
}
