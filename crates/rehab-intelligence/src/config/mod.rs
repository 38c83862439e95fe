// ABOUTME: Configuration-driven thresholds for feedback analysis and plan optimization
// ABOUTME: Provides type-safe, environment-configurable parameters replacing magic numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adaptation thresholds
//!
//! Analyzer and optimizer instances are constructed from an [`AdaptationConfig`]
//! instead of reading process-wide state, so callers can inject different
//! thresholds per request or per test.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Pain thresholds used by session analysis and trend recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainThresholds {
    /// Pain score at or above which a session counts as high pain
    pub high_level: i32,

    /// Pain change magnitude beyond which a change is significant
    pub significant_change: i32,

    /// Average post-session pain above which trends call for pain management
    pub high_average: f64,
}

/// Completion-rate thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionThresholds {
    /// Rate below which completion is considered low
    pub low: f64,

    /// Rate at or above which completion is considered adequate
    pub adequate: f64,

    /// Rate at or above which completion is considered excellent
    pub excellent: f64,
}

/// Trend detection parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Minimum number of sessions before trends are computed
    pub min_sessions: usize,

    /// Slope magnitude below which a series is stable
    pub stability_slope: f64,
}

/// Main adaptation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptationConfig {
    /// Pain thresholds used by the analyzer and optimizer
    pub pain: PainThresholds,
    /// Completion-rate thresholds used by the analyzer and insights
    pub completion: CompletionThresholds,
    /// Trend classification settings
    pub trend: TrendConfig,
}

impl Default for PainThresholds {
    fn default() -> Self {
        Self {
            high_level: 7,
            significant_change: 2,
            high_average: 7.0,
        }
    }
}

impl Default for CompletionThresholds {
    fn default() -> Self {
        Self {
            low: 0.5,
            adequate: 0.7,
            excellent: 1.0,
        }
    }
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            min_sessions: 3,
            stability_slope: 0.1,
        }
    }
}

fn override_from_env<T: FromStr>(variable: &'static str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(value) = env::var(variable) {
        *target = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse { variable, value })?;
    }
    Ok(())
}

impl AdaptationConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        override_from_env("REHAB_PAIN_HIGH_THRESHOLD", &mut config.pain.high_level)?;
        override_from_env(
            "REHAB_PAIN_SIGNIFICANT_CHANGE",
            &mut config.pain.significant_change,
        )?;
        override_from_env("REHAB_HIGH_AVERAGE_PAIN", &mut config.pain.high_average)?;
        override_from_env("REHAB_COMPLETION_LOW", &mut config.completion.low)?;
        override_from_env("REHAB_COMPLETION_ADEQUATE", &mut config.completion.adequate)?;
        override_from_env("REHAB_TREND_MIN_SESSIONS", &mut config.trend.min_sessions)?;
        override_from_env(
            "REHAB_TREND_STABILITY_SLOPE",
            &mut config.trend.stability_slope,
        )?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=10).contains(&self.pain.high_level) {
            return Err(ConfigError::InvalidRange(
                "pain.high_level must be between 0 and 10",
            ));
        }

        if !(0..=10).contains(&self.pain.significant_change) {
            return Err(ConfigError::InvalidRange(
                "pain.significant_change must be between 0 and 10",
            ));
        }

        if !(0.0..=10.0).contains(&self.pain.high_average) {
            return Err(ConfigError::InvalidRange(
                "pain.high_average must be between 0 and 10",
            ));
        }

        let completion = &self.completion;
        if completion.low < 0.0 || !completion.low.is_finite() {
            return Err(ConfigError::InvalidRange("completion.low must be >= 0"));
        }

        if completion.low >= completion.adequate {
            return Err(ConfigError::ValidationFailed(format!(
                "completion.low ({}) must be < completion.adequate ({})",
                completion.low, completion.adequate
            )));
        }

        if completion.adequate > completion.excellent {
            return Err(ConfigError::ValidationFailed(format!(
                "completion.adequate ({}) must be <= completion.excellent ({})",
                completion.adequate, completion.excellent
            )));
        }

        if self.trend.min_sessions < 2 {
            return Err(ConfigError::InvalidRange(
                "trend.min_sessions must be >= 2 to fit a slope",
            ));
        }

        if self.trend.stability_slope <= 0.0 || !self.trend.stability_slope.is_finite() {
            return Err(ConfigError::InvalidRange(
                "trend.stability_slope must be > 0",
            ));
        }

        Ok(())
    }
}
