// ABOUTME: Configuration management module for server settings and adaptation thresholds
// ABOUTME: Combines environment-driven server config with the analysis threshold config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: Server configuration from environment variables
//! - **Adaptation**: Analysis thresholds, re-exported from `rehab-intelligence`

/// Environment and server configuration
pub mod environment;

pub use rehab_intelligence::config::{
    AdaptationConfig, CompletionThresholds, ConfigError, PainThresholds, TrendConfig,
};
