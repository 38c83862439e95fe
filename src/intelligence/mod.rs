// ABOUTME: Intelligence module re-exports from rehab-intelligence crate
// ABOUTME: Delegates session scoring, trends, and optimization to the extracted crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Re-exports the analysis engine so binaries and services import from one place.

pub use rehab_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::plan_optimizer::messages)
pub use rehab_intelligence::{
    adjustments, analytics, config as analysis_config, feedback_analyzer, insights,
    plan_optimizer, progress, statistical_analysis, trend_analysis,
};
