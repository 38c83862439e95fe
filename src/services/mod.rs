// ABOUTME: Domain service layer for adaptation operations
// ABOUTME: Provides protocol-agnostic services reusable across the CLI and other front ends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Business logic lives here rather than in binaries, so every entry point
//! applies the same analysis and persistence rules.

/// Feedback submission, plan optimization, insights, patient reports, and health
pub mod adaptation;
