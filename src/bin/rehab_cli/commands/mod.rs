// ABOUTME: Re-exports command modules for rehab-cli
// ABOUTME: Feedback analysis, plan-level, and patient report commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod feedback;
pub mod plan;
pub mod report;
