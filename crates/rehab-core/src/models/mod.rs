// ABOUTME: Core data models for rehabilitation session feedback
// ABOUTME: Re-exports the feedback record and its rating/severity enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Session feedback record and derived enums
pub mod feedback;
/// Feedback paired with its recording time
pub mod session;

pub use feedback::{DifficultyLevel, DifficultyRating, FeedbackEvent, PainSeverity};
pub use session::FeedbackSession;
