// ABOUTME: Feedback paired with the time it was recorded
// ABOUTME: Lets reporting code window and date sessions without knowing the store layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::feedback::FeedbackEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSession {
    /// When the feedback was recorded
    pub recorded_at: DateTime<Utc>,
    /// Feedback as decoded at submission
    pub feedback: FeedbackEvent,
}

impl FeedbackSession {
    /// Pair feedback with its recording time
    #[must_use]
    pub const fn new(recorded_at: DateTime<Utc>, feedback: FeedbackEvent) -> Self {
        Self {
            recorded_at,
            feedback,
        }
    }
}
