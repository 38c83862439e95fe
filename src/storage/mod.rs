// ABOUTME: Feedback persistence abstraction with pluggable backends
// ABOUTME: JSON-file and in-memory stores behind one async trait, selected by the factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Store factory for configuration-based backend selection
pub mod factory;
/// One JSON document per feedback event
pub mod file;
/// Process-local store
pub mod memory;

use crate::errors::AppResult;
use crate::intelligence::AnalysisResult;
use crate::models::{FeedbackEvent, FeedbackSession};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Persisted feedback record
///
/// The analysis is kept as the JSON document that was returned to the caller,
/// so records stay readable if analysis output gains fields later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFeedback {
    /// Record identifier
    pub id: Uuid,
    /// Typed feedback as decoded at submission
    ///
    /// Unrecognized keys and explicit nulls in the submitted payload are not kept.
    pub feedback: FeedbackEvent,
    /// Analysis returned for this feedback
    pub analysis: Value,
    /// Time the record was written
    pub timestamp: DateTime<Utc>,
}

impl StoredFeedback {
    /// New record stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns an error if the analysis cannot be converted to JSON
    pub fn new(feedback: &FeedbackEvent, analysis: &AnalysisResult) -> AppResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            feedback: feedback.clone(),
            analysis: serde_json::to_value(analysis)?,
            timestamp: Utc::now(),
        })
    }
}

/// Feedback store trait for pluggable backend implementations
///
/// # Examples
///
/// ```rust,no_run
/// use rehab_adapt::intelligence::FeedbackAnalyzer;
/// use rehab_adapt::models::FeedbackEvent;
/// use rehab_adapt::storage::memory::InMemoryStore;
/// use rehab_adapt::storage::FeedbackStore;
/// # async fn example() -> Result<(), rehab_adapt::errors::AppError> {
///
/// let store = InMemoryStore::new();
/// let feedback = FeedbackEvent {
///     user_id: Some("patient-1".to_owned()),
///     exercise_id: Some("knee-ext".to_owned()),
///     pain_level_after: Some(3),
///     ..FeedbackEvent::default()
/// };
/// let analysis = FeedbackAnalyzer::default().analyze(&feedback);
///
/// let id = store.store(&feedback, &analysis).await?;
/// let history = store.history("patient-1", "knee-ext").await?;
/// assert_eq!(history.len(), 1);
/// let sessions = store.sessions("patient-1", None).await?;
/// assert_eq!(sessions.len(), 1);
/// println!("stored {id}");
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Persist one analyzed feedback event
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    async fn store(&self, feedback: &FeedbackEvent, analysis: &AnalysisResult) -> AppResult<Uuid>;

    /// Every session for one patient recorded at or after `since`, oldest first
    ///
    /// `None` returns the full history.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn sessions(
        &self,
        user_id: &str,
        since: Option<DateTime<Utc>>,
    ) -> AppResult<Vec<FeedbackSession>>;

    /// Feedback for one patient and exercise, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn history(&self, user_id: &str, exercise_id: &str) -> AppResult<Vec<FeedbackEvent>> {
        Ok(self
            .sessions(user_id, None)
            .await?
            .into_iter()
            .filter(|session| session.feedback.belongs_to(user_id, exercise_id))
            .map(|session| session.feedback)
            .collect())
    }

    /// Number of stored records
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn count(&self) -> AppResult<usize>;

    /// Verify the backend is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable
    async fn health_check(&self) -> AppResult<()>;

    /// Short backend label for logs and health output
    fn backend_name(&self) -> &'static str;
}

/// Select one patient's records written at or after `since`, ordered by timestamp
///
/// The sort is stable, so records written in the same instant keep their
/// insertion order.
#[must_use]
pub fn chronological_sessions(
    mut records: Vec<StoredFeedback>,
    user_id: &str,
    since: Option<DateTime<Utc>>,
) -> Vec<FeedbackSession> {
    records.retain(|record| {
        record.feedback.user_id.as_deref() == Some(user_id)
            && since.is_none_or(|cutoff| record.timestamp >= cutoff)
    });
    records.sort_by_key(|record| record.timestamp);
    records
        .into_iter()
        .map(|record| FeedbackSession::new(record.timestamp, record.feedback))
        .collect()
}
