// ABOUTME: In-memory feedback store for tests and ephemeral CLI runs
// ABOUTME: Shares one record list across clones behind a tokio RwLock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{chronological_sessions, FeedbackStore, StoredFeedback};
use crate::errors::AppResult;
use crate::intelligence::AnalysisResult;
use crate::models::{FeedbackEvent, FeedbackSession};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// In-memory feedback store
///
/// Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Arc<RwLock<Vec<StoredFeedback>>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl FeedbackStore for InMemoryStore {
    async fn store(&self, feedback: &FeedbackEvent, analysis: &AnalysisResult) -> AppResult<Uuid> {
        let record = StoredFeedback::new(feedback, analysis)?;
        let id = record.id;
        self.records.write().await.push(record);
        debug!(feedback.id = %id, "Feedback stored in memory");
        Ok(id)
    }

    async fn sessions(
        &self,
        user_id: &str,
        since: Option<DateTime<Utc>>,
    ) -> AppResult<Vec<FeedbackSession>> {
        let records = self.records.read().await.clone();
        Ok(chronological_sessions(records, user_id, since))
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.records.read().await.len())
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
