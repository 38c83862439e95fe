// ABOUTME: JSON-file feedback store writing one pretty-printed document per event
// ABOUTME: Scans the data directory for history and skips files that fail to parse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{chronological_sessions, FeedbackStore, StoredFeedback};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::intelligence::AnalysisResult;
use crate::models::{FeedbackEvent, FeedbackSession};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

const FILE_PREFIX: &str = "feedback_";
const FILE_EXTENSION: &str = ".json";

/// Feedback store backed by a directory of JSON documents
///
/// Each record lives in `feedback_{id}.json`. History reads scan the whole
/// directory; there is no index.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub async fn new(data_dir: impl Into<PathBuf>) -> AppResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).await.map_err(|e| {
            AppError::storage(format!(
                "failed to create data directory {}",
                data_dir.display()
            ))
            .with_source(e)
        })?;
        Ok(Self { data_dir })
    }

    /// Directory holding the feedback documents
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn record_path(&self, id: Uuid) -> PathBuf {
        self.data_dir
            .join(format!("{FILE_PREFIX}{id}{FILE_EXTENSION}"))
    }

    fn is_record_file(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(FILE_PREFIX) && name.ends_with(FILE_EXTENSION))
    }

    async fn record_files(&self) -> AppResult<Vec<PathBuf>> {
        let mut entries = fs::read_dir(&self.data_dir).await?;
        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if Self::is_record_file(&path) {
                files.push(path);
            }
        }
        Ok(files)
    }

    async fn load_record(path: &Path) -> Option<StoredFeedback> {
        let contents = match fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping unreadable feedback file");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping malformed feedback file");
                None
            }
        }
    }

    async fn load_all(&self) -> AppResult<Vec<StoredFeedback>> {
        let mut records = Vec::new();
        for path in self.record_files().await? {
            if let Some(record) = Self::load_record(&path).await {
                records.push(record);
            }
        }
        Ok(records)
    }
}

#[async_trait::async_trait]
impl FeedbackStore for JsonFileStore {
    async fn store(&self, feedback: &FeedbackEvent, analysis: &AnalysisResult) -> AppResult<Uuid> {
        let record = StoredFeedback::new(feedback, analysis)?;
        let path = self.record_path(record.id);
        let contents = serde_json::to_string_pretty(&record)?;

        fs::write(&path, contents).await.map_err(|e| {
            AppError::storage(format!("failed to write {}", path.display()))
                .with_resource_id(record.id.to_string())
                .with_source(e)
        })?;

        debug!(feedback.id = %record.id, path = %path.display(), "Feedback stored");
        Ok(record.id)
    }

    async fn sessions(
        &self,
        user_id: &str,
        since: Option<DateTime<Utc>>,
    ) -> AppResult<Vec<FeedbackSession>> {
        let records = self.load_all().await?;
        Ok(chronological_sessions(records, user_id, since))
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.record_files().await?.len())
    }

    async fn health_check(&self) -> AppResult<()> {
        let metadata = fs::metadata(&self.data_dir).await.map_err(|e| {
            AppError::new(
                ErrorCode::ResourceUnavailable,
                format!("data directory {} is not accessible", self.data_dir.display()),
            )
            .with_source(e)
        })?;

        if metadata.is_dir() {
            Ok(())
        } else {
            Err(AppError::new(
                ErrorCode::ResourceUnavailable,
                format!("{} is not a directory", self.data_dir.display()),
            ))
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
