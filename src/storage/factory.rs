// ABOUTME: Store factory for configuration-based backend selection
// ABOUTME: Returns a shared trait object so services stay backend-agnostic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{file::JsonFileStore, memory::InMemoryStore, FeedbackStore};
use crate::config::environment::{ServerConfig, StoreBackend};
use crate::errors::AppResult;
use std::sync::Arc;
use tracing::info;

/// Shared handle to whichever backend the configuration selected
pub type SharedStore = Arc<dyn FeedbackStore>;

/// Create the store selected by `config`
///
/// # Errors
///
/// Returns an error if the file backend cannot create its data directory
pub async fn create_store(config: &ServerConfig) -> AppResult<SharedStore> {
    match config.store {
        StoreBackend::File => {
            info!(
                data_dir = %config.data_dir.display(),
                "Initializing JSON file feedback store"
            );
            Ok(Arc::new(JsonFileStore::new(&config.data_dir).await?))
        }
        StoreBackend::Memory => {
            info!("Initializing in-memory feedback store");
            Ok(Arc::new(InMemoryStore::new()))
        }
    }
}
