// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Resolves storage backend, data directory, logging, and adaptation thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::config::AdaptationConfig;
use crate::constants::{defaults, env_keys};
use crate::errors::{AppError, AppResult};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Feedback storage backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// One JSON document per feedback event under the data directory
    #[default]
    File,
    /// Process-local storage, lost on exit
    Memory,
}

impl FromStr for StoreBackend {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "file" | "json" => Ok(Self::File),
            "memory" | "mem" => Ok(Self::Memory),
            other => Err(AppError::config(format!(
                "unknown store backend '{other}', expected 'file' or 'memory'"
            ))),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory for the file backend
    pub data_dir: PathBuf,
    /// Selected storage backend
    pub store: StoreBackend,
    /// Logging setup
    pub logging: LoggingConfig,
    /// Analysis and optimization thresholds
    pub adaptation: AdaptationConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(defaults::DATA_DIR),
            store: StoreBackend::default(),
            logging: LoggingConfig::default(),
            adaptation: AdaptationConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the store backend is unknown or the adaptation
    /// thresholds fail to parse or validate
    pub fn from_env() -> AppResult<Self> {
        let store = match env::var(env_keys::STORE) {
            Ok(value) => value.parse()?,
            Err(_) => StoreBackend::default(),
        };

        let adaptation = AdaptationConfig::from_environment()?;

        let config = Self {
            data_dir: env::var(env_keys::DATA_DIR)
                .map_or_else(|_| PathBuf::from(defaults::DATA_DIR), PathBuf::from),
            store,
            logging: LoggingConfig::from_env(),
            adaptation,
        };

        info!(
            store = %config.store,
            data_dir = %config.data_dir.display(),
            "Configuration loaded from environment"
        );

        Ok(config)
    }

    /// Same configuration with a different data directory
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Same configuration with a different storage backend
    #[must_use]
    pub const fn with_store(mut self, store: StoreBackend) -> Self {
        self.store = store;
        self
    }
}
