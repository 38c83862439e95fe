// ABOUTME: Configuration error types for adaptation threshold validation
// ABOUTME: Defines error variants for invalid ranges, parse failures, and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rehab_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable present but not parseable
    #[error("Parse error for {variable}: {value:?}")]
    Parse {
        /// Variable name
        variable: &'static str,
        /// Raw value found in the environment
        value: String,
    },

    /// Value outside acceptable range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Cross-field consistency check failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::Parse { .. } => ErrorCode::ConfigError,
            ConfigError::InvalidRange(_) | ConfigError::ValidationFailed(_) => {
                ErrorCode::ConfigInvalid
            }
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
