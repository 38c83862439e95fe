// ABOUTME: Main library entry point for the rehabilitation feedback adaptation engine
// ABOUTME: Wires the pure analysis crates to storage, configuration, logging, and services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Rehab Adapt
//!
//! Adapts rehabilitation exercise plans from patient session feedback.
//!
//! ## Architecture
//!
//! - **Intelligence**: Session scoring, trend detection, set/rep optimization, and patient reports
//!   (re-exported from `rehab-intelligence`)
//! - **Models**: Feedback events and rating enums (re-exported from `rehab-core`)
//! - **Storage**: Pluggable feedback history backends (JSON files, in-memory)
//! - **Services**: Protocol-agnostic operations combining analysis and storage
//! - **Config**: Environment-driven server and threshold configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use rehab_adapt::config::environment::ServerConfig;
//! use rehab_adapt::errors::AppResult;
//! use rehab_adapt::services::adaptation::AdaptationService;
//! use rehab_adapt::storage::factory::create_store;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let store = create_store(&config).await?;
//!     let service = AdaptationService::new(config.adaptation.clone(), store);
//!
//!     let response = service
//!         .submit_feedback(&json!({
//!             "painLevelBefore": 4,
//!             "painLevelAfter": 3,
//!             "difficultyRating": "perfect",
//!             "completedSets": 3,
//!             "targetSets": 3,
//!         }))
//!         .await;
//!     println!("{}", serde_json::to_string_pretty(&response)?);
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Constants re-exported from `rehab-core`
pub mod constants;

/// Unified error handling re-exported from `rehab-core`
pub mod errors;

/// Analysis engine re-exported from `rehab-intelligence`
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Feedback models re-exported from `rehab-core`
pub mod models;

/// Domain services combining analysis and storage
pub mod services;

/// Feedback history persistence
pub mod storage;
