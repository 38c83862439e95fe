// ABOUTME: Core types and constants for the rehabilitation adaptation platform
// ABOUTME: Foundation crate with error handling, feedback models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Rehab Core
//!
//! Foundation crate providing shared types and constants for the rehabilitation
//! feedback adaptation platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Wire defaults and service identifiers
//! - **models**: Session feedback records and the enums derived from them

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`FeedbackEvent`, `DifficultyRating`, `PainSeverity`)
pub mod models;
