// ABOUTME: Constants module re-exports from rehab-core crate
// ABOUTME: Keeps crate::constants paths stable for the binary and services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use rehab_core::constants::*;

/// Environment variable names read by the server configuration
pub mod env_keys {
    /// Directory holding persisted feedback files
    pub const DATA_DIR: &str = "REHAB_DATA_DIR";
    /// Storage backend selector (`file` or `memory`)
    pub const STORE: &str = "REHAB_STORE";
}

/// Server defaults
pub mod defaults {
    /// Default feedback directory, relative to the working directory
    pub const DATA_DIR: &str = "data";
}
