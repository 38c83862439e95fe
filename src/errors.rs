// ABOUTME: Error module re-exports from rehab-core crate
// ABOUTME: Preserves crate::errors import paths for storage, services, and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use rehab_core::errors::*;
