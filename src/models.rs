// ABOUTME: Model re-exports from rehab-core crate
// ABOUTME: Feedback events, difficulty ratings, and pain severity buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use rehab_core::models::*;
