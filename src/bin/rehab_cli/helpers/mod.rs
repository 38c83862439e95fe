// ABOUTME: Re-exports helper modules for rehab-cli
// ABOUTME: Provides JSON file input and stdout output utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod io;
