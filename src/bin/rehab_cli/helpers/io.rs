// ABOUTME: JSON input and output helpers for rehab-cli
// ABOUTME: Reads feedback and history files and prints pretty JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rehab_adapt::errors::{AppError, AppResult};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// Read and parse one JSON document
pub async fn read_json(path: &Path) -> AppResult<Value> {
    let contents = fs::read_to_string(path).await.map_err(|e| {
        AppError::invalid_input(format!("cannot read {}", path.display()))
            .with_resource_id(path.display().to_string())
            .with_source(e)
    })?;
    Ok(serde_json::from_str(&contents)?)
}

/// Read a history file: a JSON array of feedback objects
pub async fn read_history(path: &Path) -> AppResult<Vec<Value>> {
    match read_json(path).await? {
        Value::Array(entries) => Ok(entries),
        _ => Err(AppError::invalid_input(format!(
            "{} must contain a JSON array of feedback objects",
            path.display()
        ))),
    }
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
