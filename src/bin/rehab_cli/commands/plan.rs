// ABOUTME: Plan commands for rehab-cli
// ABOUTME: Optimization from stored or supplied history, insights, and health
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rehab_adapt::errors::AppResult;
use rehab_adapt::services::adaptation::AdaptationService;
use std::path::Path;

use crate::helpers::io::{print_json, read_history};

type Result<T> = AppResult<T>;

/// Optimize from a history file when given, otherwise from the store
pub async fn optimize(
    service: &AdaptationService,
    user: &str,
    exercise: &str,
    history: Option<&Path>,
) -> Result<()> {
    let result = match history {
        Some(path) => {
            let entries = read_history(path).await?;
            service.optimize_plan(user, exercise, &entries)
        }
        None => service.optimize_from_store(user, exercise).await?,
    };
    print_json(&result)
}

/// Print insights for one exercise
pub async fn insights(service: &AdaptationService, user: &str, exercise: &str) -> Result<()> {
    let response = service.exercise_insights(user, exercise).await?;
    print_json(&response)
}

/// Print the readiness report
pub async fn health(service: &AdaptationService) -> Result<()> {
    print_json(&service.health().await)
}
