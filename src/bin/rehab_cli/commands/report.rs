// ABOUTME: Patient report commands for rehab-cli
// ABOUTME: Windowed feedback trends and cross-exercise analytics from stored sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rehab_adapt::errors::AppResult;
use rehab_adapt::services::adaptation::AdaptationService;

use crate::helpers::io::print_json;

type Result<T> = AppResult<T>;

/// Print one patient's feedback trends over the last `days` days
pub async fn feedback_trends(service: &AdaptationService, user: &str, days: u32) -> Result<()> {
    let response = service.feedback_trends(user, days).await?;
    print_json(&response)
}

/// Print one patient's analytics over the last `days` days
pub async fn analytics(service: &AdaptationService, user: &str, days: u32) -> Result<()> {
    let response = service.user_analytics(user, days).await?;
    print_json(&response)
}
