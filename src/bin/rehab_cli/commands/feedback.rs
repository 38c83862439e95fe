// ABOUTME: Feedback commands for rehab-cli
// ABOUTME: Analyzes a single session and labels trends over a history file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rehab_adapt::errors::AppResult;
use rehab_adapt::services::adaptation::AdaptationService;
use std::path::Path;
use tracing::info;

use crate::helpers::io::{print_json, read_history, read_json};

type Result<T> = AppResult<T>;

/// Analyze one feedback file, persisting it unless `no_store` is set
pub async fn analyze(service: &AdaptationService, file: &Path, no_store: bool) -> Result<()> {
    info!(file = %file.display(), no_store, "Analyzing feedback");
    let payload = read_json(file).await?;

    let submission = if no_store {
        service.analyze_feedback(&payload)
    } else {
        service.submit_feedback(&payload).await
    };

    print_json(&submission)
}

/// Print trends over a history file
pub async fn trends(service: &AdaptationService, history: &Path) -> Result<()> {
    let entries = read_history(history).await?;
    let trends = service.compute_trends(&entries)?;
    print_json(&trends)
}
