// ABOUTME: Rehab CLI - command-line front end for the feedback adaptation engine
// ABOUTME: Analyzes feedback, optimizes plans, reports trends and insights as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Analyze one session and store it under ./data
//! rehab-cli analyze --file feedback.json
//!
//! # Analyze without persisting
//! rehab-cli analyze --file feedback.json --no-store
//!
//! # Optimize from stored history, or from a history file
//! rehab-cli optimize --user patient-1 --exercise knee-ext
//! rehab-cli optimize --user patient-1 --exercise knee-ext --history history.json
//!
//! # Trends over a history file
//! rehab-cli trends --history history.json
//!
//! # Per-exercise insights from stored history
//! rehab-cli insights --user patient-1 --exercise knee-ext
//!
//! # Patient trends and analytics over the last 14 days of stored sessions
//! rehab-cli feedback-trends --user patient-1 --days 14
//! rehab-cli analytics --user patient-1 --days 14
//!
//! # Readiness check
//! rehab-cli health
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use rehab_adapt::config::environment::{ServerConfig, StoreBackend};
use rehab_adapt::constants::reporting;
use rehab_adapt::errors::AppError;
use rehab_adapt::services::adaptation::AdaptationService;
use rehab_adapt::storage::factory::create_store;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "rehab-cli",
    about = "Rehabilitation feedback adaptation CLI",
    long_about = "Scores exercise session feedback, labels multi-session trends, and optimizes set/rep prescriptions. Results are printed as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Feedback data directory override (file backend)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Storage backend override
    #[arg(long, global = true, value_parser = parse_store)]
    store: Option<StoreBackend>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Analyze one session's feedback
    Analyze {
        /// JSON file holding one feedback object
        #[arg(long)]
        file: PathBuf,

        /// Skip persisting the feedback
        #[arg(long)]
        no_store: bool,
    },

    /// Optimize sets and reps for one patient and exercise
    Optimize {
        /// Patient identifier
        #[arg(long)]
        user: String,

        /// Exercise identifier
        #[arg(long)]
        exercise: String,

        /// JSON file holding an array of feedback objects, oldest first
        /// (defaults to the stored history)
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Label pain, completion, and difficulty trends over a history file
    Trends {
        /// JSON file holding an array of feedback objects, oldest first
        #[arg(long)]
        history: PathBuf,
    },

    /// Summarize the stored history of one exercise
    Insights {
        /// Patient identifier
        #[arg(long)]
        user: String,

        /// Exercise identifier
        #[arg(long)]
        exercise: String,
    },

    /// Report pain, completion, and difficulty series for one patient
    FeedbackTrends {
        /// Patient identifier
        #[arg(long)]
        user: String,

        /// Days of stored sessions to include
        #[arg(long, default_value_t = reporting::DEFAULT_PERIOD_DAYS)]
        days: u32,
    },

    /// Report analytics across every exercise of one patient
    Analytics {
        /// Patient identifier
        #[arg(long)]
        user: String,

        /// Days of stored sessions to include
        #[arg(long, default_value_t = reporting::DEFAULT_PERIOD_DAYS)]
        days: u32,
    },

    /// Report component and storage readiness
    Health,
}

fn parse_store(value: &str) -> Result<StoreBackend, String> {
    value.parse().map_err(|e: AppError| e.message)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    if let Some(store) = cli.store {
        config = config.with_store(store);
    }
    if cli.verbose {
        config.logging = config.logging.verbose();
    }
    config.logging.init()?;

    let store = create_store(&config).await?;
    let service = AdaptationService::new(config.adaptation.clone(), store);
    debug!(store = %config.store, "Rehab CLI ready");

    match cli.command {
        Command::Analyze { file, no_store } => {
            commands::feedback::analyze(&service, &file, no_store).await?;
        }
        Command::Optimize {
            user,
            exercise,
            history,
        } => {
            commands::plan::optimize(&service, &user, &exercise, history.as_deref()).await?;
        }
        Command::Trends { history } => {
            commands::feedback::trends(&service, &history).await?;
        }
        Command::Insights { user, exercise } => {
            commands::plan::insights(&service, &user, &exercise).await?;
        }
        Command::FeedbackTrends { user, days } => {
            commands::report::feedback_trends(&service, &user, days).await?;
        }
        Command::Analytics { user, days } => {
            commands::report::analytics(&service, &user, days).await?;
        }
        Command::Health => {
            commands::plan::health(&service).await?;
        }
    }

    Ok(())
}
