// ABOUTME: Adaptation service combining feedback analysis, plan optimization, and storage
// ABOUTME: Protocol-agnostic operations shared by the CLI and any future transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adaptation service
//!
//! Holds the analysis engine and an injected feedback store. Analysis and
//! optimization never fail outright; only operations that read the store
//! return [`AppResult`].

use crate::config::AdaptationConfig;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{
    AnalysisResult, ExerciseInsights, FeedbackAnalyzer, FeedbackProgress, FeedbackTrends,
    OptimizationResult, PlanOptimizer, UserAnalytics,
};
use crate::models::{FeedbackEvent, FeedbackSession};
use crate::storage::factory::SharedStore;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

const STATUS_SUCCESS: &str = "success";
const STATUS_OK: &str = "ok";
const SERVICE_AVAILABLE: &str = "available";
const NO_INSIGHTS_MESSAGE: &str = "No feedback recorded for this exercise";
const NO_PERIOD_DATA_MESSAGE: &str = "No feedback recorded in this period";

/// Response to a feedback submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackSubmission {
    /// Always `success`; analysis failures surface inside `analysis`
    pub status: &'static str,
    /// Identifier of the stored record, `null` when nothing was persisted
    pub feedback_id: Option<Uuid>,
    /// Analysis of the submitted feedback
    pub analysis: AnalysisResult,
}

/// Response to an insights request, tagged by `status`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InsightsResponse {
    /// History was found and summarized
    Success {
        /// Summary of the stored sessions
        insights: ExerciseInsights,
        /// Exercise that was summarized
        exercise_id: String,
        /// Patient the history belongs to
        user_id: String,
    },
    /// No history for this patient and exercise
    NoData {
        /// Human-readable reason
        message: String,
        /// Exercise that was requested
        exercise_id: String,
        /// Patient that was requested
        user_id: String,
    },
}

/// Response to a patient trends request, tagged by `status`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UserTrendsResponse {
    /// Sessions were found in the window
    Success {
        /// Session series and overall trend
        trends: FeedbackProgress,
        /// Patient the sessions belong to
        user_id: String,
        /// Length of the window in days
        period_days: u32,
    },
    /// No sessions in the window
    NoData {
        /// Human-readable reason
        message: String,
        /// Patient that was requested
        user_id: String,
        /// Length of the window in days
        period_days: u32,
    },
}

/// Response to a patient analytics request, tagged by `status`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UserAnalyticsResponse {
    /// Sessions were found in the window
    Success {
        /// Analytics across every exercise in the window
        analytics: UserAnalytics,
        /// Patient the sessions belong to
        user_id: String,
        /// Length of the window in days
        time_period_days: u32,
        /// Time the report was produced
        generated_at: DateTime<Utc>,
    },
    /// No sessions in the window
    NoData {
        /// Human-readable reason
        message: String,
        /// Patient that was requested
        user_id: String,
        /// Length of the window in days
        time_period_days: u32,
    },
}

/// Readiness report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    /// Always `ok` once the service is constructed
    pub status: &'static str,
    /// Availability of each analysis component
    pub services: BTreeMap<&'static str, &'static str>,
    /// Whether the store passed its health check
    pub storage: bool,
    /// Backend label of the store
    pub storage_backend: &'static str,
}

/// Analysis, optimization, and persistence behind one handle
#[derive(Clone)]
pub struct AdaptationService {
    analyzer: FeedbackAnalyzer,
    optimizer: PlanOptimizer,
    store: SharedStore,
}

impl AdaptationService {
    /// Create a service with explicit thresholds and a store
    #[must_use]
    pub fn new(config: AdaptationConfig, store: SharedStore) -> Self {
        Self {
            analyzer: FeedbackAnalyzer::new(config.clone()),
            optimizer: PlanOptimizer::new(config),
            store,
        }
    }

    /// Session analyzer used by this service
    #[must_use]
    pub const fn analyzer(&self) -> &FeedbackAnalyzer {
        &self.analyzer
    }

    /// Analyze one feedback payload without persisting it
    #[must_use]
    pub fn analyze_feedback(&self, payload: &Value) -> FeedbackSubmission {
        FeedbackSubmission {
            status: STATUS_SUCCESS,
            feedback_id: None,
            analysis: self.analyzer.analyze_feedback(payload),
        }
    }

    /// Analyze one feedback payload and persist it
    ///
    /// Undecodable payloads get the fallback analysis and are not persisted.
    /// A failed write is logged and reported as a `null` feedback id.
    pub async fn submit_feedback(&self, payload: &Value) -> FeedbackSubmission {
        let Ok(feedback) = FeedbackEvent::deserialize(payload) else {
            return self.analyze_feedback(payload);
        };

        let analysis = self.analyzer.analyze(&feedback);

        let feedback_id = match self.store.store(&feedback, &analysis).await {
            Ok(id) => {
                info!(
                    feedback.id = %id,
                    user.id = feedback.user_id.as_deref().unwrap_or("unknown"),
                    exercise.id = feedback.exercise_id.as_deref().unwrap_or("unknown"),
                    effectiveness = analysis.effectiveness_score,
                    "Feedback analyzed and stored"
                );
                Some(id)
            }
            Err(e) => {
                warn!(error = %e, "Error storing feedback");
                None
            }
        };

        FeedbackSubmission {
            status: STATUS_SUCCESS,
            feedback_id,
            analysis,
        }
    }

    /// Optimize from a caller-supplied history, oldest session first
    #[must_use]
    pub fn optimize_plan(
        &self,
        user_id: &str,
        exercise_id: &str,
        history: &[Value],
    ) -> OptimizationResult {
        self.optimizer.optimize_plan(user_id, exercise_id, history)
    }

    /// Optimize from the stored history of one patient and exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn optimize_from_store(
        &self,
        user_id: &str,
        exercise_id: &str,
    ) -> AppResult<OptimizationResult> {
        let history = self.store.history(user_id, exercise_id).await?;
        debug!(
            user.id = %user_id,
            exercise.id = %exercise_id,
            sessions = history.len(),
            "Loaded stored history for optimization"
        );
        Ok(self.optimizer.optimize(user_id, exercise_id, &history))
    }

    /// Trends over a caller-supplied history, oldest session first
    ///
    /// # Errors
    ///
    /// Returns an error if any history entry cannot be decoded
    pub fn compute_trends(&self, history: &[Value]) -> AppResult<FeedbackTrends> {
        let events = history
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                FeedbackEvent::deserialize(entry).map_err(|e| {
                    AppError::invalid_input(format!("invalid feedback history entry {index}"))
                        .with_source(e)
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(self.optimizer.trend_analyzer().compute_trends(&events))
    }

    /// Summarize the stored history of one patient and exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn exercise_insights(
        &self,
        user_id: &str,
        exercise_id: &str,
    ) -> AppResult<InsightsResponse> {
        let sessions: Vec<FeedbackSession> = self
            .store
            .sessions(user_id, None)
            .await?
            .into_iter()
            .filter(|session| session.feedback.belongs_to(user_id, exercise_id))
            .collect();

        let response = match ExerciseInsights::from_sessions(exercise_id, &sessions, &self.analyzer)
        {
            Some(insights) => InsightsResponse::Success {
                insights,
                exercise_id: exercise_id.to_owned(),
                user_id: user_id.to_owned(),
            },
            None => InsightsResponse::NoData {
                message: NO_INSIGHTS_MESSAGE.to_owned(),
                exercise_id: exercise_id.to_owned(),
                user_id: user_id.to_owned(),
            },
        };
        Ok(response)
    }

    /// Pain, completion, and difficulty series for one patient over the last `days_back` days
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn feedback_trends(
        &self,
        user_id: &str,
        days_back: u32,
    ) -> AppResult<UserTrendsResponse> {
        let sessions = self.sessions_in_period(user_id, days_back).await?;

        let response = match FeedbackProgress::from_sessions(&sessions, &self.analyzer) {
            Some(trends) => UserTrendsResponse::Success {
                trends,
                user_id: user_id.to_owned(),
                period_days: days_back,
            },
            None => UserTrendsResponse::NoData {
                message: NO_PERIOD_DATA_MESSAGE.to_owned(),
                user_id: user_id.to_owned(),
                period_days: days_back,
            },
        };
        Ok(response)
    }

    /// Analytics across every exercise of one patient over the last `period_days` days
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn user_analytics(
        &self,
        user_id: &str,
        period_days: u32,
    ) -> AppResult<UserAnalyticsResponse> {
        let sessions = self.sessions_in_period(user_id, period_days).await?;

        let response = match UserAnalytics::from_sessions(&sessions, &self.analyzer) {
            Some(analytics) => UserAnalyticsResponse::Success {
                analytics,
                user_id: user_id.to_owned(),
                time_period_days: period_days,
                generated_at: Utc::now(),
            },
            None => UserAnalyticsResponse::NoData {
                message: NO_PERIOD_DATA_MESSAGE.to_owned(),
                user_id: user_id.to_owned(),
                time_period_days: period_days,
            },
        };
        Ok(response)
    }

    /// Sessions recorded within the last `days` days
    ///
    /// A window too large to represent covers the whole history.
    async fn sessions_in_period(&self, user_id: &str, days: u32) -> AppResult<Vec<FeedbackSession>> {
        let since = TimeDelta::try_days(i64::from(days))
            .and_then(|window| Utc::now().checked_sub_signed(window));
        let sessions = self.store.sessions(user_id, since).await?;
        debug!(
            user.id = %user_id,
            period_days = days,
            sessions = sessions.len(),
            "Loaded sessions for reporting"
        );
        Ok(sessions)
    }

    /// Report component availability and store health
    pub async fn health(&self) -> HealthReport {
        let storage = match self.store.health_check().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, backend = self.store.backend_name(), "Storage health check failed");
                false
            }
        };

        let services = [
            service_names::FEEDBACK_ANALYZER,
            service_names::PLAN_OPTIMIZER,
            service_names::INSIGHT_GENERATOR,
        ]
        .into_iter()
        .map(|name| (name, SERVICE_AVAILABLE))
        .collect();

        HealthReport {
            status: STATUS_OK,
            services,
            storage,
            storage_backend: self.store.backend_name(),
        }
    }
}
