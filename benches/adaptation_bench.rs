// ABOUTME: Criterion benchmarks for feedback analysis, trend detection, and plan optimization
// ABOUTME: Measures per-session analysis latency and history-length scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the adaptation engine.
//!
//! Measures single-session analysis, trend computation and plan optimization
//! over generated histories, plus stored-history reads from the memory backend.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rehab_adapt::intelligence::{FeedbackAnalyzer, PlanOptimizer, TrendAnalyzer};
use rehab_adapt::models::{DifficultyRating, FeedbackEvent};
use rehab_adapt::storage::memory::InMemoryStore;
use rehab_adapt::storage::FeedbackStore;
use serde_json::Value;
use tokio::runtime::Runtime;

const USER_ID: &str = "bench-patient";
const EXERCISE_ID: &str = "bench-exercise";

const HISTORY_SIZES: [usize; 3] = [3, 30, 300];

/// Deterministic history cycling through pain levels, ratings, and completion
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn generate_history(count: usize) -> Vec<FeedbackEvent> {
    (0..count)
        .map(|index| {
            let rating = match index % 4 {
                0 => DifficultyRating::Hard,
                1 => DifficultyRating::Perfect,
                2 => DifficultyRating::Easy,
                _ => DifficultyRating::Unknown,
            };
            let pain_before = (index % 8) as i32 + 2;
            FeedbackEvent {
                pain_level_before: Some(pain_before),
                pain_level_after: Some(pain_before - 1 + (index % 3) as i32),
                difficulty_rating: Some(rating),
                completed_sets: Some(2 + (index % 2) as u32),
                target_sets: Some(3),
                completed_reps: Some(7 + (index % 4) as u32),
                target_reps: Some(10),
                exercise_name: Some("Bench Exercise".to_owned()),
                exercise_id: Some(EXERCISE_ID.to_owned()),
                user_id: Some(USER_ID.to_owned()),
            }
        })
        .collect()
}

fn to_payloads(history: &[FeedbackEvent]) -> Vec<Value> {
    history
        .iter()
        .map(|event| serde_json::to_value(event).unwrap())
        .collect()
}

/// Benchmark analysis of a single session, typed and from a raw payload
fn bench_feedback_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("feedback_analysis");
    let analyzer = FeedbackAnalyzer::default();
    let event = generate_history(1).remove(0);
    let payload = serde_json::to_value(&event).unwrap();

    group.bench_function("analyze_typed", |b| {
        b.iter(|| analyzer.analyze(black_box(&event)));
    });
    group.bench_function("analyze_payload", |b| {
        b.iter(|| analyzer.analyze_feedback(black_box(&payload)));
    });

    group.finish();
}

/// Benchmark trend computation with varying history lengths
#[allow(clippy::cast_possible_truncation)]
fn bench_trend_computation(c: &mut Criterion) {
    let mut group = c.benchmark_group("trends");
    let trends = TrendAnalyzer::default();

    for count in HISTORY_SIZES {
        let history = generate_history(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("compute_trends", count),
            &history,
            |b, history| {
                b.iter(|| trends.compute_trends(black_box(history)));
            },
        );
    }

    group.finish();
}

/// Benchmark plan optimization from raw payload histories
#[allow(clippy::cast_possible_truncation)]
fn bench_plan_optimization(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_optimization");
    let optimizer = PlanOptimizer::default();

    for count in HISTORY_SIZES {
        let payloads = to_payloads(&generate_history(count));
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("optimize_plan", count),
            &payloads,
            |b, payloads| {
                b.iter(|| {
                    optimizer.optimize_plan(
                        black_box(USER_ID),
                        black_box(EXERCISE_ID),
                        black_box(payloads),
                    )
                });
            },
        );
    }

    group.finish();
}

/// Benchmark filtered history reads from the in-memory store
#[allow(clippy::cast_possible_truncation)]
fn bench_stored_history(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("stored_history");
    let analyzer = FeedbackAnalyzer::default();

    for count in HISTORY_SIZES {
        let store = InMemoryStore::new();
        rt.block_on(async {
            for event in generate_history(count) {
                store.store(&event, &analyzer.analyze(&event)).await.unwrap();
            }
        });

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("memory", count), &store, |b, store| {
            b.iter(|| {
                rt.block_on(async {
                    store
                        .history(black_box(USER_ID), black_box(EXERCISE_ID))
                        .await
                })
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_feedback_analysis,
    bench_trend_computation,
    bench_plan_optimization,
    bench_stored_history,
);
criterion_main!(benches);
