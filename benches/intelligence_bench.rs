// ABOUTME: Criterion benchmarks for strength analytics algorithms
// ABOUTME: Measures weight prediction, trend analysis, fatigue scoring, and full reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for strength analytics algorithms.
//!
//! Measures regression fitting, windowed trend and fatigue computations, and
//! the parallel athlete report across history sizes.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{history_store, reference_date, HistorySize, BENCH_USER};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pierre_strength::analytics::StrengthAnalytics;
use pierre_strength::config::StrengthIntelligenceConfig;
use pierre_strength::intelligence::StatisticalAnalyzer;

const SIZES: [HistorySize; 3] = [HistorySize::Small, HistorySize::Medium, HistorySize::Large];

fn analytics(size: HistorySize) -> StrengthAnalytics {
    StrengthAnalytics::with_config(
        history_store(size).shared(),
        &StrengthIntelligenceConfig::default(),
    )
}

/// Benchmark next-weight prediction with both feature sets
fn bench_weight_prediction(c: &mut Criterion) {
    let mut group = c.benchmark_group("weight_prediction");

    for size in SIZES {
        let analytics = analytics(size);
        group.throughput(Throughput::Elements(size.count() as u64));
        for use_rpe in [false, true] {
            let id = if use_rpe { "days_rpe" } else { "days" };
            group.bench_with_input(BenchmarkId::new(id, size.count()), &analytics, |b, a| {
                b.iter(|| {
                    a.weights()
                        .predict_next_weight(black_box(BENCH_USER), black_box("Squat"), use_rpe)
                });
            });
        }
    }

    group.finish();
}

/// Benchmark the least-squares solver on its own
#[allow(clippy::cast_precision_loss)]
fn bench_least_squares(c: &mut Criterion) {
    let mut group = c.benchmark_group("least_squares");

    for n in [10_usize, 100, 1000] {
        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                let days = i as f64 * 3.0;
                let rpe = 6.0 + (i % 5) as f64;
                vec![days, rpe, days * rpe]
            })
            .collect();
        let targets: Vec<f64> = (0..n).map(|i| 0.35f64.mul_add(i as f64, 100.0)).collect();

        group.bench_with_input(BenchmarkId::new("three_features", n), &n, |b, _| {
            b.iter(|| StatisticalAnalyzer::least_squares(black_box(&rows), black_box(&targets)));
        });
    }

    group.finish();
}

/// Benchmark windowed trend, plateau, and fatigue computations
fn bench_windowed_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("windowed_analysis");
    let as_of = reference_date();

    for size in SIZES {
        let analytics = analytics(size);
        group.bench_with_input(
            BenchmarkId::new("strength_trend", size.count()),
            &analytics,
            |b, a| {
                b.iter(|| {
                    a.trends()
                        .analyze_strength_trends(black_box(BENCH_USER), "Deadlift", 90, as_of)
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("fatigue_score", size.count()),
            &analytics,
            |b, a| {
                b.iter(|| a.fatigue().calculate_fatigue_score(black_box(BENCH_USER), 7, as_of));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("fatigue_history", size.count()),
            &analytics,
            |b, a| {
                b.iter(|| a.fatigue().get_fatigue_history(black_box(BENCH_USER), 90, as_of));
            },
        );
    }

    group.finish();
}

/// Benchmark the full athlete report
fn bench_athlete_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("athlete_report");
    group.sample_size(20);
    let as_of = reference_date();

    for size in SIZES {
        let analytics = analytics(size);
        group.bench_with_input(
            BenchmarkId::new("report", size.count()),
            &analytics,
            |b, a| {
                b.iter(|| a.athlete_report(black_box(BENCH_USER), as_of));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_weight_prediction,
    bench_least_squares,
    bench_windowed_analysis,
    bench_athlete_report,
);

criterion_main!(benches);
