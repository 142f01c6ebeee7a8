// ABOUTME: Criterion benchmarks for the force-plate analysis pipeline
// ABOUTME: Measures phase detection, integration, outcome extraction, and MVIC epoch search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

//! Criterion benchmarks for the analysis pipeline.
//!
//! Measures the full countermovement pipeline on a realistic trial length
//! and the O(n) sliding-epoch MVIC search on long isometric records.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use grfmetrics::analysis::isometric::extract_mvic;
use grfmetrics::analysis::outcomes::countermovement;
use grfmetrics::{BodyMass, ForceTrace, MovementType, PlateSetup, TrialContext};

/// Synthetic 5-second countermovement trial at 1000 Hz
fn cmj_trace() -> ForceTrace {
    let mut f = vec![700.0; 1500];
    f.extend(vec![400.0; 300]);
    f.extend(vec![1200.0; 300]);
    f.extend(vec![0.0; 400]);
    f.extend(vec![1500.0; 150]);
    f.extend(vec![698.0; 1350]);
    ForceTrace::new(f, 1000.0)
}

fn cmj_context() -> TrialContext {
    TrialContext::new(
        MovementType::Cmj,
        PlateSetup::Single,
        1000.0,
        BodyMass::FromQuietStance,
        None,
    )
    .unwrap()
}

fn bench_countermovement_pipeline(c: &mut Criterion) {
    let trace = cmj_trace();
    let ctx = cmj_context();
    let mut group = c.benchmark_group("countermovement_pipeline");
    group.throughput(Throughput::Elements(trace.len() as u64));
    group.bench_function("analyze_single_5s_1khz", |b| {
        b.iter(|| {
            let result =
                countermovement::analyze_single("bench", black_box(&trace), &ctx, None).unwrap();
            black_box(result)
        });
    });
    group.finish();
}

fn bench_mvic_epoch_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("mvic_epoch_search");
    for seconds in [5_usize, 15, 30] {
        let n = seconds * 2000;
        let signal: Vec<f64> = (0..n)
            .map(|i| 300.0 + 50.0 * (i as f64 / 700.0).sin())
            .collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(seconds), &signal, |b, signal| {
            b.iter(|| black_box(extract_mvic(black_box(signal), 2000.0)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_countermovement_pipeline,
    bench_mvic_epoch_search
);
criterion_main!(benches);
