// ABOUTME: Shared synthetic-trace builders for the integration tests
// ABOUTME: Square-wave force profiles with known phase timings and body weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(dead_code)] // each integration test binary uses a subset

use grfmetrics::{DualTrace, ForceTrace};

/// Body weight of the synthetic athlete (N); mass ≈ 71.356 kg
pub const BW_N: f64 = 700.0;

/// End-to-end countermovement scenario at 1000 Hz: 1.5 s quiet
/// stance at 700 N, 0.3 s unweighting at 400 N, 0.3 s drive at 1200 N,
/// 0.4 s flight, a 1500 N landing spike, then settling just under body
/// weight.
pub fn cmj_trace() -> ForceTrace {
    let mut f = vec![BW_N; 1500];
    f.extend(vec![400.0; 300]);
    f.extend(vec![1200.0; 300]);
    f.extend(vec![0.0; 400]);
    f.extend(vec![1500.0; 150]);
    // settle wobbling around body weight, as a real plate does
    f.extend((0..1350).map(|i| if i % 2 == 0 { 702.0 } else { 698.0 }));
    ForceTrace::new(f, 1000.0)
}

/// The same scenario split across two plates with a fixed left/right share.
pub fn dual_cmj_trace(left_share: f64) -> DualTrace {
    let total = cmj_trace();
    let left: Vec<f64> = total.samples().iter().map(|f| f * left_share).collect();
    let right: Vec<f64> = total
        .samples()
        .iter()
        .map(|f| f * (1.0 - left_share))
        .collect();
    DualTrace::new(
        ForceTrace::new(left, 1000.0),
        ForceTrace::new(right, 1000.0),
    )
}

/// Drop landing at 1000 Hz for a 72 kg athlete: 0.8 s airborne, impact
/// rising to an 1800 N peak 20 ms after contact, then settling at 700 N.
pub fn drop_landing_trace() -> ForceTrace {
    let mut f = vec![0.0; 800];
    f.extend(vec![1400.0; 20]);
    f.extend(vec![1800.0; 20]); // peak 20 ms after impact
    f.extend(vec![700.0; 1160]);
    ForceTrace::new(f, 1000.0)
}

/// Drop jump at 1000 Hz for a 72 kg athlete (weight 706.3 N) off a 0.30 m
/// box: 0.6 s airborne, 0.25 s contact at 2000 N (enough drive to reverse
/// the -2.43 m/s impact velocity), 0.3 s rebound flight, a landing spike,
/// and a settle below body weight so the end-of-landing fallback engages.
pub fn drop_jump_trace() -> ForceTrace {
    let mut f = vec![0.0; 600];
    f.extend(vec![2000.0; 250]);
    f.extend(vec![0.0; 300]);
    f.extend(vec![1200.0; 100]);
    f.extend(vec![700.0; 750]);
    ForceTrace::new(f, 1000.0)
}

/// Absolute-tolerance float check with a readable failure message
pub fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{what}: expected {expected} ± {tol}, got {actual}"
    );
}
