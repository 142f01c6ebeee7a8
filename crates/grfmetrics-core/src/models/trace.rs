// ABOUTME: Force trace models for single- and dual-plate acquisitions
// ABOUTME: Immutable sample buffers with sample-rate-derived time semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

use serde::{Deserialize, Serialize};

/// A vertical ground-reaction-force time series from one plate (or the sum
/// of two plates), sampled at a fixed rate.
///
/// Traces are immutable once constructed; the pipeline owns a trace for the
/// duration of one trial's analysis and derives everything else from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForceTrace {
    samples: Vec<f64>,
    sample_rate_hz: f64,
}

impl ForceTrace {
    /// Wrap raw force samples (newtons) captured at `sample_rate_hz`
    #[must_use]
    pub fn new(samples: Vec<f64>, sample_rate_hz: f64) -> Self {
        Self {
            samples,
            sample_rate_hz,
        }
    }

    /// Force samples in newtons
    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Acquisition rate in Hz
    #[must_use]
    pub fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the trace holds no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sampling interval in seconds
    #[must_use]
    pub fn dt(&self) -> f64 {
        1.0 / self.sample_rate_hz
    }

    /// Time of sample `index` in seconds from the start of the record
    #[must_use]
    pub fn time_at(&self, index: usize) -> f64 {
        index as f64 / self.sample_rate_hz
    }

    /// Total record duration in seconds
    #[must_use]
    pub fn duration_s(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate_hz
    }
}

/// Left and right plate traces plus their sample-wise sum.
///
/// Phase boundaries for dual-plate trials are always derived from the total
/// trace; the per-plate traces are retained for limb-specific outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DualTrace {
    /// Left-plate force trace
    pub left: ForceTrace,
    /// Right-plate force trace
    pub right: ForceTrace,
    /// Sample-wise sum of left and right
    pub total: ForceTrace,
}

impl DualTrace {
    /// Combine left and right plate traces, summing them into a total.
    ///
    /// If the plates recorded different lengths the total is truncated to
    /// the shorter record.
    #[must_use]
    pub fn new(left: ForceTrace, right: ForceTrace) -> Self {
        let rate = left.sample_rate_hz();
        let total: Vec<f64> = left
            .samples()
            .iter()
            .zip(right.samples())
            .map(|(l, r)| l + r)
            .collect();
        Self {
            left,
            right,
            total: ForceTrace::new(total, rate),
        }
    }
}
