// ABOUTME: Signal-processing engine: segmentation, integration, outcomes, filtering, MVIC
// ABOUTME: Pure CPU-bound array computation; no I/O lives in this crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

#![deny(unsafe_code)]

//! # grfmetrics Analysis
//!
//! The numeric heart of the suite: given an in-memory [`ForceTrace`] and a
//! validated trial context, this crate locates movement-phase boundaries,
//! integrates force into velocity and position, and derives the per-trial
//! outcome records defined by the schema registry. The isometric module
//! carries the baseline-correction and MVIC-extraction pipeline.
//!
//! Everything here is synchronous, allocation-light, and free of I/O; the
//! application crate owns files, tables, and exports.
//!
//! [`ForceTrace`]: grfmetrics_core::ForceTrace

/// Numerical integration and derived kinematic arrays
pub mod kinematics;

/// Threshold-crossing phase-boundary detection
pub mod phases;

/// Per-protocol outcome calculators
pub mod outcomes;

/// Zero-phase Butterworth low-pass filtering
pub mod filter;

/// Isometric baseline correction and MVIC extraction
pub mod isometric;

mod stats;

pub use isometric::{IsometricTrial, MvicEpoch, TrialState};
pub use kinematics::JumpKinematics;
pub use phases::QuietStance;
