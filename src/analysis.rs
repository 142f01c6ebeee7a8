// ABOUTME: Analysis module re-exports from the grfmetrics-analysis crate
// ABOUTME: Preserves crate-local import paths while delegating to the extracted engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

//! # Analysis Module
//!
//! The signal-processing engine: phase detection, numerical integration,
//! outcome calculation, filtering, and MVIC extraction.
//!
//! This module re-exports from the `grfmetrics-analysis` crate so callers
//! can keep `grfmetrics::analysis::...` paths.

pub use grfmetrics_analysis::{filter, isometric, kinematics, outcomes, phases};

pub use grfmetrics_analysis::{IsometricTrial, JumpKinematics, MvicEpoch, QuietStance, TrialState};
