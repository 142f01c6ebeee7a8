// ABOUTME: grfmetrics application crate: sessions, aggregation, ingestion, and export
// ABOUTME: Wires the core and analysis crates into the batch-processing surface used by the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

#![deny(unsafe_code)]

//! # grfmetrics
//!
//! Batch analysis of vertical ground-reaction-force recordings from one or
//! two force plates: countermovement and single-leg jumps, drop landings,
//! drop jumps, and isometric strength trials.
//!
//! The numeric pipeline lives in `grfmetrics-analysis`; shared models and
//! the metric schema registry in `grfmetrics-core`. This crate adds the
//! pieces a batch run needs around the numbers:
//!
//! - [`session`]: per-trial processing with error containment; a failed
//!   trial is reported and excluded, never a partial table column
//! - [`aggregate`]: the wide trial table, cross-trial averages, and limb
//!   symmetry indices
//! - [`ingest`]: CSV force-column ingestion
//! - [`export`]: table and corrected-signal writers

/// Re-exports of the analysis engine under the application crate's paths
pub mod analysis;

/// Trial aggregation: wide tables, averages, symmetry indices
pub mod aggregate;

/// CSV ingestion of force traces and isometric signals
pub mod ingest;

/// Table and signal exports
pub mod export;

/// Structured logging setup for the binaries
pub mod logging;

/// Analysis sessions: per-trial pipeline with error containment
pub mod session;

pub use grfmetrics_core::{
    errors::{AnalysisError, AnalysisResult},
    models::{
        BodyMass, DualTrace, ForceTrace, MovementType, OutcomeRecord, PlateSetup, Side,
        TrialContext,
    },
    schema::{schema_for, MetricDef},
};

pub use aggregate::{AverageTable, MvicTable, SideAverages, SymmetryTable, TrialTable};
pub use session::{AnalysisSession, TrialInput};
