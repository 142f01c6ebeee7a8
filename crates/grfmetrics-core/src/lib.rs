// ABOUTME: Core types and constants for the grfmetrics force-plate analysis suite
// ABOUTME: Foundation crate with error handling, trial models, and the metric schema registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

#![deny(unsafe_code)]

//! # grfmetrics Core
//!
//! Foundation crate providing the shared vocabulary of the grfmetrics
//! pipeline: force traces, trial contexts, phase boundaries, outcome records,
//! and the per-protocol metric schema registry. This crate is designed to
//! change infrequently so that the analysis and application crates can build
//! incrementally on a stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with [`AnalysisError`] and the
//!   [`AnalysisResult`] alias
//! - **constants**: Biomechanics constants organized by domain (detection
//!   thresholds, filter parameters, MVIC epochs)
//! - **models**: Core data models (`ForceTrace`, `TrialContext`, phase
//!   boundary sets, `OutcomeRecord`)
//! - **schema**: Ordered metric definitions per movement type and plate setup

/// Unified error handling for the analysis pipeline
pub mod errors;

/// Biomechanics constants organized by domain
pub mod constants;

/// Core data models (traces, contexts, boundaries, outcomes)
pub mod models;

/// Metric schema registry per movement type and plate setup
pub mod schema;

pub use errors::{AnalysisError, AnalysisResult};
pub use models::{
    BodyMass, CountermovementPhases, DropJumpPhases, DropLandingPhases, ForceTrace, MovementType,
    OutcomeRecord, PlateSetup, Side, TrialContext,
};
pub use schema::{schema_for, MetricDef};
