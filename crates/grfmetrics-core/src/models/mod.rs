// ABOUTME: Core data models for force-plate trials
// ABOUTME: Force traces, trial contexts, phase boundaries, and outcome records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

//! Core data models shared across the pipeline crates.

/// Force traces and dual-plate trace bundles
pub mod trace;

/// Trial configuration: movement type, plate setup, mass, side
pub mod trial;

/// Phase-boundary index sets per movement family
pub mod boundaries;

/// Per-trial outcome records ordered by the metric schema
pub mod outcome;

pub use boundaries::{CountermovementPhases, DropJumpPhases, DropLandingPhases};
pub use outcome::OutcomeRecord;
pub use trace::{DualTrace, ForceTrace};
pub use trial::{BodyMass, MovementType, PlateSetup, Side, TrialContext};
