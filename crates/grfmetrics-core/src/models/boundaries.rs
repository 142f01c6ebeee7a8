// ABOUTME: Phase-boundary index sets for each movement family
// ABOUTME: Validated to be strictly increasing and in bounds before any slicing happens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, AnalysisResult};

/// Boundaries of a countermovement-family trial (CMJ, SLJ).
///
/// Indices are into the full force trace. The canonical order is
/// `start_move < start_ecc < start_con < takeoff < land < end_land`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountermovementPhases {
    /// Onset of movement (body-weight crossing before unweighting)
    pub start_move: usize,
    /// Transition from unweighting to eccentric braking (minimum velocity)
    pub start_ecc: usize,
    /// Start of the concentric (propulsive) phase (velocity zero crossing)
    pub start_con: usize,
    /// First unloaded sample (flight begins)
    pub takeoff: usize,
    /// First loaded sample after flight
    pub land: usize,
    /// Return to body weight after the landing transient
    pub end_land: usize,
}

impl CountermovementPhases {
    /// Check the canonical ordering and that every index addresses the
    /// trace (the last boundary must also leave one sample of headroom for
    /// the velocity array, which is one shorter than the force array).
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::PhaseDetection`] naming the first boundary
    /// that breaks the order.
    pub fn validate(&self, trial: &str, trace_len: usize) -> AnalysisResult<()> {
        let ordered = [
            ("start_move", self.start_move),
            ("start_ecc", self.start_ecc),
            ("start_con", self.start_con),
            ("takeoff", self.takeoff),
            ("land", self.land),
            ("end_land", self.end_land),
        ];
        for pair in ordered.windows(2) {
            let (_, prev) = pair[0];
            let (name, idx) = pair[1];
            if idx <= prev {
                return Err(AnalysisError::phase_detection(
                    trial,
                    name,
                    format!("index {idx} does not advance past the previous boundary {prev}"),
                ));
            }
        }
        if self.end_land >= trace_len.saturating_sub(1) {
            return Err(AnalysisError::phase_detection(
                trial,
                "end_land",
                format!(
                    "index {} leaves no headroom in a {trace_len}-sample trace",
                    self.end_land
                ),
            ));
        }
        Ok(())
    }
}

/// Boundaries of a drop-jump trial.
///
/// `start_con` is located within the contact window via the
/// impact-velocity-seeded integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropJumpPhases {
    /// First loaded sample after the drop
    pub ground_contact: usize,
    /// Start of the concentric phase (velocity zero crossing)
    pub start_con: usize,
    /// First unloaded sample (rebound flight begins)
    pub takeoff: usize,
    /// First loaded sample after rebound flight
    pub land: usize,
    /// Return to body weight after the landing transient
    pub end_land: usize,
}

impl DropJumpPhases {
    /// Check the canonical ordering against the trace length.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::PhaseDetection`] naming the first boundary
    /// that breaks the order.
    pub fn validate(&self, trial: &str, trace_len: usize) -> AnalysisResult<()> {
        let ordered = [
            ("ground_contact", self.ground_contact),
            ("start_con", self.start_con),
            ("takeoff", self.takeoff),
            ("land", self.land),
            ("end_land", self.end_land),
        ];
        for pair in ordered.windows(2) {
            let (_, prev) = pair[0];
            let (name, idx) = pair[1];
            if idx <= prev {
                return Err(AnalysisError::phase_detection(
                    trial,
                    name,
                    format!("index {idx} does not advance past the previous boundary {prev}"),
                ));
            }
        }
        if self.end_land >= trace_len {
            return Err(AnalysisError::phase_detection(
                trial,
                "end_land",
                format!("index {} exceeds the {trace_len}-sample trace", self.end_land),
            ));
        }
        Ok(())
    }
}

/// Boundary of a drop-landing trial; only the impact instant is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropLandingPhases {
    /// First loaded sample after the drop
    pub impact: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phases() -> CountermovementPhases {
        CountermovementPhases {
            start_move: 1500,
            start_ecc: 1700,
            start_con: 1850,
            takeoff: 2100,
            land: 2500,
            end_land: 2900,
        }
    }

    #[test]
    fn canonical_order_passes() {
        assert!(phases().validate("t", 5000).is_ok());
    }

    #[test]
    fn non_increasing_boundary_is_named() {
        let mut p = phases();
        p.start_con = p.start_ecc;
        let err = p.validate("t", 5000).unwrap_err();
        assert!(err.to_string().contains("start_con"));
    }

    #[test]
    fn end_land_must_leave_headroom() {
        let mut p = phases();
        p.end_land = 4999;
        assert!(p.validate("t", 5000).is_err());
    }
}
