// ABOUTME: Threshold-crossing phase-boundary detection for jump and drop trials
// ABOUTME: Every scan is bounds-checked and fails with the boundary name instead of running off the trace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

//! Phase-boundary detection.
//!
//! Boundaries are located with linear threshold-crossing scans. Unlike the
//! unbounded scans common in lab scripts, every search here is capped at the
//! trace bounds and converts a failed search into
//! [`AnalysisError::PhaseDetection`] carrying the boundary name, so a trial
//! that never leaves the plate (or never returns to it) is reported rather
//! than sliced at a garbage index.

use tracing::debug;

use grfmetrics_core::constants::{detection, physics::GRAVITY, stance};
use grfmetrics_core::errors::{AnalysisError, AnalysisResult};
use grfmetrics_core::models::{
    CountermovementPhases, DropLandingPhases, ForceTrace, PlateSetup,
};

use crate::stats;

/// Body-weight estimate from the quiet-stance window at the head of a trial
#[derive(Debug, Clone, Copy)]
pub struct QuietStance {
    /// Mean force over the stance window (N)
    pub bw_mean: f64,
    /// Sample standard deviation of force over the stance window (N)
    pub bw_sd: f64,
    /// Body mass derived from the mean (kg)
    pub body_mass_kg: f64,
}

impl QuietStance {
    /// Estimate body weight from the first
    /// [`stance::QUIET_STANCE_SAMPLES`] samples of the trace.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DataFormat`] when the trace is shorter than
    /// the stance window.
    pub fn estimate(trace: &ForceTrace, trial: &str) -> AnalysisResult<Self> {
        let window = stance::QUIET_STANCE_SAMPLES;
        if trace.len() < window {
            return Err(AnalysisError::data_format(
                trial,
                format!(
                    "trace has {} samples but the quiet-stance window needs {window}",
                    trace.len()
                ),
            ));
        }
        let head = &trace.samples()[..window];
        let bw_mean = stats::mean(head);
        let bw_sd = stats::sample_std(head);
        if !bw_mean.is_finite() || bw_mean <= 0.0 {
            return Err(AnalysisError::data_format(
                trial,
                format!("quiet-stance force mean {bw_mean:.1} N is not a plausible body weight"),
            ));
        }
        Ok(Self {
            bw_mean,
            bw_sd,
            body_mass_kg: bw_mean / GRAVITY,
        })
    }
}

/// First index at or after `start` where `pred` holds.
///
/// # Errors
///
/// Fails with the boundary name when `start` is already outside the slice
/// or the predicate never fires before the end.
fn scan_forward(
    samples: &[f64],
    start: usize,
    trial: &str,
    boundary: &'static str,
    pred: impl Fn(f64) -> bool,
) -> AnalysisResult<usize> {
    if start >= samples.len() {
        return Err(AnalysisError::phase_detection(
            trial,
            boundary,
            format!(
                "search start {start} is outside the {}-sample trace",
                samples.len()
            ),
        ));
    }
    samples[start..]
        .iter()
        .position(|&v| pred(v))
        .map(|offset| start + offset)
        .ok_or_else(|| {
            AnalysisError::phase_detection(
                trial,
                boundary,
                format!("no crossing found between sample {start} and the end of the trace"),
            )
        })
}

/// Last index at or before `start` where `pred` holds.
fn scan_backward(
    samples: &[f64],
    start: usize,
    trial: &str,
    boundary: &'static str,
    pred: impl Fn(f64) -> bool,
) -> AnalysisResult<usize> {
    let mut idx = start.min(samples.len().saturating_sub(1));
    loop {
        if pred(samples[idx]) {
            return Ok(idx);
        }
        if idx == 0 {
            return Err(AnalysisError::phase_detection(
                trial,
                boundary,
                format!("no crossing found between sample {start} and the start of the trace"),
            ));
        }
        idx -= 1;
    }
}

/// Locate the end-of-landing index: the body-weight crossing nearest to
/// (and at or after a short transient past) `start`.
///
/// One well-defined rule is applied regardless of which side of body weight
/// the search starts on: walk forward to the first adjacent pair that
/// straddles `bw_mean` and return the index of the at-or-above-body-weight
/// member of that pair.
fn end_landing_crossing(
    samples: &[f64],
    start: usize,
    bw_mean: f64,
    trial: &str,
) -> AnalysisResult<usize> {
    if start >= samples.len() {
        return Err(AnalysisError::phase_detection(
            trial,
            "end_land",
            format!(
                "search start {start} is outside the {}-sample trace",
                samples.len()
            ),
        ));
    }
    if samples[start] >= bw_mean {
        // Above body weight (landing transient): the crossing is the last
        // sample at or above bw before force dips under it.
        let below = scan_forward(samples, start, trial, "end_land", |f| f < bw_mean)?;
        scan_backward(samples, below, trial, "end_land", |f| f >= bw_mean)
    } else {
        // Below body weight (post-impact dip): the crossing is the first
        // sample that comes back up to bw.
        scan_forward(samples, start, trial, "end_land", |f| f >= bw_mean)
    }
}

/// Detect the phase boundaries of a countermovement trial (CMJ or SLJ).
///
/// `velocity` is the trapezoidal-integrated velocity array from
/// [`crate::kinematics::JumpKinematics`]; it shares force-trace indices to
/// within one sample.
///
/// # Errors
///
/// Returns [`AnalysisError::PhaseDetection`] naming the boundary whose
/// search failed to converge, or whose result breaks the canonical phase
/// order.
pub fn detect_countermovement(
    trace: &ForceTrace,
    velocity: &[f64],
    qs: &QuietStance,
    plates: PlateSetup,
    trial: &str,
) -> AnalysisResult<CountermovementPhases> {
    let force = trace.samples();
    let onset_threshold = qs.bw_mean - qs.bw_sd * stance::ONSET_SD_MULTIPLIER;

    let candidate = scan_forward(
        force,
        detection::ONSET_SEARCH_START,
        trial,
        "start_move",
        |f| f < onset_threshold,
    )?;
    // Snap back to the exact body-weight crossing preceding the drop
    let start_move = scan_backward(force, candidate, trial, "start_move", |f| f >= qs.bw_mean)?;

    let takeoff = scan_forward(force, start_move, trial, "takeoff", |f| {
        f < detection::UNLOADED_THRESHOLD_N
    })?;

    if takeoff > velocity.len() {
        return Err(AnalysisError::phase_detection(
            trial,
            "takeoff",
            format!("index {takeoff} exceeds the {}-sample velocity array", velocity.len()),
        ));
    }
    let start_ecc = start_move + stats::argmin(&velocity[start_move..takeoff]);

    let start_con = scan_forward(velocity, start_ecc, trial, "start_con", |v| v >= 0.0)?;

    let land = scan_forward(
        force,
        takeoff + detection::LANDING_SEARCH_OFFSET,
        trial,
        "land",
        |f| f > detection::UNLOADED_THRESHOLD_N,
    )?;

    let end_offset = match plates {
        PlateSetup::Single => detection::END_LANDING_OFFSET,
        PlateSetup::Dual => detection::END_LANDING_OFFSET_DUAL,
    };
    let end_land = end_landing_crossing(force, land + end_offset, qs.bw_mean, trial)?;

    let phases = CountermovementPhases {
        start_move,
        start_ecc,
        start_con,
        takeoff,
        land,
        end_land,
    };
    phases.validate(trial, trace.len())?;
    debug!(
        trial,
        start_move, start_ecc, start_con, takeoff, land, end_land, "countermovement boundaries"
    );
    Ok(phases)
}

/// Contact-window boundaries of a drop jump, before the concentric onset is
/// known (that requires the seeded velocity integration over the window).
#[derive(Debug, Clone, Copy)]
pub struct DropContact {
    /// First loaded sample after the drop
    pub ground_contact: usize,
    /// First unloaded sample of the rebound flight
    pub takeoff: usize,
    /// First loaded sample after rebound flight
    pub land: usize,
    /// Return to body weight after the landing transient
    pub end_land: usize,
}

/// Detect the contact window of a drop-jump trial.
///
/// # Errors
///
/// Returns [`AnalysisError::PhaseDetection`] naming the boundary whose
/// search failed to converge.
pub fn detect_drop_contact(
    trace: &ForceTrace,
    body_weight_n: f64,
    trial: &str,
) -> AnalysisResult<DropContact> {
    let force = trace.samples();

    let ground_contact = scan_forward(
        force,
        detection::DROP_SEARCH_START,
        trial,
        "ground_contact",
        |f| f > detection::UNLOADED_THRESHOLD_N,
    )?;
    let takeoff = scan_forward(force, ground_contact + 1, trial, "takeoff", |f| {
        f < detection::UNLOADED_THRESHOLD_N
    })?;
    let land = scan_forward(
        force,
        takeoff + detection::DROP_JUMP_LANDING_OFFSET,
        trial,
        "land",
        |f| f > detection::UNLOADED_THRESHOLD_N,
    )?;

    let crossing = end_landing_crossing(
        force,
        land + detection::END_LANDING_OFFSET_DROP_JUMP,
        body_weight_n,
        trial,
    );
    // The settle back to body weight can be missing entirely when the
    // athlete steps off the plate; fall back to a fixed landing width.
    let end_land = match crossing {
        Ok(idx) if idx > land => idx,
        _ => land + detection::DROP_JUMP_LANDING_FALLBACK,
    };
    if end_land >= force.len() {
        return Err(AnalysisError::phase_detection(
            trial,
            "end_land",
            format!(
                "landing fallback index {end_land} exceeds the {}-sample trace",
                force.len()
            ),
        ));
    }

    debug!(trial, ground_contact, takeoff, land, end_land, "drop-jump contact window");
    Ok(DropContact {
        ground_contact,
        takeoff,
        land,
        end_land,
    })
}

/// First sample where velocity turns non-negative within a contact window
/// (the concentric onset of a drop jump), as an offset into the window.
///
/// # Errors
///
/// Returns [`AnalysisError::PhaseDetection`] when the velocity never
/// crosses zero inside the window.
pub fn concentric_onset_in_window(
    window_velocity: &[f64],
    trial: &str,
) -> AnalysisResult<usize> {
    scan_forward(window_velocity, 1, trial, "start_con", |v| v >= 0.0)
}

/// Detect the impact index of a drop-landing trial.
///
/// # Errors
///
/// Returns [`AnalysisError::PhaseDetection`] when no loaded sample follows
/// the search offset.
pub fn detect_drop_landing(trace: &ForceTrace, trial: &str) -> AnalysisResult<DropLandingPhases> {
    let impact = scan_forward(
        trace.samples(),
        detection::DROP_SEARCH_START,
        trial,
        "impact",
        |f| f > detection::UNLOADED_THRESHOLD_N,
    )?;
    Ok(DropLandingPhases { impact })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Quiet stance at 700 N, dip, push, flight, landing spike, settle.
    fn synthetic_cmj() -> ForceTrace {
        let mut f = vec![700.0; 1500];
        f.extend(vec![400.0; 300]); // unweighting / eccentric
        f.extend(vec![1200.0; 300]); // concentric drive
        f.extend(vec![0.0; 400]); // flight
        f.extend(vec![1500.0; 150]); // landing spike
        f.extend(vec![698.0; 1350]); // settle just under body weight
        ForceTrace::new(f, 1000.0)
    }

    #[test]
    fn quiet_stance_estimates_mass() {
        let trace = synthetic_cmj();
        let qs = QuietStance::estimate(&trace, "t").unwrap();
        assert!((qs.bw_mean - 700.0).abs() < 1e-9);
        assert!((qs.body_mass_kg - 700.0 / 9.81).abs() < 1e-6);
    }

    #[test]
    fn quiet_stance_rejects_short_traces() {
        let trace = ForceTrace::new(vec![700.0; 100], 1000.0);
        assert!(QuietStance::estimate(&trace, "t").is_err());
    }

    #[test]
    fn countermovement_boundaries_land_where_expected() {
        let trace = synthetic_cmj();
        let qs = QuietStance::estimate(&trace, "t").unwrap();
        let kin = crate::kinematics::JumpKinematics::derive(&trace, qs.bw_mean, qs.body_mass_kg);
        let phases =
            detect_countermovement(&trace, &kin.velocity, &qs, PlateSetup::Single, "t").unwrap();

        // Unweighting starts at the step down to 400 N (snapped back to the
        // last body-weight sample) and takeoff at the step to 0 N.
        assert!(phases.start_move >= 1499 && phases.start_move <= 1500);
        assert_eq!(phases.takeoff, 2100);
        assert_eq!(phases.land, 2500);
        assert!(phases.start_ecc > phases.start_move && phases.start_ecc < phases.takeoff);
        assert!(phases.start_con > phases.start_ecc && phases.start_con < phases.takeoff);
        assert!(phases.end_land > phases.land);
    }

    #[test]
    fn flat_trace_reports_missing_onset() {
        let trace = ForceTrace::new(vec![700.0; 4000], 1000.0);
        let qs = QuietStance::estimate(&trace, "t").unwrap();
        let kin = crate::kinematics::JumpKinematics::derive(&trace, qs.bw_mean, qs.body_mass_kg);
        let err = detect_countermovement(&trace, &kin.velocity, &qs, PlateSetup::Single, "flat")
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("start_move"), "{msg}");
        assert!(msg.contains("flat"), "{msg}");
    }

    #[test]
    fn trial_that_never_lands_reports_land_boundary() {
        let mut f = vec![700.0; 1500];
        f.extend(vec![400.0; 300]);
        f.extend(vec![1200.0; 300]);
        f.extend(vec![0.0; 1000]); // flight runs to the end of the record
        let trace = ForceTrace::new(f, 1000.0);
        let qs = QuietStance::estimate(&trace, "t").unwrap();
        let kin = crate::kinematics::JumpKinematics::derive(&trace, qs.bw_mean, qs.body_mass_kg);
        let err = detect_countermovement(&trace, &kin.velocity, &qs, PlateSetup::Single, "t")
            .unwrap_err();
        assert!(err.to_string().contains("'land'"), "{err}");
    }

    #[test]
    fn drop_landing_impact_is_first_loaded_sample() {
        let mut f = vec![0.0; 800];
        f.extend(vec![1600.0; 200]);
        f.extend(vec![700.0; 500]);
        let trace = ForceTrace::new(f, 1000.0);
        let phases = detect_drop_landing(&trace, "t").unwrap();
        assert_eq!(phases.impact, 800);
    }

    #[test]
    fn drop_contact_uses_fallback_when_settle_never_happens() {
        // Contact, rebound flight, landing spike, then the force stays low
        // (athlete steps off) so the body-weight settle never occurs.
        let mut f = vec![0.0; 600];
        f.extend(vec![1400.0; 200]); // contact
        f.extend(vec![0.0; 300]); // flight
        f.extend(vec![900.0; 100]); // brief landing spike
        f.extend(vec![10.0; 600]); // stepped off
        let trace = ForceTrace::new(f, 1000.0);
        let contact = detect_drop_contact(&trace, 700.0, "t").unwrap();
        assert_eq!(contact.ground_contact, 600);
        assert_eq!(contact.takeoff, 800);
        assert_eq!(contact.end_land, contact.land + 500);
    }
}
