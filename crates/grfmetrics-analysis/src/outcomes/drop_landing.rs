// ABOUTME: Outcome extraction for drop-landing trials (land-and-hold)
// ABOUTME: Peak landing force, relative force, and body-weight-normalized loading rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

use tracing::info;

use grfmetrics_core::constants::physics::GRAVITY;
use grfmetrics_core::errors::{AnalysisError, AnalysisResult};
use grfmetrics_core::models::{
    DropLandingPhases, DualTrace, ForceTrace, OutcomeRecord, PlateSetup, Side, TrialContext,
};

use crate::phases::detect_drop_landing;
use crate::stats;

/// Peak force and loading rate of one plate's record.
///
/// Loading rate is the body-weight-normalized peak divided by the time from
/// impact to peak.
struct PlatePeak {
    peak_n: f64,
    loading_rate_bw_s: f64,
}

fn plate_peak(
    force: &[f64],
    sample_rate_hz: f64,
    impact: usize,
    weight_n: f64,
    trial: &str,
) -> AnalysisResult<PlatePeak> {
    let peak_idx = stats::argmax(force);
    let peak_n = force[peak_idx];
    let time_to_peak = (peak_idx as f64 - impact as f64) / sample_rate_hz;
    if time_to_peak <= 0.0 {
        return Err(AnalysisError::phase_detection(
            trial,
            "peak_force",
            "peak force does not follow impact; loading rate is undefined",
        ));
    }
    Ok(PlatePeak {
        peak_n,
        loading_rate_bw_s: (peak_n / weight_n) / time_to_peak,
    })
}

/// Analyze a single-plate drop landing.
///
/// # Errors
///
/// Fails when no impact is found or the force peak precedes it.
pub fn analyze_single(
    trial: &str,
    trace: &ForceTrace,
    ctx: &TrialContext,
    side: Option<Side>,
) -> AnalysisResult<(DropLandingPhases, OutcomeRecord)> {
    let mass = ctx.measured_mass_kg().ok_or_else(|| {
        AnalysisError::configuration("drop-landing analysis requires a measured body mass")
    })?;
    let weight = mass * GRAVITY;
    let phases = detect_drop_landing(trace, trial)?;
    let peak = plate_peak(
        trace.samples(),
        trace.sample_rate_hz(),
        phases.impact,
        weight,
        trial,
    )?;

    let values = vec![
        mass,
        peak.peak_n,
        peak.peak_n / mass,
        peak.loading_rate_bw_s,
    ];
    let record = OutcomeRecord::new(trial, ctx.movement, PlateSetup::Single, side, values)?;
    info!(trial, peak_n = peak.peak_n, "drop-landing trial analyzed");
    Ok((phases, record))
}

/// Analyze a dual-plate drop landing: impact from the summed trace, peak
/// metrics per plate and for the total.
///
/// # Errors
///
/// Fails when no impact is found or any plate's peak precedes it.
pub fn analyze_dual(
    trial: &str,
    dual: &DualTrace,
    ctx: &TrialContext,
) -> AnalysisResult<(DropLandingPhases, OutcomeRecord)> {
    let mass = ctx.measured_mass_kg().ok_or_else(|| {
        AnalysisError::configuration("drop-landing analysis requires a measured body mass")
    })?;
    let weight = mass * GRAVITY;
    let total = &dual.total;
    let phases = detect_drop_landing(total, trial)?;
    let sf = total.sample_rate_hz();

    let total_peak = plate_peak(total.samples(), sf, phases.impact, weight, trial)?;
    let left_peak = plate_peak(dual.left.samples(), sf, phases.impact, weight, trial)?;
    let right_peak = plate_peak(dual.right.samples(), sf, phases.impact, weight, trial)?;

    let values = vec![
        mass,
        total_peak.peak_n,
        total_peak.peak_n / mass,
        left_peak.peak_n,
        left_peak.peak_n / mass,
        right_peak.peak_n,
        right_peak.peak_n / mass,
        total_peak.loading_rate_bw_s,
        left_peak.loading_rate_bw_s,
        right_peak.loading_rate_bw_s,
    ];
    let record = OutcomeRecord::new(trial, ctx.movement, PlateSetup::Dual, None, values)?;
    info!(trial, "dual-plate drop-landing trial analyzed");
    Ok((phases, record))
}
