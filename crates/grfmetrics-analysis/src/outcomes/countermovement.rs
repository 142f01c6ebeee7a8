// ABOUTME: Outcome extraction for countermovement protocols (CMJ and SLJ)
// ABOUTME: Single-plate and dual-plate variants share boundaries from the (total) trace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

use tracing::info;

use grfmetrics_core::constants::physics::GRAVITY;
use grfmetrics_core::errors::AnalysisResult;
use grfmetrics_core::models::{
    CountermovementPhases, DualTrace, ForceTrace, OutcomeRecord, PlateSetup, Side, TrialContext,
};

use super::{duration, impulse, rfd};
use crate::kinematics::JumpKinematics;
use crate::phases::{detect_countermovement, QuietStance};
use crate::stats;

/// Phase durations shared by every outcome block
#[derive(Debug, Clone, Copy)]
struct PhaseTimes {
    unweigh: f64,
    ecc: f64,
    con: f64,
    contraction: f64,
    flight: f64,
    land: f64,
}

impl PhaseTimes {
    fn of(trace: &ForceTrace, p: &CountermovementPhases) -> Self {
        Self {
            unweigh: duration(trace, p.start_move, p.start_ecc),
            ecc: duration(trace, p.start_ecc, p.start_con),
            con: duration(trace, p.start_con, p.takeoff),
            contraction: duration(trace, p.start_move, p.takeoff),
            flight: duration(trace, p.takeoff, p.land),
            land: duration(trace, p.land, p.end_land),
        }
    }
}

/// The per-plate kinetic block: peak/mean force (absolute and relative),
/// impulses, and RFDs, in the order the schemas list them.
fn kinetic_block(
    force: &[f64],
    p: &CountermovementPhases,
    times: &PhaseTimes,
    mass: f64,
    sf: f64,
) -> Vec<f64> {
    let ecc_fz = &force[p.start_ecc..p.start_con];
    let con_fz = &force[p.start_con..p.takeoff];
    let land_fz = &force[p.land..p.end_land];
    let positive_fz = &force[p.start_ecc..p.takeoff];

    let con_peak = stats::max(con_fz);
    let con_mean = stats::mean(con_fz);
    let ecc_peak = stats::max(ecc_fz);
    let ecc_mean = stats::mean(ecc_fz);
    let land_peak = stats::max(land_fz);
    let land_mean = stats::mean(land_fz);
    vec![
        con_peak,
        con_peak / mass,
        ecc_peak,
        ecc_peak / mass,
        con_mean,
        con_mean / mass,
        ecc_mean,
        ecc_mean / mass,
        land_peak,
        land_peak / mass,
        land_mean,
        land_mean / mass,
        impulse(con_fz, sf),
        impulse(ecc_fz, sf),
        impulse(positive_fz, sf),
        impulse(land_fz, sf),
        // Concentric RFD is start-minus-end: force falls toward zero at
        // takeoff, and the metric is reported as a positive build-up rate.
        rfd(force[p.start_con] - force[p.takeoff], times.con),
        rfd(force[p.start_con] - force[p.start_ecc], times.ecc),
        rfd(force[p.end_land] - force[p.land], times.land),
    ]
}

/// Shared temporal/velocity/performance tail of the countermovement schemas
fn shared_outcomes(kin: &JumpKinematics, p: &CountermovementPhases, times: &PhaseTimes) -> Vec<f64> {
    let ecc_velo = &kin.velocity[p.start_ecc..p.start_con];
    let con_velo = &kin.velocity[p.start_con..p.takeoff];
    let land_velo = &kin.velocity[p.land..p.end_land];

    let vto = kin.velocity[p.takeoff];
    let depth_m = stats::min(&kin.position[p.start_move..p.takeoff]);

    vec![
        times.unweigh,
        times.ecc,
        times.con,
        times.contraction,
        times.flight,
        times.land,
        stats::max(con_velo),
        stats::min(ecc_velo),
        stats::min(land_velo),
        stats::mean(con_velo),
        stats::mean(ecc_velo),
        vto,
        depth_m * 100.0,
    ]
}

/// Power block common to both plate setups (computed on the total trace)
fn power_block(kin: &JumpKinematics, p: &CountermovementPhases) -> Vec<f64> {
    let ecc_power = &kin.power[p.start_ecc..p.start_con];
    let con_power = &kin.power[p.start_con..p.takeoff];
    let land_power = &kin.power[p.land..p.end_land];
    vec![
        stats::max(con_power),
        stats::min(ecc_power),
        stats::max(land_power),
        stats::mean(con_power),
        stats::mean(ecc_power),
        stats::mean(land_power),
    ]
}

/// Resolve body mass: an externally measured value wins over the
/// quiet-stance derivation.
fn resolve_mass(ctx: &TrialContext, qs: &QuietStance) -> f64 {
    ctx.measured_mass_kg().unwrap_or(qs.body_mass_kg)
}

/// Analyze a single-plate countermovement trial (CMJ or SLJ).
///
/// # Errors
///
/// Propagates quiet-stance estimation and phase-detection failures; the
/// caller treats these as fatal to this trial only.
pub fn analyze_single(
    trial: &str,
    trace: &ForceTrace,
    ctx: &TrialContext,
    side: Option<Side>,
) -> AnalysisResult<(CountermovementPhases, OutcomeRecord)> {
    let qs = QuietStance::estimate(trace, trial)?;
    let mass = resolve_mass(ctx, &qs);
    let kin = JumpKinematics::derive(trace, qs.bw_mean, mass);
    let p = detect_countermovement(trace, &kin.velocity, &qs, PlateSetup::Single, trial)?;

    let sf = trace.sample_rate_hz();
    let times = PhaseTimes::of(trace, &p);

    let vto = kin.velocity[p.takeoff];
    let jh_m = vto * vto / (2.0 * GRAVITY);

    let mut values = vec![mass, jh_m * 100.0, jh_m / times.contraction];
    values.extend(power_block(&kin, &p));
    values.extend(kinetic_block(trace.samples(), &p, &times, mass, sf));
    values.extend(shared_outcomes(&kin, &p, &times));

    let record = OutcomeRecord::new(trial, ctx.movement, PlateSetup::Single, side, values)?;
    info!(
        trial,
        jump_height_cm = jh_m * 100.0,
        mass_kg = mass,
        "countermovement trial analyzed"
    );
    Ok((p, record))
}

/// Analyze a dual-plate countermovement trial. Boundaries come from the
/// summed trace; left and right kinetic blocks reuse them.
///
/// # Errors
///
/// Propagates quiet-stance estimation and phase-detection failures.
pub fn analyze_dual(
    trial: &str,
    dual: &DualTrace,
    ctx: &TrialContext,
) -> AnalysisResult<(CountermovementPhases, OutcomeRecord)> {
    let total = &dual.total;
    let qs = QuietStance::estimate(total, trial)?;
    let mass = resolve_mass(ctx, &qs);
    let kin = JumpKinematics::derive(total, qs.bw_mean, mass);
    let p = detect_countermovement(total, &kin.velocity, &qs, PlateSetup::Dual, trial)?;

    let sf = total.sample_rate_hz();
    let times = PhaseTimes::of(total, &p);

    let vto = kin.velocity[p.takeoff];
    let jh_m = vto * vto / (2.0 * GRAVITY);

    let mut values = vec![mass, jh_m * 100.0, jh_m / times.contraction];
    values.extend(power_block(&kin, &p));
    // Total, left, right kinetic blocks against the shared boundaries;
    // relative values all use total body mass.
    for force in [total.samples(), dual.left.samples(), dual.right.samples()] {
        values.extend(kinetic_block(force, &p, &times, mass, sf));
    }
    values.extend(shared_outcomes(&kin, &p, &times));

    let record = OutcomeRecord::new(trial, ctx.movement, PlateSetup::Dual, None, values)?;
    info!(trial, jump_height_cm = jh_m * 100.0, "dual-plate countermovement trial analyzed");
    Ok((p, record))
}
