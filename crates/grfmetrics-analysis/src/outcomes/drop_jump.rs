// ABOUTME: Outcome extraction for drop-jump trials (single and dual plate)
// ABOUTME: Contact-window kinematics are seeded with the free-fall impact velocity from box height
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

use tracing::info;

use grfmetrics_core::constants::physics::GRAVITY;
use grfmetrics_core::errors::{AnalysisError, AnalysisResult};
use grfmetrics_core::models::{
    DropJumpPhases, DualTrace, ForceTrace, OutcomeRecord, PlateSetup, Side, TrialContext,
};

use super::{duration, impulse};
use crate::kinematics::ContactKinematics;
use crate::phases::{concentric_onset_in_window, detect_drop_contact};
use crate::stats;

/// Force block of the drop-jump schemas: peak/mean force per phase plus the
/// four impulses, 16 values per plate.
fn kinetic_block(force: &[f64], p: &DropJumpPhases, mass: f64, sf: f64) -> Vec<f64> {
    let ecc_fz = &force[p.ground_contact..p.start_con];
    let con_fz = &force[p.start_con..p.takeoff];
    let land_fz = &force[p.land..p.end_land];
    let positive_fz = &force[p.ground_contact..p.takeoff];

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
    ]
}

/// Everything derived from one trace's contact window: boundaries, window
/// velocity, and the temporal/velocity/performance outcomes shared by both
/// plate setups.
struct ContactAnalysis {
    phases: DropJumpPhases,
    velocity: Vec<f64>,
}

impl ContactAnalysis {
    fn run(trace: &ForceTrace, ctx: &TrialContext, trial: &str) -> AnalysisResult<Self> {
        let mass = ctx.measured_mass_kg().ok_or_else(|| {
            AnalysisError::configuration("drop-jump analysis requires a measured body mass")
        })?;
        let drop_height = ctx.drop_height_m.ok_or_else(|| {
            AnalysisError::configuration("drop-jump analysis requires a drop height")
        })?;
        let weight = mass * GRAVITY;

        let contact = detect_drop_contact(trace, weight, trial)?;
        let window = &trace.samples()[contact.ground_contact..contact.end_land];
        let kin = ContactKinematics::derive(window, trace.dt(), weight, mass, drop_height);
        let start_con_rel = concentric_onset_in_window(&kin.velocity, trial)?;

        let phases = DropJumpPhases {
            ground_contact: contact.ground_contact,
            start_con: contact.ground_contact + start_con_rel,
            takeoff: contact.takeoff,
            land: contact.land,
            end_land: contact.end_land,
        };
        phases.validate(trial, trace.len())?;
        Ok(Self {
            phases,
            velocity: kin.velocity,
        })
    }

    /// Window-relative index of a full-trace sample index
    fn rel(&self, index: usize) -> usize {
        index - self.phases.ground_contact
    }
}

/// Assemble the full value vector for one drop-jump trial; the kinetic
/// blocks (one per plate for dual) are passed in already ordered.
fn assemble(
    trace: &ForceTrace,
    ctx: &TrialContext,
    analysis: &ContactAnalysis,
    kinetic_blocks: Vec<f64>,
    mass: f64,
) -> Vec<f64> {
    let p = &analysis.phases;
    let v = &analysis.velocity;

    let ecc_velo = &v[..analysis.rel(p.start_con)];
    let con_velo = &v[analysis.rel(p.start_con)..analysis.rel(p.takeoff)];
    let land_velo = &v[analysis.rel(p.land)..];

    let ecc_fz = &trace.samples()[p.ground_contact..p.start_con];
    let con_fz = &trace.samples()[p.start_con..p.takeoff];
    let land_fz = &trace.samples()[p.land..p.end_land];

    let ecc_power: Vec<f64> = ecc_velo.iter().zip(ecc_fz).map(|(v, f)| v * f).collect();
    let con_power: Vec<f64> = con_velo.iter().zip(con_fz).map(|(v, f)| v * f).collect();
    let land_power: Vec<f64> = land_velo.iter().zip(land_fz).map(|(v, f)| v * f).collect();

    let groundcontact_time = duration(trace, p.ground_contact, p.takeoff);
    let ecc_time = duration(trace, p.ground_contact, p.start_con);
    let con_time = duration(trace, p.start_con, p.takeoff);
    let flight_time = duration(trace, p.takeoff, p.land);
    let land_time = duration(trace, p.land, p.end_land);

    let vto = v[analysis.rel(p.takeoff)];
    let jh_m = vto * vto / (2.0 * GRAVITY);
    let rsi = flight_time / groundcontact_time;
    let box_height_cm = ctx.drop_height_m.unwrap_or_default() * 100.0;

    let mut values = vec![mass, box_height_cm, jh_m * 100.0, rsi];
    values.extend([
        stats::max(&con_power),
        stats::min(&ecc_power),
        stats::min(&land_power),
        stats::mean(&con_power),
        stats::mean(&ecc_power),
        stats::mean(&land_power),
    ]);
    values.extend(kinetic_blocks);
    values.extend([
        groundcontact_time,
        ecc_time,
        con_time,
        flight_time,
        land_time,
        stats::max(con_velo),
        stats::min(land_velo),
        stats::mean(land_velo),
        stats::mean(con_velo),
        stats::mean(ecc_velo),
        vto,
    ]);
    values
}

/// Analyze a single-plate drop jump.
///
/// # Errors
///
/// Propagates phase-detection failures and missing configuration.
pub fn analyze_single(
    trial: &str,
    trace: &ForceTrace,
    ctx: &TrialContext,
    side: Option<Side>,
) -> AnalysisResult<(DropJumpPhases, OutcomeRecord)> {
    let mass = ctx.measured_mass_kg().ok_or_else(|| {
        AnalysisError::configuration("drop-jump analysis requires a measured body mass")
    })?;
    let analysis = ContactAnalysis::run(trace, ctx, trial)?;
    let sf = trace.sample_rate_hz();
    let block = kinetic_block(trace.samples(), &analysis.phases, mass, sf);
    let values = assemble(trace, ctx, &analysis, block, mass);
    let record = OutcomeRecord::new(trial, ctx.movement, PlateSetup::Single, side, values)?;
    info!(trial, "drop-jump trial analyzed");
    Ok((analysis.phases, record))
}

/// Analyze a dual-plate drop jump: boundaries and kinematics from the
/// summed trace, kinetic blocks for total, left, and right.
///
/// # Errors
///
/// Propagates phase-detection failures and missing configuration.
pub fn analyze_dual(
    trial: &str,
    dual: &DualTrace,
    ctx: &TrialContext,
) -> AnalysisResult<(DropJumpPhases, OutcomeRecord)> {
    let mass = ctx.measured_mass_kg().ok_or_else(|| {
        AnalysisError::configuration("drop-jump analysis requires a measured body mass")
    })?;
    let total = &dual.total;
    let analysis = ContactAnalysis::run(total, ctx, trial)?;
    let sf = total.sample_rate_hz();

    let mut blocks = Vec::with_capacity(48);
    for force in [total.samples(), dual.left.samples(), dual.right.samples()] {
        blocks.extend(kinetic_block(force, &analysis.phases, mass, sf));
    }
    let values = assemble(total, ctx, &analysis, blocks, mass);
    let record = OutcomeRecord::new(trial, ctx.movement, PlateSetup::Dual, None, values)?;
    info!(trial, "dual-plate drop-jump trial analyzed");
    Ok((analysis.phases, record))
}
