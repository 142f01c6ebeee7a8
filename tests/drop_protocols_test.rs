// ABOUTME: Drop-landing and drop-jump pipeline tests on synthetic impact profiles
// ABOUTME: Covers loading rate, seeded Euler integration, rebound outcomes, and the landing fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, drop_jump_trace, drop_landing_trace};
use grfmetrics::analysis::kinematics::{euler_integrate, impact_velocity};
use grfmetrics::analysis::outcomes::{drop_jump, drop_landing};
use grfmetrics::{
    BodyMass, DualTrace, ForceTrace, MovementType, PlateSetup, TrialContext,
};

const MASS_KG: f64 = 72.0;

fn landing_context(plates: PlateSetup) -> TrialContext {
    TrialContext::new(
        MovementType::DropLanding,
        plates,
        1000.0,
        BodyMass::MeasuredKg(MASS_KG),
        None,
    )
    .unwrap()
}

fn jump_context(plates: PlateSetup) -> TrialContext {
    TrialContext::new(
        MovementType::DropJump,
        plates,
        1000.0,
        BodyMass::MeasuredKg(MASS_KG),
        Some(0.30),
    )
    .unwrap()
}

// === Drop landing ===

#[test]
fn drop_landing_outcomes_match_the_synthetic_peak() {
    let trace = drop_landing_trace();
    let (phases, record) =
        drop_landing::analyze_single("dl_01", &trace, &landing_context(PlateSetup::Single), None)
            .unwrap();

    assert_eq!(phases.impact, 800);
    assert_close(record.get("bodymass").unwrap(), MASS_KG, 1e-9, "mass");
    assert_close(record.get("peak_force_n").unwrap(), 1800.0, 1e-6, "peak");
    assert_close(
        record.get("peak_force_nkg").unwrap(),
        1800.0 / MASS_KG,
        0.001,
        "relative peak",
    );

    // Peak sits 20 ms after impact: loading rate = (peak/BW) / 0.020 s
    let weight = MASS_KG * 9.81;
    let expected = (1800.0 / weight) / 0.020;
    assert_close(
        record.get("loading_rate_bw_s").unwrap(),
        expected,
        0.5,
        "loading rate",
    );
}

#[test]
fn dual_drop_landing_reports_per_plate_peaks() {
    let total = drop_landing_trace();
    let left: Vec<f64> = total.samples().iter().map(|f| f * 0.45).collect();
    let right: Vec<f64> = total.samples().iter().map(|f| f * 0.55).collect();
    let dual = DualTrace::new(
        ForceTrace::new(left, 1000.0),
        ForceTrace::new(right, 1000.0),
    );

    let (_, record) =
        drop_landing::analyze_dual("dl_dual", &dual, &landing_context(PlateSetup::Dual)).unwrap();

    assert_eq!(record.values().len(), 10);
    assert_close(record.get("total_peak_force_n").unwrap(), 1800.0, 1e-6, "total");
    assert_close(record.get("left_peak_force_n").unwrap(), 810.0, 1e-6, "left");
    assert_close(record.get("right_peak_force_n").unwrap(), 990.0, 1e-6, "right");
    assert!(record.get("left_loading_rate_bw_s").unwrap() > 0.0);
}

#[test]
fn peak_before_impact_is_rejected() {
    // A spurious spike before the drop would put the "peak" before impact.
    let mut f = vec![0.0; 400];
    f[100] = 2500.0;
    f.extend(vec![1500.0; 10]);
    f.extend(vec![700.0; 1000]);
    // impact search starts at sample 500, so the peak (sample 100) precedes it
    let trace = ForceTrace::new(f, 1000.0);
    let err = drop_landing::analyze_single(
        "dl_bad",
        &trace,
        &landing_context(PlateSetup::Single),
        None,
    )
    .unwrap_err();
    assert!(err.to_string().contains("peak_force"), "{err}");
}

// === Drop jump ===

#[test]
fn seeded_euler_integration_matches_closed_form() {
    // Constant 5 m/s² for 1 s from -2 m/s → 3 m/s
    let accel = vec![5.0; 1001];
    let v = euler_integrate(&accel, 0.001, -2.0);
    assert_close(v[1000], 3.0, 0.01, "euler final velocity");
}

#[test]
fn drop_jump_record_is_complete_and_consistent() {
    let trace = drop_jump_trace();
    let (phases, record) =
        drop_jump::analyze_single("dj_01", &trace, &jump_context(PlateSetup::Single), None)
            .unwrap();

    assert_eq!(record.values().len(), 37);
    assert!(record.values().iter().all(|v| v.is_finite()));

    // Contact window timings from the synthetic profile
    assert_eq!(phases.ground_contact, 600);
    assert_eq!(phases.takeoff, 850);
    assert_eq!(phases.land, 1150);
    assert_close(
        record.get("groundcontact_time_s").unwrap(),
        0.25,
        0.002,
        "contact time",
    );
    assert_close(record.get("flight_time_s").unwrap(), 0.3, 0.002, "flight");

    // The settle stays under body weight, so the landing fallback applies
    assert_eq!(phases.end_land, phases.land + 500);

    // RSI = flight time / contact time
    assert_close(record.get("rsi").unwrap(), 0.3 / 0.25, 0.02, "rsi");

    // Box height reported in cm
    assert_close(record.get("box_height").unwrap(), 30.0, 1e-9, "box height");

    // Concentric onset: impact velocity -2.43 m/s against (2000 - 706.3) N
    // of net force reverses after ~135 ms of contact
    let ecc_time = record.get("ecc_time_s").unwrap();
    assert_close(ecc_time, 0.135, 0.01, "eccentric time");
    assert!(record.get("vto").unwrap() > 0.0);
    assert!(record.get("jh_cm").unwrap() > 0.0);

    // Eccentric phase descends, landing recovery descends again
    assert!(record.get("ecc_mean_velocity").unwrap() < 0.0);
    assert!(record.get("land_peak_velocity").unwrap() < 0.0);
}

#[test]
fn dual_drop_jump_splits_the_kinetic_blocks() {
    let total = drop_jump_trace();
    let left: Vec<f64> = total.samples().iter().map(|f| f * 0.5).collect();
    let right: Vec<f64> = total.samples().iter().map(|f| f * 0.5).collect();
    let dual = DualTrace::new(
        ForceTrace::new(left, 1000.0),
        ForceTrace::new(right, 1000.0),
    );

    let (_, record) =
        drop_jump::analyze_dual("dj_dual", &dual, &jump_context(PlateSetup::Dual)).unwrap();

    assert_eq!(record.values().len(), 69);
    let total_peak = record.get("total_con_peak_force_n").unwrap();
    let left_peak = record.get("left_con_peak_force_n").unwrap();
    assert_close(left_peak, total_peak / 2.0, 0.01, "even split");
}

#[test]
fn impact_velocity_is_downward_free_fall() {
    assert_close(impact_velocity(0.30), -2.426, 0.001, "0.30 m drop");
}
