// ABOUTME: End-to-end tests of the countermovement pipeline on a synthetic trial
// ABOUTME: Exercises detection, integration, outcome extraction, and the jump-height kinematics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, cmj_trace};
use grfmetrics::analysis::outcomes::countermovement;
use grfmetrics::{
    AnalysisSession, BodyMass, ForceTrace, MovementType, PlateSetup, Side, TrialContext,
    TrialInput,
};

fn cmj_context() -> TrialContext {
    TrialContext::new(
        MovementType::Cmj,
        PlateSetup::Single,
        1000.0,
        BodyMass::FromQuietStance,
        None,
    )
    .unwrap()
}

// === Full record on the synthetic scenario ===

#[test]
fn synthetic_cmj_produces_complete_record() {
    let trace = cmj_trace();
    let (phases, record) =
        countermovement::analyze_single("cmj_01", &trace, &cmj_context(), None).unwrap();

    // Body weight 700 N over 9.81 gives ≈ 71.36 kg
    assert_close(record.get("bodymass").unwrap(), 71.356, 0.05, "bodymass");

    // All 41 schema values present and finite
    assert_eq!(record.values().len(), 41);
    assert!(record.values().iter().all(|v| v.is_finite()));

    // The jump goes up
    assert!(record.get("jh_cm").unwrap() > 0.0, "jump height positive");
    assert!(record.get("vto").unwrap() > 0.0, "takeoff velocity positive");

    // Phase durations match the synthetic segment lengths
    assert_close(record.get("flight_time_s").unwrap(), 0.4, 0.005, "flight");
    assert_close(
        record.get("contraction_time_s").unwrap(),
        0.6,
        0.01,
        "contraction",
    );
    let unweigh = record.get("unweigh_dur").unwrap();
    let ecc = record.get("ecc_time_s").unwrap();
    let con = record.get("con_time_s").unwrap();
    assert_close(
        unweigh + ecc + con,
        record.get("contraction_time_s").unwrap(),
        0.005,
        "phase durations sum to contraction time",
    );

    // Sign conventions
    assert!(record.get("ecc_peak_velocity").unwrap() < 0.0);
    assert!(record.get("con_peak_velocity").unwrap() > 0.0);
    assert!(record.get("ecc_peak_power").unwrap() < 0.0);
    assert!(record.get("con_peak_power").unwrap() > 0.0);
    assert!(record.get("cm_depth").unwrap() < 0.0, "depth is below stance");

    // Forces read straight off the synthetic plateaus
    assert_close(
        record.get("con_peak_force_n").unwrap(),
        1200.0,
        1.0,
        "concentric peak force",
    );
    assert_close(
        record.get("land_peak_force_n").unwrap(),
        1500.0,
        1.0,
        "landing peak force",
    );

    // Boundary ordering survived into the record's phase set
    assert!(phases.start_move < phases.start_ecc);
    assert!(phases.end_land > phases.land);
}

// === Jump-height kinematics ===

#[test]
fn jump_height_follows_projectile_kinematics() {
    let trace = cmj_trace();
    let (_, record) =
        countermovement::analyze_single("cmj_01", &trace, &cmj_context(), None).unwrap();

    let vto = record.get("vto").unwrap();
    let expected_jh_cm = vto * vto / (2.0 * 9.81) * 100.0;
    // both stored at 3 decimals; allow for the independent rounding
    assert_close(record.get("jh_cm").unwrap(), expected_jh_cm, 0.01, "jh_cm");
}

#[test]
fn two_metres_per_second_gives_20_39_cm() {
    // Known reference point: vto = 2.0 m/s lands at ≈ 20.39 cm
    let jh_cm = 2.0_f64 * 2.0 / (2.0 * 9.81) * 100.0;
    assert_close(jh_cm, 20.387, 0.001, "closed-form jump height");
}

// === mRSI consistency ===

#[test]
fn mrsi_is_jump_height_over_contraction_time() {
    let trace = cmj_trace();
    let (_, record) =
        countermovement::analyze_single("cmj_01", &trace, &cmj_context(), None).unwrap();
    let jh_m = record.get("jh_cm").unwrap() / 100.0;
    let contraction = record.get("contraction_time_s").unwrap();
    assert_close(
        record.get("mrsi").unwrap(),
        jh_m / contraction,
        0.005,
        "mrsi",
    );
}

// === Session containment ===

#[test]
fn session_reports_failures_without_touching_the_table() {
    let mut session = AnalysisSession::new(cmj_context());

    // a good trial, then a trace that never moves
    session
        .process_trial("good", None, &TrialInput::Single(cmj_trace()))
        .unwrap();
    let flat = ForceTrace::new(vec![700.0; 4000], 1000.0);
    assert!(session
        .process_trial("flatline", None, &TrialInput::Single(flat))
        .is_err());

    assert_eq!(session.table().trial_count(), 1);
    assert_eq!(session.failures().len(), 1);
    assert_eq!(session.failures()[0].trial, "flatline");
    let msg = session.failures()[0].error.to_string();
    assert!(msg.contains("start_move"), "{msg}");
}

#[test]
fn slj_records_carry_their_side_tag() {
    let ctx = TrialContext::new(
        MovementType::Slj,
        PlateSetup::Single,
        1000.0,
        BodyMass::FromQuietStance,
        None,
    )
    .unwrap();
    let (_, record) =
        countermovement::analyze_single("slj_LEFT_01", &cmj_trace(), &ctx, Some(Side::Left))
            .unwrap();
    assert_eq!(record.side(), Some(Side::Left));
    assert_eq!(record.values().len(), 41);
}
