// ABOUTME: Table export tests: individual/average/side-average CSV shape and retry semantics
// ABOUTME: Uses the synthetic single-leg scenario to cover the unilateral reporting path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::cmj_trace;
use grfmetrics::export::{write_average_table, write_side_average_table, write_trial_table};
use grfmetrics::{
    AnalysisError, AnalysisSession, BodyMass, MovementType, PlateSetup, Side, TrialContext,
    TrialInput,
};

fn slj_session_with_both_sides() -> AnalysisSession {
    let ctx = TrialContext::new(
        MovementType::Slj,
        PlateSetup::Single,
        1000.0,
        BodyMass::FromQuietStance,
        None,
    )
    .unwrap();
    let mut session = AnalysisSession::new(ctx);
    let input = TrialInput::Single(cmj_trace());
    session
        .process_trial("slj_LEFT_01", Some(Side::Left), &input)
        .unwrap();
    session
        .process_trial("slj_LEFT_02", Some(Side::Left), &input)
        .unwrap();
    session
        .process_trial("slj_RIGHT_01", Some(Side::Right), &input)
        .unwrap();
    session
}

#[test]
fn individual_table_has_one_column_per_trial() {
    let session = slj_session_with_both_sides();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("individual.csv");
    write_trial_table(&path, session.table()).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Variable,slj_LEFT_01,slj_LEFT_02,slj_RIGHT_01"
    );
    // 41 metric rows follow the header
    assert_eq!(lines.count(), 41);
    assert!(content.contains("Jump Height (cm)"));
}

#[test]
fn side_average_table_carries_lsi_columns() {
    let session = slj_session_with_both_sides();
    let sides = session.table().side_averages().unwrap();
    assert!(sides.issues.is_empty(), "{:?}", sides.issues);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("average.csv");
    write_side_average_table(&path, &sides).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next().unwrap(), "Variable,Left,Right,L/R LSI,R/L LSI");
    // body-mass row excluded from the side table
    assert_eq!(lines.count(), 40);
    assert!(!content.contains("Body Mass"));

    // identical trials on both sides → every defined ratio is 1
    for row in &sides.rows {
        if let Some(lr) = row.left_right_lsi {
            assert!((lr - 1.0).abs() < 1e-9, "{}: {lr}", row.label);
        }
    }
}

#[test]
fn plain_average_table_writes_every_row() {
    let session = slj_session_with_both_sides();
    let avg = session.table().average().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("average.csv");
    write_average_table(&path, &avg).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Variable,Average"));
    assert_eq!(content.lines().count(), 42);
}

#[test]
fn export_failure_leaves_the_session_intact() {
    let session = slj_session_with_both_sides();
    let err =
        write_trial_table(std::path::Path::new("/no/such/dir/t.csv"), session.table())
            .unwrap_err();
    assert!(matches!(err, AnalysisError::Export { .. }));
    // state preserved: a retry to a valid destination succeeds
    let dir = tempfile::tempdir().unwrap();
    write_trial_table(&dir.path().join("t.csv"), session.table()).unwrap();
    assert_eq!(session.table().trial_count(), 3);
}
