// ABOUTME: CSV ingestion of force-plate trials and isometric signals
// ABOUTME: Column selection by zero-based index; malformed data fails the trial, never the session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

//! Trial-file ingestion.
//!
//! Jump and drop trials arrive as headered CSV exports from the plate
//! software, one force channel per column; the channel(s) to read are
//! selected by zero-based index by the caller. Isometric trials are bare
//! single-column numeric text files, with or without a header line.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;

use grfmetrics_core::errors::{AnalysisError, AnalysisResult};
use grfmetrics_core::models::{DualTrace, ForceTrace};

/// Trial identifier derived from a file path (the file stem)
#[must_use]
pub fn trial_id(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned())
}

/// Read the numeric values of the requested columns from a headered CSV.
fn read_columns(path: &Path, columns: &[usize]) -> AnalysisResult<Vec<Vec<f64>>> {
    let trial = trial_id(path);
    let file = File::open(path)
        .map_err(|e| AnalysisError::data_format(&trial, format!("cannot open file: {e}")))?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut out: Vec<Vec<f64>> = columns.iter().map(|_| Vec::new()).collect();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record
            .map_err(|e| AnalysisError::data_format(&trial, format!("row {row_idx}: {e}")))?;
        for (slot, &col) in out.iter_mut().zip(columns) {
            let field = record.get(col).ok_or_else(|| {
                AnalysisError::data_format(
                    &trial,
                    format!(
                        "row {row_idx} has {} columns; force column {col} was requested",
                        record.len()
                    ),
                )
            })?;
            let value: f64 = field.trim().parse().map_err(|_| {
                AnalysisError::data_format(
                    &trial,
                    format!("row {row_idx}, column {col}: '{field}' is not numeric"),
                )
            })?;
            slot.push(value);
        }
    }
    if out[0].is_empty() {
        return Err(AnalysisError::data_format(&trial, "file contains no data rows"));
    }
    Ok(out)
}

/// Read a single-plate force trace from `column` of a trial CSV.
///
/// # Errors
///
/// Returns [`AnalysisError::DataFormat`] for unreadable files, missing
/// columns, or non-numeric data.
pub fn read_force_trace(
    path: &Path,
    column: usize,
    sample_rate_hz: f64,
) -> AnalysisResult<ForceTrace> {
    let mut cols = read_columns(path, &[column])?;
    Ok(ForceTrace::new(cols.remove(0), sample_rate_hz))
}

/// Read left and right plate traces from a dual-plate trial CSV.
///
/// # Errors
///
/// Returns [`AnalysisError::DataFormat`] for unreadable files, missing
/// columns, or non-numeric data.
pub fn read_dual_trace(
    path: &Path,
    left_column: usize,
    right_column: usize,
    sample_rate_hz: f64,
) -> AnalysisResult<DualTrace> {
    let mut cols = read_columns(path, &[left_column, right_column])?;
    let left = ForceTrace::new(cols.remove(0), sample_rate_hz);
    let right = ForceTrace::new(cols.remove(0), sample_rate_hz);
    Ok(DualTrace::new(left, right))
}

/// Read the first column of an isometric signal file. Values may be
/// comma- or whitespace-separated; a single non-numeric header line is
/// tolerated.
///
/// # Errors
///
/// Returns [`AnalysisError::DataFormat`] for unreadable files or
/// non-numeric data past the optional header.
pub fn read_isometric_signal(path: &Path) -> AnalysisResult<Vec<f64>> {
    let trial = trial_id(path);
    let content = std::fs::read_to_string(path)
        .map_err(|e| AnalysisError::data_format(&trial, format!("cannot open file: {e}")))?;

    let mut signal = Vec::new();
    for (line_idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let first = line
            .split([',', ' ', '\t'])
            .find(|tok| !tok.is_empty())
            .unwrap_or(line);
        match first.parse::<f64>() {
            Ok(value) => signal.push(value),
            Err(_) if line_idx == 0 => {} // header line
            Err(_) => {
                return Err(AnalysisError::data_format(
                    &trial,
                    format!("line {line_idx}: '{first}' is not numeric"),
                ));
            }
        }
    }
    if signal.is_empty() {
        return Err(AnalysisError::data_format(&trial, "file contains no samples"));
    }
    Ok(signal)
}
