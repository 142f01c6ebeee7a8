// ABOUTME: CSV export of outcome tables, symmetry tables, MVIC results, and corrected signals
// ABOUTME: Export failures preserve in-memory state so a retry with a new destination is always possible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

//! Table and signal exports.
//!
//! All writers take a destination path and the in-memory structure; nothing
//! is mutated on failure, so the caller can retry with a different
//! destination. The MVIC export merges into an existing file, keeping the
//! most recent row per filename.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Writer};
use tracing::info;

use grfmetrics_core::constants::precision::SIGNAL_EXPORT_DECIMALS;
use grfmetrics_core::errors::{AnalysisError, AnalysisResult};

use crate::aggregate::{AverageTable, MvicRow, MvicTable, SideAverages, SymmetryTable, TrialTable};

fn export_err(path: &Path, err: impl std::fmt::Display) -> AnalysisError {
    AnalysisError::export(path.display().to_string(), err.to_string())
}

fn open_writer(path: &Path) -> AnalysisResult<Writer<std::fs::File>> {
    Writer::from_path(path).map_err(|e| export_err(path, e))
}

fn fmt_value(value: f64) -> String {
    format!("{value}")
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map(fmt_value).unwrap_or_default()
}

/// Write the individual-trial table: `Variable` plus one column per trial.
///
/// # Errors
///
/// Returns [`AnalysisError::Export`] when the destination is not writable.
pub fn write_trial_table(path: &Path, table: &TrialTable) -> AnalysisResult<()> {
    let mut writer = open_writer(path)?;
    let mut header = vec!["Variable".to_owned()];
    header.extend(table.columns().iter().map(|c| c.id.clone()));
    writer.write_record(&header).map_err(|e| export_err(path, e))?;

    for (i, def) in table.schema().iter().enumerate() {
        let mut row = vec![def.display_label()];
        row.extend(table.columns().iter().map(|c| fmt_value(c.values[i])));
        writer.write_record(&row).map_err(|e| export_err(path, e))?;
    }
    writer.flush().map_err(|e| export_err(path, e))?;
    info!(path = %path.display(), trials = table.trial_count(), "individual table written");
    Ok(())
}

/// Write the plain average table (`Variable`, `Average`).
///
/// # Errors
///
/// Returns [`AnalysisError::Export`] when the destination is not writable.
pub fn write_average_table(path: &Path, table: &AverageTable) -> AnalysisResult<()> {
    let mut writer = open_writer(path)?;
    writer
        .write_record(["Variable", "Average"])
        .map_err(|e| export_err(path, e))?;
    for row in &table.rows {
        writer
            .write_record([row.label.as_str(), &fmt_value(row.mean)])
            .map_err(|e| export_err(path, e))?;
    }
    writer.flush().map_err(|e| export_err(path, e))?;
    Ok(())
}

/// Write the Left/Right average table with LSI columns.
///
/// # Errors
///
/// Returns [`AnalysisError::Export`] when the destination is not writable.
pub fn write_side_average_table(path: &Path, table: &SideAverages) -> AnalysisResult<()> {
    let mut writer = open_writer(path)?;
    writer
        .write_record(["Variable", "Left", "Right", "L/R LSI", "R/L LSI"])
        .map_err(|e| export_err(path, e))?;
    for row in &table.rows {
        writer
            .write_record([
                row.label.as_str(),
                &fmt_value(row.left),
                &fmt_value(row.right),
                &fmt_opt(row.left_right_lsi),
                &fmt_opt(row.right_left_lsi),
            ])
            .map_err(|e| export_err(path, e))?;
    }
    writer.flush().map_err(|e| export_err(path, e))?;
    Ok(())
}

/// Write the dual-plate LSI table.
///
/// # Errors
///
/// Returns [`AnalysisError::Export`] when the destination is not writable.
pub fn write_symmetry_table(path: &Path, table: &SymmetryTable) -> AnalysisResult<()> {
    let mut writer = open_writer(path)?;
    writer
        .write_record(["Metric", "Left", "Right", "L/R LSI", "R/L LSI"])
        .map_err(|e| export_err(path, e))?;
    for row in &table.rows {
        writer
            .write_record([
                row.metric.as_str(),
                &fmt_value(row.left),
                &fmt_value(row.right),
                &fmt_opt(row.left_right_lsi),
                &fmt_opt(row.right_left_lsi),
            ])
            .map_err(|e| export_err(path, e))?;
    }
    writer.flush().map_err(|e| export_err(path, e))?;
    Ok(())
}

/// Write the trial table as pretty-printed JSON, for downstream tooling
/// that wants structure rather than a spreadsheet.
///
/// # Errors
///
/// Returns [`AnalysisError::Export`] when the destination is not writable.
pub fn write_table_json(path: &Path, table: &TrialTable) -> AnalysisResult<()> {
    let file = std::fs::File::create(path).map_err(|e| export_err(path, e))?;
    serde_json::to_writer_pretty(file, table).map_err(|e| export_err(path, e))?;
    Ok(())
}

/// Destination for a corrected isometric signal: `<stem>_corrected.csv`
/// inside `dir`.
#[must_use]
pub fn corrected_signal_path(dir: &Path, source_filename: &str) -> PathBuf {
    let stem = Path::new(source_filename)
        .file_stem()
        .map_or_else(|| source_filename.to_owned(), |s| s.to_string_lossy().into_owned());
    dir.join(format!("{stem}_corrected.csv"))
}

/// Write a corrected signal as single-column text, eight decimal places.
///
/// # Errors
///
/// Returns [`AnalysisError::Export`] when the destination is not writable.
pub fn write_corrected_signal(path: &Path, signal: &[f64]) -> AnalysisResult<()> {
    let prec = SIGNAL_EXPORT_DECIMALS;
    let mut content = String::with_capacity(signal.len() * (prec + 6));
    for value in signal {
        let _ = writeln!(content, "{value:.prec$}");
    }
    std::fs::write(path, content).map_err(|e| export_err(path, e))?;
    info!(path = %path.display(), samples = signal.len(), "corrected signal written");
    Ok(())
}

/// Export the MVIC table. If the destination already exists its rows are
/// loaded first and the current table's rows win on filename collision.
///
/// # Errors
///
/// Returns [`AnalysisError::Export`] when the destination cannot be read
/// or written.
pub fn export_mvic_table(path: &Path, table: &MvicTable) -> AnalysisResult<()> {
    let merged = if path.exists() {
        table.merged_onto(&read_mvic_rows(path)?)
    } else {
        table.merged_onto(&[])
    };

    let mut writer = open_writer(path)?;
    writer
        .write_record(["Filename", "MVIC"])
        .map_err(|e| export_err(path, e))?;
    for row in merged.rows() {
        writer
            .write_record([row.filename.as_str(), &fmt_value(row.mvic_n)])
            .map_err(|e| export_err(path, e))?;
    }
    writer.flush().map_err(|e| export_err(path, e))?;
    info!(path = %path.display(), rows = merged.rows().len(), "MVIC table written");
    Ok(())
}

fn read_mvic_rows(path: &Path) -> AnalysisResult<Vec<MvicRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| export_err(path, e))?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| export_err(path, e))?;
        let filename = record.get(0).unwrap_or_default().to_owned();
        let mvic_n: f64 = record
            .get(1)
            .unwrap_or_default()
            .trim()
            .parse()
            .map_err(|e| export_err(path, format!("bad MVIC value for '{filename}': {e}")))?;
        rows.push(MvicRow { filename, mvic_n });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrected_signal_round_trips_at_8_decimals() {
        let dir = tempfile::tempdir().unwrap();
        let path = corrected_signal_path(dir.path(), "llr_07.csv");
        assert!(path.to_string_lossy().ends_with("llr_07_corrected.csv"));

        let signal = vec![0.123_456_789, -10.5, 250.000_000_04];
        write_corrected_signal(&path, &signal).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, ["0.12345679", "-10.50000000", "250.00000000"]);
    }

    #[test]
    fn mvic_export_appends_and_dedups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mvic.csv");

        let mut first = MvicTable::new();
        first.push("llr_a.csv", 300.0);
        first.push("llr_b.csv", 280.25);
        export_mvic_table(&path, &first).unwrap();

        let mut second = MvicTable::new();
        second.push("llr_b.csv", 290.5); // re-analysis of b
        second.push("llr_c.csv", 310.0);
        export_mvic_table(&path, &second).unwrap();

        let rows = read_mvic_rows(&path).unwrap();
        assert_eq!(rows.len(), 3);
        let b = rows.iter().find(|r| r.filename == "llr_b.csv").unwrap();
        assert!((b.mvic_n - 290.5).abs() < 1e-9);
    }

    #[test]
    fn unwritable_destination_is_an_export_error() {
        let table = MvicTable::new();
        let err = export_mvic_table(Path::new("/no/such/dir/mvic.csv"), &table).unwrap_err();
        assert!(matches!(err, AnalysisError::Export { .. }));
    }
}
