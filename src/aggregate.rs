// ABOUTME: Cross-trial aggregation: wide trial tables, averages, and limb symmetry indices
// ABOUTME: Tables grow by column, never shrink; duplicate trial identifiers overwrite in place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

//! Trial aggregation.
//!
//! The [`TrialTable`] is the wide table the original reporting workflow was
//! built around: one row per metric in schema order, one column per trial
//! in insertion order. Averaging comes in two shapes (a plain cross-trial
//! mean, and Left/Right partition means for side-tagged protocols), and the
//! dual-plate symmetry pass pairs `Left `/`Right ` metric labels into LSI
//! ratios.
//!
//! Aggregation consumes the rounded values stored in the records; per-metric
//! failures (missing counterpart, zero denominator) are collected and
//! surfaced without aborting the rest of the table.

use serde::Serialize;
use tracing::warn;

use grfmetrics_core::constants::{round_lsi, round_outcome};
use grfmetrics_core::errors::{AnalysisError, AnalysisResult};
use grfmetrics_core::models::{MovementType, OutcomeRecord, PlateSetup, Side};
use grfmetrics_core::schema::{schema_for, MetricDef};

/// One trial's column in the wide table
#[derive(Debug, Clone, Serialize)]
pub struct TrialColumn {
    /// Trial identifier (file stem)
    pub id: String,
    /// Limb tag for unilateral protocols
    pub side: Option<Side>,
    /// Values in schema order, already rounded
    pub values: Vec<f64>,
}

/// Wide outcome table: metrics down, trials across
#[derive(Debug, Clone, Serialize)]
pub struct TrialTable {
    movement: MovementType,
    plates: PlateSetup,
    columns: Vec<TrialColumn>,
}

impl TrialTable {
    /// Create an empty table for one protocol
    #[must_use]
    pub fn new(movement: MovementType, plates: PlateSetup) -> Self {
        Self {
            movement,
            plates,
            columns: Vec::new(),
        }
    }

    /// The metric schema this table is keyed by
    #[must_use]
    pub fn schema(&self) -> &'static [MetricDef] {
        schema_for(self.movement, self.plates)
    }

    /// Trial columns in insertion order
    #[must_use]
    pub fn columns(&self) -> &[TrialColumn] {
        &self.columns
    }

    /// Number of trials in the table
    #[must_use]
    pub fn trial_count(&self) -> usize {
        self.columns.len()
    }

    /// Append a trial's outcomes as a new column. A record whose identifier
    /// is already present overwrites the existing column in place.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DataFormat`] when the record was computed
    /// under a different protocol than the table holds.
    pub fn insert(&mut self, record: &OutcomeRecord) -> AnalysisResult<()> {
        if record.movement() != self.movement || record.plates() != self.plates {
            return Err(AnalysisError::data_format(
                record.trial(),
                format!(
                    "record is {:?}/{:?} but the table holds {:?}/{:?}",
                    record.movement(),
                    record.plates(),
                    self.movement,
                    self.plates
                ),
            ));
        }
        let column = TrialColumn {
            id: record.trial().to_owned(),
            side: record.side(),
            values: record.values().to_vec(),
        };
        if let Some(existing) = self.columns.iter_mut().find(|c| c.id == column.id) {
            warn!(trial = %column.id, "duplicate trial identifier; overwriting existing column");
            *existing = column;
        } else {
            self.columns.push(column);
        }
        Ok(())
    }

    /// Row-wise mean across every trial column.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Aggregation`] when the table is empty.
    pub fn average(&self) -> AnalysisResult<AverageTable> {
        if self.columns.is_empty() {
            return Err(AnalysisError::aggregation(
                "average",
                "no trials have been added to the table",
            ));
        }
        let rows = self
            .schema()
            .iter()
            .enumerate()
            .map(|(i, def)| AverageRow {
                label: def.display_label(),
                mean: round_outcome(column_mean(&self.columns, i)),
            })
            .collect();
        Ok(AverageTable { rows })
    }

    /// Left/Right partition means plus per-metric LSI ratios, for
    /// side-tagged (unilateral) protocols. The body-mass row is skipped, as
    /// the reporting convention treats it as context rather than outcome.
    ///
    /// Columns without a side tag are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Aggregation`] when either partition holds
    /// no trials.
    pub fn side_averages(&self) -> AnalysisResult<SideAverages> {
        let left: Vec<&TrialColumn> = self
            .columns
            .iter()
            .filter(|c| c.side == Some(Side::Left))
            .collect();
        let right: Vec<&TrialColumn> = self
            .columns
            .iter()
            .filter(|c| c.side == Some(Side::Right))
            .collect();
        for untagged in self.columns.iter().filter(|c| c.side.is_none()) {
            warn!(trial = %untagged.id, "trial carries no side tag; excluded from side averages");
        }
        if left.is_empty() || right.is_empty() {
            return Err(AnalysisError::aggregation(
                "side averages",
                format!(
                    "need trials on both sides, have {} left and {} right",
                    left.len(),
                    right.len()
                ),
            ));
        }

        let mut rows = Vec::new();
        let mut issues = Vec::new();
        for (i, def) in self.schema().iter().enumerate().skip(1) {
            let label = def.display_label();
            let left_mean = round_outcome(ref_column_mean(&left, i));
            let right_mean = round_outcome(ref_column_mean(&right, i));
            let (ratio_lr, ratio_rl) = match ratio_pair(left_mean, right_mean) {
                Ok(pair) => (Some(pair.0), Some(pair.1)),
                Err(message) => {
                    issues.push(AnalysisError::aggregation(&label, message));
                    (None, None)
                }
            };
            rows.push(SideAverageRow {
                label,
                left: left_mean,
                right: right_mean,
                left_right_lsi: ratio_lr,
                right_left_lsi: ratio_rl,
            });
        }
        Ok(SideAverages { rows, issues })
    }

    /// Pair `Left `/`Right ` metrics of the plain average into LSI rows
    /// (dual-plate protocols).
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Aggregation`] when the table is empty.
    pub fn symmetry(&self) -> AnalysisResult<SymmetryTable> {
        if self.columns.is_empty() {
            return Err(AnalysisError::aggregation(
                "symmetry",
                "no trials have been added to the table",
            ));
        }
        let schema = self.schema();
        let mut rows = Vec::new();
        let mut issues = Vec::new();

        for (i, def) in schema.iter().enumerate() {
            let Some((Side::Left, stripped)) = def.side_prefix() else {
                continue;
            };
            let left_mean = round_outcome(column_mean(&self.columns, i));

            // The counterpart has the same stripped label and unit under
            // the Right prefix.
            let counterpart = schema.iter().enumerate().find(|(_, other)| {
                matches!(other.side_prefix(), Some((Side::Right, rest))
                    if rest == stripped && other.unit == def.unit)
            });
            let Some((right_idx, _)) = counterpart else {
                issues.push(AnalysisError::aggregation(
                    stripped,
                    "no matching Right metric in the schema",
                ));
                continue;
            };
            let right_mean = round_outcome(column_mean(&self.columns, right_idx));

            let metric = format!("{stripped} ({})", def.unit);
            let (ratio_lr, ratio_rl) = match ratio_pair(left_mean, right_mean) {
                Ok(pair) => (Some(pair.0), Some(pair.1)),
                Err(message) => {
                    issues.push(AnalysisError::aggregation(&metric, message));
                    (None, None)
                }
            };
            rows.push(SymmetryRow {
                metric,
                left: left_mean,
                right: right_mean,
                left_right_lsi: ratio_lr,
                right_left_lsi: ratio_rl,
            });
        }
        Ok(SymmetryTable { rows, issues })
    }
}

/// Both LSI ratios for a metric, rounded, or the reason they are undefined
fn ratio_pair(left: f64, right: f64) -> Result<(f64, f64), String> {
    if left.abs() < f64::EPSILON || right.abs() < f64::EPSILON {
        return Err(format!(
            "zero mean makes the ratio undefined (left {left}, right {right})"
        ));
    }
    Ok((round_lsi(left / right), round_lsi(right / left)))
}

fn column_mean(columns: &[TrialColumn], row: usize) -> f64 {
    columns.iter().map(|c| c.values[row]).sum::<f64>() / columns.len() as f64
}

fn ref_column_mean(columns: &[&TrialColumn], row: usize) -> f64 {
    columns.iter().map(|c| c.values[row]).sum::<f64>() / columns.len() as f64
}

/// One row of the plain average table
#[derive(Debug, Clone, Serialize)]
pub struct AverageRow {
    /// Metric display label with unit
    pub label: String,
    /// Cross-trial mean, rounded
    pub mean: f64,
}

/// Cross-trial means, one row per metric
#[derive(Debug, Clone, Serialize)]
pub struct AverageTable {
    /// Rows in schema order
    pub rows: Vec<AverageRow>,
}

/// One row of the Left/Right average table
#[derive(Debug, Clone, Serialize)]
pub struct SideAverageRow {
    /// Metric display label with unit
    pub label: String,
    /// Mean over left-tagged trials
    pub left: f64,
    /// Mean over right-tagged trials
    pub right: f64,
    /// Left/right ratio, when defined
    pub left_right_lsi: Option<f64>,
    /// Right/left ratio, when defined
    pub right_left_lsi: Option<f64>,
}

/// Left/Right partition means with per-metric LSI ratios
#[derive(Debug, Clone, Serialize)]
pub struct SideAverages {
    /// Rows in schema order (body mass excluded)
    pub rows: Vec<SideAverageRow>,
    /// Per-metric aggregation failures (ratios left empty)
    #[serde(skip)]
    pub issues: Vec<AnalysisError>,
}

/// One paired Left/Right metric of a dual-plate table
#[derive(Debug, Clone, Serialize)]
pub struct SymmetryRow {
    /// Stripped metric label with unit
    pub metric: String,
    /// Left-limb mean
    pub left: f64,
    /// Right-limb mean
    pub right: f64,
    /// Left/right ratio, when defined
    pub left_right_lsi: Option<f64>,
    /// Right/left ratio, when defined
    pub right_left_lsi: Option<f64>,
}

/// LSI table derived from a dual-plate trial table
#[derive(Debug, Clone, Serialize)]
pub struct SymmetryTable {
    /// One row per paired metric
    pub rows: Vec<SymmetryRow>,
    /// Per-metric aggregation failures
    #[serde(skip)]
    pub issues: Vec<AnalysisError>,
}

/// One processed isometric file
#[derive(Debug, Clone, Serialize)]
pub struct MvicRow {
    /// Source file name
    pub filename: String,
    /// Maximum 250 ms epoch mean (N)
    pub mvic_n: f64,
}

/// Flat MVIC results table, deduplicated by filename (last write wins)
#[derive(Debug, Clone, Default, Serialize)]
pub struct MvicTable {
    rows: Vec<MvicRow>,
}

impl MvicTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one file's MVIC; an existing row for the same filename is
    /// replaced in place.
    pub fn push(&mut self, filename: impl Into<String>, mvic_n: f64) {
        let filename = filename.into();
        if let Some(existing) = self.rows.iter_mut().find(|r| r.filename == filename) {
            existing.mvic_n = mvic_n;
        } else {
            self.rows.push(MvicRow { filename, mvic_n });
        }
    }

    /// Rows in insertion order
    #[must_use]
    pub fn rows(&self) -> &[MvicRow] {
        &self.rows
    }

    /// Merge rows loaded from an existing export underneath the current
    /// rows: current results win on filename collision.
    #[must_use]
    pub fn merged_onto(&self, existing: &[MvicRow]) -> Self {
        let mut merged = Self::new();
        for row in existing {
            merged.push(&row.filename, row.mvic_n);
        }
        for row in &self.rows {
            merged.push(&row.filename, row.mvic_n);
        }
        merged
    }
}
