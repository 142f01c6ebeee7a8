// ABOUTME: Per-trial outcome records ordered by the metric schema
// ABOUTME: Values are rounded to stored precision at construction and immutable afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::round_outcome;
use crate::errors::{AnalysisError, AnalysisResult};
use crate::models::trial::{MovementType, PlateSetup, Side};
use crate::schema::{schema_for, MetricDef};

/// One trial's computed outcomes, in schema order.
///
/// The record stores exactly one value per metric in the protocol's schema;
/// every value is rounded to stored precision (3 decimals) on construction
/// and the record is immutable afterwards. Aggregation consumes the rounded
/// values, never higher-precision intermediates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeRecord {
    trial: String,
    movement: MovementType,
    plates: PlateSetup,
    side: Option<Side>,
    processed_at: DateTime<Utc>,
    values: Vec<f64>,
}

impl OutcomeRecord {
    /// Build a record from values listed in schema order.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DataFormat`] if the value count does not
    /// match the schema for this movement/plate combination.
    pub fn new(
        trial: impl Into<String>,
        movement: MovementType,
        plates: PlateSetup,
        side: Option<Side>,
        values: Vec<f64>,
    ) -> AnalysisResult<Self> {
        let trial = trial.into();
        let schema = schema_for(movement, plates);
        if values.len() != schema.len() {
            return Err(AnalysisError::data_format(
                trial,
                format!(
                    "computed {} outcome values but the schema defines {}",
                    values.len(),
                    schema.len()
                ),
            ));
        }
        Ok(Self {
            trial,
            movement,
            plates,
            side,
            processed_at: Utc::now(),
            values: values.into_iter().map(round_outcome).collect(),
        })
    }

    /// Trial identifier (usually the source file stem)
    #[must_use]
    pub fn trial(&self) -> &str {
        &self.trial
    }

    /// Movement protocol this record was computed under
    #[must_use]
    pub fn movement(&self) -> MovementType {
        self.movement
    }

    /// Plate setup this record was computed under
    #[must_use]
    pub fn plates(&self) -> PlateSetup {
        self.plates
    }

    /// Limb tag, when the trial is unilateral
    #[must_use]
    pub fn side(&self) -> Option<Side> {
        self.side
    }

    /// When the record was computed
    #[must_use]
    pub fn processed_at(&self) -> DateTime<Utc> {
        self.processed_at
    }

    /// Values in schema order
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Metric definitions paired with their values, in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&'static MetricDef, f64)> + '_ {
        schema_for(self.movement, self.plates)
            .iter()
            .zip(self.values.iter().copied())
    }

    /// Look up a single value by metric key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        schema_for(self.movement, self.plates)
            .iter()
            .position(|def| def.key == key)
            .map(|idx| self.values[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_count_must_match_schema() {
        let err = OutcomeRecord::new(
            "cmj_01",
            MovementType::Cmj,
            PlateSetup::Single,
            None,
            vec![70.0, 30.0],
        );
        assert!(err.is_err());
    }

    #[test]
    fn values_are_rounded_on_construction() {
        let schema = schema_for(MovementType::DropLanding, PlateSetup::Single);
        let mut values = vec![0.0; schema.len()];
        values[0] = 71.428_571;
        let record = OutcomeRecord::new(
            "dl_01",
            MovementType::DropLanding,
            PlateSetup::Single,
            None,
            values,
        )
        .unwrap();
        assert!((record.get("bodymass").unwrap() - 71.429).abs() < 1e-12);
    }
}
