// ABOUTME: Analysis sessions: run the per-trial pipeline with error containment
// ABOUTME: A failed trial becomes a failure record; the aggregate table never sees partial data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

//! Analysis sessions.
//!
//! An [`AnalysisSession`] owns the validated [`TrialContext`], the growing
//! [`TrialTable`], and the list of per-trial failures. Trials are processed
//! one at a time (or fanned out with rayon in [`AnalysisSession::process_batch`]);
//! either a fully computed record lands in the table or a failure is
//! recorded, never a partial column.

use rayon::prelude::*;
use tracing::{error, info};

use grfmetrics_analysis::outcomes::{countermovement, drop_jump, drop_landing};
use grfmetrics_core::errors::{AnalysisError, AnalysisResult};
use grfmetrics_core::models::{
    DualTrace, ForceTrace, MovementType, OutcomeRecord, PlateSetup, Side, TrialContext,
};

use crate::aggregate::TrialTable;

/// The force data of one trial, matching the session's plate setup
#[derive(Debug, Clone)]
pub enum TrialInput {
    /// One plate (or an already-summed channel)
    Single(ForceTrace),
    /// Left and right plates
    Dual(DualTrace),
}

/// A trial that could not be processed, with the error that stopped it
#[derive(Debug, Clone)]
pub struct TrialFailure {
    /// Trial identifier
    pub trial: String,
    /// What went wrong
    pub error: AnalysisError,
}

/// Counts reported at the end of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Trials that produced a table column
    pub processed: usize,
    /// Trials excluded with a recorded failure
    pub failed: usize,
}

/// One analysis session: context, table, failures
#[derive(Debug)]
pub struct AnalysisSession {
    context: TrialContext,
    table: TrialTable,
    failures: Vec<TrialFailure>,
}

impl AnalysisSession {
    /// Start a session for a validated context
    #[must_use]
    pub fn new(context: TrialContext) -> Self {
        let table = TrialTable::new(context.movement, context.plates);
        Self {
            context,
            table,
            failures: Vec::new(),
        }
    }

    /// The session's configuration
    #[must_use]
    pub fn context(&self) -> &TrialContext {
        &self.context
    }

    /// The aggregate table built so far
    #[must_use]
    pub fn table(&self) -> &TrialTable {
        &self.table
    }

    /// Trials excluded from the table
    #[must_use]
    pub fn failures(&self) -> &[TrialFailure] {
        &self.failures
    }

    /// Processed/failed counts
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            processed: self.table.trial_count(),
            failed: self.failures.len(),
        }
    }

    /// Record a failure that happened before the pipeline could run
    /// (unreadable file, malformed data); the trial is excluded like any
    /// other failed trial.
    pub fn record_failure(&mut self, trial_id: impl Into<String>, error: AnalysisError) {
        let trial = trial_id.into();
        error!(%trial, %error, "trial excluded from table");
        self.failures.push(TrialFailure { trial, error });
    }

    /// Process one trial. On failure the trial is recorded and excluded;
    /// the error is also returned so interactive callers can surface it.
    ///
    /// # Errors
    ///
    /// Returns the per-trial error that was recorded.
    pub fn process_trial(
        &mut self,
        trial_id: &str,
        side: Option<Side>,
        input: &TrialInput,
    ) -> AnalysisResult<()> {
        match compute_record(&self.context, trial_id, side, input) {
            Ok(record) => self.table.insert(&record),
            Err(err) => {
                error!(trial = trial_id, %err, "trial excluded from table");
                self.failures.push(TrialFailure {
                    trial: trial_id.to_owned(),
                    error: err.clone(),
                });
                Err(err)
            }
        }
    }

    /// Process a batch of trials, fanning the CPU-bound pipeline out with
    /// rayon. Records are appended in input order by this single writer, so
    /// table growth stays deterministic.
    pub fn process_batch(&mut self, inputs: &[(String, Option<Side>, TrialInput)]) -> SessionSummary {
        let context = self.context.clone();
        let results: Vec<(String, AnalysisResult<OutcomeRecord>)> = inputs
            .par_iter()
            .map(|(id, side, input)| (id.clone(), compute_record(&context, id, *side, input)))
            .collect();

        for (id, result) in results {
            match result {
                Ok(record) => {
                    if let Err(err) = self.table.insert(&record) {
                        self.failures.push(TrialFailure {
                            trial: id,
                            error: err,
                        });
                    }
                }
                Err(err) => {
                    error!(trial = %id, %err, "trial excluded from table");
                    self.failures.push(TrialFailure {
                        trial: id,
                        error: err,
                    });
                }
            }
        }
        let summary = self.summary();
        info!(
            processed = summary.processed,
            failed = summary.failed,
            "batch complete"
        );
        summary
    }
}

/// Run the full pipeline for one trial: detect, integrate, compute.
fn compute_record(
    context: &TrialContext,
    trial_id: &str,
    side: Option<Side>,
    input: &TrialInput,
) -> AnalysisResult<OutcomeRecord> {
    match (context.movement, input) {
        (MovementType::Slj | MovementType::Cmj, TrialInput::Single(trace)) => {
            expect_plates(context, PlateSetup::Single, trial_id)?;
            countermovement::analyze_single(trial_id, trace, context, side).map(|(_, r)| r)
        }
        (MovementType::Slj | MovementType::Cmj, TrialInput::Dual(dual)) => {
            expect_plates(context, PlateSetup::Dual, trial_id)?;
            countermovement::analyze_dual(trial_id, dual, context).map(|(_, r)| r)
        }
        (MovementType::DropJump, TrialInput::Single(trace)) => {
            expect_plates(context, PlateSetup::Single, trial_id)?;
            drop_jump::analyze_single(trial_id, trace, context, side).map(|(_, r)| r)
        }
        (MovementType::DropJump, TrialInput::Dual(dual)) => {
            expect_plates(context, PlateSetup::Dual, trial_id)?;
            drop_jump::analyze_dual(trial_id, dual, context).map(|(_, r)| r)
        }
        (MovementType::DropLanding, TrialInput::Single(trace)) => {
            expect_plates(context, PlateSetup::Single, trial_id)?;
            drop_landing::analyze_single(trial_id, trace, context, side).map(|(_, r)| r)
        }
        (MovementType::DropLanding, TrialInput::Dual(dual)) => {
            expect_plates(context, PlateSetup::Dual, trial_id)?;
            drop_landing::analyze_dual(trial_id, dual, context).map(|(_, r)| r)
        }
    }
}

fn expect_plates(
    context: &TrialContext,
    got: PlateSetup,
    trial_id: &str,
) -> AnalysisResult<()> {
    if context.plates == got {
        Ok(())
    } else {
        Err(AnalysisError::data_format(
            trial_id,
            format!(
                "session is configured for {:?} plates but the trial supplied {got:?} data",
                context.plates
            ),
        ))
    }
}
