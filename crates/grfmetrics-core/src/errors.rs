// ABOUTME: Unified error types for the grfmetrics analysis pipeline
// ABOUTME: Maps the error taxonomy (configuration, detection, format, aggregation, export) to thiserror enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

//! # Unified Error Handling
//!
//! Error taxonomy for the analysis pipeline. Errors are partitioned by the
//! blast radius they carry:
//!
//! - [`AnalysisError::Configuration`] aborts a session before any trial runs
//! - [`AnalysisError::PhaseDetection`] and [`AnalysisError::DataFormat`] are
//!   fatal to a single trial; the session catches them at the trial boundary
//! - [`AnalysisError::Aggregation`] is reported per metric and never aborts
//!   a table
//! - [`AnalysisError::Export`] preserves in-memory state so the export can
//!   be retried

use thiserror::Error;

/// Result alias used across the pipeline crates
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors produced by the analysis pipeline
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    /// Missing or invalid session configuration; nothing has been processed
    #[error("configuration error: {message}")]
    Configuration {
        /// What was missing or invalid
        message: String,
    },

    /// A phase-boundary search failed to converge within the trace
    #[error("phase detection failed for '{trial}': boundary '{boundary}' {detail}")]
    PhaseDetection {
        /// Trial identifier the failure belongs to
        trial: String,
        /// Name of the boundary that did not converge (e.g. `takeoff`)
        boundary: &'static str,
        /// Why the search gave up
        detail: String,
    },

    /// Input file could not be interpreted as trial data
    #[error("data format error in '{trial}': {message}")]
    DataFormat {
        /// Trial identifier (usually the file stem)
        trial: String,
        /// Parse/shape problem description
        message: String,
    },

    /// A symmetry or averaging computation failed for one metric
    #[error("aggregation error for metric '{metric}': {message}")]
    Aggregation {
        /// Metric key or display label the failure belongs to
        metric: String,
        /// What went wrong (missing counterpart, zero denominator, ...)
        message: String,
    },

    /// A table or signal export could not be written
    #[error("export to '{path}' failed: {message}")]
    Export {
        /// Destination path
        path: String,
        /// Underlying failure description
        message: String,
    },
}

impl AnalysisError {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a phase-detection error for a named boundary
    #[must_use]
    pub fn phase_detection(
        trial: impl Into<String>,
        boundary: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        Self::PhaseDetection {
            trial: trial.into(),
            boundary,
            detail: detail.into(),
        }
    }

    /// Create a data-format error
    #[must_use]
    pub fn data_format(trial: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataFormat {
            trial: trial.into(),
            message: message.into(),
        }
    }

    /// Create a per-metric aggregation error
    #[must_use]
    pub fn aggregation(metric: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Aggregation {
            metric: metric.into(),
            message: message.into(),
        }
    }

    /// Create an export error
    #[must_use]
    pub fn export(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Export {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this error is fatal to the whole session rather than one trial
    #[must_use]
    pub fn is_session_fatal(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_detection_error_names_boundary_and_trial() {
        let err = AnalysisError::phase_detection("CMJ_01", "takeoff", "ran past end of trace");
        let msg = err.to_string();
        assert!(msg.contains("CMJ_01"));
        assert!(msg.contains("takeoff"));
    }

    #[test]
    fn only_configuration_is_session_fatal() {
        assert!(AnalysisError::configuration("no force column").is_session_fatal());
        assert!(!AnalysisError::aggregation("jh_cm", "zero denominator").is_session_fatal());
    }
}
