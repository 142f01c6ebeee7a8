// ABOUTME: Isometric-trial state machine: baseline selection, correction, filtering, MVIC extraction
// ABOUTME: Raw signal is never mutated; correction works on a copy and can be redone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

//! Baseline correction and MVIC extraction for isometric strength trials.
//!
//! One [`IsometricTrial`] per input file walks the state machine
//! `Loaded → BaselineSelected → Corrected → Saved`. The baseline window
//! position comes from the caller (a click in the original acquisition
//! setting); everything downstream is deterministic: subtract the window
//! mean, zero-phase low-pass the result, then slide a 250 ms epoch across
//! the filtered signal and keep the maximum epoch mean as the MVIC.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use grfmetrics_core::constants::{filter as filter_consts, mvic};
use grfmetrics_core::errors::{AnalysisError, AnalysisResult};

use crate::filter::filtfilt_lowpass;
use crate::stats;

/// Where a trial sits in the correction workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrialState {
    /// Raw signal in memory, nothing selected
    Loaded,
    /// Baseline window chosen and its mean computed
    BaselineSelected,
    /// Baseline subtracted, filtered signal and MVIC available
    Corrected,
    /// Corrected signal persisted and the MVIC recorded
    Saved,
}

/// The best 250 ms epoch of the filtered signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MvicEpoch {
    /// Maximum sliding-epoch mean force (N)
    pub mvic_n: f64,
    /// Start of the winning epoch (s)
    pub start_s: f64,
    /// Temporal midpoint of the winning epoch (s), kept for annotation
    pub midpoint_s: f64,
}

/// One isometric file's signal and correction state
#[derive(Debug, Clone)]
pub struct IsometricTrial {
    filename: String,
    sample_rate_hz: f64,
    raw: Vec<f64>,
    state: TrialState,
    baseline: Option<f64>,
    corrected: Option<Vec<f64>>,
    filtered: Option<Vec<f64>>,
    epoch: Option<MvicEpoch>,
}

impl IsometricTrial {
    /// Load a raw signal. The trial starts in [`TrialState::Loaded`].
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DataFormat`] when the signal is shorter
    /// than one MVIC epoch.
    pub fn load(
        filename: impl Into<String>,
        raw: Vec<f64>,
        sample_rate_hz: f64,
    ) -> AnalysisResult<Self> {
        let filename = filename.into();
        let epoch_samples = (mvic::EPOCH_DURATION_S * sample_rate_hz) as usize;
        if raw.len() <= epoch_samples {
            return Err(AnalysisError::data_format(
                &filename,
                format!(
                    "signal has {} samples; at least one {} ms epoch is required",
                    raw.len(),
                    (mvic::EPOCH_DURATION_S * 1000.0) as u32
                ),
            ));
        }
        Ok(Self {
            filename,
            sample_rate_hz,
            raw,
            state: TrialState::Loaded,
            baseline: None,
            corrected: None,
            filtered: None,
            epoch: None,
        })
    }

    /// File name the trial was loaded from
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Current workflow state
    #[must_use]
    pub fn state(&self) -> TrialState {
        self.state
    }

    /// The untouched raw signal
    #[must_use]
    pub fn raw(&self) -> &[f64] {
        &self.raw
    }

    /// Select the 0.5 s baseline window starting at `start_s` and compute
    /// its mean. The window is clamped to the end of the signal.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DataFormat`] when the start lies outside
    /// the signal.
    pub fn select_baseline(&mut self, start_s: f64) -> AnalysisResult<f64> {
        let start = (start_s * self.sample_rate_hz) as usize;
        if start_s < 0.0 || start >= self.raw.len() {
            return Err(AnalysisError::data_format(
                &self.filename,
                format!("baseline start {start_s:.3} s is outside the signal"),
            ));
        }
        let end = ((start_s + mvic::BASELINE_WINDOW_S) * self.sample_rate_hz) as usize;
        let end = end.min(self.raw.len());
        let baseline = stats::mean(&self.raw[start..end]);
        debug!(file = %self.filename, baseline_n = baseline, "baseline window selected");
        self.baseline = Some(baseline);
        self.state = TrialState::BaselineSelected;
        Ok(baseline)
    }

    /// Subtract the baseline from a copy of the raw signal, filter it, and
    /// extract the MVIC epoch.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Configuration`] when called before a
    /// baseline has been selected, or when the filter cutoff does not fit
    /// the sample rate.
    pub fn correct(&mut self) -> AnalysisResult<MvicEpoch> {
        let baseline = self.baseline.ok_or_else(|| {
            AnalysisError::configuration(format!(
                "cannot correct '{}': no baseline selected",
                self.filename
            ))
        })?;
        let corrected: Vec<f64> = self.raw.iter().map(|v| v - baseline).collect();
        let filtered = filtfilt_lowpass(
            &corrected,
            filter_consts::LOWPASS_CUTOFF_HZ,
            self.sample_rate_hz,
        )?;
        let epoch = extract_mvic(&filtered, self.sample_rate_hz);

        info!(
            file = %self.filename,
            mvic_n = epoch.mvic_n,
            midpoint_s = epoch.midpoint_s,
            "isometric trial corrected"
        );
        self.corrected = Some(corrected);
        self.filtered = Some(filtered);
        self.epoch = Some(epoch);
        self.state = TrialState::Corrected;
        Ok(epoch)
    }

    /// The baseline-subtracted (unfiltered) signal, once corrected
    #[must_use]
    pub fn corrected(&self) -> Option<&[f64]> {
        self.corrected.as_deref()
    }

    /// The filtered signal, once corrected
    #[must_use]
    pub fn filtered(&self) -> Option<&[f64]> {
        self.filtered.as_deref()
    }

    /// The MVIC epoch, once corrected
    #[must_use]
    pub fn epoch(&self) -> Option<MvicEpoch> {
        self.epoch
    }

    /// Discard the selection and all derived signals; the raw signal is
    /// untouched and the trial returns to [`TrialState::Loaded`].
    pub fn redo(&mut self) {
        self.baseline = None;
        self.corrected = None;
        self.filtered = None;
        self.epoch = None;
        self.state = TrialState::Loaded;
    }

    /// Mark the corrected signal as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Configuration`] when the trial has not
    /// been corrected yet.
    pub fn mark_saved(&mut self) -> AnalysisResult<()> {
        if self.state != TrialState::Corrected {
            return Err(AnalysisError::configuration(format!(
                "cannot save '{}': trial is not corrected",
                self.filename
            )));
        }
        self.state = TrialState::Saved;
        Ok(())
    }
}

/// Slide a fixed-duration epoch across the filtered signal one sample at a
/// time and keep the window with the maximum mean.
///
/// A running sum makes this O(n); recomputing the mean per position would
/// be O(n·w) for no benefit.
#[must_use]
pub fn extract_mvic(filtered: &[f64], sample_rate_hz: f64) -> MvicEpoch {
    let window = (mvic::EPOCH_DURATION_S * sample_rate_hz) as usize;
    debug_assert!(window > 0 && window < filtered.len());

    let mut sum: f64 = filtered[..window].iter().sum();
    let mut best_sum = sum;
    let mut best_start = 0usize;
    for start in 1..=filtered.len() - window {
        sum += filtered[start + window - 1] - filtered[start - 1];
        if sum > best_sum {
            best_sum = sum;
            best_start = start;
        }
    }

    let start_s = best_start as f64 / sample_rate_hz;
    MvicEpoch {
        mvic_n: best_sum / window as f64,
        start_s,
        midpoint_s: start_s + mvic::EPOCH_DURATION_S / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plateau_signal() -> Vec<f64> {
        // 0.5 s at 100 N, 0.5 s plateau at 400 N, 1 s back at 100 N (2000 Hz)
        let mut signal = vec![100.0; 1000];
        signal.extend(vec![400.0; 1000]);
        signal.extend(vec![100.0; 2000]);
        signal
    }

    #[test]
    fn mvic_finds_the_plateau() {
        let signal = plateau_signal();
        let epoch = extract_mvic(&signal, 2000.0);
        assert!((epoch.mvic_n - 400.0).abs() < 1e-9);
        // plateau spans 0.5 s..1.0 s; the 250 ms window midpoint must lie inside
        assert!(epoch.midpoint_s > 0.5 && epoch.midpoint_s < 1.0);
    }

    #[test]
    fn baseline_correction_shifts_but_never_mutates_raw() {
        let mut trial = IsometricTrial::load("llr_01.csv", plateau_signal(), 2000.0).unwrap();
        let baseline = trial.select_baseline(0.0).unwrap();
        assert!((baseline - 100.0).abs() < 1e-9);
        assert_eq!(trial.state(), TrialState::BaselineSelected);

        let epoch = trial.correct().unwrap();
        assert_eq!(trial.state(), TrialState::Corrected);
        // plateau minus baseline: the filtered epoch mean sits near 300 N
        assert!((epoch.mvic_n - 300.0).abs() < 1.0, "{}", epoch.mvic_n);
        assert!((trial.raw()[0] - 100.0).abs() < 1e-12);

        trial.redo();
        assert_eq!(trial.state(), TrialState::Loaded);
        assert!(trial.corrected().is_none());
        assert!((trial.raw()[1500] - 400.0).abs() < 1e-12);
    }

    #[test]
    fn correct_without_baseline_is_an_error() {
        let mut trial = IsometricTrial::load("llr_02.csv", plateau_signal(), 2000.0).unwrap();
        assert!(trial.correct().is_err());
    }

    #[test]
    fn save_requires_correction() {
        let mut trial = IsometricTrial::load("llr_03.csv", plateau_signal(), 2000.0).unwrap();
        assert!(trial.mark_saved().is_err());
        trial.select_baseline(0.1).unwrap();
        trial.correct().unwrap();
        trial.mark_saved().unwrap();
        assert_eq!(trial.state(), TrialState::Saved);
    }

    #[test]
    fn short_signal_is_rejected() {
        assert!(IsometricTrial::load("tiny.csv", vec![1.0; 100], 2000.0).is_err());
    }
}
