// ABOUTME: Biomechanics constants for the force-plate analysis pipeline
// ABOUTME: Detection thresholds, scan offsets, filter parameters, and MVIC epochs by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

//! Biomechanics constants used throughout the analysis pipeline
//!
//! Values follow the conventions established in force-plate testing
//! literature and match the laboratory protocol this suite was built for
//! (1000 Hz jump trials, 2000 Hz isometric trials).

/// Physical constants
pub mod physics {
    /// Gravitational acceleration (m/s²) used for body-mass derivation,
    /// impact-velocity prediction, and jump-height kinematics
    pub const GRAVITY: f64 = 9.81;
}

/// Quiet-stance body-weight estimation
///
/// References:
/// - Street, G. et al. (2001). Sources of error in determining
///   countermovement jump height with the impulse method
pub mod stance {
    /// Number of leading samples averaged for the body-weight estimate
    /// (1.5 s at the 1000 Hz jump protocol rate)
    pub const QUIET_STANCE_SAMPLES: usize = 1500;

    /// Standard-deviation multiplier below body weight that marks the
    /// candidate onset of unweighting
    /// Reference: Owen, N.J. et al. (2014). Development of a criterion
    /// method to determine peak mechanical power output in a countermovement jump
    pub const ONSET_SD_MULTIPLIER: f64 = 5.0;
}

/// Threshold-crossing detection parameters
pub mod detection {
    /// Force below which the plate is considered unloaded (N); used for
    /// takeoff, landing, and ground-contact detection
    pub const UNLOADED_THRESHOLD_N: f64 = 30.0;

    /// First sample considered by the countermovement onset search; skips
    /// plate-settling transients at the head of the record
    pub const ONSET_SEARCH_START: usize = 20;

    /// First sample considered by drop-protocol impact searches; the
    /// athlete is still airborne for at least this long after recording starts
    pub const DROP_SEARCH_START: usize = 500;

    /// Samples skipped past takeoff before the landing search begins
    /// (countermovement protocols)
    pub const LANDING_SEARCH_OFFSET: usize = 150;

    /// Samples skipped past takeoff before the landing search begins
    /// (drop-jump protocols, which have longer flight phases)
    pub const DROP_JUMP_LANDING_OFFSET: usize = 250;

    /// Samples skipped past landing before the end-of-landing search begins
    /// (single-plate countermovement protocols)
    pub const END_LANDING_OFFSET: usize = 100;

    /// Samples skipped past landing before the end-of-landing search begins
    /// (dual-plate countermovement protocols)
    pub const END_LANDING_OFFSET_DUAL: usize = 500;

    /// Samples skipped past landing before the end-of-landing search begins
    /// (drop-jump protocols)
    pub const END_LANDING_OFFSET_DROP_JUMP: usize = 200;

    /// Fallback width of the landing phase when the drop-jump
    /// end-of-landing search fails to advance past the landing index
    pub const DROP_JUMP_LANDING_FALLBACK: usize = 500;
}

/// Low-pass filtering of isometric strength signals
pub mod filter {
    /// Butterworth cutoff frequency (Hz)
    pub const LOWPASS_CUTOFF_HZ: f64 = 10.0;

    /// Filter order per pass; applied forward and backward the effective
    /// order doubles while phase lag cancels
    pub const LOWPASS_ORDER: u32 = 2;
}

/// MVIC extraction from isometric trials
///
/// References:
/// - Maffiuletti, N.A. et al. (2016). Rate of force development:
///   physiological and methodological considerations
pub mod mvic {
    /// Width of the sliding epoch over which force is averaged (seconds)
    pub const EPOCH_DURATION_S: f64 = 0.25;

    /// Width of the user-selected baseline window (seconds)
    pub const BASELINE_WINDOW_S: f64 = 0.5;

    /// Default isometric acquisition rate (Hz)
    pub const DEFAULT_SAMPLE_RATE_HZ: f64 = 2000.0;
}

/// Stored-value precision
pub mod precision {
    /// Decimal places kept for every outcome scalar; aggregation consumes
    /// the rounded values, not the raw ones
    pub const OUTCOME_DECIMALS: u32 = 3;

    /// Decimal places kept for symmetry (LSI) ratios
    pub const LSI_DECIMALS: u32 = 2;

    /// Decimal places written for corrected-signal exports
    pub const SIGNAL_EXPORT_DECIMALS: usize = 8;
}

/// Round a value to the given number of decimal places
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Round an outcome scalar to stored precision (3 decimals)
#[must_use]
pub fn round_outcome(value: f64) -> f64 {
    round_to(value, precision::OUTCOME_DECIMALS)
}

/// Round a symmetry ratio to stored precision (2 decimals)
#[must_use]
pub fn round_lsi(value: f64) -> f64 {
    round_to(value, precision::LSI_DECIMALS)
}
