// ABOUTME: Small slice-statistics helpers shared by the detection and outcome code
// ABOUTME: Max/min/mean/sample-SD over phase slices of finite force data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

/// Maximum of a slice. Returns 0.0 for an empty slice; phase validation
/// guarantees the slices used for outcomes are non-empty.
pub(crate) fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Minimum of a slice
pub(crate) fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Arithmetic mean of a slice
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n − 1 denominator)
pub(crate) fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

/// Index of the minimum value within the slice
pub(crate) fn argmin(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if *v < values[best] {
            best = i;
        }
    }
    best
}

/// Index of the maximum value within the slice
pub(crate) fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if *v > values[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_std_uses_n_minus_one() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // population SD is 2.0; sample SD is larger
        let sd = sample_std(&values);
        assert!((sd - 2.138_089_935).abs() < 1e-6);
    }

    #[test]
    fn argmin_picks_first_occurrence() {
        assert_eq!(argmin(&[3.0, -1.0, 2.0, -1.0]), 1);
    }
}
