// ABOUTME: Numerical integration of force into acceleration, velocity, position, and power
// ABOUTME: Trapezoidal scheme for stance-start trials, seeded forward Euler for drop contacts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

//! Numerical integration of the force trace.
//!
//! Two schemes are used, matching the boundary conditions of each trial
//! family:
//!
//! - **Jump protocols** start at rest on the plate, so velocity is the
//!   cumulative trapezoidal integral of net acceleration with `v(0) = 0`.
//!   The integral arrays carry one fewer element than the force array:
//!   `velocity[k]` is the velocity after the interval ending at sample
//!   `k + 1`. Phase slices use the same indices as the force array, which
//!   keeps force, velocity, and power slices aligned to within one sample.
//! - **Drop protocols** begin mid-flight; integration starts at ground
//!   contact from the analytic impact velocity `−√(2·g·h)` using explicit
//!   forward Euler, because the force discontinuity at contact makes a
//!   trapezoidal first interval meaningless.

use grfmetrics_core::constants::physics::GRAVITY;
use grfmetrics_core::models::ForceTrace;

/// Trapezoidal integral of uniformly sampled values
#[must_use]
pub fn trapz(values: &[f64], dx: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let interior: f64 = values[1..values.len() - 1].iter().sum();
    dx * (interior + (values[0] + values[values.len() - 1]) / 2.0)
}

/// Cumulative trapezoidal integral; output has `values.len() - 1` elements,
/// where `out[k]` is the integral through sample `k + 1`.
#[must_use]
pub fn cumtrapz(values: &[f64], dx: f64) -> Vec<f64> {
    if values.len() < 2 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(values.len() - 1);
    let mut acc = 0.0;
    for pair in values.windows(2) {
        acc += dx * (pair[0] + pair[1]) / 2.0;
        out.push(acc);
    }
    out
}

/// Forward-Euler integration with a non-zero initial condition; output has
/// the same length as the input and `out[0] == initial`.
#[must_use]
pub fn euler_integrate(values: &[f64], dx: f64, initial: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut acc = initial;
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            acc += v * dx;
        }
        out.push(acc);
    }
    out
}

/// Impact velocity after free fall from `drop_height_m`, signed downward
#[must_use]
pub fn impact_velocity(drop_height_m: f64) -> f64 {
    -(2.0 * GRAVITY * drop_height_m).sqrt()
}

/// Derived kinematic arrays for a trial that starts from quiet stance.
///
/// `velocity`, `position`, and `power` each have one fewer element than the
/// force trace (see module docs for the index convention).
#[derive(Debug, Clone)]
pub struct JumpKinematics {
    /// Net acceleration (m/s²), full trace length
    pub accel: Vec<f64>,
    /// Centre-of-mass velocity (m/s)
    pub velocity: Vec<f64>,
    /// Centre-of-mass displacement (m)
    pub position: Vec<f64>,
    /// Instantaneous power (W): `force[k + 1] * velocity[k]`
    pub power: Vec<f64>,
}

impl JumpKinematics {
    /// Integrate a quiet-stance trial: acceleration from net force over the
    /// whole trace, velocity and position by cumulative trapezoids, power as
    /// the index-aligned force-velocity product.
    #[must_use]
    pub fn derive(trace: &ForceTrace, bw_mean_n: f64, body_mass_kg: f64) -> Self {
        let dt = trace.dt();
        let accel: Vec<f64> = trace
            .samples()
            .iter()
            .map(|f| (f - bw_mean_n) / body_mass_kg)
            .collect();
        let velocity = cumtrapz(&accel, dt);
        let position = cumtrapz(&velocity, dt);
        let power: Vec<f64> = trace.samples()[1..]
            .iter()
            .zip(velocity.iter())
            .map(|(f, v)| f * v)
            .collect();
        Self {
            accel,
            velocity,
            position,
            power,
        }
    }
}

/// Velocity over a drop-protocol contact window, seeded with the analytic
/// impact velocity. Indices are relative to the start of the window
/// (ground contact); `velocity[0]` is the impact velocity itself.
#[derive(Debug, Clone)]
pub struct ContactKinematics {
    /// Centre-of-mass velocity (m/s) across the contact window
    pub velocity: Vec<f64>,
}

impl ContactKinematics {
    /// Integrate net force over `[ground_contact, end_land)` with
    /// `v(0) = −√(2·g·h)`.
    #[must_use]
    pub fn derive(
        contact_force: &[f64],
        dt: f64,
        body_weight_n: f64,
        body_mass_kg: f64,
        drop_height_m: f64,
    ) -> Self {
        let accel: Vec<f64> = contact_force
            .iter()
            .map(|f| (f - body_weight_n) / body_mass_kg)
            .collect();
        let velocity = euler_integrate(&accel, dt, impact_velocity(drop_height_m));
        Self { velocity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trapz_matches_closed_form_for_linear_ramp() {
        // ∫0..1 x dx = 0.5
        let n = 1001;
        let values: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
        let integral = trapz(&values, 1.0 / (n - 1) as f64);
        assert!((integral - 0.5).abs() < 1e-9);
    }

    #[test]
    fn cumtrapz_recovers_constant_acceleration() {
        // a(t) = 2.0 → v(t) = 2 t; check the final sample against closed form
        let dt = 0.001;
        let accel = vec![2.0; 1001];
        let velocity = cumtrapz(&accel, dt);
        assert_eq!(velocity.len(), 1000);
        let v_final = velocity[velocity.len() - 1];
        assert!((v_final - 2.0).abs() < 1e-3);
    }

    #[test]
    fn euler_integration_carries_initial_condition() {
        let accel = vec![0.0; 100];
        let velocity = euler_integrate(&accel, 0.001, -2.5);
        assert!((velocity[0] + 2.5).abs() < 1e-12);
        assert!((velocity[99] + 2.5).abs() < 1e-12);
    }

    #[test]
    fn impact_velocity_from_half_metre_drop() {
        // v = -sqrt(2 * 9.81 * 0.5) ≈ -3.132
        assert!((impact_velocity(0.5) + 3.132_091).abs() < 1e-5);
    }

    #[test]
    fn jump_kinematics_are_index_aligned() {
        let trace = ForceTrace::new(vec![700.0; 100], 1000.0);
        let kin = JumpKinematics::derive(&trace, 700.0, 71.36);
        assert_eq!(kin.accel.len(), 100);
        assert_eq!(kin.velocity.len(), 99);
        assert_eq!(kin.position.len(), 98);
        assert_eq!(kin.power.len(), 99);
        // constant body weight: no net motion
        assert!(kin.velocity.iter().all(|v| v.abs() < 1e-12));
    }
}
