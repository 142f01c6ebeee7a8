// ABOUTME: Metric schema registry: ordered metric definitions per protocol
// ABOUTME: Single source of truth for outcome ordering, labels, and units across tables and exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

//! # Metric Schema Registry
//!
//! One ordered list of [`MetricDef`] per `(MovementType, PlateSetup)`
//! combination. The outcome calculators emit values in schema order, the
//! trial table renders rows in schema order, and the symmetry pass pairs
//! `Left `/`Right ` labels from the same registry. Nothing else in the
//! codebase hardcodes metric lists.

use serde::Serialize;

use crate::models::trial::{MovementType, PlateSetup, Side};

/// A single outcome metric: stable key, human-readable label, and unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricDef {
    /// Stable snake_case key (`jh_cm`, `con_peak_force_n`, ...)
    pub key: &'static str,
    /// Display label without the unit (`Concentric Peak Force`)
    pub label: &'static str,
    /// Unit string as printed in table headers (`N`, `N·kg⁻¹`, ...)
    pub unit: &'static str,
}

impl MetricDef {
    const fn new(key: &'static str, label: &'static str, unit: &'static str) -> Self {
        Self { key, label, unit }
    }

    /// Label with unit, as rendered in exported tables
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.label, self.unit)
    }

    /// If the label carries a limb prefix, return the side and the
    /// remainder of the label (used for LSI pairing)
    #[must_use]
    pub fn side_prefix(&self) -> Option<(Side, &'static str)> {
        if let Some(rest) = self.label.strip_prefix("Left ") {
            Some((Side::Left, rest))
        } else {
            self.label
                .strip_prefix("Right ")
                .map(|rest| (Side::Right, rest))
        }
    }
}

// Unit strings shared across schemas
const KG: &str = "kg";
const CM: &str = "cm";
const AU: &str = "AU";
const W: &str = "W";
const N: &str = "N";
const N_PER_KG: &str = "N·kg⁻¹";
const NS: &str = "Ns";
const N_PER_S: &str = "N·s⁻¹";
const S: &str = "s";
const M_PER_S: &str = "m·s⁻¹";
const BW_PER_S: &str = "BW/s";

/// Countermovement-family schema (single plate): SLJ and CMJ share it
static COUNTERMOVEMENT_SINGLE: [MetricDef; 41] = [
    MetricDef::new("bodymass", "Body Mass", KG),
    MetricDef::new("jh_cm", "Jump Height", CM),
    MetricDef::new("mrsi", "Modified Reactive Strength Index", AU),
    MetricDef::new("con_peak_power", "Concentric Peak Power", W),
    MetricDef::new("ecc_peak_power", "Eccentric Peak Power", W),
    MetricDef::new("land_peak_power", "Landing Peak Power", W),
    MetricDef::new("con_mean_power", "Concentric Mean Power", W),
    MetricDef::new("ecc_mean_power", "Eccentric Mean Power", W),
    MetricDef::new("land_mean_power", "Landing Mean Power", W),
    MetricDef::new("con_peak_force_n", "Concentric Peak Force", N),
    MetricDef::new("con_peak_force_nkg", "Concentric Peak Force", N_PER_KG),
    MetricDef::new("ecc_peak_force_n", "Eccentric Peak Force", N),
    MetricDef::new("ecc_peak_force_nkg", "Eccentric Peak Force", N_PER_KG),
    MetricDef::new("con_mean_force_n", "Concentric Mean Force", N),
    MetricDef::new("con_mean_force_nkg", "Concentric Mean Force", N_PER_KG),
    MetricDef::new("ecc_mean_force_n", "Eccentric Mean Force", N),
    MetricDef::new("ecc_mean_force_nkg", "Eccentric Mean Force", N_PER_KG),
    MetricDef::new("land_peak_force_n", "Landing Peak Force", N),
    MetricDef::new("land_peak_force_nkg", "Landing Peak Force", N_PER_KG),
    MetricDef::new("land_mean_force_n", "Landing Mean Force", N),
    MetricDef::new("land_mean_force_nkg", "Landing Mean Force", N_PER_KG),
    MetricDef::new("con_impulse", "Concentric Impulse", NS),
    MetricDef::new("ecc_impulse", "Eccentric Impulse", NS),
    MetricDef::new("positive_impulse", "Positive Impulse", NS),
    MetricDef::new("land_impulse", "Landing Impulse", NS),
    MetricDef::new("con_rfd", "Concentric Rate of Force Development", N_PER_S),
    MetricDef::new("ecc_rfd", "Eccentric Rate of Force Development", N_PER_S),
    MetricDef::new("land_rfd", "Landing Rate of Force Development", N_PER_S),
    MetricDef::new("unweigh_dur", "Unweighing Phase Duration", S),
    MetricDef::new("ecc_time_s", "Eccentric Phase Duration", S),
    MetricDef::new("con_time_s", "Concentric Phase Duration", S),
    MetricDef::new("contraction_time_s", "Contraction Duration", S),
    MetricDef::new("flight_time_s", "Flight Time", S),
    MetricDef::new("land_time_s", "Landing Phase Duration", S),
    MetricDef::new("con_peak_velocity", "Concentric Peak Velocity", M_PER_S),
    MetricDef::new("ecc_peak_velocity", "Eccentric Peak Velocity", M_PER_S),
    MetricDef::new("land_peak_velocity", "Landing Peak Velocity", M_PER_S),
    MetricDef::new("con_mean_velocity", "Concentric Mean Velocity", M_PER_S),
    MetricDef::new("ecc_mean_velocity", "Eccentric Mean Velocity", M_PER_S),
    MetricDef::new("vto", "Takeoff Velocity", M_PER_S),
    MetricDef::new("cm_depth", "Countermovement Depth", CM),
];

/// Dual-plate countermovement schema: total + left + right kinetic blocks
static COUNTERMOVEMENT_DUAL: [MetricDef; 79] = [
    MetricDef::new("bodymass", "Body Mass", KG),
    MetricDef::new("jh_cm", "Jump Height", CM),
    MetricDef::new("mrsi", "Modified Reactive Strength Index", AU),
    MetricDef::new("con_peak_power", "Concentric Peak Power", W),
    MetricDef::new("ecc_peak_power", "Eccentric Peak Power", W),
    MetricDef::new("land_peak_power", "Landing Peak Power", W),
    MetricDef::new("con_mean_power", "Concentric Mean Power", W),
    MetricDef::new("ecc_mean_power", "Eccentric Mean Power", W),
    MetricDef::new("land_mean_power", "Landing Mean Power", W),
    MetricDef::new("total_con_peak_force_n", "Total Concentric Peak Force", N),
    MetricDef::new("total_con_peak_force_nkg", "Total Concentric Peak Force", N_PER_KG),
    MetricDef::new("total_ecc_peak_force_n", "Total Eccentric Peak Force", N),
    MetricDef::new("total_ecc_peak_force_nkg", "Total Eccentric Peak Force", N_PER_KG),
    MetricDef::new("total_con_mean_force_n", "Total Concentric Mean Force", N),
    MetricDef::new("total_con_mean_force_nkg", "Total Concentric Mean Force", N_PER_KG),
    MetricDef::new("total_ecc_mean_force_n", "Total Eccentric Mean Force", N),
    MetricDef::new("total_ecc_mean_force_nkg", "Total Eccentric Mean Force", N_PER_KG),
    MetricDef::new("total_land_peak_force_n", "Total Landing Peak Force", N),
    MetricDef::new("total_land_peak_force_nkg", "Total Landing Peak Force", N_PER_KG),
    MetricDef::new("total_land_mean_force_n", "Total Landing Mean Force", N),
    MetricDef::new("total_land_mean_force_nkg", "Total Landing Mean Force", N_PER_KG),
    MetricDef::new("total_con_impulse", "Total Concentric Impulse", NS),
    MetricDef::new("total_ecc_impulse", "Total Eccentric Impulse", NS),
    MetricDef::new("total_positive_impulse", "Total Positive Impulse", NS),
    MetricDef::new("total_land_impulse", "Total Landing Impulse", NS),
    MetricDef::new("total_con_rfd", "Total Concentric Rate of Force Development", N_PER_S),
    MetricDef::new("total_ecc_rfd", "Total Eccentric Rate of Force Development", N_PER_S),
    MetricDef::new("total_land_rfd", "Total Landing Rate of Force Development", N_PER_S),
    MetricDef::new("left_con_peak_force_n", "Left Concentric Peak Force", N),
    MetricDef::new("left_con_peak_force_nkg", "Left Concentric Peak Force", N_PER_KG),
    MetricDef::new("left_ecc_peak_force_n", "Left Eccentric Peak Force", N),
    MetricDef::new("left_ecc_peak_force_nkg", "Left Eccentric Peak Force", N_PER_KG),
    MetricDef::new("left_con_mean_force_n", "Left Concentric Mean Force", N),
    MetricDef::new("left_con_mean_force_nkg", "Left Concentric Mean Force", N_PER_KG),
    MetricDef::new("left_ecc_mean_force_n", "Left Eccentric Mean Force", N),
    MetricDef::new("left_ecc_mean_force_nkg", "Left Eccentric Mean Force", N_PER_KG),
    MetricDef::new("left_land_peak_force_n", "Left Landing Peak Force", N),
    MetricDef::new("left_land_peak_force_nkg", "Left Landing Peak Force", N_PER_KG),
    MetricDef::new("left_land_mean_force_n", "Left Landing Mean Force", N),
    MetricDef::new("left_land_mean_force_nkg", "Left Landing Mean Force", N_PER_KG),
    MetricDef::new("left_con_impulse", "Left Concentric Impulse", NS),
    MetricDef::new("left_ecc_impulse", "Left Eccentric Impulse", NS),
    MetricDef::new("left_positive_impulse", "Left Positive Impulse", NS),
    MetricDef::new("left_land_impulse", "Left Landing Impulse", NS),
    MetricDef::new("left_con_rfd", "Left Concentric Rate of Force Development", N_PER_S),
    MetricDef::new("left_ecc_rfd", "Left Eccentric Rate of Force Development", N_PER_S),
    MetricDef::new("left_land_rfd", "Left Landing Rate of Force Development", N_PER_S),
    MetricDef::new("right_con_peak_force_n", "Right Concentric Peak Force", N),
    MetricDef::new("right_con_peak_force_nkg", "Right Concentric Peak Force", N_PER_KG),
    MetricDef::new("right_ecc_peak_force_n", "Right Eccentric Peak Force", N),
    MetricDef::new("right_ecc_peak_force_nkg", "Right Eccentric Peak Force", N_PER_KG),
    MetricDef::new("right_con_mean_force_n", "Right Concentric Mean Force", N),
    MetricDef::new("right_con_mean_force_nkg", "Right Concentric Mean Force", N_PER_KG),
    MetricDef::new("right_ecc_mean_force_n", "Right Eccentric Mean Force", N),
    MetricDef::new("right_ecc_mean_force_nkg", "Right Eccentric Mean Force", N_PER_KG),
    MetricDef::new("right_land_peak_force_n", "Right Landing Peak Force", N),
    MetricDef::new("right_land_peak_force_nkg", "Right Landing Peak Force", N_PER_KG),
    MetricDef::new("right_land_mean_force_n", "Right Landing Mean Force", N),
    MetricDef::new("right_land_mean_force_nkg", "Right Landing Mean Force", N_PER_KG),
    MetricDef::new("right_con_impulse", "Right Concentric Impulse", NS),
    MetricDef::new("right_ecc_impulse", "Right Eccentric Impulse", NS),
    MetricDef::new("right_positive_impulse", "Right Positive Impulse", NS),
    MetricDef::new("right_land_impulse", "Right Landing Impulse", NS),
    MetricDef::new("right_con_rfd", "Right Concentric Rate of Force Development", N_PER_S),
    MetricDef::new("right_ecc_rfd", "Right Eccentric Rate of Force Development", N_PER_S),
    MetricDef::new("right_land_rfd", "Right Landing Rate of Force Development", N_PER_S),
    MetricDef::new("unweigh_dur", "Unweighing Phase Duration", S),
    MetricDef::new("ecc_time_s", "Eccentric Phase Duration", S),
    MetricDef::new("con_time_s", "Concentric Phase Duration", S),
    MetricDef::new("contraction_time_s", "Contraction Duration", S),
    MetricDef::new("flight_time_s", "Flight Time", S),
    MetricDef::new("land_time_s", "Landing Phase Duration", S),
    MetricDef::new("con_peak_velocity", "Concentric Peak Velocity", M_PER_S),
    MetricDef::new("ecc_peak_velocity", "Eccentric Peak Velocity", M_PER_S),
    MetricDef::new("land_peak_velocity", "Landing Peak Velocity", M_PER_S),
    MetricDef::new("con_mean_velocity", "Concentric Mean Velocity", M_PER_S),
    MetricDef::new("ecc_mean_velocity", "Eccentric Mean Velocity", M_PER_S),
    MetricDef::new("vto", "Takeoff Velocity", M_PER_S),
    MetricDef::new("cm_depth", "Countermovement Depth", CM),
];

/// Single-plate drop-jump schema ("Total" force labels kept even on one
/// plate, matching the laboratory's reporting convention)
static DROP_JUMP_SINGLE: [MetricDef; 37] = [
    MetricDef::new("bodymass", "Body Mass", KG),
    MetricDef::new("box_height", "Box Height", CM),
    MetricDef::new("jh_cm", "Jump Height", CM),
    MetricDef::new("rsi", "Reactive Strength Index", AU),
    MetricDef::new("con_peak_power", "Concentric Peak Power", W),
    MetricDef::new("ecc_peak_power", "Eccentric Peak Power", W),
    MetricDef::new("land_peak_power", "Landing Peak Power", W),
    MetricDef::new("con_mean_power", "Concentric Mean Power", W),
    MetricDef::new("ecc_mean_power", "Eccentric Mean Power", W),
    MetricDef::new("land_mean_power", "Landing Mean Power", W),
    MetricDef::new("con_peak_force_n", "Total Concentric Peak Force", N),
    MetricDef::new("con_peak_force_nkg", "Total Concentric Peak Force", N_PER_KG),
    MetricDef::new("ecc_peak_force_n", "Total Eccentric Peak Force", N),
    MetricDef::new("ecc_peak_force_nkg", "Total Eccentric Peak Force", N_PER_KG),
    MetricDef::new("con_mean_force_n", "Total Concentric Mean Force", N),
    MetricDef::new("con_mean_force_nkg", "Total Concentric Mean Force", N_PER_KG),
    MetricDef::new("ecc_mean_force_n", "Total Eccentric Mean Force", N),
    MetricDef::new("ecc_mean_force_nkg", "Total Eccentric Mean Force", N_PER_KG),
    MetricDef::new("land_peak_force_n", "Total Landing Peak Force", N),
    MetricDef::new("land_peak_force_nkg", "Total Landing Peak Force", N_PER_KG),
    MetricDef::new("land_mean_force_n", "Total Landing Mean Force", N),
    MetricDef::new("land_mean_force_nkg", "Total Landing Mean Force", N_PER_KG),
    MetricDef::new("con_impulse", "Total Concentric Impulse", NS),
    MetricDef::new("ecc_impulse", "Total Eccentric Impulse", NS),
    MetricDef::new("positive_impulse", "Total Positive Impulse", NS),
    MetricDef::new("land_impulse", "Total Landing Impulse", NS),
    MetricDef::new("groundcontact_time_s", "Ground Contact Phase Duration", S),
    MetricDef::new("ecc_time_s", "Eccentric Phase Duration", S),
    MetricDef::new("con_time_s", "Concentric Phase Duration", S),
    MetricDef::new("flight_time_s", "Flight Time", S),
    MetricDef::new("land_time_s", "Landing Phase Duration", S),
    MetricDef::new("con_peak_velocity", "Concentric Peak Velocity", M_PER_S),
    MetricDef::new("land_peak_velocity", "Landing Peak Velocity", M_PER_S),
    MetricDef::new("land_mean_velocity", "Landing Mean Velocity", M_PER_S),
    MetricDef::new("con_mean_velocity", "Concentric Mean Velocity", M_PER_S),
    MetricDef::new("ecc_mean_velocity", "Eccentric Mean Velocity", M_PER_S),
    MetricDef::new("vto", "Takeoff Velocity", M_PER_S),
];

/// Dual-plate drop-jump schema
static DROP_JUMP_DUAL: [MetricDef; 69] = [
    MetricDef::new("bodymass", "Body Mass", KG),
    MetricDef::new("box_height", "Box Height", CM),
    MetricDef::new("jh_cm", "Jump Height", CM),
    MetricDef::new("rsi", "Reactive Strength Index", AU),
    MetricDef::new("con_peak_power", "Concentric Peak Power", W),
    MetricDef::new("ecc_peak_power", "Eccentric Peak Power", W),
    MetricDef::new("land_peak_power", "Landing Peak Power", W),
    MetricDef::new("con_mean_power", "Concentric Mean Power", W),
    MetricDef::new("ecc_mean_power", "Eccentric Mean Power", W),
    MetricDef::new("land_mean_power", "Landing Mean Power", W),
    MetricDef::new("total_con_peak_force_n", "Total Concentric Peak Force", N),
    MetricDef::new("total_con_peak_force_nkg", "Total Concentric Peak Force", N_PER_KG),
    MetricDef::new("total_ecc_peak_force_n", "Total Eccentric Peak Force", N),
    MetricDef::new("total_ecc_peak_force_nkg", "Total Eccentric Peak Force", N_PER_KG),
    MetricDef::new("total_con_mean_force_n", "Total Concentric Mean Force", N),
    MetricDef::new("total_con_mean_force_nkg", "Total Concentric Mean Force", N_PER_KG),
    MetricDef::new("total_ecc_mean_force_n", "Total Eccentric Mean Force", N),
    MetricDef::new("total_ecc_mean_force_nkg", "Total Eccentric Mean Force", N_PER_KG),
    MetricDef::new("total_land_peak_force_n", "Total Landing Peak Force", N),
    MetricDef::new("total_land_peak_force_nkg", "Total Landing Peak Force", N_PER_KG),
    MetricDef::new("total_land_mean_force_n", "Total Landing Mean Force", N),
    MetricDef::new("total_land_mean_force_nkg", "Total Landing Mean Force", N_PER_KG),
    MetricDef::new("total_con_impulse", "Total Concentric Impulse", NS),
    MetricDef::new("total_ecc_impulse", "Total Eccentric Impulse", NS),
    MetricDef::new("total_positive_impulse", "Total Positive Impulse", NS),
    MetricDef::new("total_land_impulse", "Total Landing Impulse", NS),
    MetricDef::new("left_con_peak_force_n", "Left Concentric Peak Force", N),
    MetricDef::new("left_con_peak_force_nkg", "Left Concentric Peak Force", N_PER_KG),
    MetricDef::new("left_ecc_peak_force_n", "Left Eccentric Peak Force", N),
    MetricDef::new("left_ecc_peak_force_nkg", "Left Eccentric Peak Force", N_PER_KG),
    MetricDef::new("left_con_mean_force_n", "Left Concentric Mean Force", N),
    MetricDef::new("left_con_mean_force_nkg", "Left Concentric Mean Force", N_PER_KG),
    MetricDef::new("left_ecc_mean_force_n", "Left Eccentric Mean Force", N),
    MetricDef::new("left_ecc_mean_force_nkg", "Left Eccentric Mean Force", N_PER_KG),
    MetricDef::new("left_land_peak_force_n", "Left Landing Peak Force", N),
    MetricDef::new("left_land_peak_force_nkg", "Left Landing Peak Force", N_PER_KG),
    MetricDef::new("left_land_mean_force_n", "Left Landing Mean Force", N),
    MetricDef::new("left_land_mean_force_nkg", "Left Landing Mean Force", N_PER_KG),
    MetricDef::new("left_con_impulse", "Left Concentric Impulse", NS),
    MetricDef::new("left_ecc_impulse", "Left Eccentric Impulse", NS),
    MetricDef::new("left_positive_impulse", "Left Positive Impulse", NS),
    MetricDef::new("left_land_impulse", "Left Landing Impulse", NS),
    MetricDef::new("right_con_peak_force_n", "Right Concentric Peak Force", N),
    MetricDef::new("right_con_peak_force_nkg", "Right Concentric Peak Force", N_PER_KG),
    MetricDef::new("right_ecc_peak_force_n", "Right Eccentric Peak Force", N),
    MetricDef::new("right_ecc_peak_force_nkg", "Right Eccentric Peak Force", N_PER_KG),
    MetricDef::new("right_con_mean_force_n", "Right Concentric Mean Force", N),
    MetricDef::new("right_con_mean_force_nkg", "Right Concentric Mean Force", N_PER_KG),
    MetricDef::new("right_ecc_mean_force_n", "Right Eccentric Mean Force", N),
    MetricDef::new("right_ecc_mean_force_nkg", "Right Eccentric Mean Force", N_PER_KG),
    MetricDef::new("right_land_peak_force_n", "Right Landing Peak Force", N),
    MetricDef::new("right_land_peak_force_nkg", "Right Landing Peak Force", N_PER_KG),
    MetricDef::new("right_land_mean_force_n", "Right Landing Mean Force", N),
    MetricDef::new("right_land_mean_force_nkg", "Right Landing Mean Force", N_PER_KG),
    MetricDef::new("right_con_impulse", "Right Concentric Impulse", NS),
    MetricDef::new("right_ecc_impulse", "Right Eccentric Impulse", NS),
    MetricDef::new("right_positive_impulse", "Right Positive Impulse", NS),
    MetricDef::new("right_land_impulse", "Right Landing Impulse", NS),
    MetricDef::new("groundcontact_time_s", "Ground Contact Phase Duration", S),
    MetricDef::new("ecc_time_s", "Eccentric Phase Duration", S),
    MetricDef::new("con_time_s", "Concentric Phase Duration", S),
    MetricDef::new("flight_time_s", "Flight Time", S),
    MetricDef::new("land_time_s", "Landing Phase Duration", S),
    MetricDef::new("con_peak_velocity", "Concentric Peak Velocity", M_PER_S),
    MetricDef::new("land_peak_velocity", "Landing Peak Velocity", M_PER_S),
    MetricDef::new("land_mean_velocity", "Landing Mean Velocity", M_PER_S),
    MetricDef::new("con_mean_velocity", "Concentric Mean Velocity", M_PER_S),
    MetricDef::new("ecc_mean_velocity", "Eccentric Mean Velocity", M_PER_S),
    MetricDef::new("vto", "Takeoff Velocity", M_PER_S),
];

/// Single-plate drop-landing schema
static DROP_LANDING_SINGLE: [MetricDef; 4] = [
    MetricDef::new("bodymass", "Body Mass", KG),
    MetricDef::new("peak_force_n", "Peak Landing Force", N),
    MetricDef::new("peak_force_nkg", "Peak Landing Force", N_PER_KG),
    MetricDef::new("loading_rate_bw_s", "Loading Rate", BW_PER_S),
];

/// Dual-plate drop-landing schema
static DROP_LANDING_DUAL: [MetricDef; 10] = [
    MetricDef::new("bodymass", "Body Mass", KG),
    MetricDef::new("total_peak_force_n", "Total Peak Landing Force", N),
    MetricDef::new("total_peak_force_nkg", "Total Peak Landing Force", N_PER_KG),
    MetricDef::new("left_peak_force_n", "Left Peak Landing Force", N),
    MetricDef::new("left_peak_force_nkg", "Left Peak Landing Force", N_PER_KG),
    MetricDef::new("right_peak_force_n", "Right Peak Landing Force", N),
    MetricDef::new("right_peak_force_nkg", "Right Peak Landing Force", N_PER_KG),
    MetricDef::new("total_loading_rate_bw_s", "Total Loading Rate", BW_PER_S),
    MetricDef::new("left_loading_rate_bw_s", "Left Loading Rate", BW_PER_S),
    MetricDef::new("right_loading_rate_bw_s", "Right Loading Rate", BW_PER_S),
];

/// Ordered metric definitions for a movement/plate combination.
///
/// SLJ and CMJ share the countermovement schema; dual-plate SLJ is not a
/// supported laboratory protocol and maps to the same dual schema as CMJ.
#[must_use]
pub fn schema_for(movement: MovementType, plates: PlateSetup) -> &'static [MetricDef] {
    match (movement, plates) {
        (MovementType::Slj | MovementType::Cmj, PlateSetup::Single) => &COUNTERMOVEMENT_SINGLE,
        (MovementType::Slj | MovementType::Cmj, PlateSetup::Dual) => &COUNTERMOVEMENT_DUAL,
        (MovementType::DropJump, PlateSetup::Single) => &DROP_JUMP_SINGLE,
        (MovementType::DropJump, PlateSetup::Dual) => &DROP_JUMP_DUAL,
        (MovementType::DropLanding, PlateSetup::Single) => &DROP_LANDING_SINGLE,
        (MovementType::DropLanding, PlateSetup::Dual) => &DROP_LANDING_DUAL,
    }
}
