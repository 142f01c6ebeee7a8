// ABOUTME: Trial configuration models: movement types, plate setups, body mass, limb side
// ABOUTME: Validated up front so the pipeline never sees an incomplete context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{AnalysisError, AnalysisResult};

/// Movement protocol performed on the plate(s)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    /// Single-leg countermovement jump
    Slj,
    /// Bilateral countermovement jump
    Cmj,
    /// Drop landing (land-and-hold from a box)
    DropLanding,
    /// Drop jump (land and immediately rebound)
    DropJump,
}

impl MovementType {
    /// Whether this protocol starts from quiet stance on the plate
    /// (countermovement family) as opposed to airborne (drop family)
    #[must_use]
    pub fn starts_on_plate(self) -> bool {
        matches!(self, Self::Slj | Self::Cmj)
    }

    /// Whether this protocol requires an externally supplied drop height
    #[must_use]
    pub fn needs_drop_height(self) -> bool {
        matches!(self, Self::DropJump)
    }

    /// Whether this protocol requires an externally measured body mass
    /// (drop protocols have no quiet-stance window to derive it from)
    #[must_use]
    pub fn needs_measured_mass(self) -> bool {
        matches!(self, Self::DropLanding | Self::DropJump)
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Slj => "single-leg jump",
            Self::Cmj => "countermovement jump",
            Self::DropLanding => "drop landing",
            Self::DropJump => "drop jump",
        };
        f.write_str(name)
    }
}

/// Number of plates used for the acquisition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateSetup {
    /// One plate; one force channel
    Single,
    /// Two plates; left and right channels summed into a total
    Dual,
}

/// Limb a unilateral trial belongs to.
///
/// The side is attached explicitly at ingestion time; the pipeline never
/// infers it from trial names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Left limb
    Left,
    /// Right limb
    Right,
}

impl Side {
    /// Human-readable label used in table headers and metric prefixes
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }

    /// Best-effort inference from a trial/file name, for callers whose
    /// naming convention encodes the limb ("LEFT"/"RIGHT", any case).
    ///
    /// This is an ingestion-edge convenience only; pass the result into
    /// [`TrialContext`] explicitly.
    #[must_use]
    pub fn infer_from_name(name: &str) -> Option<Self> {
        let upper = name.to_uppercase();
        if upper.contains("LEFT") {
            Some(Self::Left)
        } else if upper.contains("RIGHT") {
            Some(Self::Right)
        } else {
            None
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the athlete's body mass comes from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyMass {
    /// Derived per trial from the quiet-stance force window
    FromQuietStance,
    /// Supplied externally, in kilograms
    MeasuredKg(f64),
}

/// Validated configuration bundle for one analysis session.
///
/// Construction goes through [`TrialContext::new`], which enforces the
/// movement-specific requirements before any trial is touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialContext {
    /// Movement protocol
    pub movement: MovementType,
    /// Plate configuration
    pub plates: PlateSetup,
    /// Acquisition rate in Hz
    pub sample_rate_hz: f64,
    /// Body-mass source
    pub body_mass: BodyMass,
    /// Drop/box height in meters (drop protocols)
    pub drop_height_m: Option<f64>,
}

impl TrialContext {
    /// Build and validate a trial context.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Configuration`] when the sample rate is not
    /// positive, a drop protocol is missing its drop height or measured
    /// mass, or a quiet-stance protocol is given a non-positive mass.
    pub fn new(
        movement: MovementType,
        plates: PlateSetup,
        sample_rate_hz: f64,
        body_mass: BodyMass,
        drop_height_m: Option<f64>,
    ) -> AnalysisResult<Self> {
        if sample_rate_hz <= 0.0 || !sample_rate_hz.is_finite() {
            return Err(AnalysisError::configuration(format!(
                "sample rate must be positive, got {sample_rate_hz}"
            )));
        }
        if let BodyMass::MeasuredKg(kg) = body_mass {
            if kg <= 0.0 || !kg.is_finite() {
                return Err(AnalysisError::configuration(format!(
                    "body mass must be positive, got {kg} kg"
                )));
            }
        }
        if movement.needs_measured_mass() && matches!(body_mass, BodyMass::FromQuietStance) {
            return Err(AnalysisError::configuration(format!(
                "{movement} trials have no quiet-stance window; body mass must be supplied"
            )));
        }
        match drop_height_m {
            Some(h) if h <= 0.0 || !h.is_finite() => {
                return Err(AnalysisError::configuration(format!(
                    "drop height must be positive, got {h} m"
                )));
            }
            None if movement.needs_drop_height() => {
                return Err(AnalysisError::configuration(format!(
                    "{movement} trials require a drop height"
                )));
            }
            _ => {}
        }
        Ok(Self {
            movement,
            plates,
            sample_rate_hz,
            body_mass,
            drop_height_m,
        })
    }

    /// Measured mass in kg, if the context carries one
    #[must_use]
    pub fn measured_mass_kg(&self) -> Option<f64> {
        match self.body_mass {
            BodyMass::MeasuredKg(kg) => Some(kg),
            BodyMass::FromQuietStance => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_jump_requires_height_and_mass() {
        let err = TrialContext::new(
            MovementType::DropJump,
            PlateSetup::Single,
            1000.0,
            BodyMass::MeasuredKg(72.0),
            None,
        );
        assert!(err.is_err());

        let err = TrialContext::new(
            MovementType::DropJump,
            PlateSetup::Single,
            1000.0,
            BodyMass::FromQuietStance,
            Some(0.30),
        );
        assert!(err.is_err());

        let ok = TrialContext::new(
            MovementType::DropJump,
            PlateSetup::Single,
            1000.0,
            BodyMass::MeasuredKg(72.0),
            Some(0.30),
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn cmj_derives_mass_from_stance() {
        let ctx = TrialContext::new(
            MovementType::Cmj,
            PlateSetup::Single,
            1000.0,
            BodyMass::FromQuietStance,
            None,
        );
        assert!(ctx.is_ok());
    }

    #[test]
    fn side_inference_is_case_insensitive() {
        assert_eq!(Side::infer_from_name("slj_LEFT_03"), Some(Side::Left));
        assert_eq!(Side::infer_from_name("Right_trial"), Some(Side::Right));
        assert_eq!(Side::infer_from_name("cmj_01"), None);
    }
}
