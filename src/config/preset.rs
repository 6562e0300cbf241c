//! Named stage positions from TOML.

use serde::Deserialize;

use crate::stage::{Axis, MoveRequest};

/// A named absolute target, such as a slide center or a load position.
///
/// Omitted axes hold their current value when the preset is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct StagePreset {
    /// Target X coordinate in millimeters.
    #[serde(default)]
    pub x: Option<f64>,

    /// Target Y coordinate in millimeters.
    #[serde(default)]
    pub y: Option<f64>,

    /// Target Z coordinate in millimeters.
    #[serde(default)]
    pub z: Option<f64>,
}

impl StagePreset {
    /// Coordinate the preset sets for an axis, if any.
    pub fn get(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Whether the preset leaves every axis untouched.
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.z.is_none()
    }

    /// Build the absolute move request this preset stands for.
    pub fn to_move_request(&self) -> MoveRequest {
        MoveRequest {
            x: self.x,
            y: self.y,
            z: self.z,
            relative: false,
        }
    }
}

impl From<&StagePreset> for MoveRequest {
    fn from(preset: &StagePreset) -> Self {
        preset.to_move_request()
    }
}
