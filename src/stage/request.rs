//! Partial, possibly relative move requests.

use serde::Deserialize;

use super::position::Axis;

/// A requested stage move as handed in by a caller.
///
/// Each axis is optional: `None` means "do not change this axis". With `relative` set, the
/// provided values are offsets from the current position; otherwise they are absolute targets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveRequest {
    /// X target or offset.
    #[serde(default)]
    pub x: Option<f64>,
    /// Y target or offset.
    #[serde(default)]
    pub y: Option<f64>,
    /// Z target or offset.
    #[serde(default)]
    pub z: Option<f64>,
    /// Interpret values as offsets from the current position.
    #[serde(default)]
    pub relative: bool,
}

impl MoveRequest {
    /// Empty absolute request (holds every axis).
    pub const fn absolute() -> Self {
        Self {
            x: None,
            y: None,
            z: None,
            relative: false,
        }
    }

    /// Empty relative request (zero offset on every axis).
    pub const fn relative() -> Self {
        Self {
            x: None,
            y: None,
            z: None,
            relative: true,
        }
    }

    /// Set the X value.
    pub const fn with_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    /// Set the Y value.
    pub const fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    /// Set the Z value.
    pub const fn with_z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    /// Set the value for an axis.
    pub fn with_axis(self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => self.with_x(value),
            Axis::Y => self.with_y(value),
            Axis::Z => self.with_z(value),
        }
    }

    /// Requested value for an axis, if any.
    pub fn get(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Whether no axis is specified.
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.z.is_none()
    }
}
