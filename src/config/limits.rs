//! Per-axis safety bounds.

use core::fmt;
use core::fmt::Write;

use serde::{Deserialize, Serialize};

use super::units::Millimeters;
use crate::stage::Axis;

/// Inclusive `[min, max]` bound for one axis, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisRange {
    /// Minimum allowed coordinate.
    #[serde(rename = "min_mm")]
    pub min: Millimeters,

    /// Maximum allowed coordinate.
    #[serde(rename = "max_mm")]
    pub max: Millimeters,
}

impl AxisRange {
    /// Create a new range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min: Millimeters(min),
            max: Millimeters(max),
        }
    }

    /// Check if the range is usable (both bounds finite, min <= max).
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min.0 <= self.max.0
    }

    /// Check if a coordinate is within the range, bounds included.
    ///
    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min.0 && value <= self.max.0
    }

    /// Width of the range.
    pub fn span(&self) -> Millimeters {
        self.max - self.min
    }
}

impl fmt::Display for AxisRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min.0, self.max.0)
    }
}

/// Capacity of [`AxisLimits::describe`] output.
///
/// Fits the label plus two exponent-form `f64` values (at most 24 bytes each).
pub const DESCRIBE_CAPACITY: usize = 96;

/// Safety bounds for all three axes.
///
/// Loaded once at startup and read-only afterwards, so it can be shared freely between callers.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisLimits {
    /// X axis bounds.
    pub x: AxisRange,
    /// Y axis bounds.
    pub y: AxisRange,
    /// Z axis bounds.
    pub z: AxisRange,
}

impl AxisLimits {
    /// Create limits from one range per axis.
    pub const fn new(x: AxisRange, y: AxisRange, z: AxisRange) -> Self {
        Self { x, y, z }
    }

    /// Get the range for an axis.
    #[inline]
    pub fn range(&self, axis: Axis) -> AxisRange {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Mutable access to the range for an axis.
    #[inline]
    pub fn range_mut(&mut self, axis: Axis) -> &mut AxisRange {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    /// Iterate over `(axis, range)` pairs in X, Y, Z order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, AxisRange)> + '_ {
        Axis::ALL.iter().map(move |&axis| (axis, self.range(axis)))
    }

    /// First axis whose range is unusable, if any.
    pub fn first_invalid(&self) -> Option<(Axis, AxisRange)> {
        self.iter().find(|(_, range)| !range.is_valid())
    }

    /// Human-readable range for display, e.g. `"valid X range: 0–100 mm"`.
    ///
    /// Bounds too long for plain notation are written in exponent form, e.g. `1e300`.
    pub fn describe(&self, axis: Axis) -> heapless::String<DESCRIBE_CAPACITY> {
        let range = self.range(axis);
        let mut buf = heapless::String::new();
        if write!(buf, "valid {} range: {}–{} mm", axis, range.min.0, range.max.0).is_err() {
            buf.clear();
            let written = write!(buf, "valid {} range: {:e}–{:e} mm", axis, range.min.0, range.max.0);
            debug_assert!(written.is_ok());
        }
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_inclusive() {
        let range = AxisRange::new(0.0, 100.0);

        assert!(range.contains(0.0));
        assert!(range.contains(100.0));
        assert!(range.contains(42.0));
        assert!(!range.contains(100.0001));
        assert!(!range.contains(-0.0001));
        assert!(!range.contains(f64::NAN));
        assert!(!range.contains(f64::INFINITY));
        assert!(!range.contains(f64::NEG_INFINITY));
    }

    #[test]
    fn test_range_validity() {
        assert!(AxisRange::new(0.0, 100.0).is_valid());
        assert!(AxisRange::new(5.0, 5.0).is_valid());
        assert!(!AxisRange::new(10.0, -10.0).is_valid());
        assert!(!AxisRange::new(f64::NAN, 10.0).is_valid());
        assert!(!AxisRange::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_iter_order_and_describe() {
        let limits = AxisLimits::new(
            AxisRange::new(0.0, 100.0),
            AxisRange::new(-50.0, 50.0),
            AxisRange::new(0.0, 25.0),
        );

        let axes: heapless::Vec<Axis, 3> = limits.iter().map(|(a, _)| a).collect();
        assert_eq!(axes.as_slice(), &[Axis::X, Axis::Y, Axis::Z]);
        assert_eq!(limits.describe(Axis::X).as_str(), "valid X range: 0–100 mm");
        assert_eq!(limits.describe(Axis::Y).as_str(), "valid Y range: -50–50 mm");
        assert_eq!(limits.range(Axis::Z).span(), Millimeters(25.0));
    }

    #[test]
    fn test_describe_huge_bounds_not_truncated() {
        let limits = AxisLimits::new(
            AxisRange::new(-1e300, 1e300),
            AxisRange::new(f64::MIN, f64::MAX),
            AxisRange::new(0.0, 25.0),
        );

        assert_eq!(limits.describe(Axis::X).as_str(), "valid X range: -1e300–1e300 mm");
        let y = limits.describe(Axis::Y);
        assert!(y.as_str().starts_with("valid Y range: -1.7976931348623157e308"));
        assert!(y.as_str().ends_with("1.7976931348623157e308 mm"));
    }
}
