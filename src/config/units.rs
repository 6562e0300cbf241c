//! Unit types for physical quantities.
//!
//! Stage coordinates are carried as millimeters throughout. The newtype keeps configured bounds
//! from being mixed up with unitless values at API boundaries.

use core::fmt;
use core::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Linear distance or coordinate in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl Millimeters {
    /// Create a new Millimeters value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to micrometers.
    #[inline]
    pub fn to_micrometers(self) -> f64 {
        self.0 * 1000.0
    }

    /// Create from micrometers.
    #[inline]
    pub fn from_micrometers(um: f64) -> Self {
        Self(um / 1000.0)
    }

    /// Whether the value is neither NaN nor infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Millimeters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Millimeters {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Millimeters {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<f64> for Millimeters {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Millimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mm", self.0)
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Millimeters.
    fn mm(self) -> Millimeters;
}

impl UnitExt for f64 {
    #[inline]
    fn mm(self) -> Millimeters {
        Millimeters(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_micrometer_conversion() {
        let d = Millimeters::new(1.5);
        assert!((d.to_micrometers() - 1500.0).abs() < 1e-9);
        assert_eq!(Millimeters::from_micrometers(250.0), 0.25_f64.mm());
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(10.0_f64.mm() + 5.0_f64.mm(), 15.0_f64.mm());
        assert_eq!(10.0_f64.mm() - 15.0_f64.mm(), -(5.0_f64.mm()));
    }

    #[test]
    fn test_finite() {
        assert!(Millimeters(0.0).is_finite());
        assert!(!Millimeters(f64::NAN).is_finite());
        assert!(!Millimeters(f64::INFINITY).is_finite());
    }
}
