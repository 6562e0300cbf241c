//! Error types for stage-safety.
//!
//! Provides unified error handling across configuration, bounds validation, and transport calls.

use core::fmt;

use crate::stage::Axis;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stage-safety operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Requested target lies outside the stage's safety bounds
    OutOfRange(OutOfRangeError),
    /// Stage transport query or command failed
    Transport(TransportError),
}

/// A target coordinate fell outside its axis bounds.
///
/// Raised by [`PositionValidator::validate_position`](crate::stage::PositionValidator::validate_position)
/// for the first offending axis in X, Y, Z order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRangeError {
    /// Axis that failed the check.
    pub axis: Axis,
    /// Offending target value in millimeters.
    pub value: f64,
    /// Inclusive lower bound of the axis.
    pub min: f64,
    /// Inclusive upper bound of the axis.
    pub max: f64,
}

impl OutOfRangeError {
    /// Distance past the violated bound, in millimeters.
    ///
    /// Returns NaN for a NaN value, since such a value has no meaningful distance to either bound.
    pub fn exceeded_by(&self) -> f64 {
        if self.value < self.min {
            self.min - self.value
        } else if self.value > self.max {
            self.value - self.max
        } else {
            f64::NAN
        }
    }
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Axis bounds are not finite or min is greater than max
    InvalidLimits {
        /// Axis with the bad range
        axis: Axis,
        /// Configured minimum
        min: f64,
        /// Configured maximum
        max: f64,
    },
    /// Required environment variable is not set
    MissingEnvVar(&'static str),
    /// Environment variable is set but is not a number
    InvalidEnvVar {
        /// Variable name
        name: &'static str,
        /// Raw value (truncated)
        value: heapless::String<32>,
    },
    /// Preset does not set any axis
    EmptyPreset(heapless::String<32>),
    /// Preset coordinate lies outside its axis bounds
    PresetOutOfRange {
        /// Preset name
        preset: heapless::String<32>,
        /// Offending axis
        axis: Axis,
        /// Preset value
        value: f64,
        /// Axis minimum
        min: f64,
        /// Axis maximum
        max: f64,
    },
    /// Preset name not found in configuration
    PresetNotFound(heapless::String<32>),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Stage transport errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Current position could not be read from the motor controller
    PositionUnavailable,
    /// Absolute move command was not accepted
    CommandFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::OutOfRange(e) => write!(f, "Move rejected: {}", e),
            Error::Transport(e) => write!(f, "Transport error: {}", e),
        }
    }
}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} position {} is out of range [{}, {}]",
            self.axis, self.value, self.min, self.max
        )
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidLimits { axis, min, max } => {
                write!(f, "Invalid {} limits: min ({}) must be <= max ({}) and both finite", axis, min, max)
            }
            ConfigError::MissingEnvVar(name) => write!(f, "Environment variable {} is not set", name),
            ConfigError::InvalidEnvVar { name, value } => {
                write!(f, "Environment variable {}='{}' is not a number", name, value)
            }
            ConfigError::EmptyPreset(name) => write!(f, "Preset '{}' does not set any axis", name),
            ConfigError::PresetOutOfRange { preset, axis, value, min, max } => write!(
                f,
                "Preset '{}': {} position {} is out of range [{}, {}]",
                preset, axis, value, min, max
            ),
            ConfigError::PresetNotFound(name) => write!(f, "Preset '{}' not found", name),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::PositionUnavailable => write!(f, "Current stage position unavailable"),
            TransportError::CommandFailed => write!(f, "Absolute move command failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<OutOfRangeError> for Error {
    fn from(e: OutOfRangeError) -> Self {
        Error::OutOfRange(e)
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Error::Transport(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for OutOfRangeError {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for TransportError {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let e = OutOfRangeError {
            axis: Axis::X,
            value: 150.0,
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(e.to_string(), "X position 150 is out of range [0, 100]");
        assert_eq!(e.exceeded_by(), 50.0);
    }

    #[test]
    fn test_exceeded_below_min() {
        let e = OutOfRangeError {
            axis: Axis::Z,
            value: -2.5,
            min: 0.0,
            max: 25.0,
        };
        assert_eq!(e.exceeded_by(), 2.5);
    }
}
