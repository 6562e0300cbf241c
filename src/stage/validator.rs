//! Target computation and bounds checking.
//!
//! Everything here is pure: no I/O, no logging, no hidden state. A validator can be shared
//! between any number of callers.

use crate::config::AxisLimits;
use crate::error::OutOfRangeError;

use super::position::{Axis, Position};
use super::request::MoveRequest;

/// Resolve a move request against the current position into a full absolute target.
///
/// Per axis, relative requests add the offset (omitted = 0) and absolute requests take the
/// value (omitted = current). Total over all inputs; non-finite values pass through unchanged
/// and are rejected later by [`PositionValidator::validate_position`].
pub fn calculate_target_position(current: Position, request: &MoveRequest) -> Position {
    let resolve = |axis: Axis| {
        let now = current.get(axis);
        match (request.relative, request.get(axis)) {
            (true, Some(offset)) => now + offset,
            (true, None) => now,
            (false, Some(target)) => target,
            (false, None) => now,
        }
    };

    Position::new(resolve(Axis::X), resolve(Axis::Y), resolve(Axis::Z))
}

/// Safety gate between requested moves and the motor transport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionValidator {
    limits: AxisLimits,
}

impl PositionValidator {
    /// Create a validator for the given bounds.
    pub const fn new(limits: AxisLimits) -> Self {
        Self { limits }
    }

    /// The bounds this validator enforces.
    #[inline]
    pub fn limits(&self) -> &AxisLimits {
        &self.limits
    }

    /// See [`calculate_target_position`].
    #[inline]
    pub fn calculate_target_position(&self, current: Position, request: &MoveRequest) -> Position {
        calculate_target_position(current, request)
    }

    /// Check that every coordinate of `target` is within its inclusive axis range.
    ///
    /// Axes are checked X, then Y, then Z and the first failure is returned. Never clamps.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] naming the axis, the offending value and the violated range.
    /// NaN is always out of range.
    pub fn validate_position(&self, target: &Position) -> Result<(), OutOfRangeError> {
        for (axis, range) in self.limits.iter() {
            let value = target.get(axis);
            if !range.contains(value) {
                return Err(OutOfRangeError {
                    axis,
                    value,
                    min: range.min.0,
                    max: range.max.0,
                });
            }
        }
        Ok(())
    }

    /// Compute the absolute target for `request` and validate it.
    pub fn check_move(
        &self,
        current: Position,
        request: &MoveRequest,
    ) -> Result<Position, OutOfRangeError> {
        let target = calculate_target_position(current, request);
        self.validate_position(&target)?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AxisRange;

    fn validator() -> PositionValidator {
        PositionValidator::new(AxisLimits::new(
            AxisRange::new(0.0, 100.0),
            AxisRange::new(0.0, 100.0),
            AxisRange::new(0.0, 50.0),
        ))
    }

    #[test]
    fn test_absolute_full() {
        let current = Position::new(10.0, 10.0, 10.0);
        let req = MoveRequest::absolute().with_x(50.0).with_y(20.0).with_z(5.0);
        assert_eq!(
            calculate_target_position(current, &req),
            Position::new(50.0, 20.0, 5.0)
        );
    }

    #[test]
    fn test_absolute_partial_holds_axes() {
        let current = Position::new(10.0, 10.0, 10.0);
        let req = MoveRequest::absolute().with_x(50.0);
        assert_eq!(
            calculate_target_position(current, &req),
            Position::new(50.0, 10.0, 10.0)
        );
    }

    #[test]
    fn test_relative_partial_zero_offset() {
        let current = Position::new(10.0, 10.0, 10.0);
        let req = MoveRequest::relative().with_x(5.0);
        assert_eq!(
            calculate_target_position(current, &req),
            Position::new(15.0, 10.0, 10.0)
        );
    }

    #[test]
    fn test_relative_full() {
        let req = MoveRequest::relative().with_x(-5.0).with_y(5.0).with_z(0.0);
        assert_eq!(
            calculate_target_position(Position::default(), &req),
            Position::new(-5.0, 5.0, 0.0)
        );
    }

    #[test]
    fn test_first_failing_axis_reported() {
        // Both X and Z are out of range; X wins.
        let err = validator()
            .validate_position(&Position::new(150.0, 10.0, 80.0))
            .unwrap_err();
        assert_eq!(err.axis, Axis::X);
        assert_eq!(err.value, 150.0);
        assert_eq!((err.min, err.max), (0.0, 100.0));
    }

    #[test]
    fn test_repeat_failure_identical() {
        let v = validator();
        let target = Position::new(10.0, -3.0, 10.0);

        let first = v.validate_position(&target).unwrap_err();
        let second = v.validate_position(&target).unwrap_err();
        assert_eq!(first, second);
        assert_eq!(first.axis, Axis::Y);
    }

    #[test]
    fn test_nan_fails_closed() {
        let err = validator()
            .validate_position(&Position::new(10.0, 10.0, f64::NAN))
            .unwrap_err();
        assert_eq!(err.axis, Axis::Z);
        assert!(err.value.is_nan());
    }

    #[test]
    fn test_relative_infinity_rejected() {
        let req = MoveRequest::relative().with_y(f64::INFINITY);
        let err = validator()
            .check_move(Position::new(1.0, 1.0, 1.0), &req)
            .unwrap_err();
        assert_eq!(err.axis, Axis::Y);
        assert_eq!(err.value, f64::INFINITY);
    }
}
