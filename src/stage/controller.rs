//! Move sequencing in front of a stage transport.

use heapless::String;

use crate::config::{AxisLimits, StageConfig};
use crate::error::{ConfigError, Error, Result, TransportError};
use crate::transport::StageTransport;

use super::position::Position;
use super::request::MoveRequest;
use super::validator::PositionValidator;

/// Owns a stage transport and guards every move it receives.
///
/// Each move reads the position fresh from the transport, resolves the request into an absolute
/// target, validates it and only then commands the transport. Moves take `&mut self`, so one
/// controller never has two moves in flight.
///
/// # Example
///
/// ```rust
/// use stage_safety::{
///     AxisLimits, AxisRange, MockStageTransport, MoveRequest, Position, StageController,
/// };
///
/// let limits = AxisLimits::new(
///     AxisRange::new(0.0, 100.0),
///     AxisRange::new(0.0, 100.0),
///     AxisRange::new(0.0, 25.0),
/// );
/// let stage = MockStageTransport::at(Position::new(50.0, 25.5, 10.0));
/// let mut controller = StageController::new(stage, limits);
///
/// let target = controller.move_stage(&MoveRequest::relative().with_z(10.0))?;
/// assert_eq!(target, Position::new(50.0, 25.5, 20.0));
/// # Ok::<(), stage_safety::Error>(())
/// ```
pub struct StageController<T: StageTransport> {
    transport: T,
    validator: PositionValidator,
}

impl<T: StageTransport> StageController<T> {
    /// Create a controller enforcing `limits` on `transport`.
    pub fn new(transport: T, limits: AxisLimits) -> Self {
        Self {
            transport,
            validator: PositionValidator::new(limits),
        }
    }

    /// Create a controller from a loaded configuration.
    pub fn from_config(transport: T, config: &StageConfig) -> Self {
        Self::new(transport, config.limits)
    }

    /// The enforced bounds, for read-only display.
    pub fn limits(&self) -> &AxisLimits {
        self.validator.limits()
    }

    /// The validator used for every move.
    pub fn validator(&self) -> &PositionValidator {
        &self.validator
    }

    /// Borrow the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Release the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Read the stage position from the transport.
    pub fn current_position(&mut self) -> Result<Position> {
        self.transport
            .current_position()
            .map_err(|_| Error::Transport(TransportError::PositionUnavailable))
    }

    /// Resolve and validate `request` against the live position without moving.
    ///
    /// Lets a caller pre-check a move and show the operator where it would land.
    pub fn plan_move(&mut self, request: &MoveRequest) -> Result<Position> {
        let current = self.current_position()?;
        let target = self.validator.calculate_target_position(current, request);
        debug!("stage move {} -> {}", current, target);

        if let Err(e) = self.validator.validate_position(&target) {
            warn!("stage move rejected: {}", e);
            return Err(e.into());
        }

        Ok(target)
    }

    /// Move the stage according to `request`.
    ///
    /// Returns the absolute target that was commanded. If validation fails, nothing is sent to
    /// the transport and the stage stays where it was.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if the position query or the move command fails
    /// - [`Error::OutOfRange`] if the target is outside the configured bounds
    pub fn move_stage(&mut self, request: &MoveRequest) -> Result<Position> {
        let target = self.plan_move(request)?;

        self.transport
            .move_absolute(target)
            .map_err(|_| Error::Transport(TransportError::CommandFailed))?;
        info!("stage moved to {}", target);

        Ok(target)
    }

    /// Move the stage to a named preset from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PresetNotFound`] for an unknown name, otherwise as
    /// [`move_stage`](Self::move_stage).
    pub fn move_to_preset(&mut self, name: &str, config: &StageConfig) -> Result<Position> {
        let preset = config.preset(name).ok_or_else(|| {
            Error::Config(ConfigError::PresetNotFound(
                String::try_from(name).unwrap_or_default(),
            ))
        })?;

        self.move_stage(&preset.to_move_request())
    }
}
