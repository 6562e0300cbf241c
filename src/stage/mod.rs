//! Stage module for stage-safety.
//!
//! Provides the position model, move requests, the bounds validator and the controller that
//! sequences validated moves onto a transport.

mod controller;
mod position;
mod request;
mod validator;

pub use controller::StageController;
pub use position::{Axis, Position};
pub use request::MoveRequest;
pub use validator::{calculate_target_position, PositionValidator};
