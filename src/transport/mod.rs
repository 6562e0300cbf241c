//! Hardware seam for stage motion.
//!
//! A transport talks to the motor controller, over the network or a local bus. It only ever
//! receives validated, fully-populated absolute targets.

mod mock;

pub use mock::{MockStageTransport, MockTransportError, MAX_RECORDED_MOVES};

use core::fmt::Debug;

use crate::stage::Position;

/// Access to a motorized stage.
pub trait StageTransport {
    /// Transport-specific failure.
    type Error: Debug;

    /// Read the current stage position. Called fresh before every move.
    fn current_position(&mut self) -> Result<Position, Self::Error>;

    /// Command an absolute move to `target`.
    fn move_absolute(&mut self, target: Position) -> Result<(), Self::Error>;
}

impl<T: StageTransport + ?Sized> StageTransport for &mut T {
    type Error = T::Error;

    fn current_position(&mut self) -> Result<Position, Self::Error> {
        (**self).current_position()
    }

    fn move_absolute(&mut self, target: Position) -> Result<(), Self::Error> {
        (**self).move_absolute(target)
    }
}
