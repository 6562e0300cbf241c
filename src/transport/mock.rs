//! In-memory transport for tests and dry runs.

use heapless::Vec;

use crate::stage::Position;

use super::StageTransport;

/// Number of most recent absolute commands a [`MockStageTransport`] keeps in its log.
pub const MAX_RECORDED_MOVES: usize = 32;

/// Failures a [`MockStageTransport`] can be told to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockTransportError {
    /// Position query failed.
    Unavailable,
    /// Move command was refused.
    Rejected,
}

/// Stage transport double.
///
/// Starts at a given position and applies every absolute command to it. The most recent
/// [`MAX_RECORDED_MOVES`] commands are kept in a log; older ones are dropped, never refused.
///
/// ```rust
/// use stage_safety::{MockStageTransport, Position, StageTransport};
///
/// let mut stage = MockStageTransport::at(Position::new(1.0, 2.0, 3.0));
/// stage.move_absolute(Position::new(4.0, 5.0, 6.0)).unwrap();
/// assert_eq!(stage.moves(), &[Position::new(4.0, 5.0, 6.0)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockStageTransport {
    position: Position,
    moves: Vec<Position, MAX_RECORDED_MOVES>,
    move_count: u32,
    queries: u32,
    fail_next_query: bool,
    fail_next_move: bool,
}

impl MockStageTransport {
    /// Create a transport sitting at `position`.
    pub fn at(position: Position) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Current simulated position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Move the simulated stage without recording a command, like a manual jog.
    pub fn jog_to(&mut self, position: Position) {
        self.position = position;
    }

    /// Most recent absolute commands received, oldest first.
    pub fn moves(&self) -> &[Position] {
        &self.moves
    }

    /// Total number of absolute commands applied, including ones dropped from the log.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Number of position queries served.
    pub fn queries(&self) -> u32 {
        self.queries
    }

    /// Make the next position query fail.
    pub fn fail_next_query(&mut self) {
        self.fail_next_query = true;
    }

    /// Make the next move command fail.
    pub fn fail_next_move(&mut self) {
        self.fail_next_move = true;
    }
}

impl StageTransport for MockStageTransport {
    type Error = MockTransportError;

    fn current_position(&mut self) -> Result<Position, Self::Error> {
        if core::mem::take(&mut self.fail_next_query) {
            return Err(MockTransportError::Unavailable);
        }
        self.queries += 1;
        Ok(self.position)
    }

    fn move_absolute(&mut self, target: Position) -> Result<(), Self::Error> {
        if core::mem::take(&mut self.fail_next_move) {
            return Err(MockTransportError::Rejected);
        }
        if self.moves.is_full() {
            self.moves.remove(0);
        }
        // Cannot fail: a slot was freed above.
        let _ = self.moves.push(target);
        self.move_count += 1;
        self.position = target;
        Ok(())
    }
}
