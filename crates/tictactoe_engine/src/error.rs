//! Engine error types.

use crate::position::Position;
use derive_more::{Display, Error};

/// Rejection of raw move input.
///
/// Occupied cells and moves after the game ended are not errors; the engine
/// ignores them. Only input that cannot name a cell at all is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Position {} is off the board (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),
}

/// A board that the engine could not have produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A slot holds a move for a different cell.
    #[display("Slot {} holds a move at {}", index, position)]
    SlotMismatch {
        /// Slot index.
        index: usize,
        /// Position recorded in the stored move.
        position: Position,
    },
    /// Mark counts do not leave the human to move.
    #[display("Human has {} marks and computer {}; expected equal counts", human, computer)]
    TurnOrder {
        /// Human marks on the board.
        human: usize,
        /// Computer marks on the board.
        computer: usize,
    },
    /// Both players hold a complete line.
    #[display("Both players hold a complete line")]
    BothWon,
}
