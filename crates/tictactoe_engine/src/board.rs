//! Board storage: nine optional move slots.

use crate::error::BoardError;
use crate::position::Position;
use crate::position_set::PositionSet;
use crate::types::{Move, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 board of move slots in row-major order.
///
/// A slot is only written through [`Board::place`], which stores the move at
/// its own position, so an occupied slot always matches its index.
/// Deserialized boards are checked for the same property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    slots: [Option<Move>; 9],
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    slots: [Option<Move>; 9],
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Self::from_slots(raw.slots)
    }
}

/// Read-only copy of the board handed to renderers.
pub type BoardSnapshot = [Option<Move>; 9];

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self { slots: [None; 9] }
    }

    /// Builds a board from nine slots.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SlotMismatch`] if a slot holds a move for
    /// another cell.
    pub fn from_slots(slots: BoardSnapshot) -> Result<Self, BoardError> {
        for (index, slot) in slots.iter().enumerate() {
            if let Some(mov) = slot
                && mov.position().to_index() != index
            {
                return Err(BoardError::SlotMismatch {
                    index,
                    position: mov.position(),
                });
            }
        }
        Ok(Self { slots })
    }

    /// Move stored at `position`, if any.
    pub fn get(&self, position: Position) -> Option<Move> {
        self.slots[position.to_index()]
    }

    /// True iff some move sits at `position`.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.get(position).is_some()
    }

    /// Every position holding a move by `player`.
    pub fn positions_of(&self, player: Player) -> PositionSet {
        self.slots
            .iter()
            .flatten()
            .filter(|mov| mov.player() == player)
            .map(|mov| mov.position())
            .collect()
    }

    /// Empty positions in ascending order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| !self.is_occupied(*pos))
            .collect()
    }

    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// True iff all nine slots are occupied.
    pub fn is_full(&self) -> bool {
        self.occupied_count() == 9
    }

    /// Writes `mov` into its slot.
    ///
    /// The slot must be empty; callers check with [`Board::is_occupied`] first.
    #[instrument(skip(self), fields(player = ?mov.player(), position = %mov.position()))]
    pub fn place(&mut self, mov: Move) {
        debug_assert!(
            !self.is_occupied(mov.position()),
            "place() called on occupied square {}",
            mov.position()
        );
        self.slots[mov.position().to_index()] = Some(mov);
    }

    /// All nine slots.
    pub fn slots(&self) -> &BoardSnapshot {
        &self.slots
    }
}

impl std::fmt::Display for Board {
    /// Marks for occupied cells, 1-based cell numbers for empty ones.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.slots[idx] {
                    Some(mov) => write!(f, "{}", mov.player().mark())?,
                    None => write!(f, "{}", idx + 1)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
