//! Core domain types for human vs. computer tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Participant in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Player {
    /// The person at the keyboard (always moves first).
    Human,
    /// The engine's heuristic opponent.
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Mark drawn on the board for this player.
    pub fn mark(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }
}

/// A player placing their mark at a position.
///
/// Moves are immutable once created; the board only ever stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    player: Player,
    position: Position,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.player, self.position.label())
    }
}

/// Classification of the current board.
///
/// Never stored; always recomputed from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// The human completed a line.
    HumanWon,
    /// The computer completed a line.
    ComputerWon,
    /// Board is full with no line.
    Draw,
}

impl GameStatus {
    /// True for every status except [`GameStatus::InProgress`].
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Status reached when `player` completes a line.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Human => GameStatus::HumanWon,
            Player::Computer => GameStatus::ComputerWon,
        }
    }

    /// Winner, if the game ended in a win.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::HumanWon => Some(Player::Human),
            GameStatus::ComputerWon => Some(Player::Computer),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::HumanWon => write!(f, "Human wins"),
            GameStatus::ComputerWon => write!(f, "Computer wins"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
