//! Tic-tac-toe engine for a human playing against the computer.
//!
//! # Architecture
//!
//! - **Board**: nine optional [`Move`] slots, storage only
//! - **Rules**: the eight winning lines, win and draw checks
//! - **Computer**: greedy win / block / center / random cascade
//! - **Engine**: turn processing and status reporting
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Engine, GameStatus, Position};
//!
//! let mut engine = Engine::with_seed(42);
//! let status = engine.apply_human_move(Position::TopLeft);
//!
//! // Nothing to win or block yet, so the computer takes the center.
//! assert_eq!(status, GameStatus::InProgress);
//! assert!(engine.board().is_occupied(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod computer;
mod engine;
mod error;
mod position;
mod position_set;
pub mod rules;
mod types;

pub use board::{Board, BoardSnapshot};
pub use computer::{ComputerMove, Decision, choose_computer_move, completing_move};
pub use engine::{Engine, HumanTurn};
pub use error::{BoardError, MoveError};
pub use position::Position;
pub use position_set::PositionSet;
pub use rules::{WIN_PATTERNS, check_win, evaluate, is_draw, winner};
pub use types::{GameStatus, Move, Player};
