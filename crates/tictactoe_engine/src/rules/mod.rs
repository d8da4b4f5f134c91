//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the engine and the computer heuristic share them.

pub mod draw;
pub mod win;

pub use draw::{evaluate, is_draw};
pub use win::{WIN_PATTERNS, check_win, winner};
