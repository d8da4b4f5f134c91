//! Computer opponent: a greedy priority cascade.
//!
//! 1. Complete one of its own lines.
//! 2. Block a line the human could complete next move.
//! 3. Take the center.
//! 4. Pick any empty cell uniformly at random.
//!
//! There is no look-ahead beyond one move. A human who sets up two threats at
//! once still wins; the block rule only ever covers the first one.

use crate::board::Board;
use crate::position::Position;
use crate::rules::WIN_PATTERNS;
use crate::types::Player;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule of the cascade produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Decision {
    /// Completes a computer line.
    #[display("win")]
    Win,
    /// Stops a human line.
    #[display("block")]
    Block,
    /// Takes the center cell.
    #[display("center")]
    Center,
    /// Uniform pick among empty cells.
    #[display("random")]
    Random,
}

/// Chosen cell together with the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct ComputerMove {
    position: Position,
    decision: Decision,
}

impl ComputerMove {
    /// Cell to play.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Rule that fired.
    pub fn decision(&self) -> Decision {
        self.decision
    }
}

/// Chooses the computer's next cell.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng), fields(occupied = board.occupied_count()))]
pub fn choose_computer_move<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Option<ComputerMove> {
    let choice = completing_move(board, Player::Computer)
        .map(|pos| ComputerMove::new(pos, Decision::Win))
        .or_else(|| {
            completing_move(board, Player::Human)
                .map(|pos| ComputerMove::new(pos, Decision::Block))
        })
        .or_else(|| {
            (!board.is_occupied(Position::Center))
                .then(|| ComputerMove::new(Position::Center, Decision::Center))
        })
        .or_else(|| {
            board
                .empty_positions()
                .choose(rng)
                .map(|pos| ComputerMove::new(*pos, Decision::Random))
        });

    match &choice {
        Some(mov) => debug!(
            position = %mov.position(),
            decision = %mov.decision(),
            "Computer chose move"
        ),
        None => debug!("No empty cell left for the computer"),
    }
    choice
}

/// First empty cell that would complete a line for `player`.
///
/// Scans lines in [`WIN_PATTERNS`] order. A line qualifies when exactly one of
/// its cells is not held by `player` and that cell is empty.
pub fn completing_move(board: &Board, player: Player) -> Option<Position> {
    let held = board.positions_of(player);
    WIN_PATTERNS.iter().find_map(|pattern| {
        let missing = pattern.difference(held);
        if missing.len() != 1 {
            return None;
        }
        missing.first().filter(|pos| !board.is_occupied(*pos))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Move;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_from(moves: &[(Player, Position)]) -> Board {
        let mut board = Board::new();
        for (player, pos) in moves {
            board.place(Move::new(*player, *pos));
        }
        board
    }

    fn pick(board: &Board) -> ComputerMove {
        let mut rng = StdRng::seed_from_u64(7);
        choose_computer_move(board, &mut rng).expect("board has room")
    }

    #[test]
    fn test_takes_center_on_quiet_board() {
        let board = board_from(&[(Player::Human, Position::TopLeft)]);
        let mov = pick(&board);
        assert_eq!(mov.position(), Position::Center);
        assert_eq!(mov.decision(), Decision::Center);
    }

    #[test]
    fn test_win_beats_block() {
        let board = board_from(&[
            (Player::Human, Position::TopLeft),
            (Player::Human, Position::TopCenter),
            (Player::Computer, Position::MiddleLeft),
            (Player::Computer, Position::Center),
        ]);
        let mov = pick(&board);
        assert_eq!(mov.position(), Position::MiddleRight);
        assert_eq!(mov.decision(), Decision::Win);
    }

    #[test]
    fn test_two_wins_takes_earliest_line() {
        // Row 2 (cell 6) comes before column 2 (cell 5) in the line order.
        let board = board_from(&[
            (Player::Human, Position::TopLeft),
            (Player::Human, Position::TopCenter),
            (Player::Human, Position::Center),
            (Player::Computer, Position::TopRight),
            (Player::Computer, Position::BottomCenter),
            (Player::Computer, Position::BottomRight),
        ]);
        let mov = pick(&board);
        assert_eq!(mov.position(), Position::BottomLeft);
        assert_eq!(mov.decision(), Decision::Win);
    }

    #[test]
    fn test_blocks_human_line() {
        let board = board_from(&[
            (Player::Human, Position::TopLeft),
            (Player::Human, Position::TopCenter),
            (Player::Computer, Position::Center),
        ]);
        let mov = pick(&board);
        assert_eq!(mov.position(), Position::TopRight);
        assert_eq!(mov.decision(), Decision::Block);
    }

    #[test]
    fn test_ignores_lines_already_blocked() {
        // Human top row is dead; center column has only one human mark.
        let board = board_from(&[
            (Player::Human, Position::TopLeft),
            (Player::Human, Position::TopCenter),
            (Player::Computer, Position::TopRight),
        ]);
        assert_eq!(completing_move(&board, Player::Human), None);
        assert_eq!(pick(&board).decision(), Decision::Center);
    }

    #[test]
    fn test_double_threat_blocks_first_line_only() {
        // Human threatens row 0 (cell 2) and column 0 (cell 6).
        let board = board_from(&[
            (Player::Human, Position::TopLeft),
            (Player::Human, Position::TopCenter),
            (Player::Human, Position::MiddleLeft),
            (Player::Computer, Position::Center),
            (Player::Computer, Position::BottomRight),
        ]);
        let mov = pick(&board);
        assert_eq!(mov.position(), Position::TopRight);
        assert_eq!(mov.decision(), Decision::Block);
    }

    #[test]
    fn test_random_pick_is_an_empty_cell() {
        let board = board_from(&[
            (Player::Human, Position::Center),
            (Player::Computer, Position::TopLeft),
        ]);
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mov = choose_computer_move(&board, &mut rng).expect("board has room");
            assert_eq!(mov.decision(), Decision::Random);
            assert!(!board.is_occupied(mov.position()));
        }
    }

    #[test]
    fn test_random_pick_is_reproducible_with_seed() {
        let board = board_from(&[(Player::Human, Position::Center)]);
        let a = choose_computer_move(&board, &mut StdRng::seed_from_u64(99));
        let b = choose_computer_move(&board, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            let player = if i % 2 == 0 { Player::Human } else { Player::Computer };
            board.place(Move::new(player, pos));
        }
        assert_eq!(choose_computer_move(&board, &mut StdRng::seed_from_u64(1)), None);
    }
}
