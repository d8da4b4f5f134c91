//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::position::Position;
use crate::position_set::PositionSet;
use crate::types::Player;
use tracing::instrument;

/// The eight winning lines in fixed order.
///
/// The order is part of the contract: when several lines qualify for the
/// computer's win or block rule, the earliest one here is chosen.
pub const WIN_PATTERNS: [PositionSet; 8] = [
    // Rows
    PositionSet::of(&[Position::TopLeft, Position::TopCenter, Position::TopRight]),
    PositionSet::of(&[Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    PositionSet::of(&[Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    PositionSet::of(&[Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    PositionSet::of(&[Position::TopCenter, Position::Center, Position::BottomCenter]),
    PositionSet::of(&[Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    PositionSet::of(&[Position::TopLeft, Position::Center, Position::BottomRight]),
    PositionSet::of(&[Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// True iff `player` holds every cell of at least one winning line.
#[instrument(skip(board))]
pub fn check_win(board: &Board, player: Player) -> bool {
    let held = board.positions_of(player);
    WIN_PATTERNS.iter().any(|pattern| pattern.is_subset(held))
}

/// Returns the player holding a complete line, if any.
///
/// Human is checked first; boards produced by the engine never have both.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    [Player::Human, Player::Computer]
        .into_iter()
        .find(|player| check_win(board, *player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Move;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.place(Move::new(player, *pos));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!check_win(&board, Player::Human));
        assert!(!check_win(&board, Player::Computer));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            Player::Human,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        assert!(check_win(&board, Player::Human));
        assert!(!check_win(&board, Player::Computer));
        assert_eq!(winner(&board), Some(Player::Human));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(
            Player::Computer,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        assert_eq!(winner(&board), Some(Player::Computer));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::Human, &[Position::TopLeft, Position::TopCenter]);
        assert!(!check_win(&board, Player::Human));
    }

    #[test]
    fn test_line_plus_extra_cells_still_wins() {
        let board = board_with(
            Player::Human,
            &[
                Position::TopCenter,
                Position::Center,
                Position::BottomCenter,
                Position::TopLeft,
            ],
        );
        assert!(check_win(&board, Player::Human));
    }

    #[test]
    fn test_every_pattern_has_three_cells() {
        for pattern in WIN_PATTERNS {
            assert_eq!(pattern.len(), 3);
        }
    }
}
