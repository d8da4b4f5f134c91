//! Draw detection and status evaluation.

use super::win::check_win;
use crate::board::Board;
use crate::types::{GameStatus, Player};
use tracing::instrument;

/// Reports whether the board is full.
///
/// Only meaningful as a draw once both players have been checked for a win,
/// which is the order the engine uses.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}

/// Classifies a board from scratch.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if check_win(board, Player::Human) {
        GameStatus::HumanWon
    } else if check_win(board, Player::Computer) {
        GameStatus::ComputerWon
    } else if is_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Move;

    fn fill(board: &mut Board, marks: [Player; 9]) {
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            board.place(Move::new(player, pos));
        }
    }

    #[test]
    fn test_empty_board_not_draw() {
        let board = Board::new();
        assert!(!is_draw(&board));
        assert_eq!(evaluate(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_partial_board_not_draw() {
        let mut board = Board::new();
        board.place(Move::new(Player::Human, Position::Center));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{Computer as O, Human as X};
        // X O X / X O O / O X X
        let mut board = Board::new();
        fill(&mut board, [X, O, X, X, O, O, O, X, X]);

        assert!(is_draw(&board));
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        use Player::{Computer as O, Human as X};
        // X X X / O O X / X O O
        let mut board = Board::new();
        fill(&mut board, [X, X, X, O, O, X, X, O, O]);

        assert!(is_draw(&board));
        assert_eq!(evaluate(&board), GameStatus::HumanWon);
    }
}
