//! Turn processing for one human vs. computer session.

use crate::board::{Board, BoardSnapshot};
use crate::computer::{ComputerMove, choose_computer_move};
use crate::error::{BoardError, MoveError};
use crate::position::Position;
use crate::rules::{check_win, evaluate, is_draw};
use crate::types::{GameStatus, Move, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Outcome of the human half of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanTurn {
    /// Cell was occupied; nothing changed.
    Rejected,
    /// The game was already over, or the human's move ended it.
    Finished(GameStatus),
    /// The human's move landed and the computer must reply.
    AwaitingComputer,
}

/// Game engine owning the board and the computer's random source.
///
/// All operations are synchronous. A front-end that wants a visible pause
/// before the computer answers calls [`Engine::play_human`], waits, then
/// calls [`Engine::play_computer`]; [`Engine::apply_human_move`] does both
/// at once.
#[derive(Debug, Clone)]
pub struct Engine<R = StdRng> {
    board: Board,
    rng: R,
}

impl Engine<StdRng> {
    /// Creates an engine whose random rule is seeded from the OS.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates an engine that plays the same game for the same human moves.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Engine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Engine<R> {
    /// Creates an engine with a caller-supplied random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            board: Board::new(),
            rng,
        }
    }

    /// Resumes play from a prepared board with the human to move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TurnOrder`] unless both players have the same
    /// number of marks, and [`BoardError::BothWon`] if both hold a line.
    #[instrument(skip(board, rng), fields(occupied = board.occupied_count()))]
    pub fn from_board(board: Board, rng: R) -> Result<Self, BoardError> {
        let human = board.positions_of(Player::Human).len();
        let computer = board.positions_of(Player::Computer).len();
        if human != computer {
            return Err(BoardError::TurnOrder { human, computer });
        }
        if check_win(&board, Player::Human) && check_win(&board, Player::Computer) {
            return Err(BoardError::BothWon);
        }
        Ok(Self { board, rng })
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copy of all nine slots for rendering.
    pub fn board_snapshot(&self) -> BoardSnapshot {
        *self.board.slots()
    }

    /// Status recomputed from the board.
    pub fn status(&self) -> GameStatus {
        evaluate(&self.board)
    }

    /// Clears the board for a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        info!("Board reset");
    }

    /// Plays a full turn: the human's move, then the computer's reply.
    ///
    /// Moves on occupied cells are ignored and report
    /// [`GameStatus::InProgress`]. Moves after the game ended are ignored and
    /// report the final status.
    #[instrument(skip(self), fields(position = %position))]
    pub fn apply_human_move(&mut self, position: Position) -> GameStatus {
        match self.play_human(position) {
            HumanTurn::Rejected => GameStatus::InProgress,
            HumanTurn::Finished(status) => status,
            HumanTurn::AwaitingComputer => self.play_computer(),
        }
    }

    /// Like [`Engine::apply_human_move`] for a raw cell index.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for an index above 8; the board is
    /// left untouched.
    #[instrument(skip(self))]
    pub fn apply_human_move_index(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        Ok(self.apply_human_move(position))
    }

    /// Places the human's mark and checks whether the game ended.
    #[instrument(skip(self), fields(position = %position))]
    pub fn play_human(&mut self, position: Position) -> HumanTurn {
        // A finished board reports its final status for every cell, occupied
        // or not, so the caller always sees why the move was ignored.
        let current = self.status();
        if current.is_terminal() {
            debug!(status = ?current, "Game already over, ignoring move");
            return HumanTurn::Finished(current);
        }
        if self.board.is_occupied(position) {
            debug!("Square occupied, ignoring move");
            return HumanTurn::Rejected;
        }

        self.board.place(Move::new(Player::Human, position));

        match self.terminal_after(Player::Human) {
            Some(status) => HumanTurn::Finished(status),
            None => HumanTurn::AwaitingComputer,
        }
    }

    /// Places the computer's reply and returns the resulting status.
    ///
    /// On a finished board nothing is placed and the final status is returned.
    #[instrument(skip(self))]
    pub fn play_computer(&mut self) -> GameStatus {
        let current = self.status();
        if current.is_terminal() {
            return current;
        }

        let Some(reply) = choose_computer_move(&self.board, &mut self.rng) else {
            return self.status();
        };
        self.place_computer(reply);

        self.terminal_after(Player::Computer)
            .unwrap_or(GameStatus::InProgress)
    }

    fn place_computer(&mut self, reply: ComputerMove) {
        info!(position = %reply.position(), decision = %reply.decision(), "Computer moves");
        self.board.place(Move::new(Player::Computer, reply.position()));
    }

    /// Terminal status after `mover` placed a mark, checking only `mover`'s lines.
    fn terminal_after(&self, mover: Player) -> Option<GameStatus> {
        let status = if check_win(&self.board, mover) {
            GameStatus::won_by(mover)
        } else if is_draw(&self.board) {
            GameStatus::Draw
        } else {
            return None;
        };
        info!(%status, "Game over");
        Some(status)
    }
}
