//! End-of-game dialogs.

use tictactoe_engine::GameStatus;

/// Dialog shown when a game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    /// Headline.
    pub title: &'static str,
    /// Body text.
    pub message: &'static str,
    /// Label of the play-again action.
    pub button: &'static str,
}

const HUMAN_WIN: Alert = Alert {
    title: "You won!",
    message: "Impressive, you just beat the smartest AI around!",
    button: "Play again",
};

const COMPUTER_WIN: Alert = Alert {
    title: "You lost!",
    message: "How embarrassing, you just lost to a computer!",
    button: "Play again",
};

const DRAW: Alert = Alert {
    title: "Draw!",
    message: "Impressive, you are on par with the AI!",
    button: "Play again",
};

/// Dialog for a finished game; `None` while the game is running.
pub fn alert_for(status: GameStatus) -> Option<Alert> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::HumanWon => Some(HUMAN_WIN),
        GameStatus::ComputerWon => Some(COMPUTER_WIN),
        GameStatus::Draw => Some(DRAW),
    }
}
