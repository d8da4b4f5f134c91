//! Interactive game loop over line-based input and output.
//!
//! The session owns all view state: when the board is shown, when input is
//! read and what dialog appears. The engine only answers moves.

use crate::alerts::alert_for;
use crate::render::render_board;
use std::time::Duration;
use tictactoe_engine::{Engine, GameStatus, HumanTurn, Position};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, info, instrument};

/// What a line of input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Claim a square.
    Play(Position),
    /// Leave the session.
    Quit,
    /// Input that names no square.
    Invalid(String),
}

/// Parses a line: `1`-`9`, a square name such as `center`, or `q`.
pub fn parse_command(line: &str) -> Command {
    let input = line.trim();
    if matches!(input.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") {
        return Command::Quit;
    }

    let position = match input.parse::<usize>() {
        Ok(number) => number.checked_sub(1).and_then(Position::from_index),
        Err(_) => Position::from_label_or_number(input),
    };
    match position {
        Some(position) => Command::Play(position),
        None => Command::Invalid(input.to_string()),
    }
}

/// Results of the games played in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
#[display("you {} - computer {} - draws {}", human_wins, computer_wins, draws)]
pub struct Scoreboard {
    /// Games the human won.
    pub human_wins: u32,
    /// Games the computer won.
    pub computer_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Scoreboard {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::HumanWon => self.human_wins += 1,
            GameStatus::ComputerWon => self.computer_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

/// A run of games against the computer.
pub struct Session<R, W> {
    engine: Engine,
    lines: Lines<R>,
    out: W,
    thinking_delay: Duration,
    score: Scoreboard,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a session reading moves from `input` and writing to `out`.
    pub fn new(engine: Engine, input: R, out: W, thinking_delay: Duration) -> Self {
        Self {
            engine,
            lines: input.lines(),
            out,
            thinking_delay,
            score: Scoreboard::default(),
        }
    }

    /// Plays games until the player quits, declines a rematch or input ends.
    #[instrument(skip(self), fields(delay_ms = self.thinking_delay.as_millis() as u64))]
    pub async fn run(&mut self) -> anyhow::Result<Scoreboard> {
        info!("Session started");
        loop {
            self.show_board().await?;
            self.write("Your move (1-9, q to quit): ").await?;
            let Some(line) = self.lines.next_line().await? else {
                debug!("Input closed");
                break;
            };

            let position = match parse_command(&line) {
                Command::Play(position) => position,
                Command::Quit => break,
                Command::Invalid(input) => {
                    let notice = format!(
                        "'{}' is not a square. Type 1-9 or a name like 'center'.",
                        input
                    );
                    self.writeln(&notice).await?;
                    continue;
                }
            };

            let status = match self.engine.play_human(position) {
                HumanTurn::Rejected => {
                    self.writeln("That square is taken.").await?;
                    continue;
                }
                HumanTurn::Finished(status) => status,
                HumanTurn::AwaitingComputer => self.computer_turn().await?,
            };

            if status.is_terminal() && !self.finish_game(status).await? {
                break;
            }
        }

        info!(score = %self.score, "Session finished");
        self.writeln(&format!("\nFinal score: {}", self.score)).await?;
        Ok(self.score)
    }

    /// Consumes the session and returns its output sink.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    async fn computer_turn(&mut self) -> anyhow::Result<GameStatus> {
        self.show_board().await?;
        self.writeln("Computer is thinking...").await?;
        if !self.thinking_delay.is_zero() {
            tokio::time::sleep(self.thinking_delay).await;
        }
        Ok(self.engine.play_computer())
    }

    /// Shows the end-of-game dialog; returns whether to play again.
    #[instrument(skip(self))]
    async fn finish_game(&mut self, status: GameStatus) -> anyhow::Result<bool> {
        self.score.record(status);
        self.show_board().await?;
        if let Some(alert) = alert_for(status) {
            let dialog = format!("\n*** {} ***\n{}", alert.title, alert.message);
            self.writeln(&dialog).await?;
            self.write(&format!("{}? [y/n]: ", alert.button)).await?;
        }

        let again = match self.lines.next_line().await? {
            Some(answer) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            None => false,
        };
        if again {
            self.engine.reset();
        }
        Ok(again)
    }

    async fn show_board(&mut self) -> std::io::Result<()> {
        let board = render_board(&self.engine.board_snapshot());
        self.writeln(&format!("\n{}\n", board)).await
    }

    async fn writeln(&mut self, text: &str) -> std::io::Result<()> {
        self.write(text).await?;
        self.write("\n").await
    }

    async fn write(&mut self, text: &str) -> std::io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn play(seed: u64, input: &str) -> (Scoreboard, String) {
        let engine = Engine::with_seed(seed);
        let mut session = Session::new(engine, input.as_bytes(), Vec::new(), Duration::ZERO);
        let score = session.run().await.expect("session runs");
        let out = String::from_utf8(session.into_output()).expect("utf8 output");
        (score, out)
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("1"), Command::Play(Position::TopLeft));
        assert_eq!(parse_command(" 9 "), Command::Play(Position::BottomRight));
        assert_eq!(parse_command("Center"), Command::Play(Position::Center));
        assert_eq!(parse_command("bottom-left"), Command::Play(Position::BottomLeft));
        assert_eq!(parse_command("Q"), Command::Quit);
        assert_eq!(parse_command("0"), Command::Invalid("0".to_string()));
        assert_eq!(parse_command("10"), Command::Invalid("10".to_string()));
        assert_eq!(parse_command("banana"), Command::Invalid("banana".to_string()));
    }

    #[test]
    fn test_scoreboard_display() {
        let mut score = Scoreboard::default();
        score.record(GameStatus::Draw);
        score.record(GameStatus::ComputerWon);
        score.record(GameStatus::InProgress);
        assert_eq!(score.to_string(), "you 0 - computer 1 - draws 1");
    }

    #[tokio::test]
    async fn test_computer_wins_and_player_declines_rematch() {
        // Computer takes center, blocks at 3, then completes 3-5-7.
        let (score, out) = play(1, "1\n2\n9\nn\n").await;

        assert_eq!(score.computer_wins, 1);
        assert_eq!(score.human_wins, 0);
        assert!(out.contains("*** You lost! ***"));
        assert!(out.contains("Play again? [y/n]: "));
        assert!(out.contains("Final score: you 0 - computer 1 - draws 0"));
    }

    #[tokio::test]
    async fn test_taken_and_invalid_squares_reprompt() {
        let (score, out) = play(1, "1\n5\nbanana\nq\n").await;

        assert_eq!(score, Scoreboard::default());
        assert!(out.contains("That square is taken."));
        assert!(out.contains("'banana' is not a square."));
        assert_eq!(out.matches("Computer is thinking...").count(), 1);
    }

    #[tokio::test]
    async fn test_rematch_resets_board() {
        let (score, out) = play(4, "1\n2\n9\ny\ncenter\nq\n").await;

        assert_eq!(score.computer_wins, 1);
        assert_eq!(out.matches("Computer is thinking...").count(), 4);
        // Fresh board shown after the rematch is accepted.
        let after_rematch = out.rsplit("Play again? [y/n]: ").next().expect("rematch prompt");
        assert!(after_rematch.contains(" 1 | 2 | 3 "));
    }

    #[tokio::test]
    async fn test_end_of_input_ends_session() {
        let (score, out) = play(1, "1\n").await;
        assert_eq!(score, Scoreboard::default());
        assert!(out.contains("Final score"));
    }
}
