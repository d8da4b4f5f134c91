//! Text rendering of the board.

use tictactoe_engine::BoardSnapshot;

/// Draws the board with marks in occupied cells and 1-9 in empty ones.
///
/// Empty cells show the number the player types to claim them.
pub fn render_board(slots: &BoardSnapshot) -> String {
    let cell = |idx: usize| match slots[idx] {
        Some(mov) => mov.player().mark().to_string(),
        None => (idx + 1).to_string(),
    };

    let rows: Vec<String> = (0..3)
        .map(|row| format!(" {} | {} | {} ", cell(row * 3), cell(row * 3 + 1), cell(row * 3 + 2)))
        .collect();
    rows.join("\n---+---+---\n")
}
