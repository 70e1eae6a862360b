//! Text shown on the page
//!
//! Kept free of DOM types so the same strings drive the browser page, the
//! native binary, and tests.

use crate::game::{Cell, GameState, GameStatus};

/// Status line under the board.
///
/// A drawn board keeps showing the next player, same as a game in progress.
pub fn status_text(state: &GameState) -> String {
    match state.status() {
        GameStatus::Won(mark) => format!("Winner: {}", mark.as_str()),
        GameStatus::InProgress | GameStatus::Drawn => {
            format!("Next Player: {}", state.next_player().as_str())
        }
    }
}

/// Label for a grid cell (empty cells are blank)
pub fn cell_text(cell: Cell) -> &'static str {
    cell.mark().map_or("", |m| m.as_str())
}

/// Board as three text rows, `.` for empty cells
pub fn board_text(state: &GameState) -> String {
    state
        .board()
        .cells()
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|&c| match cell_text(c) {
                    "" => ".",
                    s => s,
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
