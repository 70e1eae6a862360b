//! Win and draw detection

use super::state::{Board, Cell, GameStatus, Mark};

/// The eight winning lines, in evaluation order:
/// rows top to bottom, columns left to right, then both diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Mark owning the first complete line in `LINES` order, if any.
///
/// Only a broken board can hold more than one complete line; the earliest
/// line in evaluation order wins in that case.
pub fn compute_winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Marked(mark) if cells[b] == cells[a] && cells[c] == cells[a] => Some(mark),
        _ => None,
    })
}

/// Whether every cell is occupied
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

pub fn status(board: &Board) -> GameStatus {
    match compute_winner(board) {
        Some(mark) => GameStatus::Won(mark),
        None if is_full(board) => GameStatus::Drawn,
        None => GameStatus::InProgress,
    }
}
