//! Board and turn state
//!
//! Everything that is saved to LocalStorage or exported to a file lives here.

use serde::{Deserialize, Serialize};

use super::rules;
use crate::consts::BOARD_CELLS;

/// A player's symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Moves first
    X,
    O,
}

impl Mark {
    /// The other player's mark
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

/// One of the nine board positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The mark in this cell, if any
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(*mark),
        }
    }
}

impl From<Option<Mark>> for Cell {
    fn from(mark: Option<Mark>) -> Self {
        mark.map_or(Cell::Empty, Cell::Marked)
    }
}

/// 3x3 board in row-major order
///
/// Index `i` is row `i / 3`, column `i % 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    /// Cell at `index`, `None` when out of range
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Cell at a zero-based row and column
    pub fn at(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= 3 || col >= 3 {
            return None;
        }
        self.get(row * 3 + col)
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Cell::Marked(mark);
    }
}

/// Outcome of the board as it stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No winner and at least one empty cell
    InProgress,
    /// A line of three belongs to this mark; no further moves apply
    Won(Mark),
    /// Full board without a winner
    Drawn,
}

/// Complete game state: the board and whose turn is next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    next_player: Mark,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Empty board, X to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_player: Mark::X,
        }
    }

    /// Rebuild a state from loaded parts (no consistency checks)
    pub fn from_parts(board: Board, next_player: Mark) -> Self {
        Self { board, next_player }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_player(&self) -> Mark {
        self.next_player
    }

    /// Wire representation of the turn
    pub fn x_is_next(&self) -> bool {
        self.next_player == Mark::X
    }

    pub fn winner(&self) -> Option<Mark> {
        rules::compute_winner(&self.board)
    }

    pub fn status(&self) -> GameStatus {
        rules::status(&self.board)
    }

    /// Place the next player's mark at `index` and pass the turn.
    ///
    /// Ignored when the game already has a winner, the cell is occupied, or
    /// `index` is off the board. Returns whether the move was applied.
    pub fn apply_move(&mut self, index: usize) -> bool {
        if self.winner().is_some() {
            return false;
        }
        match self.board.get(index) {
            Some(Cell::Empty) => {
                self.board.place(index, self.next_player);
                self.next_player = self.next_player.opponent();
                true
            }
            Some(Cell::Marked(_)) => false,
            None => {
                log::warn!("Ignoring move at out-of-range index {}", index);
                false
            }
        }
    }

    /// Back to an empty board with X to move
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn play(moves: &[usize]) -> GameState {
        let mut state = GameState::new();
        for &index in moves {
            state.apply_move(index);
        }
        state
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.next_player(), Mark::X);
        assert!(state.x_is_next());
        assert!(state.board().cells().iter().all(Cell::is_empty));
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_moves_alternate() {
        let mut state = GameState::new();
        assert!(state.apply_move(4));
        assert_eq!(state.board().get(4), Some(Cell::Marked(Mark::X)));
        assert_eq!(state.next_player(), Mark::O);

        assert!(state.apply_move(0));
        assert_eq!(state.board().get(0), Some(Cell::Marked(Mark::O)));
        assert_eq!(state.next_player(), Mark::X);
    }

    #[test]
    fn test_occupied_cell_ignored() {
        let mut state = play(&[4]);
        let before = state;
        assert!(!state.apply_move(4));
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut state = GameState::new();
        assert!(!state.apply_move(9));
        assert!(!state.apply_move(usize::MAX));
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_top_row_win_freezes_board() {
        let mut state = play(&[0, 4, 1, 5, 2]);
        let o = Cell::Marked(Mark::O);
        let x = Cell::Marked(Mark::X);
        let e = Cell::Empty;
        assert_eq!(state.board().cells(), &[x, x, x, e, o, o, e, e, e]);
        assert_eq!(state.winner(), Some(Mark::X));
        assert_eq!(state.status(), GameStatus::Won(Mark::X));

        let frozen = state;
        for index in 0..BOARD_CELLS {
            assert!(!state.apply_move(index));
        }
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_drawn_board() {
        // X O X
        // X O O
        // O X X
        let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.winner(), None);
        assert_eq!(state.status(), GameStatus::Drawn);
        assert_eq!(state.board().filled(), BOARD_CELLS);
    }

    #[test]
    fn test_reset() {
        let mut state = play(&[0, 4, 1]);
        state.reset();
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_row_col_addressing() {
        let state = play(&[5]);
        assert_eq!(state.board().at(1, 2), Some(Cell::Marked(Mark::X)));
        assert_eq!(state.board().at(3, 0), None);
    }

    proptest! {
        #[test]
        fn prop_repeat_move_is_idempotent(
            moves in proptest::collection::vec(0usize..BOARD_CELLS, 0..9),
            index in 0usize..BOARD_CELLS,
        ) {
            let mut once = play(&moves);
            once.apply_move(index);
            let mut twice = once;
            twice.apply_move(index);
            prop_assert_eq!(once.board(), twice.board());
        }

        #[test]
        fn prop_applied_move_flips_turn(
            moves in proptest::collection::vec(0usize..BOARD_CELLS, 0..9),
            index in 0usize..BOARD_CELLS,
        ) {
            let mut state = play(&moves);
            let before = state.next_player();
            if state.apply_move(index) {
                prop_assert_eq!(state.next_player(), before.opponent());
            } else {
                prop_assert_eq!(state.next_player(), before);
            }
        }

        #[test]
        fn prop_reset_always_initial(
            moves in proptest::collection::vec(0usize..BOARD_CELLS, 0..12),
        ) {
            let mut state = play(&moves);
            state.reset();
            prop_assert_eq!(state, GameState::new());
        }
    }
}
