//! JSON wire format
//!
//! ```json
//! { "board": ["X", null, "O", null, null, null, null, null, null], "xIsNext": true }
//! ```
//!
//! The same text is written to LocalStorage and to exported files, so files
//! saved by earlier builds of the page load unchanged.

use serde::{Deserialize, Serialize};

use super::PersistError;
use crate::consts::BOARD_CELLS;
use crate::game::{Board, Cell, GameState, Mark};

/// Saved game as it appears on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    /// Nine cells, row-major; `null` for empty
    pub board: Vec<Option<Mark>>,
    /// Whether X moves next
    #[serde(rename = "xIsNext")]
    pub x_is_next: bool,
}

impl From<&GameState> for SavedState {
    fn from(state: &GameState) -> Self {
        Self {
            board: state.board().cells().iter().map(Cell::mark).collect(),
            x_is_next: state.x_is_next(),
        }
    }
}

impl TryFrom<SavedState> for GameState {
    type Error = PersistError;

    fn try_from(saved: SavedState) -> Result<Self, Self::Error> {
        let len = saved.board.len();
        let marks: [Option<Mark>; BOARD_CELLS] = saved
            .board
            .try_into()
            .map_err(|_| PersistError::BoardLength { len })?;
        let next_player = if saved.x_is_next { Mark::X } else { Mark::O };
        Ok(GameState::from_parts(
            Board::from_cells(marks.map(Cell::from)),
            next_player,
        ))
    }
}

/// Encode a state as wire JSON
pub fn serialize(state: &GameState) -> Result<String, PersistError> {
    Ok(serde_json::to_string(&SavedState::from(state))?)
}

/// Decode wire JSON into a state.
///
/// Rejects text that is not JSON, lacks `board` or `xIsNext`, holds cell
/// values other than `"X"`, `"O"` or `null`, or has a board of the wrong size.
/// Unknown fields are ignored.
pub fn deserialize(text: &str) -> Result<GameState, PersistError> {
    let saved: SavedState = serde_json::from_str(text)?;
    GameState::try_from(saved)
}
