//! Tic-tac-toe in the browser
//!
//! Core modules:
//! - `game`: Board, turn order, and win detection (pure)
//! - `persistence`: JSON wire format and key-value stores
//! - `session`: State owner that auto-saves and notifies observers
//! - `ui`: Status and cell text
//! - `platform`: Browser file download/upload glue (WASM only)

pub mod game;
pub mod persistence;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod session;
pub mod ui;

pub use game::{Board, Cell, GameState, GameStatus, Mark};
pub use persistence::PersistError;
pub use session::{GameSession, SessionConfig};

/// Fixed identifiers shared with saved files and browser storage
pub mod consts {
    /// Cells on the board
    pub const BOARD_CELLS: usize = 9;
    /// LocalStorage key for the auto-saved game
    pub const STORAGE_KEY: &str = "ticTacToeState";
    /// Download name for exported games
    pub const EXPORT_FILE_NAME: &str = "ticTacToeState.json";
    /// MIME type of exported games
    pub const EXPORT_MIME_TYPE: &str = "application/json";
}
