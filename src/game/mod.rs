//! Game logic module
//!
//! The board, the turn order, and win detection. This module must stay pure:
//! - No storage or DOM access
//! - Invalid moves are ignored, never reported as errors
//! - Win detection depends on the board alone

pub mod rules;
pub mod state;

pub use rules::{LINES, compute_winner, is_full, status};
pub use state::{Board, Cell, GameState, GameStatus, Mark};
