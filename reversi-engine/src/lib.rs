//! `reversi-engine` is the rules engine for Reversi (Othello) on even-sized
//! rectangular boards.
//!
//! The crate exposes a single stateful type, [`Engine`], which owns the board
//! and tracks whose turn it is. Callers query cells with
//! [`Engine::cell_state`] and attempt moves with [`Engine::place_piece`];
//! a placement succeeds only when it captures at least one opposing piece.
//! Detecting a blocked player and scoring a finished game are left to the caller.
//!
//! ```
//! use reversi_engine::{Cell, Engine, Player};
//!
//! let mut engine = Engine::new(Player::Player1);
//! assert_eq!(engine.place_piece(2, 3), Ok(false));
//! assert_eq!(engine.place_piece(2, 4), Ok(true));
//! assert_eq!(engine.cell_state(3, 4), Ok(Cell::Occupied(Player::Player1)));
//! assert_eq!(engine.next_mover(), Player::Player2);
//! ```

pub mod test_utils;

mod board;
mod config;
mod game;
mod location;
mod utils;

pub use board::*;
pub use config::*;
pub use game::*;
pub use location::*;

/// The edge length of a standard board.
pub const DEFAULT_EDGE_LENGTH: usize = 8;
