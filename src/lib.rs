//! Rules engine and move arbitration for two-player Othello/Reversi.
//!
//! The crate owns the hard parts of the game: exact move legality,
//! multi-directional stone flipping, stone counting, a heuristic AI move
//! picker, and a linear undo/redo history over board snapshots. Rendering,
//! input handling and on-disk persistence are left to the caller; a
//! [`Board`] snapshot is a plain comparable value that serializes with
//! serde.

pub mod ai;
pub mod board;
pub mod error;
pub mod game;
pub mod history;
pub mod rules;
pub mod types;

pub use ai::{AiPlayer, Heuristic};
pub use board::Board;
pub use error::{Error, Result};
pub use game::Game;
pub use history::GameHistory;
pub use types::{Cell, Position, Stone};
