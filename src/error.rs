use thiserror::Error;

use crate::types::Position;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the engine.
///
/// All of these are local, recoverable conditions. `IllegalMove` and
/// `NoLegalMove` in normal play mean either a caller logic bug or an
/// end-of-game condition, and must be surfaced rather than swallowed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("board dimensions {rows}x{cols} are invalid (minimum 4x4, even sides)")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("coordinates {0} are outside the board")]
    OutOfBounds(Position),

    #[error("placing a stone at {0} is not a legal move")]
    IllegalMove(Position),

    #[error("no legal move is available")]
    NoLegalMove,

    #[error("already at the oldest recorded state")]
    NoHistory,

    #[error("already at the newest recorded state")]
    NoFuture,
}
