//! Engine error type
//!
//! Only invariant violations are errors. An illegal move, rotation, or
//! spawn is an expected negative outcome and is reported as `false` by the
//! operation that attempted it, never through this type.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Lock was requested while no piece is falling. Caller bug: the
    /// lifecycle must only lock after a successful spawn.
    #[error("no active piece to lock")]
    NoActivePiece,

    /// The board view was indexed outside the grid.
    #[error("cell ({row}, {col}) is outside the board")]
    CellOutOfBounds { row: usize, col: usize },

    /// A single clear pass reported a line count outside 1..=4. The board
    /// height bounds a lock to at most 4 completed rows, so this is
    /// unreachable through the lifecycle.
    #[error("invalid line clear count: {0}")]
    InvalidClearCount(usize),
}
