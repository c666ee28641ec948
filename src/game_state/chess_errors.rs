//! Errors used throughout the rules engine.
//!
//! `ChessError` covers usage errors a caller is expected to guard against:
//! out-of-bounds board access and undoing with an empty history. Expected
//! move-legality outcomes are `MoveValidity` values and are returned, never
//! raised.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChessError {
    /// Coordinates fall outside the board grid.
    #[error("square ({row}, {col}) is out of bounds")]
    OutOfBounds { row: i8, col: i8 },

    /// `undo` was called with an empty move history.
    #[error("No moves to undo.")]
    NothingToUndo,
}
