//! Error types for the nineboard crate

use thiserror::Error;

/// Main error type for the nineboard crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell {cell} of board {board} is already occupied")]
    CellOccupied { board: usize, cell: usize },

    #[error("index {index} is out of bounds (must be 0-8)")]
    InvalidIndex { index: usize },

    #[error("no legal moves available in board {board}")]
    NoLegalMoves { board: usize },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("malformed command '{line}': {reason}")]
    MalformedCommand { line: String, reason: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
