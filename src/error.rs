//! Error types for the SPNE crate

use thiserror::Error;

/// Main error type for the SPNE crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board: expected {expected} cells, got {got} in '{context}'")]
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

    #[error("board '{board}' is already won by {winner}")]
    AlreadyWon { board: String, winner: char },

    #[error("invalid player '{player}' (expected one of: {expected})")]
    InvalidPlayer { player: String, expected: String },

    #[error("unknown shaping policy '{input}'. Expected one of: {expected}")]
    UnknownShapingPolicy { input: String, expected: String },

    #[error("{outcome} payoff {value} must be finite")]
    InvalidPayoff { outcome: &'static str, value: f64 },

    #[error("game tree invariant violated at {path}: {message}")]
    InvariantViolation { path: String, message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
