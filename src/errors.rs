//! Error types shared by the rules engine, the text codecs and the search host.

use thiserror::Error;

/// Recoverable failures surfaced by the public API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The FEN text could not be turned into a position.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A square name such as `e4` was malformed or out of range.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// A promotion suffix was not one of `q`, `r`, `b`, `n`.
    #[error("invalid promotion piece: {0}")]
    InvalidPromotion(char),

    /// The requested endpoints do not match any legal move in the position.
    #[error("no legal move matches {0}")]
    NoMatchingMove(String),

    /// A configuration string (difficulty, algorithm, ...) was not recognised.
    #[error("unknown {kind}: {value}")]
    UnknownOption { kind: &'static str, value: String },

    /// A new search was requested while another one is still outstanding.
    #[error("a search is already in flight")]
    SearchInFlight,
}

/// Result type alias for fallible chess operations.
pub type ChessResult<T> = Result<T, ChessError>;
