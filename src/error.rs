//! Codec error definitions.
//!
//! Every failure here is a local data-contract violation: a coordinate
//! outside its domain, malformed notation, a piece that should be on the
//! board but isn't, or an empty tensor. None are retryable and none leave
//! partial state behind; the failed conversion is simply surfaced.

use thiserror::Error;

use crate::core::Square;

/// Errors surfaced by codec conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A square index, rank/file, matrix coordinate, or piece plane fell
    /// outside its valid domain.
    #[error("{what} {value} is outside 0..{limit}")]
    OutOfRange {
        what: &'static str,
        value: usize,
        limit: usize,
    },

    /// Malformed algebraic square notation.
    #[error("`{0}` is not a valid square")]
    InvalidSquareString(String),

    /// Move encoding or decoding needed the piece on a square that is
    /// not occupied.
    #[error("no piece on {0}")]
    UnoccupiedSquare(Square),

    /// Argmax over a tensor with no elements.
    #[error("argmax over an empty tensor")]
    EmptyInput,
}
