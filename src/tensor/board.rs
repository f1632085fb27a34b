//! Board encoding: position snapshot to 8x8 identifier matrix.

use ndarray::Array2;

use crate::core::{identifier_from_piece, Square, BOARD_SIZE};
use crate::rules::Position;

/// An 8x8 grid of piece identifiers, one per matrix coordinate.
pub type BoardMatrix = Array2<f32>;

/// Encode a position as an 8x8 matrix of piece identifiers.
///
/// Row 0 holds the eighth rank, so the matrix prints like a board
/// diagram with the second player's back rank on top. Pure function of
/// the snapshot: the same position always yields the same matrix.
pub fn board_matrix<P: Position + ?Sized>(position: &P) -> BoardMatrix {
    let mut matrix = Array2::zeros((BOARD_SIZE, BOARD_SIZE));
    for square in Square::all() {
        let (row, col) = square.coord();
        matrix[[row, col]] = identifier_from_piece(position.piece_at(square));
    }
    matrix
}
