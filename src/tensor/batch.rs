//! Rayon-parallel batch encoding.
//!
//! Training steps encode whole batches of positions at once; these
//! helpers fan the single-position builders out across a thread pool
//! while preserving input order.

use rayon::prelude::*;

use super::board::{board_matrix, BoardMatrix};
use super::policy::{legal_move_tensor, MoveTensor};
use crate::error::CodecError;
use crate::rules::Position;

/// Encode every position in the batch as a board matrix.
pub fn board_matrix_batch<P: Position + Sync>(positions: &[P]) -> Vec<BoardMatrix> {
    positions.par_iter().map(|p| board_matrix(p)).collect()
}

/// Build each position's legality tensor from its own legal moves.
pub fn legal_move_tensor_batch<P: Position + Sync>(
    positions: &[P],
) -> Result<Vec<MoveTensor>, CodecError> {
    positions
        .par_iter()
        .map(|p| legal_move_tensor(&p.legal_moves(), p))
        .collect()
}
