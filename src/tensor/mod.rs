//! Tensor encoding and decoding for neural-network input/output.
//!
//! This module contains the encoding half (board matrix and legality
//! tensor builders), the decoding half (move decode and multi-index
//! argmax), and rayon-parallel batch variants of the builders.

pub mod argmax;
pub mod batch;
pub mod board;
pub mod policy;

pub use argmax::argmax_coordinate;
pub use batch::{board_matrix_batch, legal_move_tensor_batch};
pub use board::{board_matrix, BoardMatrix};
pub use policy::{decode_move, legal_move_tensor, move_coordinate, MoveTensor};
