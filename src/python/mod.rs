//! Python bindings module.
//!
//! PyO3 bindings exposing the codec to the Python training loop:
//! - tensor builders (single and batch)
//! - move encode/decode
//! - argmax over score tensors
//! - PyMove (move representation)

pub mod functions;
pub mod types;

use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

use crate::error::CodecError;

pub use functions::{
    argmax_coordinate, board_tensor, board_tensor_batch, decode_move, encode_move,
    legal_move_tensor, legal_move_tensor_batch,
};
pub use types::PyMove;

impl From<CodecError> for PyErr {
    fn from(err: CodecError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}
