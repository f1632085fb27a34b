//! Position/move tensor codec for neural-network chess training.
//!
//! This crate provides:
//! - Square/coordinate arithmetic shared with the rules engine
//! - Board encoding into an 8x8 piece-identifier matrix
//! - Move encoding into the (8,8,8,8,6) legality/score tensor and back
//! - Multi-index argmax for decoding dense score tensors
//! - Python bindings via PyO3 (feature `python`)
//!
//! Chess rules live in the external rules engine behind
//! [`rules::Position`]; every codec function is a pure transformation
//! over immutable inputs and is safe to call from any number of threads.

// Module declarations
pub mod core;
pub mod error;
#[cfg(feature = "python")]
pub mod python;
pub mod rules;
pub mod tensor;

pub use error::CodecError;

// PyO3 module registration
#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::wrap_pyfunction;

/// Python module for the chess tensor codec.
#[cfg(feature = "python")]
#[pymodule]
fn chess_codec(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<python::PyMove>()?;

    // Functions
    m.add_function(wrap_pyfunction!(python::functions::board_tensor, m)?)?;
    m.add_function(wrap_pyfunction!(python::functions::board_tensor_batch, m)?)?;
    m.add_function(wrap_pyfunction!(python::functions::legal_move_tensor, m)?)?;
    m.add_function(wrap_pyfunction!(
        python::functions::legal_move_tensor_batch,
        m
    )?)?;
    m.add_function(wrap_pyfunction!(python::functions::encode_move, m)?)?;
    m.add_function(wrap_pyfunction!(python::functions::decode_move, m)?)?;
    m.add_function(wrap_pyfunction!(python::functions::argmax_coordinate, m)?)?;

    Ok(())
}
