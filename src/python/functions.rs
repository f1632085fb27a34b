//! Python-exposed functions.
//!
//! #[pyfunction] wrappers over the codec: tensor builders (single and
//! batch), move encode/decode, and argmax. Positions cross the boundary
//! as FEN strings, which the training loop already holds.

use std::str::FromStr;

use chess::Board;
use ndarray::{Array3, ArrayD, IxDyn};
use numpy::{IntoPyArray, PyArray2, PyArray3, PyArrayDyn, PyReadonlyArrayDyn};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rayon::prelude::*;

use super::types::PyMove;
use crate::core::{Move, MoveCoordinate, PieceType, Square, BOARD_SIZE, MOVE_TENSOR_SHAPE};
use crate::rules::Position;
use crate::tensor;

fn parse_board(fen: &str) -> PyResult<Board> {
    Board::from_str(fen).map_err(|e| PyValueError::new_err(format!("invalid FEN `{}`: {}", fen, e)))
}

fn parse_boards(fens: &[String]) -> PyResult<Vec<Board>> {
    fens.iter().map(|fen| parse_board(fen)).collect()
}

fn parse_uci(uci: &str) -> PyResult<Move> {
    let invalid = || PyValueError::new_err(format!("invalid move `{}`", uci));
    if !uci.is_ascii() || uci.len() < 4 || uci.len() > 5 {
        return Err(invalid());
    }
    let from = Square::from_algebraic(&uci[..2]).map_err(|_| invalid())?;
    let to = Square::from_algebraic(&uci[2..4]).map_err(|_| invalid())?;
    let promotion = match uci.as_bytes().get(4) {
        Some(&c) => Some(PieceType::from_symbol(c as char).ok_or_else(invalid)?),
        None => None,
    };
    Ok(Move::new(from, to, promotion))
}

/// Encode a position as an (8, 8) matrix of piece identifiers.
#[pyfunction]
pub fn board_tensor<'py>(py: Python<'py>, fen: &str) -> PyResult<Bound<'py, PyArray2<f32>>> {
    let board = parse_board(fen)?;
    Ok(tensor::board_matrix(&board).into_pyarray_bound(py))
}

/// Encode a batch of positions as an (n, 8, 8) array.
#[pyfunction]
pub fn board_tensor_batch<'py>(
    py: Python<'py>,
    fens: Vec<String>,
) -> PyResult<Bound<'py, PyArray3<f32>>> {
    let boards = parse_boards(&fens)?;
    let matrices = tensor::board_matrix_batch(&boards);

    let mut stacked = Array3::zeros((boards.len(), BOARD_SIZE, BOARD_SIZE));
    for (i, matrix) in matrices.iter().enumerate() {
        stacked.slice_mut(ndarray::s![i, .., ..]).assign(matrix);
    }
    Ok(stacked.into_pyarray_bound(py))
}

/// Build the (8, 8, 8, 8, 6) legality tensor for a position's legal moves.
#[pyfunction]
pub fn legal_move_tensor<'py>(py: Python<'py>, fen: &str) -> PyResult<Bound<'py, PyArrayDyn<f32>>> {
    let board = parse_board(fen)?;
    let moves = board.legal_moves();
    let tensor = tensor::legal_move_tensor(&moves, &board)?;
    Ok(tensor.into_dyn().into_pyarray_bound(py))
}

/// Build legality tensors for a batch of positions as an
/// (n, 8, 8, 8, 8, 6) array.
#[pyfunction]
pub fn legal_move_tensor_batch<'py>(
    py: Python<'py>,
    fens: Vec<String>,
) -> PyResult<Bound<'py, PyArrayDyn<f32>>> {
    let boards = parse_boards(&fens)?;
    let tensors: Vec<_> = boards
        .par_iter()
        .map(|board| tensor::legal_move_tensor(&board.legal_moves(), board))
        .collect::<Result<_, _>>()?;

    let (d0, d1, d2, d3, d4) = MOVE_TENSOR_SHAPE;
    let cell_count = d0 * d1 * d2 * d3 * d4;
    let mut flat: Vec<f32> = Vec::with_capacity(boards.len() * cell_count);
    for tensor in &tensors {
        flat.extend(tensor.iter().copied());
    }
    let stacked = ArrayD::from_shape_vec(IxDyn(&[boards.len(), d0, d1, d2, d3, d4]), flat).unwrap();
    Ok(stacked.into_pyarray_bound(py))
}

/// Encode a UCI move as its 5-tuple tensor coordinate.
#[pyfunction]
pub fn encode_move(fen: &str, uci: &str) -> PyResult<(usize, usize, usize, usize, usize)> {
    let board = parse_board(fen)?;
    let mv = parse_uci(uci)?;
    let coord = tensor::move_coordinate(&mv, &board)?;
    Ok((
        coord.from_row,
        coord.from_col,
        coord.to_row,
        coord.to_col,
        coord.piece_plane,
    ))
}

/// Decode a 5-tuple tensor coordinate back into a move.
#[pyfunction]
pub fn decode_move(indices: (usize, usize, usize, usize, usize), fen: &str) -> PyResult<PyMove> {
    let board = parse_board(fen)?;
    let coord = MoveCoordinate::new(indices.0, indices.1, indices.2, indices.3, indices.4)?;
    let mv = tensor::decode_move(&coord, &board)?;
    Ok(PyMove::from_move(&mv))
}

/// Coordinate of the maximum element of a dense score array.
#[pyfunction]
pub fn argmax_coordinate(scores: PyReadonlyArrayDyn<'_, f32>) -> PyResult<Vec<usize>> {
    let view = scores.as_array();
    Ok(tensor::argmax_coordinate(&view)?)
}
