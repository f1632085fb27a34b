//! Python-exposed types.

use pyo3::prelude::*;

use crate::core::Move;

/// Python-exposed move representation.
#[pyclass]
#[derive(Clone)]
pub struct PyMove {
    #[pyo3(get)]
    pub from_square: String,
    #[pyo3(get)]
    pub to_square: String,
    #[pyo3(get)]
    pub promotion: Option<String>,
}

#[pymethods]
impl PyMove {
    /// UCI text for the move ("e2e4", "e7e8q").
    fn uci(&self) -> String {
        match &self.promotion {
            Some(promotion) => format!("{}{}{}", self.from_square, self.to_square, promotion),
            None => format!("{}{}", self.from_square, self.to_square),
        }
    }

    fn __repr__(&self) -> String {
        format!("PyMove({})", self.uci())
    }
}

impl PyMove {
    /// Convert from a codec move.
    pub fn from_move(mv: &Move) -> Self {
        PyMove {
            from_square: mv.from.to_string(),
            to_square: mv.to.to_string(),
            promotion: mv.promotion.map(|p| p.symbol().to_string()),
        }
    }
}
