//! Move representation and its tensor-space coordinate.

use std::fmt;

use super::constants::{BOARD_SIZE, NUM_PIECE_TYPES};
use super::square::Square;
use super::types::PieceType;
use crate::error::CodecError;

// ============================================================================
// Moves
// ============================================================================

/// A move as supplied by the rules engine: origin, destination, and an
/// optional promotion type. The codec only re-expresses engine moves; it
/// never invents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceType>,
}

impl Move {
    #[inline]
    pub fn new(from: Square, to: Square, promotion: Option<PieceType>) -> Self {
        Move {
            from,
            to,
            promotion,
        }
    }

    /// UCI text for the move ("e2e4", "e7e8q").
    pub fn uci(&self) -> String {
        match self.promotion {
            Some(promotion) => format!("{}{}{}", self.from, self.to, promotion.symbol()),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uci())
    }
}

// ============================================================================
// Move Coordinates
// ============================================================================

/// A move's cell in the (8,8,8,8,6) move tensor: origin coordinate,
/// destination coordinate, and the plane of the piece type that occupies
/// the destination once the move completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveCoordinate {
    pub from_row: usize,
    pub from_col: usize,
    pub to_row: usize,
    pub to_col: usize,
    pub piece_plane: usize,
}

impl MoveCoordinate {
    /// Validate raw indices against the tensor shape.
    pub fn new(
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
        piece_plane: usize,
    ) -> Result<Self, CodecError> {
        for (what, value) in [
            ("from row", from_row),
            ("from col", from_col),
            ("to row", to_row),
            ("to col", to_col),
        ] {
            if value >= BOARD_SIZE {
                return Err(CodecError::OutOfRange {
                    what,
                    value,
                    limit: BOARD_SIZE,
                });
            }
        }
        if piece_plane >= NUM_PIECE_TYPES {
            return Err(CodecError::OutOfRange {
                what: "piece plane",
                value: piece_plane,
                limit: NUM_PIECE_TYPES,
            });
        }
        Ok(MoveCoordinate {
            from_row,
            from_col,
            to_row,
            to_col,
            piece_plane,
        })
    }

    /// Validate a plain index array (e.g. an argmax result).
    #[inline]
    pub fn from_indices(indices: [usize; 5]) -> Result<Self, CodecError> {
        Self::new(indices[0], indices[1], indices[2], indices[3], indices[4])
    }

    /// The coordinate as a plain index array, suitable for tensor indexing.
    #[inline]
    pub fn indices(self) -> [usize; 5] {
        [
            self.from_row,
            self.from_col,
            self.to_row,
            self.to_col,
            self.piece_plane,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_bounds_are_checked() {
        assert!(MoveCoordinate::new(7, 7, 7, 7, 5).is_ok());
        assert!(matches!(
            MoveCoordinate::new(8, 0, 0, 0, 0),
            Err(CodecError::OutOfRange { .. })
        ));
        assert!(matches!(
            MoveCoordinate::new(0, 0, 0, 8, 0),
            Err(CodecError::OutOfRange { .. })
        ));
        assert!(matches!(
            MoveCoordinate::new(0, 0, 0, 0, 6),
            Err(CodecError::OutOfRange { .. })
        ));
    }

    #[test]
    fn indices_round_trip() {
        let coord = MoveCoordinate::new(6, 4, 4, 4, 0).unwrap();
        assert_eq!(coord.indices(), [6, 4, 4, 4, 0]);
        assert_eq!(MoveCoordinate::from_indices(coord.indices()).unwrap(), coord);
    }

    #[test]
    fn uci_text() {
        let plain = Move::new(
            Square::from_algebraic("e2").unwrap(),
            Square::from_algebraic("e4").unwrap(),
            None,
        );
        assert_eq!(plain.uci(), "e2e4");

        let promo = Move::new(
            Square::from_algebraic("a7").unwrap(),
            Square::from_algebraic("a8").unwrap(),
            Some(PieceType::Queen),
        );
        assert_eq!(promo.uci(), "a7a8q");
    }
}
