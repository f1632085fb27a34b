//! Conversions between `chess` crate types and codec types.
//!
//! The `chess` crate is the production rules engine. Both sides number
//! squares identically (A1 = 0, H8 = 63), so square conversions are
//! index re-wrappings; pieces and moves translate field by field.

use chess::{Board, ChessMove, MoveGen};

use super::Position;
use crate::core::{Move, Piece, PieceType, Square, Team};

impl From<chess::Square> for Square {
    #[inline]
    fn from(square: chess::Square) -> Self {
        // The engine numbers squares exactly like the codec (A1 = 0).
        Square(square.to_index() as u8)
    }
}

impl From<Square> for chess::Square {
    #[inline]
    fn from(square: Square) -> Self {
        chess::ALL_SQUARES[square.index()]
    }
}

impl From<chess::Piece> for PieceType {
    #[inline]
    fn from(piece: chess::Piece) -> Self {
        match piece {
            chess::Piece::Pawn => PieceType::Pawn,
            chess::Piece::Knight => PieceType::Knight,
            chess::Piece::Bishop => PieceType::Bishop,
            chess::Piece::Rook => PieceType::Rook,
            chess::Piece::Queen => PieceType::Queen,
            chess::Piece::King => PieceType::King,
        }
    }
}

impl From<PieceType> for chess::Piece {
    #[inline]
    fn from(piece_type: PieceType) -> Self {
        match piece_type {
            PieceType::Pawn => chess::Piece::Pawn,
            PieceType::Knight => chess::Piece::Knight,
            PieceType::Bishop => chess::Piece::Bishop,
            PieceType::Rook => chess::Piece::Rook,
            PieceType::Queen => chess::Piece::Queen,
            PieceType::King => chess::Piece::King,
        }
    }
}

impl From<chess::Color> for Team {
    #[inline]
    fn from(color: chess::Color) -> Self {
        match color {
            chess::Color::White => Team::White,
            chess::Color::Black => Team::Black,
        }
    }
}

impl From<chess::ChessMove> for Move {
    #[inline]
    fn from(mv: ChessMove) -> Self {
        Move::new(
            mv.get_source().into(),
            mv.get_dest().into(),
            mv.get_promotion().map(Into::into),
        )
    }
}

impl From<Move> for ChessMove {
    #[inline]
    fn from(mv: Move) -> Self {
        ChessMove::new(mv.from.into(), mv.to.into(), mv.promotion.map(Into::into))
    }
}

impl Position for Board {
    fn piece_at(&self, square: Square) -> Option<Piece> {
        let engine_square = chess::Square::from(square);
        let piece = self.piece_on(engine_square)?;
        let color = self.color_on(engine_square)?;
        Some(Piece::new(piece.into(), color.into()))
    }

    fn legal_moves(&self) -> Vec<Move> {
        MoveGen::new_legal(self).map(Move::from).collect()
    }
}
