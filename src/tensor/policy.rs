//! Move tensor encoding and decoding.
//!
//! A move occupies one cell of the (8,8,8,8,6) move tensor: origin
//! coordinate, destination coordinate, and the plane of the piece type
//! standing on the destination after the move. The legality tensor marks
//! every cell reachable by some legal move; distinct moves landing on
//! the same cell OR together, losing move identity by design.

use ndarray::Array5;

use crate::core::{Move, MoveCoordinate, PieceType, Square, MOVE_TENSOR_SHAPE, NUM_PIECE_TYPES};
use crate::error::CodecError;
use crate::rules::Position;

/// Dense 0/1 tensor over all move coordinates.
pub type MoveTensor = Array5<f32>;

/// Encode a move as its tensor coordinate.
///
/// `position` must be the snapshot the move would be played *from*: when
/// the move carries no promotion, the moving piece's type is read off
/// the origin square. Fails with `UnoccupiedSquare` when that square is
/// empty and no promotion type was given.
pub fn move_coordinate<P: Position + ?Sized>(
    mv: &Move,
    position: &P,
) -> Result<MoveCoordinate, CodecError> {
    let (from_row, from_col) = mv.from.coord();
    let (to_row, to_col) = mv.to.coord();
    let final_type = match mv.promotion {
        Some(promotion) => promotion,
        None => {
            position
                .piece_at(mv.from)
                .ok_or(CodecError::UnoccupiedSquare(mv.from))?
                .piece_type
        }
    };
    Ok(MoveCoordinate {
        from_row,
        from_col,
        to_row,
        to_col,
        piece_plane: final_type.rank() - 1,
    })
}

/// Decode a tensor coordinate back into a move.
///
/// The promotion field is set only when the coordinate's piece plane
/// disagrees with the type currently on the origin square. Legality of
/// the result is the rules engine's to verify, not ours.
pub fn decode_move<P: Position + ?Sized>(
    coord: &MoveCoordinate,
    position: &P,
) -> Result<Move, CodecError> {
    let from = Square::from_coord((coord.from_row, coord.from_col))?;
    let to = Square::from_coord((coord.to_row, coord.to_col))?;
    let current = position
        .piece_at(from)
        .ok_or(CodecError::UnoccupiedSquare(from))?;
    let final_type =
        PieceType::from_rank(coord.piece_plane + 1).ok_or(CodecError::OutOfRange {
            what: "piece plane",
            value: coord.piece_plane,
            limit: NUM_PIECE_TYPES,
        })?;
    let promotion = (final_type != current.piece_type).then_some(final_type);
    Ok(Move::new(from, to, promotion))
}

/// Build the legality tensor for a set of moves.
///
/// Cells default to 0.0; each move's coordinate is set to 1.0. Writing
/// the same cell twice is an idempotent no-op, not an error.
pub fn legal_move_tensor<P: Position + ?Sized>(
    moves: &[Move],
    position: &P,
) -> Result<MoveTensor, CodecError> {
    let mut tensor = Array5::zeros(MOVE_TENSOR_SHAPE);
    for mv in moves {
        let coord = move_coordinate(mv, position)?;
        tensor[coord.indices()] = 1.0;
    }
    Ok(tensor)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chess::Board;

    use super::*;

    fn mv(from: &str, to: &str, promotion: Option<PieceType>) -> Move {
        Move::new(
            Square::from_algebraic(from).unwrap(),
            Square::from_algebraic(to).unwrap(),
            promotion,
        )
    }

    #[test]
    fn kings_pawn_opening_coordinate() {
        let board = Board::default();
        let coord = move_coordinate(&mv("e2", "e4", None), &board).unwrap();
        assert_eq!(coord.indices(), [6, 4, 4, 4, 0]);
    }

    #[test]
    fn promotion_planes() {
        let board = Board::from_str("8/P7/8/8/8/8/k6K/8 w - - 0 1").unwrap();
        let queen = move_coordinate(&mv("a7", "a8", Some(PieceType::Queen)), &board).unwrap();
        assert_eq!(queen.indices(), [1, 0, 0, 0, 4]);
        let knight = move_coordinate(&mv("a7", "a8", Some(PieceType::Knight)), &board).unwrap();
        assert_eq!(knight.indices(), [1, 0, 0, 0, 1]);
    }

    #[test]
    fn encoding_needs_an_occupied_origin() {
        let board = Board::default();
        let err = move_coordinate(&mv("e4", "e5", None), &board).unwrap_err();
        assert!(matches!(err, CodecError::UnoccupiedSquare(_)));
        // An explicit promotion type makes the occupancy query unnecessary.
        assert!(move_coordinate(&mv("e4", "e5", Some(PieceType::Queen)), &board).is_ok());
    }

    #[test]
    fn decode_inverts_encode_for_legal_moves() {
        let boards = [
            Board::default(),
            Board::from_str("8/P7/8/8/8/8/k6K/8 w - - 0 1").unwrap(),
        ];
        for board in &boards {
            for legal in board.legal_moves() {
                let coord = move_coordinate(&legal, board).unwrap();
                assert_eq!(decode_move(&coord, board).unwrap(), legal);
            }
        }
    }

    #[test]
    fn decode_requires_occupied_origin() {
        let board = Board::default();
        let coord = MoveCoordinate::new(4, 4, 3, 4, 0).unwrap(); // e4 is empty at the start
        assert!(matches!(
            decode_move(&coord, &board),
            Err(CodecError::UnoccupiedSquare(_))
        ));
    }

    #[test]
    fn empty_move_list_gives_zero_tensor() {
        let tensor = legal_move_tensor(&[], &Board::default()).unwrap();
        assert_eq!(tensor.shape(), &[8, 8, 8, 8, 6]);
        assert_eq!(tensor.sum(), 0.0);
    }

    #[test]
    fn starting_position_has_twenty_marked_cells() {
        let board = Board::default();
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 20);

        let tensor = legal_move_tensor(&moves, &board).unwrap();
        assert_eq!(tensor.sum(), 20.0);
        assert_eq!(tensor[[6, 4, 4, 4, 0]], 1.0); // e2-e4
        assert_eq!(tensor[[7, 6, 5, 5, 1]], 1.0); // g1-f3
    }

    #[test]
    fn duplicate_coordinates_collapse() {
        let board = Board::default();
        let moves = [mv("e2", "e4", None), mv("e2", "e4", None)];
        let tensor = legal_move_tensor(&moves, &board).unwrap();
        assert_eq!(tensor.sum(), 1.0);
    }
}
