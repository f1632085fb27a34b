//! Board and tensor shape constants.

/// Board dimension (8x8 grid).
pub const BOARD_SIZE: usize = 8;

/// Number of squares on the board.
pub const NUM_SQUARES: usize = 64;

/// Number of piece types (pawn through king).
pub const NUM_PIECE_TYPES: usize = 6;

/// Shape of the move legality/score tensor:
/// (from_row, from_col, to_row, to_col, piece_plane).
pub const MOVE_TENSOR_SHAPE: (usize, usize, usize, usize, usize) = (
    BOARD_SIZE,
    BOARD_SIZE,
    BOARD_SIZE,
    BOARD_SIZE,
    NUM_PIECE_TYPES,
);
