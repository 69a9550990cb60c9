//! Collision module - placement feasibility queries
//!
//! Every shape lives in a 4-wide window regardless of its visual width, so
//! the horizontal bounds test discounts the window's empty leading and
//! trailing columns. A vertical line in column 1 of its window may therefore
//! sit at `x = -1`.
//!
//! A placement is feasible when both checks pass:
//!
//! 1. **Bounds**: the occupied rows fit above the bottom edge and the
//!    occupied columns fit between the side walls.
//! 2. **Overlap**: every occupied shape cell lands on an empty field cell.
//!
//! Callers must erase the active piece from the board before asking, or the
//! piece collides with itself.

use crate::board::Board;
use crate::piece::Piece;
use crate::shapes::Shape;
use crate::types::{EMPTY, FIELD_HEIGHT, FIELD_WIDTH, PIECE_SIZE};

/// Number of rows of the window that contain at least one occupied cell
pub fn piece_height(shape: &Shape) -> usize {
    (0..PIECE_SIZE).filter(|&row| !shape.row_is_empty(row)).count()
}

/// Count of all-empty columns before the first occupied one, scanning left to right
pub fn empty_cols_left(shape: &Shape) -> usize {
    (0..PIECE_SIZE)
        .take_while(|&col| shape.column_is_empty(col))
        .count()
}

/// Count of all-empty columns after the last occupied one, scanning right to left
pub fn empty_cols_right(shape: &Shape) -> usize {
    (0..PIECE_SIZE)
        .rev()
        .take_while(|&col| shape.column_is_empty(col))
        .count()
}

/// Bounds half of [`feasible`]
pub fn within_bounds(shape: &Shape, x: i8, y: i8) -> bool {
    let (x, y) = (x as i32, y as i32);
    let bottom = y + piece_height(shape) as i32 - 1;
    let right = x + (PIECE_SIZE as i32 - 1) - empty_cols_right(shape) as i32;
    let left = x + empty_cols_left(shape) as i32;

    bottom <= FIELD_HEIGHT as i32 - 1 && right <= FIELD_WIDTH as i32 - 1 && left >= 0
}

/// Overlap half of [`feasible`]
///
/// An occupied cell that falls outside the field counts as blocked. This
/// covers shapes whose top rows are empty, where the row count alone
/// under-reports how far down the shape reaches.
pub fn overlaps(board: &Board, shape: &Shape, x: i8, y: i8) -> bool {
    shape.occupied_cells().any(|(row, col)| {
        let fx = x as i32 + col as i32;
        let fy = y as i32 + row as i32;
        match (i8::try_from(fx), i8::try_from(fy)) {
            (Ok(fx), Ok(fy)) => board.get(fx, fy) != Some(EMPTY),
            _ => true,
        }
    })
}

/// Can `shape` sit with its window anchored at `(x, y)`?
pub fn feasible(board: &Board, shape: &Shape, x: i8, y: i8) -> bool {
    within_bounds(shape, x, y) && !overlaps(board, shape, x, y)
}

/// Is anything directly beneath an occupied cell of the piece?
///
/// The floor counts as an obstacle. Expects the piece to be erased from the board.
pub fn has_collision_below(board: &Board, piece: &Piece) -> bool {
    piece.field_cells().any(|(x, y)| {
        let below = y as i32 + 1;
        below >= FIELD_HEIGHT as i32 || board.get(x, y + 1) != Some(EMPTY)
    })
}
