//! Rotation module - quarter turns inside the 4x4 window
//!
//! There are no wall kicks: a turn either fits at the current anchor or is
//! dropped and the piece keeps its previous shape.
//!
//! The raw transpose-and-reverse leaves most shapes one row lower in the
//! window than they were drawn, so the turned grid is realigned before it is
//! tested:
//!
//! - a full vertical line is replaced by the canonical line in column 1,
//!   which keeps it centered in its window
//! - anything else is shifted up by one row

use crate::board::Board;
use crate::collision::feasible;
use crate::piece::Piece;
use crate::shapes::Shape;
use crate::types::PIECE_SIZE;

/// Raw quarter turn: `new[3 - j][i] = old[i][j]`
///
/// Four applications return the original grid.
pub fn rotate_cw(shape: &Shape) -> Shape {
    let mut out = Shape::empty();
    for (row, col) in shape.occupied_cells() {
        out.set(PIECE_SIZE - 1 - col, row, true);
    }
    out
}

/// Visual correction applied to a freshly turned grid
pub fn realign(turned: &Shape) -> Shape {
    let mut out = Shape::empty();
    if turned.is_vertical_line() {
        for row in 0..PIECE_SIZE {
            out.set(row, 1, true);
        }
    } else {
        for row in 0..PIECE_SIZE - 1 {
            for col in 0..PIECE_SIZE {
                out.set(row, col, turned.is_occupied(row + 1, col));
            }
        }
    }
    out
}

/// The shape a rotate action tries to place
pub fn rotated(shape: &Shape) -> Shape {
    realign(&rotate_cw(shape))
}

/// Rotate the live piece in place if the turned shape fits at its anchor.
///
/// The piece is erased, tested and committed again whether or not the turn
/// is accepted. Squares are left untouched. Returns whether the shape changed.
pub fn try_rotate(board: &mut Board, piece: &mut Piece) -> bool {
    if piece.shape.is_square() {
        return false;
    }

    board.erase_piece(piece);

    let candidate = rotated(&piece.shape);
    let accepted = feasible(board, &candidate, piece.x, piece.y);
    if accepted {
        piece.shape = candidate;
    }

    board.commit_piece(piece);
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeKind;

    #[test]
    fn test_rotate_cw_transform() {
        let t = ShapeKind::T.shape();
        let turned = rotate_cw(&t);
        let expected = Shape::from_grid([[0, 0, 0, 0], [0, 1, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0]]);
        assert_eq!(turned, expected);
    }

    #[test]
    fn test_four_turns_are_identity() {
        for kind in ShapeKind::ALL {
            let start = kind.shape();
            let mut shape = start;
            for _ in 0..4 {
                shape = rotate_cw(&shape);
            }
            assert_eq!(shape, start, "{:?}", kind);
        }
    }

    #[test]
    fn test_realign_shifts_up() {
        let t = ShapeKind::T.shape();
        let expected = Shape::from_grid([[0, 1, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]]);
        assert_eq!(rotated(&t), expected);
    }

    #[test]
    fn test_horizontal_line_becomes_centered_vertical() {
        let turned = rotated(&ShapeKind::I.shape());
        for row in 0..PIECE_SIZE {
            for col in 0..PIECE_SIZE {
                assert_eq!(turned.is_occupied(row, col), col == 1, "({}, {})", row, col);
            }
        }
    }

    #[test]
    fn test_vertical_line_turns_to_row_one() {
        let vertical = rotated(&ShapeKind::I.shape());
        let horizontal = rotated(&vertical);
        assert!(!horizontal.row_is_empty(1));
        assert!(horizontal.row_is_empty(0));
        assert_eq!(horizontal.cell_count(), 4);
    }

    #[test]
    fn test_try_rotate_commits_new_shape() {
        let mut board = Board::new();
        let mut piece = Piece::new(ShapeKind::T.shape(), 5, 3, 5);
        board.commit_piece(&piece);

        assert!(try_rotate(&mut board, &mut piece));
        assert_eq!(piece.shape, rotated(&ShapeKind::T.shape()));

        let occupied: Vec<_> = board
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != 0)
            .map(|(i, _)| ((i % 10) as i8, (i / 10) as i8))
            .collect();
        assert_eq!(occupied, vec![(4, 5), (3, 6), (4, 6), (4, 7)]);
    }

    #[test]
    fn test_square_is_never_rotated() {
        let mut board = Board::new();
        let mut piece = Piece::new(ShapeKind::O.shape(), 2, 3, 0);
        board.commit_piece(&piece);
        let before = board.clone();

        assert!(!try_rotate(&mut board, &mut piece));
        assert_eq!(piece.shape, ShapeKind::O.shape());
        assert_eq!(board, before);
    }

    #[test]
    fn test_rotation_against_wall_is_rejected() {
        let mut board = Board::new();
        let vertical = rotated(&ShapeKind::I.shape());
        let mut piece = Piece::new(vertical, 1, -1, 4);
        board.commit_piece(&piece);
        let before = board.clone();

        assert!(!try_rotate(&mut board, &mut piece));
        assert_eq!(piece.shape, vertical);
        assert_eq!(board, before);
    }

    #[test]
    fn test_rotation_into_stack_is_rejected() {
        let mut board = Board::new();
        let mut piece = Piece::new(ShapeKind::T.shape(), 3, 3, 5);
        board.commit_piece(&piece);

        // The turned T needs (4,7).
        board.set(4, 7, 6);
        assert!(!try_rotate(&mut board, &mut piece));
        assert_eq!(piece.shape, ShapeKind::T.shape());
        assert_eq!(board.get(4, 5), Some(3));
    }
}
