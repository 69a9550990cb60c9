//! Active piece - a shape, a color id and an anchor into the field

use crate::shapes::Shape;
use crate::types::{SPAWN_X, SPAWN_Y};

/// The piece currently under player control
///
/// `(x, y)` is the field coordinate of the 4x4 window's top-left corner.
/// `x` may be negative when the shape's leading columns are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub color: u8,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    pub fn new(shape: Shape, color: u8, x: i8, y: i8) -> Self {
        Self { shape, color, x, y }
    }

    /// Create a piece at the spawn anchor
    pub fn spawn(shape: Shape, color: u8) -> Self {
        Self::new(shape, color, SPAWN_X, SPAWN_Y)
    }

    /// Field coordinates `(x, y)` of every occupied cell
    pub fn field_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .occupied_cells()
            .map(move |(row, col)| (self.x + col as i8, self.y + row as i8))
    }
}
