//! Shapes module - the seven canonical patterns and the random selector
//!
//! Every shape is a 4x4 occupancy grid padded with empty cells. The padding
//! matters: boundary checks count empty leading and trailing columns, and the
//! rotation realignment relies on the row a pattern starts in.

use crate::rng::RandomSource;
use crate::types::{ShapeGrid, PIECE_SIZE, SHAPE_COUNT};

/// Catalog identity of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// Catalog order; `draw_shape` indexes into this
    pub const ALL: [ShapeKind; SHAPE_COUNT] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Spawn-orientation occupancy grid
    pub fn pattern(&self) -> ShapeGrid {
        match self {
            ShapeKind::I => [[1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            ShapeKind::J => [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            ShapeKind::L => [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            ShapeKind::O => [[0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            ShapeKind::S => [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            ShapeKind::T => [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            ShapeKind::Z => [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        }
    }

    pub fn shape(&self) -> Shape {
        Shape::from_grid(self.pattern())
    }

    /// Identify a spawn-orientation grid, if it is one
    pub fn classify(shape: &Shape) -> Option<ShapeKind> {
        Self::ALL.into_iter().find(|k| k.pattern() == *shape.grid())
    }
}

/// A 4x4 occupancy grid
///
/// Cells are normalized to 0/1 on construction, so `occupancy * color`
/// always yields either 0 or the color id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    grid: ShapeGrid,
}

impl Shape {
    pub const fn empty() -> Self {
        Self {
            grid: [[0; PIECE_SIZE]; PIECE_SIZE],
        }
    }

    pub fn from_grid(grid: ShapeGrid) -> Self {
        let mut out = Self::empty();
        for (row, src) in out.grid.iter_mut().zip(grid.iter()) {
            for (cell, &v) in row.iter_mut().zip(src.iter()) {
                *cell = u8::from(v != 0);
            }
        }
        out
    }

    pub fn grid(&self) -> &ShapeGrid {
        &self.grid
    }

    #[inline]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.grid[row][col] != 0
    }

    pub fn set(&mut self, row: usize, col: usize, occupied: bool) {
        self.grid[row][col] = u8::from(occupied);
    }

    pub fn row_is_empty(&self, row: usize) -> bool {
        self.grid[row].iter().all(|&c| c == 0)
    }

    pub fn column_is_empty(&self, col: usize) -> bool {
        self.grid.iter().all(|row| row[col] == 0)
    }

    /// Number of occupied cells (4 for every catalog shape)
    pub fn cell_count(&self) -> usize {
        self.grid.iter().flatten().filter(|&&c| c != 0).count()
    }

    /// Iterate `(row, col)` of every occupied cell, row-major
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..PIECE_SIZE).flat_map(move |row| {
            (0..PIECE_SIZE).filter_map(move |col| self.is_occupied(row, col).then_some((row, col)))
        })
    }

    /// The 2x2 block in its spawn placement: never rotated
    pub fn is_square(&self) -> bool {
        self.is_occupied(0, 1)
            && self.is_occupied(0, 2)
            && self.is_occupied(1, 1)
            && self.is_occupied(1, 2)
    }

    /// Any single column with all four cells occupied
    pub fn is_vertical_line(&self) -> bool {
        (0..PIECE_SIZE).any(|col| (0..PIECE_SIZE).all(|row| self.is_occupied(row, col)))
    }
}

/// Pick one of the seven catalog shapes uniformly and return a fresh copy
pub fn draw_shape(rng: &mut impl RandomSource) -> Shape {
    let idx = rng.next_below(SHAPE_COUNT as u32) as usize;
    ShapeKind::ALL[idx].shape()
}
