//! Board module - the playing field
//!
//! The field is a 10x20 grid of color ids where 0 means empty.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)
//!
//! The active piece is written into the field while it is live. Every
//! mutation is wrapped as erase, recompute, commit so the piece never
//! collides with its own stale cells.

use crate::piece::Piece;
use crate::types::{Cell, FieldGrid, COLOR_COUNT, EMPTY, FIELD_HEIGHT, FIELD_WIDTH};

/// Total number of cells on the field
const FIELD_SIZE: usize = FIELD_WIDTH * FIELD_HEIGHT;

/// The playing field - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; FIELD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; FIELD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x as usize >= FIELD_WIDTH || y < 0 || y as usize >= FIELD_HEIGHT {
            return None;
        }
        Some((y as usize) * FIELD_WIDTH + (x as usize))
    }

    pub fn width(&self) -> usize {
        FIELD_WIDTH
    }

    pub fn height(&self) -> usize {
        FIELD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        debug_assert!(cell <= COLOR_COUNT, "invalid color id {}", cell);
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// One row of cells
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * FIELD_WIDTH;
        &self.cells[start..start + FIELD_WIDTH]
    }

    fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        let start = y * FIELD_WIDTH;
        &mut self.cells[start..start + FIELD_WIDTH]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < FIELD_HEIGHT && self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    /// Remove row `y` and move every row above it down by one.
    ///
    /// The vacated top row is left empty.
    pub fn remove_row(&mut self, y: usize) {
        if y >= FIELD_HEIGHT {
            return;
        }

        self.row_mut(y).fill(EMPTY);

        // copy_within handles overlapping ranges safely
        for row in (1..=y).rev() {
            let src = (row - 1) * FIELD_WIDTH;
            self.cells.copy_within(src..src + FIELD_WIDTH, row * FIELD_WIDTH);
        }

        self.row_mut(0).fill(EMPTY);
    }

    /// Zero every cell
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Zero the cells the piece occupies
    pub fn erase_piece(&mut self, piece: &Piece) {
        for (x, y) in piece.field_cells() {
            self.set(x, y, EMPTY);
        }
    }

    /// Write the piece's color into the cells it occupies
    pub fn commit_piece(&mut self, piece: &Piece) {
        for (x, y) in piece.field_cells() {
            self.set(x, y, piece.color);
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy into a row-major 2D grid
    pub fn write_grid(&self, out: &mut FieldGrid) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
    }

    pub fn to_grid(&self) -> FieldGrid {
        let mut grid = [[EMPTY; FIELD_WIDTH]; FIELD_HEIGHT];
        self.write_grid(&mut grid);
        grid
    }

    /// Build from a row-major 2D grid
    pub fn from_grid(grid: &FieldGrid) -> Self {
        let mut board = Self::new();
        for (y, row) in grid.iter().enumerate() {
            debug_assert!(row.iter().all(|&c| c <= COLOR_COUNT), "invalid color id in row {}", y);
            board.row_mut(y).copy_from_slice(row);
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_remove_row_shifts_rows_above() {
        let mut board = Board::new();
        board.set(0, 0, 3);
        board.set(4, 17, 5);
        for x in 0..10 {
            board.set(x, 18, 1);
        }
        board.set(9, 19, 2);

        board.remove_row(18);

        assert_eq!(board.get(0, 0), Some(EMPTY));
        assert_eq!(board.get(0, 1), Some(3));
        assert_eq!(board.get(4, 18), Some(5));
        assert!(!board.is_row_full(18));
        assert_eq!(board.get(9, 19), Some(2));
    }

    #[test]
    fn test_remove_top_row() {
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 0, 7);
        }
        board.remove_row(0);
        assert!(board.cells().iter().all(|&c| c == EMPTY));
    }

    #[test]
    fn test_erase_then_commit_piece() {
        let mut board = Board::new();
        let piece = Piece::new(ShapeKind::T.shape(), 6, 2, 3);

        board.commit_piece(&piece);
        assert_eq!(board.get(3, 3), Some(6));
        assert_eq!(board.get(2, 4), Some(6));
        assert_eq!(board.get(3, 4), Some(6));
        assert_eq!(board.get(4, 4), Some(6));
        assert_eq!(board.get(2, 3), Some(EMPTY));

        board.erase_piece(&piece);
        assert!(board.cells().iter().all(|&c| c == EMPTY));
    }

    #[test]
    fn test_erase_leaves_neighbours_untouched() {
        let mut board = Board::new();
        board.set(2, 3, 2);
        let piece = Piece::new(ShapeKind::T.shape(), 6, 2, 3);
        board.commit_piece(&piece);
        board.erase_piece(&piece);
        assert_eq!(board.get(2, 3), Some(2));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid color id")]
    fn test_set_rejects_out_of_range_color() {
        let mut board = Board::new();
        board.set(0, 0, COLOR_COUNT + 1);
    }

    #[test]
    fn test_grid_roundtrip() {
        let mut grid = [[EMPTY; FIELD_WIDTH]; FIELD_HEIGHT];
        grid[5][3] = 4;
        grid[19][9] = 1;
        let board = Board::from_grid(&grid);
        assert_eq!(board.get(3, 5), Some(4));
        assert_eq!(board.to_grid(), grid);
    }
}
