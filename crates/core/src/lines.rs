//! Line clearing - full-row detection, removal and compaction

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::FIELD_HEIGHT;

/// Indices of every full row, top to bottom
pub fn full_rows(board: &Board) -> ArrayVec<usize, FIELD_HEIGHT> {
    (0..FIELD_HEIGHT).filter(|&y| board.is_row_full(y)).collect()
}

/// Remove every full row and compact the rows above. Returns the count removed.
///
/// Rows are removed bottom-most first. Each removal moves everything above
/// it down by one, so the indices still queued (all above the removed row)
/// are bumped by one to keep pointing at the same rows.
pub fn clear_full_rows(board: &mut Board) -> usize {
    let mut pending = full_rows(board);
    let cleared = pending.len();

    while let Some(row) = pending.pop() {
        board.remove_row(row);
        for above in pending.iter_mut() {
            *above += 1;
        }
    }

    cleared
}
