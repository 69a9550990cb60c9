use crate::types::{DisplayFlag, FieldGrid, ShapeGrid, EMPTY, FIELD_HEIGHT, FIELD_WIDTH, PIECE_SIZE};

/// Read-only view of a session handed to the renderer
///
/// Every field is copied out of the engine, grids included, so mutating a
/// snapshot never reaches engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameInfo {
    pub field: FieldGrid,
    pub next: ShapeGrid,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    /// Drop interval in milliseconds
    pub speed: u32,
    pub pause: DisplayFlag,
}

impl GameInfo {
    /// 0 normal, 1 paused, 2 game-over
    pub fn pause_code(&self) -> u8 {
        self.pause.code()
    }
}

impl Default for GameInfo {
    fn default() -> Self {
        Self {
            field: [[EMPTY; FIELD_WIDTH]; FIELD_HEIGHT],
            next: [[0; PIECE_SIZE]; PIECE_SIZE],
            score: 0,
            high_score: 0,
            level: 0,
            speed: 0,
            pause: DisplayFlag::Normal,
        }
    }
}
