//! Shared types module - constants and plain data used by every crate
//!
//! Nothing here depends on the engine, the terminal, or any I/O, so the
//! definitions can be used from the core rules, the input mapping and the
//! renderer alike.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Piece window**: every shape lives in a 4x4 occupancy grid
//! - **Spawn anchor**: (3, 0), top row, horizontally centered window
//!
//! # Progression Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_SPEED_MS` | 1000 | Drop interval at level 1 |
//! | `SPEED_STEP_MS` | 100 | Interval reduction per level |
//! | `LEVEL_STEP_POINTS` | 600 | Score distance between level thresholds |
//! | `MAX_LEVEL` | 10 | Level cap |
//!
//! # Examples
//!
//! ```
//! use brick_tetris_types::{DisplayFlag, FIELD_WIDTH, FIELD_HEIGHT};
//!
//! assert_eq!(DisplayFlag::GameOver.code(), 2);
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! ```

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: usize = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: usize = 20;

/// Side length of the square window every shape is stored in
pub const PIECE_SIZE: usize = 4;

/// Anchor column for freshly spawned pieces
pub const SPAWN_X: i8 = 3;

/// Anchor row for freshly spawned pieces
pub const SPAWN_Y: i8 = 0;

/// Number of distinct piece colors (ids 1..=7)
pub const COLOR_COUNT: u8 = 7;

/// Number of canonical shapes in the catalog
pub const SHAPE_COUNT: usize = 7;

/// Drop interval at the start of a session, in milliseconds
pub const INITIAL_SPEED_MS: u32 = 1000;

/// Drop interval reduction applied on every level-up
pub const SPEED_STEP_MS: u32 = 100;

/// Score distance between consecutive level thresholds
pub const LEVEL_STEP_POINTS: u32 = 600;

/// Level a session starts at
pub const INITIAL_LEVEL: u32 = 1;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 10;

/// Points awarded per lock event, indexed by lines cleared (4 or more uses the last entry)
///
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 700 points
/// - 4 lines: 1500 points
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 700, 1500];

/// Value of an empty field cell
pub const EMPTY: u8 = 0;

/// A single field cell: 0 is empty, 1-7 is the color id of a locked or live piece
pub type Cell = u8;

/// A 4x4 occupancy grid (0 or 1 per cell)
pub type ShapeGrid = [[u8; PIECE_SIZE]; PIECE_SIZE];

/// Full field as rows of cells
pub type FieldGrid = [[Cell; FIELD_WIDTH]; FIELD_HEIGHT];


/// Discrete actions the engine accepts from the input collaborator
///
/// `Up` doubles as the soft tick: the poll loop issues it once per drop
/// interval, and it advances the active piece by a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAction {
    /// Leave the idle state and begin play
    Start,
    /// Toggle between playing and paused
    Pause,
    /// Tear the engine down
    Terminate,
    /// Shift the active piece one column left
    Left,
    /// Shift the active piece one column right
    Right,
    /// Soft tick: one row of gravity, locking if blocked
    Up,
    /// Hard drop: fall until blocked, then lock
    Down,
    /// Rotate the active piece 90° clockwise
    Action,
}

/// Lifecycle of one engine instance
///
/// `Exited` is reached only through a blocked spawn; an explicit terminate
/// drops the engine instead of entering this state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    Start,
    Playing,
    Paused,
    Exited,
}

/// Tri-state display hint exposed in snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayFlag {
    #[default]
    Normal,
    Paused,
    GameOver,
}

impl DisplayFlag {
    /// Numeric form used by the snapshot consumer: 0 normal, 1 paused, 2 game-over
    ///
    /// ```
    /// use brick_tetris_types::DisplayFlag;
    ///
    /// assert_eq!(DisplayFlag::Normal.code(), 0);
    /// assert_eq!(DisplayFlag::Paused.code(), 1);
    /// ```
    pub fn code(&self) -> u8 {
        match self {
            DisplayFlag::Normal => 0,
            DisplayFlag::Paused => 1,
            DisplayFlag::GameOver => 2,
        }
    }
}
