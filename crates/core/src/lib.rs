//! Core game logic - the brick-game Tetris engine
//!
//! Everything here is synchronous and free of terminal concerns. The only
//! I/O is the high-score file behind [`store::HighScoreStore`], and tests
//! swap that for an in-memory store.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 field of color ids
//! - [`shapes`]: the seven 4x4 patterns and the random selector
//! - [`piece`]: active shape, color and anchor
//! - [`collision`]: bounds and overlap queries
//! - [`rotation`]: quarter turns without kicks
//! - [`lines`]: full-row removal
//! - [`scoring`]: points, high score, level and drop interval
//! - [`store`]: high-score persistence
//! - [`game_state`]: the per-session state machine
//! - [`session`]: lazy engine host used by front ends
//! - [`snapshot`]: the copied view handed to renderers
//!
//! # Rules
//!
//! - Shapes are drawn uniformly; there is no bag and no hold
//! - A lock clearing 1/2/3/4 rows scores 100/300/700/1500
//! - A clearing lock that reaches the level threshold raises the level by
//!   one (up to 10) and shortens the drop interval by 100ms
//! - A spawned piece that does not fit ends the session
//!
//! # Example
//!
//! ```
//! use brick_tetris_core::{GameState, MemoryHighScoreStore, SimpleRng};
//! use brick_tetris_core::types::{SessionState, UserAction};
//!
//! let mut game = GameState::new(SimpleRng::new(12345), MemoryHighScoreStore::default());
//! game.apply_action(UserAction::Start);
//! game.apply_action(UserAction::Right);
//! game.apply_action(UserAction::Down);
//!
//! assert_eq!(game.state(), SessionState::Playing);
//! assert_eq!(game.snapshot().pause_code(), 0);
//! ```
//!
//! # Timing
//!
//! The engine has no clock. Front ends issue [`types::UserAction::Up`] every
//! [`GameState::speed_ms`] milliseconds of playing time.

pub mod board;
pub mod collision;
pub mod game_state;
pub mod lines;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;
pub mod store;

pub use brick_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use piece::Piece;
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use scoring::{line_clear_points, LockOutcome, Progress};
pub use session::Session;
pub use shapes::{Shape, ShapeKind};
pub use snapshot::GameInfo;
pub use store::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};
