//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::UserAction`] and keeps
//! the drop clock that turns elapsed poll time into soft ticks.

pub mod clock;
pub mod map;

pub use brick_tetris_types as types;

pub use clock::{DropClock, DEFAULT_POLL_MS};
pub use map::{handle_key_event, is_hold, is_release, should_quit};
