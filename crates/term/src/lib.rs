//! Terminal front-end rendering.
//!
//! Renders [`core::GameInfo`] snapshots into a simple framebuffer that is
//! then flushed to the terminal. Each field cell is two columns wide to
//! compensate for the usual glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use brick_tetris_core as core;
pub use brick_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Palette};
pub use game_view::{Anchor, GameView, Viewport, VIEW_HEIGHT, VIEW_WIDTH};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
