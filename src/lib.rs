//! Brick Tetris (workspace facade crate).
//!
//! Re-exports the crates under `crates/` as `brick_tetris::{core,input,term,types}`
//! and adds the binary's runtime [`Config`].

pub mod config;

pub use brick_tetris_core as core;
pub use brick_tetris_input as input;
pub use brick_tetris_term as term;
pub use brick_tetris_types as types;

pub use config::Config;
