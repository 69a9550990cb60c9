//! Runtime configuration for the terminal binary.

use std::path::PathBuf;

use crate::core::store::DEFAULT_RECORD_PATH;
use crate::input::DEFAULT_POLL_MS;

pub const RECORD_PATH_VAR: &str = "BRICK_TETRIS_RECORD_PATH";
pub const SEED_VAR: &str = "BRICK_TETRIS_SEED";
pub const POLL_MS_VAR: &str = "BRICK_TETRIS_POLL_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// High-score file
    pub record_path: PathBuf,
    /// Fixed generator seed; `None` seeds from the clock
    pub seed: Option<u32>,
    /// Input poll interval, also charged to the drop clock each iteration
    pub poll_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            record_path: PathBuf::from(DEFAULT_RECORD_PATH),
            seed: None,
            poll_ms: DEFAULT_POLL_MS,
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    ///
    /// Unset, blank or unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let record_path = var(RECORD_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORD_PATH));

        let seed = var(SEED_VAR).and_then(|s| s.parse().ok());

        let poll_ms = var(POLL_MS_VAR)
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(DEFAULT_POLL_MS);

        Self {
            record_path,
            seed,
            poll_ms,
        }
    }
}
