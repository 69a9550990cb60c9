//! High-score persistence port
//!
//! The engine loads the record once when it is created and saves whenever a
//! lock pushes the score past it. File semantics live here, not in scoring.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Default record file, relative to the working directory
pub const DEFAULT_RECORD_PATH: &str = "record.txt";

/// Load/save of the single persisted integer
pub trait HighScoreStore {
    /// `Ok(None)` when nothing has been recorded yet
    fn load(&mut self) -> Result<Option<u32>>;

    fn save(&mut self, high_score: u32) -> Result<()>;
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load(&mut self) -> Result<Option<u32>> {
        (**self).load()
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        (**self).save(high_score)
    }
}

/// Plain-text record file holding one whitespace-terminated integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileHighScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_PATH)
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&mut self) -> Result<Option<u32>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };

        parse_record(&text).with_context(|| format!("parsing {}", self.path.display()))
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        fs::write(&self.path, format!("{}\n", high_score))
            .with_context(|| format!("writing {}", self.path.display()))
    }
}

/// First whitespace-delimited token as an integer; an empty file holds no record
pub fn parse_record(text: &str) -> Result<Option<u32>> {
    match text.split_whitespace().next() {
        None => Ok(None),
        Some(token) => token
            .parse::<u32>()
            .map(Some)
            .with_context(|| format!("invalid high score {:?}", token)),
    }
}

/// In-memory store for headless sessions and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHighScoreStore {
    value: Option<u32>,
    saves: usize,
}

impl MemoryHighScoreStore {
    pub fn new(value: Option<u32>) -> Self {
        Self { value, saves: 0 }
    }

    pub fn value(&self) -> Option<u32> {
        self.value
    }

    /// How many times `save` has been called
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&mut self) -> Result<Option<u32>> {
        Ok(self.value)
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        self.value = Some(high_score);
        self.saves += 1;
        Ok(())
    }
}
