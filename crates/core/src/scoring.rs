//! Scoring module - points per lock, high score, level and speed progression
//!
//! Scoring runs once per lock event with the number of lines that lock
//! cleared. Levels are gated on a rolling threshold: each level-up needs the
//! score to reach the threshold on a lock that cleared at least one line,
//! and moves the threshold another `LEVEL_STEP_POINTS` further out.

use crate::types::{
    INITIAL_LEVEL, INITIAL_SPEED_MS, LEVEL_STEP_POINTS, LINE_SCORES, MAX_LEVEL, SPEED_STEP_MS,
};

/// Points for clearing `lines` rows in one lock (4 or more pays the top entry)
pub fn line_clear_points(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}

/// What one lock event changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockOutcome {
    pub lines_cleared: usize,
    pub points: u32,
    /// The high score moved and should be persisted
    pub new_high_score: bool,
    pub leveled_up: bool,
}

/// Score, high score and level progression of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    score: u32,
    high_score: u32,
    level: u32,
    speed_ms: u32,
    next_level_at: u32,
}

impl Progress {
    pub fn new(high_score: u32) -> Self {
        Self {
            score: 0,
            high_score,
            level: INITIAL_LEVEL,
            speed_ms: INITIAL_SPEED_MS,
            next_level_at: LEVEL_STEP_POINTS,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current drop interval in milliseconds
    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    /// Score the next level-up waits for
    pub fn next_level_at(&self) -> u32 {
        self.next_level_at
    }

    /// Apply one lock event: score, then high score, then level.
    pub fn record_lock(&mut self, lines_cleared: usize) -> LockOutcome {
        let points = line_clear_points(lines_cleared);
        self.score = self.score.saturating_add(points);

        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }

        let leveled_up =
            lines_cleared > 0 && self.score >= self.next_level_at && self.level < MAX_LEVEL;
        if leveled_up {
            self.level += 1;
            self.next_level_at += LEVEL_STEP_POINTS;
            self.speed_ms = self.speed_ms.saturating_sub(SPEED_STEP_MS);
        }

        LockOutcome {
            lines_cleared,
            points,
            new_high_score,
            leveled_up,
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(0)
    }
}
