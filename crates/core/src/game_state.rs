//! Game state module - the session state machine
//!
//! Ties the field, the active and queued shapes, scoring and persistence
//! together, and reacts to one [`UserAction`] at a time. Each action runs to
//! completion before returning; there is no internal timer. The caller
//! issues [`UserAction::Up`] once per drop interval to apply gravity.
//!
//! While playing, the active piece is written into the field. Every mutation
//! erases it, recomputes its position or shape, and commits it again.

use crate::board::Board;
use crate::collision::{empty_cols_left, empty_cols_right, feasible, has_collision_below};
use crate::lines::clear_full_rows;
use crate::piece::Piece;
use crate::rng::{RandomSource, SimpleRng};
use crate::rotation::try_rotate;
use crate::scoring::{LockOutcome, Progress};
use crate::shapes::{draw_shape, Shape};
use crate::snapshot::GameInfo;
use crate::store::{FileHighScoreStore, HighScoreStore};
use crate::types::*;

/// Rightmost anchor column for a shape with no empty trailing columns
const RIGHT_ANCHOR_LIMIT: i8 = (FIELD_WIDTH - PIECE_SIZE) as i8;

/// Draw a color id in `1..=COLOR_COUNT`
fn draw_color(rng: &mut impl RandomSource) -> u8 {
    rng.next_below(COLOR_COUNT as u32) as u8 + 1
}

/// One engine instance
///
/// Generic over its randomness and high-score storage so sessions can be
/// driven deterministically.
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng, S = FileHighScoreStore> {
    board: Board,
    active: Piece,
    next: Shape,
    progress: Progress,
    state: SessionState,
    display: DisplayFlag,
    /// Outcome of the most recent lock, if any
    last_lock: Option<LockOutcome>,
    rng: R,
    store: S,
}

impl<R: RandomSource, S: HighScoreStore> GameState<R, S> {
    /// Create an idle engine: the first piece and the preview are drawn and
    /// the high score is loaded, but nothing is on the field until `Start`.
    pub fn new(mut rng: R, mut store: S) -> Self {
        let high_score = match store.load() {
            Ok(value) => value.unwrap_or(0),
            Err(e) => {
                eprintln!("[HighScore] load failed, starting from 0: {:#}", e);
                0
            }
        };

        let shape = draw_shape(&mut rng);
        let color = draw_color(&mut rng);
        let next = draw_shape(&mut rng);

        Self {
            board: Board::new(),
            active: Piece::spawn(shape, color),
            next,
            progress: Progress::new(high_score),
            state: SessionState::Start,
            display: DisplayFlag::Normal,
            last_lock: None,
            rng,
            store,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn display(&self) -> DisplayFlag {
        self.display
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// The queued preview shape
    pub fn next_shape(&self) -> &Shape {
        &self.next
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn score(&self) -> u32 {
        self.progress.score()
    }

    pub fn high_score(&self) -> u32 {
        self.progress.high_score()
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    /// Current drop interval in milliseconds
    pub fn speed_ms(&self) -> u32 {
        self.progress.speed_ms()
    }

    pub fn last_lock(&self) -> Option<LockOutcome> {
        self.last_lock
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_playing(&self) -> bool {
        self.state == SessionState::Playing
    }

    pub fn game_over(&self) -> bool {
        self.state == SessionState::Exited
    }

    pub fn snapshot_into(&self, out: &mut GameInfo) {
        self.board.write_grid(&mut out.field);
        out.next = *self.next.grid();
        out.score = self.progress.score();
        out.high_score = self.progress.high_score();
        out.level = self.progress.level();
        out.speed = self.progress.speed_ms();
        out.pause = self.display;
    }

    /// Deep copy of the state a renderer needs
    pub fn snapshot(&self) -> GameInfo {
        let mut s = GameInfo::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a user action. Returns whether anything changed.
    ///
    /// Actions that are not valid in the current state are ignored.
    /// `Terminate` is a no-op here: tearing the engine down is done by
    /// dropping it (see [`crate::Session`]).
    pub fn apply_action(&mut self, action: UserAction) -> bool {
        match action {
            UserAction::Start => self.start(),
            UserAction::Pause => self.toggle_pause(),
            UserAction::Terminate => false,
            _ if !self.is_playing() => false,
            UserAction::Left => self.shift(-1),
            UserAction::Right => self.shift(1),
            UserAction::Down => {
                self.hard_drop();
                true
            }
            UserAction::Up => {
                self.tick();
                true
            }
            UserAction::Action => try_rotate(&mut self.board, &mut self.active),
        }
    }

    /// `Start` → `Playing`: clear the field and place the first piece
    pub fn start(&mut self) -> bool {
        if self.state != SessionState::Start {
            return false;
        }
        self.state = SessionState::Playing;
        self.board.clear();
        self.board.commit_piece(&self.active);
        true
    }

    /// Flip between `Playing` and `Paused`. Pausing from `Start` is allowed too.
    ///
    /// Resuming always commits the active piece: a game paused before it was
    /// started has nothing on the field yet, and committing a piece that is
    /// already there rewrites the same cells.
    pub fn toggle_pause(&mut self) -> bool {
        match self.state {
            SessionState::Start | SessionState::Playing => {
                self.state = SessionState::Paused;
                self.display = DisplayFlag::Paused;
                true
            }
            SessionState::Paused => {
                self.state = SessionState::Playing;
                self.display = DisplayFlag::Normal;
                self.board.commit_piece(&self.active);
                true
            }
            SessionState::Exited => false,
        }
    }

    /// Move the active piece one column (`dx` is -1 or 1)
    fn shift(&mut self, dx: i8) -> bool {
        self.board.erase_piece(&self.active);

        let shape = self.active.shape;
        let nx = self.active.x + dx;
        let within = if dx < 0 {
            nx >= -(empty_cols_left(&shape) as i8)
        } else {
            nx <= RIGHT_ANCHOR_LIMIT + empty_cols_right(&shape) as i8
        };

        let moved = within && feasible(&self.board, &shape, nx, self.active.y);
        if moved {
            self.active.x = nx;
        }

        self.board.commit_piece(&self.active);
        moved
    }

    /// Soft tick: fall one row, or lock and bring in the next piece
    pub fn tick(&mut self) {
        self.board.erase_piece(&self.active);

        if has_collision_below(&self.board, &self.active) {
            self.board.commit_piece(&self.active);
            self.resolve_lock();
            self.spawn_next();
        } else {
            self.active.y += 1;
        }

        self.settle_active();
    }

    /// Hard drop: fall until blocked, lock, and bring in the next piece
    pub fn hard_drop(&mut self) {
        self.board.erase_piece(&self.active);

        while !has_collision_below(&self.board, &self.active) {
            self.active.y += 1;
        }

        self.board.commit_piece(&self.active);
        self.resolve_lock();
        self.spawn_next();
        self.settle_active();
    }

    /// Commit the active piece where it stands, or end the session if it does not fit
    fn settle_active(&mut self) {
        if feasible(&self.board, &self.active.shape, self.active.x, self.active.y) {
            self.board.commit_piece(&self.active);
        } else {
            self.state = SessionState::Exited;
            self.display = DisplayFlag::GameOver;
        }
    }

    /// Clear lines, score the lock, and persist a new high score
    fn resolve_lock(&mut self) {
        let lines = clear_full_rows(&mut self.board);
        let outcome = self.progress.record_lock(lines);

        if outcome.new_high_score {
            if let Err(e) = self.store.save(self.progress.high_score()) {
                eprintln!("[HighScore] save failed: {:#}", e);
            }
        }

        self.last_lock = Some(outcome);
    }

    /// Promote the preview to the active slot at the spawn anchor.
    ///
    /// A fresh preview is drawn only when the promoted piece fits, so a
    /// blocked spawn leaves the preview showing the piece that ended the game.
    fn spawn_next(&mut self) {
        let color = draw_color(&mut self.rng);
        self.active = Piece::spawn(self.next, color);

        if feasible(&self.board, &self.active.shape, self.active.x, self.active.y) {
            self.next = draw_shape(&mut self.rng);
        }
    }
}
