//! Session host - owns at most one engine and creates it on demand
//!
//! Front ends talk to the game only through [`Session::user_input`] and
//! [`Session::update_current_state`]. The first call of either creates an
//! engine through the factory; `Terminate` drops it, and the next call
//! creates a fresh one with a reloaded high score.

use crate::game_state::GameState;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameInfo;
use crate::store::{FileHighScoreStore, HighScoreStore};
use crate::types::UserAction;

type Factory<R, S> = Box<dyn FnMut() -> GameState<R, S>>;

pub struct Session<R = SimpleRng, S = FileHighScoreStore> {
    factory: Factory<R, S>,
    engine: Option<GameState<R, S>>,
}

impl<R: RandomSource, S: HighScoreStore> Session<R, S> {
    pub fn new(factory: impl FnMut() -> GameState<R, S> + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            engine: None,
        }
    }

    /// Route one user action to the engine.
    ///
    /// `hold` is accepted for compatibility with front ends that report key
    /// repeat; it has no effect.
    pub fn user_input(&mut self, action: UserAction, _hold: bool) {
        if action == UserAction::Terminate {
            self.engine = None;
            return;
        }
        self.engine_mut().apply_action(action);
    }

    /// Snapshot of the live engine, creating one first if needed
    pub fn update_current_state(&mut self) -> GameInfo {
        self.engine_mut().snapshot()
    }

    pub fn is_live(&self) -> bool {
        self.engine.is_some()
    }

    pub fn engine(&self) -> Option<&GameState<R, S>> {
        self.engine.as_ref()
    }

    fn engine_mut(&mut self) -> &mut GameState<R, S> {
        let factory = &mut self.factory;
        self.engine.get_or_insert_with(|| factory())
    }
}

impl<R, S> std::fmt::Debug for Session<R, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("live", &self.engine.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;
    use crate::store::MemoryHighScoreStore;
    use crate::types::{SessionState, EMPTY};
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_session() -> (Session<ScriptedRng, MemoryHighScoreStore>, Rc<Cell<usize>>) {
        let created = Rc::new(Cell::new(0));
        let counter = Rc::clone(&created);
        let session = Session::new(move || {
            counter.set(counter.get() + 1);
            GameState::new(ScriptedRng::new(vec![0, 0, 5]), MemoryHighScoreStore::new(Some(7)))
        });
        (session, created)
    }

    #[test]
    fn test_engine_created_lazily() {
        let (mut session, created) = counting_session();
        assert!(!session.is_live());
        assert_eq!(created.get(), 0);

        let info = session.update_current_state();
        assert!(session.is_live());
        assert_eq!(created.get(), 1);
        assert_eq!(info.high_score, 7);
        assert_eq!(info.level, 1);
        assert_eq!(info.speed, 1000);

        session.update_current_state();
        assert_eq!(created.get(), 1);
    }

    #[test]
    fn test_input_creates_engine() {
        let (mut session, created) = counting_session();
        session.user_input(UserAction::Start, false);
        assert_eq!(created.get(), 1);
        assert_eq!(session.engine().map(|e| e.state()), Some(SessionState::Playing));

        let info = session.update_current_state();
        assert_eq!(info.field[0][3..7], [1, 1, 1, 1]);
    }

    #[test]
    fn test_terminate_drops_engine() {
        let (mut session, created) = counting_session();
        session.user_input(UserAction::Start, false);
        session.user_input(UserAction::Terminate, false);
        assert!(!session.is_live());

        // Terminate without an engine stays a no-op.
        session.user_input(UserAction::Terminate, false);
        assert!(!session.is_live());
        assert_eq!(created.get(), 1);

        let info = session.update_current_state();
        assert_eq!(created.get(), 2);
        assert!(info.field.iter().flatten().all(|&c| c == EMPTY));
        assert_eq!(session.engine().map(|e| e.state()), Some(SessionState::Start));
    }

    #[test]
    fn test_hold_flag_is_ignored() {
        let (mut a, _) = counting_session();
        let (mut b, _) = counting_session();
        for action in [UserAction::Start, UserAction::Right, UserAction::Up, UserAction::Down] {
            a.user_input(action, false);
            b.user_input(action, true);
        }
        assert_eq!(a.update_current_state(), b.update_current_state());
    }
}
