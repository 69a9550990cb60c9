//! Integration tests for the engine, the session host and the record file

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use brick_tetris::core::{
    FileHighScoreStore, GameState, MemoryHighScoreStore, ScriptedRng, Session, ShapeKind,
    SimpleRng,
};
use brick_tetris::types::{DisplayFlag, SessionState, UserAction, EMPTY};

fn scratch_record(tag: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!(
        "brick-tetris-it-{}-{}-{}.txt",
        tag,
        std::process::id(),
        n
    ))
}

/// Session whose every shape draw is an O and every color draw is 4
fn square_session(record: PathBuf) -> Session<ScriptedRng, FileHighScoreStore> {
    Session::new(move || {
        GameState::new(ScriptedRng::new(vec![3]), FileHighScoreStore::new(record.clone()))
    })
}

fn press(session: &mut Session<ScriptedRng, FileHighScoreStore>, action: UserAction, times: usize) {
    for _ in 0..times {
        session.user_input(action, false);
    }
}

/// Five squares side by side fill the two bottom rows.
fn clear_two_rows(session: &mut Session<ScriptedRng, FileHighScoreStore>) {
    press(session, UserAction::Left, 4);
    press(session, UserAction::Down, 1);
    press(session, UserAction::Left, 2);
    press(session, UserAction::Down, 1);
    press(session, UserAction::Down, 1);
    press(session, UserAction::Right, 2);
    press(session, UserAction::Down, 1);
    press(session, UserAction::Right, 4);
    press(session, UserAction::Down, 1);
}

#[test]
fn test_game_lifecycle() {
    let mut game = GameState::new(SimpleRng::new(12345), MemoryHighScoreStore::default());
    assert_eq!(game.state(), SessionState::Start);

    assert!(game.apply_action(UserAction::Start));
    assert!(game.is_playing());

    assert!(game.apply_action(UserAction::Pause));
    assert_eq!(game.state(), SessionState::Paused);
    assert!(game.apply_action(UserAction::Pause));
    assert!(game.is_playing());
}

#[test]
fn test_line_piece_locks_in_bottom_row() {
    // I piece, color id 3, T queued.
    let mut game = GameState::new(ScriptedRng::new(vec![0, 2, 5]), MemoryHighScoreStore::default());
    game.apply_action(UserAction::Start);
    game.apply_action(UserAction::Right);
    game.apply_action(UserAction::Down);

    let info = game.snapshot();
    assert_eq!(info.field[19], [0, 0, 0, 0, 3, 3, 3, 3, 0, 0]);
    assert_eq!(game.active().shape, ShapeKind::T.shape());
    assert_eq!((game.active().x, game.active().y), (3, 0));
}

#[test]
fn test_game_runs_until_stack_reaches_spawn() {
    let mut game = GameState::new(SimpleRng::new(7), MemoryHighScoreStore::default());
    game.apply_action(UserAction::Start);

    // Dropping everything in the middle tops out well within 200 pieces.
    for _ in 0..200 {
        if game.game_over() {
            break;
        }
        game.apply_action(UserAction::Down);
    }

    assert!(game.game_over());
    let info = game.snapshot();
    assert_eq!(info.pause, DisplayFlag::GameOver);
    assert_eq!(info.pause_code(), 2);
    assert!(info.field[..2].iter().flatten().any(|&c| c != EMPTY));
}

#[test]
fn test_record_file_loaded_and_updated() {
    let record = scratch_record("update");
    fs::write(&record, "123").unwrap();

    let mut session = square_session(record.clone());
    let info = session.update_current_state();
    assert_eq!(info.high_score, 123);
    assert_eq!(info.score, 0);

    session.user_input(UserAction::Start, false);
    clear_two_rows(&mut session);

    let info = session.update_current_state();
    assert_eq!(info.score, 300);
    assert_eq!(info.high_score, 300);
    assert!(info.field[19].iter().all(|&c| c == EMPTY));
    assert_eq!(fs::read_to_string(&record).unwrap(), "300\n");

    // A fresh engine picks the new record up.
    session.user_input(UserAction::Terminate, false);
    assert!(!session.is_live());
    let info = session.update_current_state();
    assert_eq!(info.high_score, 300);
    assert_eq!(info.score, 0);

    let _ = fs::remove_file(&record);
}

#[test]
fn test_record_file_untouched_below_record() {
    let record = scratch_record("keep");
    fs::write(&record, "5000\n").unwrap();

    let mut session = square_session(record.clone());
    session.user_input(UserAction::Start, false);
    clear_two_rows(&mut session);

    let info = session.update_current_state();
    assert_eq!(info.score, 300);
    assert_eq!(info.high_score, 5000);
    assert_eq!(fs::read_to_string(&record).unwrap(), "5000\n");

    let _ = fs::remove_file(&record);
}

#[test]
fn test_missing_or_corrupt_record_starts_at_zero() {
    let missing = scratch_record("missing");
    let mut session = square_session(missing);
    assert_eq!(session.update_current_state().high_score, 0);

    let corrupt = scratch_record("corrupt");
    fs::write(&corrupt, "not a number").unwrap();
    let mut session = square_session(corrupt.clone());
    assert_eq!(session.update_current_state().high_score, 0);
    let _ = fs::remove_file(&corrupt);
}

#[test]
fn test_terminate_then_input_recreates_engine() {
    let mut session = square_session(scratch_record("recreate"));
    session.user_input(UserAction::Start, false);
    session.user_input(UserAction::Down, false);
    session.user_input(UserAction::Terminate, false);

    // Any action other than Terminate brings up a fresh engine in Start.
    session.user_input(UserAction::Left, false);
    assert!(session.is_live());
    let info = session.update_current_state();
    assert!(info.field.iter().flatten().all(|&c| c == EMPTY));
}

#[test]
fn test_snapshot_reports_pause() {
    let mut session = square_session(scratch_record("pause"));
    session.user_input(UserAction::Start, false);
    session.user_input(UserAction::Pause, false);
    assert_eq!(session.update_current_state().pause_code(), 1);

    // Ticks are ignored while paused.
    let before = session.update_current_state();
    session.user_input(UserAction::Up, false);
    assert_eq!(session.update_current_state(), before);

    session.user_input(UserAction::Pause, false);
    assert_eq!(session.update_current_state().pause_code(), 0);
}

#[test]
fn test_pause_before_start_then_resume() {
    let mut session = square_session(scratch_record("early-pause"));
    session.user_input(UserAction::Pause, false);
    let info = session.update_current_state();
    assert_eq!(info.pause_code(), 1);
    assert!(info.field.iter().flatten().all(|&c| c == EMPTY));

    session.user_input(UserAction::Pause, false);
    let info = session.update_current_state();
    assert_eq!(info.pause_code(), 0);
    assert_eq!(info.field.iter().flatten().filter(|&&c| c == 4).count(), 4);
    assert_eq!(session.engine().map(|e| e.state()), Some(SessionState::Playing));
}
