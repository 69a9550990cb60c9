//! Terminal Tetris runner (default binary).
//!
//! Polls the keyboard at a fixed interval, forwards actions to the session,
//! issues a soft tick whenever the drop clock fires, and redraws every
//! iteration.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal;

use brick_tetris::core::{FileHighScoreStore, GameInfo, GameState, Session, SimpleRng};
use brick_tetris::input::{handle_key_event, is_hold, is_release, should_quit, DropClock};
use brick_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport, VIEW_HEIGHT, VIEW_WIDTH};
use brick_tetris::types::UserAction;
use brick_tetris::Config;

fn main() -> Result<()> {
    let config = Config::from_env();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        eprintln!("[Term] failed to restore terminal: {:#}", e);
    }
    result
}

fn new_session(config: &Config) -> Session {
    let record_path = config.record_path.clone();
    let seed = config.seed;
    Session::new(move || {
        let rng = seed.map(SimpleRng::new).unwrap_or_else(SimpleRng::from_clock);
        GameState::new(rng, FileHighScoreStore::new(record_path.clone()))
    })
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut session = new_session(config);
    let view = GameView::new();
    let mut fb = FrameBuffer::new(VIEW_WIDTH, VIEW_HEIGHT);
    let mut clock = DropClock::new();
    let poll = Duration::from_millis(config.poll_ms as u64);

    session.user_input(UserAction::Start, false);
    let mut info: GameInfo = session.update_current_state();

    loop {
        let (w, h) = terminal::size().unwrap_or((VIEW_WIDTH, VIEW_HEIGHT));
        view.render_into(&info, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let iteration_start = Instant::now();

        if event::poll(poll)? {
            match event::read()? {
                Event::Key(key) if !is_release(&key) => {
                    if should_quit(key) {
                        session.user_input(UserAction::Terminate, false);
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(UserAction::Terminate) => {
                            session.user_input(UserAction::Terminate, false);
                            return Ok(());
                        }
                        Some(action) => {
                            session.user_input(action, is_hold(&key));
                            info = session.update_current_state();
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Each iteration lasts one poll interval regardless of input.
        if let Some(rest) = poll.checked_sub(iteration_start.elapsed()) {
            std::thread::sleep(rest);
        }

        if clock.advance(config.poll_ms, info.speed) {
            session.user_input(UserAction::Up, false);
            info = session.update_current_state();
        }
    }
}
