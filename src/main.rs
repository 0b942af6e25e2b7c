//! Terminal game runner.
//!
//! Uses crossterm for input and a framebuffer-based renderer. The loop runs
//! a fixed timestep: render, wait for input until the frame boundary, then
//! feed the engine a timestamp so gravity can fire.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::GameState;
use blockfall::input::{handle_key_event, is_restart, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut game = GameState::new(seed);
    let view = GameView::default();

    let started = Instant::now();
    let mut last_frame = Instant::now();
    let frame_duration = Duration::from_millis(TICK_MS);

    loop {
        // Render. Once the game is over the snapshot keeps the final stack
        // and the overlay until the player restarts or quits.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key)
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_restart(key) {
                        game.reset(started.elapsed().as_millis() as u64);
                    } else if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_frame.elapsed() >= frame_duration {
            last_frame = Instant::now();
            game.tick(started.elapsed().as_millis() as u64);
        }
    }
}
