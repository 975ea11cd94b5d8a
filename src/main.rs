//! Terminal gridfall runner.
//!
//! Fixed-rate simulation: one engine tick every 16 ms, with key events
//! polled in the gap until the next tick is due. Soft drop is reconstructed
//! from key repeats by the latch in [`input`](gridfall::input).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use gridfall::core::Game;
use gridfall::input::{map_key, InputEvent, SoftDropHold};
use gridfall::term::{GameView, TerminalRenderer, Viewport};
use gridfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new();
    let view = GameView::default();
    let mut soft_drop = SoftDropHold::new();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next tick is due.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    Some(InputEvent::Quit) => return Ok(()),
                    Some(InputEvent::SoftDrop) => soft_drop.press(),
                    Some(InputEvent::Action(action)) => game.apply(action),
                    None => {}
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(soft_drop.is_active());
            soft_drop.tick();
        }
    }
}
