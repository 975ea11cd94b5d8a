//! Input module - translates terminal key events into engine inputs.
//!
//! Discrete intents map straight to [`GameAction`]. Soft drop is different:
//! terminals report key repeats but never releases, so a press latches the
//! drop level for a few ticks and each repeat re-latches it. The latch
//! expiring approximates the release.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::types::{GameAction, SOFT_DROP_HOLD_TICKS};

/// What a key event means to the application loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A discrete intent for the engine.
    Action(GameAction),
    /// Soft drop pressed or repeated.
    SoftDrop,
    /// Leave the application.
    Quit,
}

/// Map a key event to an input event. Unbound keys and release events
/// return None.
pub fn map_key(event: KeyEvent) -> Option<InputEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let key = match event.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match key {
        KeyCode::Left | KeyCode::Char('a') => Some(InputEvent::Action(GameAction::MoveLeft)),
        KeyCode::Right | KeyCode::Char('d') => Some(InputEvent::Action(GameAction::MoveRight)),
        KeyCode::Down | KeyCode::Char('s') => Some(InputEvent::SoftDrop),
        KeyCode::Up | KeyCode::Char('x') => Some(InputEvent::Action(GameAction::RotateCw)),
        KeyCode::Char('z') => Some(InputEvent::Action(GameAction::RotateCcw)),
        KeyCode::Char('c') => Some(InputEvent::Action(GameAction::Hold)),
        KeyCode::Char(' ') => Some(InputEvent::Action(GameAction::HardDrop)),
        KeyCode::Enter => Some(InputEvent::Action(GameAction::Confirm)),
        KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Held soft-drop state reconstructed from key repeats.
#[derive(Debug, Default)]
pub struct SoftDropHold {
    ticks_left: u32,
}

impl SoftDropHold {
    pub fn new() -> Self {
        Self::default()
    }

    /// A press or repeat arrived; keep the level held.
    pub fn press(&mut self) {
        self.ticks_left = SOFT_DROP_HOLD_TICKS;
    }

    /// Whether soft drop is held this tick.
    pub fn is_active(&self) -> bool {
        self.ticks_left > 0
    }

    /// Advance one tick; the latch decays until the next repeat.
    pub fn tick(&mut self) {
        self.ticks_left = self.ticks_left.saturating_sub(1);
    }
}
