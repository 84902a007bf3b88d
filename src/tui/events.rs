use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    ToggleTimer,
    EndSession,
    None,
}

/// Poll for keyboard events and convert to actions
///
/// The timeout doubles as the clock tick: when it fires without input the
/// caller gets `Action::None` and can redraw the elapsed time.
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q'), _) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        // Timer control: one key walks start -> pause -> resume
        (KeyCode::Char(' '), _) => Action::ToggleTimer,
        (KeyCode::Char('s'), _) => Action::ToggleTimer,
        (KeyCode::Enter, _) => Action::EndSession,
        (KeyCode::Char('e'), _) => Action::EndSession,

        _ => Action::None,
    }
}
