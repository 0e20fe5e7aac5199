// Abstract input events and the key bindings that produce them.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Insert(char),
    Backspace,
    Submit,
    RecallPrevious,
    RecallNext,
    Quit,
}

/// Map a key press to an input event. Unbound keys give `None`.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if control => Some(InputEvent::Quit),
        KeyCode::Char(c) if !control => Some(InputEvent::Insert(c)),
        KeyCode::Enter => Some(InputEvent::Submit),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Up => Some(InputEvent::RecallPrevious),
        KeyCode::Down => Some(InputEvent::RecallNext),
        _ => None,
    }
}
