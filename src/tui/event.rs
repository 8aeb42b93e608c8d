use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use crate::core::engine::Op;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Calculator keys (become core Actions)
    Digit(char),
    Decimal,
    Operator(Op),
    Equals,
    Clear,
    Quit,

    // TUI-local events (handled directly in the event loop)
    MouseMove(u16, u16),
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Moved => {
                Some(TuiEvent::MouseMove(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Maps a key event to a TuiEvent. Pure, so every binding is testable.
fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Some terminals report releases and repeats too; only presses count
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        // Ctrl+C always quits
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        // Regular key handling
        (_, KeyCode::Char(c)) => translate_char(c),
        (_, KeyCode::Enter) => Some(TuiEvent::Equals),
        // Esc and Delete both read as the big C button
        (_, KeyCode::Esc | KeyCode::Delete) => Some(TuiEvent::Clear),
        _ => None,
    }
}

/// Key bindings for plain characters.
fn translate_char(c: char) -> Option<TuiEvent> {
    match c {
        '0'..='9' => Some(TuiEvent::Digit(c)),
        '.' => Some(TuiEvent::Decimal),
        '+' => Some(TuiEvent::Operator(Op::Add)),
        '-' => Some(TuiEvent::Operator(Op::Sub)),
        // 'x' is what people reach for on a plain keyboard
        '*' | 'x' | 'X' => Some(TuiEvent::Operator(Op::Mul)),
        '/' => Some(TuiEvent::Operator(Op::Div)),
        '=' => Some(TuiEvent::Equals),
        'c' | 'C' => Some(TuiEvent::Clear),
        'q' | 'Q' => Some(TuiEvent::Quit),
        _ => None,
    }
}
