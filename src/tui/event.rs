use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    Submit,
    NextField,
    PrevField,

    InputChar(char),
    Paste(String), // Bracketed paste
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    Resize,
}

impl TuiEvent {
    /// The core action for this event. `None` for redraw-only events.
    pub fn into_action(self) -> Option<Action> {
        match self {
            TuiEvent::Quit => Some(Action::Cancel),
            TuiEvent::Submit => Some(Action::Commit),
            TuiEvent::NextField => Some(Action::Advance),
            TuiEvent::PrevField => Some(Action::Retreat),
            TuiEvent::InputChar(c) => Some(Action::InsertChar(c)),
            TuiEvent::Paste(text) => Some(Action::Paste(text)),
            TuiEvent::Backspace => Some(Action::Backspace),
            TuiEvent::Delete => Some(Action::Delete),
            TuiEvent::CursorLeft => Some(Action::CursorLeft),
            TuiEvent::CursorRight => Some(Action::CursorRight),
            TuiEvent::CursorHome => Some(Action::CursorHome),
            TuiEvent::CursorEnd => Some(Action::CursorEnd),
            TuiEvent::Resize => None,
        }
    }
}

/// Block until the next meaningful terminal event.
pub fn read_event() -> std::io::Result<TuiEvent> {
    loop {
        if let Some(event) = translate(event::read()?) {
            return Ok(event);
        }
    }
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event)
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Map a key press to a `TuiEvent`. Releases and repeats are ignored.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::BackTab) => Some(TuiEvent::PrevField),
        (KeyModifiers::SHIFT, KeyCode::Tab) => Some(TuiEvent::PrevField),
        (_, KeyCode::Tab) => Some(TuiEvent::NextField),
        (_, KeyCode::Up) => Some(TuiEvent::PrevField),
        (_, KeyCode::Down) => Some(TuiEvent::NextField),
        (KeyModifiers::CONTROL, _) => None,
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
        (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
        _ => None,
    }
}
