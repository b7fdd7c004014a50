//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form, and
//! translates keyboard events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Single-threaded and blocking: read one event, dispatch it through the
//! session, redraw. There is no animation, so nothing is drawn between
//! keystrokes. The loop ends when the session reports an `Outcome` or a
//! store error; the terminal is restored in both cases before returning.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::commit::CommitHandler;
use crate::core::session::{Outcome, Session};
use crate::core::view::FormView;
use crate::error::Result;
use crate::tui::event::read_event;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste, SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Run the form until it is committed or aborted.
pub fn run<C: CommitHandler>(session: Session<C>) -> Result<Outcome> {
    let mut terminal = ratatui::init();
    let outcome = match TerminalModeGuard::new() {
        Ok(_guard) => event_loop(&mut terminal, session),
        Err(e) => Err(e.into()),
    };
    ratatui::restore();
    outcome
}

fn event_loop<C: CommitHandler>(
    terminal: &mut DefaultTerminal,
    mut session: Session<C>,
) -> Result<Outcome> {
    loop {
        let view = FormView::from_form(session.form());
        terminal.draw(|f| ui::draw_ui(f, &view))?;

        let event = read_event()?;
        let Some(action) = event.into_action() else {
            continue;
        };
        if let Some(outcome) = session.dispatch(action)? {
            debug!("Session ended: {:?}", outcome);
            return Ok(outcome);
        }
    }
}
