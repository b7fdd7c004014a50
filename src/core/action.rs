//! # Actions
//!
//! Everything the user can do to the form becomes an `Action`.
//! Typing a digit? That's `Action::InsertChar('1')`.
//! Pressing Enter? That's `Action::Commit`.
//!
//! `update()` takes the form and an action, mutates the form in memory and
//! returns an `Effect` describing what the caller must do next. It never
//! touches the filesystem: persisting is the session runner's job.
//!
//! ```text
//! Form + Action  →  update()  →  Effect
//! ```

use log::debug;

use super::commit::CommitRecord;
use super::form::{FieldId, Form};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Editing the focused field
    InsertChar(char),
    Paste(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Navigation
    Advance,
    Retreat,

    /// Enter: advance, or commit from a valid last field
    Commit,
    /// Esc / Ctrl+C: end the session without writing anything
    Cancel,
}

/// What the caller must do after `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// State changed in memory only (or not at all).
    None,
    /// Persist this record, then end the session as committed.
    Commit(CommitRecord),
    /// End the session as aborted.
    Quit,
}

pub fn update(form: &mut Form, action: Action) -> Effect {
    debug!("update: {:?} (active field {})", action, form.active_index());
    match action {
        Action::InsertChar(c) => {
            form.active_mut().insert_char(c);
        }
        Action::Paste(text) => {
            form.active_mut().insert_str(&text);
        }
        Action::Backspace => {
            form.active_mut().backspace();
        }
        Action::Delete => {
            form.active_mut().delete();
        }
        Action::CursorLeft => {
            form.active_mut().move_left();
        }
        Action::CursorRight => {
            form.active_mut().move_right();
        }
        Action::CursorHome => {
            form.active_mut().move_home();
        }
        Action::CursorEnd => {
            form.active_mut().move_end();
        }
        Action::Advance => form.advance(),
        Action::Retreat => form.retreat(),
        Action::Commit => {
            // Only the focused field gates the commit; earlier fields were
            // checked when Enter was pressed on them.
            if form.active().is_valid() && form.is_last_active() {
                return Effect::Commit(CommitRecord::new(
                    form.field(FieldId::Ip).content(),
                    form.field(FieldId::Host).content(),
                ));
            }
            form.advance();
        }
        Action::Cancel => return Effect::Quit,
    }
    Effect::None
}
