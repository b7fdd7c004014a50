//! # Field
//!
//! One editable text box: content buffer, cursor, focus flag and the result
//! of validating the current content.
//!
//! Every edit goes through [`Field::set_content`], so `last_validation` can
//! never lag behind `content`.

use super::validate::{ValidationError, Validator};

/// An editable, self-validating text field.
#[derive(Debug, Clone)]
pub struct Field {
    content: String,
    /// Cursor position as byte offset in content (0..=content.len())
    cursor: usize,
    placeholder: String,
    /// Maximum length in characters (None = unlimited)
    max_length: Option<usize>,
    rule: Validator,
    last_validation: Result<(), ValidationError>,
    focused: bool,
}

impl Field {
    /// Create an empty, unfocused field. The empty content is validated
    /// immediately.
    pub fn new(placeholder: impl Into<String>, rule: Validator) -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            placeholder: placeholder.into(),
            max_length: None,
            rule,
            last_validation: rule(""),
            focused: false,
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor position counted in characters, for rendering.
    pub fn cursor_chars(&self) -> usize {
        self.content[..self.cursor].chars().count()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn last_validation(&self) -> &Result<(), ValidationError> {
        &self.last_validation
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_valid(&self) -> bool {
        self.last_validation.is_ok()
    }

    /// Replace the content and re-run the validator.
    ///
    /// Content beyond `max_length` is truncated. The cursor is kept where it
    /// was when still inside the new content, otherwise moved to the end.
    pub fn set_content(&mut self, text: &str) {
        self.content = match self.max_length {
            Some(limit) => text.chars().take(limit).collect(),
            None => text.to_string(),
        };
        if self.cursor > self.content.len() || !self.content.is_char_boundary(self.cursor) {
            self.cursor = self.content.len();
        }
        self.last_validation = (self.rule)(&self.content);
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Drop focus. Content and validation state are kept.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Insert a character at the cursor. Returns `false` if the field is full.
    pub fn insert_char(&mut self, c: char) -> bool {
        if self.remaining_capacity() == Some(0) {
            return false;
        }
        let mut next = self.content.clone();
        next.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.set_content(&next);
        true
    }

    /// Insert pasted text at the cursor. Line breaks are dropped and the
    /// paste is cut to the remaining capacity.
    pub fn insert_str(&mut self, text: &str) -> bool {
        let cleaned = text.chars().filter(|c| !matches!(c, '\n' | '\r'));
        let accepted: String = match self.remaining_capacity() {
            Some(room) => cleaned.take(room).collect(),
            None => cleaned.collect(),
        };
        if accepted.is_empty() {
            return false;
        }
        let mut next = self.content.clone();
        next.insert_str(self.cursor, &accepted);
        self.cursor += accepted.len();
        self.set_content(&next);
        true
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = prev_char_boundary(&self.content, self.cursor);
        let mut next = self.content.clone();
        next.drain(prev..self.cursor);
        self.cursor = prev;
        self.set_content(&next);
        true
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }
        let end = next_char_boundary(&self.content, self.cursor);
        let mut next = self.content.clone();
        next.drain(self.cursor..end);
        self.set_content(&next);
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor = prev_char_boundary(&self.content, self.cursor);
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }
        self.cursor = next_char_boundary(&self.content, self.cursor);
        true
    }

    pub fn move_home(&mut self) -> bool {
        let moved = self.cursor != 0;
        self.cursor = 0;
        moved
    }

    pub fn move_end(&mut self) -> bool {
        let moved = self.cursor != self.content.len();
        self.cursor = self.content.len();
        moved
    }

    fn remaining_capacity(&self) -> Option<usize> {
        self.max_length
            .map(|limit| limit.saturating_sub(self.content.chars().count()))
    }
}

/// Find the byte offset of the previous character boundary before `pos`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
