//! # Render Surface
//!
//! A pure projection of the form into rows of text. Any renderer can consume
//! a `FormView`; the ratatui adapter is one of them.

use super::field::Field;
use super::form::{FieldId, Form};

pub const FORM_TITLE: &str = "Add a new local host:";
pub const FORM_HINT: &str = "Press [Enter] to add";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub label: &'static str,
    /// Field content, or the placeholder when the content is empty
    pub text: String,
    pub showing_placeholder: bool,
    pub focused: bool,
    pub valid: bool,
    /// Cursor column in characters (meaningful when focused)
    pub cursor_column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub rows: Vec<RowView>,
    pub hint: &'static str,
}

impl FormView {
    pub fn from_form(form: &Form) -> Self {
        let labels = [FieldId::Ip.label(), FieldId::Host.label()];
        let rows = form
            .fields()
            .iter()
            .enumerate()
            .map(|(i, field)| row_view(labels.get(i).copied().unwrap_or(""), field))
            .collect();
        Self {
            title: FORM_TITLE,
            rows,
            hint: FORM_HINT,
        }
    }

    /// Plain text rendering, one label line and one value line per row.
    pub fn to_plain_text(&self) -> String {
        let mut out = format!("{}\n\n", self.title);
        for row in &self.rows {
            out.push_str(&format!(" {}\n {}\n\n", row.label, row.text));
        }
        out.push_str(&format!(" {}\n", self.hint));
        out
    }
}

fn row_view(label: &'static str, field: &Field) -> RowView {
    let showing_placeholder = field.content().is_empty();
    RowView {
        label,
        text: if showing_placeholder {
            field.placeholder().to_string()
        } else {
            field.content().to_string()
        },
        showing_placeholder,
        focused: field.is_focused(),
        valid: field.is_valid(),
        cursor_column: field.cursor_chars(),
    }
}
