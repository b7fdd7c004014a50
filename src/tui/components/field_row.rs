//! # FieldRow Component
//!
//! One labeled input: a label line and a value line underneath it.
//!
//! Stateless: everything comes from the `RowView` prop. When the row is
//! focused it also places the terminal cursor.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthChar;

use crate::core::view::RowView;
use crate::tui::component::Component;

pub const LABEL_COLOR: Color = Color::Rgb(0x42, 0x87, 0xf5);
pub const HINT_COLOR: Color = Color::Rgb(0x76, 0x76, 0x76);
/// Display width of the label and value lines
pub const FIELD_WIDTH: u16 = 30;
/// Lines used by one row (label + value)
pub const ROW_HEIGHT: u16 = 2;

pub struct FieldRow<'a> {
    pub row: &'a RowView,
}

impl<'a> FieldRow<'a> {
    pub fn new(row: &'a RowView) -> Self {
        Self { row }
    }

    fn value_style(&self) -> Style {
        if self.row.showing_placeholder {
            Style::default().fg(HINT_COLOR)
        } else if self.row.focused && !self.row.valid {
            Style::default().fg(Color::Red)
        } else if self.row.focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }

    /// The slice of the value that fits in `width` columns with the cursor
    /// on screen, and the cursor column within that slice.
    ///
    /// Text before the cursor scrolls off to the left once the cursor would
    /// pass the last column.
    fn visible_window(&self, width: u16) -> (String, u16) {
        if self.row.showing_placeholder {
            return (self.row.text.clone(), 0);
        }
        let width = width as usize;
        if width == 0 {
            return (String::new(), 0);
        }

        let chars: Vec<char> = self.row.text.chars().collect();
        let cursor = self.row.cursor_column.min(chars.len());

        // Walk back from the cursor while it still fits before the last column
        let mut start = cursor;
        let mut before_cursor = 0;
        while start > 0 {
            let w = chars[start - 1].width().unwrap_or(0);
            if before_cursor + w > width - 1 {
                break;
            }
            before_cursor += w;
            start -= 1;
        }

        let mut used = 0;
        let visible: String = chars[start..]
            .iter()
            .take_while(|c| {
                used += c.width().unwrap_or(0);
                used <= width
            })
            .collect();

        (visible, before_cursor as u16)
    }
}

impl Component for FieldRow<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.min(FIELD_WIDTH);
        let [label_area, value_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
        let label_area = Rect { width, ..label_area };
        let value_area = Rect { width, ..value_area };

        let label = Paragraph::new(Line::from(Span::styled(
            self.row.label,
            Style::default().fg(LABEL_COLOR),
        )));
        frame.render_widget(label, label_area);

        let (visible, cursor_x) = self.visible_window(width);
        let value = Paragraph::new(Line::from(Span::styled(visible, self.value_style())));
        frame.render_widget(value, value_area);

        if self.row.focused {
            frame.set_cursor_position((value_area.x + cursor_x, value_area.y));
        }
    }
}
