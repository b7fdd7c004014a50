//! # FormPanel Component
//!
//! Draws a whole `FormView`: title, one `FieldRow` per field, and the hint
//! line, laid out the way the plain text view reads:
//!
//! ```text
//! Add a new local host:
//!
//!  IPv4 Address
//!  127.0.0.1
//!
//!  Host
//!  host.name
//!
//!  Press [Enter] to add
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;

use super::FieldRow;
use super::field_row::{HINT_COLOR, ROW_HEIGHT};
use crate::core::view::FormView;
use crate::tui::component::Component;

pub struct FormPanel<'a> {
    pub view: &'a FormView,
}

impl<'a> FormPanel<'a> {
    pub fn new(view: &'a FormView) -> Self {
        Self { view }
    }

    /// Total height needed: title, then a blank line before each row and
    /// before the hint.
    pub fn required_height(&self) -> u16 {
        let rows = self.view.rows.len() as u16;
        1 + rows * (ROW_HEIGHT + 1) + 2
    }
}

impl Component for FormPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut constraints = vec![Constraint::Length(1)];
        for _ in &self.view.rows {
            constraints.push(Constraint::Length(1));
            constraints.push(Constraint::Length(ROW_HEIGHT));
        }
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));
        let areas = Layout::vertical(constraints).split(area);

        frame.render_widget(Span::raw(self.view.title), areas[0]);

        // Rows and the hint are indented by one column
        let indent = |r: Rect| Rect {
            x: r.x.saturating_add(1),
            width: r.width.saturating_sub(1),
            ..r
        };

        for (i, row) in self.view.rows.iter().enumerate() {
            FieldRow::new(row).render(frame, indent(areas[2 + i * 2]));
        }

        let hint_area = areas[2 + self.view.rows.len() * 2];
        frame.render_widget(
            Span::styled(self.view.hint, Style::default().fg(HINT_COLOR)),
            indent(hint_area),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::Form;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|line| {
                line.iter()
                    .map(|c| c.symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_required_height_for_two_rows() {
        let view = FormView::from_form(&Form::host_entry());
        assert_eq!(FormPanel::new(&view).required_height(), 9);
    }

    #[test]
    fn test_layout_matches_plain_text() {
        let view = FormView::from_form(&Form::host_entry());
        let mut terminal = Terminal::new(TestBackend::new(40, 9)).unwrap();
        terminal
            .draw(|f| {
                FormPanel::new(&view).render(f, f.area());
            })
            .unwrap();

        let rendered = buffer_lines(&terminal).join("\n") + "\n";
        assert_eq!(rendered, view.to_plain_text());
    }
}
