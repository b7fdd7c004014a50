use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::view::FormView;
use crate::tui::component::Component;
use crate::tui::components::FormPanel;

/// Draw the form at the top of the full-screen terminal.
pub fn draw_ui(frame: &mut Frame, view: &FormView) {
    let mut panel = FormPanel::new(view);
    let [form_area, _rest] =
        Layout::vertical([Constraint::Length(panel.required_height()), Constraint::Min(0)])
            .areas(frame.area());
    panel.render(frame, form_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::form::Form;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Position;

    #[test]
    fn test_draw_ui() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let view = FormView::from_form(&Form::host_entry());
        terminal.draw(|f| draw_ui(f, &view)).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Add a new local host:"));
        assert!(text.contains("IPv4 Address"));
        assert!(text.contains("Press [Enter] to add"));
    }

    #[test]
    fn test_cursor_follows_focus() {
        let mut form = Form::host_entry();
        update(&mut form, Action::Advance);
        update(&mut form, Action::InsertChar('a'));
        update(&mut form, Action::InsertChar('b'));
        let view = FormView::from_form(&form);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw_ui(f, &view)).unwrap();

        // Host value line is row 6, indented by one column
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(3, 6));
    }
}
