//! UI layout rendering for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use camq_core::{ASK_LABEL, THINKING_LABEL};

use super::app::TuiApp;
use super::widgets::input_area::input_height;
use super::widgets::{InputArea, ResponseArea, StatusBar, SubmitButton};

const PLACEHOLDER: &str = "Ask a question...";

/// Render the entire TUI
pub fn render(app: &TuiApp, frame: &mut Frame) {
    let regions = create_layout(frame.area(), app);

    let status_bar = StatusBar::new(&app.title)
        .endpoint(&app.endpoint)
        .loading(app.panel.is_loading());
    frame.render_widget(status_bar, regions.status);

    let response = ResponseArea::new(app.panel.response_view())
        .scroll(app.scroll_offset)
        .loading(app.panel.is_loading());
    frame.render_widget(response, regions.response);

    let hint = if app.panel.is_loading() {
        "Waiting for the answer · Esc to quit"
    } else {
        "Enter to ask · PgUp/PgDn scroll · Ctrl+L clear · Esc to quit"
    };
    let input = InputArea::new(&app.input)
        .placeholder(PLACEHOLDER)
        .hint(hint);
    frame.render_widget(input, regions.input);

    let button = SubmitButton::new(app.panel.submit_label()).enabled(app.panel.submit_enabled());
    frame.render_widget(button, regions.button);
}

/// Layout regions
pub struct LayoutRegions {
    pub status: Rect,
    pub response: Rect,
    pub input: Rect,
    pub button: Rect,
}

/// Button wide enough for either label, so it does not jump while loading.
fn button_width() -> u16 {
    SubmitButton::width_for(ASK_LABEL).max(SubmitButton::width_for(THINKING_LABEL))
}

pub fn create_layout(area: Rect, app: &TuiApp) -> LayoutRegions {
    let button_width = button_width();
    let input_width = area.width.saturating_sub(button_width);
    let input_h = input_height(app.input.value(), input_width);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(input_h),
        ])
        .split(area);

    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(button_width)])
        .split(rows[2]);

    LayoutRegions {
        status: rows[0],
        response: rows[1],
        input: input_row[0],
        button: input_row[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::events::{InputAction, PanelEvent};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &TuiApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal.draw(|f| render(app, f)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn type_text(app: &mut TuiApp, text: &str) {
        for c in text.chars() {
            app.handle_input_action(InputAction::Char(c));
        }
    }

    #[test]
    fn test_initial_screen() {
        let app = TuiApp::new("CAM Chatbot", "http://localhost:8000/ask");
        let screen = screen(&app);

        assert!(screen.contains("CAM Chatbot"));
        assert!(screen.contains("http://localhost:8000/ask"));
        assert!(screen.contains("Ask a question..."));
        assert!(screen.contains("[ Ask ]"));
        assert!(!screen.contains(THINKING_LABEL));
    }

    #[test]
    fn test_question_answer_cycle() {
        let mut app = TuiApp::new("CAM Chatbot", "http://localhost:8000/ask");
        type_text(&mut app, "What is CAM?");
        app.submit().unwrap();

        let loading = screen(&app);
        assert!(loading.contains("[ Thinking... ]"));
        assert!(loading.contains("What is CAM?"));

        app.handle_panel_event(PanelEvent::Settled(Ok("CAM is...".to_string())));

        let done = screen(&app);
        assert!(done.contains("CAM is..."));
        assert!(done.contains("[ Ask ]"));
        assert!(!done.contains(THINKING_LABEL));
    }

    #[test]
    fn test_answer_indentation_is_preserved() {
        let mut app = TuiApp::new("t", "e");
        type_text(&mut app, "q");
        app.submit().unwrap();
        app.handle_panel_event(PanelEvent::Settled(Ok("- a\n    - b".to_string())));

        assert!(screen(&app).contains("│    - b"));
    }

    #[test]
    fn test_end_of_long_single_line_answer_is_reachable() {
        let mut app = TuiApp::new("t", "e");
        app.update_viewport(Rect::new(0, 0, 80, 16));
        type_text(&mut app, "q");
        app.submit().unwrap();
        app.handle_panel_event(PanelEvent::Settled(Ok(format!("{}TAIL", "x".repeat(2000)))));

        assert!(!screen(&app).contains("TAIL"));

        app.handle_input_action(InputAction::ScrollToBottom);
        assert!(screen(&app).contains("TAIL"));
    }

    #[test]
    fn test_layout_fits_area() {
        let app = TuiApp::new("t", "e");
        let area = Rect::new(0, 0, 60, 20);
        let regions = create_layout(area, &app);

        assert_eq!(regions.status.height, 2);
        assert_eq!(regions.input.height, 3);
        assert_eq!(regions.button.width, button_width());
        assert_eq!(
            regions.status.height + regions.response.height + regions.input.height,
            20
        );
    }
}
