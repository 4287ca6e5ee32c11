//! Title bar showing the heading, endpoint, and request status.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct StatusBar<'a> {
    title: &'a str,
    endpoint: &'a str,
    is_loading: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            endpoint: "",
            is_loading: false,
        }
    }

    pub fn endpoint(mut self, endpoint: &'a str) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style_label = Style::default().fg(Color::DarkGray);

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(
                self.title,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ];

        if !self.endpoint.is_empty() {
            spans.push(Span::styled(" | ", style_label));
            spans.push(Span::styled(self.endpoint, Style::default().fg(Color::White)));
        }

        if self.is_loading {
            spans.push(Span::styled(" | ", style_label));
            spans.push(Span::styled(
                "WAITING",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}
