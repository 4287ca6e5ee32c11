//! Submit control: `[ Ask ]`, or a dimmed `[ Thinking... ]` while disabled.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct SubmitButton<'a> {
    label: &'a str,
    enabled: bool,
}

impl<'a> SubmitButton<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Columns needed to show `label` with its brackets and padding.
    pub fn width_for(label: &str) -> u16 {
        label.chars().count() as u16 + 4
    }
}

impl Widget for SubmitButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.enabled {
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));

        Paragraph::new(Span::styled(format!("[ {} ]", self.label), style))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
