//! Input area widget with line editing support.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use tui_input::Input;

use super::wrap::{display_width, wrap_rows};

pub const PROMPT: &str = "> ";

/// Input area widget with basic line editing
pub struct InputArea<'a> {
    input: &'a Input,
    placeholder: &'a str,
    hint: Option<&'a str>,
}

impl<'a> InputArea<'a> {
    pub fn new(input: &'a Input) -> Self {
        Self {
            input,
            placeholder: "",
            hint: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }
}

/// Row and column of the character at `cursor` (a char index) within `rows`.
///
/// The column is in terminal cells, relative to the start of the row. A cursor
/// past the end of a full last row moves onto a fresh row.
fn cursor_cell(rows: &[&str], cursor: usize, first_width: usize, full_width: usize) -> (usize, usize) {
    let mut remaining = cursor;
    for (i, row) in rows.iter().enumerate() {
        let len = row.chars().count();
        if remaining < len {
            let before: String = row.chars().take(remaining).collect();
            return (i, display_width(&before));
        }
        if i + 1 == rows.len() {
            let row_width = if i == 0 { first_width } else { full_width };
            let width = display_width(row);
            return if width >= row_width { (i + 1, 0) } else { (i, width) };
        }
        remaining -= len;
    }
    (0, 0)
}

impl Widget for InputArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        block.render(area, buf);

        let prompt_len = PROMPT.len();
        let input_value = self.input.value();
        let cursor = self.input.cursor();

        let prompt_style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
        let input_style = Style::default().fg(Color::White);

        let first_line_width = inner.width.saturating_sub(prompt_len as u16) as usize;
        let full_line_width = inner.width as usize;

        if first_line_width == 0 || full_line_width == 0 || inner.height == 0 {
            return;
        }

        // Reserve the last row for the hint when there is room
        let input_rows_available = if self.hint.is_some() && inner.height > 1 {
            inner.height - 1
        } else {
            inner.height
        } as usize;

        let rows = wrap_rows(input_value, first_line_width, full_line_width);
        let (cursor_line, cursor_col) =
            cursor_cell(&rows, cursor, first_line_width, full_line_width);

        // Keep the cursor row on screen
        let top = (cursor_line + 1).saturating_sub(input_rows_available);

        let mut lines: Vec<Line> = Vec::new();
        if input_value.is_empty() {
            lines.push(Line::from(vec![
                Span::styled(PROMPT, prompt_style),
                Span::styled(self.placeholder, Style::default().fg(Color::DarkGray)),
            ]));
        } else {
            for (i, row) in rows.iter().enumerate() {
                if i == 0 {
                    lines.push(Line::from(vec![
                        Span::styled(PROMPT, prompt_style),
                        Span::styled(*row, input_style),
                    ]));
                } else {
                    lines.push(Line::from(Span::styled(*row, input_style)));
                }
            }
        }

        for (i, line) in lines
            .iter()
            .skip(top)
            .take(input_rows_available)
            .enumerate()
        {
            buf.set_line(inner.x, inner.y + i as u16, line, inner.width);
        }

        let cursor_x = if cursor_line == 0 {
            inner.x + (prompt_len + cursor_col) as u16
        } else {
            inner.x + cursor_col as u16
        };
        let cursor_y = inner.y + (cursor_line - top) as u16;

        if cursor_x < inner.right() {
            // On an empty line the cursor sits on the placeholder's first character
            let cursor_char = if input_value.is_empty() {
                self.placeholder.chars().next()
            } else {
                input_value.chars().nth(cursor)
            }
            .unwrap_or(' ');
            buf.set_string(
                cursor_x,
                cursor_y,
                cursor_char.to_string(),
                Style::default().bg(Color::White).fg(Color::Black),
            );
        }

        if let Some(hint) = self.hint {
            if inner.height > 1 {
                let hint_y = inner.y + inner.height - 1;
                buf.set_string(inner.x, hint_y, hint, Style::default().fg(Color::DarkGray));
            }
        }
    }
}

/// Height needed for the input area: 1 border + wrapped rows + 1 hint, clamped.
pub fn input_height(input_text: &str, available_width: u16) -> u16 {
    let first = available_width.saturating_sub(PROMPT.len() as u16) as usize;
    let full = available_width as usize;

    if first == 0 || input_text.is_empty() {
        return 3;
    }

    let rows = wrap_rows(input_text, first, full).len();
    u16::try_from(1 + rows + 1).unwrap_or(u16::MAX).clamp(3, 10)
}
