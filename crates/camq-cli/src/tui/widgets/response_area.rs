//! Scrollable, preformatted response display.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::wrap::wrap_rows;

const TAB_WIDTH: usize = 8;

/// Response display. Shows nothing at all when there is no response.
pub struct ResponseArea<'a> {
    content: Option<&'a str>,
    scroll_offset: u16,
    is_loading: bool,
}

impl<'a> ResponseArea<'a> {
    pub fn new(content: Option<&'a str>) -> Self {
        Self {
            content,
            scroll_offset: 0,
            is_loading: false,
        }
    }

    pub fn scroll(mut self, offset: u16) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.is_loading = loading;
        self
    }
}

/// Replace tabs with spaces up to the next tab stop. Terminal cells have no
/// notion of a tab, so this keeps indentation intact.
pub fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            out.push(ch);
            column += 1;
        }
    }
    out
}

/// Build display text with every line kept verbatim (no markup, no trimming),
/// split into rows no wider than `width`. A zero width leaves lines unsplit.
pub fn preformatted(content: &str, width: u16) -> Text<'static> {
    let mut rows = Vec::new();
    for line in content.split('\n') {
        let line = expand_tabs(line.strip_suffix('\r').unwrap_or(line));
        if width == 0 {
            rows.push(Line::from(line));
            continue;
        }
        let width = width as usize;
        rows.extend(
            wrap_rows(&line, width, width)
                .into_iter()
                .map(|row| Line::from(row.to_string())),
        );
    }
    Text::from(rows)
}

/// Number of screen rows `content` occupies at `width`.
pub fn content_rows(content: &str, width: u16) -> u16 {
    if content.is_empty() {
        return 0;
    }
    u16::try_from(preformatted(content, width).lines.len()).unwrap_or(u16::MAX)
}

impl Widget for ResponseArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.is_loading {
            " Response... "
        } else {
            " Response "
        };

        let block = Block::default()
            .title(Span::styled(title, Style::default().fg(Color::Cyan)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        block.render(area, buf);

        let Some(content) = self.content else {
            return;
        };

        let text = preformatted(content, inner.width);
        let total_rows = u16::try_from(text.lines.len()).unwrap_or(u16::MAX);
        let max_scroll = total_rows.saturating_sub(inner.height);
        let effective_scroll = self.scroll_offset.min(max_scroll);

        Paragraph::new(text)
            .scroll((effective_scroll, 0))
            .render(inner, buf);
    }
}
