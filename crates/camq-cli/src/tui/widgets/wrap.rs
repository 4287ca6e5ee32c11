//! Width-aware row splitting shared by the input and response widgets.

use unicode_width::UnicodeWidthChar;

/// Split `text` into rows: the first row is `first_width` columns wide, the
/// rest `full_width`. Whitespace is kept as-is. Empty text yields one empty row.
pub fn wrap_rows(text: &str, first_width: usize, full_width: usize) -> Vec<&str> {
    let mut rows = Vec::new();
    let mut remaining = text;
    let mut is_first = true;

    while !remaining.is_empty() || is_first {
        let row_width = if is_first { first_width } else { full_width };
        let mut width = 0;
        let mut split_byte = remaining.len();
        for (byte_idx, ch) in remaining.char_indices() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if width + ch_width > row_width {
                split_byte = byte_idx;
                break;
            }
            width += ch_width;
        }
        // A character wider than the row still has to go somewhere
        if split_byte == 0 && !remaining.is_empty() {
            split_byte = remaining.chars().next().map(char::len_utf8).unwrap_or(0);
        }
        let (row, rest) = remaining.split_at(split_byte);
        rows.push(row);
        remaining = rest;
        is_first = false;
    }

    rows
}

/// Display width of `text` in terminal columns.
pub fn display_width(text: &str) -> usize {
    text.chars()
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
        .sum()
}
