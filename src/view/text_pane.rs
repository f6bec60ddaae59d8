//! Text pane widget: display rows with an optional continuation gutter.

use crate::layout::DisplayRow;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

/// Marker drawn in the gutter of rows that continue a wrapped line.
pub const CONTINUATION_MARKER: char = '➥';

/// Gutter text for one row: the marker right-aligned before a single space,
/// or blanks.
pub fn gutter_cell(width: usize, is_continuation: bool) -> String {
    if width == 0 {
        return String::new();
    }
    if is_continuation {
        format!("{:>pad$} ", CONTINUATION_MARKER, pad = width - 1)
    } else {
        " ".repeat(width)
    }
}

/// Renders already laid-out rows top to bottom.
///
/// Rows beyond the area height are dropped; text beyond the area width is
/// clipped.
pub struct TextPane<'a> {
    rows: &'a [DisplayRow],
    gutter: usize,
}

impl<'a> TextPane<'a> {
    /// `gutter` is the gutter width in columns, 0 for none.
    pub fn new(rows: &'a [DisplayRow], gutter: usize) -> Self {
        Self { rows, gutter }
    }
}

impl Widget for TextPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (y, row) in (area.top()..area.bottom()).zip(self.rows) {
            let line = format!("{}{}", gutter_cell(self.gutter, row.is_continuation), row.text);
            buf.set_stringn(area.x, y, line, area.width as usize, Style::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(text: &str, is_continuation: bool) -> DisplayRow {
        DisplayRow {
            consumed: text.chars().count(),
            is_continuation,
            text: text.to_string(),
        }
    }

    fn rendered(rows: &[DisplayRow], gutter: usize, width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        TextPane::new(rows, gutter).render(area, &mut buf);
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn gutter_cell_marks_continuations() {
        assert_eq!(gutter_cell(3, true), " ➥ ");
        assert_eq!(gutter_cell(3, false), "   ");
        assert_eq!(gutter_cell(2, true), "➥ ");
        assert_eq!(gutter_cell(0, true), "");
    }

    #[test]
    fn rows_get_gutter_prefix() {
        let rows = [row("abcde", false), row("fghij", true)];
        assert_eq!(rendered(&rows, 3, 10, 3), vec!["   abcde", " ➥ fghij", ""]);
    }

    #[test]
    fn no_gutter_draws_text_at_column_zero() {
        let rows = [row("abcde", false), row("fg", true)];
        assert_eq!(rendered(&rows, 0, 10, 2), vec!["abcde", "fg"]);
    }

    #[test]
    fn rows_are_clipped_to_area() {
        let rows = [row("abcdefgh", false), row("second", false), row("third", false)];
        assert_eq!(rendered(&rows, 0, 4, 2), vec!["abcd", "seco"]);
    }
}
