//! Bottom line: cursor/view report, or the search prompt while searching.

use crate::state::{EditorSession, RenderedView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
};

/// Text shown on the bottom line for the current session state.
///
/// `view` is the frame being drawn, so the report needs no second layout pass.
pub fn status_text(session: &EditorSession, view: &RenderedView) -> String {
    match session.prompt() {
        Some((label, query)) => format!("{}{}", label, query),
        None => session.status_line(view),
    }
}

/// Single-line widget for [`status_text`].
pub struct StatusLine<'a> {
    text: &'a str,
}

impl<'a> StatusLine<'a> {
    /// Widget drawing `text` on one row.
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::raw(self.text)).render(area, buf);
    }
}
