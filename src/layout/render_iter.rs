//! Forward-only layout scanner.
//!
//! [`RenderIter`] cuts the buffer into display rows starting at any offset,
//! one row per call to `next()`. While scanning it records where a tracked
//! offset (usually the cursor) lands on screen. Scans are cheap to abandon:
//! drive it for as many rows as needed and drop it. To rescan, build a new one.
//!
//! # Row algorithm
//!
//! Starting at scan position `p`:
//! 1. Take up to `wrap` characters, stopping just after the first newline.
//! 2. Shrink the row from the right while its tab-expanded width exceeds
//!    `wrap`, keeping at least one character.
//! 3. Emit the row with its trailing newline stripped and tabs expanded.
//!
//! The row after one whose window held a newline starts a fresh logical
//! line, even when step 2 cut the newline off.
//!
//! The shrink loop re-measures the whole span on every step, so a scan costs
//! O(rows × wrap²). That is fine for a screenful; it is not meant for bulk
//! rendering of large files.

use super::types::{DisplayRow, LayoutParams, RenderResult};
use super::width::{expand_tabs, visual_width};
use crate::model::TextBuffer;

/// Lazily yields [`DisplayRow`]s from a start offset to the end of the buffer.
#[derive(Debug, Clone)]
pub struct RenderIter<'a> {
    text: &'a [char],
    layout: LayoutParams,
    tracked: Option<usize>,
    pos: usize,
    row: usize,
    first: bool,
    continued: bool,
    result: RenderResult,
}

impl<'a> RenderIter<'a> {
    /// Scan from `start`, tracking the visual position of `tracked`.
    pub fn new(buffer: &'a TextBuffer, layout: LayoutParams, tracked: usize, start: usize) -> Self {
        Self::with_tracking(buffer, layout, Some(tracked), start)
    }

    /// Scan from `start` without tracking any offset.
    pub fn untracked(buffer: &'a TextBuffer, layout: LayoutParams, start: usize) -> Self {
        Self::with_tracking(buffer, layout, None, start)
    }

    fn with_tracking(
        buffer: &'a TextBuffer,
        layout: LayoutParams,
        tracked: Option<usize>,
        start: usize,
    ) -> Self {
        Self {
            text: buffer.as_chars(),
            layout,
            tracked,
            pos: start,
            row: 0,
            first: true,
            continued: false,
            result: RenderResult::default(),
        }
    }

    /// Offset where the next row will start.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Tracked point and rendered length accumulated so far.
    pub fn result(&self) -> RenderResult {
        self.result
    }

    /// Whether the row starting at `start` resumes a wrapped logical line.
    ///
    /// Only consulted for the first row of a scan; later rows know from the
    /// row before them.
    fn starts_mid_line(&self, start: usize) -> bool {
        let width = self.layout.wrap.get();
        start >= width && !self.text[start - width..start].contains(&'\n')
    }

    fn track(&mut self, start: usize, end: usize) {
        let Some(tracked) = self.tracked else {
            return;
        };
        let tab = self.layout.tab;
        if (start..=end).contains(&tracked) {
            self.result.point_col = Some(visual_width(&self.text[start..tracked], tab));
            self.result.point_row = Some(self.row);
        }
        // A cursor resting after a final newline sits on the implicit empty
        // line below the last row.
        if tracked == self.text.len() && self.text.last() == Some(&'\n') {
            self.result.point_col = Some(0);
            self.result.point_row = Some(self.result.point_row.map_or(0, |row| row + 1));
        }
    }
}

impl Iterator for RenderIter<'_> {
    type Item = DisplayRow;

    fn next(&mut self) -> Option<DisplayRow> {
        let len = self.text.len();
        if self.pos >= len {
            return None;
        }
        let start = self.pos;
        let width = self.layout.wrap.get();
        let tab = self.layout.tab;

        let is_continuation = if self.first {
            self.starts_mid_line(start)
        } else {
            self.continued
        };
        self.first = false;

        let candidate_end = len.min(start + width);
        // A newline in the window ends the logical line even if the tab
        // shrink below pushes it onto the next row.
        let (mut end, ends_line) = match self.text[start..candidate_end]
            .iter()
            .position(|&c| c == '\n')
        {
            Some(i) => (start + i + 1, true),
            None => (candidate_end, false),
        };
        while end > start + 1 && visual_width(&self.text[start..end], tab) > width {
            end -= 1;
        }

        let span = &self.text[start..end];
        let visible = match span.split_last() {
            Some((&'\n', rest)) => rest,
            _ => span,
        };
        self.continued = !ends_line;

        self.track(start, end);
        self.row += 1;
        self.pos = end;
        self.result.total_bytes_rendered += end - start;

        Some(DisplayRow {
            consumed: end - start,
            is_continuation,
            text: expand_tabs(visible, tab),
        })
    }
}

#[cfg(test)]
#[path = "render_iter_tests.rs"]
mod tests;
