//! Scrolling the view by whole virtual lines.
//!
//! Scrolling moves the view first and drags the cursor along only when it
//! would otherwise leave the visible area. Both directions use the
//! virtual-line arithmetic of [`crate::layout::line_iter`].

use crate::layout::{next_virtual_boundary, WrapWidth};
use crate::model::TextBuffer;
use crate::state::{Cursor, Viewport};

/// Scroll the view down by `lines` virtual lines.
///
/// The view never starts on the end-of-buffer position. A cursor left above
/// the new first row is pulled down onto it.
pub fn scroll_down(
    buffer: &TextBuffer,
    wrap: WrapWidth,
    viewport: &mut Viewport,
    cursor: &mut Cursor,
    lines: usize,
) {
    for _ in 0..lines {
        let next = next_virtual_boundary(buffer, wrap, viewport.first_offset()) + 1;
        if next >= buffer.len() {
            break;
        }
        viewport.set_first_offset(next);
        if cursor.offset() < next {
            *cursor = Cursor::goto(buffer, next);
        }
    }
}

/// Scroll the view up by `lines` virtual lines.
///
/// `view_end` is the end offset of the most recent render. It is moved up in
/// step with the view, and a cursor at or past the shifted end is pulled up
/// to the virtual line before it.
///
/// The shifted end is an estimate: it does not rescan the rows now on
/// screen, so near the end of the buffer (where fewer than a screenful of
/// rows were rendered) the cursor can be pulled further up than needed.
pub fn scroll_up(
    buffer: &TextBuffer,
    wrap: WrapWidth,
    viewport: &mut Viewport,
    cursor: &mut Cursor,
    lines: usize,
    view_end: usize,
) {
    let mut end = Cursor::goto(buffer, view_end);
    for _ in 0..lines {
        let first = Cursor::goto(buffer, viewport.first_offset()).move_up(buffer, wrap);
        viewport.set_first_offset(first.offset());
        end = end.move_up(buffer, wrap);
    }
    if cursor.offset() >= end.offset() {
        *cursor = end.move_up(buffer, wrap);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
