//! Keeping the cursor on screen.
//!
//! After every event the view is adjusted so that the cursor's row lies in
//! `[first row, first row + height)`. Two strategies produce the same result:
//!
//! - [`reconcile`] answers with a [`RowIndex`] lookup when the view starts on
//!   a known row boundary.
//! - [`reconcile_by_scan`] re-derives everything with forward scans. It is
//!   the fallback when the view starts between rendered rows, which happens
//!   on tab-containing lines because scrolling uses tab-unaware arithmetic.

use crate::layout::{line_start, LayoutParams, RenderIter, RowIndex};
use crate::model::TextBuffer;
use crate::state::{Cursor, Viewport};
use tracing::trace;

/// Offset just past the last row visible in `viewport`.
pub fn view_end(buffer: &TextBuffer, index: &RowIndex, viewport: &Viewport) -> usize {
    match index.position(viewport.first_offset()) {
        Some(first_row) => index.end_of_rows(first_row, viewport.height()),
        None => scan_view_end(buffer, index.layout(), viewport),
    }
}

/// Move `viewport` so that `cursor` is visible.
///
/// `index` must have been built for `buffer` under the layout in use.
pub fn reconcile(buffer: &TextBuffer, index: &RowIndex, viewport: &mut Viewport, cursor: Cursor) {
    let first = viewport.first_offset();
    let Some(first_row) = index.position(first) else {
        trace!(first, "view not on a row boundary, rescanning");
        reconcile_by_scan(buffer, index.layout(), viewport, cursor);
        return;
    };

    let point = cursor.offset();
    let end = index.end_of_rows(first_row, viewport.height());
    if point >= end {
        // One row of view movement per row between the old end and the cursor.
        let skipped = index.rows_starting_in(end, point);
        viewport.set_first_offset(index.end_of_rows(first_row, skipped));
    } else if point < first {
        viewport.set_first_offset(index.row_start_at_or_before(point));
    }
}

/// Move `viewport` so that `cursor` is visible, using forward scans only.
pub fn reconcile_by_scan(
    buffer: &TextBuffer,
    layout: LayoutParams,
    viewport: &mut Viewport,
    cursor: Cursor,
) {
    let point = cursor.offset();
    let end = scan_view_end(buffer, layout, viewport);
    if point >= end {
        let mut scan = RenderIter::untracked(buffer, layout, end);
        let mut offset = end;
        while offset <= point {
            let Some(row) = scan.next() else {
                break;
            };
            let first = viewport.first_offset();
            if let Some(top_row) = RenderIter::untracked(buffer, layout, first).next() {
                viewport.set_first_offset(first + top_row.consumed);
            }
            offset += row.consumed;
        }
    } else if point < viewport.first_offset() {
        let mut offset = line_start(buffer, point);
        let mut first = offset;
        for row in RenderIter::untracked(buffer, layout, offset) {
            if offset > point {
                break;
            }
            first = offset;
            offset += row.consumed;
        }
        viewport.set_first_offset(first);
    }
}

fn scan_view_end(buffer: &TextBuffer, layout: LayoutParams, viewport: &Viewport) -> usize {
    let mut scan = RenderIter::untracked(buffer, layout, viewport.first_offset());
    scan.by_ref().take(viewport.height()).for_each(drop);
    viewport.first_offset() + scan.result().total_bytes_rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{TabWidth, WrapWidth};

    fn layout(wrap: usize) -> LayoutParams {
        LayoutParams::new(WrapWidth::new(wrap).unwrap(), TabWidth::DEFAULT)
    }

    /// Reconcile with both strategies and check they agree.
    fn reconciled(text: &str, wrap: usize, height: usize, first: usize, point: usize) -> usize {
        let buffer = TextBuffer::new(text);
        let index = RowIndex::build(&buffer, layout(wrap));
        let cursor = Cursor::goto(&buffer, point);

        let mut indexed = Viewport::new(wrap, height);
        indexed.set_first_offset(first);
        reconcile(&buffer, &index, &mut indexed, cursor);

        let mut scanned = Viewport::new(wrap, height);
        scanned.set_first_offset(first);
        reconcile_by_scan(&buffer, layout(wrap), &mut scanned, cursor);

        assert_eq!(indexed, scanned, "indexed and scanned reconciliation differ");
        indexed.first_offset()
    }

    const SIX_LINES: &str = "l0\nl1\nl2\nl3\nl4\nl5\n";

    #[test]
    fn visible_cursor_leaves_view_alone() {
        assert_eq!(reconciled(SIX_LINES, 10, 3, 3, 7), 3);
    }

    #[test]
    fn cursor_below_view_scrolls_just_enough() {
        // Rows 0..3 visible; cursor on row 4 needs two rows of scrolling.
        assert_eq!(reconciled(SIX_LINES, 10, 3, 0, 13), 6);
    }

    #[test]
    fn cursor_exactly_at_view_end_scrolls_one_row() {
        assert_eq!(reconciled(SIX_LINES, 10, 3, 0, 9), 3);
    }

    #[test]
    fn cursor_above_view_snaps_view_to_cursor_row() {
        assert_eq!(reconciled(SIX_LINES, 10, 3, 12, 4), 3);
    }

    #[test]
    fn cursor_above_view_inside_wrapped_line() {
        assert_eq!(reconciled("abcdefghijklmno\nxyz", 5, 1, 16, 12), 10);
    }

    #[test]
    fn cursor_at_end_of_buffer_stops_at_last_row() {
        assert_eq!(reconciled("abcdefghijklmno", 5, 1, 0, 15), 10);
    }

    #[test]
    fn view_end_of_aligned_view_uses_index() {
        let buffer = TextBuffer::new(SIX_LINES);
        let index = RowIndex::build(&buffer, layout(10));
        let mut viewport = Viewport::new(10, 2);
        viewport.set_first_offset(6);
        assert_eq!(view_end(&buffer, &index, &viewport), 12);
    }

    #[test]
    fn misaligned_view_falls_back_to_scanning() {
        // With tab width 8 and wrap 5 the tab sits on its own row, so the
        // rows start at 0, 1, 6; offset 4 is not among them.
        let buffer = TextBuffer::new("\tabcdefghi\n");
        let index = RowIndex::build(&buffer, layout(5));
        assert_eq!(index.position(4), None);

        let mut viewport = Viewport::new(5, 1);
        viewport.set_first_offset(4);
        assert_eq!(view_end(&buffer, &index, &viewport), 9);

        reconcile(&buffer, &index, &mut viewport, Cursor::goto(&buffer, 10));
        assert_eq!(viewport.first_offset(), 9);
    }
}
