//! Tests for the layout scanner.

use super::*;
use crate::layout::types::{TabWidth, WrapWidth};

// ===== Helpers =====

fn layout(wrap: usize, tab: usize) -> LayoutParams {
    LayoutParams::new(WrapWidth::new(wrap).unwrap(), TabWidth::new(tab).unwrap())
}

/// Collect rows as (text, is_continuation, consumed) triples.
fn rows(text: &str, wrap: usize, tab: usize, start: usize) -> Vec<(String, bool, usize)> {
    let buffer = TextBuffer::new(text);
    RenderIter::untracked(&buffer, layout(wrap, tab), start)
        .map(|row| (row.text, row.is_continuation, row.consumed))
        .collect()
}

fn row(text: &str, continuation: bool, consumed: usize) -> (String, bool, usize) {
    (text.to_string(), continuation, consumed)
}

/// Run a full tracked scan and return the final point.
fn point_after_full_scan(text: &str, wrap: usize, tracked: usize) -> Option<(usize, usize)> {
    let buffer = TextBuffer::new(text);
    let mut iter = RenderIter::new(&buffer, layout(wrap, 8), tracked, 0);
    iter.by_ref().for_each(drop);
    iter.result().point()
}

// ===== Wrapping =====

#[test]
fn long_line_wraps_at_width() {
    assert_eq!(
        rows("abcdefghij\n", 5, 8, 0),
        vec![row("abcde", false, 5), row("fghij", true, 5), row("", true, 1)]
    );
}

#[test]
fn newline_ends_row_and_next_row_is_not_continuation() {
    assert_eq!(
        rows("ab\ncd", 10, 8, 0),
        vec![row("ab", false, 3), row("cd", false, 2)]
    );
}

#[test]
fn newline_right_after_full_row_gets_its_own_row() {
    assert_eq!(
        rows("abcde\nf", 5, 8, 0),
        vec![row("abcde", false, 5), row("", true, 1), row("f", false, 1)]
    );
}

#[test]
fn empty_lines_render_as_empty_rows() {
    assert_eq!(
        rows("a\n\nb", 4, 8, 0),
        vec![row("a", false, 2), row("", false, 1), row("b", false, 1)]
    );
}

#[test]
fn empty_buffer_yields_no_rows() {
    assert!(rows("", 5, 8, 0).is_empty());
}

#[test]
fn scan_starting_at_end_yields_no_rows() {
    assert!(rows("abc", 5, 8, 3).is_empty());
}

// ===== Tabs =====

#[test]
fn tabs_expand_to_tab_stops() {
    assert_eq!(rows("a\tb", 10, 4, 0), vec![row("a   b", false, 3)]);
}

#[test]
fn tab_correction_shrinks_row_to_fit() {
    assert_eq!(
        rows("\t\tx", 10, 8, 0),
        vec![row("        ", false, 1), row("        x", true, 2)]
    );
}

#[test]
fn tab_wider_than_wrap_still_makes_progress() {
    assert_eq!(
        rows("\tab", 4, 8, 0),
        vec![row("        ", false, 1), row("ab", true, 2)]
    );
}

#[test]
fn tab_correction_can_push_newline_to_next_row() {
    assert_eq!(
        rows("\tab\n", 10, 8, 0),
        vec![row("        ab", false, 3), row("", false, 1)]
    );
}

#[test]
fn newline_pushed_by_tab_correction_still_ends_the_line() {
    assert_eq!(
        rows("\tab\nX", 10, 8, 0),
        vec![
            row("        ab", false, 3),
            row("", false, 1),
            row("X", false, 1),
        ]
    );
}

// ===== Continuation lookbehind =====

#[test]
fn first_row_mid_wrapped_line_is_continuation() {
    assert_eq!(rows("abcdefghij", 5, 8, 5), vec![row("fghij", true, 5)]);
}

#[test]
fn first_row_after_recent_newline_is_not_continuation() {
    assert_eq!(rows("abcdef\nghijkl", 5, 8, 7)[0], row("ghijk", false, 5));
}

#[test]
fn first_row_near_buffer_start_is_not_continuation() {
    assert_eq!(rows("ab\ncdef", 5, 8, 3), vec![row("cdef", false, 4)]);
}

// ===== Point tracking =====

#[test]
fn tracks_point_on_second_line() {
    assert_eq!(point_after_full_scan("hello\nworld", 10, 8), Some((2, 1)));
}

#[test]
fn point_at_row_boundary_belongs_to_later_row() {
    assert_eq!(point_after_full_scan("hello\nworld", 10, 6), Some((0, 1)));
}

#[test]
fn point_at_row_boundary_sticks_to_end_of_row_when_scan_stops() {
    let buffer = TextBuffer::new("hello\nworld");
    let mut iter = RenderIter::new(&buffer, layout(10, 8), 6, 0);
    iter.next();
    assert_eq!(iter.result().point(), Some((6, 0)));
}

#[test]
fn point_column_accounts_for_tabs() {
    assert_eq!(point_after_full_scan("\tab", 20, 2), Some((9, 0)));
}

#[test]
fn point_at_end_after_trailing_newline_sits_on_empty_line() {
    assert_eq!(point_after_full_scan("ab\ncd\n", 10, 6), Some((0, 2)));
}

#[test]
fn point_at_end_without_trailing_newline_follows_last_char() {
    assert_eq!(point_after_full_scan("ab\ncd", 10, 5), Some((2, 1)));
}

#[test]
fn point_outside_scanned_range_is_not_reported() {
    let buffer = TextBuffer::new("abcdefghij");
    let mut iter = RenderIter::new(&buffer, layout(5, 8), 9, 0);
    iter.next();
    assert_eq!(iter.result().point(), None);
}

#[test]
fn point_relative_to_scan_start() {
    let buffer = TextBuffer::new("abcdefghijklmno");
    let mut iter = RenderIter::new(&buffer, layout(5, 8), 12, 5);
    iter.by_ref().for_each(drop);
    assert_eq!(iter.result().point(), Some((2, 1)));
}

// ===== Bookkeeping =====

#[test]
fn total_bytes_rendered_accumulates_consumed() {
    let buffer = TextBuffer::new("abcdefghijklmno");
    let mut iter = RenderIter::untracked(&buffer, layout(5, 8), 0);
    iter.by_ref().take(2).for_each(drop);
    assert_eq!(iter.result().total_bytes_rendered, 10);
    assert_eq!(iter.position(), 10);
}

#[test]
fn fresh_iterator_restarts_scan() {
    let buffer = TextBuffer::new("one\ntwo\n");
    let first: Vec<_> = RenderIter::untracked(&buffer, layout(8, 8), 0).collect();
    let second: Vec<_> = RenderIter::untracked(&buffer, layout(8, 8), 0).collect();
    assert_eq!(first, second);
}
