//! Cursor (point) movement.
//!
//! Every movement takes the buffer and returns a new cursor; nothing is
//! mutated in place and there is no hidden state. Moves at the edges of the
//! buffer are no-ops rather than errors.

use crate::layout::{
    line_end, line_start, next_virtual_boundary, prev_virtual_boundary, WrapWidth,
};
use crate::model::TextBuffer;

/// A linear offset into the buffer.
///
/// # Invariants
/// - `0 <= offset <= buffer.len()` for the buffer it was produced from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cursor {
    offset: usize,
}

impl Cursor {
    /// Cursor at `pos`, clamped into `0..=buffer.len()`.
    pub fn goto(buffer: &TextBuffer, pos: usize) -> Self {
        Self {
            offset: pos.min(buffer.len()),
        }
    }

    /// Get the raw offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// One character right, stopping at the end of the buffer.
    pub fn move_right(self, buffer: &TextBuffer) -> Self {
        if buffer.is_empty() || self.offset >= buffer.len() {
            return self;
        }
        Self {
            offset: self.offset + 1,
        }
    }

    /// One character left, stopping at 0.
    pub fn move_left(self) -> Self {
        Self {
            offset: self.offset.saturating_sub(1),
        }
    }

    /// End of the logical line.
    pub fn move_line_end(self, buffer: &TextBuffer) -> Self {
        Self {
            offset: line_end(buffer, self.offset),
        }
    }

    /// Start of the logical line.
    pub fn move_line_start(self, buffer: &TextBuffer) -> Self {
        Self {
            offset: line_start(buffer, self.offset),
        }
    }

    /// Start of the next virtual line.
    ///
    /// Does nothing on the last virtual line, so the cursor never moves onto
    /// the end-of-buffer position this way.
    pub fn move_down(self, buffer: &TextBuffer, wrap: WrapWidth) -> Self {
        let next = next_virtual_boundary(buffer, wrap, self.offset) + 1;
        if next < buffer.len() {
            Self { offset: next }
        } else {
            self
        }
    }

    /// Start of the previous virtual line.
    ///
    /// Does nothing on the first virtual line of the buffer.
    pub fn move_up(self, buffer: &TextBuffer, wrap: WrapWidth) -> Self {
        let line_start = prev_virtual_boundary(buffer, wrap, self.offset);
        if line_start == 0 {
            return self;
        }
        Self {
            offset: prev_virtual_boundary(buffer, wrap, line_start - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(width: usize) -> WrapWidth {
        WrapWidth::new(width).unwrap()
    }

    fn at(buffer: &TextBuffer, pos: usize) -> Cursor {
        Cursor::goto(buffer, pos)
    }

    // ===== Horizontal =====

    #[test]
    fn move_right_stops_at_end() {
        let b = TextBuffer::new("ab");
        assert_eq!(at(&b, 1).move_right(&b).offset(), 2);
        assert_eq!(at(&b, 2).move_right(&b).offset(), 2);
    }

    #[test]
    fn move_right_on_empty_buffer_is_noop() {
        let b = TextBuffer::default();
        assert_eq!(Cursor::default().move_right(&b).offset(), 0);
    }

    #[test]
    fn move_left_stops_at_zero() {
        let b = TextBuffer::new("ab");
        assert_eq!(at(&b, 1).move_left().offset(), 0);
        assert_eq!(at(&b, 0).move_left().offset(), 0);
    }

    #[test]
    fn line_start_and_end_jump_within_logical_line() {
        let b = TextBuffer::new("one\ntwo three\nfour");
        assert_eq!(at(&b, 7).move_line_start(&b).offset(), 4);
        assert_eq!(at(&b, 7).move_line_end(&b).offset(), 13);
        assert_eq!(at(&b, 16).move_line_end(&b).offset(), 18);
    }

    // ===== Vertical =====

    #[test]
    fn move_down_goes_to_next_virtual_line() {
        let b = TextBuffer::new("abcdefghij\nxyz");
        assert_eq!(at(&b, 2).move_down(&b, wrap(5)).offset(), 5);
        assert_eq!(at(&b, 5).move_down(&b, wrap(5)).offset(), 10);
        assert_eq!(at(&b, 10).move_down(&b, wrap(5)).offset(), 11);
    }

    #[test]
    fn move_down_on_last_virtual_line_is_noop() {
        let b = TextBuffer::new("abcdefghij\nxyz");
        assert_eq!(at(&b, 12).move_down(&b, wrap(5)).offset(), 12);
    }

    #[test]
    fn move_up_goes_to_previous_virtual_line_start() {
        let b = TextBuffer::new("abcdefghij\nxyz");
        assert_eq!(at(&b, 12).move_up(&b, wrap(5)).offset(), 10);
        assert_eq!(at(&b, 7).move_up(&b, wrap(5)).offset(), 0);
    }

    #[test]
    fn move_up_from_line_start_lands_on_last_row_of_previous_line() {
        let b = TextBuffer::new("abcdefg\nxyz");
        assert_eq!(at(&b, 8).move_up(&b, wrap(5)).offset(), 5);
    }

    #[test]
    fn move_up_on_first_virtual_line_is_noop() {
        let b = TextBuffer::new("abcdefghij");
        assert_eq!(at(&b, 3).move_up(&b, wrap(5)).offset(), 3);
    }

    // ===== Jumps =====

    #[test]
    fn goto_clamps_to_buffer() {
        let b = TextBuffer::new("abc");
        assert_eq!(Cursor::goto(&b, 2).offset(), 2);
        assert_eq!(Cursor::goto(&b, 3).offset(), 3);
        assert_eq!(Cursor::goto(&b, 99).offset(), 3);
    }
}
