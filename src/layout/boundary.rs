//! Logical line boundaries.
//!
//! A logical line runs from the character after a newline up to (not
//! including) the next newline. The newline itself belongs to the line it
//! terminates.

use crate::model::TextBuffer;

/// Offset of the first character of the logical line containing `offset`.
///
/// Looks for the nearest newline strictly before `offset`; returns `0` when
/// there is none. Offsets past the end are clamped.
pub fn line_start(buffer: &TextBuffer, offset: usize) -> usize {
    let offset = offset.min(buffer.len());
    buffer.as_chars()[..offset]
        .iter()
        .rposition(|&c| c == '\n')
        .map_or(0, |i| i + 1)
}

/// Offset of the newline ending the logical line containing `offset`, or
/// `len` for the last line.
pub fn line_end(buffer: &TextBuffer, offset: usize) -> usize {
    let len = buffer.len();
    if offset >= len {
        return len;
    }
    buffer.as_chars()[offset..]
        .iter()
        .position(|&c| c == '\n')
        .map_or(len, |i| offset + i)
}
