//! Virtual-line navigation within one logical line.
//!
//! The arithmetic here assumes one column per character. Lines containing
//! tabs wrap differently on screen (see [`super::render_iter`]) so these
//! boundaries can drift from the rendered rows on such lines. Cursor and
//! scroll placement depend on this arithmetic as it is.

use super::boundary::{line_end, line_start};
use super::types::WrapWidth;
use crate::model::TextBuffer;

/// Last offset of the virtual line containing `offset`.
///
/// Advances to the wrap column or the logical line end, whichever comes
/// first. Adding one yields the start of the next virtual line.
pub fn next_virtual_boundary(buffer: &TextBuffer, wrap: WrapWidth, offset: usize) -> usize {
    let width = wrap.get();
    let bol = line_start(buffer, offset);
    let eol = line_end(buffer, offset);
    let step = width - (offset - bol) % width;
    eol.min(offset + step - 1)
}

/// Start of the virtual line containing `offset`.
pub fn prev_virtual_boundary(buffer: &TextBuffer, wrap: WrapWidth, offset: usize) -> usize {
    let bol = line_start(buffer, offset);
    offset - (offset - bol) % wrap.get()
}
