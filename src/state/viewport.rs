//! Visible window onto the buffer.

/// The visible area: first displayed offset plus visible dimensions.
///
/// `width` is the whole pane width, gutter columns included; the wrap width
/// is derived from it by [`crate::state::EditorSession::layout`]. `height`
/// counts text rows only (status line excluded).
///
/// # Invariants
/// - `first_offset` is a virtual-line boundary under the current wrap width.
///   On lines with tabs the virtual-line arithmetic and the rendered rows
///   disagree, so this is a row start of the renderer only for tab-free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    first_offset: usize,
    width: usize,
    height: usize,
}

impl Viewport {
    /// Viewport at the start of the buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            first_offset: 0,
            width,
            height,
        }
    }

    /// Offset of the first character of the first visible row.
    pub fn first_offset(&self) -> usize {
        self.first_offset
    }

    /// Move the view so that it starts at `offset`.
    pub fn set_first_offset(&mut self, offset: usize) {
        self.first_offset = offset;
    }

    /// Visible columns, gutter included.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Visible text rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Change the visible dimensions, keeping the first offset.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }
}
