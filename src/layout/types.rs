//! Core layout newtypes

/// Number of text columns a row may occupy before it wraps. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WrapWidth(usize);

/// Error returned when attempting to create a WrapWidth of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("wrap width must be >= 1 (got {0})")]
pub struct InvalidWrapWidth(pub usize);

impl WrapWidth {
    /// Smart constructor that validates the width is >= 1.
    pub fn new(width: usize) -> Result<Self, InvalidWrapWidth> {
        if width == 0 {
            Err(InvalidWrapWidth(width))
        } else {
            Ok(Self(width))
        }
    }

    /// Build a wrap width from available columns, keeping at least one column.
    pub fn saturating(width: usize) -> Self {
        Self(width.max(1))
    }

    /// Get the raw column count.
    pub fn get(&self) -> usize {
        self.0
    }
}

/// Distance between tab stops in columns. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TabWidth(usize);

/// Error returned when attempting to create a TabWidth of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("tab width must be >= 1 (got {0})")]
pub struct InvalidTabWidth(pub usize);

impl TabWidth {
    /// Tab stop distance used when nothing else is configured.
    pub const DEFAULT: Self = Self(8);

    /// Smart constructor that validates the width is >= 1.
    pub fn new(width: usize) -> Result<Self, InvalidTabWidth> {
        if width == 0 {
            Err(InvalidTabWidth(width))
        } else {
            Ok(Self(width))
        }
    }

    /// Get the raw column count.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for TabWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parameters that determine how the buffer is cut into rows.
///
/// Two LayoutParams are equal if they would produce identical rows for the
/// same buffer; a change means cached row boundaries are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutParams {
    /// Columns available for text (gutter excluded).
    pub wrap: WrapWidth,
    /// Tab stop distance.
    pub tab: TabWidth,
}

impl LayoutParams {
    /// Create new layout params.
    pub fn new(wrap: WrapWidth, tab: TabWidth) -> Self {
        Self { wrap, tab }
    }
}

/// One wrapped, tab-expanded row of the buffer as drawn on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Raw buffer characters that produced this row, trailing newline included.
    pub consumed: usize,
    /// Whether the row continues a logical line started on an earlier row.
    pub is_continuation: bool,
    /// Display text: trailing newline removed, tabs expanded to spaces.
    pub text: String,
}

/// Side output of a render scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderResult {
    /// Visual column of the tracked offset, if it was reached.
    pub point_col: Option<usize>,
    /// Row (relative to the scan start) of the tracked offset, if it was reached.
    pub point_row: Option<usize>,
    /// Sum of `consumed` over every row produced so far.
    pub total_bytes_rendered: usize,
}

impl RenderResult {
    /// Tracked position as `(col, row)` when both coordinates are known.
    pub fn point(&self) -> Option<(usize, usize)> {
        self.point_col.zip(self.point_row)
    }
}
