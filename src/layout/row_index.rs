//! Bidirectional index of row boundaries.
//!
//! [`RenderIter`] only scans forward. Questions like "which row starts before
//! offset X" or "where does the view end after N rows" would otherwise need a
//! rescan from the start of the logical line. The index records every row
//! start of a full scan from offset 0 once, then answers those questions by
//! binary search.
//!
//! Row boundaries do not depend on where a scan starts, as long as it starts
//! on a row boundary: a scan from any logical-line start reproduces exactly the
//! rows of a scan from 0. The index is therefore valid for every scan that
//! begins at one of its row starts.

use super::render_iter::RenderIter;
use super::types::LayoutParams;
use crate::model::TextBuffer;

/// Sorted row starts of the whole buffer under one [`LayoutParams`].
///
/// # Invariants
/// - `starts` is strictly increasing and begins with 0 for a non-empty buffer
/// - consecutive starts differ by the `consumed` of the row between them
/// - the last row ends at `buffer_len`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIndex {
    starts: Vec<usize>,
    buffer_len: usize,
    layout: LayoutParams,
}

impl RowIndex {
    /// Scan the whole buffer and record every row start.
    pub fn build(buffer: &TextBuffer, layout: LayoutParams) -> Self {
        let mut starts = Vec::new();
        let mut offset = 0;
        for row in RenderIter::untracked(buffer, layout, 0) {
            starts.push(offset);
            offset += row.consumed;
        }
        Self {
            starts,
            buffer_len: buffer.len(),
            layout,
        }
    }

    /// Layout the index was built for.
    pub fn layout(&self) -> LayoutParams {
        self.layout
    }

    /// Total number of rows.
    pub fn row_count(&self) -> usize {
        self.starts.len()
    }

    /// Start offset of `row`.
    pub fn row_start(&self, row: usize) -> Option<usize> {
        self.starts.get(row).copied()
    }

    /// Row number if `offset` is exactly a row start.
    pub fn position(&self, offset: usize) -> Option<usize> {
        self.starts.binary_search(&offset).ok()
    }

    /// Row containing `offset`; offsets at the end of the buffer belong to the last row.
    pub fn row_of(&self, offset: usize) -> Option<usize> {
        self.starts
            .partition_point(|&start| start <= offset)
            .checked_sub(1)
    }

    /// Start of the row containing `offset`, or 0 for an empty buffer.
    pub fn row_start_at_or_before(&self, offset: usize) -> usize {
        self.row_of(offset)
            .and_then(|row| self.row_start(row))
            .unwrap_or(0)
    }

    /// Offset just past `count` rows beginning at `first_row`.
    ///
    /// Runs off the end of the buffer gracefully: the result never exceeds
    /// the buffer length.
    pub fn end_of_rows(&self, first_row: usize, count: usize) -> usize {
        self.starts
            .get(first_row.saturating_add(count))
            .copied()
            .unwrap_or(self.buffer_len)
    }

    /// Number of rows whose start lies in `from..=to`.
    pub fn rows_starting_in(&self, from: usize, to: usize) -> usize {
        if from > to {
            return 0;
        }
        let lo = self.starts.partition_point(|&start| start < from);
        let hi = self.starts.partition_point(|&start| start <= to);
        hi - lo
    }
}
