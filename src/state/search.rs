//! Plain substring search.
//!
//! Search works on the raw buffer and knows nothing about layout. The
//! incremental flow is:
//!
//! 1. [`SearchState::begin`] remembers the cursor and view to restore later
//! 2. each keystroke calls [`SearchState::update`], which searches again from
//!    the remembered cursor, moving the cursor on success and restoring the
//!    saved position on failure
//! 3. [`SearchState::commit`] stores the pattern for [`SearchState::repeat`],
//!    or [`SearchState::cancel`] restores the saved position
//!
//! A match at offset 0 is reported as no match. Searching for a pattern that
//! only occurs at the very start of the buffer therefore fails.

use crate::model::TextBuffer;
use crate::state::{Cursor, Viewport};
use tracing::debug;

// ===== SearchDirection =====

/// Search direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchDirection {
    /// Towards the end of the buffer.
    Forward,
    /// Towards the start of the buffer.
    Backward,
}

impl SearchDirection {
    /// Prompt shown while typing a search in this direction.
    pub fn prompt(&self) -> &'static str {
        match self {
            SearchDirection::Forward => "search → ",
            SearchDirection::Backward => "search ← ",
        }
    }
}

// ===== Search Execution =====

/// First occurrence of `pattern` starting at or after `from`.
pub fn search_forward(buffer: &TextBuffer, from: usize, pattern: &str) -> Option<usize> {
    let text = buffer.as_chars();
    let pattern: Vec<char> = pattern.chars().collect();
    let last = text.len().checked_sub(pattern.len())?;
    if from > last {
        return None;
    }
    (from..=last)
        .find(|&i| text[i..i + pattern.len()] == pattern[..])
        .filter(|&i| i > 0)
}

/// Last occurrence of `pattern` ending at or before `from + pattern.len()`.
pub fn search_backward(buffer: &TextBuffer, from: usize, pattern: &str) -> Option<usize> {
    let text = buffer.as_chars();
    let pattern: Vec<char> = pattern.chars().collect();
    let end = from.saturating_add(pattern.len()).min(text.len());
    let last = end.checked_sub(pattern.len())?;
    (0..=last)
        .rev()
        .find(|&i| text[i..i + pattern.len()] == pattern[..])
        .filter(|&i| i > 0)
}

/// Search in `direction` from `from`.
pub fn search(
    buffer: &TextBuffer,
    direction: SearchDirection,
    from: usize,
    pattern: &str,
) -> Option<usize> {
    match direction {
        SearchDirection::Forward => search_forward(buffer, from, pattern),
        SearchDirection::Backward => search_backward(buffer, from, pattern),
    }
}

// ===== SearchState =====

/// Cursor and view captured when a search prompt opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedPosition {
    /// Cursor before the search started.
    pub cursor: Cursor,
    /// First visible offset before the search started.
    pub viewport_offset: usize,
}

/// The last committed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastMatch {
    /// Offset the cursor was left at.
    pub offset: usize,
    /// Pattern that was searched for.
    pub pattern: String,
}

/// Search memory of a session.
///
/// `saved_position` lives for one prompt (begin → commit/cancel);
/// `last_match` survives across prompts so searches can be repeated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    saved_position: Option<SavedPosition>,
    last_match: Option<LastMatch>,
}

impl SearchState {
    /// Position that will be restored on cancel or failed search.
    pub fn saved_position(&self) -> Option<SavedPosition> {
        self.saved_position
    }

    /// Last committed search, if any.
    pub fn last_match(&self) -> Option<&LastMatch> {
        self.last_match.as_ref()
    }

    /// Remember the current cursor and view.
    pub fn begin(&mut self, cursor: Cursor, viewport: &Viewport) {
        self.saved_position = Some(SavedPosition {
            cursor,
            viewport_offset: viewport.first_offset(),
        });
    }

    /// Search again for the whole `pattern` from the saved cursor.
    ///
    /// No-op when no search is in progress.
    pub fn update(
        &self,
        buffer: &TextBuffer,
        direction: SearchDirection,
        pattern: &str,
        cursor: &mut Cursor,
        viewport: &mut Viewport,
    ) {
        let Some(saved) = self.saved_position else {
            return;
        };
        match search(buffer, direction, saved.cursor.offset(), pattern) {
            Some(found) => *cursor = Cursor::goto(buffer, found),
            None => restore(saved, cursor, viewport),
        }
    }

    /// Finish the prompt, keeping the cursor where the search left it.
    ///
    /// A non-empty pattern becomes the last match for repeat searches.
    pub fn commit(&mut self, cursor: Cursor, pattern: &str) {
        self.saved_position = None;
        if !pattern.is_empty() {
            debug!(offset = cursor.offset(), pattern, "search committed");
            self.last_match = Some(LastMatch {
                offset: cursor.offset(),
                pattern: pattern.to_string(),
            });
        }
    }

    /// Finish the prompt, restoring the cursor and view saved by `begin`.
    pub fn cancel(&mut self, cursor: &mut Cursor, viewport: &mut Viewport) {
        if let Some(saved) = self.saved_position.take() {
            restore(saved, cursor, viewport);
        }
    }

    /// Repeat the last committed search.
    ///
    /// Starts one character past (or before) the last match when the cursor
    /// is still on it, otherwise from the cursor. Returns whether a match was
    /// found; on failure the cursor is unchanged.
    pub fn repeat(
        &mut self,
        buffer: &TextBuffer,
        direction: SearchDirection,
        cursor: &mut Cursor,
    ) -> bool {
        let Some(last) = self.last_match.as_mut() else {
            return false;
        };
        let on_last_match = cursor.offset() == last.offset;
        let from = match (direction, on_last_match) {
            (SearchDirection::Forward, true) => last.offset + 1,
            (SearchDirection::Backward, true) => last.offset.saturating_sub(1),
            (_, false) => cursor.offset(),
        };
        match search(buffer, direction, from, &last.pattern) {
            Some(found) => {
                *cursor = Cursor::goto(buffer, found);
                last.offset = found;
                true
            }
            None => false,
        }
    }
}

fn restore(saved: SavedPosition, cursor: &mut Cursor, viewport: &mut Viewport) {
    *cursor = saved.cursor;
    viewport.set_first_offset(saved.viewport_offset);
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
