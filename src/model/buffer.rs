//! Immutable text buffer addressed by character offset.

use std::fmt;
use std::ops::Range;

/// The text being viewed.
///
/// A flat, read-only sequence of characters. Offsets are zero-based and
/// range over `0..=len()`; `len()` itself is the valid "end of buffer"
/// position. Newline (`\n`) is the only logical line delimiter and tab
/// (`\t`) the only width-affecting control character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    chars: Vec<char>,
}

impl TextBuffer {
    /// Create a buffer from text.
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// All characters of the buffer.
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Characters in `range`, clamped to the buffer.
    pub fn slice(&self, range: Range<usize>) -> &[char] {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        &self.chars[start..end]
    }

    /// Character at `offset`, if any.
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    /// Whether the last character is a newline.
    ///
    /// A buffer ending in a newline has an implicit empty final line on
    /// which the cursor can rest.
    pub fn ends_with_newline(&self) -> bool {
        self.chars.last() == Some(&'\n')
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
