//! Domain-level keyboard actions independent of key bindings.

use crate::state::search::SearchDirection;

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Keystrokes typed into an open search prompt bypass this mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Cursor movement
    /// Move the cursor one character right. Default: l/→
    MoveRight,
    /// Move the cursor one character left. Default: j/←
    MoveLeft,
    /// Move the cursor to the start of the next virtual line. Default: k
    MoveDown,
    /// Move the cursor to the start of the previous virtual line. Default: i
    MoveUp,
    /// Move the cursor to the end of the logical line. Default: L/End
    LineEnd,
    /// Move the cursor to the start of the logical line. Default: J/Home
    LineStart,
    /// Jump to the start of the buffer and reset the view. Default: <
    GotoStart,
    /// Jump to the end of the buffer. Default: >
    GotoEnd,

    // Scrolling
    /// Scroll the view down by one virtual line. Default: ↓
    ScrollDown,
    /// Scroll the view up by one virtual line. Default: ↑
    ScrollUp,
    /// Scroll down by half the view height. Default: Page Down
    PageDown,
    /// Scroll up by half the view height. Default: Page Up
    PageUp,

    // Search
    /// Open an incremental search prompt. Default: ; (forward), : (backward)
    StartSearch(SearchDirection),
    /// Repeat the last committed search. Default: n (forward), N (backward)
    RepeatSearch(SearchDirection),

    // Display
    /// Show or hide the continuation gutter. Default: 0
    ToggleGutter,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether the action scrolls the view rather than moving the cursor.
    pub fn is_scroll(&self) -> bool {
        matches!(
            self,
            KeyAction::ScrollDown | KeyAction::ScrollUp | KeyAction::PageDown | KeyAction::PageUp
        )
    }
}
