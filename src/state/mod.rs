//! Viewing state (pure).
//!
//! Cursor, view and search state plus the transitions between them. Nothing
//! here touches the terminal, so every transition is testable without a TUI.

pub mod cursor;
pub mod reconcile;
pub mod scroll_handler;
pub mod search;
pub mod search_input_handler;
pub mod session;
pub mod viewport;

// Re-export for convenience
pub use cursor::Cursor;
pub use reconcile::{reconcile, reconcile_by_scan, view_end};
pub use scroll_handler::{scroll_down, scroll_up};
pub use search::{search_backward, search_forward, SearchDirection, SearchState};
pub use search_input_handler::{Interaction, InteractionOutcome, SearchInput};
pub use session::{EditorSession, RenderedView, SessionOptions};
pub use viewport::Viewport;
