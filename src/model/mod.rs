//! Domain model types (pure).

pub mod buffer;
pub mod error;
pub mod key_action;

// Re-export for convenience
pub use buffer::TextBuffer;
pub use error::{AppError, InputError};
pub use key_action::KeyAction;
