//! Input sources.
//!
//! The buffer is read once at startup, either from a file or from piped
//! stdin, and never changes afterwards.

use crate::model::error::InputError;
use crate::model::TextBuffer;
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::read_file;
pub use stdin::{read_from, read_stdin};

/// Load the buffer from the appropriate source.
///
/// # Logic:
/// 1. If a file path is provided: read the file
/// 2. Else if stdin is piped: read all of stdin
/// 3. Else: `InputError::NoInput`
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist,
/// `InputError::NoInput` if there is neither a file nor piped stdin, and
/// `InputError::Io` for read failures.
pub fn load(file: Option<PathBuf>) -> Result<TextBuffer, InputError> {
    match file {
        Some(path) => read_file(path),
        None => read_stdin(),
    }
}
