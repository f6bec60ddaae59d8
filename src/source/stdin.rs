//! Loading the buffer from piped stdin.

use crate::model::error::InputError;
use crate::model::TextBuffer;
use std::io::{IsTerminal, Read};
use tracing::info;

/// Read all of stdin into a buffer.
///
/// # Errors
///
/// Returns `InputError::NoInput` if stdin is a TTY (interactive terminal).
/// Reading it would block until the user typed EOF, which is never what
/// someone who forgot to pipe data wants.
pub fn read_stdin() -> Result<TextBuffer, InputError> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(InputError::NoInput);
    }
    read_from(stdin.lock())
}

/// Read everything from `reader` into a buffer.
///
/// # Errors
///
/// Returns `InputError::Io` for read errors and invalid UTF-8.
pub fn read_from<R: Read>(mut reader: R) -> Result<TextBuffer, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let buffer = TextBuffer::from(text);
    info!(chars = buffer.len(), "loaded stdin");
    Ok(buffer)
}
