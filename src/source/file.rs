//! Loading the buffer from a file.

use crate::model::error::InputError;
use crate::model::TextBuffer;
use std::path::Path;
use tracing::info;

/// Read the whole file at `path` into a buffer.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::Io` for other I/O errors, including invalid UTF-8.
pub fn read_file(path: impl AsRef<Path>) -> Result<TextBuffer, InputError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path)?;
    let buffer = TextBuffer::from(text);
    info!(path = %path.display(), chars = buffer.len(), "loaded file");
    Ok(buffer)
}
