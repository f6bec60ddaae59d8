//! Error types for the med application.
//!
//! This module defines the error taxonomy of the impure shell using `thiserror`.
//! The layout and navigation core never fails: offsets are clamped and boundary
//! moves are no-ops. Only loading input, reading configuration, initializing
//! logging and driving the terminal can go wrong.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all failures
//!   - [`InputError`] - File/stdin reading failures (file not found, no input, IO)
//!   - [`ConfigError`] - Config file read or TOML parse failures
//!   - [`LoggingError`] - Tracing subscriber initialization failures
//!   - [`TuiError`] - Terminal/TUI rendering failures

use crate::config::loader::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All domain-specific error types convert into `AppError` via `From`, so
/// `main` can propagate everything with `?`.
///
/// # Examples
///
/// ```no_run
/// use med::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _input = read_text()?;
///     Ok(())
/// }
/// # fn read_text() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the text to view. Fatal: there is nothing to show.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Configuration file exists but is unreadable or invalid.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Log file could not be set up.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Raised by the crossterm/ratatui layer (raw mode, alternate screen,
    /// draw calls). Fatal: the terminal is restored and the process exits.
    #[error("Terminal error: {0}")]
    Terminal(#[from] TuiError),
}

/// Errors encountered when reading the buffer from a file or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use med::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.txt")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.txt"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No file argument was given and stdin is an interactive terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use med::model::error::InputError;
    ///
    /// let msg = InputError::NoInput.to_string();
    /// assert!(msg.contains("file path or pipe data to stdin"));
    /// ```
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error (permissions, invalid UTF-8, broken pipe).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_converts_to_app_error() {
        let app_err: AppError = InputError::NoInput.into();
        assert!(matches!(app_err, AppError::InputRead(InputError::NoInput)));
    }

    #[test]
    fn io_error_converts_to_input_error() {
        let io_err = std::io::Error::other("disk on fire");
        let input_err: InputError = io_err.into();
        assert!(matches!(input_err, InputError::Io(_)));
        assert!(input_err.to_string().contains("disk on fire"));
    }

    #[test]
    fn terminal_error_message_wraps_source() {
        let tui_err: TuiError = std::io::Error::other("broken pipe").into();
        let app_err: AppError = tui_err.into();
        assert_eq!(
            app_err.to_string(),
            "Terminal error: Terminal IO error: broken pipe"
        );
    }

    #[test]
    fn config_error_converts_to_app_error() {
        let config_err = ConfigError::InvalidPath("bad".to_string());
        let app_err: AppError = config_err.into();
        assert!(matches!(app_err, AppError::Config(_)));
    }
}
