//! Error types for devcon.
//!
//! A hierarchical taxonomy built on `thiserror`: domain-specific errors
//! compose into [`AppError`] via `From`, so the `?` operator carries them to
//! the top of the binary without manual mapping.
//!
//! Recovery policy mirrors how the pieces are used:
//! - [`BufferError`] marks caller bugs (out-of-range access). Call sites
//!   that have already validated an index use the panicking `Index` impl
//!   instead; everything else handles the error.
//! - [`InputError`] is fatal at startup (no input to show) but non-fatal
//!   while tailing: the producer thread logs it and stops feeding.
//! - Terminal I/O errors are fatal; the event loop restores the terminal
//!   and propagates them.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error for the `devcon` binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read input from file or stdin.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error. Fatal: without a working terminal
    /// the viewer cannot run.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Bounds violations on [`crate::buffer::CircularBuffer`].
///
/// Out-of-range access is a programming error in the caller, surfaced as a
/// typed error rather than the debug-assert the buffer's ancestors used, so
/// library consumers get a recoverable path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Index is outside the buffer's current logical range.
    #[error("index {index} out of range for buffer of length {len}")]
    IndexOutOfRange {
        /// The logical index that was requested.
        index: usize,
        /// The buffer length at the time of the call.
        len: usize,
    },
}

/// Errors reading console input from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The given log file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that failed to open.
        path: PathBuf,
    },

    /// Invoked with no file argument and stdin attached to a terminal, so
    /// there is nothing to display.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O failure while reading (permissions, disk errors, broken
    /// pipes).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn buffer_error_names_index_and_len() {
        let err = BufferError::IndexOutOfRange { index: 9, len: 3 };
        let msg = err.to_string();
        assert!(msg.contains('9'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn input_error_file_not_found_shows_path() {
        let err = InputError::FileNotFound {
            path: PathBuf::from("/tmp/missing.log"),
        };
        assert!(err.to_string().contains("/tmp/missing.log"));
    }

    #[test]
    fn input_error_io_converts() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: InputError = io_err.into();
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn app_error_wraps_input_error() {
        let err: AppError = InputError::NoInput.into();
        let msg = err.to_string();
        assert!(msg.contains("Failed to read input"));
        assert!(msg.contains("No input source"));
    }

    #[test]
    fn app_error_wraps_terminal_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let err: AppError = io_err.into();
        assert!(err.to_string().contains("Terminal error"));
    }
}
