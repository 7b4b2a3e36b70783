//! Console input sources.
//!
//! The viewer feeds its console from exactly one source:
//! - a file, read once (optionally followed for appended content),
//! - or piped stdin, read until EOF.
//!
//! A dedicated producer thread drains the source into the console store,
//! which is the actual cross-thread boundary the store's mutex exists for.

use crate::console::Console;
use crate::model::error::InputError;
use crate::model::ConsoleLine;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::{debug, error, info};

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Unified input source. Sum type: exactly one backend.
#[derive(Debug)]
pub enum InputSource {
    /// File source, read-once with optional follow.
    File(FileSource),
    /// Piped stdin, read until EOF.
    Stdin(StdinSource<std::io::Stdin>),
}

impl InputSource {
    /// Read the next batch of complete lines, blocking until data arrives
    /// or the source ends.
    ///
    /// An empty vector means the source is exhausted (EOF without follow).
    pub fn read_lines(&mut self) -> Result<Vec<String>, InputError> {
        match self {
            InputSource::File(f) => f.read_lines(),
            InputSource::Stdin(s) => s.read_lines(),
        }
    }

    /// True while the source may still produce data.
    pub fn is_live(&self) -> bool {
        match self {
            InputSource::File(f) => f.is_live(),
            InputSource::Stdin(s) => !s.is_complete(),
        }
    }
}

/// Detect and create the input source.
///
/// A file path wins when given; otherwise piped stdin is used.
///
/// # Errors
///
/// `InputError::FileNotFound` for a missing file, `InputError::NoInput`
/// when no file is given and stdin is an interactive terminal.
pub fn detect_input_source(
    file: Option<PathBuf>,
    follow: bool,
) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path, follow)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}

/// Handle to a running feed thread.
#[derive(Debug)]
pub struct FeedHandle {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl FeedHandle {
    /// Ask the feed to stop, reaping the thread when it already finished.
    ///
    /// A reader blocked on stdin cannot be interrupted; that thread stays
    /// detached and exits with the process.
    pub fn shutdown(self) {
        self.stop.store(true, Ordering::Release);
        if self.handle.is_finished() && self.handle.join().is_err() {
            error!("console feed thread panicked");
        }
    }
}

/// Drain `source` into `console` on a dedicated thread.
///
/// Each line is colored by the severity heuristic. The thread exits when
/// the source is exhausted or the handle is shut down.
pub fn spawn_feed(mut source: InputSource, console: Arc<Console>) -> FeedHandle {
    let stop = Arc::new(AtomicBool::new(false));
    let thread_stop = Arc::clone(&stop);
    let handle = std::thread::spawn(move || {
        info!("console feed started");
        loop {
            if thread_stop.load(Ordering::Acquire) {
                break;
            }
            match source.read_lines() {
                Ok(lines) => {
                    if lines.is_empty() && !source.is_live() {
                        debug!("console feed source exhausted");
                        break;
                    }
                    for text in lines {
                        let line = ConsoleLine::classified(text);
                        console.add_line(line.text, line.color);
                    }
                }
                Err(err) => {
                    error!(%err, "console feed stopped on read error");
                    break;
                }
            }
        }
    });
    FeedHandle { stop, handle }
}
