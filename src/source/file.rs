//! File-based console source with optional follow.

use crate::model::error::InputError;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::PathBuf;
use std::time::Duration;

/// How long the follow loop sleeps when no new data is available.
const FOLLOW_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// File source: reads the whole file once, then (in follow mode) keeps
/// polling the tail for appended complete lines, like `tail -f`.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    follow: bool,
    /// Byte offset of the first unread byte.
    offset: u64,
    /// Bytes of a trailing line that has not seen its newline yet.
    partial: Vec<u8>,
    /// Initial read-once pass already served.
    drained: bool,
}

impl FileSource {
    /// Open a file source.
    ///
    /// # Errors
    ///
    /// `InputError::FileNotFound` when the path does not exist.
    pub fn new(path: PathBuf, follow: bool) -> Result<Self, InputError> {
        if !path.exists() {
            return Err(InputError::FileNotFound { path });
        }
        Ok(Self {
            path,
            follow,
            offset: 0,
            partial: Vec::new(),
            drained: false,
        })
    }

    /// Read the next batch of complete lines.
    ///
    /// First call returns the whole current file content. Follow mode then
    /// blocks briefly between polls for appended data; non-follow mode
    /// returns an empty batch at EOF.
    pub fn read_lines(&mut self) -> Result<Vec<String>, InputError> {
        let lines = self.read_new_lines()?;
        if !lines.is_empty() || !self.follow {
            self.drained = true;
            return Ok(lines);
        }
        // Follow mode with nothing new: wait one poll interval, try again,
        // then hand control back so the caller can check for shutdown.
        std::thread::sleep(FOLLOW_POLL_INTERVAL);
        let lines = self.read_new_lines()?;
        self.drained = true;
        Ok(lines)
    }

    /// True while more data may appear.
    pub fn is_live(&self) -> bool {
        self.follow || !self.drained
    }

    /// Read complete lines past the last seen offset.
    ///
    /// A file truncated under us (rotation) restarts from the beginning.
    fn read_new_lines(&mut self) -> Result<Vec<String>, InputError> {
        let mut file = File::open(&self.path)?;
        let file_len = file.metadata()?.len();
        if file_len < self.offset {
            self.offset = 0;
            self.partial.clear();
        }
        file.seek(SeekFrom::Start(self.offset))?;

        let mut reader = BufReader::new(file.take(file_len - self.offset));
        let mut lines = Vec::new();
        let mut chunk = Vec::new();
        loop {
            chunk.clear();
            let read = reader.read_until(b'\n', &mut chunk)?;
            if read == 0 {
                break;
            }
            self.offset += read as u64;
            if chunk.last() == Some(&b'\n') {
                chunk.pop();
                if chunk.last() == Some(&b'\r') {
                    chunk.pop();
                }
                let mut full = std::mem::take(&mut self.partial);
                full.extend_from_slice(&chunk);
                lines.push(String::from_utf8_lossy(&full).into_owned());
            } else {
                // No newline yet: stash and wait for the rest.
                self.partial.extend_from_slice(&chunk);
            }
        }
        Ok(lines)
    }
}
