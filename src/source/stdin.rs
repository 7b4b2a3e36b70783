//! Piped stdin console source.

use crate::model::error::InputError;
use std::io::{BufRead, BufReader, IsTerminal, Read};

/// Stdin source for piped input, read until EOF.
///
/// Construction rejects an interactive terminal; a TTY stdin is the UI,
/// not a data source. Generic over the reader so tests can substitute
/// byte slices.
#[derive(Debug)]
pub struct StdinSource<R: Read> {
    reader: BufReader<R>,
    complete: bool,
}

impl StdinSource<std::io::Stdin> {
    /// Create a source over the process's stdin.
    ///
    /// # Errors
    ///
    /// `InputError::NoInput` when stdin is a TTY.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self {
            reader: BufReader::new(stdin),
            complete: false,
        })
    }
}

impl<R: Read> StdinSource<R> {
    /// Create a source over any reader (tests).
    #[cfg(test)]
    fn from_reader(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            complete: false,
        }
    }

    /// Read the next line, blocking until one arrives.
    ///
    /// Returns an empty batch at EOF and flips the completion flag; a final
    /// unterminated line is still delivered.
    pub fn read_lines(&mut self) -> Result<Vec<String>, InputError> {
        if self.complete {
            return Ok(Vec::new());
        }
        let mut raw = Vec::new();
        let read = self.reader.read_until(b'\n', &mut raw)?;
        if read == 0 {
            self.complete = true;
            return Ok(Vec::new());
        }
        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        } else {
            // No trailing newline: that was the last line.
            self.complete = true;
        }
        Ok(vec![String::from_utf8_lossy(&raw).into_owned()])
    }

    /// True once EOF has been reached.
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines_in_order() {
        let data = b"line1\nline2\nline3\n";
        let mut source = StdinSource::from_reader(&data[..]);

        assert_eq!(source.read_lines().unwrap(), ["line1"]);
        assert_eq!(source.read_lines().unwrap(), ["line2"]);
        assert_eq!(source.read_lines().unwrap(), ["line3"]);
        assert!(source.read_lines().unwrap().is_empty());
        assert!(source.is_complete());
    }

    #[test]
    fn empty_input_completes_immediately() {
        let mut source = StdinSource::from_reader(&b""[..]);
        assert!(source.read_lines().unwrap().is_empty());
        assert!(source.is_complete());
    }

    #[test]
    fn unterminated_final_line_is_delivered() {
        let data = b"done\nalmost";
        let mut source = StdinSource::from_reader(&data[..]);

        assert_eq!(source.read_lines().unwrap(), ["done"]);
        assert_eq!(source.read_lines().unwrap(), ["almost"]);
        assert!(source.is_complete());
    }

    #[test]
    fn crlf_is_stripped() {
        let data = b"windows\r\n";
        let mut source = StdinSource::from_reader(&data[..]);
        assert_eq!(source.read_lines().unwrap(), ["windows"]);
    }
}
