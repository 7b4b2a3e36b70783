//! Thread-safe console line store.
//!
//! [`Console`] is an append-only log of display lines with bounded memory:
//! a mutex-guarded [`CircularBuffer`] plus an eviction counter. Producers
//! (log layers, tail threads, command handlers) append from any thread; a
//! single renderer snapshots ranges out under the lock and draws without
//! holding it.

pub mod commands;

pub use commands::CommandRegistry;

use crate::buffer::CircularBuffer;
use crate::model::ConsoleLine;
use ratatui::style::Color;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;

/// Default maximum number of retained lines.
pub const DEFAULT_MAX_LINES: usize = 1024;

/// Lines plus eviction accounting, guarded together by one mutex.
#[derive(Debug)]
struct Scrollback {
    lines: CircularBuffer<ConsoleLine>,
    /// Total lines evicted since the last clear. Monotonic between clears.
    dropped: usize,
}

/// Thread-synchronized console line store.
///
/// All mutating and size-reading operations take the same mutex; lock hold
/// times are O(range length) for snapshots and O(1) amortized for appends.
/// The dirty flag is an atomic read-mostly hint for the renderer, kept
/// outside the lock on purpose.
#[derive(Debug)]
pub struct Console {
    inner: Mutex<Scrollback>,
    dirty: AtomicBool,
}

impl Console {
    /// Create a console retaining at most `max_lines` lines.
    pub fn new(max_lines: usize) -> Self {
        Self {
            inner: Mutex::new(Scrollback {
                lines: CircularBuffer::new(max_lines),
                dropped: 0,
            }),
            dirty: AtomicBool::new(false),
        }
    }

    /// Append a line. Evicts the oldest line when at capacity and counts
    /// the eviction. Marks the store dirty.
    pub fn add_line(&self, text: impl Into<String>, color: Color) {
        {
            let mut inner = self.lock();
            if inner.lines.push_back(ConsoleLine::new(text, color)) {
                inner.dropped += 1;
            }
        }
        self.dirty.store(true, Ordering::Release);
    }

    /// Snapshot the inclusive line range `[first, last]`.
    ///
    /// Returns an empty vector when `first > last` or the store is empty;
    /// `last` is clamped to the newest line. Copying out keeps the lock
    /// out of the render path.
    pub fn lines_copy(&self, first: usize, last: usize) -> Vec<ConsoleLine> {
        let inner = self.lock();
        let len = inner.lines.len();
        if len == 0 || first > last || first >= len {
            return Vec::new();
        }
        let last = last.min(len - 1);
        (first..=last)
            .map(|index| inner.lines[index].clone())
            .collect()
    }

    /// Number of retained lines.
    pub fn line_count(&self) -> usize {
        self.lock().lines.len()
    }

    /// Lines evicted since the last clear.
    pub fn dropped_count(&self) -> usize {
        self.lock().dropped
    }

    /// `(line_count, dropped_count)` under a single lock acquisition, so
    /// the pair is mutually consistent for incremental consumers.
    pub fn stats(&self) -> (usize, usize) {
        let inner = self.lock();
        (inner.lines.len(), inner.dropped)
    }

    /// Drop all lines and reset the eviction counter. Marks dirty so
    /// consumers rebuild.
    pub fn clear(&self) {
        {
            let mut inner = self.lock();
            inner.lines.clear();
            inner.dropped = 0;
        }
        self.dirty.store(true, Ordering::Release);
    }

    /// Raise the retention limit without touching current contents.
    pub fn raise_max_lines(&self, extra: usize) {
        self.lock().lines.raise_max_len(extra);
    }

    /// Consume the dirty hint. Returns `true` at most once per marking.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::Acquire)
    }

    /// Peek at the dirty hint without consuming it.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Re-arm the dirty hint.
    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// The store holds only plain values, so a panic mid-update cannot
    /// tear an invariant; recover the guard from a poisoned lock.
    fn lock(&self) -> MutexGuard<'_, Scrollback> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINES)
    }
}
