//! Incremental console → text-view synchronisation.
//!
//! Copying the whole store every frame would be O(n) for a mostly
//! append-only log. [`ConsoleTail`] remembers how many lines (and how many
//! evictions) it has seen and copies only the trailing slice that is new
//! since the last pump. A shrink in either counter means the store was
//! cleared, which forces a full rebuild.

use crate::console::Console;
use crate::view_state::text_view::TextViewState;
use crate::view_state::wrap::TextMeasure;

#[cfg(test)]
#[path = "tail_tests.rs"]
mod tests;

/// Tracks how much of a [`Console`] a view has already consumed.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleTail {
    /// Line count at the last pump.
    last_count: usize,
    /// Dropped-lines counter at the last pump.
    last_dropped: usize,
}

impl ConsoleTail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pull new console content into `view`.
    ///
    /// No-op unless the store's dirty hint was set; the hint is consumed.
    /// Returns `true` when lines were applied. When the view is
    /// autoscrolling, applied lines pin it to the bottom.
    pub fn pump<M: TextMeasure>(
        &mut self,
        console: &Console,
        view: &mut TextViewState<M>,
    ) -> bool {
        if !console.take_dirty() {
            return false;
        }
        let (new_count, new_dropped) = console.stats();

        let lines = if new_count < self.last_count || new_dropped < self.last_dropped {
            // The store shrank: it must have been cleared. Rebuild from
            // scratch, keeping the scroll cursor for continuity.
            view.clear(true);
            if new_count == 0 {
                Vec::new()
            } else {
                console.lines_copy(0, new_count - 1)
            }
        } else {
            let appended = new_count - self.last_count;
            let overwritten = (new_dropped - self.last_dropped).min(new_count);
            let to_copy = (appended + overwritten).min(new_count);
            if to_copy == 0 {
                Vec::new()
            } else {
                console.lines_copy(new_count - to_copy, new_count - 1)
            }
        };

        self.last_count = new_count;
        self.last_dropped = new_dropped;

        let changed = !lines.is_empty();
        for line in lines {
            view.add_line(line.text, line.color);
        }
        if changed && view.is_autoscrolling() {
            view.scroll_to_bottom();
        }
        changed
    }
}
