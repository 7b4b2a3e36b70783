//! Windowed scrollback model: scrolling, selection, substring search.
//!
//! `TextViewState` maps a bounded scrollback buffer onto a fixed-height
//! viewport. It owns its own copy of the lines (fed by
//! [`crate::view_state::ConsoleTail`] or direct `add_line` calls) so the
//! renderer never touches the shared console store.

use crate::buffer::CircularBuffer;
use crate::model::ConsoleLine;
use crate::view_state::wrap::{wrap_line, CellMeasure, TextMeasure};
use ratatui::style::Color;

#[cfg(test)]
#[path = "text_view_tests.rs"]
mod tests;

/// Inclusive range of selected line indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Index of the first selected line.
    pub first: usize,
    /// Index of the last selected line.
    pub last: usize,
}

/// Search state machine.
/// Sum type: either no search is armed, or a sticky cursor points at the
/// current hit so the next call continues past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    /// No active search.
    Inactive,
    /// A hit is selected; the next search resumes one past it.
    Active {
        /// The query that produced the hit.
        query: String,
        /// Line index of the current hit.
        hit: usize,
    },
}

/// Scrollback text view: a windowed slice over a circular line buffer.
///
/// # Invariants
///
/// - The visible window never leaves the valid index range: it is clamped
///   on viewport changes and queried through [`visible_range`].
/// - Autoscroll is active exactly while neither a search nor a selection
///   is live.
///
/// [`visible_range`]: TextViewState::visible_range
#[derive(Debug)]
pub struct TextViewState<M = CellMeasure> {
    lines: CircularBuffer<ConsoleLine>,
    measure: M,
    /// Text shown after a reset (single pre-filled line); may be empty.
    initial_text: String,
    /// Index of the first currently-displayed line.
    first_viewed: usize,
    /// Lines that fit in the viewport.
    page_len: usize,
    /// Width budget for wrapping incoming lines; `None` stores lines raw.
    wrap_budget: Option<usize>,
    selection: Option<Selection>,
    /// A drag-selection is in progress.
    selecting: bool,
    /// Current drag direction when the cursor re-enters the range.
    selecting_up: bool,
    search: SearchState,
    dirty: bool,
}

impl TextViewState<CellMeasure> {
    /// Create a view retaining at most `max_lines` display lines.
    pub fn new(max_lines: usize) -> Self {
        Self::with_measure(max_lines, CellMeasure)
    }

    /// Create a view pre-filled with one line of `initial_text`.
    pub fn with_initial_text(max_lines: usize, initial_text: impl Into<String>) -> Self {
        let mut view = Self::new(max_lines);
        view.initial_text = initial_text.into();
        view.lines
            .push_back(ConsoleLine::new(view.initial_text.clone(), Color::White));
        view
    }
}

impl<M: TextMeasure> TextViewState<M> {
    /// Create a view with an explicit text measurer.
    pub fn with_measure(max_lines: usize, measure: M) -> Self {
        Self {
            lines: CircularBuffer::new(max_lines),
            measure,
            initial_text: String::new(),
            first_viewed: 0,
            page_len: 0,
            wrap_budget: None,
            selection: None,
            selecting: false,
            selecting_up: false,
            search: SearchState::Inactive,
            dirty: true,
        }
    }

    // ===== Geometry =====

    /// Update viewport geometry: `width` is the wrap budget for incoming
    /// lines, `height` the number of visible rows. Clamps the window so a
    /// shrink never strands it past the end.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        let page_len = height as usize;
        if page_len != self.page_len {
            self.dirty = true;
        }
        self.page_len = page_len;
        self.wrap_budget = Some(width as usize);
        self.clamp_window();
    }

    pub fn page_len(&self) -> usize {
        self.page_len
    }

    pub fn first_viewed(&self) -> usize {
        self.first_viewed
    }

    /// The window as a half-open index range, clamped to the buffer.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let len = self.lines.len();
        let first = self.first_viewed.min(len.saturating_sub(self.page_len));
        let end = (first + self.page_len).min(len);
        first..end
    }

    // ===== Content =====

    /// Append a line, wrapping it against the current width budget.
    pub fn add_line(&mut self, text: impl Into<String>, color: Color) {
        let text = text.into();
        match self.wrap_budget {
            Some(budget) if budget > 0 && self.measure.width(&text) > budget => {
                for piece in wrap_line(&text, budget, &self.measure) {
                    self.lines.push_back(ConsoleLine::new(piece, color));
                }
            }
            _ => {
                self.lines.push_back(ConsoleLine::new(text, color));
            }
        }
        self.dirty = true;
    }

    /// Text of the line at `index`, if present.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).ok().map(|line| line.text.as_str())
    }

    /// The line at `index` with its color, if present.
    pub fn colored_line(&self, index: usize) -> Option<&ConsoleLine> {
        self.lines.get(index).ok()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True when there is nothing meaningful to show: no lines, or a
    /// single empty one.
    pub fn is_blank(&self) -> bool {
        match self.lines.len() {
            0 => true,
            1 => self.lines[0].text.is_empty(),
            _ => false,
        }
    }

    /// True when the only content is the untouched initial text.
    pub fn has_initial_text(&self) -> bool {
        self.lines.len() == 1
            && !self.initial_text.is_empty()
            && self.lines[0].text == self.initial_text
    }

    /// Delete `n` lines from the start, shifting view, selection and
    /// search state to keep pointing at the same content.
    pub fn drop_first(&mut self, n: usize) {
        let n = n.min(self.lines.len());
        for _ in 0..n {
            self.lines.pop_front();
        }
        self.first_viewed = self.first_viewed.saturating_sub(n);
        if let Some(sel) = self.selection {
            if sel.last < n {
                self.selection = None;
                self.selecting = false;
            } else {
                self.selection = Some(Selection {
                    first: sel.first.saturating_sub(n),
                    last: sel.last - n,
                });
            }
        }
        if let SearchState::Active { hit, .. } = &mut self.search {
            if *hit < n {
                self.search = SearchState::Inactive;
            } else {
                *hit -= n;
            }
        }
        self.clamp_window();
        self.dirty = true;
    }

    /// Drop all lines. `keep_cursor` preserves the scroll position for an
    /// in-place rebuild; otherwise the window returns to the top.
    /// Selection and search state always reset: their indices would dangle.
    pub fn clear(&mut self, keep_cursor: bool) {
        self.lines.clear();
        if !keep_cursor {
            self.first_viewed = 0;
        }
        self.selection = None;
        self.selecting = false;
        self.search = SearchState::Inactive;
        self.dirty = true;
    }

    /// Clear and restore the initial text line.
    pub fn reset(&mut self) {
        self.clear(false);
        self.lines
            .push_back(ConsoleLine::new(self.initial_text.clone(), Color::White));
        self.dirty = true;
    }

    /// Raise the retention limit of the scrollback.
    pub fn raise_max_lines(&mut self, extra: usize) {
        self.lines.raise_max_len(extra);
    }

    // ===== Scrolling =====

    pub fn scroll_up(&mut self, n: usize) {
        self.first_viewed = self.first_viewed.saturating_sub(n);
        self.dirty = true;
    }

    pub fn scroll_down(&mut self, n: usize) {
        let max_first = self.lines.len().saturating_sub(self.page_len);
        self.first_viewed = (self.first_viewed + n).min(max_first);
        self.dirty = true;
    }

    /// Scroll by the full buffer length upward; the clamp lands on 0.
    pub fn scroll_to_top(&mut self) {
        self.scroll_up(self.lines.len());
    }

    /// Scroll by the full buffer length downward; the clamp lands on the
    /// last page.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_down(self.lines.len());
    }

    /// Autoscroll is suspended while the user is searching or has a
    /// selection; new data must not yank the view away from either.
    pub fn is_autoscrolling(&self) -> bool {
        self.search == SearchState::Inactive && self.selection.is_none()
    }

    // ===== Search =====

    /// Find the next line containing `text` as a substring.
    ///
    /// The scan starts one past the previous hit (wrapping to index 0) so
    /// repeated calls walk all matches. A hit becomes the selection and is
    /// scrolled into view. When the scan exhausts the buffer without a
    /// match, search state clears and `false` is returned.
    pub fn search(&mut self, text: &str) -> bool {
        let len = self.lines.len();
        if text.is_empty() || len == 0 {
            self.stop_search();
            return false;
        }
        let start = match &self.search {
            SearchState::Active { hit, .. } => (hit + 1) % len,
            SearchState::Inactive => 0,
        };
        for offset in 0..len {
            let index = (start + offset) % len;
            if self.lines[index].text.contains(text) {
                self.selection = Some(Selection {
                    first: index,
                    last: index,
                });
                self.selecting = false;
                self.scroll_into_view(index);
                self.search = SearchState::Active {
                    query: text.to_string(),
                    hit: index,
                };
                self.dirty = true;
                return true;
            }
        }
        self.stop_search();
        false
    }

    /// Leave search mode. The current selection stays highlighted.
    pub fn stop_search(&mut self) {
        self.search = SearchState::Inactive;
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.search, SearchState::Active { .. })
    }

    pub fn search_query(&self) -> Option<&str> {
        match &self.search {
            SearchState::Active { query, .. } => Some(query),
            SearchState::Inactive => None,
        }
    }

    // ===== Selection =====

    /// Start a drag-selection at `line`.
    pub fn begin_selection(&mut self, line: usize) {
        if self.lines.is_empty() {
            return;
        }
        let line = line.min(self.lines.len() - 1);
        self.stop_search();
        self.selection = Some(Selection {
            first: line,
            last: line,
        });
        self.selecting = true;
        self.selecting_up = false;
        self.dirty = true;
    }

    /// Grow or shrink the live selection toward `line`.
    ///
    /// Moving past either edge extends the range; moving back inside it
    /// shrinks from the edge the drag came from.
    pub fn extend_selection(&mut self, line: usize) {
        if !self.selecting {
            return;
        }
        let Some(sel) = &mut self.selection else {
            return;
        };
        let line = line.min(self.lines.len().saturating_sub(1));
        if line < sel.first {
            sel.first = line;
            self.selecting_up = true;
            self.dirty = true;
        } else if line > sel.last {
            sel.last = line;
            self.selecting_up = false;
            self.dirty = true;
        } else if line > sel.first && line < sel.last {
            if self.selecting_up {
                sel.first = line;
            } else {
                sel.last = line;
            }
            self.dirty = true;
        }
    }

    /// Finish a drag-selection, keeping the range highlighted.
    pub fn end_selection(&mut self) {
        self.selecting = false;
    }

    /// Select every line.
    pub fn select_all(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        self.selection = Some(Selection {
            first: 0,
            last: self.lines.len() - 1,
        });
        self.selecting = false;
        self.dirty = true;
    }

    /// Drop selection state entirely (focus loss, cancel).
    pub fn clear_selection(&mut self) {
        if self.selection.take().is_some() {
            self.dirty = true;
        }
        self.selecting = false;
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn is_selected(&self, line: usize) -> bool {
        self.selection
            .map(|sel| line >= sel.first && line <= sel.last)
            .unwrap_or(false)
    }

    /// Selected lines joined with newlines, for clipboard export.
    pub fn selected_text(&self) -> Option<String> {
        let sel = self.selection?;
        if self.lines.is_empty() {
            return None;
        }
        let last = sel.last.min(self.lines.len() - 1);
        if sel.first > last {
            return None;
        }
        let text: Vec<&str> = (sel.first..=last)
            .map(|index| self.lines[index].text.as_str())
            .collect();
        Some(text.join("\n"))
    }

    // ===== Dirty tracking =====

    /// Consume the redraw hint.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[cfg(test)]
    pub(crate) fn search_state_for_tests(&self) -> &SearchState {
        &self.search
    }

    // ===== Internal =====

    /// Scroll the minimum distance that brings `index` into the window.
    fn scroll_into_view(&mut self, index: usize) {
        if self.page_len == 0 {
            return;
        }
        if self.first_viewed > index {
            self.scroll_up(self.first_viewed - index);
        }
        let last_viewed = self.first_viewed + self.page_len - 1;
        if last_viewed < index {
            self.scroll_down(index - last_viewed);
        }
    }

    fn clamp_window(&mut self) {
        let max_first = self.lines.len().saturating_sub(self.page_len);
        if self.first_viewed > max_first {
            self.first_viewed = max_first;
            self.dirty = true;
        }
    }
}
