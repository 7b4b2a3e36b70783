//! Scrollback pane widget.

use crate::view::styles;
use crate::view_state::{TextMeasure, TextViewState};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
};

/// The text area inside the pane chrome, for viewport sizing.
pub fn inner_area(area: Rect) -> Rect {
    pane_block(0).inner(area)
}

fn pane_block(dropped: usize) -> Block<'static> {
    let mut title = Line::from(Span::styled(" Console ", styles::pane_title_style()));
    if dropped > 0 {
        title.push_span(Span::styled(
            format!("({dropped} dropped) "),
            styles::dropped_badge_style(),
        ));
    }
    Block::bordered()
        .border_style(styles::pane_border_style())
        .title(title)
}

/// Renders the visible window of a [`TextViewState`]: bordered pane,
/// per-line colors, selection highlight, scrollbar, dropped-lines badge.
pub struct TextViewWidget<'a, M> {
    state: &'a TextViewState<M>,
    dropped: usize,
}

impl<'a, M: TextMeasure> TextViewWidget<'a, M> {
    pub fn new(state: &'a TextViewState<M>, dropped: usize) -> Self {
        Self { state, dropped }
    }
}

impl<M: TextMeasure> Widget for TextViewWidget<'_, M> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = pane_block(self.dropped);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let budget = inner.width as usize;
        for (row, index) in self.state.visible_range().enumerate() {
            let Some(line) = self.state.colored_line(index) else {
                break;
            };
            let style = if self.state.is_selected(index) {
                styles::selection_style()
            } else {
                Style::default().fg(line.color)
            };
            let text = fit_line(&line.text, budget);
            buf.set_stringn(
                inner.x,
                inner.y + row as u16,
                &text,
                budget,
                style,
            );
        }

        // Scrollbar only once there is something to scroll to.
        let len = self.state.len();
        if len > self.state.page_len() {
            let mut scrollbar_state =
                ScrollbarState::new(len.saturating_sub(self.state.page_len()))
                    .position(self.state.first_viewed());
            Scrollbar::new(ScrollbarOrientation::VerticalRight).render(
                area,
                buf,
                &mut scrollbar_state,
            );
        }
    }
}

/// Truncate an over-wide line, marking the cut with an ellipsis.
///
/// Lines are normally pre-wrapped to the budget; this guards the window
/// between a resize and the next wrap.
fn fit_line(text: &str, budget: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if UnicodeWidthStr::width(text) <= budget {
        return text.to_string();
    }
    let keep = budget.saturating_sub(3);
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_w = ch.width().unwrap_or(0);
        if width + ch_w > keep {
            break;
        }
        out.push(ch);
        width += ch_w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::CellMeasure;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;
    use ratatui::Terminal;

    fn render_to_backend(state: &TextViewState<CellMeasure>, dropped: usize) -> Buffer {
        let backend = TestBackend::new(30, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(TextViewWidget::new(state, dropped), frame.area());
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_visible_lines_inside_border() {
        let mut state = TextViewState::new(16);
        state.set_viewport(28, 6);
        state.add_line("hello world", Color::White);
        state.add_line("second line", Color::White);

        let text = buffer_text(&render_to_backend(&state, 0));
        assert!(text.contains("hello world"));
        assert!(text.contains("second line"));
        assert!(text.contains("Console"));
    }

    #[test]
    fn shows_dropped_badge_when_lines_were_lost() {
        let state = TextViewState::new(16);
        let text = buffer_text(&render_to_backend(&state, 7));
        assert!(text.contains("(7 dropped)"));
    }

    #[test]
    fn no_dropped_badge_without_losses() {
        let state = TextViewState::new(16);
        let text = buffer_text(&render_to_backend(&state, 0));
        assert!(!text.contains("dropped"));
    }

    #[test]
    fn scrolled_window_shows_only_its_slice() {
        let mut state = TextViewState::new(32);
        state.set_viewport(28, 6);
        for i in 0..20 {
            state.add_line(format!("line {i:02}"), Color::White);
        }
        state.scroll_to_bottom();

        let text = buffer_text(&render_to_backend(&state, 0));
        assert!(text.contains("line 19"));
        assert!(!text.contains("line 00"));
    }

    #[test]
    fn selected_lines_render_in_selection_color() {
        let mut state = TextViewState::new(16);
        state.set_viewport(28, 6);
        state.add_line("pick me", Color::White);
        state.select_all();

        let buf = render_to_backend(&state, 0);
        let inner_cell = buf.cell((1, 1)).unwrap();
        assert_eq!(inner_cell.style().fg, Some(Color::Yellow));
    }

    #[test]
    fn fit_line_passes_short_text_through() {
        assert_eq!(fit_line("short", 10), "short");
    }

    #[test]
    fn fit_line_marks_truncation() {
        let fitted = fit_line("abcdefghijklmnop", 8);
        assert!(fitted.ends_with("..."));
        assert!(fitted.len() <= 11);
    }
}
