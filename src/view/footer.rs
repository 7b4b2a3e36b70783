//! One-line footer: status hints, command entry, search entry.

use crate::view::styles;
use crate::view_state::{TextMeasure, TextViewState};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

/// What the footer line is currently doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FooterMode {
    /// Passive status line with key hints.
    Status,
    /// Command entry after `:`.
    Command {
        /// Text typed so far.
        input: String,
    },
    /// Search entry after `/`.
    Search {
        /// Text typed so far.
        input: String,
        /// Last submitted query found nothing.
        miss: bool,
    },
}

impl FooterMode {
    /// True while the footer captures typed characters.
    pub fn is_entry(&self) -> bool {
        !matches!(self, FooterMode::Status)
    }
}

/// Renders the footer line for the current mode.
pub struct FooterView<'a, M> {
    mode: &'a FooterMode,
    view: &'a TextViewState<M>,
    line_count: usize,
}

impl<'a, M: TextMeasure> FooterView<'a, M> {
    pub fn new(mode: &'a FooterMode, view: &'a TextViewState<M>, line_count: usize) -> Self {
        Self {
            mode,
            view,
            line_count,
        }
    }
}

impl<M: TextMeasure> Widget for FooterView<'_, M> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let width = area.width as usize;
        match self.mode {
            FooterMode::Status => {
                let mut status = format!(" {} lines", self.line_count);
                if let Some(query) = self.view.search_query() {
                    status.push_str(&format!("  /{query} (n: next)"));
                }
                buf.set_stringn(area.x, area.y, &status, width, styles::footer_hint_style());

                let hints = "q quit  / search  : command  c clear  a all  y copy ";
                let x = (area.width as usize).saturating_sub(hints.len()) as u16;
                if x > status.len() as u16 {
                    buf.set_stringn(
                        area.x + x,
                        area.y,
                        hints,
                        width,
                        styles::footer_hint_style(),
                    );
                }
            }
            FooterMode::Command { input } => {
                buf.set_stringn(
                    area.x,
                    area.y,
                    format!(":{input}█"),
                    width,
                    styles::footer_command_style(),
                );
            }
            FooterMode::Search { input, miss } => {
                let prompt = format!("/{input}█");
                buf.set_stringn(area.x, area.y, &prompt, width, styles::footer_command_style());
                if *miss {
                    let notice = " not found.";
                    buf.set_stringn(
                        area.x + prompt.chars().count() as u16,
                        area.y,
                        notice,
                        width.saturating_sub(prompt.chars().count()),
                        styles::footer_miss_style(),
                    );
                }
            }
        }
    }
}
