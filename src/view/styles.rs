//! Shared styling for the viewer widgets.

use ratatui::style::{Color, Modifier, Style};

/// Style for lines inside the current selection.
pub fn selection_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Border style for the scrollback pane.
pub fn pane_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Title style for the scrollback pane.
pub fn pane_title_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

/// Style for the dropped-lines badge in the pane title.
pub fn dropped_badge_style() -> Style {
    Style::default().fg(Color::Red)
}

/// Style for the footer's key hints.
pub fn footer_hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for the footer in command-entry mode.
pub fn footer_command_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for the footer's "not found" search notice.
pub fn footer_miss_style() -> Style {
    Style::default().fg(Color::Red)
}
