//! Console line value type.

use ratatui::style::Color;

/// One line of console text with its display color.
///
/// Immutable value type; copied or moved into and out of the scrollback
/// buffers. The same type serves the console store and the text view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    /// Line text, without a trailing newline.
    pub text: String,
    /// Display color for the whole line.
    pub color: Color,
}

impl ConsoleLine {
    /// Create a line with an explicit color.
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    /// Create a line colored by a severity heuristic on its content.
    ///
    /// Used when tailing arbitrary log text where no structured level is
    /// available: lines mentioning errors render red, warnings yellow,
    /// debug/trace chatter dim, everything else white.
    pub fn classified(text: impl Into<String>) -> Self {
        let text = text.into();
        let color = severity_color(&text);
        Self { text, color }
    }
}

impl Default for ConsoleLine {
    fn default() -> Self {
        Self {
            text: String::new(),
            color: Color::White,
        }
    }
}

/// Pick a display color from the content of a raw log line.
fn severity_color(text: &str) -> Color {
    let upper = text.to_uppercase();
    if upper.contains("ERROR") || upper.contains("FATAL") || upper.contains("PANIC") {
        Color::Red
    } else if upper.contains("WARN") {
        Color::Yellow
    } else if upper.contains("DEBUG") || upper.contains("TRACE") {
        Color::DarkGray
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_line_is_empty_and_white() {
        let line = ConsoleLine::default();
        assert!(line.text.is_empty());
        assert_eq!(line.color, Color::White);
    }

    #[test]
    fn classified_flags_errors_red() {
        assert_eq!(
            ConsoleLine::classified("2026-01-01 ERROR boom").color,
            Color::Red
        );
        assert_eq!(ConsoleLine::classified("error: nope").color, Color::Red);
    }

    #[test]
    fn classified_flags_warnings_yellow() {
        assert_eq!(
            ConsoleLine::classified("WARN disk nearly full").color,
            Color::Yellow
        );
    }

    #[test]
    fn classified_dims_debug_chatter() {
        assert_eq!(
            ConsoleLine::classified("DEBUG tick 42").color,
            Color::DarkGray
        );
    }

    #[test]
    fn classified_defaults_to_white() {
        assert_eq!(ConsoleLine::classified("hello world").color, Color::White);
    }
}
