//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// [`crate::config::KeyBindings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the view up by one line. Default: k/↑
    ScrollUp,
    /// Scroll the view down by one line. Default: j/↓
    ScrollDown,
    /// Scroll up by one page height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one page height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the oldest retained line. Default: g/Home
    ScrollToTop,
    /// Jump to the newest line and re-arm autoscroll. Default: G/End
    ScrollToBottom,

    // Search
    /// Open the search entry in the footer. Default: /
    StartSearch,
    /// Repeat the last search from one past the current hit. Default: n
    FindNext,

    // Commands
    /// Open the command entry in the footer. Default: :
    StartCommand,

    // Selection / clipboard
    /// Select every line in the scrollback. Default: a
    SelectAll,
    /// Copy the selected lines to the clipboard. Default: y
    CopySelection,
    /// Drop selection and search state. Default: Esc
    Cancel,

    // Console
    /// Clear the console store and the view. Default: c
    ClearConsole,

    /// Leave the viewer. Default: q
    Quit,
}

impl KeyAction {
    /// Parse an action name as written in the config file.
    ///
    /// Names are the kebab-case form of the variant; unknown names yield
    /// `None` so the caller can warn and fall back to defaults.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "scroll-up" => Some(Self::ScrollUp),
            "scroll-down" => Some(Self::ScrollDown),
            "page-up" => Some(Self::PageUp),
            "page-down" => Some(Self::PageDown),
            "scroll-to-top" => Some(Self::ScrollToTop),
            "scroll-to-bottom" => Some(Self::ScrollToBottom),
            "start-search" => Some(Self::StartSearch),
            "find-next" => Some(Self::FindNext),
            "start-command" => Some(Self::StartCommand),
            "select-all" => Some(Self::SelectAll),
            "copy-selection" => Some(Self::CopySelection),
            "cancel" => Some(Self::Cancel),
            "clear-console" => Some(Self::ClearConsole),
            "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_parses_known_actions() {
        assert_eq!(KeyAction::from_name("scroll-up"), Some(KeyAction::ScrollUp));
        assert_eq!(KeyAction::from_name("quit"), Some(KeyAction::Quit));
        assert_eq!(
            KeyAction::from_name("copy-selection"),
            Some(KeyAction::CopySelection)
        );
    }

    #[test]
    fn from_name_rejects_unknown_actions() {
        assert_eq!(KeyAction::from_name("warp-speed"), None);
        assert_eq!(KeyAction::from_name(""), None);
    }
}
