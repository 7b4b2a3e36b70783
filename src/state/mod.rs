//! Application state for the viewer binary.
//!
//! Owns the console handle, the text-view model, the tail tracker, the
//! command registry, and the footer's entry modes. Key events route here;
//! rendering reads from here.

use crate::clipboard::{Clipboard, MemoryClipboard};
use crate::config::{KeyBindings, ResolvedConfig};
use crate::console::{CommandRegistry, Console};
use crate::model::KeyAction;
use crate::view::FooterMode;
use crate::view_state::{CellMeasure, ConsoleTail, TextViewState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::style::Color;
use std::sync::Arc;
use tracing::{info, warn};

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;

/// Everything the event loop mutates.
pub struct AppState {
    /// Shared line store; the feed thread and log layer also hold handles.
    pub console: Arc<Console>,
    /// Scrollback view model.
    pub view: TextViewState<CellMeasure>,
    /// Incremental console → view tracker.
    pub tail: ConsoleTail,
    /// Console commands runnable from the footer.
    pub commands: CommandRegistry,
    /// Footer state: status, command entry, or search entry.
    pub footer: FooterMode,
    /// Effective key bindings.
    pub keybindings: KeyBindings,
    /// Copy-selection target.
    pub clipboard: MemoryClipboard,
    /// Last submitted search query, for find-next.
    pub last_search: String,
    /// Event loop exit flag.
    pub should_quit: bool,
    /// Screen row of the first text line, for mouse hit mapping.
    pub pane_top: u16,
}

impl AppState {
    /// Build the state and register the built-in console commands.
    pub fn new(console: Arc<Console>, config: &ResolvedConfig) -> Self {
        let mut state = Self {
            view: TextViewState::new(config.max_lines),
            tail: ConsoleTail::new(),
            commands: CommandRegistry::new(),
            footer: FooterMode::Status,
            keybindings: config.keybindings.clone(),
            clipboard: MemoryClipboard::new(),
            last_search: String::new(),
            should_quit: false,
            pane_top: 0,
            console,
        };
        state.register_builtin_commands();
        state
    }

    /// One frame step: pull new console content into the view.
    pub fn tick(&mut self) {
        self.tail.pump(&self.console, &mut self.view);
    }

    // ===== Key routing =====

    /// Apply a key event, honoring the footer's entry mode first.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if self.footer.is_entry() {
            self.handle_entry_key(key);
            return;
        }
        let Some(action) = self.keybindings.get(key) else {
            return;
        };
        self.apply_action(action);
    }

    fn apply_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::ScrollUp => self.view.scroll_up(1),
            KeyAction::ScrollDown => self.view.scroll_down(1),
            KeyAction::PageUp => self.view.scroll_up(self.view.page_len()),
            KeyAction::PageDown => self.view.scroll_down(self.view.page_len()),
            KeyAction::ScrollToTop => self.view.scroll_to_top(),
            KeyAction::ScrollToBottom => self.view.scroll_to_bottom(),
            KeyAction::StartSearch => {
                self.footer = FooterMode::Search {
                    input: String::new(),
                    miss: false,
                };
            }
            KeyAction::FindNext => {
                if !self.last_search.is_empty() {
                    let query = self.last_search.clone();
                    self.view.search(&query);
                }
            }
            KeyAction::StartCommand => {
                self.footer = FooterMode::Command {
                    input: String::new(),
                };
            }
            KeyAction::SelectAll => self.view.select_all(),
            KeyAction::CopySelection => self.copy_selection(),
            KeyAction::Cancel => {
                self.view.stop_search();
                self.view.clear_selection();
            }
            KeyAction::ClearConsole => {
                self.console.clear();
            }
            KeyAction::Quit => self.should_quit = true,
        }
    }

    /// Text entry for the footer's command and search modes.
    fn handle_entry_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.footer = FooterMode::Status,
            KeyCode::Backspace => match &mut self.footer {
                FooterMode::Command { input } | FooterMode::Search { input, .. } => {
                    input.pop();
                }
                FooterMode::Status => {}
            },
            KeyCode::Char(ch) => match &mut self.footer {
                FooterMode::Command { input } => input.push(ch),
                FooterMode::Search { input, miss } => {
                    input.push(ch);
                    *miss = false;
                }
                FooterMode::Status => {}
            },
            KeyCode::Enter => match std::mem::replace(&mut self.footer, FooterMode::Status) {
                FooterMode::Command { input } => self.submit_command(&input),
                FooterMode::Search { input, .. } => self.submit_search(input),
                FooterMode::Status => {}
            },
            _ => {}
        }
    }

    // ===== Actions =====

    fn submit_command(&mut self, input: &str) {
        if input.trim().is_empty() {
            return;
        }
        if self.commands.run(input) {
            info!(command = %input, "console command executed");
        }
    }

    fn submit_search(&mut self, input: String) {
        if input.is_empty() {
            return;
        }
        self.last_search = input.clone();
        let found = self.view.search(&input);
        if !found {
            self.footer = FooterMode::Search { input, miss: true };
        }
    }

    fn copy_selection(&mut self) {
        if let Some(text) = self.view.selected_text() {
            let lines = text.lines().count();
            self.clipboard.copy(&text);
            info!(lines, "copied selection to clipboard");
        }
    }

    // ===== Mouse selection =====

    /// Map a screen row to a scrollback line index.
    fn row_to_line(&self, row: u16) -> usize {
        self.view.first_viewed() + row.saturating_sub(self.pane_top) as usize
    }

    pub fn begin_mouse_selection(&mut self, row: u16) {
        let line = self.row_to_line(row);
        self.view.begin_selection(line);
    }

    pub fn extend_mouse_selection(&mut self, row: u16) {
        let line = self.row_to_line(row);
        self.view.extend_selection(line);
    }

    // ===== Built-in commands =====

    /// `clear`, `echo`, `max`: the commands every build ships with. All run
    /// against the shared console so handlers stay `Send`.
    fn register_builtin_commands(&mut self) {
        let console = Arc::clone(&self.console);
        self.commands.register("clear", move |_| {
            console.clear();
        });

        let console = Arc::clone(&self.console);
        self.commands.register("echo", move |args| {
            console.add_line(args.join(" "), Color::White);
        });

        let console = Arc::clone(&self.console);
        self.commands.register("max", move |args| {
            match args.first().map(|raw| raw.parse::<usize>()) {
                Some(Ok(extra)) if extra > 0 => {
                    console.raise_max_lines(extra);
                    info!(extra, "raised console line limit");
                }
                _ => warn!("usage: max <extra-lines>"),
            }
        });
    }
}
