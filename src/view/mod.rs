//! Ratatui rendering and the frame-stepped event loop.
//!
//! The loop is synchronous: poll input with a short timeout, apply key
//! events, pump the console tail, redraw. The only concurrency is the feed
//! thread writing into the console store behind its mutex.

pub mod footer;
pub mod styles;
pub mod text_view;

pub use footer::{FooterMode, FooterView};
pub use text_view::{inner_area, TextViewWidget};

use crate::model::AppError;
use crate::state::AppState;
use crossterm::event::{self, Event, MouseEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::info;

/// Input poll timeout; bounds the latency of tail pumping between keys.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Raw-mode guard: restores the terminal on every exit path, panics
/// included.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        io::stdout().execute(EnterAlternateScreen)?;
        io::stdout().execute(event::EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = io::stdout().execute(event::DisableMouseCapture);
        let _ = io::stdout().execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Run the viewer until the user quits.
///
/// Takes ownership of the prepared application state; the caller has
/// already attached the console, feed thread and commands.
pub fn run(mut state: AppState) -> Result<(), AppError> {
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    info!("viewer started");

    run_loop(&mut terminal, &mut state)?;

    info!("viewer exiting");
    Ok(())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut AppState,
) -> Result<(), AppError> {
    loop {
        // Draw first: the frame also syncs the viewport geometry the next
        // pump wraps against.
        terminal.draw(|frame| draw(frame, state))?;

        if event::poll(TICK_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => state.handle_key(key),
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => state.view.scroll_up(1),
                    MouseEventKind::ScrollDown => state.view.scroll_down(1),
                    MouseEventKind::Down(_) => state.begin_mouse_selection(mouse.row),
                    MouseEventKind::Drag(_) => state.extend_mouse_selection(mouse.row),
                    MouseEventKind::Up(_) => state.view.end_selection(),
                    _ => {}
                },
                Event::Resize(_, _) => state.view.mark_dirty(),
                _ => {}
            }
        }

        state.tick();

        if state.should_quit {
            return Ok(());
        }
    }
}

/// Layout: scrollback pane over a one-line footer.
fn draw(frame: &mut Frame, state: &mut AppState) {
    let [pane_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    sync_viewport(state, pane_area);

    frame.render_widget(
        TextViewWidget::new(&state.view, state.console.dropped_count()),
        pane_area,
    );
    frame.render_widget(
        FooterView::new(&state.footer, &state.view, state.console.line_count()),
        footer_area,
    );
}

/// Keep the view model's geometry in step with the pane's inner area.
fn sync_viewport(state: &mut AppState, pane_area: Rect) {
    let inner = text_view::inner_area(pane_area);
    state.pane_top = inner.y;
    state.view.set_viewport(inner.width, inner.height);
}
