//! Tracing layer that mirrors events into the console store.

use crate::console::Console;
use ratatui::style::Color;
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Mirrors tracing events into a [`Console`], color-coded by level.
///
/// Producers on any thread (feed thread, command handlers) thereby land in
/// the same scrollback the user is looking at.
pub struct ConsoleLayer {
    console: Arc<Console>,
}

impl ConsoleLayer {
    pub fn new(console: Arc<Console>) -> Self {
        Self { console }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let level = *event.metadata().level();
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        let mut text = format!("{timestamp} {level:>5} {}", visitor.message);
        if !visitor.extras.is_empty() {
            let _ = write!(text, " [{}]", visitor.extras.join(" "));
        }
        self.console.add_line(text, level_color(level));
    }
}

/// Collects the `message` field plus any structured extras.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    extras: Vec<String>,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.extras.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            self.extras.push(format!("{}={:?}", field.name(), value));
        }
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::ERROR => Color::Red,
        Level::WARN => Color::Yellow,
        Level::INFO => Color::Cyan,
        Level::DEBUG => Color::Gray,
        Level::TRACE => Color::DarkGray,
    }
}
