//! devcon: bounded scrollback console for terminal applications.
//!
//! The crate is built around three pieces:
//! - [`buffer::CircularBuffer`], a fixed-maximum ring buffer with
//!   overwrite-on-full semantics,
//! - [`console::Console`], a thread-safe append-only line store consumed by
//!   a single renderer and fed from arbitrary producer threads,
//! - [`view_state::TextViewState`], a windowed scroll/selection/search model
//!   over a scrollback buffer.
//!
//! The `devcon` binary wires them into a ratatui viewer that tails a file or
//! stdin into the console and renders it with scrolling, selection, search
//! and console commands.

pub mod buffer;
pub mod clipboard;
pub mod config;
pub mod console;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
