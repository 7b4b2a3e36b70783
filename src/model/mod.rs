//! Core domain types: console lines, key actions, error taxonomy.

pub mod error;
pub mod key_action;
pub mod line;

pub use error::{AppError, BufferError, InputError};
pub use key_action::KeyAction;
pub use line::ConsoleLine;
