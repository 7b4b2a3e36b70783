//! Pure view-side state: windowing, wrapping, search, incremental sync.
//!
//! Everything here is renderer-agnostic; `view` consumes these models to
//! draw frames.

pub mod tail;
pub mod text_view;
pub mod wrap;

pub use tail::ConsoleTail;
pub use text_view::{SearchState, Selection, TextViewState};
pub use wrap::{wrap_line, CellMeasure, TextMeasure, CONTINUATION_INDENT};
