//! Application module: exposes the quiz model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the song list, the
//! current question and its reveal state.

mod model;

pub use model::*;
