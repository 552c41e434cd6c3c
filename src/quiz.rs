//! Question selection: pick a random song and a random run of its text body.

mod select;

pub use select::{DEFAULT_EXCERPT_LEN, Question, select_question};

#[cfg(test)]
mod tests;
