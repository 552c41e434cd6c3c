//! Song records and the tab-separated song list parser.
//!
//! The song list is a TSV file whose first row is a header. Every following
//! row with at least five fields becomes one [`Song`]; anything shorter is
//! dropped without complaint.

mod model;
mod parse;

pub use model::Song;
pub use parse::parse;
