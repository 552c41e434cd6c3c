//! Configuration loader and schema types.
//!
//! This module exposes the settings that drive the quiz (where the song
//! list lives, excerpt length, UI text and reveal timing) and helpers to
//! load them from disk and the environment.

mod load;
mod schema;

pub use schema::*;
