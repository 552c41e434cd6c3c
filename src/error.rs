//! Error types shared by the song sources and the question selector.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Reading a local song file failed.
    #[error("IO error at {path:?}: {source}")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    /// The remote song list answered with a non-success status.
    #[error("HTTP error from {url}: {message}")]
    Http { url: String, message: String },

    /// An error propagated from `reqwest` (connect, timeout, body decode).
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// A question was requested from an empty song list.
    #[error("no songs to pick a question from")]
    NoSongs,

    /// Excerpts must be at least one character long.
    #[error("excerpt length must be >= 1")]
    InvalidExcerptLength,
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}
