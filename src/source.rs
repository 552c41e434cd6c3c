//! Where the song list comes from.
//!
//! Two interchangeable sources exist: a local TSV file and a remote TSV
//! fetched over HTTP. Both hand the raw text to [`crate::song::parse`].

mod file;
mod http;

pub use file::FileSource;
pub use http::HttpSource;

use crate::config::SourceSettings;
use crate::error::Result;
use crate::song::{self, Song};

/// A provider of raw song list text.
pub trait SongSource {
    /// Fetch the raw TSV text.
    fn fetch(&self) -> Result<String>;

    /// Human-readable location, used in logs and the status line.
    fn describe(&self) -> String;

    /// Fetch and parse in one go.
    fn load_songs(&self) -> Result<Vec<Song>> {
        let raw = self.fetch()?;
        Ok(song::parse(&raw))
    }
}

/// Pick a source for `location`: `http://` and `https://` URLs are fetched,
/// anything else is read as a file path.
pub fn from_location(location: &str, settings: &SourceSettings) -> Box<dyn SongSource> {
    if is_remote(location) {
        Box::new(HttpSource::new(location, settings.timeout()))
    } else {
        Box::new(FileSource::new(location))
    }
}

fn is_remote(location: &str) -> bool {
    let lower = location.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
