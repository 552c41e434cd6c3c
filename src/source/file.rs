use std::path::{Path, PathBuf};

use super::SongSource;
use crate::error::{Error, Result};

/// Reads the song list from a local file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SongSource for FileSource {
    fn fetch(&self) -> Result<String> {
        log::debug!("reading song list from {}", self.path.display());
        std::fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
