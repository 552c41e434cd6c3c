use std::time::Duration;

use reqwest::blocking::Client;

use super::SongSource;
use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("kanjiquiz/", env!("CARGO_PKG_VERSION"));

/// Fetches the song list once over HTTP(S).
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

impl SongSource for HttpSource {
    /// # Errors
    /// Returns an error if the request fails, times out, or the server
    /// answers with a non-success status.
    fn fetch(&self) -> Result<String> {
        log::debug!("fetching song list from {}", self.url);
        let http = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        let response = http.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                url: self.url.clone(),
                message: status.to_string(),
            });
        }

        Ok(response.text()?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
