use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::quiz::DEFAULT_EXCERPT_LEN;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/kanjiquiz/config.toml` or `~/.config/kanjiquiz/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `KANJIQUIZ__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub source: SourceSettings,
    pub quiz: QuizSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceSettings {
    /// File path or `http(s)://` URL of the song list.
    /// A location given on the command line wins over this one.
    pub location: String,
    /// Request timeout for remote song lists (seconds).
    pub timeout_secs: u64,
}

impl SourceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            location: "songs.tsv".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct QuizSettings {
    /// Number of characters shown per question.
    pub excerpt_length: usize,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            excerpt_length: DEFAULT_EXCERPT_LEN,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Prompt shown above the excerpt.
    pub question_text: String,

    /// Delay before the first excerpt character appears (milliseconds).
    pub reveal_delay_ms: u64,

    /// Gap between successive excerpt characters appearing (milliseconds).
    /// Set both timings to 0 to show the excerpt at once.
    pub reveal_interval_ms: u64,
}

impl UiSettings {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms)
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ 漢字クイズ ~ ".to_string(),
            question_text: "問題: この漢字を含む楽曲は？".to_string(),
            reveal_delay_ms: 1000,
            reveal_interval_ms: 1000,
        }
    }
}
