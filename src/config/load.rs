use std::env;
use std::path::{Path, PathBuf};

use ::config::{Config, ConfigError, Environment, File};

use super::schema::Settings;

const ENV_PREFIX: &str = "KANJIQUIZ";
const PATH_OVERRIDE_VAR: &str = "KANJIQUIZ_CONFIG_PATH";

impl Settings {
    /// Load settings from the resolved config file (if any) and `KANJIQUIZ__*`
    /// environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(resolve_config_path().as_deref())
    }

    /// Layer `path` (optional, may be missing) under the environment and
    /// deserialize, filling gaps from `Settings::default()`.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let env_layer = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true);

        let mut builder = Config::builder();
        if let Some(p) = path {
            builder = builder.add_source(File::from(p).required(false));
        }

        builder.add_source(env_layer).build()?.try_deserialize()
    }

    /// Reject settings the quiz cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.quiz.excerpt_length == 0 {
            return Err("quiz.excerpt_length must be >= 1".to_string());
        }
        if self.source.location.trim().is_empty() {
            return Err("source.location must not be empty".to_string());
        }
        Ok(())
    }

    /// Render the settings as a TOML document (used by `--print-config`).
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// `KANJIQUIZ_CONFIG_PATH` if set, else [`default_config_path`].
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os(PATH_OVERRIDE_VAR)
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `kanjiquiz/config.toml` under the user's config home.
pub fn default_config_path() -> Option<PathBuf> {
    config_home().map(|d| d.join("kanjiquiz").join("config.toml"))
}

// $XDG_CONFIG_HOME, falling back to ~/.config.
fn config_home() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
}
