//! Configuration file loading for the hotseat front end.
//!
//! Settings live in `hotseat.toml`, looked up in the current directory and
//! then in each parent directory. A missing file means defaults.

use hotseat_engine::RuleConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Name of the configuration file searched for on startup.
pub const CONFIG_FILE: &str = "hotseat.toml";

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// The file is not valid TOML or has fields of the wrong type.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How the board is shown and where the score is kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Draw the board from the side of the player to move.
    pub flip_board: bool,
    /// JSON file holding the running score. Defaults to `hotseat-score.json`.
    pub score_file: PathBuf,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            flip_board: false,
            score_file: PathBuf::from("hotseat-score.json"),
        }
    }
}

/// Top-level configuration: a `[rules]` and a `[display]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub rules: RuleConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Loads `hotseat.toml` found from the current directory upward, or
    /// returns defaults if there is none.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the working directory or the file
    /// cannot be read, or [`ConfigError::Parse`] if the file is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir()?;
        match Self::find(&cwd) {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no {} found, using defaults", CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    /// Reads and parses a specific configuration file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Returns the first `hotseat.toml` in `start` or one of its ancestors.
    pub fn find(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE))
            .find(|path| path.is_file())
    }
}
