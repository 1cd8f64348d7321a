//! Running win counts persisted as JSON between sessions.

use hotseat_core::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

/// Errors from reading or writing the score file.
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("failed to access score file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed score file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Wins per color.
///
/// Stored on disk as `{"white": 3, "black": 1}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub white: u32,
    pub black: u32,
}

impl Scoreboard {
    /// Reads the score file, starting from zero if it does not exist yet.
    pub fn load(path: &Path) -> Result<Self, ScoreError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes the score file, replacing any previous contents.
    pub fn save(&self, path: &Path) -> Result<(), ScoreError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Returns the number of wins for a color.
    pub fn wins(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    pub fn record_win(&mut self, winner: Color) {
        match winner {
            Color::White => self.white += 1,
            Color::Black => self.black += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "White {} - {} Black", self.white, self.black)
    }
}
