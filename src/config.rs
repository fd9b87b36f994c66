//! Game configuration loaded from TOML

use std::path::Path;

use tracing::warn;

use crate::board::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_BOARD_DIM, MIN_BOARD_DIM};
use crate::error::ConfigError;

/// Smallest supported player count
pub const MIN_PLAYERS: usize = 2;
/// Largest supported player count
pub const MAX_PLAYERS: usize = 4;
/// Points needed to win a session
pub const DEFAULT_WIN_SCORE: u32 = 2;

/// Session configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of players taking turns (2-4)
    pub players: usize,
    /// Board columns
    pub width: usize,
    /// Board rows
    pub height: usize,
    /// Score that ends the session
    pub win_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            players: MIN_PLAYERS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            win_score: DEFAULT_WIN_SCORE,
        }
    }
}

impl GameConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file without validating it, for callers that merge in
    /// overrides before calling [`GameConfig::validate`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Like [`GameConfig::load_or_default`], but leaves validation to the
    /// caller.
    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            return Err(ConfigError::Validation(format!(
                "players must be in {MIN_PLAYERS}..={MAX_PLAYERS} (found {})",
                self.players
            )));
        }
        if !(MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&self.width) {
            return Err(ConfigError::Validation(format!(
                "width must be in {MIN_BOARD_DIM}..={MAX_BOARD_DIM} (found {})",
                self.width
            )));
        }
        if !(MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&self.height) {
            return Err(ConfigError::Validation(format!(
                "height must be in {MIN_BOARD_DIM}..={MAX_BOARD_DIM} (found {})",
                self.height
            )));
        }
        if self.win_score == 0 {
            return Err(ConfigError::Validation("win_score must be > 0".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&GameConfig::default())
    }
}
