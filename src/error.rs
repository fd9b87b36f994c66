//! Error types for game actions, configuration and startup

use std::path::PathBuf;

use crate::board::{PlayerId, Pos};

/// Rejected game actions. None of these change game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("cell {pos} is already occupied by player {occupant}")]
    AlreadyOccupied { pos: Pos, occupant: PlayerId },

    #[error("game is over (winner: player {winner})")]
    GameIsOver { winner: PlayerId },

    #[error("coordinates {pos} are outside the {width}x{height} board")]
    InvalidCoordinates {
        pos: Pos,
        width: usize,
        height: usize,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that stop the desktop app from starting.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to render default config: {0}")]
    RenderConfig(#[from] toml::ser::Error),

    #[error("failed to start GUI: {0}")]
    Gui(#[from] eframe::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_occupied_display() {
        let err = GameError::AlreadyOccupied {
            pos: Pos::new(2, 2),
            occupant: PlayerId::new(1),
        };
        assert_eq!(err.to_string(), "cell (2, 2) is already occupied by player 1");
    }

    #[test]
    fn test_game_is_over_display() {
        let err = GameError::GameIsOver {
            winner: PlayerId::new(0),
        };
        assert_eq!(err.to_string(), "game is over (winner: player 0)");
    }

    #[test]
    fn test_invalid_coordinates_display() {
        let err = GameError::InvalidCoordinates {
            pos: Pos::new(-1, 4),
            width: 15,
            height: 10,
        };
        assert_eq!(
            err.to_string(),
            "coordinates (-1, 4) are outside the 15x10 board"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("players must be in 2..=4".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: players must be in 2..=4"
        );
    }
}
