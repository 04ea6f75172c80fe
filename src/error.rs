use std::path::PathBuf;

use crate::game::{MoveError, Player};

/// Errors choosing a column from a score vector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("score vector is empty")]
    EmptyScores,

    #[error("no legal column to play")]
    NoLegalMove,
}

/// Errors that can occur while a game is being played.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("{player} selected illegal column {action} (legal: {legal:?})")]
    IllegalAction {
        player: Player,
        action: usize,
        legal: Vec<usize>,
    },

    #[error("move failed: {0}")]
    Move(#[from] MoveError),

    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    #[error("input closed before a column was chosen")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_error_display() {
        assert_eq!(SearchError::NoLegalMove.to_string(), "no legal column to play");
    }

    #[test]
    fn test_play_error_display() {
        let err = PlayError::IllegalAction {
            player: Player::O,
            action: 5,
            legal: vec![0, 1, 2],
        };
        assert_eq!(
            err.to_string(),
            "O selected illegal column 5 (legal: [0, 1, 2])"
        );

        let err = PlayError::from(MoveError::ColumnFull(3));
        assert_eq!(err.to_string(), "move failed: column 3 is full");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.width must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.width must be > 0"
        );
    }
}
