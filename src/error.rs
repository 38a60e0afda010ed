use std::path::PathBuf;

use crate::game_repr::{Move, PlayerId};

/// Errors raised by the Isolation board.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions {width}x{height} out of range (1..=8 per side)")]
    InvalidDimensions { width: usize, height: usize },

    #[error("illegal move {mv} for {player:?}")]
    IllegalMove { mv: Move, player: PlayerId },

    #[error("cell {mv} is off the board or already blocked")]
    CellUnavailable { mv: Move },

    #[error("malformed board layout: {0}")]
    Layout(String),
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

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}

/// Errors that abort a tournament run before any game is played.
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("opening could not be played: {0}")]
    Opening(#[from] BoardError),
}
