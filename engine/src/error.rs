use std::path::PathBuf;

/// Reasons a move is refused. The board the move was aimed at is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell index {0} is outside 0..=8")]
    InvalidIndex(usize),

    #[error("cell {0} is already occupied")]
    CellOccupied(usize),

    #[error("game is already over")]
    GameTerminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The move selector was asked to play on a full board.
    #[error("no legal moves left on the board")]
    NoLegalMoves,

    /// The session was set up without a difficulty for the computer.
    #[error("no difficulty configured for computer moves")]
    NoDifficulty,

    #[error("computer move rejected: {0}")]
    Move(#[from] MoveError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),

    #[error("failed to deserialize config: {0}")]
    Deserialize(#[source] serde_yaml_ng::Error),

    #[error("config not found at {0}")]
    Missing(String),

    #[error("config field '{0}' is not set")]
    MissingField(&'static str),

    #[error("invalid value '{value}' for '{field}'")]
    InvalidValue { field: &'static str, value: String },

    #[error("config validation error: {0}")]
    Validation(String),
}
