use std::path::PathBuf;

/// Errors raised when a move cannot be applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Carries the user-facing (1-based) column.
    #[error("column {0} is outside the board (expected 1-7)")]
    InvalidColumn(usize),

    /// Carries the engine (0-based) column.
    #[error("column {} is full", .0 + 1)]
    ColumnFull(usize),

    #[error("no legal move: the board is full")]
    NoLegalMove,

    #[error("the game is already over")]
    GameOver,
}

/// Errors raised when a piece symbol is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PieceError {
    #[error("'{0}' is not a valid piece symbol (expected an uppercase letter A-Z)")]
    InvalidSymbol(char),
}

/// Errors that can occur while running a match between two agents.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("{agent} failed to move: {source}")]
    IllegalMove {
        agent: String,
        #[source]
        source: MoveError,
    },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
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

impl From<PieceError> for ConfigError {
    fn from(err: PieceError) -> Self {
        ConfigError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display_uses_user_facing_columns() {
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 4 is full");
        assert_eq!(
            MoveError::InvalidColumn(9).to_string(),
            "column 9 is outside the board (expected 1-7)"
        );
    }

    #[test]
    fn test_arena_error_display() {
        let err = ArenaError::IllegalMove {
            agent: "Random".to_string(),
            source: MoveError::NoLegalMove,
        };
        assert_eq!(
            err.to_string(),
            "Random failed to move: no legal move: the board is full"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("arena.games must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: arena.games must be > 0"
        );
    }

    #[test]
    fn test_piece_error_converts_to_validation() {
        let err: ConfigError = PieceError::InvalidSymbol('x').into();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
