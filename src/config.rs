use std::path::Path;

use tracing::warn;

use crate::ai::EngineConfig;
use crate::arena::ArenaConfig;
use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub arena: ArenaConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
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

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.arena.validate()
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&AppConfig::default())
            .map_err(|e| ConfigError::Validation(format!("default config does not serialize: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::OpponentKind;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert!(config.engine.opening_book);
        assert_eq!(config.arena.games, 100);
        assert_eq!(config.arena.seed, 42);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[arena]
games = 10
opponent = "engine"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.arena.games, 10);
        assert_eq!(config.arena.opponent, OpponentKind::Engine);
        // Other fields should be defaults
        assert_eq!(config.arena.engine_piece, 'X');
        assert!(config.arena.alternate_first_move);
        assert!(config.engine.opening_book);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unknown_opponent_is_a_parse_error() {
        let result: Result<AppConfig, _> = toml::from_str("[arena]\nopponent = \"human\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.arena.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_lowercase_piece() {
        let mut config = AppConfig::default();
        config.arena.opponent_piece = 'y';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_shared_piece() {
        let mut config = AppConfig::default();
        config.arena.opponent_piece = config.arena.engine_piece;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[engine]
opening_book = false

[arena]
games = 500
engine_piece = "R"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(!config.engine.opening_book);
        assert_eq!(config.arena.games, 500);
        assert_eq!(config.arena.engine_piece, 'R');
        // Others are defaults
        assert_eq!(config.arena.opponent_piece, 'Y');
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[arena]\ngames = 0\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
