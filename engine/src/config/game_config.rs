use serde::{Deserialize, Serialize};

use super::Validate;
use crate::defaults::DEFAULT_THINKING_DELAY_MS;
use crate::error::ConfigError;
use crate::session::SessionSettings;
use crate::types::{Difficulty, GameMode};

const MAX_THINKING_DELAY_MS: u64 = 10_000;

/// Host-persisted game choices.
///
/// ```yaml
/// mode: pvc
/// level: hard
/// thinking_delay_ms: 500
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub mode: Option<GameMode>,
    #[serde(default)]
    pub level: Option<Difficulty>,
    #[serde(default = "default_thinking_delay_ms")]
    pub thinking_delay_ms: u64,
}

fn default_thinking_delay_ms() -> u64 {
    DEFAULT_THINKING_DELAY_MS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: None,
            level: None,
            thinking_delay_ms: DEFAULT_THINKING_DELAY_MS,
        }
    }
}

impl GameConfig {
    pub fn session_settings(&self) -> Result<SessionSettings, ConfigError> {
        match self.mode {
            None => Err(ConfigError::MissingField("mode")),
            Some(GameMode::PlayerVsPlayer) => Ok(SessionSettings::player_vs_player()),
            Some(GameMode::PlayerVsComputer) => self
                .level
                .map(SessionSettings::player_vs_computer)
                .ok_or(ConfigError::MissingField("level")),
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.thinking_delay_ms > MAX_THINKING_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "thinking_delay_ms must be at most {}, got {}",
                MAX_THINKING_DELAY_MS, self.thinking_delay_ms
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigContentProvider, ConfigManager, ConfigSerializer, FileContentConfigProvider,
        YamlConfigSerializer,
    };

    fn get_temp_file_path() -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path
    }

    fn pvc_hard() -> GameConfig {
        GameConfig {
            mode: Some(GameMode::PlayerVsComputer),
            level: Some(Difficulty::Hard),
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_parses_lowercase_names() {
        let serializer = YamlConfigSerializer::new();
        let config: GameConfig = serializer
            .deserialize("mode: pvc\nlevel: medium\n")
            .unwrap();
        assert_eq!(config.mode, Some(GameMode::PlayerVsComputer));
        assert_eq!(config.level, Some(Difficulty::Medium));
        assert_eq!(config.thinking_delay_ms, 500);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<GameConfig, _> = serializer.deserialize("mode: pvc\nlevel: expert\n");
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_session_settings_require_mode() {
        let config = GameConfig::default();
        assert!(matches!(
            config.session_settings(),
            Err(ConfigError::MissingField("mode"))
        ));
    }

    #[test]
    fn test_session_settings_require_level_for_pvc() {
        let config = GameConfig {
            mode: Some(GameMode::PlayerVsComputer),
            ..GameConfig::default()
        };
        assert!(matches!(
            config.session_settings(),
            Err(ConfigError::MissingField("level"))
        ));
    }

    #[test]
    fn test_session_settings_pvp_ignores_level() {
        let config = GameConfig {
            mode: Some(GameMode::PlayerVsPlayer),
            level: Some(Difficulty::Easy),
            ..GameConfig::default()
        };
        assert_eq!(
            config.session_settings().unwrap(),
            SessionSettings::player_vs_player()
        );
        assert_eq!(
            pvc_hard().session_settings().unwrap(),
            SessionSettings::player_vs_computer(Difficulty::Hard)
        );
    }

    #[test]
    fn test_validation_limits_delay() {
        let config = GameConfig {
            thinking_delay_ms: 60_000,
            ..pvc_hard()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
        assert!(pvc_hard().validate().is_ok());
    }

    #[test]
    fn test_config_round_trips_through_file() {
        let serializer = YamlConfigSerializer::new();
        let content_provider = FileContentConfigProvider::new(get_temp_file_path());

        let serialized = serializer.serialize(&pvc_hard()).unwrap();
        content_provider.set_config_content(&serialized).unwrap();

        let read_string = content_provider.get_config_content().unwrap().unwrap();
        let config: GameConfig = serializer.deserialize(&read_string).unwrap();
        assert_eq!(config, pvc_hard());
    }

    #[test]
    fn test_manager_missing_file_is_error() {
        let manager: ConfigManager<_, GameConfig> =
            ConfigManager::from_yaml_file(get_temp_file_path());
        assert!(matches!(manager.get_config(), Err(ConfigError::Missing(_))));
    }

    #[test]
    fn test_manager_saves_and_caches() {
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, GameConfig> = ConfigManager::from_yaml_file(&file_path);

        manager.set_config(&pvc_hard()).unwrap();
        assert_eq!(manager.get_config().unwrap(), pvc_hard());

        std::fs::remove_file(&file_path).unwrap();
        assert_eq!(manager.get_config().unwrap(), pvc_hard());
    }

    #[test]
    fn test_manager_refuses_invalid_config() {
        let manager: ConfigManager<_, GameConfig> =
            ConfigManager::from_yaml_file(get_temp_file_path());
        let config = GameConfig {
            thinking_delay_ms: u64::MAX,
            ..pvc_hard()
        };
        assert!(manager.set_config(&config).is_err());
        assert!(matches!(manager.get_config(), Err(ConfigError::Missing(_))));
    }
}
