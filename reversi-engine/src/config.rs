//! Engine configuration, loadable from TOML.

use crate::board::{Engine, EngineError};
use crate::game::Player;
use crate::DEFAULT_EDGE_LENGTH;
use derive_more::{Display, Error, From};
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    #[display(fmt = "failed to parse TOML: {}", _0)]
    TomlParse(#[error(source)] toml::de::Error),

    #[display(fmt = "config validation error: {}", _0)]
    Validation(#[error(source)] EngineError),
}

/// The starting conditions of a game.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub starting_player: Player,
    pub width: usize,
    pub height: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            starting_player: Player::default(),
            width: DEFAULT_EDGE_LENGTH,
            height: DEFAULT_EDGE_LENGTH,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a configuration from TOML text.
    /// Missing keys take their default values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that an engine can be built from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Engine::from_config(self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn full_config() {
        let config = EngineConfig::from_toml_str(
            "starting_player = 2\nwidth = 10\nheight = 6\n",
        )
        .unwrap();
        assert_eq!(config.starting_player, Player::Player2);
        assert_eq!((config.width, config.height), (10, 6));

        let engine = Engine::from_config(&config).unwrap();
        assert_eq!(engine.next_mover(), Player::Player2);
        assert_eq!((engine.width(), engine.height()), (10, 6));
    }

    #[test]
    fn invalid_player_rejected() {
        assert!(matches!(
            EngineConfig::from_toml_str("starting_player = 3"),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn odd_width_rejected() {
        let err = EngineConfig::from_toml_str("width = 7").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation(EngineError::InvalidDimensions {
                width: 7,
                height: 8
            })
        ));
        assert_eq!(
            err.to_string(),
            "config validation error: invalid board size 7x8, \
             both edges must be even and at least 2"
        );
    }
}
