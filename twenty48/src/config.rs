use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// The board dimension used when nothing else is configured.
pub const DEFAULT_SIZE: usize = 4;

/// The largest supported board dimension.
pub const MAX_SIZE: usize = 64;

/// Everything that is fixed for the lifetime of a [`Board`](crate::Board).
///
/// All fields have defaults, so a config file only needs to mention what it changes:
/// ```
/// # use twenty48::{GameConfig, RareTileValue};
/// let config: GameConfig = serde_json::from_str(r#"{ "spawn": { "rare_value": { "fixed": 4 } } }"#).unwrap();
/// assert_eq!(config.size, 4);
/// assert_eq!(config.spawn.rare_value, RareTileValue::Fixed(4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// The number of rows, which is also the number of columns.
    pub size: usize,
    pub spawn: SpawnPolicy,
}

/// Which values newly spawned tiles get.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnPolicy {
    /// The value of the usual tile.
    pub common_value: u32,
    /// The value of the occasional tile.
    pub rare_value: RareTileValue,
    /// How likely it is that a spawned tile gets the rare value.
    pub rare_probability: f64,
}

/// The value of the rare spawned tile.
///
/// `GridSize` uses the board dimension, so a 4x4 board spawns 4s and a 5x5 board
/// spawns 5s. `Fixed` always spawns the given value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RareTileValue {
    #[default]
    GridSize,
    Fixed(u32),
}

impl RareTileValue {
    pub fn resolve(self, size: usize) -> u32 {
        match self {
            RareTileValue::GridSize => u32::try_from(size).unwrap_or(u32::MAX),
            RareTileValue::Fixed(value) => value,
        }
    }
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        Self {
            common_value: 2,
            rare_value: RareTileValue::GridSize,
            rare_probability: 0.1,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            spawn: SpawnPolicy::default(),
        }
    }
}

impl GameConfig {
    /// A default config for a board of the given size.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 2 {
            return Err(ConfigError::SizeTooSmall { size: self.size });
        }
        if self.size > MAX_SIZE {
            return Err(ConfigError::SizeTooLarge { size: self.size });
        }
        for value in [
            self.spawn.common_value,
            self.spawn.rare_value.resolve(self.size),
        ] {
            if value < 2 {
                return Err(ConfigError::TileValueTooSmall { value });
            }
        }
        let probability = self.spawn.rare_probability;
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigError::ProbabilityOutOfRange { probability });
        }
        Ok(())
    }

    /// Reads a JSON config file and validates it.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file '{}'", path.display()))?;
        let config: GameConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Could not parse config file '{}'", path.display()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rare_value_follows_the_grid_size_by_default() {
        let config = GameConfig::with_size(5);
        assert_eq!(config.spawn.rare_value.resolve(config.size), 5);
        assert_eq!(RareTileValue::Fixed(4).resolve(5), 4);
    }

    #[test]
    fn validation() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
        assert_eq!(
            GameConfig::with_size(1).validate(),
            Err(ConfigError::SizeTooSmall { size: 1 })
        );

        assert_eq!(GameConfig::with_size(MAX_SIZE).validate(), Ok(()));
        assert_eq!(
            GameConfig::with_size(MAX_SIZE + 1).validate(),
            Err(ConfigError::SizeTooLarge { size: MAX_SIZE + 1 })
        );
        assert_eq!(
            GameConfig::with_size(usize::MAX).validate(),
            Err(ConfigError::SizeTooLarge { size: usize::MAX })
        );

        let mut config = GameConfig::default();
        config.spawn.rare_value = RareTileValue::Fixed(1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TileValueTooSmall { value: 1 })
        );

        let mut config = GameConfig::default();
        config.spawn.rare_probability = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ProbabilityOutOfRange { .. })
        ));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "size": 6 }"#).unwrap();
        assert_eq!(config.size, 6);
        assert_eq!(config.spawn, SpawnPolicy::default());

        let config: GameConfig =
            serde_json::from_str(r#"{ "spawn": { "rare_value": "grid_size" } }"#).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn load_classic_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../configs/classic.json");
        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.spawn.rare_value, RareTileValue::Fixed(4));
        assert_eq!(config.size, 4);
    }

    #[test]
    fn load_reports_missing_files() {
        let err = GameConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Could not read config file"));
    }
}
