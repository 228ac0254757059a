//! Game configuration.
//!
//! Every field has a default, so a partial JSON document (or none at all) is
//! enough to build a game.

use serde::{Deserialize, Serialize};

use crate::board::MAX_BOARD_SIDE;
use crate::error::ConfigError;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, LINES_PER_LEVEL, MAX_SHAPE_SIZE, START_LEVEL};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in cells
    pub width: usize,
    /// Board height in cells
    pub height: usize,
    /// Level of a fresh game
    pub start_level: u32,
    /// Cleared lines needed per level
    pub lines_per_level: u32,
    /// Piece generator seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            start_level: START_LEVEL,
            lines_per_level: LINES_PER_LEVEL,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Reject values that indicate a programming or config mistake.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.width, self.height);
        if width < MAX_SHAPE_SIZE || height < MAX_SHAPE_SIZE {
            return Err(ConfigError::BoardTooSmall { width, height });
        }
        if width > MAX_BOARD_SIDE || height > MAX_BOARD_SIDE {
            return Err(ConfigError::BoardTooLarge { width, height });
        }
        if self.start_level == 0 {
            return Err(ConfigError::ZeroStartLevel);
        }
        if self.lines_per_level == 0 {
            return Err(ConfigError::ZeroLinesPerLevel);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = GameConfig::default().with_size(0, 20);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::BoardTooSmall { width: 0, height: 20 })
        );

        let cfg = GameConfig {
            start_level: 0,
            ..GameConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroStartLevel));

        let cfg = GameConfig {
            lines_per_level: 0,
            ..GameConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroLinesPerLevel));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: GameConfig = serde_json::from_str(r#"{"seed": 7, "height": 24}"#).unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.height, 24);
        assert_eq!(cfg.width, BOARD_WIDTH);
        assert_eq!(cfg.start_level, START_LEVEL);
    }
}
