//! Game configuration
//!
//! Supplied once by the host when a playthrough starts and never mutated.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// World and tuning parameters for a playthrough
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Height of the ground band at the bottom of the canvas
    pub ground_height: f32,

    // === Player ===
    /// Downward acceleration per frame
    pub gravity: f32,
    /// Base jump impulse (negative is up)
    pub jump_force: f32,
    /// Horizontal scroll per frame
    pub player_speed: f32,
    /// Edge length of the player cube
    pub player_size: f32,

    // === Enemies ===
    /// Launch impulse for jumping enemies
    pub enemy_jump_force: f32,
    /// Frames a jumping enemy rests before relaunching
    pub enemy_jump_interval: u32,
    /// Inclusive range for the per-enemy coin reward
    pub enemy_coin_drop_min: u32,
    pub enemy_coin_drop_max: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1280.0,
            canvas_height: 720.0,
            ground_height: 100.0,

            gravity: 0.6,
            jump_force: -14.0,
            player_speed: 4.0,
            player_size: 50.0,

            enemy_jump_force: -10.0,
            enemy_jump_interval: 90,
            enemy_coin_drop_min: 2,
            enemy_coin_drop_max: 6,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width <= 0.0 || self.canvas_height <= 0.0 {
            return Err(ConfigError::NonPositiveCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if self.canvas_height <= self.ground_height + self.player_size {
            return Err(ConfigError::NoRoomForPlayer {
                canvas_height: self.canvas_height,
                ground_height: self.ground_height,
                player_size: self.player_size,
            });
        }
        if self.enemy_coin_drop_min > self.enemy_coin_drop_max {
            return Err(ConfigError::CoinDropRange {
                min: self.enemy_coin_drop_min,
                max: self.enemy_coin_drop_max,
            });
        }
        if self.enemy_jump_interval == 0 {
            return Err(ConfigError::ZeroJumpInterval);
        }
        Ok(())
    }

    /// Top of the ground band in screen space
    #[inline]
    pub fn ground_top(&self) -> f32 {
        self.canvas_height - self.ground_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "gravity": 0.8, "player_speed": 6 }"#).unwrap();
        assert_eq!(config.gravity, 0.8);
        assert_eq!(config.player_speed, 6.0);
        assert_eq!(config.canvas_width, 1280.0);
        assert_eq!(config.enemy_jump_interval, 90);
    }

    #[test]
    fn test_rejects_empty_coin_range() {
        let err = GameConfig::from_json(r#"{ "enemy_coin_drop_min": 9, "enemy_coin_drop_max": 2 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::CoinDropRange { min: 9, max: 2 }));
    }

    #[test]
    fn test_rejects_ground_taller_than_canvas() {
        let err = GameConfig::from_json(r#"{ "canvas_height": 120, "ground_height": 100 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::NoRoomForPlayer { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
