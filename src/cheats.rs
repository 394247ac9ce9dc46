//! Cheat / modifier toggles
//!
//! Owned by the host UI and handed to the orchestrator every frame.

use serde::{Deserialize, Serialize};

/// Active modifiers for a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheatSet {
    /// 2x scroll speed
    pub speed_boost: bool,
    /// 0.5x scroll speed (overrides speed boost)
    pub slow_motion: bool,
    /// Pin the player above the ground with no vertical velocity
    pub float: bool,
    /// 2x player size
    pub big_player: bool,
    /// 0.5x player size (overrides big player)
    pub small_player: bool,
    /// Ignore all lethal contacts
    pub invincible: bool,
    /// Pass through spikes and enemies
    pub ghost_mode: bool,
    /// Jump whenever grounded
    pub auto_jump: bool,
    /// Any enemy contact kills the enemy
    pub auto_enemy_killer: bool,
    /// Ground coins are worth ten
    pub ten_x_coins: bool,
    /// Dropped coins home in immediately
    pub magnet_power: bool,
}

impl CheatSet {
    /// Scroll speed multiplier
    pub fn speed_modifier(&self) -> f32 {
        if self.slow_motion {
            0.5
        } else if self.speed_boost {
            2.0
        } else {
            1.0
        }
    }

    /// Player size multiplier
    pub fn size_multiplier(&self) -> f32 {
        if self.small_player {
            0.5
        } else if self.big_player {
            2.0
        } else {
            1.0
        }
    }

    /// Whether lethal contacts are ignored entirely
    pub fn suppresses_death(&self) -> bool {
        self.invincible || self.ghost_mode
    }
}
