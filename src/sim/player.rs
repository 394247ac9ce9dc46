//! Player kinematics
//!
//! Vertical integration with ground and ceiling clamping. Horizontal motion
//! is the camera's job; the player stays at a fixed screen x.

use super::state::Player;
use crate::config::GameConfig;
use crate::consts::{AIR_ROTATION_STEP, ROTATION_SNAP};

impl Player {
    /// Resting y for the player's current height
    #[inline]
    pub fn ground_y(&self, config: &GameConfig) -> f32 {
        config.ground_top() - self.height
    }

    /// Advance one frame of gravity
    pub fn advance(&mut self, config: &GameConfig) {
        self.vy += config.gravity;
        self.pos.y += self.vy;

        let ground_y = self.ground_y(config);
        if self.pos.y >= ground_y {
            self.pos.y = ground_y;
            self.vy = 0.0;
            self.airborne = false;
            self.rotation = (self.rotation / ROTATION_SNAP).round() * ROTATION_SNAP;
        } else {
            self.rotation += AIR_ROTATION_STEP;
        }

        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vy = 0.0;
        }
    }

    /// Launch upward with `force`, or the configured jump force
    pub fn jump(&mut self, config: &GameConfig, force: Option<f32>) {
        self.vy = force.unwrap_or(config.jump_force);
        self.airborne = true;
    }

    pub fn is_on_ground(&self, config: &GameConfig) -> bool {
        self.pos.y >= self.ground_y(config)
    }
}
