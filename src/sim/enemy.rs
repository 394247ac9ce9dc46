//! Enemy motion
//!
//! Jump timers for jumping enemies live in a side table keyed by enemy id,
//! owned by the `EnemySystem` of one playthrough.

use std::collections::HashMap;

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{Enemy, EnemyKind, IdGenerator};
use crate::config::GameConfig;
use crate::consts::{CULL_MARGIN_LEFT, ENEMY_ACTIVE_MARGIN_RIGHT, ENEMY_GRAVITY_FACTOR};
use crate::levels::EnemySpawn;

/// Per-playthrough enemy state outside the entities themselves
#[derive(Debug, Clone, Default)]
pub struct EnemySystem {
    /// Frames each jumping enemy has rested on its base line
    jump_timers: HashMap<u32, u32>,
}

impl EnemySystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiate live enemies from level spawns, assigning ids and rewards
    pub fn spawn_all<R: RandomSource>(
        spawns: &[EnemySpawn],
        ids: &mut IdGenerator,
        config: &GameConfig,
        rng: &mut R,
    ) -> Vec<Enemy> {
        spawns
            .iter()
            .map(|spawn| Enemy {
                id: ids.next_id(),
                kind: spawn.kind,
                pos: spawn.pos,
                width: spawn.width,
                height: spawn.height,
                vel: Vec2::new(spawn.vx, 0.0),
                base_y: spawn.pos.y,
                color: spawn.color.clone(),
                dead: false,
                coin_drop: rng.range_inclusive(config.enemy_coin_drop_min, config.enemy_coin_drop_max),
            })
            .collect()
    }

    /// Frames the given enemy has rested since its last jump
    pub fn jump_timer(&self, enemy_id: u32) -> u32 {
        self.jump_timers.get(&enemy_id).copied().unwrap_or(0)
    }

    /// Advance one enemy by one frame
    pub fn update_enemy(&mut self, enemy: &mut Enemy, camera_x: f32, config: &GameConfig) {
        if enemy.dead {
            return;
        }

        match enemy.kind {
            EnemyKind::Static => {}
            EnemyKind::Moving => {
                let screen_x = enemy.pos.x - camera_x;
                if screen_x > -CULL_MARGIN_LEFT && screen_x < config.canvas_width + ENEMY_ACTIVE_MARGIN_RIGHT {
                    enemy.pos.x += enemy.vel.x;
                }
            }
            EnemyKind::Jumping => {
                enemy.vel.y += config.gravity * ENEMY_GRAVITY_FACTOR;
                enemy.pos.y += enemy.vel.y;

                if enemy.pos.y >= enemy.base_y {
                    enemy.pos.y = enemy.base_y;
                    enemy.vel.y = 0.0;

                    let timer = self.jump_timers.entry(enemy.id).or_insert(0);
                    *timer += 1;
                    if *timer >= config.enemy_jump_interval {
                        *timer = 0;
                        enemy.vel.y = config.enemy_jump_force;
                    }
                }
            }
        }
    }

    /// Advance every enemy by one frame
    pub fn update(&mut self, enemies: &mut [Enemy], camera_x: f32, config: &GameConfig) {
        for enemy in enemies.iter_mut() {
            self.update_enemy(enemy, camera_x, config);
        }
    }

    /// Drop timers (on retry)
    pub fn reset(&mut self) {
        self.jump_timers.clear();
    }
}
