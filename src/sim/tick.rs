//! Frame orchestrator
//!
//! A `Playthrough` owns every mutable entity of one attempt at a level and
//! advances them one frame at a time in a fixed order:
//!
//! 1. jump request (orb jump if the orb was touched last frame, else ground jump)
//! 2. camera scroll
//! 3. float and size modifiers
//! 4. player kinematics, then auto-jump
//! 5. enemy motion, then enemy collisions
//! 6. dropped coins and their pickup
//! 7. static obstacle collisions
//! 8. trail
//! 9. particles (these keep running after death or completion)
//! 10. progress and the win test

use std::sync::Arc;

use rand_pcg::Pcg32;
use serde::Serialize;

use super::coins::{burst, update_dropped_coins};
use super::collision::{EnemyContact, ObstacleContact, collide_enemies, collide_obstacles, dropped_coin_hit};
use super::enemy::EnemySystem;
use super::particles::{enemy_death_burst, player_death_burst, trail_particle, update_particles};
use super::rng::{RandomSource, from_entropy};
use super::state::{
    CoinSource, DeathCause, DroppedCoin, Enemy, GameEvent, GamePhase, IdGenerator, JumpSource, Obstacle, Particle,
    Player,
};
use crate::DEFAULT_TRAIL_COLOR;
use crate::cheats::CheatSet;
use crate::config::GameConfig;
use crate::consts::*;
use crate::levels::Level;
use crate::stats::RunStats;

/// Host input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Jump pressed since the last frame
    pub jump: bool,
    pub cheats: CheatSet,
}

/// One attempt (and its retries) at a level
#[derive(Debug, Clone)]
pub struct Playthrough<R: RandomSource = Pcg32> {
    pub player: Player,
    /// Horizontal scroll offset in world units
    pub camera_x: f32,
    /// Private copy of the level's obstacles
    pub obstacles: Vec<Obstacle>,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    pub dropped_coins: Vec<DroppedCoin>,
    pub phase: GamePhase,
    pub stats: RunStats,
    /// Set while the player overlapped a jump orb on the last frame
    pub orb_active: bool,
    /// Frames simulated this attempt
    pub frame: u64,
    level: Arc<Level>,
    config: GameConfig,
    enemy_system: EnemySystem,
    enemy_ids: IdGenerator,
    coin_ids: IdGenerator,
    trail_color: String,
    rng: R,
}

/// Borrowed view of everything a renderer draws
#[derive(Debug, Serialize)]
pub struct FrameSnapshot<'a> {
    pub player: &'a Player,
    pub camera_x: f32,
    pub obstacles: &'a [Obstacle],
    pub enemies: &'a [Enemy],
    pub particles: &'a [Particle],
    pub dropped_coins: &'a [DroppedCoin],
    pub phase: GamePhase,
    pub stats: &'a RunStats,
    pub orb_active: bool,
}

impl Playthrough<Pcg32> {
    /// Start a playthrough with a freshly seeded generator
    pub fn with_entropy(level: Arc<Level>, config: GameConfig) -> Self {
        let (rng, seed) = from_entropy();
        log::info!("Seeding playthrough of level {} with {seed:#018x}", level.id);
        Self::new(level, config, rng)
    }
}

impl<R: RandomSource> Playthrough<R> {
    pub fn new(level: Arc<Level>, config: GameConfig, mut rng: R) -> Self {
        let mut enemy_ids = IdGenerator::default();
        let enemies = EnemySystem::spawn_all(&level.enemies, &mut enemy_ids, &config, &mut rng);
        log::info!(
            "Starting level {} \"{}\" ({} obstacles, {} enemies, length {})",
            level.id,
            level.name,
            level.obstacles.len(),
            enemies.len(),
            level.length
        );

        Self {
            player: Player::new(&config),
            camera_x: 0.0,
            obstacles: level.obstacles.clone(),
            enemies,
            particles: Vec::new(),
            dropped_coins: Vec::new(),
            phase: GamePhase::Playing,
            stats: RunStats::new(),
            orb_active: false,
            frame: 0,
            level,
            config,
            enemy_system: EnemySystem::new(),
            enemy_ids,
            coin_ids: IdGenerator::default(),
            trail_color: DEFAULT_TRAIL_COLOR.to_string(),
            rng,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn enemy_system(&self) -> &EnemySystem {
        &self.enemy_system
    }

    /// Color of trail particles (the active skin)
    pub fn set_trail_color(&mut self, color: impl Into<String>) {
        self.trail_color = color.into();
    }

    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            player: &self.player,
            camera_x: self.camera_x,
            obstacles: &self.obstacles,
            enemies: &self.enemies,
            particles: &self.particles,
            dropped_coins: &self.dropped_coins,
            phase: self.phase,
            stats: &self.stats,
            orb_active: self.orb_active,
        }
    }

    /// Advance one frame and return the gameplay events it produced
    pub fn step(&mut self, input: &FrameInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase == GamePhase::Playing {
            self.frame += 1;
            self.simulate(input, &mut events);
        }
        update_particles(&mut self.particles);
        if self.phase == GamePhase::Playing {
            self.check_completion(&mut events);
        }
        events
    }

    /// Restart from the level template, keeping session statistics
    pub fn retry(&mut self) {
        self.player = Player::new(&self.config);
        self.camera_x = 0.0;
        self.obstacles = self.level.obstacles.clone();
        self.enemy_ids = IdGenerator::default();
        self.coin_ids = IdGenerator::default();
        self.enemy_system.reset();
        self.enemies = EnemySystem::spawn_all(&self.level.enemies, &mut self.enemy_ids, &self.config, &mut self.rng);
        self.particles.clear();
        self.dropped_coins.clear();
        self.phase = GamePhase::Playing;
        self.orb_active = false;
        self.frame = 0;
        self.stats.start_attempt();
        log::info!("Retrying level {} (attempt {})", self.level.id, self.stats.attempts);
    }

    fn simulate(&mut self, input: &FrameInput, events: &mut Vec<GameEvent>) {
        let cheats = input.cheats;

        if input.jump {
            self.handle_jump(events);
        }

        self.camera_x += self.config.player_speed * cheats.speed_modifier();

        if cheats.float {
            self.player.vy = 0.0;
            self.player.pos.y = self.config.ground_top() - self.config.player_size - FLOAT_HEIGHT;
        }
        let size = self.config.player_size * cheats.size_multiplier();
        self.player.width = size;
        self.player.height = size;

        self.player.advance(&self.config);

        if cheats.auto_jump && self.player.is_on_ground(&self.config) {
            self.player.jump(&self.config, None);
            events.push(GameEvent::Jumped {
                source: JumpSource::AutoJump,
            });
        }

        self.enemy_system.update(&mut self.enemies, self.camera_x, &self.config);
        if !cheats.suppresses_death() {
            self.resolve_enemies(&cheats, events);
            if self.phase != GamePhase::Playing {
                return;
            }
        }

        update_dropped_coins(&mut self.dropped_coins, &self.player, &self.config, cheats.magnet_power);
        for coin in self.dropped_coins.iter_mut() {
            if dropped_coin_hit(&self.player, coin) {
                coin.collected = true;
                self.stats.coins_collected += 1;
                events.push(GameEvent::CoinCollected {
                    amount: 1,
                    source: CoinSource::Dropped,
                });
            }
        }

        self.resolve_obstacles(&cheats, events);
        if self.phase != GamePhase::Playing {
            return;
        }

        if self.frame % TRAIL_INTERVAL == 0 {
            let trail = trail_particle(&self.player, &self.trail_color, &mut self.rng);
            self.particles.push(trail);
        }
    }

    fn check_completion(&mut self, events: &mut Vec<GameEvent>) {
        self.stats.record_progress(self.camera_x / self.level.length);
        if self.camera_x >= self.level.length {
            self.phase = GamePhase::Won;
            log::info!(
                "Level {} complete after {} frames with {} coins",
                self.level.id,
                self.frame,
                self.stats.coins_collected
            );
            events.push(GameEvent::LevelComplete {
                level_id: self.level.id,
                coins_collected: self.stats.coins_collected,
            });
        }
    }

    fn handle_jump(&mut self, events: &mut Vec<GameEvent>) {
        let on_ground = self.player.is_on_ground(&self.config);
        if self.orb_active && !on_ground {
            self.player.jump(&self.config, Some(self.config.jump_force * JUMP_ORB_MULTIPLIER));
            self.orb_active = false;
            events.push(GameEvent::Jumped { source: JumpSource::Orb });
        } else if on_ground {
            self.player.jump(&self.config, None);
            events.push(GameEvent::Jumped {
                source: JumpSource::Ground,
            });
        }
    }

    fn resolve_enemies(&mut self, cheats: &CheatSet, events: &mut Vec<GameEvent>) {
        let hits = collide_enemies(&self.player, &self.enemies, self.camera_x, self.config.canvas_width);

        for hit in hits {
            let contact = if cheats.auto_enemy_killer {
                EnemyContact::Stomp
            } else {
                hit.contact
            };
            let enemy = &mut self.enemies[hit.index];

            match contact {
                EnemyContact::Stomp => {
                    enemy.dead = true;
                    self.particles
                        .extend(enemy_death_burst(enemy, self.camera_x, &mut self.rng));
                    let coins = burst(enemy, self.camera_x, &mut self.coin_ids, &mut self.rng);
                    log::debug!("Stomped enemy {} for {} coins", enemy.id, coins.len());
                    events.push(GameEvent::EnemyStomped {
                        enemy_id: enemy.id,
                        coins_dropped: coins.len(),
                    });
                    self.dropped_coins.extend(coins);

                    self.player
                        .jump(&self.config, Some(self.config.jump_force * STOMP_BOUNCE_MULTIPLIER));
                    events.push(GameEvent::Jumped {
                        source: JumpSource::Stomp,
                    });
                }
                EnemyContact::Death => {
                    let cause = DeathCause::Enemy { enemy_id: enemy.id };
                    self.kill_player(cause, events);
                    return;
                }
            }
        }
    }

    fn resolve_obstacles(&mut self, cheats: &CheatSet, events: &mut Vec<GameEvent>) {
        let hits = collide_obstacles(&self.player, &self.obstacles, self.camera_x, self.config.canvas_width);
        self.orb_active = false;

        for hit in hits {
            match hit.contact {
                ObstacleContact::Death => {
                    if cheats.suppresses_death() {
                        continue;
                    }
                    self.kill_player(DeathCause::Spike, events);
                    return;
                }
                ObstacleContact::Coin => {
                    let obstacle = &mut self.obstacles[hit.index];
                    if obstacle.collected {
                        continue;
                    }
                    obstacle.collected = true;
                    let amount = if cheats.ten_x_coins { TEN_X_COIN_VALUE } else { 1 };
                    self.stats.coins_collected += amount;
                    log::debug!("Collected coin {} worth {amount}", hit.index);
                    events.push(GameEvent::CoinCollected {
                        amount,
                        source: CoinSource::Ground,
                    });
                }
                ObstacleContact::JumpPad => {
                    self.player
                        .jump(&self.config, Some(self.config.jump_force * JUMP_PAD_MULTIPLIER));
                    log::debug!("Jump pad {} at camera {}", hit.index, self.camera_x);
                    events.push(GameEvent::Jumped { source: JumpSource::Pad });
                }
                ObstacleContact::JumpOrb => {
                    self.orb_active = true;
                }
            }
        }
    }

    fn kill_player(&mut self, cause: DeathCause, events: &mut Vec<GameEvent>) {
        self.player.dead = true;
        self.phase = GamePhase::Dead;
        self.particles
            .extend(player_death_burst(&self.player, &mut self.rng));
        log::info!(
            "Player died ({cause:?}) at {}% on attempt {}",
            self.stats.percent(),
            self.stats.attempts
        );
        events.push(GameEvent::PlayerDied { cause });
    }
}
