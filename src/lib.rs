//! Dash Sim - gameplay core of a side-scrolling rhythm platformer
//!
//! Core modules:
//! - `sim`: Per-frame simulation (kinematics, collisions, enemies, coins, particles)
//! - `config`: Host-supplied game configuration
//! - `cheats`: Modifier toggles applied by the orchestrator
//! - `levels`: Level templates and built-in levels
//! - `stats`: Per-run statistics (attempts, progress, coins)
//! - `platform`: Logging setup and the browser facade

pub mod cheats;
pub mod config;
pub mod error;
pub mod levels;
pub mod platform;
pub mod sim;
pub mod stats;

pub use cheats::CheatSet;
pub use config::GameConfig;
pub use error::{ConfigError, LevelError};
pub use levels::{EnemySpawn, Level};
pub use stats::RunStats;

/// Simulation tuning constants
pub mod consts {
    /// Fixed screen-space x of the player
    pub const PLAYER_START_X: f32 = 100.0;

    /// Rotation added per airborne frame (degrees)
    pub const AIR_ROTATION_STEP: f32 = 5.0;
    /// Landing snaps rotation to a multiple of this (degrees)
    pub const ROTATION_SNAP: f32 = 90.0;

    /// Jump multipliers relative to `GameConfig::jump_force`
    pub const JUMP_PAD_MULTIPLIER: f32 = 1.5;
    pub const JUMP_ORB_MULTIPLIER: f32 = 1.2;
    pub const STOMP_BOUNCE_MULTIPLIER: f32 = 0.7;

    /// Player hitbox inset per side against static obstacles
    pub const OBSTACLE_PLAYER_INSET: f32 = 10.0;
    /// Player hitbox inset per side against enemies
    pub const ENEMY_PLAYER_INSET: f32 = 8.0;
    /// Enemy hitbox inset per side
    pub const ENEMY_INSET: f32 = 5.0;
    /// Player bottom within this top fraction of an enemy counts as a stomp
    pub const STOMP_BAND: f32 = 0.7;

    /// Off-screen culling margins for collision and moving enemies
    pub const CULL_MARGIN_LEFT: f32 = 100.0;
    pub const CULL_MARGIN_RIGHT: f32 = 100.0;
    pub const ENEMY_ACTIVE_MARGIN_RIGHT: f32 = 200.0;

    /// Jumping enemies fall with this fraction of world gravity
    pub const ENEMY_GRAVITY_FACTOR: f32 = 0.7;

    /// Dropped coin tuning
    pub const DROPPED_COIN_LIFE: u32 = 360;
    pub const DROPPED_COIN_SPREAD_FRAMES: u32 = 60;
    pub const DROPPED_COIN_MIN_BURST: usize = 3;
    pub const DROPPED_COIN_GRAVITY_FACTOR: f32 = 0.6;
    pub const DROPPED_COIN_DRAG: f32 = 0.99;
    pub const DROPPED_COIN_BOUNCE: f32 = 0.5;
    pub const DROPPED_COIN_GROUND_FRICTION: f32 = 0.8;
    /// Coins rest this far above the ground band
    pub const DROPPED_COIN_GROUND_OFFSET: f32 = 15.0;
    pub const DROPPED_COIN_WALL_MARGIN: f32 = 10.0;
    pub const DROPPED_COIN_POP: f32 = -5.0;
    pub const DROPPED_COIN_MIN_SPEED: f32 = 6.0;
    pub const DROPPED_COIN_MAX_SPEED: f32 = 10.0;
    pub const DROPPED_COIN_JITTER: f32 = 0.5;
    pub const MAGNET_BASE_STRENGTH: f32 = 0.3;
    pub const MAGNET_STRENGTH_PER_FRAME: f32 = 0.01;
    /// Pull used by the super magnet cheat
    pub const MAGNET_POWER_STRENGTH: f32 = 2.0;
    pub const MAGNET_MAX_SPEED: f32 = 15.0;
    pub const DROPPED_COIN_RADIUS: f32 = 12.0;
    pub const DROPPED_COIN_PLAYER_INSET: f32 = 5.0;

    /// Particle tuning
    pub const PARTICLE_GRAVITY: f32 = 0.2;
    pub const PARTICLE_SHRINK: f32 = 0.97;
    pub const PLAYER_DEATH_PARTICLES: usize = 20;
    pub const PLAYER_DEATH_LIFE: u32 = 60;
    pub const ENEMY_DEATH_PARTICLES: usize = 15;
    pub const ENEMY_DEATH_LIFE: u32 = 40;
    pub const TRAIL_LIFE: u32 = 20;
    /// A trail particle is emitted every N playing frames
    pub const TRAIL_INTERVAL: u64 = 3;

    /// Float cheat pins the player this far above the ground
    pub const FLOAT_HEIGHT: f32 = 50.0;
    /// Ground coin value under the 10x cheat
    pub const TEN_X_COIN_VALUE: u32 = 10;
}

/// Player death burst colors
pub const PLAYER_PALETTE: [&str; 4] = ["#00ff88", "#00ffcc", "#ffffff", "#88ff00"];

/// Default trail color (glow of the starter skin)
pub const DEFAULT_TRAIL_COLOR: &str = "#00ff88";
