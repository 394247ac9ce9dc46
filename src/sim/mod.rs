//! Per-frame simulation module
//!
//! All gameplay logic lives here. Nothing in this module renders, plays
//! audio or persists anything:
//! - One `Playthrough::step` per animation frame
//! - Randomness only through `RandomSource`
//! - Level templates are cloned, never mutated

pub mod coins;
pub mod collision;
pub mod enemy;
pub mod geometry;
pub mod particles;
pub mod player;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{
    EnemyContact, EnemyHit, ObstacleContact, ObstacleHit, classify_enemy, classify_obstacle, collide_enemies,
    collide_obstacles, dropped_coin_hit,
};
pub use enemy::EnemySystem;
pub use geometry::Rect;
pub use rng::RandomSource;
pub use state::{
    CoinSource, DeathCause, DroppedCoin, Enemy, EnemyKind, GameEvent, GamePhase, IdGenerator, JumpSource, Obstacle,
    ObstacleKind, Particle, Player,
};
pub use tick::{FrameInput, FrameSnapshot, Playthrough};
