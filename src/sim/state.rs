//! Simulation entities and events
//!
//! Positions are screen-space for the player, particles and dropped coins;
//! obstacles and enemies are in world space and shifted by `-camera_x`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::config::GameConfig;
use crate::consts::PLAYER_START_X;

/// Current phase of a playthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Dead,
    Won,
}

/// The player cube
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vy: f32,
    /// Cosmetic rotation in degrees
    pub rotation: f32,
    pub airborne: bool,
    pub dead: bool,
    pub width: f32,
    pub height: f32,
}

impl Player {
    /// Player resting on the ground at the start x
    pub fn new(config: &GameConfig) -> Self {
        let size = config.player_size;
        Self {
            pos: Vec2::new(PLAYER_START_X, config.ground_top() - size),
            vy: 0.0,
            rotation: 0.0,
            airborne: false,
            dead: false,
            width: size,
            height: size,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}

/// Static obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObstacleKind {
    Spike,
    JumpPad,
    JumpOrb,
    Coin,
    /// Reserved; never collides
    Portal,
}

/// A piece of static level geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// World-space top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Coins only; set once per attempt
    #[serde(default)]
    pub collected: bool,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            kind,
            pos: Vec2::new(x, y),
            width,
            height,
            collected: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// Enemy ("quant") behaviours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnemyKind {
    Static,
    Moving,
    Jumping,
}

/// A live enemy instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    /// World-space top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub vel: Vec2,
    /// Rest altitude for jumping enemies
    pub base_y: f32,
    pub color: String,
    pub dead: bool,
    /// Coins dropped when stomped
    pub coin_drop: u32,
}

impl Enemy {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Bounds shifted into screen space
    pub fn screen_bounds(&self, camera_x: f32) -> Rect {
        self.bounds().shifted_x(-camera_x)
    }
}

/// A cosmetic particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: String,
    /// Frames remaining
    pub life: u32,
    pub max_life: u32,
}

/// A coin dropped by a stomped enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroppedCoin {
    pub id: u32,
    /// Screen-space center
    pub pos: Vec2,
    pub vel: Vec2,
    pub collected: bool,
    /// Frames remaining
    pub life: u32,
}

/// Monotonic id allocator, one per entity family per playthrough
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u32,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdGenerator {
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// What launched the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpSource {
    Ground,
    Orb,
    Pad,
    Stomp,
    AutoJump,
}

/// Where a collected coin came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinSource {
    Ground,
    Dropped,
}

/// What killed the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Spike,
    Enemy { enemy_id: u32 },
}

/// Gameplay events emitted by a frame, consumed by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped { source: JumpSource },
    CoinCollected { amount: u32, source: CoinSource },
    EnemyStomped { enemy_id: u32, coins_dropped: usize },
    PlayerDied { cause: DeathCause },
    LevelComplete { level_id: u32, coins_collected: u32 },
}
