//! Level templates
//!
//! A `Level` is read-only once loaded; playthroughs share it behind an `Arc`
//! and work on private copies of its obstacles and enemies.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::LevelError;
use crate::sim::state::{EnemyKind, Obstacle, ObstacleKind};

/// Where and how an enemy appears when a playthrough starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub kind: EnemyKind,
    /// World-space top-left corner; also the rest altitude of jumpers
    pub pos: Vec2,
    #[serde(default = "default_enemy_size")]
    pub width: f32,
    #[serde(default = "default_enemy_size")]
    pub height: f32,
    /// Horizontal velocity for moving enemies
    #[serde(default)]
    pub vx: f32,
    #[serde(default = "default_enemy_color")]
    pub color: String,
}

fn default_enemy_size() -> f32 {
    40.0
}

fn default_enemy_color() -> String {
    "#ff3366".to_string()
}

impl EnemySpawn {
    pub fn new(kind: EnemyKind, x: f32, y: f32) -> Self {
        let (vx, color) = match kind {
            EnemyKind::Static => (0.0, "#ff3366"),
            EnemyKind::Moving => (-2.0, "#ff9900"),
            EnemyKind::Jumping => (0.0, "#cc33ff"),
        };
        Self {
            kind,
            pos: Vec2::new(x, y),
            width: default_enemy_size(),
            height: default_enemy_size(),
            vx,
            color: color.to_string(),
        }
    }
}

/// A level template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub id: u32,
    pub name: String,
    pub ground_color: String,
    pub background_color: String,
    /// Scroll distance that completes the level
    pub length: f32,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
    #[serde(default)]
    pub enemies: Vec<EnemySpawn>,
}

impl Level {
    /// Parse and validate a level document
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let level: Self = serde_json::from_str(json)?;
        if level.length <= 0.0 || !level.length.is_finite() {
            return Err(LevelError::NonPositiveLength {
                id: level.id,
                length: level.length,
            });
        }
        Ok(level)
    }

    pub fn coin_count(&self) -> usize {
        self.obstacles.iter().filter(|o| o.kind == ObstacleKind::Coin).count()
    }
}

/// Placement helpers in ground-relative coordinates
struct Builder<'a> {
    config: &'a GameConfig,
    obstacles: Vec<Obstacle>,
    enemies: Vec<EnemySpawn>,
}

impl<'a> Builder<'a> {
    fn new(config: &'a GameConfig) -> Self {
        Self {
            config,
            obstacles: Vec::new(),
            enemies: Vec::new(),
        }
    }

    fn ground(&self) -> f32 {
        self.config.ground_top()
    }

    fn spike(mut self, x: f32) -> Self {
        let y = self.ground() - 35.0;
        self.obstacles.push(Obstacle::new(ObstacleKind::Spike, x, y, 35.0, 35.0));
        self
    }

    fn pad(mut self, x: f32) -> Self {
        let y = self.ground() - 15.0;
        self.obstacles.push(Obstacle::new(ObstacleKind::JumpPad, x, y, 40.0, 15.0));
        self
    }

    /// Orb at `height` above the canvas bottom
    fn orb(mut self, x: f32, height: f32) -> Self {
        let y = self.config.canvas_height - height;
        self.obstacles.push(Obstacle::new(ObstacleKind::JumpOrb, x, y, 30.0, 30.0));
        self
    }

    fn coin(mut self, x: f32) -> Self {
        let y = self.ground() - 30.0;
        self.obstacles.push(Obstacle::new(ObstacleKind::Coin, x, y, 25.0, 25.0));
        self
    }

    fn enemy(mut self, kind: EnemyKind, x: f32) -> Self {
        let y = self.ground() - default_enemy_size();
        self.enemies.push(EnemySpawn::new(kind, x, y));
        self
    }

    fn build(self, id: u32, name: &str, ground_color: &str, background_color: &str, length: f32) -> Level {
        Level {
            id,
            name: name.to_string(),
            ground_color: ground_color.to_string(),
            background_color: background_color.to_string(),
            length,
            obstacles: self.obstacles,
            enemies: self.enemies,
        }
    }
}

fn stereo_madness(config: &GameConfig) -> Level {
    Builder::new(config)
        .coin(500.0)
        .spike(700.0)
        .coin(850.0)
        .spike(1000.0)
        .spike(1300.0)
        .enemy(EnemyKind::Static, 1600.0)
        .coin(1550.0)
        .spike(1850.0)
        .coin(2000.0)
        .pad(2100.0)
        .spike(2400.0)
        .coin(2650.0)
        .enemy(EnemyKind::Moving, 2900.0)
        .spike(3200.0)
        .coin(3350.0)
        .spike(3500.0)
        .spike(3800.0)
        .coin(3950.0)
        .spike(4100.0)
        .coin(4250.0)
        .spike(4400.0)
        .coin(4550.0)
        .spike(4700.0)
        .build(1, "Stereo Madness", "#1a1a2e", "#0f0f1a", 5000.0)
}

fn back_on_track(config: &GameConfig) -> Level {
    Builder::new(config)
        .coin(300.0)
        .spike(400.0)
        .coin(550.0)
        .spike(700.0)
        .spike(1150.0)
        .coin(1350.0)
        .coin(1600.0)
        .enemy(EnemyKind::Static, 1750.0)
        .spike(1900.0)
        .coin(2050.0)
        .pad(2150.0)
        .spike(2450.0)
        .coin(2600.0)
        .spike(2750.0)
        .coin(2900.0)
        .orb(3200.0, 200.0)
        .spike(3450.0)
        .coin(3600.0)
        .enemy(EnemyKind::Jumping, 3750.0)
        .spike(3900.0)
        .coin(4050.0)
        .spike(4200.0)
        .spike(4250.0)
        .coin(4450.0)
        .pad(4500.0)
        .spike(4900.0)
        .coin(5050.0)
        .spike(5200.0)
        .coin(5350.0)
        .spike(5500.0)
        .coin(5650.0)
        .spike(5800.0)
        .build(2, "Back on Track", "#2d132c", "#1a0a1a", 6000.0)
}

fn polargeist(config: &GameConfig) -> Level {
    Builder::new(config)
        .coin(300.0)
        .spike(400.0)
        .coin(550.0)
        .spike(700.0)
        .coin(850.0)
        .spike(1000.0)
        .enemy(EnemyKind::Moving, 1300.0)
        .spike(1500.0)
        .coin(1750.0)
        .spike(2050.0)
        .coin(2250.0)
        .spike(2550.0)
        .coin(2700.0)
        .pad(2800.0)
        .coin(2900.0)
        .spike(3200.0)
        .orb(3450.0, 150.0)
        .coin(3550.0)
        .spike(3700.0)
        .coin(3850.0)
        .spike(4000.0)
        .coin(4150.0)
        .enemy(EnemyKind::Jumping, 4300.0)
        .spike(4450.0)
        .coin(4650.0)
        .coin(4900.0)
        .coin(5150.0)
        .spike(5450.0)
        .coin(5600.0)
        .pad(5700.0)
        .spike(6000.0)
        .coin(6100.0)
        .spike(6250.0)
        .coin(6350.0)
        .spike(6500.0)
        .enemy(EnemyKind::Static, 6700.0)
        .spike(6850.0)
        .build(3, "Polargeist", "#0d3b66", "#051a33", 7000.0)
}

fn dry_out(config: &GameConfig) -> Level {
    Builder::new(config)
        .coin(300.0)
        .spike(400.0)
        .coin(550.0)
        .spike(650.0)
        .coin(800.0)
        .spike(900.0)
        .coin(1150.0)
        .spike(1350.0)
        .enemy(EnemyKind::Static, 1550.0)
        .spike(1750.0)
        .coin(1950.0)
        .coin(2150.0)
        .spike(2400.0)
        .spike(2450.0)
        .coin(2600.0)
        .pad(2700.0)
        .spike(2950.0)
        .coin(3050.0)
        .pad(3150.0)
        .coin(3250.0)
        .spike(3500.0)
        .coin(3650.0)
        .enemy(EnemyKind::Jumping, 3750.0)
        .spike(3900.0)
        .orb(4100.0, 150.0)
        .coin(4200.0)
        .spike(4300.0)
        .coin(4500.0)
        .coin(4700.0)
        .coin(4900.0)
        .enemy(EnemyKind::Moving, 5000.0)
        .spike(5150.0)
        .coin(5300.0)
        .spike(5400.0)
        .spike(5450.0)
        .coin(5600.0)
        .spike(5700.0)
        .spike(5750.0)
        .coin(5900.0)
        .pad(6000.0)
        .coin(6150.0)
        .spike(6250.0)
        .coin(6400.0)
        .spike(6500.0)
        .spike(6850.0)
        .coin(7000.0)
        .spike(7100.0)
        .spike(7300.0)
        .build(4, "Dry Out", "#4a1942", "#2a0a22", 7500.0)
}

fn base_after_base(config: &GameConfig) -> Level {
    Builder::new(config)
        .coin(300.0)
        .spike(400.0)
        .coin(500.0)
        .spike(600.0)
        .coin(800.0)
        .spike(1000.0)
        .coin(1100.0)
        .spike(1200.0)
        .coin(1400.0)
        .enemy(EnemyKind::Moving, 1550.0)
        .spike(1650.0)
        .coin(1800.0)
        .spike(2050.0)
        .coin(2200.0)
        .pad(2300.0)
        .coin(2400.0)
        .orb(2600.0, 200.0)
        .coin(2700.0)
        .spike(2800.0)
        .spike(2850.0)
        .coin(3000.0)
        .enemy(EnemyKind::Static, 3150.0)
        .spike(3300.0)
        .coin(3450.0)
        .spike(3550.0)
        .spike(3600.0)
        .spike(3650.0)
        .coin(3850.0)
        .coin(4050.0)
        .coin(4250.0)
        .spike(4500.0)
        .coin(4650.0)
        .orb(4750.0, 140.0)
        .coin(4850.0)
        .spike(4950.0)
        .orb(5150.0, 160.0)
        .coin(5250.0)
        .spike(5350.0)
        .coin(5500.0)
        .spike(5600.0)
        .spike(5650.0)
        .coin(5750.0)
        .pad(5850.0)
        .coin(6000.0)
        .spike(6100.0)
        .spike(6150.0)
        .coin(6300.0)
        .coin(6350.0)
        .enemy(EnemyKind::Jumping, 6450.0)
        .spike(6600.0)
        .coin(6750.0)
        .spike(6850.0)
        .coin(7000.0)
        .spike(7100.0)
        .spike(7450.0)
        .coin(7600.0)
        .spike(7700.0)
        .build(5, "Base After Base", "#1a4d2e", "#0a2a1a", 8000.0)
}

fn cant_let_go(config: &GameConfig) -> Level {
    Builder::new(config)
        .coin(250.0)
        .spike(350.0)
        .coin(450.0)
        .spike(550.0)
        .coin(650.0)
        .spike(750.0)
        .coin(950.0)
        .spike(1150.0)
        .coin(1300.0)
        .enemy(EnemyKind::Jumping, 1450.0)
        .spike(1600.0)
        .coin(1700.0)
        .spike(1950.0)
        .coin(2100.0)
        .coin(2350.0)
        .coin(2550.0)
        .spike(2800.0)
        .spike(2850.0)
        .coin(3000.0)
        .pad(3100.0)
        .coin(3250.0)
        .spike(3350.0)
        .coin(3450.0)
        .pad(3550.0)
        .coin(3650.0)
        .orb(3850.0, 230.0)
        .coin(3950.0)
        .spike(4050.0)
        .enemy(EnemyKind::Moving, 4100.0)
        .coin(4200.0)
        .spike(4300.0)
        .coin(4450.0)
        .spike(4650.0)
        .spike(4700.0)
        .coin(4850.0)
        .spike(4950.0)
        .spike(5000.0)
        .spike(5050.0)
        .coin(5200.0)
        .coin(5250.0)
        .enemy(EnemyKind::Static, 5400.0)
        .spike(5500.0)
        .coin(5650.0)
        .orb(5750.0, 150.0)
        .coin(5850.0)
        .spike(5950.0)
        .coin(6050.0)
        .orb(6150.0, 170.0)
        .coin(6250.0)
        .spike(6350.0)
        .coin(6500.0)
        .spike(6600.0)
        .spike(6650.0)
        .coin(6750.0)
        .pad(6850.0)
        .coin(7000.0)
        .spike(7100.0)
        .coin(7400.0)
        .spike(7500.0)
        .coin(7600.0)
        .spike(7700.0)
        .coin(7850.0)
        .spike(7950.0)
        .coin(8100.0)
        .spike(8200.0)
        .build(6, "Cant Let Go", "#4a3728", "#2a1a10", 8500.0)
}

/// All built-in levels, laid out for the given canvas
pub fn builtin_levels(config: &GameConfig) -> Vec<Level> {
    vec![
        stereo_madness(config),
        back_on_track(config),
        polargeist(config),
        dry_out(config),
        base_after_base(config),
        cant_let_go(config),
    ]
}

/// Look up a built-in level by id
pub fn builtin_level(id: u32, config: &GameConfig) -> Result<Level, LevelError> {
    builtin_levels(config)
        .into_iter()
        .find(|level| level.id == id)
        .ok_or(LevelError::UnknownLevel { id })
}
