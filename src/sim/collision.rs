//! Collision classification
//!
//! Player hitboxes are deliberately smaller than the sprite, and spikes use a
//! box inside their triangle, so near misses stay near misses. Enemy contacts
//! lean toward stomping when the geometry is ambiguous.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::{DroppedCoin, Enemy, Obstacle, ObstacleKind, Player};
use crate::consts::*;

/// Outcome of touching a static obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleContact {
    Death,
    JumpPad,
    JumpOrb,
    Coin,
}

/// A contact with the obstacle at `index` in the slice that was checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleHit {
    pub contact: ObstacleContact,
    pub index: usize,
}

/// Outcome of touching a live enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyContact {
    Stomp,
    Death,
}

/// A contact with the enemy at `index` in the slice that was checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyHit {
    pub contact: EnemyContact,
    pub index: usize,
}

/// Collision box for an obstacle in world space
pub fn obstacle_hitbox(obstacle: &Obstacle) -> Rect {
    let bounds = obstacle.bounds();
    match obstacle.kind {
        // Triangle approximated by its lower middle
        ObstacleKind::Spike => bounds.fraction(Vec2::new(0.25, 0.3), Vec2::new(0.75, 1.0)),
        _ => bounds,
    }
}

/// Whether a world-space x falls inside the collision window
#[inline]
fn on_screen(screen_x: f32, canvas_width: f32) -> bool {
    screen_x > -CULL_MARGIN_LEFT && screen_x < canvas_width + CULL_MARGIN_RIGHT
}

/// Classify a single obstacle against the player
pub fn classify_obstacle(player: &Player, obstacle: &Obstacle, camera_x: f32) -> Option<ObstacleContact> {
    let player_box = player.bounds().inset(OBSTACLE_PLAYER_INSET);
    let obstacle_box = obstacle_hitbox(obstacle).shifted_x(-camera_x);

    if !player_box.overlaps(&obstacle_box) {
        return None;
    }

    match obstacle.kind {
        ObstacleKind::Spike => Some(ObstacleContact::Death),
        ObstacleKind::JumpPad => Some(ObstacleContact::JumpPad),
        ObstacleKind::JumpOrb => Some(ObstacleContact::JumpOrb),
        ObstacleKind::Coin if !obstacle.collected => Some(ObstacleContact::Coin),
        ObstacleKind::Coin | ObstacleKind::Portal => None,
    }
}

/// Every obstacle contact this frame, skipping obstacles outside the window
pub fn collide_obstacles(
    player: &Player,
    obstacles: &[Obstacle],
    camera_x: f32,
    canvas_width: f32,
) -> Vec<ObstacleHit> {
    obstacles
        .iter()
        .enumerate()
        .filter(|(_, o)| on_screen(o.pos.x - camera_x, canvas_width))
        .filter_map(|(index, o)| {
            classify_obstacle(player, o, camera_x).map(|contact| ObstacleHit { contact, index })
        })
        .collect()
}

/// Classify a single enemy against the player
pub fn classify_enemy(player: &Player, enemy: &Enemy, camera_x: f32) -> Option<EnemyContact> {
    if enemy.dead {
        return None;
    }

    let player_box = player.bounds().inset(ENEMY_PLAYER_INSET);
    let enemy_box = enemy.screen_bounds(camera_x).inset(ENEMY_INSET);
    if !player_box.overlaps(&enemy_box) {
        return None;
    }

    // Falling, and either from above or bottom inside the top band
    let player_center_y = player.pos.y + player.height / 2.0;
    let enemy_center_y = enemy.pos.y + enemy.height / 2.0;
    let player_bottom = player.pos.y + player.height;
    let from_above = player_center_y <= enemy_center_y;
    let in_top_band = player_bottom <= enemy.pos.y + enemy.height * STOMP_BAND;

    if player.vy > 0.0 && (from_above || in_top_band) {
        Some(EnemyContact::Stomp)
    } else {
        Some(EnemyContact::Death)
    }
}

/// Every enemy contact this frame, skipping enemies outside the window
pub fn collide_enemies(player: &Player, enemies: &[Enemy], camera_x: f32, canvas_width: f32) -> Vec<EnemyHit> {
    enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| on_screen(e.pos.x - camera_x, canvas_width))
        .filter_map(|(index, e)| classify_enemy(player, e, camera_x).map(|contact| EnemyHit { contact, index }))
        .collect()
}

/// Whether the player picks up a dropped coin
pub fn dropped_coin_hit(player: &Player, coin: &DroppedCoin) -> bool {
    if coin.collected {
        return false;
    }
    player
        .bounds()
        .inset(DROPPED_COIN_PLAYER_INSET)
        .intersects_circle(coin.pos, DROPPED_COIN_RADIUS)
}
