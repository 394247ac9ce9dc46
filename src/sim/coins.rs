//! Dropped coins
//!
//! A stomped enemy bursts into coins that scatter ballistically for a short
//! while, then home in on the player. Coins live in screen space.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{DroppedCoin, Enemy, IdGenerator, Player};
use crate::config::GameConfig;
use crate::consts::*;

/// Spawn the reward burst for a stomped enemy
pub fn burst<R: RandomSource>(enemy: &Enemy, camera_x: f32, ids: &mut IdGenerator, rng: &mut R) -> Vec<DroppedCoin> {
    let count = (enemy.coin_drop as usize).max(DROPPED_COIN_MIN_BURST);
    let center = enemy.screen_bounds(camera_x).center();

    (0..count)
        .map(|i| {
            let jitter = (rng.next_f32() - 0.5) * DROPPED_COIN_JITTER;
            let angle = -FRAC_PI_2 + TAU * i as f32 / count as f32 + jitter;
            let speed = rng.range(DROPPED_COIN_MIN_SPEED, DROPPED_COIN_MAX_SPEED);
            DroppedCoin {
                id: ids.next_id(),
                pos: center,
                vel: Vec2::new(angle.cos() * speed, angle.sin() * speed + DROPPED_COIN_POP),
                collected: false,
                life: DROPPED_COIN_LIFE,
            }
        })
        .collect()
}

/// Frames since the coin was spawned
#[inline]
pub fn age(coin: &DroppedCoin) -> u32 {
    DROPPED_COIN_LIFE.saturating_sub(coin.life)
}

fn spread_step(coin: &mut DroppedCoin, config: &GameConfig) {
    coin.vel.y += config.gravity * DROPPED_COIN_GRAVITY_FACTOR;
    coin.vel.x *= DROPPED_COIN_DRAG;
    coin.pos += coin.vel;

    let ground_y = config.ground_top() - DROPPED_COIN_GROUND_OFFSET;
    if coin.pos.y >= ground_y {
        coin.pos.y = ground_y;
        coin.vel.y = -coin.vel.y * DROPPED_COIN_BOUNCE;
        coin.vel.x *= DROPPED_COIN_GROUND_FRICTION;
    }

    let left = DROPPED_COIN_WALL_MARGIN;
    let right = config.canvas_width - DROPPED_COIN_WALL_MARGIN;
    if coin.pos.x < left {
        coin.pos.x = left;
        coin.vel.x = -coin.vel.x * DROPPED_COIN_BOUNCE;
    } else if coin.pos.x > right {
        coin.pos.x = right;
        coin.vel.x = -coin.vel.x * DROPPED_COIN_BOUNCE;
    }
}

fn magnet_step(coin: &mut DroppedCoin, target: Vec2, strength: f32) {
    let pull = (target - coin.pos).normalize_or_zero();
    coin.vel += pull * strength;
    coin.vel = coin.vel.clamp_length_max(MAGNET_MAX_SPEED);
    coin.pos += coin.vel;
}

/// Advance all dropped coins one frame and drop expired or collected ones
pub fn update_dropped_coins(coins: &mut Vec<DroppedCoin>, player: &Player, config: &GameConfig, magnet_power: bool) {
    let target = player.center();

    for coin in coins.iter_mut().filter(|c| !c.collected) {
        let elapsed = age(coin);
        if magnet_power {
            magnet_step(coin, target, MAGNET_POWER_STRENGTH);
        } else if elapsed < DROPPED_COIN_SPREAD_FRAMES {
            spread_step(coin, config);
        } else {
            let past = (elapsed - DROPPED_COIN_SPREAD_FRAMES) as f32;
            magnet_step(coin, target, MAGNET_BASE_STRENGTH + past * MAGNET_STRENGTH_PER_FRAME);
        }
        coin.life = coin.life.saturating_sub(1);
    }

    coins.retain(|c| !c.collected && c.life > 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::seeded;
    use crate::sim::state::EnemyKind;

    fn enemy(coin_drop: u32) -> Enemy {
        Enemy {
            id: 1,
            kind: EnemyKind::Static,
            pos: Vec2::new(300.0, 200.0),
            width: 40.0,
            height: 40.0,
            vel: Vec2::ZERO,
            base_y: 200.0,
            color: "#ff0000".to_string(),
            dead: false,
            coin_drop,
        }
    }

    fn coin(pos: Vec2, vel: Vec2, life: u32) -> DroppedCoin {
        DroppedCoin {
            id: 1,
            pos,
            vel,
            collected: false,
            life,
        }
    }

    fn player_at(x: f32, y: f32) -> Player {
        let mut player = Player::new(&GameConfig::default());
        player.pos = Vec2::new(x, y);
        player.width = 40.0;
        player.height = 40.0;
        player
    }

    #[test]
    fn test_burst_count_floor() {
        let mut ids = IdGenerator::default();
        let mut rng = seeded(1);
        assert_eq!(burst(&enemy(1), 0.0, &mut ids, &mut rng).len(), 3);
        assert_eq!(burst(&enemy(0), 0.0, &mut ids, &mut rng).len(), 3);
        assert_eq!(burst(&enemy(10), 0.0, &mut ids, &mut rng).len(), 10);
    }

    #[test]
    fn test_burst_at_screen_center() {
        let mut ids = IdGenerator::default();
        let coins = burst(&enemy(5), 100.0, &mut ids, &mut seeded(2));
        for c in &coins {
            assert_eq!(c.pos, Vec2::new(220.0, 220.0));
            assert_eq!(c.life, DROPPED_COIN_LIFE);
            let speed = (c.vel - Vec2::new(0.0, DROPPED_COIN_POP)).length();
            assert!((6.0 - 1e-3..=10.0 + 1e-3).contains(&speed));
        }
    }

    #[test]
    fn test_burst_pops_upward_with_unique_ids() {
        let mut ids = IdGenerator::default();
        let coins = burst(&enemy(5), 0.0, &mut ids, &mut seeded(3));
        assert!(coins.iter().any(|c| c.vel.y < 0.0));
        // First coin is fired straight up, give or take jitter
        assert!(coins[0].vel.y < DROPPED_COIN_POP);

        let mut seen: Vec<u32> = coins.iter().map(|c| c.id).collect();
        seen.dedup();
        assert_eq!(seen.len(), coins.len());
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_spread_gravity() {
        let config = GameConfig::default();
        let mut coins = vec![coin(Vec2::new(100.0, 100.0), Vec2::new(5.0, 0.0), 360)];
        update_dropped_coins(&mut coins, &player_at(200.0, 200.0), &config, false);
        assert!(coins[0].vel.y > 0.0);
        assert_eq!(coins[0].life, 359);
    }

    #[test]
    fn test_spread_ground_bounce() {
        let config = GameConfig::default();
        let ground_y = config.ground_top() - DROPPED_COIN_GROUND_OFFSET;
        let mut coins = vec![coin(Vec2::new(100.0, ground_y + 5.0), Vec2::new(0.0, 10.0), 360)];
        update_dropped_coins(&mut coins, &player_at(200.0, 200.0), &config, false);
        assert_eq!(coins[0].pos.y, ground_y);
        assert!(coins[0].vel.y < 0.0);
    }

    #[test]
    fn test_spread_walls() {
        let config = GameConfig::default();
        let mut coins = vec![
            coin(Vec2::new(5.0, 100.0), Vec2::new(-10.0, 0.0), 360),
            coin(Vec2::new(config.canvas_width - 5.0, 100.0), Vec2::new(10.0, 0.0), 360),
        ];
        update_dropped_coins(&mut coins, &player_at(200.0, 200.0), &config, false);
        assert!(coins[0].pos.x >= 10.0);
        assert!(coins[0].vel.x > 0.0);
        assert!(coins[1].pos.x <= config.canvas_width - 10.0);
        assert!(coins[1].vel.x < 0.0);
    }

    #[test]
    fn test_magnet_phase_pulls_toward_player() {
        let config = GameConfig::default();
        // age 70, player to the lower right
        let mut coins = vec![coin(Vec2::new(100.0, 100.0), Vec2::ZERO, 290)];
        update_dropped_coins(&mut coins, &player_at(200.0, 200.0), &config, false);
        assert!(coins[0].vel.x > 0.0);
        assert!(coins[0].vel.y > 0.0);
        // Strength 0.3 + 10 * 0.01 along the diagonal
        assert!((coins[0].vel.length() - 0.4).abs() < 1e-4);
    }

    #[test]
    fn test_magnet_speed_cap() {
        let config = GameConfig::default();
        let mut coins = vec![coin(Vec2::new(100.0, 100.0), Vec2::new(40.0, 0.0), 100)];
        update_dropped_coins(&mut coins, &player_at(1000.0, 100.0), &config, false);
        assert!(coins[0].vel.length() <= MAGNET_MAX_SPEED + 1e-4);
    }

    #[test]
    fn test_magnet_power_skips_spread() {
        let config = GameConfig::default();
        let mut coins = vec![coin(Vec2::new(100.0, 100.0), Vec2::ZERO, 360)];
        update_dropped_coins(&mut coins, &player_at(80.0, 300.0), &config, true);
        // Pulled straight down toward the player, not by gravity
        assert!((coins[0].vel.y - MAGNET_POWER_STRENGTH).abs() < 1e-4);
    }

    #[test]
    fn test_expired_and_collected_removed() {
        let config = GameConfig::default();
        let mut collected = coin(Vec2::new(100.0, 100.0), Vec2::ZERO, 300);
        collected.collected = true;
        let mut coins = vec![coin(Vec2::new(100.0, 100.0), Vec2::ZERO, 1), collected];
        update_dropped_coins(&mut coins, &player_at(200.0, 200.0), &config, false);
        assert!(coins.is_empty());
    }
}
