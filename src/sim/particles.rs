//! Cosmetic particles
//!
//! Nothing in gameplay reads particle state.

use std::f32::consts::TAU;

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{Enemy, Particle, Player};
use crate::PLAYER_PALETTE;
use crate::consts::*;

fn radial_burst<R: RandomSource>(
    center: Vec2,
    count: usize,
    life: u32,
    speed: (f32, f32),
    size: (f32, f32),
    mut color: impl FnMut(&mut R) -> String,
    rng: &mut R,
) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as f32 / count as f32;
            let speed = rng.range(speed.0, speed.1);
            Particle {
                pos: center,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                size: rng.range(size.0, size.1),
                color: color(rng),
                life,
                max_life: life,
            }
        })
        .collect()
}

/// Burst at the player's center when the player dies
pub fn player_death_burst<R: RandomSource>(player: &Player, rng: &mut R) -> Vec<Particle> {
    radial_burst(
        player.center(),
        PLAYER_DEATH_PARTICLES,
        PLAYER_DEATH_LIFE,
        (3.0, 8.0),
        (4.0, 10.0),
        |rng: &mut R| rng.pick(&PLAYER_PALETTE).to_string(),
        rng,
    )
}

/// Burst at an enemy's screen-space center in the enemy's color
pub fn enemy_death_burst<R: RandomSource>(enemy: &Enemy, camera_x: f32, rng: &mut R) -> Vec<Particle> {
    radial_burst(
        enemy.screen_bounds(camera_x).center(),
        ENEMY_DEATH_PARTICLES,
        ENEMY_DEATH_LIFE,
        (2.0, 6.0),
        (3.0, 8.0),
        |_: &mut R| enemy.color.clone(),
        rng,
    )
}

/// A single trail particle behind the player's bottom edge
pub fn trail_particle<R: RandomSource>(player: &Player, color: &str, rng: &mut R) -> Particle {
    Particle {
        pos: Vec2::new(
            player.pos.x + rng.range(0.0, 10.0),
            player.pos.y + player.height - 5.0 + rng.range(0.0, 10.0),
        ),
        vel: Vec2::new(rng.range(-4.0, -2.0), rng.range(-0.5, 0.5)),
        size: rng.range(3.0, 6.0),
        color: color.to_string(),
        life: TRAIL_LIFE,
        max_life: TRAIL_LIFE,
    }
}

/// Integrate, fade and shrink; expired particles are removed
pub fn update_particles(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.pos += p.vel;
        p.vel.y += PARTICLE_GRAVITY;
        p.life = p.life.saturating_sub(1);
        p.size *= PARTICLE_SHRINK;
    }
    particles.retain(|p| p.life > 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::rng::seeded;
    use crate::sim::state::EnemyKind;

    fn particle(life: u32) -> Particle {
        Particle {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::new(2.0, -1.0),
            size: 5.0,
            color: "#fff".to_string(),
            life,
            max_life: 60,
        }
    }

    #[test]
    fn test_player_burst() {
        let player = Player::new(&GameConfig::default());
        let particles = player_death_burst(&player, &mut seeded(1));
        assert_eq!(particles.len(), 20);
        for p in &particles {
            assert_eq!(p.pos, player.center());
            assert_eq!(p.life, 60);
            assert_eq!(p.max_life, 60);
            assert!(PLAYER_PALETTE.contains(&p.color.as_str()));
            assert!((4.0..10.0).contains(&p.size));
        }
    }

    #[test]
    fn test_enemy_burst() {
        let enemy = Enemy {
            id: 3,
            kind: EnemyKind::Static,
            pos: Vec2::new(300.0, 200.0),
            width: 40.0,
            height: 40.0,
            vel: Vec2::ZERO,
            base_y: 200.0,
            color: "#00ff00".to_string(),
            dead: true,
            coin_drop: 4,
        };
        let particles = enemy_death_burst(&enemy, 100.0, &mut seeded(2));
        assert_eq!(particles.len(), 15);
        for p in &particles {
            assert_eq!(p.pos, Vec2::new(220.0, 220.0));
            assert_eq!(p.color, "#00ff00");
            assert_eq!(p.life, 40);
        }
    }

    #[test]
    fn test_trail_particle() {
        let player = Player::new(&GameConfig::default());
        let p = trail_particle(&player, "#123456", &mut seeded(3));
        assert!(p.vel.x < 0.0);
        assert_eq!(p.life, 20);
        assert_eq!(p.color, "#123456");
        assert!(p.pos.x >= player.pos.x && p.pos.x <= player.pos.x + 10.0);
    }

    #[test]
    fn test_update_integrates() {
        let mut particles = vec![particle(10)];
        update_particles(&mut particles);
        let p = &particles[0];
        assert_eq!(p.pos, Vec2::new(102.0, 99.0));
        assert!((p.vel.y - (-0.8)).abs() < 1e-6);
        assert_eq!(p.life, 9);
        assert!(p.size < 5.0);
    }

    #[test]
    fn test_last_frame_removes() {
        let mut particles = vec![particle(1), particle(2)];
        update_particles(&mut particles);
        assert_eq!(particles.len(), 1);
        update_particles(&mut particles);
        assert!(particles.is_empty());
    }

    #[test]
    fn test_size_strictly_decreases() {
        let mut particles = vec![particle(30)];
        let mut last = particles[0].size;
        while !particles.is_empty() {
            update_particles(&mut particles);
            if let Some(p) = particles.first() {
                assert!(p.size < last);
                last = p.size;
            }
        }
    }
}
