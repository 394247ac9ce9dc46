//! End-to-end playthroughs

use std::sync::Arc;

use dash_sim::levels::{Level, builtin_level, builtin_levels};
use dash_sim::sim::rng::seeded;
use dash_sim::sim::{CoinSource, FrameInput, GameEvent, GamePhase, Obstacle, ObstacleKind, Playthrough};
use dash_sim::{CheatSet, GameConfig};

fn coin_run() -> Level {
    Level {
        id: 1,
        name: "Coin Run".to_string(),
        ground_color: "#1a1a2e".to_string(),
        background_color: "#0f0f1a".to_string(),
        length: 5000.0,
        obstacles: [500.0, 1000.0, 2000.0]
            .into_iter()
            .map(|x| Obstacle::new(ObstacleKind::Coin, x, 590.0, 25.0, 25.0))
            .collect(),
        enemies: vec![],
    }
}

#[test]
fn test_level_completes_once_with_every_coin() {
    let mut game = Playthrough::new(Arc::new(coin_run()), GameConfig::default(), seeded(11));
    let input = FrameInput::default();

    let mut completions = Vec::new();
    let mut ground_coins = 0;
    for frame in 1..=1250u64 {
        for event in game.step(&input) {
            match event {
                GameEvent::LevelComplete { .. } => completions.push((frame, event)),
                GameEvent::CoinCollected {
                    source: CoinSource::Ground,
                    ..
                } => ground_coins += 1,
                _ => {}
            }
        }
    }

    assert_eq!(game.camera_x, 5000.0);
    assert_eq!(ground_coins, 3);
    assert_eq!(
        completions,
        vec![(
            1250,
            GameEvent::LevelComplete {
                level_id: 1,
                coins_collected: 3
            }
        )]
    );
    assert_eq!(game.phase, GamePhase::Won);
    assert!(game.obstacles.iter().all(|o| o.collected));

    for _ in 0..100 {
        assert!(game.step(&input).is_empty());
    }
}

#[test]
fn test_invincible_auto_jump_clears_every_builtin_level() {
    let config = GameConfig::default();
    let cheats = CheatSet {
        invincible: true,
        auto_jump: true,
        ..Default::default()
    };
    let input = FrameInput { jump: false, cheats };

    for level in builtin_levels(&config) {
        let length = level.length;
        let mut game = Playthrough::new(Arc::new(level), config.clone(), seeded(3));
        let mut completions = 0;
        while game.phase == GamePhase::Playing {
            completions += game
                .step(&input)
                .iter()
                .filter(|e| matches!(e, GameEvent::LevelComplete { .. }))
                .count();
        }
        assert_eq!(game.phase, GamePhase::Won);
        assert_eq!(completions, 1);
        assert!(game.camera_x >= length);
        assert_eq!(game.stats.best_progress, 1.0);
    }
}

#[test]
fn test_idle_player_dies_on_first_spike() {
    let config = GameConfig::default();
    let level = Arc::new(builtin_level(1, &config).unwrap());
    let mut game = Playthrough::new(level.clone(), config, seeded(5));

    let mut deaths = 0;
    while game.phase == GamePhase::Playing {
        deaths += game
            .step(&FrameInput::default())
            .iter()
            .filter(|e| matches!(e, GameEvent::PlayerDied { .. }))
            .count();
    }
    assert_eq!(deaths, 1);
    assert_eq!(game.phase, GamePhase::Dead);
    assert!(game.stats.progress < 1.0);
    assert!(game.camera_x < level.length);

    game.retry();
    assert_eq!(game.stats.attempts, 2);
    assert_eq!(game.obstacles, level.obstacles);
}
