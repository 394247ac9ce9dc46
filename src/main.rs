//! Dash Sim entry point
//!
//! On the web the library's `wasm_main` is the entry point and the JavaScript
//! host drives frames. Natively this binary plays a level headlessly with
//! auto-jump and logs what happens:
//!
//! ```text
//! dash-sim [LEVEL_ID | LEVEL.json] [--invincible] [--seed N]
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::sync::Arc;

    use anyhow::{Context, Result, bail};

    use dash_sim::levels::{Level, builtin_level};
    use dash_sim::sim::rng::{from_entropy, seeded};
    use dash_sim::sim::{FrameInput, GameEvent, GamePhase, Playthrough};
    use dash_sim::{CheatSet, GameConfig};

    /// Upper bound on simulated frames (ten minutes at 60 fps)
    const MAX_FRAMES: u64 = 36_000;

    struct Args {
        level: String,
        invincible: bool,
        seed: Option<u64>,
    }

    fn parse_args() -> Result<Args> {
        let mut args = Args {
            level: "1".to_string(),
            invincible: false,
            seed: None,
        };
        let mut iter = std::env::args().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--invincible" => args.invincible = true,
                "--seed" => {
                    let value = iter.next().context("--seed needs a value")?;
                    args.seed = Some(value.parse().with_context(|| format!("invalid seed {value:?}"))?);
                }
                flag if flag.starts_with("--") => bail!("unknown option {flag}"),
                level => args.level = level.to_string(),
            }
        }
        Ok(args)
    }

    fn load_level(arg: &str, config: &GameConfig) -> Result<Level> {
        if let Ok(id) = arg.parse::<u32>() {
            return Ok(builtin_level(id, config)?);
        }
        let json = std::fs::read_to_string(arg).with_context(|| format!("reading level file {arg}"))?;
        Level::from_json(&json).with_context(|| format!("parsing level file {arg}"))
    }

    pub fn run() -> Result<()> {
        dash_sim::platform::init_logging();

        let args = parse_args()?;
        let config = GameConfig::default();
        let level = Arc::new(load_level(&args.level, &config)?);
        let rng = match args.seed {
            Some(seed) => seeded(seed),
            None => {
                let (rng, seed) = from_entropy();
                log::info!("Using seed {seed}");
                rng
            }
        };

        let mut game = Playthrough::new(level, config, rng);
        let input = FrameInput {
            jump: false,
            cheats: CheatSet {
                auto_jump: true,
                invincible: args.invincible,
                ..Default::default()
            },
        };

        while game.phase == GamePhase::Playing && game.frame < MAX_FRAMES {
            for event in game.step(&input) {
                match event {
                    GameEvent::Jumped { .. } => log::trace!("frame {}: {event:?}", game.frame),
                    _ => log::info!("frame {}: {event:?}", game.frame),
                }
            }
        }

        log::info!(
            "Finished in phase {:?} after {} frames: {}% progress, {} coins",
            game.phase,
            game.frame,
            game.stats.percent(),
            game.stats.coins_collected
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the library's wasm_main, this is just to satisfy the compiler
}
