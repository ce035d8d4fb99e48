//! Headless Pong host
//!
//! Reads key events from stdin and streams length-prefixed postcard messages
//! to stdout for an external renderer: one setup message, then a frame per
//! tick. Set `PONG_CONFIG` to a JSON file to override the default game
//! configuration and `RUST_LOG` for logging.

mod input;

use std::error::Error;
use std::io;

use game_core::{ChannelInput, FrameClock, GameConfig, GameLoop};
use proto::{FrameWriter, SessionSetup, S2C};

const CONFIG_ENV: &str = "PONG_CONFIG";

fn load_config() -> Result<GameConfig, Box<dyn Error>> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)?;
            let config = GameConfig::from_json(&json)?;
            log::info!("Loaded config from {path}");
            Ok(config)
        }
        Err(_) => {
            log::info!("Using default config");
            Ok(GameConfig::default())
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Pong host starting...");

    let config = load_config()?;
    let (tx, rx) = crossbeam_channel::unbounded();
    input::spawn_stdin_reader(config.bindings.clone(), tx);

    let mut game = GameLoop::new(config)?;
    let mut renderer = FrameWriter::new(io::stdout().lock());
    renderer.write_message(&S2C::Setup(SessionSetup::from(game.config())))?;
    let summary = game.run(
        &mut ChannelInput::new(rx),
        &mut renderer,
        &mut FrameClock::new(),
    )?;

    renderer.write_message(&S2C::Stopped {
        score_left: summary.score.left,
        score_right: summary.score.right,
    })?;
    log::info!(
        "Session over after {} ticks: {} - {}",
        summary.ticks,
        game.config().score_label(game_core::Side::Left, summary.score.left),
        game.config().score_label(game_core::Side::Right, summary.score.right)
    );
    Ok(())
}
