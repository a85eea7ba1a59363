//! Falling-pyramid tap game
//!
//! Spawns pyramids on a fixed cadence, lets them arc and fall under
//! gravity, and removes the ones the player taps or the kill floor claims.
//! Runs headless: a front end (or the scripted session limit in the config)
//! drives it through the engine's event queue.

mod game;
mod spawn;

use fall_engine::prelude::*;

use crate::game::PyramidGame;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Surface panic locations even when logging is filtered down
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC occurred: {panic_info:?}");
        if let Some(location) = panic_info.location() {
            eprintln!(
                "Panic location: {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            );
        }
    }));

    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting Pyramid Rain");

    // Optional config file as the first argument; defaults otherwise
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading configuration from {path}");
            GameConfig::load_from_file(&path)?
        }
        None => GameConfig::default(),
    };

    let mut game = PyramidGame::new(&config);
    Engine::run(config, &mut game)?;

    log::info!("Pyramid Rain finished");
    Ok(())
}
