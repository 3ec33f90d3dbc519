//! Rampart - Entry Point
//!
//! Sets up tracing, draws and logs the archetype seed, loads the strategy
//! profile named by `RAMPART_PROFILE` (if any), and hands stdin/stdout to
//! the frame loop. There is no further CLI surface.

use std::io;

use rampart::core::config::{self, EngineConfig, StrategyProfile};
use rampart::core::error::Result;
use rampart::engine::TurnEngine;
use rampart::harness;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RAMPART_LOG").unwrap_or_else(|_| "rampart=debug".to_string()),
        )
        .with_writer(io::stderr)
        .init();

    // Seeded once per process; logged so a match can be replayed.
    let seed: u64 = rand::random();
    tracing::info!(seed, "random seed");

    let profile = match std::env::var("RAMPART_PROFILE") {
        Ok(name) => {
            let profile = config::load_profile(&name)?;
            tracing::info!(profile = %profile.name, "loaded strategy profile");
            profile
        }
        Err(_) => StrategyProfile::default(),
    };
    let config = EngineConfig::from_profile(&profile);

    let mut engine = TurnEngine::new(config.clone(), seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    harness::run(&mut engine, &config, stdin.lock(), stdout.lock())
}
