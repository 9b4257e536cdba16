use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use kick_ludo::{ConsoleInput, GameConfig, Match};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "kick-ludo", version, about)]
struct Args {
    /// Side length of the square track
    #[arg(short, long, value_name = "STEPS", default_value_t = 10)]
    side: usize,
    /// Player symbols in turn order, one character each
    #[arg(short, long, value_name = "SYMBOLS", default_value = "ABCD")]
    players: String,
    /// Rank symbols, one piece per rank for every player
    #[arg(short, long, value_name = "SYMBOLS", default_value = "123")]
    ranks: String,
    /// Seed for placement and dice (random if omitted)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig::default()
            .with_track_unit(self.side)
            .with_players(self.players.chars())
            .with_ranks(self.ranks.chars())
            .with_seed(self.seed.unwrap_or_else(rand::random))
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();
    let config = args.config();
    log::info!("Seed: {}", config.seed);

    let mut game = Match::new(&config).context("Invalid game setup")?;
    let mut console = ConsoleInput::new(io::stdin().lock(), io::stdout());

    let result = game.run(&mut console).context("Game aborted")?;
    log::info!("Result: {result:?}");

    Ok(())
}
