//! Noughts - console arena
//!
//! Interactive play against people or computer players, plus batch runs.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts::StrategyKind;
use noughts_arena::{
    ArenaConfig, Cli, Command, Console, Session, fallback_filter, init_tracing, run_arena,
};
use std::io::BufReader;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ArenaConfig::load(cli.config.as_deref())?;
    init_tracing(&fallback_filter(cli.log.as_deref(), &config));

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Arena {
            first,
            second,
            games,
            seed,
            json,
        } => run_batch(
            first.unwrap_or(*config.first()),
            second.unwrap_or(*config.second()),
            games.unwrap_or(*config.games()),
            seed.or(*config.seed()),
            json,
        ),
    }
}

/// Run the interactive menu on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &ArenaConfig) -> Result<()> {
    info!("Starting interactive session");
    let console = Console::new(BufReader::new(std::io::stdin()), std::io::stdout()).shared();
    Session::new(console, *config.seed()).run()
}

/// Run computer-vs-computer matches and print the tally
#[instrument]
fn run_batch(
    first: StrategyKind,
    second: StrategyKind,
    games: u32,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let tally = run_arena(first, second, games, seed)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{} (X) vs {} (O)", first, second);
        println!("{}", tally);
    }
    Ok(())
}
