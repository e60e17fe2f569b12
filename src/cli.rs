//! Command-line interface for the noughts arena.

use clap::{Parser, Subcommand};
use noughts::StrategyKind;

/// Noughts and crosses against people or computer players
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Noughts and crosses with easy, medium and impossible AIs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Tracing filter (overridden by RUST_LOG)
    #[arg(long, global = true)]
    pub log: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive menu: start matches between any two player types
    Play,

    /// Run computer-vs-computer matches and print a tally
    Arena {
        /// Strategy playing X (easy, medium, impossible)
        #[arg(long)]
        first: Option<StrategyKind>,

        /// Strategy playing O (easy, medium, impossible)
        #[arg(long)]
        second: Option<StrategyKind>,

        /// Number of matches
        #[arg(short = 'n', long)]
        games: Option<u32>,

        /// Base seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["noughts"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_arena_flags() {
        let cli = Cli::try_parse_from([
            "noughts", "arena", "--first", "impossible", "--second", "easy", "-n", "10",
            "--seed", "4", "--json", "--log", "debug",
        ])
        .unwrap();
        assert_eq!(cli.log.as_deref(), Some("debug"));
        assert_eq!(
            cli.command,
            Some(Command::Arena {
                first: Some(StrategyKind::Optimal),
                second: Some(StrategyKind::Random),
                games: Some(10),
                seed: Some(4),
                json: true,
            })
        );
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(Cli::try_parse_from(["noughts", "arena", "--first", "hard"]).is_err());
    }
}
