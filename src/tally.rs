//! Batch computer-vs-computer runs.

use derive_more::{Display, Error};
use noughts::{EngineError, MatchOutcome, Orchestrator, Side, Strategy, StrategyKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Results of a batch of matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Matches won by X.
    pub first_wins: u32,
    /// Matches won by O.
    pub second_wins: u32,
    /// Drawn matches.
    pub draws: u32,
    /// Matches played.
    pub games: u32,
}

impl Tally {
    /// Counts one finished match.
    pub fn record(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Winner(Side::First) => self.first_wins += 1,
            MatchOutcome::Winner(Side::Second) => self.second_wins += 1,
            MatchOutcome::Draw => self.draws += 1,
        }
        self.games += 1;
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Games:  {}", self.games)?;
        writeln!(f, "X wins: {}", self.first_wins)?;
        writeln!(f, "O wins: {}", self.second_wins)?;
        write!(f, "Draws:  {}", self.draws)
    }
}

/// Why a batch could not run.
#[derive(Debug, Clone, Display, Error)]
pub enum ArenaError {
    /// Batch runs have no console to ask a person for moves.
    #[display("'{}' cannot play in the arena; pick easy, medium or impossible", kind)]
    InteractivePlayer {
        /// The rejected kind.
        kind: StrategyKind,
    },

    /// A match aborted.
    #[display("Match {} aborted: {}", game, source)]
    Engine {
        /// Zero-based match number.
        game: u32,
        /// The engine failure.
        source: EngineError,
    },
}

/// Derives the seed for one side of one match from the batch seed.
///
/// Each side of each match gets a distinct stream, so a single `--seed`
/// reproduces the whole batch.
pub fn match_seed(base: Option<u64>, game: u32, side: Side) -> Option<u64> {
    let offset = match side {
        Side::First => 0,
        Side::Second => 1,
    };
    base.map(|seed| seed.wrapping_add(u64::from(game) * 2 + offset))
}

fn build(kind: StrategyKind, seed: Option<u64>) -> Result<Box<dyn Strategy>, ArenaError> {
    kind.computer(seed)
        .ok_or(ArenaError::InteractivePlayer { kind })
}

/// Plays `games` matches between two computer strategies.
#[instrument]
pub fn run_arena(
    first: StrategyKind,
    second: StrategyKind,
    games: u32,
    seed: Option<u64>,
) -> Result<Tally, ArenaError> {
    for kind in [first, second] {
        if kind.is_interactive() {
            return Err(ArenaError::InteractivePlayer { kind });
        }
    }

    let mut tally = Tally::default();
    for game in 0..games {
        let x = build(first, match_seed(seed, game, Side::First))?;
        let o = build(second, match_seed(seed, game, Side::Second))?;
        let outcome = Orchestrator::new(x, o)
            .run()
            .map_err(|source| ArenaError::Engine { game, source })?;
        debug!(game, %outcome, "Match recorded");
        tally.record(outcome);
    }

    info!(
        first_wins = tally.first_wins,
        second_wins = tally.second_wins,
        draws = tally.draws,
        "Arena finished"
    );
    Ok(tally)
}
