//! Interactive menu loop.

use crate::console::{BoardPrinter, ConsoleSource, SharedConsole};
use crate::menu::{INSTRUCTIONS, MenuCommand, players_message};
use crate::tally::match_seed;
use anyhow::Result;
use noughts::{
    EngineErrorKind, HumanStrategy, MatchOutcome, Orchestrator, Side, Strategy, StrategyKind,
};
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};

/// Runs the menu until `exit` or end of input.
pub struct Session<R, W> {
    console: SharedConsole<R, W>,
    seed: Option<u64>,
    matches: u32,
}

impl<R, W> Session<R, W>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    /// Creates a session on `console`; `seed` makes computer players
    /// reproducible.
    pub fn new(console: SharedConsole<R, W>, seed: Option<u64>) -> Self {
        Self {
            console,
            seed,
            matches: 0,
        }
    }

    fn say(&self, text: &str) -> Result<()> {
        let mut console = self
            .console
            .lock()
            .map_err(|_| anyhow::anyhow!("Console lock poisoned"))?;
        console.say(text)?;
        Ok(())
    }

    fn read_command(&self) -> Result<Option<String>> {
        let mut console = self
            .console
            .lock()
            .map_err(|_| anyhow::anyhow!("Console lock poisoned"))?;
        console.say(INSTRUCTIONS)?;
        Ok(console.read_line()?)
    }

    /// Runs the menu loop.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        self.say("Welcome to noughts and crosses!")?;
        self.say(&players_message())?;

        while let Some(line) = self.read_command()? {
            match line.parse::<MenuCommand>() {
                Ok(MenuCommand::Exit) => {
                    info!("Exit requested");
                    break;
                }
                Ok(MenuCommand::Start { first, second }) => {
                    self.play(first, second)?;
                }
                Err(e) => {
                    warn!(input = %e.input, "Illegal menu command");
                    self.say(&e.to_string())?;
                }
            }
        }
        Ok(())
    }

    fn strategy_for(&self, kind: StrategyKind, side: Side) -> Box<dyn Strategy> {
        match kind.computer(match_seed(self.seed, self.matches, side)) {
            Some(strategy) => strategy,
            None => Box::new(HumanStrategy::new(
                format!("Player {}", side),
                ConsoleSource::new(self.console.clone()),
            )),
        }
    }

    /// Plays one match; `None` when the person stopped typing mid-match.
    #[instrument(skip(self))]
    pub fn play(&mut self, first: StrategyKind, second: StrategyKind) -> Result<Option<MatchOutcome>> {
        let mut orchestrator = Orchestrator::new(
            self.strategy_for(first, Side::First),
            self.strategy_for(second, Side::Second),
        );
        self.matches += 1;

        let mut printer = BoardPrinter::new(self.console.clone());
        match orchestrator.run_with(&mut printer) {
            Ok(outcome) => Ok(Some(outcome)),
            Err(e) if matches!(e.kind(), EngineErrorKind::InputClosed) => {
                warn!("Input closed during match");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
