//! Noughts and crosses engine.
//!
//! Pure game logic for the 3x3 game: the board, terminal evaluation,
//! four interchangeable move strategies and a turn orchestrator that
//! plays two of them against each other.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of cells with placement and rollback
//! - **Rules**: win-line scan and derived [`GameStatus`]
//! - **Strategies**: human, random, tactical and optimal (minimax) players
//! - **Orchestrator**: alternates the two bound strategies until the game ends
//!
//! # Example
//!
//! ```
//! use noughts::{run_match, MatchOutcome, OptimalStrategy};
//!
//! # fn example() -> noughts::EngineResult<()> {
//! let outcome = run_match(Box::new(OptimalStrategy::new()), Box::new(OptimalStrategy::new()))?;
//! assert_eq!(outcome, MatchOutcome::Draw);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod minimax;
mod orchestrator;
mod rules;
mod strategy;
mod types;

pub use board::Board;
pub use error::{EngineError, EngineErrorKind, EngineResult};
pub use minimax::{DRAWN, FIRST_WINS, SECOND_WINS, SearchOutcome, Searcher, minimax, target_score};
pub use orchestrator::{
    MatchEvent, MatchObserver, NullObserver, Orchestrator, PlacedMove, Turn, run_match,
};
pub use rules::{LINES, SideSet, completed_lines, status, winning_sides, wins};
pub use strategy::{
    CoordinateSource, HumanStrategy, InputRejection, OptimalStrategy, RandomStrategy, Strategy,
    StrategyKind, TacticalStrategy, immediate_move, parse_coordinates, winning_cell,
};
pub use types::{BOARD_SIZE, Cell, GameStatus, MatchOutcome, Move, Side};
