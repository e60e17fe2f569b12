//! Perfect-play strategy backed by minimax.

use super::Strategy;
use super::tactical::immediate_move;
use crate::board::Board;
use crate::error::{EngineError, EngineErrorKind, EngineResult};
use crate::minimax::{SearchOutcome, Searcher};
use crate::types::{Move, Side};
use tracing::{debug, instrument};

/// Never loses: takes immediate wins and blocks, otherwise searches the
/// full game tree.
#[derive(Debug, Clone, Default)]
pub struct OptimalStrategy {
    last_search: Option<SearchOutcome>,
}

impl OptimalStrategy {
    /// Creates an optimal strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcome of the most recent full search, if the last move needed one.
    pub fn last_search(&self) -> Option<&SearchOutcome> {
        self.last_search.as_ref()
    }
}

impl Strategy for OptimalStrategy {
    #[instrument(skip(self, board))]
    fn choose_move(&mut self, board: &Board, side: Side) -> EngineResult<Move> {
        if board.is_full() {
            return Err(EngineError::new(EngineErrorKind::NoLegalMove));
        }

        if let Some(mv) = immediate_move(board, side) {
            self.last_search = None;
            return Ok(mv);
        }

        let outcome = Searcher::new().best_move(board, side)?;
        debug!(
            best = %outcome.best,
            score = outcome.score,
            nodes = outcome.nodes,
            "Minimax selected move"
        );
        self.last_search = Some(outcome);
        Ok(outcome.best)
    }

    fn name(&self) -> &str {
        "Impossible AI"
    }
}
