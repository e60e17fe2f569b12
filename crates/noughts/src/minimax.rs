//! Exhaustive minimax search with early exit.
//!
//! Scores are fixed to absolute sides rather than to the side to move:
//! a line for [`Side::First`] is always [`FIRST_WINS`] (+1) and a line for
//! [`Side::Second`] is always [`SECOND_WINS`] (-1). `First` maximises,
//! `Second` minimises. Because no score lies outside [-1, +1], a scan can
//! stop as soon as a candidate reaches the mover's extreme.

use crate::board::Board;
use crate::error::{EngineError, EngineErrorKind, EngineResult};
use crate::rules::winning_sides;
use crate::types::{Move, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a position won by [`Side::First`].
pub const FIRST_WINS: i8 = 1;
/// Score of a position won by [`Side::Second`].
pub const SECOND_WINS: i8 = -1;
/// Score of a drawn position.
pub const DRAWN: i8 = 0;

/// The best score `side` can hope for.
pub fn target_score(side: Side) -> i8 {
    match side {
        Side::First => FIRST_WINS,
        Side::Second => SECOND_WINS,
    }
}

/// True if `candidate` is strictly better than `best` for `side`.
fn improves(side: Side, candidate: i8, best: i8) -> bool {
    match side {
        Side::First => candidate > best,
        Side::Second => candidate < best,
    }
}

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// The chosen move.
    pub best: Move,
    /// Minimax value of the chosen move.
    pub score: i8,
    /// Number of positions evaluated.
    pub nodes: u64,
}

/// Minimax searcher that counts visited positions.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    /// Creates a searcher with a zeroed node counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions evaluated since creation.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Picks the move for `side` with the best minimax value.
    ///
    /// Candidates are scanned in row-major order on a private copy of
    /// `board`; ties keep the earliest candidate and the scan stops at the
    /// first move reaching `side`'s extreme score.
    ///
    /// # Errors
    ///
    /// `NoLegalMove` on a full board, `ContradictoryState` if the search
    /// reaches a position where both sides have a line.
    #[instrument(skip(self, board))]
    pub fn best_move(&mut self, board: &Board, side: Side) -> EngineResult<SearchOutcome> {
        let start = self.nodes;
        let mut scratch = board.clone();
        let mut best: Option<(Move, i8)> = None;

        for mv in board.empty_cells() {
            scratch.place(side, mv)?;
            let score = self.minimax(&mut scratch, side.opponent());
            scratch.clear(mv);
            let score = score?;

            if best.is_none_or(|(_, best_score)| improves(side, score, best_score)) {
                best = Some((mv, score));
            }
            if score == target_score(side) {
                break;
            }
        }

        let (best, score) = best.ok_or_else(|| EngineError::new(EngineErrorKind::NoLegalMove))?;
        let outcome = SearchOutcome {
            best,
            score,
            nodes: self.nodes - start,
        };
        debug!(best = %outcome.best, score, nodes = outcome.nodes, "Search complete");
        Ok(outcome)
    }

    /// Evaluates `board` with `to_move` about to play.
    ///
    /// The board is used as scratch space: every speculative placement is
    /// cleared again before returning, so the board comes back unchanged
    /// (also on error).
    pub fn minimax(&mut self, board: &mut Board, to_move: Side) -> EngineResult<i8> {
        self.nodes += 1;

        let winners = winning_sides(board);
        match (winners.contains(Side::First), winners.contains(Side::Second)) {
            (true, true) => return Err(EngineError::new(EngineErrorKind::ContradictoryState)),
            (true, false) => return Ok(FIRST_WINS),
            (false, true) => return Ok(SECOND_WINS),
            (false, false) if board.is_full() => return Ok(DRAWN),
            (false, false) => {}
        }

        let mut best: Option<i8> = None;
        for mv in board.empty_cells() {
            board.place(to_move, mv)?;
            let score = self.minimax(board, to_move.opponent());
            board.clear(mv);
            let score = score?;

            if best.is_none_or(|best_score| improves(to_move, score, best_score)) {
                best = Some(score);
            }
            if score == target_score(to_move) {
                break;
            }
        }

        // The board is not full here, so at least one candidate was scored.
        best.ok_or_else(|| EngineError::new(EngineErrorKind::NoLegalMove))
    }
}

/// Minimax value of `board` with `to_move` about to play.
pub fn minimax(board: &Board, to_move: Side) -> EngineResult<i8> {
    let mut scratch = board.clone();
    Searcher::new().minimax(&mut scratch, to_move)
}
