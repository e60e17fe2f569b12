//! Uniformly random strategy.

use super::Strategy;
use crate::board::Board;
use crate::error::{EngineError, EngineErrorKind, EngineResult};
use crate::types::{Move, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Picks any empty cell with equal probability.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Creates a strategy seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible strategy.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Samples one empty cell.
    #[track_caller]
    pub(crate) fn pick(&mut self, board: &Board) -> EngineResult<Move> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return Err(EngineError::new(EngineErrorKind::NoLegalMove));
        }
        let idx = self.rng.random_range(0..empty.len());
        Ok(empty[idx])
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    #[instrument(skip(self, board))]
    fn choose_move(&mut self, board: &Board, side: Side) -> EngineResult<Move> {
        let mv = self.pick(board)?;
        debug!(ai = self.name(), mv = %mv, "Random move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        "Easy AI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_empty_cell() {
        let board = Board::from_rows("XO./OX./X.O").unwrap();
        let empty = board.empty_cells();
        let mut strategy = RandomStrategy::seeded(11);
        for _ in 0..50 {
            let mv = strategy.choose_move(&board, Side::Second).unwrap();
            assert!(empty.contains(&mv), "{mv} is not empty");
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new();
        let mut a = RandomStrategy::seeded(3);
        let mut b = RandomStrategy::seeded(3);
        for _ in 0..20 {
            assert_eq!(
                a.choose_move(&board, Side::First).unwrap(),
                b.choose_move(&board, Side::First).unwrap()
            );
        }
    }

    #[test]
    fn test_covers_every_cell_eventually() {
        let board = Board::new();
        let mut strategy = RandomStrategy::seeded(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(strategy.choose_move(&board, Side::First).unwrap());
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_rows("XOX/OXX/OXO").unwrap();
        let err = RandomStrategy::new()
            .choose_move(&board, Side::First)
            .unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::NoLegalMove);
    }
}
