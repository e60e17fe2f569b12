//! One-ply tactical strategy: win now, otherwise block, otherwise random.

use super::Strategy;
use super::random::RandomStrategy;
use crate::board::Board;
use crate::error::EngineResult;
use crate::rules::wins;
use crate::types::{Move, Side};
use tracing::{debug, instrument};

/// Finds the first empty cell (row-major) where `side` would complete a line.
///
/// Each candidate is tried on a private copy and cleared again before the
/// next one; `board` itself is never touched.
pub fn winning_cell(board: &Board, side: Side) -> Option<Move> {
    let mut scratch = board.clone();
    for mv in board.empty_cells() {
        if scratch.place(side, mv).is_err() {
            continue;
        }
        let won = wins(&scratch, side);
        scratch.clear(mv);
        if won {
            return Some(mv);
        }
    }
    None
}

/// Win-now, then block.
///
/// Returns a cell completing `side`'s line if one exists, else a cell the
/// opponent would complete next turn, else `None`.
#[instrument(level = "debug", skip(board))]
pub fn immediate_move(board: &Board, side: Side) -> Option<Move> {
    if let Some(mv) = winning_cell(board, side) {
        debug!(mv = %mv, "Winning move available");
        return Some(mv);
    }
    if let Some(mv) = winning_cell(board, side.opponent()) {
        debug!(mv = %mv, "Blocking opponent's line");
        return Some(mv);
    }
    None
}

/// Takes an immediate win or block, falling back to random play.
#[derive(Debug, Clone, Default)]
pub struct TacticalStrategy {
    fallback: RandomStrategy,
}

impl TacticalStrategy {
    /// Creates a tactical strategy with an OS-seeded fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tactical strategy with the given random fallback.
    pub fn with_fallback(fallback: RandomStrategy) -> Self {
        Self { fallback }
    }
}

impl Strategy for TacticalStrategy {
    #[instrument(skip(self, board))]
    fn choose_move(&mut self, board: &Board, side: Side) -> EngineResult<Move> {
        match immediate_move(board, side) {
            Some(mv) => Ok(mv),
            None => self.fallback.pick(board),
        }
    }

    fn name(&self) -> &str {
        "Medium AI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineErrorKind;

    #[test]
    fn test_takes_winning_cell() {
        let board = Board::from_rows("XX./OO./...").unwrap();
        let mut strategy = TacticalStrategy::with_fallback(RandomStrategy::seeded(1));
        assert_eq!(
            strategy.choose_move(&board, Side::Second).unwrap(),
            Move::new(2, 1)
        );
    }

    #[test]
    fn test_blocks_opponent() {
        let board = Board::from_rows("XX./.../...").unwrap();
        let mut strategy = TacticalStrategy::with_fallback(RandomStrategy::seeded(1));
        assert_eq!(
            strategy.choose_move(&board, Side::Second).unwrap(),
            Move::new(2, 0)
        );
    }

    #[test]
    fn test_win_preferred_over_block() {
        // X can block O's column or complete its own row; winning comes first.
        let board = Board::from_rows("O.X/O.X/...").unwrap();
        assert_eq!(immediate_move(&board, Side::First), Some(Move::new(2, 2)));
        assert_eq!(immediate_move(&board, Side::Second), Some(Move::new(0, 2)));
    }

    #[test]
    fn test_first_candidate_in_scan_order() {
        // O has two ways to win; the earlier row-major cell is chosen.
        let board = Board::from_rows("O.O/X.X/O..").unwrap();
        assert_eq!(winning_cell(&board, Side::Second), Some(Move::new(1, 0)));
    }

    #[test]
    fn test_no_threats_means_none() {
        let board = Board::from_rows("X../.../...").unwrap();
        assert_eq!(immediate_move(&board, Side::Second), None);
    }

    #[test]
    fn test_scan_leaves_board_untouched() {
        let board = Board::from_rows("XX./OO./...").unwrap();
        let before = board.clone();
        let _ = immediate_move(&board, Side::First);
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_rows("XOX/OXX/OXO").unwrap();
        let err = TacticalStrategy::new()
            .choose_move(&board, Side::First)
            .unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::NoLegalMove);
    }
}
