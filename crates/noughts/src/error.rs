//! Engine error types.

use crate::types::Move;
use derive_more::{Display, Error};
use tracing::instrument;

/// The kinds of failure the engine can report.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Coordinates ({}, {}) are outside the board", column, row)]
    OutOfBounds {
        /// Requested column.
        column: usize,
        /// Requested row.
        row: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Move),

    /// A strategy was asked to move on a full board.
    #[display("No legal move available: the board is full")]
    NoLegalMove,

    /// Both sides show a completed line.
    #[display("Contradictory board: both sides have a completed line")]
    ContradictoryState,

    /// A mark could not be decoded into a side.
    #[display("Undefined side mark {:?}", _0)]
    UndefinedSide(char),

    /// Board text could not be parsed.
    #[display("Malformed board: {}", _0)]
    MalformedBoard(String),

    /// The coordinate source ran dry before a move was entered.
    #[display("Input closed before a move was entered")]
    InputClosed,

    /// A strategy handed back a move the board refused.
    #[display("Strategy '{}' returned an illegal move: {}", strategy, cause)]
    IllegalStrategyMove {
        /// Name of the offending strategy.
        strategy: String,
        /// Why the board refused the move.
        cause: Box<EngineErrorKind>,
    },
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// What went wrong.
    pub kind: EngineErrorKind,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &EngineErrorKind {
        &self.kind
    }
}

impl From<EngineErrorKind> for EngineError {
    #[track_caller]
    fn from(kind: EngineErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_records_caller_location() {
        let err = EngineError::new(EngineErrorKind::NoLegalMove);
        assert!(err.file.ends_with("error.rs"));
        assert!(err.line > 0);
    }

    #[test]
    fn test_error_display_includes_kind() {
        let err = EngineError::new(EngineErrorKind::CellOccupied(Move::new(2, 1)));
        let text = err.to_string();
        assert!(text.contains("Cell (2, 1) is already occupied"), "{text}");
    }

    #[test]
    fn test_illegal_strategy_move_wraps_cause() {
        let kind = EngineErrorKind::IllegalStrategyMove {
            strategy: "Broken".to_string(),
            cause: Box::new(EngineErrorKind::OutOfBounds { column: 3, row: 0 }),
        };
        assert_eq!(
            kind.to_string(),
            "Strategy 'Broken' returned an illegal move: Coordinates (3, 0) are outside the board"
        );
    }
}
