//! Interactive strategy fed by a line-oriented coordinate source.

use super::Strategy;
use crate::board::Board;
use crate::error::{EngineError, EngineErrorKind, EngineResult};
use crate::types::{BOARD_SIZE, Move, Side};
use derive_more::Display;
use tracing::{debug, instrument, warn};

/// Why an entered line was not accepted as a move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputRejection {
    /// A token was not an integer.
    #[display("Coordinates must be whole numbers")]
    NotNumbers,

    /// Not exactly two tokens.
    #[display("Enter exactly two numbers: column and row")]
    WrongArity,

    /// Coordinates outside `0..3`.
    #[display("Coordinates ({}, {}) are off the board; use 0, 1 or 2", column, row)]
    OutOfRange {
        /// Entered column.
        column: i64,
        /// Entered row.
        row: i64,
    },

    /// The cell already holds a mark.
    #[display("Cell {} is taken", _0)]
    Occupied(Move),
}

/// Supplies raw coordinate lines to a [`HumanStrategy`].
pub trait CoordinateSource: Send {
    /// Returns the next line of input, or `None` once input is exhausted.
    ///
    /// `board` and `side` are provided so the source can prompt.
    fn next_line(&mut self, board: &Board, side: Side) -> Option<String>;

    /// Called when a line was rejected; the strategy asks again afterwards.
    fn rejected(&mut self, _rejection: &InputRejection) {}
}

/// Parses `"column row"` into a move, checking only the grid range.
pub fn parse_coordinates(line: &str) -> Result<Move, InputRejection> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [column, row] = tokens.as_slice() else {
        return Err(InputRejection::WrongArity);
    };
    let column: i64 = column.parse().map_err(|_| InputRejection::NotNumbers)?;
    let row: i64 = row.parse().map_err(|_| InputRejection::NotNumbers)?;

    let size = BOARD_SIZE as i64;
    if !(0..size).contains(&column) || !(0..size).contains(&row) {
        return Err(InputRejection::OutOfRange { column, row });
    }
    Ok(Move::new(column as usize, row as usize))
}

/// A person choosing moves through a [`CoordinateSource`].
///
/// Invalid lines are reported back to the source and the person is asked
/// again, without limit.
pub struct HumanStrategy<S> {
    name: String,
    source: S,
}

impl<S: CoordinateSource> HumanStrategy<S> {
    /// Creates a human strategy with a display name.
    pub fn new(name: impl Into<String>, source: S) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    /// Returns the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }

    fn validate(board: &Board, line: &str) -> Result<Move, InputRejection> {
        let mv = parse_coordinates(line)?;
        if board.is_empty_at(mv) {
            Ok(mv)
        } else {
            Err(InputRejection::Occupied(mv))
        }
    }
}

impl<S: CoordinateSource> Strategy for HumanStrategy<S> {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board, side: Side) -> EngineResult<Move> {
        if board.is_full() {
            return Err(EngineError::new(EngineErrorKind::NoLegalMove));
        }

        loop {
            let Some(line) = self.source.next_line(board, side) else {
                warn!("Coordinate source closed");
                return Err(EngineError::new(EngineErrorKind::InputClosed));
            };
            match Self::validate(board, &line) {
                Ok(mv) => {
                    debug!(mv = %mv, "Accepted human move");
                    return Ok(mv);
                }
                Err(rejection) => {
                    warn!(input = %line.trim(), %rejection, "Rejected human input");
                    self.source.rejected(&rejection);
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
