//! Core domain types for noughts and crosses.

use crate::error::{EngineError, EngineErrorKind, EngineResult};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Width and height of the square board.
pub const BOARD_SIZE: usize = 3;

/// One of the two match participants.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub enum Side {
    /// Moves first and plays `X`.
    First,
    /// Moves second and plays `O`.
    Second,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Returns the mark this side writes on the board.
    pub fn mark(self) -> char {
        match self {
            Side::First => 'X',
            Side::Second => 'O',
        }
    }

    /// Decodes a board mark (`X` or `O`, any case) into a side.
    #[track_caller]
    #[instrument]
    pub fn from_mark(mark: char) -> EngineResult<Self> {
        match mark.to_ascii_uppercase() {
            'X' => Ok(Side::First),
            'O' => Ok(Side::Second),
            _ => Err(EngineError::new(EngineErrorKind::UndefinedSide(mark))),
        }
    }

    /// Slot of this side in two-element tables.
    pub(crate) fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Holds the mark of a side.
    Mark(Side),
}

impl Cell {
    /// Returns the side occupying this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Mark(side) => Some(side),
        }
    }

    /// Returns true if no side has marked this cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Character used when printing the cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Mark(side) => side.mark(),
        }
    }
}

/// A `(column, row)` coordinate pair.
///
/// Construction does not validate the range; [`Board::place`](crate::Board::place)
/// rejects coordinates outside the grid with `OutOfBounds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Column, counted from the left.
    pub column: usize,
    /// Row, counted from the top.
    pub row: usize,
}

impl Move {
    /// All nine coordinates in row-major order.
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(1, 0),
        Move::new(2, 0),
        Move::new(0, 1),
        Move::new(1, 1),
        Move::new(2, 1),
        Move::new(0, 2),
        Move::new(1, 2),
        Move::new(2, 2),
    ];

    /// Creates a move at `(column, row)`.
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Returns true if both coordinates lie on the board.
    pub fn in_bounds(self) -> bool {
        self.column < BOARD_SIZE && self.row < BOARD_SIZE
    }

    /// Creates a move from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Status derived from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Nobody has a line and empty cells remain.
    Ongoing,
    /// Exactly one side has completed a line.
    Win(Side),
    /// The board is full and nobody has a line.
    Draw,
    /// Both sides have completed a line.
    Contradictory,
}

impl GameStatus {
    /// Returns true once the game can no longer continue.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }

    /// Surfaces a contradictory status as an error.
    #[track_caller]
    pub fn checked(self) -> EngineResult<Self> {
        match self {
            GameStatus::Contradictory => {
                Err(EngineError::new(EngineErrorKind::ContradictoryState))
            }
            status => Ok(status),
        }
    }

    /// Converts a terminal status into a match outcome.
    pub fn outcome(self) -> Option<MatchOutcome> {
        match self {
            GameStatus::Win(side) => Some(MatchOutcome::Winner(side)),
            GameStatus::Draw => Some(MatchOutcome::Draw),
            GameStatus::Ongoing | GameStatus::Contradictory => None,
        }
    }
}

/// Outcome of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// The side completed a line.
    Winner(Side),
    /// The board filled up without a line.
    Draw,
}

impl MatchOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            MatchOutcome::Winner(side) => Some(*side),
            MatchOutcome::Draw => None,
        }
    }

    /// Returns true if the match was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, MatchOutcome::Draw)
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Winner(side) => write!(f, "{} wins", side),
            MatchOutcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Side::First.opponent(), Side::Second);
        assert_eq!(Side::Second.opponent().opponent(), Side::Second);
    }

    #[test]
    fn test_from_mark() {
        assert_eq!(Side::from_mark('X').unwrap(), Side::First);
        assert_eq!(Side::from_mark('o').unwrap(), Side::Second);
        let err = Side::from_mark('Z').unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::UndefinedSide('Z'));
    }

    #[test]
    fn test_all_moves_row_major() {
        assert_eq!(Move::ALL[0], Move::new(0, 0));
        assert_eq!(Move::ALL[5], Move::new(2, 1));
        assert_eq!(Move::from_index(8), Some(Move::new(2, 2)));
        assert_eq!(Move::from_index(9), None);
        assert!(Move::ALL.iter().all(|mv| mv.in_bounds()));
        assert!(!Move::new(3, 0).in_bounds());
    }

    #[test]
    fn test_contradictory_status_is_an_error() {
        let err = GameStatus::Contradictory.checked().unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::ContradictoryState);
        assert_eq!(GameStatus::Draw.checked().unwrap(), GameStatus::Draw);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(MatchOutcome::Winner(Side::First).to_string(), "X wins");
        assert_eq!(MatchOutcome::Winner(Side::Second).to_string(), "O wins");
        assert_eq!(MatchOutcome::Draw.to_string(), "Draw");
        assert!(MatchOutcome::Draw.is_draw());
        assert!(!MatchOutcome::Winner(Side::Second).is_draw());
    }
}
