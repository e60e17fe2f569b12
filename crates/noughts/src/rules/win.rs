//! Win-line detection.

use crate::board::Board;
use crate::types::{Cell, Move, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(2, 0), Move::new(1, 1), Move::new(0, 2)],
];

/// Set of sides that have completed at least one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SideSet {
    first: bool,
    second: bool,
}

impl SideSet {
    /// Adds a side to the set.
    pub fn insert(&mut self, side: Side) {
        match side {
            Side::First => self.first = true,
            Side::Second => self.second = true,
        }
    }

    /// Checks membership.
    pub fn contains(&self, side: Side) -> bool {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    /// Number of sides in the set (0, 1 or 2).
    pub fn len(&self) -> usize {
        usize::from(self.first) + usize::from(self.second)
    }

    /// Returns true if neither side is present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the only member when exactly one side is present.
    pub fn single(&self) -> Option<Side> {
        match (self.first, self.second) {
            (true, false) => Some(Side::First),
            (false, true) => Some(Side::Second),
            _ => None,
        }
    }

    /// Iterates members, `First` before `Second`.
    pub fn iter(&self) -> impl Iterator<Item = Side> + '_ {
        [Side::First, Side::Second]
            .into_iter()
            .filter(|&side| self.contains(side))
    }
}

/// Counts the lines completely filled with `side`'s mark.
pub fn completed_lines(board: &Board, side: Side) -> usize {
    LINES
        .iter()
        .filter(|line| {
            line.iter()
                .all(|&mv| board.cell_at(mv) == Some(Cell::Mark(side)))
        })
        .count()
}

/// Checks whether `side` has at least one completed line.
pub fn wins(board: &Board, side: Side) -> bool {
    completed_lines(board, side) > 0
}

/// Returns every side with at least one completed line.
///
/// In play reached through legal alternating moves this holds at most
/// one side; two members means the board is contradictory.
#[instrument(level = "trace", skip(board))]
pub fn winning_sides(board: &Board) -> SideSet {
    let mut sides = SideSet::default();
    for [a, b, c] in LINES {
        if let Some(Cell::Mark(side)) = board.cell_at(a)
            && board.cell_at(b) == Some(Cell::Mark(side))
            && board.cell_at(c) == Some(Cell::Mark(side))
        {
            sides.insert(side);
        }
    }
    sides
}
