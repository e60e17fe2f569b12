//! The 3x3 playing grid.

use crate::error::{EngineError, EngineErrorKind, EngineResult};
use crate::types::{BOARD_SIZE, Cell, Move, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 noughts-and-crosses board.
///
/// Cloning yields an independent copy, which is what the search
/// strategies rely on for speculative play.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][column]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a board from text.
    ///
    /// Accepts nine cells written as `X`, `O`, or one of `.`, `_`, `-`,
    /// space for empty. `/`, `|` and newlines are ignored so rows can be
    /// separated visually. Turn order is not checked.
    #[instrument]
    pub fn from_rows(text: &str) -> EngineResult<Self> {
        let mut cells = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for ch in text.chars() {
            match ch {
                '/' | '|' | '\n' | '\r' => continue,
                '.' | '_' | '-' | ' ' => cells.push(Cell::Empty),
                mark => cells.push(Cell::Mark(Side::from_mark(mark)?)),
            }
        }

        if cells.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(EngineError::new(EngineErrorKind::MalformedBoard(format!(
                "expected 9 cells, found {}",
                cells.len()
            ))));
        }

        let mut board = Self::new();
        for (mv, cell) in Move::ALL.iter().zip(cells) {
            board.cells[mv.row][mv.column] = cell;
        }
        Ok(board)
    }

    /// Returns the cell at `mv`, or `None` when the coordinates are off the board.
    pub fn cell_at(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row)?.get(mv.column).copied()
    }

    /// Checks if the cell at `mv` is on the board and empty.
    pub fn is_empty_at(&self, mv: Move) -> bool {
        matches!(self.cell_at(mv), Some(Cell::Empty))
    }

    /// Writes `side`'s mark at `mv`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` for coordinates outside the grid, `CellOccupied`
    /// if the cell already holds a mark.
    #[track_caller]
    #[instrument(level = "trace", skip(self))]
    pub fn place(&mut self, side: Side, mv: Move) -> EngineResult<()> {
        match self.cell_at(mv) {
            None => Err(EngineError::new(EngineErrorKind::OutOfBounds {
                column: mv.column,
                row: mv.row,
            })),
            Some(Cell::Mark(_)) => Err(EngineError::new(EngineErrorKind::CellOccupied(mv))),
            Some(Cell::Empty) => {
                self.cells[mv.row][mv.column] = Cell::Mark(side);
                Ok(())
            }
        }
    }

    /// Resets the cell at `mv` to empty.
    ///
    /// Only meant for undoing a speculative placement on a scratch board.
    /// Off-board coordinates are ignored.
    pub fn clear(&mut self, mv: Move) {
        if let Some(cell) = self
            .cells
            .get_mut(mv.row)
            .and_then(|row| row.get_mut(mv.column))
        {
            *cell = Cell::Empty;
        }
    }

    /// Lists every empty coordinate in row-major order.
    #[instrument(level = "trace", skip(self))]
    pub fn empty_cells(&self) -> Vec<Move> {
        Move::ALL
            .iter()
            .copied()
            .filter(|&mv| self.is_empty_at(mv))
            .collect()
    }

    /// Checks if no empty cells remain.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Counts the cells marked by `side`.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Mark(side))
            .count()
    }
}

impl std::str::FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(s)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
            if r + 1 < BOARD_SIZE {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
