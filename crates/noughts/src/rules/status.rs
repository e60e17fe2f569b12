//! Terminal-state derivation.

use super::win::winning_sides;
use crate::board::Board;
use crate::types::GameStatus;
use tracing::instrument;

/// Derives the game status from the board.
///
/// Two winners map to [`GameStatus::Contradictory`]; callers decide how to
/// surface it (see [`GameStatus::checked`]).
#[instrument(level = "trace", skip(board))]
pub fn status(board: &Board) -> GameStatus {
    let winners = winning_sides(board);
    match (winners.len(), winners.single()) {
        (2, _) => GameStatus::Contradictory,
        (_, Some(side)) => GameStatus::Win(side),
        _ if board.is_full() => GameStatus::Draw,
        _ => GameStatus::Ongoing,
    }
}
