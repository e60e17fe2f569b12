//! Turn orchestration between two strategies.

use crate::board::Board;
use crate::error::{EngineError, EngineErrorKind, EngineResult};
use crate::rules::{completed_lines, status};
use crate::strategy::Strategy;
use crate::types::{MatchOutcome, Move, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Whose move it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    active: Side,
}

impl Turn {
    /// Creates a turn with `active` to move.
    pub fn new(active: Side) -> Self {
        Self { active }
    }

    /// The side to move.
    pub fn active(&self) -> Side {
        self.active
    }

    /// Hands the move to the other side.
    pub fn advance(&mut self) {
        self.active = self.active.opponent();
    }
}

impl Default for Turn {
    fn default() -> Self {
        Self::new(Side::First)
    }
}

/// A move that was applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedMove {
    /// Side that moved.
    pub side: Side,
    /// Where it moved.
    pub mv: Move,
}

/// Events emitted while a match runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// The match began.
    Started {
        /// Name of the strategy playing First.
        first: String,
        /// Name of the strategy playing Second.
        second: String,
    },
    /// A move was placed.
    MoveMade {
        /// Side that moved.
        side: Side,
        /// Name of the strategy that chose the move.
        strategy: String,
        /// The move.
        mv: Move,
    },
    /// The match reached a terminal state.
    Finished(MatchOutcome),
}

/// Receives match events together with the board as it stands afterwards.
pub trait MatchObserver {
    /// Handles one event.
    fn on_event(&mut self, event: &MatchEvent, board: &Board);
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl MatchObserver for NullObserver {
    fn on_event(&mut self, _event: &MatchEvent, _board: &Board) {}
}

impl MatchObserver for Vec<MatchEvent> {
    fn on_event(&mut self, event: &MatchEvent, _board: &Board) {
        self.push(event.clone());
    }
}

/// Plays two strategies against each other on one board.
pub struct Orchestrator {
    board: Board,
    bindings: [Box<dyn Strategy>; 2],
    turn: Turn,
    history: Vec<PlacedMove>,
}

impl Orchestrator {
    /// Creates an orchestrator on an empty board with First to move.
    #[instrument(skip_all)]
    pub fn new(first: Box<dyn Strategy>, second: Box<dyn Strategy>) -> Self {
        Self::from_board(Board::new(), Side::First, first, second)
    }

    /// Creates an orchestrator resuming from an existing position.
    pub fn from_board(
        board: Board,
        to_move: Side,
        first: Box<dyn Strategy>,
        second: Box<dyn Strategy>,
    ) -> Self {
        Self {
            board,
            bindings: [first, second],
            turn: Turn::new(to_move),
            history: Vec::new(),
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves applied by this orchestrator, in order.
    pub fn history(&self) -> &[PlacedMove] {
        &self.history
    }

    /// The side to move next.
    pub fn to_move(&self) -> Side {
        self.turn.active()
    }

    /// Runs the match to completion without observation.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> EngineResult<MatchOutcome> {
        self.run_with(&mut NullObserver)
    }

    /// Runs the match to completion, reporting each step to `observer`.
    ///
    /// # Errors
    ///
    /// - `ContradictoryState` if the board ever shows two winners
    /// - any error a strategy returns, unchanged
    /// - `IllegalStrategyMove` if a strategy picks a cell the board refuses
    #[instrument(skip_all, fields(first = %self.bindings[0].name(), second = %self.bindings[1].name()))]
    pub fn run_with(&mut self, observer: &mut dyn MatchObserver) -> EngineResult<MatchOutcome> {
        info!("Starting match");
        observer.on_event(
            &MatchEvent::Started {
                first: self.bindings[0].name().to_string(),
                second: self.bindings[1].name().to_string(),
            },
            &self.board,
        );

        loop {
            if let Some(outcome) = status(&self.board).checked()?.outcome() {
                let lines = outcome
                    .winner()
                    .map_or(0, |side| completed_lines(&self.board, side));
                info!(%outcome, moves = self.history.len(), lines, "Match finished");
                observer.on_event(&MatchEvent::Finished(outcome), &self.board);
                return Ok(outcome);
            }

            let side = self.turn.active();
            let strategy = &mut self.bindings[side.index()];
            debug!(%side, strategy = strategy.name(), "Waiting for move");
            let mv = strategy.choose_move(&self.board, side)?;

            if let Err(e) = self.board.place(side, mv) {
                error!(%side, strategy = strategy.name(), mv = %mv, error = %e, "Strategy chose an illegal move");
                return Err(EngineError::new(EngineErrorKind::IllegalStrategyMove {
                    strategy: strategy.name().to_string(),
                    cause: Box::new(e.kind),
                }));
            }

            let placed = PlacedMove { side, mv };
            self.history.push(placed);
            observer.on_event(
                &MatchEvent::MoveMade {
                    side,
                    strategy: strategy.name().to_string(),
                    mv,
                },
                &self.board,
            );
            self.turn.advance();
        }
    }
}

/// Plays a fresh match between `first` (X) and `second` (O).
#[instrument(skip_all)]
pub fn run_match(first: Box<dyn Strategy>, second: Box<dyn Strategy>) -> EngineResult<MatchOutcome> {
    Orchestrator::new(first, second).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{OptimalStrategy, RandomStrategy, TacticalStrategy};

    /// Always answers the same cell.
    struct Stubborn(Move);

    impl Strategy for Stubborn {
        fn choose_move(&mut self, _board: &Board, _side: Side) -> EngineResult<Move> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "Stubborn"
        }
    }

    #[test]
    fn test_turn_alternates() {
        let mut turn = Turn::default();
        assert_eq!(turn.active(), Side::First);
        turn.advance();
        assert_eq!(turn.active(), Side::Second);
        turn.advance();
        assert_eq!(turn.active(), Side::First);
    }

    #[test]
    fn test_sides_alternate_strictly() {
        let mut orch = Orchestrator::new(
            Box::new(RandomStrategy::seeded(5)),
            Box::new(RandomStrategy::seeded(6)),
        );
        orch.run().unwrap();
        for (i, placed) in orch.history().iter().enumerate() {
            let expected = if i % 2 == 0 { Side::First } else { Side::Second };
            assert_eq!(placed.side, expected);
        }
    }

    #[test]
    fn test_illegal_move_aborts_match() {
        let mut orch = Orchestrator::new(
            Box::new(Stubborn(Move::new(1, 1))),
            Box::new(Stubborn(Move::new(1, 1))),
        );
        let err = orch.run().unwrap_err();
        match err.kind() {
            EngineErrorKind::IllegalStrategyMove { strategy, cause } => {
                assert_eq!(strategy, "Stubborn");
                assert_eq!(**cause, EngineErrorKind::CellOccupied(Move::new(1, 1)));
            }
            other => panic!("unexpected error {other}"),
        }
        assert_eq!(orch.history().len(), 1);
    }

    #[test]
    fn test_off_board_move_aborts_match() {
        let mut orch = Orchestrator::new(
            Box::new(Stubborn(Move::new(3, 0))),
            Box::new(RandomStrategy::seeded(1)),
        );
        let err = orch.run().unwrap_err();
        assert!(matches!(
            err.kind(),
            EngineErrorKind::IllegalStrategyMove { .. }
        ));
        assert!(orch.history().is_empty());
    }

    #[test]
    fn test_contradictory_start_is_rejected() {
        let board = Board::from_rows("XXX/OOO/...").unwrap();
        let mut orch = Orchestrator::from_board(
            board,
            Side::First,
            Box::new(OptimalStrategy::new()),
            Box::new(OptimalStrategy::new()),
        );
        let err = orch.run().unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::ContradictoryState);
    }

    #[test]
    fn test_events_bracket_the_match() {
        let mut events: Vec<MatchEvent> = Vec::new();
        let mut orch = Orchestrator::new(
            Box::new(OptimalStrategy::new()),
            Box::new(TacticalStrategy::with_fallback(RandomStrategy::seeded(9))),
        );
        let outcome = orch.run_with(&mut events).unwrap();

        assert!(matches!(events.first(), Some(MatchEvent::Started { .. })));
        assert_eq!(events.last(), Some(&MatchEvent::Finished(outcome)));
        let moves = events
            .iter()
            .filter(|e| matches!(e, MatchEvent::MoveMade { .. }))
            .count();
        assert_eq!(moves, orch.history().len());
        assert_ne!(outcome.winner(), Some(Side::Second));
    }

    #[test]
    fn test_resume_from_position() {
        let board = Board::from_rows("XX./OO./...").unwrap();
        let mut orch = Orchestrator::from_board(
            board,
            Side::Second,
            Box::new(OptimalStrategy::new()),
            Box::new(OptimalStrategy::new()),
        );
        let outcome = orch.run().unwrap();
        assert_eq!(outcome, MatchOutcome::Winner(Side::Second));
        assert_eq!(orch.history(), &[PlacedMove { side: Side::Second, mv: Move::new(2, 1) }]);
    }
}
