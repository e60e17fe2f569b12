//! Strategy trait and implementations.

mod human;
mod optimal;
mod random;
mod tactical;

pub use human::{CoordinateSource, HumanStrategy, InputRejection, parse_coordinates};
pub use optimal::OptimalStrategy;
pub use random::RandomStrategy;
pub use tactical::{TacticalStrategy, immediate_move, winning_cell};

use crate::board::Board;
use crate::error::EngineResult;
use crate::types::{Move, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Trait for anything that can pick a move for a side.
pub trait Strategy: Send {
    /// Chooses a move for `side` on `board`.
    ///
    /// The board is borrowed immutably; strategies that search do so on
    /// their own copies.
    ///
    /// # Errors
    ///
    /// `NoLegalMove` if the board is full.
    fn choose_move(&mut self, board: &Board, side: Side) -> EngineResult<Move>;

    /// Returns the strategy's display name.
    fn name(&self) -> &str;
}

/// The four selectable player types.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum StrategyKind {
    /// Interactive player supplying coordinates.
    #[strum(serialize = "user")]
    #[serde(rename = "user")]
    Human,
    /// Uniformly random moves.
    #[strum(serialize = "easy")]
    #[serde(rename = "easy")]
    Random,
    /// Wins or blocks when possible, otherwise random.
    #[strum(serialize = "medium")]
    #[serde(rename = "medium")]
    Tactical,
    /// Full minimax; never loses.
    #[strum(serialize = "impossible")]
    #[serde(rename = "impossible")]
    Optimal,
}

impl StrategyKind {
    /// One-line description for help text.
    #[instrument]
    pub fn description(self) -> &'static str {
        match self {
            Self::Human => "that's you! and/or a friend",
            Self::Random => "an easy to beat AI",
            Self::Tactical => "a medium level AI",
            Self::Optimal => "an impossible to beat AI",
        }
    }

    /// Returns true for the kind that needs a coordinate source.
    pub fn is_interactive(self) -> bool {
        self == Self::Human
    }

    /// Builds a computer strategy of this kind.
    ///
    /// `seed` makes the random component reproducible. Returns `None` for
    /// [`StrategyKind::Human`], which needs a [`CoordinateSource`].
    #[instrument]
    pub fn computer(self, seed: Option<u64>) -> Option<Box<dyn Strategy>> {
        let random = || match seed {
            Some(seed) => RandomStrategy::seeded(seed),
            None => RandomStrategy::new(),
        };
        match self {
            Self::Human => None,
            Self::Random => Some(Box::new(random())),
            Self::Tactical => Some(Box::new(TacticalStrategy::with_fallback(random()))),
            Self::Optimal => Some(Box::new(OptimalStrategy::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_kind_parses_menu_names() {
        assert_eq!("user".parse::<StrategyKind>().unwrap(), StrategyKind::Human);
        assert_eq!("easy".parse::<StrategyKind>().unwrap(), StrategyKind::Random);
        assert_eq!("Medium".parse::<StrategyKind>().unwrap(), StrategyKind::Tactical);
        assert_eq!(
            "impossible".parse::<StrategyKind>().unwrap(),
            StrategyKind::Optimal
        );
        assert!("hard".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_kind_display_round_trips_names() {
        let names: Vec<String> = StrategyKind::iter().map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["user", "easy", "medium", "impossible"]);
    }

    #[test]
    fn test_kind_serde_uses_menu_names() {
        let json = serde_json::to_string(&StrategyKind::Tactical).unwrap();
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn test_computer_builder() {
        assert!(StrategyKind::Human.computer(None).is_none());
        let strategy = StrategyKind::Optimal.computer(Some(7)).unwrap();
        assert_eq!(strategy.name(), "Impossible AI");
        let strategy = StrategyKind::Tactical.computer(Some(7)).unwrap();
        assert_eq!(strategy.name(), "Medium AI");
    }
}
