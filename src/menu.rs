//! Menu commands and help text for interactive play.

use derive_more::{Display, Error};
use noughts::StrategyKind;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// How to start a match or leave.
pub const INSTRUCTIONS: &str = "To start a match, type:
    start <player> <player>
    Examples:
        start easy easy
        start user impossible

To exit, type:
    exit";

/// Lists the selectable player types with their descriptions.
pub fn players_message() -> String {
    let mut text = String::from("You can choose a match between any of the following:");
    for kind in StrategyKind::iter() {
        let name = format!("\"{}\"", kind);
        text.push_str(&format!("\n        {:<16}- {}", name, kind.description()));
    }
    text
}

/// A parsed menu line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Start a match with the given player types for X and O.
    Start {
        /// Player type for X.
        first: StrategyKind,
        /// Player type for O.
        second: StrategyKind,
    },
    /// Leave the menu.
    Exit,
}

/// A menu line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Illegal command")]
pub struct IllegalCommand {
    /// The offending input.
    pub input: String,
}

impl FromStr for MenuCommand {
    type Err = IllegalCommand;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let illegal = || IllegalCommand {
            input: line.trim().to_string(),
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            ["exit"] => Ok(Self::Exit),
            ["start", first, second] => Ok(Self::Start {
                first: first.parse().map_err(|_| illegal())?,
                second: second.parse().map_err(|_| illegal())?,
            }),
            _ => Err(illegal()),
        }
    }
}
