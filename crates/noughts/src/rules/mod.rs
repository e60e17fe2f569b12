//! Game rules for noughts and crosses.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage so the strategies and the orchestrator share one definition
//! of a finished game.

pub mod status;
pub mod win;

pub use status::status;
pub use win::{LINES, SideSet, completed_lines, winning_sides, wins};
