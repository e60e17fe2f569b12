//! Console arena for noughts and crosses.
//!
//! Wraps the `noughts` engine with everything a terminal player needs.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with defaults ([`ArenaConfig`])
//! - **Console**: shared line reader/writer, board rendering and the human
//!   coordinate source
//! - **Session**: the `start <p1> <p2>` / `exit` menu loop
//! - **Tally**: batch computer-vs-computer runs
//!
//! # Example
//!
//! ```
//! use noughts::StrategyKind;
//! use noughts_arena::run_arena;
//!
//! let tally = run_arena(StrategyKind::Optimal, StrategyKind::Optimal, 3, Some(1)).unwrap();
//! assert_eq!(tally.draws, 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod logging;
mod menu;
mod session;
mod tally;

pub use cli::{Cli, Command};
pub use config::{ArenaConfig, ConfigError};
pub use console::{BoardPrinter, Console, ConsoleSource, SharedConsole, render_board};
pub use logging::{fallback_filter, init_tracing};
pub use menu::{INSTRUCTIONS, IllegalCommand, MenuCommand, players_message};
pub use session::Session;
pub use tally::{ArenaError, Tally, match_seed, run_arena};
