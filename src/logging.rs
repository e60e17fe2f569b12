//! Tracing setup for the arena binary.

use crate::config::ArenaConfig;
use tracing::instrument;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Chooses the fallback filter: `--log` first, then the config file.
///
/// `RUST_LOG` still wins over both when tracing is initialised.
pub fn fallback_filter(cli_log: Option<&str>, config: &ArenaConfig) -> String {
    cli_log
        .map(str::to_string)
        .unwrap_or_else(|| config.log_filter().clone())
}

/// Installs a subscriber writing to stderr so stdout stays free for the board.
#[instrument]
pub fn init_tracing(fallback: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
