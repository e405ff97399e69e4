// src/logging.rs
// =============================================================================
// Sets up `tracing` for the binary.
//
// Log events go to stderr so that stdout only carries the scraped results
// (which keeps --json output pipeable). RUST_LOG overrides the default level.
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Installs the global subscriber
//
// verbose lowers the default level from "info" to "debug"
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|e| anyhow!("tracing setup failed: {e}"))
}
