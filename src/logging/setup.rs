// SPDX-License-Identifier: GPL-3.0-only
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for the daemon.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(anyhow::Error::msg)?;

    Ok(())
}
