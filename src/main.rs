// SPDX-License-Identifier: GPL-3.0-only
use tokio::signal;
use tracing::{error, info};

use weapons_watcher::config::Config;
use weapons_watcher::logging::setup_logging;
use weapons_watcher::monitor::WeaponsMonitor;
use weapons_watcher::weapons::Weapon;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    setup_logging(&config.log_level)?;

    info!("Starting weapons-watcherd v{}", env!("CARGO_PKG_VERSION"));

    let mut monitor = WeaponsMonitor::new(config.weapons_file.clone(), config.poll_interval())?;
    monitor.set_sink(|weapons: &[Weapon]| {
        // Console rendition of the display contract: replace everything
        // shown with the new list on every notification.
        info!(count = weapons.len(), "Weapons file changed");
        for weapon in weapons {
            info!(
                name = %weapon.name,
                tech = ?weapon.tech,
                attacks_per_second = weapon.attacks_per_second,
                "Weapon"
            );
        }
    });
    monitor.start();

    info!(
        path = %config.weapons_file.display(),
        interval_ms = config.poll_interval_ms,
        "Monitor started. Waiting for shutdown signal..."
    );

    match signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal (Ctrl+C)"),
        Err(err) => error!(error = %err, "Unable to listen for shutdown signal"),
    }

    info!("Initiating graceful shutdown...");
    monitor.shutdown().await?;
    info!("Shutdown complete");

    Ok(())
}
