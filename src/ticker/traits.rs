// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Marker for a wait that ended because the cancellation token fired,
/// not because a tick arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

#[async_trait]
pub trait Ticker: Send {
    /// Suspend until the next tick.
    ///
    /// Returns `Ok(true)` when the period elapses, `Ok(false)` permanently
    /// once the ticker has been retired, and `Err(Cancelled)` when `cancel`
    /// fires before either.
    async fn wait_for_next_tick(&mut self, cancel: &CancellationToken) -> Result<bool, Cancelled>;
}
