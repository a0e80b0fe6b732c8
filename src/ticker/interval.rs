// SPDX-License-Identifier: GPL-3.0-only
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::ticker::traits::{Cancelled, Ticker};

#[derive(thiserror::Error, Debug)]
pub enum TickerError {
    #[error("tick period must be greater than zero")]
    InvalidPeriod,
}

/// Fixed-period ticker backed by `tokio::time`.
///
/// The first tick fires one full period after construction, never
/// immediately.
pub struct IntervalTicker {
    interval: Interval,
    retired: bool,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Result<Self, TickerError> {
        if period.is_zero() {
            return Err(TickerError::InvalidPeriod);
        }

        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        // A slow poll cycle must not be followed by a burst of catch-up ticks.
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Ok(Self {
            interval,
            retired: false,
        })
    }

    /// Permanently retire the ticker. Idempotent; waits issued after this
    /// resolve `Ok(false)` instead of hanging.
    pub fn retire(&mut self) {
        self.retired = true;
    }
}

#[async_trait]
impl Ticker for IntervalTicker {
    async fn wait_for_next_tick(&mut self, cancel: &CancellationToken) -> Result<bool, Cancelled> {
        if self.retired {
            return Ok(false);
        }

        tokio::select! {
            _ = cancel.cancelled() => Err(Cancelled),
            _ = self.interval.tick() => Ok(true),
        }
    }
}
