// SPDX-License-Identifier: GPL-3.0-only
pub mod traits;
pub mod interval;

pub use traits::{Cancelled, Ticker};
pub use interval::{IntervalTicker, TickerError};
