// SPDX-License-Identifier: GPL-3.0-only
pub mod config;
pub mod fs;
pub mod logging;
pub mod monitor;
pub mod ticker;
pub mod weapons;

pub use monitor::{FailurePolicy, LogFailurePolicy, MonitorError, WeaponsMonitor};
pub use weapons::{TechType, Weapon};
