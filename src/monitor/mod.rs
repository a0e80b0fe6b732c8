// SPDX-License-Identifier: GPL-3.0-only
pub mod traits;
pub mod service;

pub use traits::{FailurePolicy, LogFailurePolicy};
pub use service::{MonitorError, WeaponsMonitor, WeaponsSink};
