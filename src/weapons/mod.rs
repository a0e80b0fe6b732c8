// SPDX-License-Identifier: GPL-3.0-only
pub mod models;
pub mod decode;

pub use models::{TechType, Weapon};
pub use decode::decode;
