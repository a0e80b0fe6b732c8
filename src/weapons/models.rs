// SPDX-License-Identifier: GPL-3.0-only
use serde::{Deserialize, Serialize};

/// One weapon entry as stored in the watched file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Weapon {
    pub name: String,
    pub tech: TechType,
    pub attacks_per_second: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TechType {
    Tech,
    Smart,
    Power,
}
