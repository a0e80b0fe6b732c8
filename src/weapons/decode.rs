// SPDX-License-Identifier: GPL-3.0-only
use crate::weapons::models::Weapon;

/// Decode the full contents of a weapons file.
///
/// The wire format is a JSON array of `{Name, Tech, AttacksPerSecond}`
/// objects, in display order. A `null` payload decodes to an empty list.
pub fn decode(bytes: &[u8]) -> Result<Vec<Weapon>, serde_json::Error> {
    let weapons: Option<Vec<Weapon>> = serde_json::from_slice(bytes)?;
    Ok(weapons.unwrap_or_default())
}
