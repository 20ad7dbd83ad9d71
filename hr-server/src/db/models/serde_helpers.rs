//! Serde helpers for partial-update payloads

use serde::{Deserialize, Deserializer};

/// Deserialize a field that distinguishes "absent" from "explicit null".
///
/// Combined with `#[serde(default)]`:
/// - field absent        -> `None` (leave unchanged)
/// - field set to `null` -> `Some(None)` (clear)
/// - field set to value  -> `Some(Some(value))`
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
