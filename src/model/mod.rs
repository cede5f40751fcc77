//! Public request and response shapes of the HTTP API.
//!
//! Response DTOs are the only serialized form of catalogue records; the server converts
//! domain models into them at the controller boundary. Request DTOs keep required fields
//! optional so missing fields are reported as structured 400 errors instead of generic
//! deserialization failures.

use serde::{Deserialize, Deserializer};

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

/// Deserializes a nullable patch field so an explicit `null` is kept apart from an absent
/// field.
///
/// Used with `#[serde(default)]`: absent gives `None`, `null` gives `Some(None)` and a value
/// gives `Some(Some(value))`.
fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
