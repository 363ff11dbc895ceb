//! Venue records.

use serde::{Deserialize, Serialize};

/// A venue record returned by the upstream places API.
///
/// Immutable once fetched; its only identity is the upstream `id`. Fields the
/// upstream omits decode to their empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Place {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub address: String,
    pub phone: String,
    pub subway: String,
    pub is_closed: bool,
    pub location: String,
}
