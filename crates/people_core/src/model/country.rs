//! Country domain record.
//!
//! # Invariants
//! - `id` is never nil and never reused.
//! - `name` is non-blank and unique across one country store.
//! - Countries are immutable after insertion.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a country record.
pub type CountryId = Uuid;

/// Canonical country record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    /// Display name, compared case-sensitively for uniqueness.
    pub name: String,
}

impl Country {
    /// Creates a country with a freshly generated ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
