//! Country request/response shapes.

use crate::model::country::{Country, CountryId};
use crate::validation::{require_country_name, ValidationResult};
use serde::{Deserialize, Serialize};

/// Input for adding one country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryAddRequest {
    pub name: Option<String>,
}

impl CountryAddRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Checks field-level rules. Uniqueness is checked by the store owner.
    pub fn validate(&self) -> ValidationResult {
        require_country_name(self.name.as_deref()).map(|_| ())
    }

    /// Builds a record with a fresh ID from a validated request.
    pub fn into_country(self) -> Country {
        Country::new(self.name.unwrap_or_default())
    }
}

/// Read-only projection of one stored country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryResponse {
    pub id: CountryId,
    pub name: String,
}

impl From<&Country> for CountryResponse {
    fn from(country: &Country) -> Self {
        Self {
            id: country.id,
            name: country.name.clone(),
        }
    }
}
