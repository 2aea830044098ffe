//! Person domain record.
//!
//! # Responsibility
//! - Define the stored person shape and its gender vocabulary.
//!
//! # Invariants
//! - `id` is never nil and never reused.
//! - `name` and `email` are validated before a record reaches a store.
//! - `country_id` is a soft reference; it may not resolve.

use crate::model::country::CountryId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a person record.
pub type PersonId = Uuid;

/// Gender options offered by the directory forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Others,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Others => "Others",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    /// Not checked against the country store.
    pub country_id: Option<CountryId>,
    pub address: Option<String>,
    pub receive_newsletters: bool,
}

impl Person {
    /// Creates a person with a generated ID and no optional details.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            date_of_birth: None,
            gender: None,
            country_id: None,
            address: None,
            receive_newsletters: false,
        }
    }
}

