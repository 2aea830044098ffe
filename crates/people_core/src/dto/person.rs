//! Person request/response shapes and projection helpers.
//!
//! # Invariants
//! - `age` is `current year - birth year`, not exact calendar age.
//! - `country_name` is filled by the service, never by the caller.

use crate::model::country::CountryId;
use crate::model::person::{Gender, Person, PersonId};
use crate::validation::{validate_person_fields, ValidationResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Display format used when matching dates of birth as text.
pub const DATE_OF_BIRTH_FORMAT: &str = "%d %B %Y";

/// Input for adding one person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonAddRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_id: Option<CountryId>,
    pub address: Option<String>,
    pub receive_newsletters: bool,
}

impl PersonAddRequest {
    /// Creates a request carrying only the required fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ValidationResult {
        validate_person_fields(self.name.as_deref(), self.email.as_deref())
    }

    /// Builds a record with a fresh ID from a validated request.
    pub fn into_person(self) -> Person {
        let mut person = Person::new(
            self.name.unwrap_or_default(),
            self.email.unwrap_or_default(),
        );
        person.date_of_birth = self.date_of_birth;
        person.gender = self.gender;
        person.country_id = self.country_id;
        person.address = self.address;
        person.receive_newsletters = self.receive_newsletters;
        person
    }
}

/// Input for replacing the editable fields of one stored person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonUpdateRequest {
    /// Target record; never changed by the update.
    pub id: PersonId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_id: Option<CountryId>,
    pub address: Option<String>,
    pub receive_newsletters: bool,
}

impl PersonUpdateRequest {
    pub fn validate(&self) -> ValidationResult {
        validate_person_fields(self.name.as_deref(), self.email.as_deref())
    }

    /// Overwrites every editable field of `person` from a validated request.
    pub fn apply_to(&self, person: &mut Person) {
        person.name = self.name.clone().unwrap_or_default();
        person.email = self.email.clone().unwrap_or_default();
        person.date_of_birth = self.date_of_birth;
        person.gender = self.gender;
        person.country_id = self.country_id;
        person.address = self.address.clone();
        person.receive_newsletters = self.receive_newsletters;
    }
}

/// Read-only projection of one stored person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonResponse {
    pub id: PersonId,
    pub name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    /// Derived; `None` without a date of birth.
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub country_id: Option<CountryId>,
    /// Resolved from `country_id`; `None` when absent or unresolved.
    pub country_name: Option<String>,
    pub address: Option<String>,
    pub receive_newsletters: bool,
}

impl PersonResponse {
    /// Projects `person`, computing age relative to `today`.
    pub fn from_person(person: &Person, country_name: Option<String>, today: NaiveDate) -> Self {
        Self {
            id: person.id,
            name: person.name.clone(),
            email: person.email.clone(),
            date_of_birth: person.date_of_birth,
            age: person.date_of_birth.map(|dob| age_in_years(dob, today)),
            gender: person.gender,
            country_id: person.country_id,
            country_name,
            address: person.address.clone(),
            receive_newsletters: person.receive_newsletters,
        }
    }

    /// Prefills an update request for edit flows.
    pub fn to_update_request(&self) -> PersonUpdateRequest {
        PersonUpdateRequest {
            id: self.id,
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            country_id: self.country_id,
            address: self.address.clone(),
            receive_newsletters: self.receive_newsletters,
        }
    }

    /// Date of birth rendered as `dd Month yyyy`.
    pub fn formatted_date_of_birth(&self) -> Option<String> {
        self.date_of_birth.map(format_date_of_birth)
    }
}

/// Whole-year difference between `today` and `date_of_birth`.
pub fn age_in_years(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    today.year() - date_of_birth.year()
}

pub fn format_date_of_birth(date: NaiveDate) -> String {
    date.format(DATE_OF_BIRTH_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::{age_in_years, format_date_of_birth};
    use chrono::NaiveDate;

    #[test]
    fn age_ignores_month_and_day() {
        let dob = NaiveDate::from_ymd_opt(2000, 12, 31).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(age_in_years(dob, today), 26);
    }

    #[test]
    fn date_of_birth_uses_day_month_name_year() {
        let dob = NaiveDate::from_ymd_opt(1990, 3, 5).unwrap();
        assert_eq!(format_date_of_birth(dob), "05 March 1990");
    }
}
