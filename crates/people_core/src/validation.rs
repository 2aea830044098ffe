//! Request validation rules.
//!
//! # Responsibility
//! - Check required fields and email syntax before any store mutation.
//! - Report the first violated rule as a structured error.
//!
//! # Invariants
//! - Validation is pure; it never touches a store.
//! - Blank means empty after trimming whitespace.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Rule violation raised by add/update validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    BlankCountryName,
    /// Name already stored, compared case-sensitively.
    DuplicateCountryName(String),
    BlankPersonName,
    BlankEmail,
    InvalidEmail(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankCountryName => write!(f, "CountryName can not be blank"),
            Self::DuplicateCountryName(name) => {
                write!(f, "Given country name already exists: `{name}`")
            }
            Self::BlankPersonName => write!(f, "PersonName can not be blank"),
            Self::BlankEmail => write!(f, "Email can not be blank"),
            Self::InvalidEmail(value) => write!(f, "Email is not valid: `{value}`"),
        }
    }
}

impl Error for ValidationError {}

impl ValidationError {
    /// Stable, value-free code for diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BlankCountryName => "blank_country_name",
            Self::DuplicateCountryName(_) => "duplicate_country_name",
            Self::BlankPersonName => "blank_person_name",
            Self::BlankEmail => "blank_email",
            Self::InvalidEmail(_) => "invalid_email",
        }
    }
}

pub type ValidationResult = Result<(), ValidationError>;

/// Returns whether `value` is absent or whitespace-only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |text| text.trim().is_empty())
}

/// Returns whether `value` looks like an email address.
///
/// Requires exactly one `@` with non-empty local and domain parts, no
/// whitespace, and a `.` in the domain. Bare hosts such as `a@x` and
/// addresses with spaces are rejected. Surrounding whitespace is ignored.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

pub(crate) fn require_country_name(name: Option<&str>) -> Result<&str, ValidationError> {
    match name {
        Some(name) if !is_blank(Some(name)) => Ok(name),
        _ => Err(ValidationError::BlankCountryName),
    }
}

/// Checks the shared person rules: non-blank name, non-blank valid email.
pub(crate) fn validate_person_fields(name: Option<&str>, email: Option<&str>) -> ValidationResult {
    if is_blank(name) {
        return Err(ValidationError::BlankPersonName);
    }
    let email = match email {
        Some(email) if !is_blank(Some(email)) => email,
        _ => return Err(ValidationError::BlankEmail),
    };
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}
