//! Person filter and sort rules.
//!
//! # Responsibility
//! - Map field selectors to text extraction (filter) and ordering (sort).
//! - Parse selector strings coming from presentation callers.
//!
//! # Invariants
//! - Filtering is case-insensitive substring containment on the field text.
//! - A record whose field is absent never matches a non-blank search.
//! - Sorting is stable; absent values order first when ascending.
//! - String fields order case-insensitively.

use crate::dto::person::PersonResponse;
use crate::validation::is_blank;
use std::cmp::Ordering;

/// Person projection field usable as filter or sort selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonField {
    Name,
    Email,
    DateOfBirth,
    Age,
    Gender,
    CountryName,
    Address,
    ReceiveNewsletters,
}

impl PersonField {
    /// Parses a selector, accepting property-style and snake_case names.
    ///
    /// Returns `None` for blank or unknown selectors.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().replace('_', "").to_ascii_lowercase();
        match normalized.as_str() {
            "name" | "personname" => Some(Self::Name),
            "email" => Some(Self::Email),
            "dateofbirth" | "dob" => Some(Self::DateOfBirth),
            "age" => Some(Self::Age),
            "gender" => Some(Self::Gender),
            "country" | "countryid" | "countryname" => Some(Self::CountryName),
            "address" => Some(Self::Address),
            "receivenewsletters" | "newsletters" => Some(Self::ReceiveNewsletters),
            _ => None,
        }
    }

    /// Whether filters can match against this field.
    pub fn is_searchable(self) -> bool {
        !matches!(self, Self::Age | Self::ReceiveNewsletters)
    }

    /// Text form of this field for `person`, `None` when the value is absent.
    pub fn text_of(self, person: &PersonResponse) -> Option<String> {
        match self {
            Self::Name => Some(person.name.clone()),
            Self::Email => Some(person.email.clone()),
            Self::DateOfBirth => person.formatted_date_of_birth(),
            Self::Age => person.age.map(|age| age.to_string()),
            Self::Gender => person.gender.map(|gender| gender.to_string()),
            Self::CountryName => person.country_name.clone(),
            Self::Address => person.address.clone(),
            Self::ReceiveNewsletters => Some(person.receive_newsletters.to_string()),
        }
    }

    fn compare(self, left: &PersonResponse, right: &PersonResponse) -> Ordering {
        match self {
            Self::Name => {
                compare_ignore_case(Some(left.name.as_str()), Some(right.name.as_str()))
            }
            Self::Email => {
                compare_ignore_case(Some(left.email.as_str()), Some(right.email.as_str()))
            }
            Self::DateOfBirth => left.date_of_birth.cmp(&right.date_of_birth),
            Self::Age => left.age.cmp(&right.age),
            Self::Gender => left.gender.cmp(&right.gender),
            Self::CountryName => compare_ignore_case(
                left.country_name.as_deref(),
                right.country_name.as_deref(),
            ),
            Self::Address => {
                compare_ignore_case(left.address.as_deref(), right.address.as_deref())
            }
            Self::ReceiveNewsletters => left.receive_newsletters.cmp(&right.receive_newsletters),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Parses `asc|ascending|desc|descending`, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Ascending),
            "desc" | "descending" => Some(Self::Descending),
            _ => None,
        }
    }
}

/// Keeps persons whose `field` text contains `search_text`, ignoring case.
///
/// Non-searchable fields and blank search text keep every person.
pub fn filter_persons(
    persons: Vec<PersonResponse>,
    field: PersonField,
    search_text: &str,
) -> Vec<PersonResponse> {
    if is_blank(Some(search_text)) || !field.is_searchable() {
        return persons;
    }
    // Surrounding whitespace is part of the needle.
    let needle = search_text.to_lowercase();

    persons
        .into_iter()
        .filter(|person| {
            field
                .text_of(person)
                .is_some_and(|text| text.to_lowercase().contains(needle.as_str()))
        })
        .collect()
}

/// Stable sort of `persons` by `field` in `order`.
pub fn sort_persons(
    mut persons: Vec<PersonResponse>,
    field: PersonField,
    order: SortOrder,
) -> Vec<PersonResponse> {
    persons.sort_by(|left, right| {
        let ordering = field.compare(left, right);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    persons
}

fn compare_ignore_case(left: Option<&str>, right: Option<&str>) -> Ordering {
    left.map(str::to_lowercase).cmp(&right.map(str::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::{compare_ignore_case, PersonField, SortOrder};
    use std::cmp::Ordering;

    #[test]
    fn field_parse_accepts_property_and_snake_case_names() {
        assert_eq!(PersonField::parse("PersonName"), Some(PersonField::Name));
        assert_eq!(
            PersonField::parse("date_of_birth"),
            Some(PersonField::DateOfBirth)
        );
        assert_eq!(
            PersonField::parse("CountryID"),
            Some(PersonField::CountryName)
        );
        assert_eq!(
            PersonField::parse("ReceiveNewsLetters"),
            Some(PersonField::ReceiveNewsletters)
        );
        assert_eq!(PersonField::parse("shoe_size"), None);
        assert_eq!(PersonField::parse("  "), None);
    }

    #[test]
    fn sort_order_parse_is_case_insensitive() {
        assert_eq!(SortOrder::parse("DESC"), Some(SortOrder::Descending));
        assert_eq!(SortOrder::parse("Asc"), Some(SortOrder::Ascending));
        assert_eq!(SortOrder::parse("sideways"), None);
    }

    #[test]
    fn absent_strings_order_first() {
        assert_eq!(compare_ignore_case(None, Some("a")), Ordering::Less);
        assert_eq!(compare_ignore_case(Some("B"), Some("a")), Ordering::Greater);
        assert_eq!(compare_ignore_case(Some("abc"), Some("ABC")), Ordering::Equal);
    }
}
