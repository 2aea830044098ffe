//! Country store contract and in-memory implementation.

use crate::model::country::{Country, CountryId};
use crate::repo::{RepoError, RepoResult};
use std::cell::RefCell;

/// Store interface for country records.
pub trait CountryRepository {
    fn insert_country(&self, country: &Country) -> RepoResult<CountryId>;
    fn get_country(&self, id: CountryId) -> Option<Country>;
    /// All countries in insertion order.
    fn list_countries(&self) -> Vec<Country>;
    /// Exact, case-sensitive name lookup.
    fn contains_name(&self, name: &str) -> bool;
}

/// Process-local country store; contents are lost on drop.
#[derive(Debug, Default)]
pub struct InMemoryCountryRepository {
    countries: RefCell<Vec<Country>>,
}

impl InMemoryCountryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CountryRepository for InMemoryCountryRepository {
    fn insert_country(&self, country: &Country) -> RepoResult<CountryId> {
        let mut countries = self.countries.borrow_mut();
        if countries.iter().any(|existing| existing.id == country.id) {
            return Err(RepoError::DuplicateId(country.id));
        }
        countries.push(country.clone());
        Ok(country.id)
    }

    fn get_country(&self, id: CountryId) -> Option<Country> {
        self.countries
            .borrow()
            .iter()
            .find(|country| country.id == id)
            .cloned()
    }

    fn list_countries(&self) -> Vec<Country> {
        self.countries.borrow().clone()
    }

    fn contains_name(&self, name: &str) -> bool {
        self.countries
            .borrow()
            .iter()
            .any(|country| country.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::{CountryRepository, InMemoryCountryRepository};
    use crate::model::country::Country;
    use crate::repo::RepoError;

    #[test]
    fn insert_rejects_reused_id() {
        let repo = InMemoryCountryRepository::new();
        let country = Country::new("Chile");
        repo.insert_country(&country).unwrap();

        let err = repo.insert_country(&country).unwrap_err();
        assert_eq!(err, RepoError::DuplicateId(country.id));
        assert_eq!(repo.list_countries().len(), 1);
    }

    #[test]
    fn name_lookup_is_case_sensitive() {
        let repo = InMemoryCountryRepository::new();
        repo.insert_country(&Country::new("USA")).unwrap();

        assert!(repo.contains_name("USA"));
        assert!(!repo.contains_name("usa"));
    }
}
