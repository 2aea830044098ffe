//! Country use-case service.
//!
//! # Responsibility
//! - Provide add/list/get entry points over a country store.
//! - Enforce name presence and case-sensitive name uniqueness.
//! - Resolve country names for the person service.
//!
//! # Invariants
//! - A rejected add leaves the store unchanged.
//! - Lookup of an absent or unknown ID is `None`, never an error.

use crate::dto::country::{CountryAddRequest, CountryResponse};
use crate::model::country::CountryId;
use crate::repo::country_repo::CountryRepository;
use crate::service::error::{ServiceError, ServiceResult};
use crate::validation::ValidationError;
use log::{debug, info};

/// Read-only country name resolution used by person projections.
pub trait CountryLookup {
    fn country_name(&self, id: CountryId) -> Option<String>;
}

/// Country service facade over repository implementations.
pub struct CountryService<R: CountryRepository> {
    repo: R,
}

impl<R: CountryRepository> CountryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds one country and returns its projection.
    ///
    /// # Errors
    /// - `MissingArgument` when `request` is `None`.
    /// - `Validation(BlankCountryName)` for a blank name.
    /// - `Validation(DuplicateCountryName)` when the exact name is stored.
    pub fn add_country(&self, request: Option<CountryAddRequest>) -> ServiceResult<CountryResponse> {
        let request = request.ok_or(ServiceError::MissingArgument("country_add_request"))?;
        if let Err(err) = self.check_add_request(&request) {
            info!(
                "event=country_add module=country_service status=rejected reason={}",
                err.code()
            );
            return Err(err.into());
        }

        let country = request.into_country();
        self.repo.insert_country(&country)?;
        info!(
            "event=country_add module=country_service status=ok country_id={}",
            country.id
        );
        Ok(CountryResponse::from(&country))
    }

    /// Lists every stored country in insertion order.
    pub fn get_all_countries(&self) -> Vec<CountryResponse> {
        self.repo
            .list_countries()
            .iter()
            .map(CountryResponse::from)
            .collect()
    }

    pub fn get_country_by_id(&self, id: Option<CountryId>) -> Option<CountryResponse> {
        let id = id?;
        let found = self.repo.get_country(id);
        if found.is_none() {
            debug!("event=country_get module=country_service status=miss country_id={id}");
        }
        found.as_ref().map(CountryResponse::from)
    }

    fn check_add_request(&self, request: &CountryAddRequest) -> Result<(), ValidationError> {
        request.validate()?;
        let name = request.name.as_deref().unwrap_or_default();
        if self.repo.contains_name(name) {
            return Err(ValidationError::DuplicateCountryName(name.to_string()));
        }
        Ok(())
    }
}

impl<R: CountryRepository> CountryLookup for CountryService<R> {
    fn country_name(&self, id: CountryId) -> Option<String> {
        self.repo.get_country(id).map(|country| country.name)
    }
}
