//! Core domain logic for the people directory.
//! This crate is the single source of truth for business invariants.

pub mod dto;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use dto::country::{CountryAddRequest, CountryResponse};
pub use dto::person::{PersonAddRequest, PersonResponse, PersonUpdateRequest};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::country::{Country, CountryId};
pub use model::person::{Gender, Person, PersonId};
pub use repo::country_repo::{CountryRepository, InMemoryCountryRepository};
pub use repo::person_repo::{InMemoryPersonRepository, PersonRepository};
pub use repo::{RepoError, RepoResult};
pub use service::country_service::{CountryLookup, CountryService};
pub use service::error::{ServiceError, ServiceResult};
pub use service::person_query::{PersonField, SortOrder};
pub use service::person_service::PersonService;
pub use validation::ValidationError;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
