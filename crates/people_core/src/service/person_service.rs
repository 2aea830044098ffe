//! Person use-case service.
//!
//! # Responsibility
//! - Provide add/get/list/filter/sort/update/delete entry points.
//! - Enrich projections with the resolved country name and computed age.
//!
//! # Invariants
//! - Validation runs before any store mutation.
//! - Update replaces every editable field; the ID never changes.
//! - Unknown filter and sort selectors fall back to the unchanged list.

use crate::dto::person::{PersonAddRequest, PersonResponse, PersonUpdateRequest};
use crate::model::person::{Person, PersonId};
use crate::repo::person_repo::PersonRepository;
use crate::service::country_service::CountryLookup;
use crate::service::error::{ServiceError, ServiceResult};
use crate::service::person_query::{filter_persons, sort_persons, PersonField, SortOrder};
use crate::validation::is_blank;
use chrono::{Local, NaiveDate};
use log::{debug, info};

/// Source of the current date used for age projection.
pub type Clock = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Person service facade over a person store and a country lookup.
pub struct PersonService<'c, R: PersonRepository, C: CountryLookup> {
    repo: R,
    countries: &'c C,
    today: Clock,
}

impl<'c, R: PersonRepository, C: CountryLookup> PersonService<'c, R, C> {
    /// Creates a service resolving country names through `countries`.
    pub fn new(repo: R, countries: &'c C) -> Self {
        Self {
            repo,
            countries,
            today: local_today,
        }
    }

    /// Replaces the clock used for age computation.
    pub fn with_clock(mut self, today: Clock) -> Self {
        self.today = today;
        self
    }

    /// Adds one person and returns its enriched projection.
    ///
    /// # Errors
    /// - `MissingArgument` when `request` is `None`.
    /// - `Validation` when name/email are blank or email is malformed.
    pub fn add_person(&self, request: Option<PersonAddRequest>) -> ServiceResult<PersonResponse> {
        let request = request.ok_or(ServiceError::MissingArgument("person_add_request"))?;
        if let Err(err) = request.validate() {
            info!(
                "event=person_add module=person_service status=rejected reason={}",
                err.code()
            );
            return Err(err.into());
        }

        let person = request.into_person();
        self.repo.insert_person(&person)?;
        info!(
            "event=person_add module=person_service status=ok person_id={}",
            person.id
        );
        Ok(self.project(&person))
    }

    /// Lists every stored person in insertion order.
    pub fn get_all_persons(&self) -> Vec<PersonResponse> {
        let today = (self.today)();
        self.repo
            .list_persons()
            .iter()
            .map(|person| self.project_at(person, today))
            .collect()
    }

    pub fn get_person_by_id(&self, id: Option<PersonId>) -> Option<PersonResponse> {
        let id = id?;
        self.repo
            .get_person(id)
            .map(|person| self.project(&person))
    }

    /// Filters all persons by case-insensitive containment on one field.
    ///
    /// A missing selector, blank search text, or non-searchable field returns
    /// every person.
    pub fn get_filtered_persons(
        &self,
        search_by: Option<PersonField>,
        search_text: Option<&str>,
    ) -> Vec<PersonResponse> {
        let all = self.get_all_persons();
        match (search_by, search_text) {
            (Some(field), Some(text)) if !is_blank(Some(text)) => filter_persons(all, field, text),
            _ => all,
        }
    }

    /// String-selector variant of [`Self::get_filtered_persons`].
    ///
    /// Unknown selectors are logged and return every person.
    pub fn get_filtered_persons_by(
        &self,
        search_by: &str,
        search_text: Option<&str>,
    ) -> Vec<PersonResponse> {
        let field = PersonField::parse(search_by);
        if field.is_none() && !search_by.trim().is_empty() {
            debug!("event=person_filter module=person_service status=fallback reason=unknown_field");
        }
        self.get_filtered_persons(field, search_text)
    }

    /// Reorders `persons` by `sort_by`; `None` keeps the given order.
    pub fn get_sorted_persons(
        &self,
        persons: Vec<PersonResponse>,
        sort_by: Option<PersonField>,
        order: SortOrder,
    ) -> Vec<PersonResponse> {
        match sort_by {
            Some(field) => sort_persons(persons, field, order),
            None => persons,
        }
    }

    /// String-selector variant of [`Self::get_sorted_persons`].
    ///
    /// Unknown selectors are logged and keep the given order.
    pub fn get_sorted_persons_by(
        &self,
        persons: Vec<PersonResponse>,
        sort_by: &str,
        order: SortOrder,
    ) -> Vec<PersonResponse> {
        let field = PersonField::parse(sort_by);
        if field.is_none() && !sort_by.trim().is_empty() {
            debug!("event=person_sort module=person_service status=fallback reason=unknown_field");
        }
        self.get_sorted_persons(persons, field, order)
    }

    /// Replaces the editable fields of one stored person.
    ///
    /// # Errors
    /// - `MissingArgument` when `request` is `None`.
    /// - `Validation` when name/email are invalid.
    /// - `NotFound` when no person has `request.id`.
    pub fn update_person(
        &self,
        request: Option<PersonUpdateRequest>,
    ) -> ServiceResult<PersonResponse> {
        let request = request.ok_or(ServiceError::MissingArgument("person_update_request"))?;
        if let Err(err) = request.validate() {
            info!(
                "event=person_update module=person_service status=rejected reason={} person_id={}",
                err.code(),
                request.id
            );
            return Err(err.into());
        }

        let mut person = self
            .repo
            .get_person(request.id)
            .ok_or(ServiceError::NotFound(request.id))?;
        request.apply_to(&mut person);
        self.repo.update_person(&person)?;
        info!(
            "event=person_update module=person_service status=ok person_id={}",
            person.id
        );
        Ok(self.project(&person))
    }

    /// Deletes one person; `Ok(false)` when the ID is unknown.
    pub fn delete_person(&self, id: Option<PersonId>) -> ServiceResult<bool> {
        let id = id.ok_or(ServiceError::MissingArgument("person_id"))?;
        let removed = self.repo.delete_person(id);
        info!(
            "event=person_delete module=person_service status={} person_id={id}",
            if removed { "ok" } else { "miss" }
        );
        Ok(removed)
    }

    fn project(&self, person: &Person) -> PersonResponse {
        self.project_at(person, (self.today)())
    }

    fn project_at(&self, person: &Person, today: NaiveDate) -> PersonResponse {
        let country_name = person
            .country_id
            .and_then(|country_id| self.countries.country_name(country_id));
        PersonResponse::from_person(person, country_name, today)
    }
}

#[cfg(test)]
mod tests {
    use super::PersonService;
    use crate::dto::person::PersonAddRequest;
    use crate::model::country::CountryId;
    use crate::repo::person_repo::InMemoryPersonRepository;
    use crate::service::country_service::CountryLookup;
    use chrono::NaiveDate;
    use uuid::Uuid;

    struct NoCountries;

    impl CountryLookup for NoCountries {
        fn country_name(&self, _id: CountryId) -> Option<String> {
            None
        }
    }

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 1).unwrap()
    }

    #[test]
    fn projection_uses_injected_clock_and_tolerates_dangling_country() {
        let service =
            PersonService::new(InMemoryPersonRepository::new(), &NoCountries).with_clock(fixed_today);

        let mut request = PersonAddRequest::new("Dana", "dana@example.com");
        request.date_of_birth = NaiveDate::from_ymd_opt(2000, 12, 31);
        request.country_id = Some(Uuid::new_v4());

        let added = service.add_person(Some(request)).unwrap();
        assert_eq!(added.age, Some(30));
        assert!(added.country_id.is_some());
        assert_eq!(added.country_name, None);
    }
}
