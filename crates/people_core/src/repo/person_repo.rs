//! Person store contract and in-memory implementation.

use crate::model::person::{Person, PersonId};
use crate::repo::{RepoError, RepoResult};
use std::cell::RefCell;

/// Store interface for person records.
pub trait PersonRepository {
    fn insert_person(&self, person: &Person) -> RepoResult<PersonId>;
    /// Replaces the stored record with the same ID.
    fn update_person(&self, person: &Person) -> RepoResult<()>;
    fn get_person(&self, id: PersonId) -> Option<Person>;
    /// All persons in insertion order.
    fn list_persons(&self) -> Vec<Person>;
    /// Returns `false` when no record matched.
    fn delete_person(&self, id: PersonId) -> bool;
}

/// Process-local person store; contents are lost on drop.
#[derive(Debug, Default)]
pub struct InMemoryPersonRepository {
    persons: RefCell<Vec<Person>>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersonRepository for InMemoryPersonRepository {
    fn insert_person(&self, person: &Person) -> RepoResult<PersonId> {
        let mut persons = self.persons.borrow_mut();
        if persons.iter().any(|existing| existing.id == person.id) {
            return Err(RepoError::DuplicateId(person.id));
        }
        persons.push(person.clone());
        Ok(person.id)
    }

    fn update_person(&self, person: &Person) -> RepoResult<()> {
        let mut persons = self.persons.borrow_mut();
        let slot = persons
            .iter_mut()
            .find(|existing| existing.id == person.id)
            .ok_or(RepoError::NotFound(person.id))?;
        *slot = person.clone();
        Ok(())
    }

    fn get_person(&self, id: PersonId) -> Option<Person> {
        self.persons
            .borrow()
            .iter()
            .find(|person| person.id == id)
            .cloned()
    }

    fn list_persons(&self) -> Vec<Person> {
        self.persons.borrow().clone()
    }

    fn delete_person(&self, id: PersonId) -> bool {
        let mut persons = self.persons.borrow_mut();
        match persons.iter().position(|person| person.id == id) {
            Some(index) => {
                // Vec::remove keeps the remaining insertion order.
                persons.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryPersonRepository, PersonRepository};
    use crate::model::person::Person;
    use crate::repo::RepoError;

    #[test]
    fn update_unknown_person_returns_not_found() {
        let repo = InMemoryPersonRepository::new();
        let person = Person::new("Ghost", "ghost@example.com");

        let err = repo.update_person(&person).unwrap_err();
        assert_eq!(err, RepoError::NotFound(person.id));
    }

    #[test]
    fn delete_keeps_order_of_remaining_rows() {
        let repo = InMemoryPersonRepository::new();
        let first = Person::new("First", "first@example.com");
        let second = Person::new("Second", "second@example.com");
        let third = Person::new("Third", "third@example.com");
        for person in [&first, &second, &third] {
            repo.insert_person(person).unwrap();
        }

        assert!(repo.delete_person(second.id));
        assert!(!repo.delete_person(second.id));

        let ids: Vec<_> = repo.list_persons().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![first.id, third.id]);
    }
}
