//! Store contracts and in-memory implementations.
//!
//! # Responsibility
//! - Define data access contracts used by the services.
//! - Own each entity collection in insertion order.
//!
//! # Invariants
//! - Stores never validate request fields; services do that first.
//! - Stores reject duplicate IDs and report unknown IDs on update.

pub mod country_repo;
pub mod person_repo;

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Store-level error shared by country and person stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A record with this ID is already stored.
    DuplicateId(Uuid),
    NotFound(Uuid),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "record already stored: {id}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for RepoError {}
