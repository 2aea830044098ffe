//! Domain records for the people directory.
//!
//! # Responsibility
//! - Define the canonical country and person records held by the stores.
//! - Keep request/response shapes out of storage types.
//!
//! # Invariants
//! - Every record is identified by a UUID assigned by the owning store.
//! - Records never carry derived fields (age, resolved country name).

pub mod country;
pub mod person;
