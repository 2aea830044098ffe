//! Core use-case services.
//!
//! # Responsibility
//! - Validate requests, orchestrate store calls, shape projections.
//! - Keep presentation callers decoupled from store details.
//!
//! # Invariants
//! - Validation always runs before any store mutation.
//! - Lookups return `Option`, delete returns `bool`, update reports
//!   `ServiceError::NotFound`.

pub mod country_service;
pub mod error;
pub mod person_query;
pub mod person_service;
