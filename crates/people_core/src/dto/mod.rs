//! Request and response shapes exchanged with presentation callers.
//!
//! # Responsibility
//! - Define input requests and output projections per entity.
//! - Provide explicit, pure conversions between requests, records and
//!   projections.
//!
//! # Invariants
//! - Conversions never validate; callers run `validate()` first.
//! - Projections are the only place derived fields (age, country name) live.

pub mod country;
pub mod person;
