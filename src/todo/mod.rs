//! Date-scoped todo record management.
//!
//! This module owns the persistence core of the service: the record
//! aggregate and its validation rules, the repository contract covering the
//! three mutations and four query shapes (list-all, list-by-date, lookup,
//! date-grouped summary), and the adapters backing it. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
