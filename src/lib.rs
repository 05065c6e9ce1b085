//! Daybook: date-organised todo backend.
//!
//! This crate provides the storage and HTTP layers for a small todo service
//! where every record belongs to a calendar date.
//!
//! # Architecture
//!
//! Daybook follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`todo`]: Todo records, validation, repositories, and the service layer
//! - [`http`]: Axum transport (DTOs, handlers, error mapping)
//! - [`server`]: Router assembly and server startup
//! - [`config`]: Layered server configuration

pub mod config;
pub mod http;
pub mod server;
pub mod todo;
