//! HTTP transport for the todo service.
//!
//! A thin axum layer: wire DTOs, request handlers, and error mapping. Data
//! flows one direction per request — deserialise, validate, call the
//! service, serialise.

pub mod dto;
pub mod error;
pub mod routes;

pub use error::{ApiError, ErrorResponse};
