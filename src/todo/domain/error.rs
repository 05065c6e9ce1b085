//! Error types for todo domain validation.

use thiserror::Error;

/// Errors returned while constructing domain todo values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The todo text is empty after trimming surrounding whitespace.
    #[error("todo text must not be empty")]
    EmptyText,

    /// The todo text exceeds the storage-backed maximum length.
    #[error("todo text exceeds {max} characters (got {got})")]
    TextTooLong {
        /// Maximum accepted length in characters.
        max: usize,
        /// Length of the rejected value.
        got: usize,
    },

    /// The date value does not parse as a `YYYY-MM-DD` calendar date.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
