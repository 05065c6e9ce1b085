//! Repository port for todo persistence, lookup, and aggregation.

use crate::todo::domain::{NewTodo, TodoId, TodoItem};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Per-date record counts produced by [`TodoRepository::date_summary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateTally {
    /// Number of records scoped to the date.
    pub total: u64,
    /// Number of those records not yet completed.
    pub incomplete: u64,
}

/// Todo persistence contract.
///
/// Each method is its own transaction boundary; mutations are atomic with
/// respect to the record they touch.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Persists a draft, assigning the next identifier.
    ///
    /// Returns the full stored record.
    async fn insert(&self, draft: &NewTodo) -> TodoRepositoryResult<TodoItem>;

    /// Persists changes to an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the record does not
    /// exist.
    async fn update(&self, item: &TodoItem) -> TodoRepositoryResult<()>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<TodoItem>>;

    /// Returns records, fully materialised.
    ///
    /// Without a filter, records are ordered by date descending then creation
    /// time descending. With a filter, only records on that exact date are
    /// returned, ordered by creation time descending.
    async fn list(&self, date_filter: Option<NaiveDate>) -> TodoRepositoryResult<Vec<TodoItem>>;

    /// Removes a record permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the record does not
    /// exist.
    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()>;

    /// Groups all records by date with exact total and incomplete counts.
    ///
    /// Dates without records are absent from the mapping, and iteration
    /// order carries no meaning.
    async fn date_summary(&self) -> TodoRepositoryResult<HashMap<NaiveDate, DateTally>>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The record was not found.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
