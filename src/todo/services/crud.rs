//! Service layer for todo creation, lookup, mutation, and aggregation.

use crate::todo::{
    domain::{
        NewTodo, TodoChanges, TodoDomainError, TodoId, TodoItem, TodoText, parse_date,
    },
    ports::{DateTally, TodoRepository, TodoRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a todo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoRequest {
    text: String,
    date: String,
    completed: bool,
}

impl CreateTodoRequest {
    /// Creates a request with the required fields; `completed` defaults to
    /// false.
    #[must_use]
    pub fn new(text: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            date: date.into(),
            completed: false,
        }
    }

    /// Sets the initial completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Request payload for a partial update; absent fields keep their stored
/// values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTodoRequest {
    text: Option<String>,
    completed: Option<bool>,
    date: Option<String>,
}

impl UpdateTodoRequest {
    /// Creates an empty update request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets replacement text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the replacement completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Sets a replacement date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Validates all supplied fields before any of them is applied.
    fn into_changes(self) -> Result<TodoChanges, TodoDomainError> {
        Ok(TodoChanges {
            text: self.text.map(TodoText::new).transpose()?,
            completed: self.completed,
            date: self.date.as_deref().map(parse_date).transpose()?,
        })
    }
}

/// Service-level errors for todo operations.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// Input validation failed; the operation was aborted before any write.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Todo orchestration service.
///
/// Owns validation and clock-sourced timestamps; persistence goes through the
/// injected repository. Timestamps are taken at the moment of each operation,
/// never captured ahead of time.
pub struct TodoService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

// Manual impl: a derive would constrain `R: Clone` and `C: Clone`, but only
// the handles are cloned.
impl<R, C> Clone for TodoService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TodoService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new todo service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a todo record, assigning an identifier and both timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Domain`] when the text or date is invalid;
    /// nothing is persisted in that case.
    pub async fn create(&self, request: CreateTodoRequest) -> TodoServiceResult<TodoItem> {
        let text = TodoText::new(request.text)?;
        let date = parse_date(&request.date)?;
        let draft = NewTodo::new(text, date, request.completed, &*self.clock);
        Ok(self.repository.insert(&draft).await?)
    }

    /// Retrieves a todo record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] (wrapped) when the record
    /// does not exist.
    pub async fn get_by_id(&self, id: TodoId) -> TodoServiceResult<TodoItem> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TodoRepositoryError::NotFound(id).into())
    }

    /// Lists todo records, optionally restricted to one calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Domain`] when the filter does not parse as
    /// a date.
    pub async fn list(&self, date_filter: Option<&str>) -> TodoServiceResult<Vec<TodoItem>> {
        let date = date_filter.map(parse_date).transpose()?;
        Ok(self.repository.list(date).await?)
    }

    /// Applies a partial update and refreshes `updated_at`.
    ///
    /// All supplied fields are validated before the record is touched, so an
    /// invalid field leaves the record fully unchanged. An update with no
    /// fields still refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Domain`] on invalid fields and
    /// [`TodoRepositoryError::NotFound`] (wrapped) when the record does not
    /// exist.
    pub async fn update(
        &self,
        id: TodoId,
        request: UpdateTodoRequest,
    ) -> TodoServiceResult<TodoItem> {
        let changes = request.into_changes()?;
        let mut item = self.get_by_id(id).await?;
        item.apply(changes, &*self.clock);
        self.repository.update(&item).await?;
        Ok(item)
    }

    /// Deletes a todo record permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] (wrapped) when the record
    /// does not exist.
    pub async fn delete(&self, id: TodoId) -> TodoServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }

    /// Returns exact per-date record counts, keyed by calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the aggregate query
    /// fails.
    pub async fn date_summary(&self) -> TodoServiceResult<HashMap<NaiveDate, DateTally>> {
        Ok(self.repository.date_summary().await?)
    }
}
