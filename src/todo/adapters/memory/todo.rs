//! In-memory todo repository with storage-assigned identifiers.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::todo::{
    domain::{NewTodo, PersistedTodoData, TodoId, TodoItem},
    ports::{DateTally, TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// Identifiers are assigned from a monotonic counter, mirroring the
/// auto-increment behaviour of the durable adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    todos: HashMap<TodoId, TodoItem>,
    next_id: i64,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_state(&self) -> TodoRepositoryResult<RwLockReadGuard<'_, InMemoryTodoState>> {
        self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write_state(&self) -> TodoRepositoryResult<RwLockWriteGuard<'_, InMemoryTodoState>> {
        self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Orders records newest-date-first, ties broken by newest-created-first.
fn unfiltered_order(a: &TodoItem, b: &TodoItem) -> std::cmp::Ordering {
    b.date()
        .cmp(&a.date())
        .then_with(|| b.created_at().cmp(&a.created_at()))
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, draft: &NewTodo) -> TodoRepositoryResult<TodoItem> {
        let mut state = self.write_state()?;
        state.next_id += 1;
        let item = TodoItem::from_persisted(PersistedTodoData {
            id: TodoId::new(state.next_id),
            text: draft.text().clone(),
            completed: draft.completed(),
            date: draft.date(),
            created_at: draft.created_at(),
            updated_at: draft.updated_at(),
        });
        state.todos.insert(item.id(), item.clone());
        Ok(item)
    }

    async fn update(&self, item: &TodoItem) -> TodoRepositoryResult<()> {
        let mut state = self.write_state()?;
        let stored = state
            .todos
            .get_mut(&item.id())
            .ok_or(TodoRepositoryError::NotFound(item.id()))?;
        *stored = item.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<TodoItem>> {
        let state = self.read_state()?;
        Ok(state.todos.get(&id).cloned())
    }

    async fn list(&self, date_filter: Option<NaiveDate>) -> TodoRepositoryResult<Vec<TodoItem>> {
        let state = self.read_state()?;
        let mut items: Vec<TodoItem> = state
            .todos
            .values()
            .filter(|item| date_filter.is_none_or(|date| item.date() == date))
            .cloned()
            .collect();
        if date_filter.is_some() {
            items.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        } else {
            items.sort_by(unfiltered_order);
        }
        Ok(items)
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        let mut state = self.write_state()?;
        state
            .todos
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoRepositoryError::NotFound(id))
    }

    async fn date_summary(&self) -> TodoRepositoryResult<HashMap<NaiveDate, DateTally>> {
        let state = self.read_state()?;
        let mut summary: HashMap<NaiveDate, DateTally> = HashMap::new();
        for item in state.todos.values() {
            let tally = summary.entry(item.date()).or_default();
            tally.total += 1;
            if !item.completed() {
                tally.incomplete += 1;
            }
        }
        Ok(summary)
    }
}
