//! `PostgreSQL` repository implementation for todo storage.

use super::{
    models::{DateTallyRow, NewTodoRow, TodoChangesetRow, TodoRow},
    schema::todos,
};
use crate::todo::{
    domain::{NewTodo, PersistedTodoData, TodoId, TodoItem, TodoText},
    ports::{DateTally, TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use std::collections::HashMap;

/// `PostgreSQL` connection pool type used by todo adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// Table DDL applied at startup and by test setup.
const SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2025-08-28-000000_create_todos/up.sql");

/// `PostgreSQL`-backed todo repository.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: TodoPgPool,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

/// Applies the todos table DDL, statement by statement.
///
/// The DDL is idempotent (`IF NOT EXISTS`), so the helper is safe to run on
/// every startup, mirroring schema creation in the service's bootstrap path.
///
/// # Errors
///
/// Returns [`TodoRepositoryError::Persistence`] when a statement fails.
pub fn apply_schema(connection: &mut PgConnection) -> TodoRepositoryResult<()> {
    for statement in SCHEMA_SQL.split(';') {
        let trimmed = statement.trim();
        if trimmed.is_empty() || trimmed.lines().all(|line| line.trim().starts_with("--")) {
            continue;
        }
        diesel::sql_query(trimmed)
            .execute(connection)
            .map_err(TodoRepositoryError::persistence)?;
    }
    Ok(())
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn insert(&self, draft: &NewTodo) -> TodoRepositoryResult<TodoItem> {
        let new_row = NewTodoRow {
            text: draft.text().as_str().to_owned(),
            completed: draft.completed(),
            date: draft.date(),
            created_at: draft.created_at(),
            updated_at: draft.updated_at(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(todos::table)
                .values(&new_row)
                .returning(TodoRow::as_returning())
                .get_result::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            row_to_item(row)
        })
        .await
    }

    async fn update(&self, item: &TodoItem) -> TodoRepositoryResult<()> {
        let id = item.id();
        let changeset = TodoChangesetRow {
            text: item.text().as_str().to_owned(),
            completed: item.completed(),
            date: item.date(),
            updated_at: item.updated_at(),
        };

        self.run_blocking(move |connection| {
            let affected = diesel::update(todos::table.find(id.value()))
                .set(&changeset)
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TodoRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<TodoItem>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .find(id.value())
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_item).transpose()
        })
        .await
    }

    async fn list(&self, date_filter: Option<NaiveDate>) -> TodoRepositoryResult<Vec<TodoItem>> {
        self.run_blocking(move |connection| {
            let mut query = todos::table.select(TodoRow::as_select()).into_boxed();
            query = match date_filter {
                Some(date) => query
                    .filter(todos::date.eq(date))
                    .order(todos::created_at.desc()),
                None => query.order((todos::date.desc(), todos::created_at.desc())),
            };
            let rows = query
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_item).collect()
        })
        .await
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(todos::table.find(id.value()))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TodoRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn date_summary(&self) -> TodoRepositoryResult<HashMap<NaiveDate, DateTally>> {
        self.run_blocking(|connection| {
            let rows = diesel::sql_query(concat!(
                "SELECT date, COUNT(*) AS total, ",
                "COUNT(*) FILTER (WHERE NOT completed) AS incomplete ",
                "FROM todos GROUP BY date",
            ))
            .load::<DateTallyRow>(connection)
            .map_err(TodoRepositoryError::persistence)?;

            rows.into_iter()
                .map(|row| {
                    let tally = DateTally {
                        total: u64::try_from(row.total)
                            .map_err(TodoRepositoryError::persistence)?,
                        incomplete: u64::try_from(row.incomplete)
                            .map_err(TodoRepositoryError::persistence)?,
                    };
                    Ok((row.date, tally))
                })
                .collect()
        })
        .await
    }
}

fn row_to_item(row: TodoRow) -> TodoRepositoryResult<TodoItem> {
    let text = TodoText::new(row.text).map_err(TodoRepositoryError::persistence)?;
    Ok(TodoItem::from_persisted(PersistedTodoData {
        id: TodoId::new(row.id),
        text,
        completed: row.completed,
        date: row.date,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}
