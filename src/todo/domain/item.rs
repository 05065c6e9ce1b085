//! Todo aggregate root and related record types.

use super::{TodoId, TodoText};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Todo aggregate root.
///
/// Instances only exist once the storage layer has assigned an identifier;
/// callers build a [`NewTodo`] draft and receive a `TodoItem` back from the
/// repository insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    id: TodoId,
    text: TodoText,
    completed: bool,
    date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted todo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Storage-assigned identifier.
    pub id: TodoId,
    /// Persisted text.
    pub text: TodoText,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted calendar date.
    pub date: NaiveDate,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TodoItem {
    /// Reconstructs a todo record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            text: data.text,
            completed: data.completed,
            date: data.date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the todo text.
    #[must_use]
    pub const fn text(&self) -> &TodoText {
        &self.text
    }

    /// Returns whether the todo is completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the calendar date the todo is scoped to.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a partial set of field changes and refreshes `updated_at`.
    ///
    /// The timestamp is refreshed even when `changes` carries no fields, so
    /// an empty update still registers as a mutation.
    pub fn apply(&mut self, changes: TodoChanges, clock: &impl Clock) {
        if let Some(text) = changes.text {
            self.text = text;
        }
        if let Some(completed) = changes.completed {
            self.completed = completed;
        }
        if let Some(date) = changes.date {
            self.date = date;
        }
        self.updated_at = clock.utc();
    }
}

/// Validated draft for a todo record awaiting an identifier from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    text: TodoText,
    completed: bool,
    date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NewTodo {
    /// Creates a draft with both timestamps set to the current clock time.
    #[must_use]
    pub fn new(text: TodoText, date: NaiveDate, completed: bool, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            text,
            completed,
            date,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the draft text.
    #[must_use]
    pub const fn text(&self) -> &TodoText {
        &self.text
    }

    /// Returns the draft completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the draft calendar date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the draft creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the draft mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Partial set of validated field changes for an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    /// Replacement text, already validated.
    pub text: Option<TodoText>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
    /// Replacement calendar date, already parsed.
    pub date: Option<NaiveDate>,
}
