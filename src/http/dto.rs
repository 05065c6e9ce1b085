//! Wire DTOs for the todo HTTP API.

use crate::todo::domain::TodoItem;
use crate::todo::ports::DateTally;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Todo record as serialised on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    /// Record identifier.
    pub id: i64,
    /// Trimmed todo text.
    pub text: String,
    /// Completion flag.
    pub completed: bool,
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: NaiveDate,
    /// Creation timestamp, ISO-8601.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp, ISO-8601.
    pub updated_at: DateTime<Utc>,
}

impl From<&TodoItem> for TodoResponse {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id().value(),
            text: item.text().as_str().to_owned(),
            completed: item.completed(),
            date: item.date(),
            created_at: item.created_at(),
            updated_at: item.updated_at(),
        }
    }
}

/// Body of `POST /api/todos`.
///
/// Required fields are modelled as options so the handler can answer a
/// structured validation error instead of a deserialisation failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodoBody {
    /// Todo text; required.
    pub text: Option<String>,
    /// Calendar date in `YYYY-MM-DD` form; required.
    pub date: Option<String>,
    /// Initial completion flag; defaults to false.
    pub completed: Option<bool>,
}

/// Body of `PUT /api/todos/{id}`; absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodoBody {
    /// Replacement text.
    pub text: Option<String>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
    /// Replacement calendar date in `YYYY-MM-DD` form.
    pub date: Option<String>,
}

/// Query string of `GET /api/todos`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Optional exact-date filter in `YYYY-MM-DD` form.
    pub date: Option<String>,
}

/// Per-date counts as serialised in the date summary mapping.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DateTallyResponse {
    /// Number of records on the date.
    pub total: u64,
    /// Number of those records not yet completed.
    pub incomplete: u64,
}

impl From<DateTally> for DateTallyResponse {
    fn from(tally: DateTally) -> Self {
        Self {
            total: tally.total,
            incomplete: tally.incomplete,
        }
    }
}

/// Liveness probe payload.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthResponse {
    /// Service status label.
    pub status: &'static str,
    /// Human-readable status message.
    pub message: &'static str,
}

impl HealthResponse {
    /// Payload reported while the service is up.
    #[must_use]
    pub const fn healthy() -> Self {
        Self {
            status: "healthy",
            message: "Backend is running",
        }
    }
}

/// Success acknowledgment carrying only a message.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MessageResponse {
    /// Human-readable acknowledgment.
    pub message: &'static str,
}
