//! Diesel row models for todo persistence.

use super::schema::todos;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for todo records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoRow {
    /// Storage-assigned record identifier.
    pub id: i64,
    /// Persisted text.
    pub text: String,
    /// Completion flag.
    pub completed: bool,
    /// Calendar date.
    pub date: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for todo records; the identifier is assigned by the table's
/// sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// Trimmed text.
    pub text: String,
    /// Completion flag.
    pub completed: bool,
    /// Calendar date.
    pub date: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset applied by record updates; `created_at` stays immutable.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todos)]
pub struct TodoChangesetRow {
    /// Replacement text.
    pub text: String,
    /// Replacement completion flag.
    pub completed: bool,
    /// Replacement calendar date.
    pub date: NaiveDate,
    /// Refreshed mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Aggregate row produced by the date summary query.
#[derive(Debug, Clone, QueryableByName)]
pub struct DateTallyRow {
    /// Grouped calendar date.
    #[diesel(sql_type = diesel::sql_types::Date)]
    pub date: NaiveDate,
    /// Count of records on the date.
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub total: i64,
    /// Count of records on the date not yet completed.
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub incomplete: i64,
}
