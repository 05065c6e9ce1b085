//! Domain model for date-scoped todo records.
//!
//! The domain owns the record aggregate, its validated scalars, and the
//! validation error taxonomy while keeping all infrastructure concerns
//! outside of the domain boundary.

mod date;
mod error;
mod ids;
mod item;
mod text;

pub use date::parse_date;
pub use error::TodoDomainError;
pub use ids::TodoId;
pub use item::{NewTodo, PersistedTodoData, TodoChanges, TodoItem};
pub use text::TodoText;
