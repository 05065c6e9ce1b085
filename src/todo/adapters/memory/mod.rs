//! In-memory adapters for tests and ephemeral runs.

mod todo;

pub use todo::InMemoryTodoRepository;
