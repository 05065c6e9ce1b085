//! Orchestration services for todo records.

mod crud;

pub use crud::{
    CreateTodoRequest, TodoService, TodoServiceError, TodoServiceResult, UpdateTodoRequest,
};
