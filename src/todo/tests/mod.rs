//! Unit tests for the todo bounded context.
