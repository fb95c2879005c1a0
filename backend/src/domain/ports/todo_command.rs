//! Driving port for todo mutations.
//!
//! Inbound adapters call [`TodoCommand`] with already validated input; the
//! implementation owns existence checks and merge semantics.

use async_trait::async_trait;

use crate::domain::{Error, NewTodo, Todo, TodoId, TodoPatch};

/// Driving port for creating, updating and deleting todos.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoCommand: Send + Sync {
    /// Create a todo, assigning its id and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns an internal or service-unavailable error when storage fails.
    async fn create(&self, todo: NewTodo) -> Result<Todo, Error>;

    /// Apply a partial update to an existing todo.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when `id` does not exist, or a storage error.
    async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo, Error>;

    /// Permanently remove a todo.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when `id` does not exist, or a storage error.
    async fn delete(&self, id: TodoId) -> Result<(), Error>;
}
