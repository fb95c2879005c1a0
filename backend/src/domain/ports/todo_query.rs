//! Driving port for todo reads.

use async_trait::async_trait;

use crate::domain::{Error, Todo, TodoId};

/// Driving port for listing and fetching todos.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoQuery: Send + Sync {
    /// Return all todos in ascending id order.
    async fn list(&self) -> Result<Vec<Todo>, Error>;

    /// Fetch a single todo.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when `id` does not exist.
    async fn get(&self, id: TodoId) -> Result<Todo, Error>;
}
