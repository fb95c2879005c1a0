//! Port for todo persistence.
//!
//! The [`TodoRepository`] trait is the only way the domain touches the
//! `todos` table. It exposes exactly five access patterns: insert, ascending
//! scan, lookup by id, partial update by id, and delete by id.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{NewTodo, Todo, TodoId, TodoPatch};

/// Errors raised by todo repository adapters.
///
/// The domain service maps `Connection` to a 503 and `Query` to a redacted
/// 500; the message is only ever logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoRepositoryError {
    /// The store could not be reached, or stayed locked past the busy timeout.
    #[error("todo repository connection failed: {message}")]
    Connection { message: String },

    /// A statement failed or returned a row the domain rejects.
    #[error("todo repository query failed: {message}")]
    Query { message: String },
}

impl TodoRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for todo storage and retrieval.
///
/// Each method runs as a single atomic statement against the store and
/// checks out its own connection for the duration of the call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Persist a new todo and return the stored record with its assigned id.
    async fn insert(
        &self,
        todo: &NewTodo,
        created_at: DateTime<Utc>,
    ) -> Result<Todo, TodoRepositoryError>;

    /// Return every todo ordered by ascending id.
    async fn list(&self) -> Result<Vec<Todo>, TodoRepositoryError>;

    /// Fetch a todo by id, returning `None` when it does not exist.
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoRepositoryError>;

    /// Write the fields present in `patch` to the row matching `id` and return
    /// the row as stored afterwards.
    ///
    /// Columns absent from the patch are not written, so concurrent patches
    /// touching different fields both survive. An empty patch reads the row
    /// without writing. Returns `None` when no row matched.
    async fn update(
        &self,
        id: TodoId,
        patch: &TodoPatch,
    ) -> Result<Option<Todo>, TodoRepositoryError>;

    /// Remove the todo with the given id.
    ///
    /// Returns `false` when no row matched.
    async fn delete(&self, id: TodoId) -> Result<bool, TodoRepositoryError>;
}
