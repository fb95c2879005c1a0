//! Todo domain service implementing the command and query driving ports.
//!
//! Every operation that addresses an existing todo goes through
//! [`TodoService::require_todo`] or maps an unmatched write to the same
//! error, so get, update and delete report a missing record identically.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, error};

use crate::domain::ports::{TodoCommand, TodoQuery, TodoRepository, TodoRepositoryError};
use crate::domain::{Error, NewTodo, Todo, TodoId, TodoPatch};

/// Message returned when a todo id does not resolve to a record.
pub const TODO_NOT_FOUND_MESSAGE: &str = "Todo not found";

/// Todo service backed by a [`TodoRepository`].
#[derive(Clone)]
pub struct TodoService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> TodoService<R> {
    /// Create a new service over the given repository and clock.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use backend::domain::TodoService;
    /// # use backend::outbound::persistence::{DbPool, DieselTodoRepository};
    /// # use mockable::DefaultClock;
    /// # fn example(pool: DbPool) {
    /// let service = TodoService::new(
    ///     Arc::new(DieselTodoRepository::new(pool)),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// # }
    /// ```
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

fn todo_not_found(id: TodoId) -> Error {
    Error::not_found(TODO_NOT_FOUND_MESSAGE).with_details(json!({ "id": id.as_i64() }))
}

fn map_repository_error(err: TodoRepositoryError) -> Error {
    // Storage detail stays in the logs; clients only see the category.
    match err {
        TodoRepositoryError::Connection { message } => {
            error!(%message, "todo storage unavailable");
            Error::service_unavailable("todo storage unavailable")
        }
        TodoRepositoryError::Query { message } => {
            error!(%message, "todo storage query failed");
            Error::internal("todo storage error")
        }
    }
}

impl<R> TodoService<R>
where
    R: TodoRepository,
{
    /// Resolve `id` to a stored todo or fail with a not-found error.
    async fn require_todo(&self, id: TodoId) -> Result<Todo, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| {
                debug!(todo_id = %id, "todo lookup missed");
                todo_not_found(id)
            })
    }
}

#[async_trait]
impl<R> TodoCommand for TodoService<R>
where
    R: TodoRepository,
{
    async fn create(&self, todo: NewTodo) -> Result<Todo, Error> {
        let created = self
            .repo
            .insert(&todo, self.clock.utc())
            .await
            .map_err(map_repository_error)?;
        debug!(todo_id = %created.id, "todo created");
        Ok(created)
    }

    async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo, Error> {
        if patch.is_empty() {
            return self.require_todo(id).await;
        }
        // Merged in the store so fields absent from the patch are never
        // rewritten from a stale read.
        let updated = self
            .repo
            .update(id, &patch)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| {
                debug!(todo_id = %id, "todo update missed");
                todo_not_found(id)
            })?;
        debug!(todo_id = %id, "todo updated");
        Ok(updated)
    }

    async fn delete(&self, id: TodoId) -> Result<(), Error> {
        self.require_todo(id).await?;
        let matched = self.repo.delete(id).await.map_err(map_repository_error)?;
        if !matched {
            return Err(todo_not_found(id));
        }
        debug!(todo_id = %id, "todo deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> TodoQuery for TodoService<R>
where
    R: TodoRepository,
{
    async fn list(&self) -> Result<Vec<Todo>, Error> {
        self.repo.list().await.map_err(map_repository_error)
    }

    async fn get(&self, id: TodoId) -> Result<Todo, Error> {
        self.require_todo(id).await
    }
}

#[cfg(test)]
#[path = "todo_service_tests.rs"]
mod tests;
