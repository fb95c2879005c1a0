//! SQLite-backed `TodoRepository` implementation using Diesel ORM.
//!
//! Each method checks out one pooled connection and issues exactly one
//! statement, so every operation is atomic with respect to the others.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{TodoRepository, TodoRepositoryError};
use crate::domain::{NewTodo, Todo, TodoId, TodoPatch, TodoTitle};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewTodoRow, TodoChangeset, TodoRow};
use super::pool::{DbPool, PoolError};
use super::schema::todos;

/// Diesel-backed implementation of the `TodoRepository` port.
#[derive(Clone)]
pub struct DieselTodoRepository {
    pool: DbPool,
}

impl DieselTodoRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TodoRepositoryError {
    map_basic_pool_error(error, TodoRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> TodoRepositoryError {
    map_basic_diesel_error(
        error,
        TodoRepositoryError::query,
        TodoRepositoryError::connection,
    )
}

/// Convert a database row to a domain todo.
///
/// A blank title can only appear if the table was edited outside this
/// service; it is reported as a query failure rather than served.
fn row_to_todo(row: TodoRow) -> Result<Todo, TodoRepositoryError> {
    let title = TodoTitle::new(row.title).map_err(|err| {
        warn!(todo_id = row.id, %err, "stored todo failed validation");
        TodoRepositoryError::query("stored todo has an invalid title")
    })?;

    Ok(Todo {
        id: TodoId::new(row.id),
        title,
        description: row.description,
        done: row.done,
        created_at: row.created_at.and_utc(),
    })
}

#[async_trait]
impl TodoRepository for DieselTodoRepository {
    async fn insert(
        &self,
        todo: &NewTodo,
        created_at: DateTime<Utc>,
    ) -> Result<Todo, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewTodoRow {
            title: todo.title.as_str(),
            description: todo.description.as_deref(),
            done: todo.done,
            created_at: created_at.naive_utc(),
        };

        let row: TodoRow = diesel::insert_into(todos::table)
            .values(&new_row)
            .returning(TodoRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_todo(row)
    }

    async fn list(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TodoRow> = todos::table
            .select(TodoRow::as_select())
            .order(todos::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_todo).collect()
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TodoRow> = todos::table
            .find(id.as_i64())
            .select(TodoRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_todo).transpose()
    }

    async fn update(
        &self,
        id: TodoId,
        patch: &TodoPatch,
    ) -> Result<Option<Todo>, TodoRepositoryError> {
        if patch.is_empty() {
            // Diesel rejects an UPDATE with an empty SET clause.
            return self.find_by_id(id).await;
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = TodoChangeset {
            title: patch.title.as_ref().map(TodoTitle::as_str),
            description: patch.description.as_deref(),
            done: patch.done,
        };

        let row: Option<TodoRow> = diesel::update(todos::table.find(id.as_i64()))
            .set(&changes)
            .returning(TodoRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_todo).transpose()
    }

    async fn delete(&self, id: TodoId) -> Result<bool, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(todos::table.find(id.as_i64()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
