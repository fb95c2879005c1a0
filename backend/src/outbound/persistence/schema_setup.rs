//! Startup schema bootstrap for the todo store.
//!
//! The service owns a single table, so instead of shipping migrations it
//! issues an idempotent `CREATE TABLE IF NOT EXISTS` when the server starts.
//! Existing data is left untouched.

use diesel_async::RunQueryDsl;
use tracing::info;

use super::pool::{DbPool, PoolError};

const CREATE_TODOS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    done BOOLEAN NOT NULL DEFAULT 0,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// Errors raised while preparing the database schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// No connection could be checked out of the pool.
    #[error(transparent)]
    Pool(#[from] PoolError),
    /// The DDL statement failed.
    #[error("failed to create todos table: {0}")]
    Ddl(#[from] diesel::result::Error),
}

/// Create the `todos` table if it does not already exist.
///
/// # Errors
///
/// Returns [`SchemaError`] when the pool cannot hand out a connection or the
/// statement fails (for example, a read-only database file).
pub async fn ensure_schema(pool: &DbPool) -> Result<(), SchemaError> {
    let mut conn = pool.get().await?;
    diesel::sql_query(CREATE_TODOS_TABLE)
        .execute(&mut conn)
        .await?;
    info!("todos table ready");
    Ok(())
}
