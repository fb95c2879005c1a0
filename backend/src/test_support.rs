//! Test utilities for the backend crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`). Only
//! compiled for tests or with the `test-support` feature.

use tempfile::TempDir;

use crate::outbound::persistence::{DbPool, PoolConfig, PoolError, SchemaError, ensure_schema};

/// Errors raised while provisioning a throwaway database.
#[derive(Debug, thiserror::Error)]
pub enum TempDatabaseError {
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[from] std::io::Error),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// SQLite database file in a private temporary directory with the schema
/// already applied.
///
/// The directory, and the database with it, is removed when the value drops,
/// so keep it alive for as long as the pool is in use.
///
/// ```rust,no_run
/// # async fn example() -> Result<(), backend::test_support::TempDatabaseError> {
/// use backend::test_support::TempDatabase;
///
/// let db = TempDatabase::new().await?;
/// let pool = db.pool().clone();
/// # let _ = pool;
/// # Ok(())
/// # }
/// ```
pub struct TempDatabase {
    pool: DbPool,
    _dir: TempDir,
}

impl TempDatabase {
    /// Create a fresh database file and run schema setup.
    ///
    /// # Errors
    ///
    /// Returns [`TempDatabaseError`] when the directory, pool or schema cannot
    /// be created.
    pub async fn new() -> Result<Self, TempDatabaseError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("todo.db");
        let config = PoolConfig::new(path.to_string_lossy().into_owned()).with_max_size(4);
        let pool = DbPool::new(config).await?;
        ensure_schema(&pool).await?;
        Ok(Self { pool, _dir: dir })
    }

    /// Borrow the pool bound to this database.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
