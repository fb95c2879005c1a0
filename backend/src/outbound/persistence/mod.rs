//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides the concrete implementation of the domain's todo
//! repository port, backed by SQLite via Diesel with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: Repository implementations only translate between
//!   Diesel models and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are internal implementation details, never
//!   exposed to the domain layer.
//! - **Strongly typed errors**: All database errors are mapped to domain
//!   persistence error types.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselTodoRepository, PoolConfig, ensure_schema};
//!
//! let pool = DbPool::new(PoolConfig::new("todo.db")).await?;
//! ensure_schema(&pool).await?;
//! let repo = DieselTodoRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_todo_repository;
mod models;
mod pool;
mod schema;
mod schema_setup;

pub use diesel_todo_repository::DieselTodoRepository;
pub use pool::{DbConnection, DbPool, PoolConfig, PoolError};
pub use schema_setup::{SchemaError, ensure_schema};
