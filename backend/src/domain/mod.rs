//! Domain primitives, services and ports.
//!
//! Purpose: Define the todo aggregate, the transport-agnostic error type and
//! the service that enforces existence and partial-update semantics. Adapters
//! in `inbound` and `outbound` depend on this module, never the reverse.
//!
//! Public surface:
//! - Error / ErrorCode — domain failure payload and stable identifier.
//! - Todo, TodoId, TodoTitle, NewTodo, TodoPatch — the todo model.
//! - TodoService — implementation of the `TodoCommand` and `TodoQuery` ports.

pub mod error;
pub mod ports;
pub mod todo;
pub mod todo_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::todo::{NewTodo, Todo, TodoId, TodoPatch, TodoTitle, TodoValidationError};
pub use self::todo_service::{TODO_NOT_FOUND_MESSAGE, TodoService};
