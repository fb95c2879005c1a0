//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{TodoCommand, TodoQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub todos: Arc<dyn TodoCommand>,
    pub todos_query: Arc<dyn TodoQuery>,
}

impl HttpState {
    /// Bundle the todo ports for handler injection.
    pub fn new(todos: Arc<dyn TodoCommand>, todos_query: Arc<dyn TodoQuery>) -> Self {
        Self { todos, todos_query }
    }

    /// Build state where a single service implements both todo ports.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use backend::domain::TodoService;
    /// # use backend::inbound::http::state::HttpState;
    /// # use backend::outbound::persistence::{DbPool, DieselTodoRepository};
    /// # use mockable::DefaultClock;
    /// # fn example(pool: DbPool) {
    /// let service = Arc::new(TodoService::new(
    ///     Arc::new(DieselTodoRepository::new(pool)),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::from_service(service);
    /// # let _ = state;
    /// # }
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: TodoCommand + TodoQuery + 'static,
    {
        Self {
            todos: service.clone(),
            todos_query: service,
        }
    }
}
