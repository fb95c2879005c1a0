//! Todo HTTP handlers.
//!
//! ```text
//! POST   /todos
//! GET    /todos
//! GET    /todos/{id}
//! PATCH  /todos/{id}
//! DELETE /todos/{id}
//! ```
//!
//! Handlers validate request bodies and path segments before calling the
//! domain ports, so invalid input never reaches storage.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewTodo, Todo, TodoPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error, parse_title, parse_todo_id};

const TITLE_FIELD: FieldName = FieldName::new("title");

/// Request payload for creating a todo.
///
/// `title` is modelled as optional so a missing field yields a structured
/// validation error instead of a generic deserialisation failure.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateTodoRequest {
    #[schema(example = "Buy milk")]
    pub title: Option<String>,
    #[schema(example = "Two litres, semi-skimmed")]
    pub description: Option<String>,
    /// Defaults to `false` when omitted.
    pub done: Option<bool>,
}

/// Request payload for partially updating a todo.
///
/// Absent and `null` fields both leave the stored value unchanged.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: Option<bool>,
}

/// Wire representation of a todo.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct TodoResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Buy milk")]
    pub title: String,
    pub description: Option<String>,
    pub done: bool,
    /// RFC 3339 creation timestamp in UTC.
    #[schema(example = "2025-03-14T09:26:53+00:00")]
    pub created_at: String,
}

impl From<Todo> for TodoResponse {
    fn from(value: Todo) -> Self {
        Self {
            id: value.id.as_i64(),
            title: value.title.into(),
            description: value.description,
            done: value.done,
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

fn parse_create_request(payload: CreateTodoRequest) -> Result<NewTodo, crate::domain::Error> {
    let title = payload
        .title
        .ok_or_else(|| missing_field_error(TITLE_FIELD))?;
    let title = parse_title(title, TITLE_FIELD)?;

    Ok(NewTodo::new(title)
        .with_description(payload.description)
        .with_done(payload.done.unwrap_or(false)))
}

fn parse_update_request(payload: UpdateTodoRequest) -> Result<TodoPatch, crate::domain::Error> {
    let title = payload
        .title
        .map(|title| parse_title(title, TITLE_FIELD))
        .transpose()?;

    Ok(TodoPatch {
        title,
        description: payload.description,
        done: payload.done,
    })
}

/// Create a todo.
#[utoipa::path(
    post,
    path = "/todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Created todo", body = TodoResponse),
        (status = 422, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "createTodo"
)]
#[post("/todos")]
pub async fn create_todo(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTodoRequest>,
) -> ApiResult<HttpResponse> {
    let new_todo = parse_create_request(payload.into_inner())?;
    let todo = state.todos.create(new_todo).await?;
    Ok(HttpResponse::Created().json(TodoResponse::from(todo)))
}

/// List every todo in ascending id order.
#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "All todos", body = [TodoResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "listTodos"
)]
#[get("/todos")]
pub async fn list_todos(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TodoResponse>>> {
    let todos = state.todos_query.list().await?;
    Ok(web::Json(
        todos.into_iter().map(TodoResponse::from).collect(),
    ))
}

/// Fetch one todo.
#[utoipa::path(
    get,
    path = "/todos/{id}",
    params(("id" = i64, Path, description = "Todo identifier")),
    responses(
        (status = 200, description = "Todo", body = TodoResponse),
        (status = 404, description = "Todo not found", body = ErrorSchema),
        (status = 422, description = "Non-integer id", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "getTodo"
)]
#[get("/todos/{id}")]
pub async fn get_todo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TodoResponse>> {
    let id = parse_todo_id(&path)?;
    let todo = state.todos_query.get(id).await?;
    Ok(web::Json(TodoResponse::from(todo)))
}

/// Update the fields present in the body, leaving the rest unchanged.
#[utoipa::path(
    patch,
    path = "/todos/{id}",
    params(("id" = i64, Path, description = "Todo identifier")),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Updated todo", body = TodoResponse),
        (status = 404, description = "Todo not found", body = ErrorSchema),
        (status = 422, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "updateTodo"
)]
#[patch("/todos/{id}")]
pub async fn update_todo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateTodoRequest>,
) -> ApiResult<web::Json<TodoResponse>> {
    let id = parse_todo_id(&path)?;
    let patch = parse_update_request(payload.into_inner())?;
    let todo = state.todos.update(id, patch).await?;
    Ok(web::Json(TodoResponse::from(todo)))
}

/// Delete a todo.
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(("id" = i64, Path, description = "Todo identifier")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 404, description = "Todo not found", body = ErrorSchema),
        (status = 422, description = "Non-integer id", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "deleteTodo"
)]
#[delete("/todos/{id}")]
pub async fn delete_todo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_todo_id(&path)?;
    state.todos.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "todos_tests.rs"]
mod tests;
