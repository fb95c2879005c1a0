//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper produces an `invalid_request` domain error whose details carry
//! the offending `field` and a machine-readable `code`, so clients can react
//! without parsing messages.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, TodoId, TodoTitle};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    EmptyTitle,
    InvalidId,
    InvalidJson,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::EmptyTitle => "empty_title",
            ErrorCode::InvalidId => "invalid_id",
            ErrorCode::InvalidJson => "invalid_json",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn empty_title_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must not be empty"))
        .with_code(ErrorCode::EmptyTitle)
}

pub(crate) fn invalid_id_error(value: &str) -> Error {
    ValidationError::new("id", "id must be an integer").with_value(ErrorCode::InvalidId, value)
}

/// Validate a title, mapping blank input to an `empty_title` error.
pub(crate) fn parse_title(value: String, field: FieldName) -> Result<TodoTitle, Error> {
    TodoTitle::new(value).map_err(|_| empty_title_error(field))
}

/// Parse a `{id}` path segment.
pub(crate) fn parse_todo_id(value: &str) -> Result<TodoId, Error> {
    value.parse().map_err(|_| invalid_id_error(value))
}

fn invalid_json_error(err: &JsonPayloadError) -> Error {
    debug!(error = %err, "rejected request body");
    Error::invalid_request("request body is not valid JSON for this endpoint").with_details(
        json!({
            "field": "body",
            "reason": err.to_string(),
            "code": ErrorCode::InvalidJson.as_str(),
        }),
    )
}

/// Map a JSON extractor failure to the response sent to the client.
///
/// Oversized bodies keep actix's own `413 Payload Too Large`; every other
/// failure becomes an `invalid_json` validation error.
fn json_error_response(err: JsonPayloadError) -> actix_web::Error {
    match err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            debug!(error = %err, "rejected oversized request body");
            err.into()
        }
        other => invalid_json_error(&other).into(),
    }
}

/// JSON extractor configuration that reports body errors as `invalid_request`.
///
/// Malformed JSON, wrong field types and a missing JSON content type all map
/// to the same 422 envelope as field-level validation failures. Bodies over
/// the size limit are rejected with 413.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| json_error_response(err))
}
