//! Todo aggregate and its value objects.
//!
//! A [`Todo`] is identified by a storage-assigned [`TodoId`], carries a
//! validated [`TodoTitle`], and records when it was created. Creation input is
//! modelled by [`NewTodo`]; partial updates by [`TodoPatch`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validation errors raised while constructing todo value objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    EmptyTitle,
    InvalidId,
}

impl fmt::Display for TodoValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::InvalidId => write!(f, "todo id must be an integer"),
        }
    }
}

impl std::error::Error for TodoValidationError {}

/// Storage-assigned todo identifier.
///
/// # Examples
/// ```
/// use backend::domain::TodoId;
///
/// let id: TodoId = "42".parse().expect("integer id");
/// assert_eq!(id.as_i64(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// Wrap a raw identifier read from storage or a request path.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw integer value.
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TodoId {
    type Err = TodoValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| TodoValidationError::InvalidId)
    }
}

/// Non-empty todo title.
///
/// The title is stored exactly as supplied; whitespace-only input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Validate and construct a title.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::TodoTitle;
    ///
    /// assert!(TodoTitle::new("Buy milk").is_ok());
    /// assert!(TodoTitle::new("  ").is_err());
    /// ```
    pub fn new(title: impl Into<String>) -> Result<Self, TodoValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }
        Ok(Self(title))
    }

    /// Borrow the title text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TodoTitle {
    type Error = TodoValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TodoTitle> for String {
    fn from(value: TodoTitle) -> Self {
        value.0
    }
}

/// A persisted todo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: TodoTitle,
    pub description: Option<String>,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Overwrite every field present in `patch`, leaving the rest untouched.
    ///
    /// `id` and `created_at` are never modified.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{Todo, TodoId, TodoPatch, TodoTitle};
    /// use chrono::Utc;
    ///
    /// let mut todo = Todo {
    ///     id: TodoId::new(1),
    ///     title: TodoTitle::new("Old").expect("title"),
    ///     description: Some("keep".to_owned()),
    ///     done: false,
    ///     created_at: Utc::now(),
    /// };
    /// todo.apply_patch(TodoPatch {
    ///     done: Some(true),
    ///     ..TodoPatch::default()
    /// });
    /// assert!(todo.done);
    /// assert_eq!(todo.description.as_deref(), Some("keep"));
    /// ```
    pub fn apply_patch(&mut self, patch: TodoPatch) {
        let TodoPatch {
            title,
            description,
            done,
        } = patch;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = Some(description);
        }
        if let Some(done) = done {
            self.done = done;
        }
    }
}

/// Creation input for a todo. The identifier and timestamp are assigned on
/// insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: TodoTitle,
    pub description: Option<String>,
    pub done: bool,
}

impl NewTodo {
    /// Build creation input with `done` defaulting to `false`.
    pub fn new(title: TodoTitle) -> Self {
        Self {
            title,
            description: None,
            done: false,
        }
    }

    /// Attach an optional description.
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Set the initial completion flag.
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}

/// Partial update for a todo.
///
/// Each field is either absent (`None`, leave the stored value alone) or
/// present with a value (`Some`, overwrite). Clearing a description is not
/// expressible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<TodoTitle>,
    pub description: Option<String>,
    pub done: Option<bool>,
}

impl TodoPatch {
    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.done.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn stored() -> Todo {
        Todo {
            id: TodoId::new(7),
            title: TodoTitle::new("Update Me").expect("valid title"),
            description: Some("Old desc".to_owned()),
            done: false,
            created_at: Utc::now(),
        }
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn title_rejects_blank_input(#[case] raw: &str) {
        assert_eq!(TodoTitle::new(raw), Err(TodoValidationError::EmptyTitle));
    }

    #[rstest]
    fn title_keeps_surrounding_whitespace() {
        let title = TodoTitle::new(" padded ").expect("non-blank title");
        assert_eq!(title.as_str(), " padded ");
    }

    #[rstest]
    #[case("1", Some(1))]
    #[case("-3", Some(-3))]
    #[case("abc", None)]
    #[case("1.5", None)]
    #[case("", None)]
    fn todo_id_parses_integers_only(#[case] raw: &str, #[case] expected: Option<i64>) {
        let parsed = raw.parse::<TodoId>().ok().map(TodoId::as_i64);
        assert_eq!(parsed, expected);
    }

    #[rstest]
    fn apply_patch_overwrites_present_fields_only(stored: Todo) {
        let mut todo = stored.clone();
        todo.apply_patch(TodoPatch {
            title: Some(TodoTitle::new("Updated Title").expect("valid title")),
            description: None,
            done: Some(true),
        });

        assert_eq!(todo.title.as_str(), "Updated Title");
        assert_eq!(todo.description.as_deref(), Some("Old desc"));
        assert!(todo.done);
        assert_eq!(todo.id, stored.id);
        assert_eq!(todo.created_at, stored.created_at);
    }

    #[rstest]
    fn empty_patch_is_a_no_op(stored: Todo) {
        let mut todo = stored.clone();
        let patch = TodoPatch::default();
        assert!(patch.is_empty());
        todo.apply_patch(patch);
        assert_eq!(todo, stored);
    }

    #[rstest]
    fn new_todo_defaults_to_not_done() {
        let new_todo = NewTodo::new(TodoTitle::new("Task").expect("valid title"));
        assert!(!new_todo.done);
        assert!(new_todo.description.is_none());
    }

    #[rstest]
    fn title_deserialisation_enforces_validation() {
        let result = serde_json::from_str::<TodoTitle>("\"\"");
        assert!(result.is_err());
    }
}
