//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the DDL in `schema_setup.rs` exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation.

diesel::table! {
    /// Todo items.
    ///
    /// `id` is an `AUTOINCREMENT` rowid, so identifiers are never reused after
    /// a delete.
    todos (id) {
        /// Primary key assigned by SQLite on insert.
        id -> BigInt,
        /// Non-blank title, stored exactly as supplied.
        title -> Text,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Completion flag.
        done -> Bool,
        /// Creation timestamp in UTC.
        created_at -> Timestamp,
    }
}
