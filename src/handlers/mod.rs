//! HTTP handlers for events, users, and todos.

pub mod events;
pub mod todos;
pub mod users;

use crate::error::AppError;

/// Parse an integer primary key from a path segment.
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid id: {}", id_str)))
}
