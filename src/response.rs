//! Standard response helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Fixed confirmation returned by write operations.
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({"message": "Event created successfully"}))]
pub struct MessageBody {
    pub message: String,
}

pub fn message_ok(message: &str) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message: message.to_string(),
        }),
    )
}

pub fn message_created(message: &str) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::CREATED,
        Json(MessageBody {
            message: message.to_string(),
        }),
    )
}
