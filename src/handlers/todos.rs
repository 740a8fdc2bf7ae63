//! Todo handlers over the in-memory [`TodoList`](crate::service::TodoList).
//! `POST /todo` also accepts an HTML form submission.

use crate::error::AppError;
use crate::extractors::{JsonOrForm, Payload};
use crate::handlers::parse_id;
use crate::models::{Todo, TodoEnvelope, TodoItem, TodoItems};
use crate::response::{message_created, message_ok, MessageBody};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    post,
    path = "/todo",
    tag = "Todo",
    request_body(content = Todo, content_type = "application/json"),
    responses(
        (status = 201, description = "Todo added", body = MessageBody),
        (status = 409, description = "Id already in use")
    )
)]
pub async fn add_todo(
    State(state): State<AppState>,
    JsonOrForm(todo): JsonOrForm<Todo>,
) -> Result<impl IntoResponse, AppError> {
    let todo = state.todos.add(todo).await?;
    tracing::info!(id = ?todo.id, "todo added");
    Ok(message_created("Todo added successfully."))
}

#[utoipa::path(
    get,
    path = "/todo",
    tag = "Todo",
    responses((status = 200, description = "All todo items", body = TodoItems))
)]
pub async fn retrieve_todo(State(state): State<AppState>) -> impl IntoResponse {
    let todos = state
        .todos
        .all()
        .await
        .into_iter()
        .map(|t| TodoItem { item: t.item })
        .collect();
    (StatusCode::OK, Json(TodoItems { todos }))
}

#[utoipa::path(
    get,
    path = "/todo/{id}",
    tag = "Todo",
    params(("id" = i64, Path, description = "The ID of the todo to retrieve.")),
    responses(
        (status = 200, description = "The todo", body = TodoEnvelope),
        (status = 404, description = "No todo with that id")
    )
)]
pub async fn get_single_todo(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let todo = state.todos.get(parse_id(&id_str)?).await?;
    Ok((StatusCode::OK, Json(TodoEnvelope { todo })))
}

#[utoipa::path(
    put,
    path = "/todo/{id}",
    tag = "Todo",
    params(("id" = i64, Path, description = "The ID of the todo to be updated.")),
    request_body = TodoItem,
    responses(
        (status = 200, description = "Todo updated", body = MessageBody),
        (status = 404, description = "No todo with that id")
    )
)]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Payload(todo_data): Payload<TodoItem>,
) -> Result<impl IntoResponse, AppError> {
    state.todos.update(parse_id(&id_str)?, todo_data).await?;
    Ok(message_ok("Todo updated successfully."))
}

#[utoipa::path(
    delete,
    path = "/todo/{id}",
    tag = "Todo",
    params(("id" = i64, Path, description = "The ID of the todo to be deleted.")),
    responses(
        (status = 200, description = "Todo removed", body = MessageBody),
        (status = 404, description = "No todo with that id")
    )
)]
pub async fn delete_single_todo(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.todos.remove(parse_id(&id_str)?).await?;
    Ok(message_ok("Todo deleted successfully."))
}

#[utoipa::path(
    delete,
    path = "/todo",
    tag = "Todo",
    responses((status = 200, description = "All todos removed", body = MessageBody))
)]
pub async fn delete_all_todo(State(state): State<AppState>) -> impl IntoResponse {
    state.todos.clear().await;
    message_ok("Todos deleted successfully.")
}
