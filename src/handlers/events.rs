//! Event CRUD handlers backed by [`EventService`].

use crate::error::AppError;
use crate::extractors::Payload;
use crate::handlers::parse_id;
use crate::models::{Event, EventUpdate};
use crate::response::{message_ok, MessageBody};
use crate::service::{ClearOutcome, EventService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

const EVENT_NOT_FOUND: &str = "Event with supplied ID does not exist";

#[utoipa::path(
    get,
    path = "/event/",
    tag = "Events",
    responses((status = 200, description = "All events", body = [Event]))
)]
pub async fn retrieve_all_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = EventService::list(&state.pool).await?;
    Ok((StatusCode::OK, Json(events)))
}

#[utoipa::path(
    get,
    path = "/event/{id}",
    tag = "Events",
    params(("id" = i64, Path, description = "Event id")),
    responses(
        (status = 200, description = "The event", body = Event),
        (status = 404, description = "No event with that id")
    )
)]
pub async fn retrieve_event(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let event = EventService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(EVENT_NOT_FOUND.into()))?;
    Ok((StatusCode::OK, Json(event)))
}

#[utoipa::path(
    post,
    path = "/event/new",
    tag = "Events",
    request_body = Event,
    responses(
        (status = 200, description = "Event stored", body = MessageBody),
        (status = 409, description = "Explicit id already in use"),
        (status = 422, description = "Invalid payload")
    )
)]
pub async fn create_event(
    State(state): State<AppState>,
    Payload(new_event): Payload<Event>,
) -> Result<impl IntoResponse, AppError> {
    let id = EventService::create(&state.pool, &new_event).await?;
    tracing::info!(id, title = %new_event.title, "event created");
    Ok(message_ok("Event created successfully"))
}

#[utoipa::path(
    put,
    path = "/event/edit/{id}",
    tag = "Events",
    params(("id" = i64, Path, description = "Event id")),
    request_body = EventUpdate,
    responses(
        (status = 200, description = "Updated event", body = Event),
        (status = 404, description = "No event with that id")
    )
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Payload(new_data): Payload<EventUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let event = EventService::update(&state.pool, id, new_data)
        .await?
        .ok_or_else(|| AppError::NotFound(EVENT_NOT_FOUND.into()))?;
    tracing::info!(id, "event updated");
    Ok((StatusCode::OK, Json(event)))
}

#[utoipa::path(
    delete,
    path = "/event/delete/{id}",
    tag = "Events",
    params(("id" = i64, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event removed", body = MessageBody),
        (status = 404, description = "No event with that id")
    )
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !EventService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(EVENT_NOT_FOUND.into()));
    }
    tracing::info!(id, "event deleted");
    Ok(message_ok("Event deleted successfully"))
}

#[utoipa::path(
    delete,
    path = "/event/",
    tag = "Events",
    responses((status = 200, description = "Table cleared, or nothing to clear", body = MessageBody))
)]
pub async fn delete_all_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    match EventService::delete_all(&state.pool).await? {
        ClearOutcome::NothingToDelete => Ok(message_ok("No events found to delete")),
        ClearOutcome::Deleted(count) => {
            tracing::info!(count, "all events deleted");
            Ok(message_ok("All events deleted successfully"))
        }
    }
}
