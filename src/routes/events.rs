//! Event routes. The collection is reachable with and without the trailing slash.

use crate::handlers::events::{
    create_event, delete_all_events, delete_event, retrieve_all_events, retrieve_event, update_event,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn event_routes(state: AppState) -> Router {
    Router::new()
        .route("/event", get(retrieve_all_events).delete(delete_all_events))
        .route("/event/", get(retrieve_all_events).delete(delete_all_events))
        .route("/event/new", post(create_event))
        .route("/event/edit/:id", put(update_event))
        .route("/event/delete/:id", delete(delete_event))
        .route("/event/:id", get(retrieve_event))
        .with_state(state)
}
