//! Routers for each resource plus [`app`], which assembles them with the middleware stack.

mod common;
mod docs;
mod events;
mod todos;
mod users;

pub use common::common_routes;
pub use docs::docs_routes;
pub use events::event_routes;
pub use todos::todo_routes;
pub use users::user_routes;

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application router: every resource, request tracing, CORS, and the body size limit.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(docs_routes())
        .merge(event_routes(state.clone()))
        .merge(user_routes(state.clone()))
        .merge(todo_routes(state))
        // axum's extractors cap bodies at 2 MiB on their own; the configured limit replaces that cap
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
