use crate::openapi::ApiDoc;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /openapi.json.
pub fn docs_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}
