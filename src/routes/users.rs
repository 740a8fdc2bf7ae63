use crate::handlers::users::{sign_user_in, sign_user_up};
use crate::state::AppState;
use axum::{routing::post, Router};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/user/signup", post(sign_user_up))
        .route("/user/signin", post(sign_user_in))
        .with_state(state)
}
