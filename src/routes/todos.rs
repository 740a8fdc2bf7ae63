use crate::handlers::todos::{
    add_todo, delete_all_todo, delete_single_todo, get_single_todo, retrieve_todo, update_todo,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn todo_routes(state: AppState) -> Router {
    Router::new()
        .route("/todo", get(retrieve_todo).post(add_todo).delete(delete_all_todo))
        .route(
            "/todo/:id",
            get(get_single_todo).put(update_todo).delete(delete_single_todo),
        )
        .with_state(state)
}
