//! OpenAPI document for every route and schema model, served at `/openapi.json`.

use crate::handlers::{events, todos, users};
use crate::models::{Event, EventUpdate, Todo, TodoEnvelope, TodoItem, TodoItems, User, UserSignIn};
use crate::response::MessageBody;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Planner API", description = "Event planner with user sign-up and a todo list"),
    paths(
        events::retrieve_all_events,
        events::retrieve_event,
        events::create_event,
        events::update_event,
        events::delete_event,
        events::delete_all_events,
        users::sign_user_up,
        users::sign_user_in,
        todos::add_todo,
        todos::retrieve_todo,
        todos::get_single_todo,
        todos::update_todo,
        todos::delete_single_todo,
        todos::delete_all_todo,
    ),
    components(schemas(
        Event,
        EventUpdate,
        User,
        UserSignIn,
        Todo,
        TodoItem,
        TodoItems,
        TodoEnvelope,
        MessageBody
    )),
    tags(
        (name = "Events", description = "Database-backed event CRUD"),
        (name = "User", description = "Sign-up and sign-in"),
        (name = "Todo", description = "In-memory todo list")
    )
)]
pub struct ApiDoc;
